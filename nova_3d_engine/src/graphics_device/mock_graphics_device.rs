/// Mock GraphicsDevice for unit tests (no backend required)
///
/// Records every descriptor the factory hands to the backend, so tests can
/// verify how many times each kind of object was actually compiled, and can
/// be told to fail the next creation to exercise error paths.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::graphics_device::{
    GraphicsDevice, RenderContext,
    Texture, TextureDesc, TextureInfo,
    RasterizerState, RasterizerStateDesc,
    DepthStencilState, DepthStencilStateDesc,
    BlendState, BlendStateDesc,
    SamplerState, SamplerStateDesc,
};

// ============================================================================
// Mock state objects
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockRasterizerState {
    pub desc: RasterizerStateDesc,
}

#[cfg(test)]
impl RasterizerState for MockRasterizerState {
    fn desc(&self) -> &RasterizerStateDesc {
        &self.desc
    }
}

#[cfg(test)]
#[derive(Debug)]
pub struct MockDepthStencilState {
    pub desc: DepthStencilStateDesc,
}

#[cfg(test)]
impl DepthStencilState for MockDepthStencilState {
    fn desc(&self) -> &DepthStencilStateDesc {
        &self.desc
    }
}

#[cfg(test)]
#[derive(Debug)]
pub struct MockBlendState {
    pub desc: BlendStateDesc,
}

#[cfg(test)]
impl BlendState for MockBlendState {
    fn desc(&self) -> &BlendStateDesc {
        &self.desc
    }
}

#[cfg(test)]
#[derive(Debug)]
pub struct MockSamplerState {
    pub desc: SamplerStateDesc,
}

#[cfg(test)]
impl SamplerState for MockSamplerState {
    fn desc(&self) -> &SamplerStateDesc {
        &self.desc
    }
}

// ============================================================================
// Mock texture
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
}

#[cfg(test)]
impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock render context
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockRenderContext;

#[cfg(test)]
impl RenderContext for MockRenderContext {}

// ============================================================================
// Mock graphics device
// ============================================================================

/// Mock device that records created objects without a real backend
///
/// Clones share the recorders, so a clone kept by the test observes the
/// calls made through the instance owned by the factory.
#[cfg(test)]
#[derive(Clone)]
pub struct MockGraphicsDevice {
    /// Descriptors of every rasterizer state the backend compiled
    pub created_rasterizer: Arc<Mutex<Vec<RasterizerStateDesc>>>,
    /// Descriptors of every depth/stencil state the backend compiled
    pub created_depth_stencil: Arc<Mutex<Vec<DepthStencilStateDesc>>>,
    /// Descriptors of every blend state the backend compiled
    pub created_blend: Arc<Mutex<Vec<BlendStateDesc>>>,
    /// Descriptors of every sampler state the backend compiled
    pub created_sampler: Arc<Mutex<Vec<SamplerStateDesc>>>,
    /// Dimensions of every texture the backend created
    pub created_textures: Arc<Mutex<Vec<(u32, u32)>>>,
    /// Number of render contexts instantiated
    pub contexts_created: Arc<Mutex<u32>>,
    /// When set, the next create_* call fails and clears the flag
    pub fail_next: Arc<Mutex<bool>>,
}

#[cfg(test)]
impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            created_rasterizer: Arc::new(Mutex::new(Vec::new())),
            created_depth_stencil: Arc::new(Mutex::new(Vec::new())),
            created_blend: Arc::new(Mutex::new(Vec::new())),
            created_sampler: Arc::new(Mutex::new(Vec::new())),
            created_textures: Arc::new(Mutex::new(Vec::new())),
            contexts_created: Arc::new(Mutex::new(0)),
            fail_next: Arc::new(Mutex::new(false)),
        }
    }

    /// Make the next create_* call fail with a creation error
    pub fn fail_next_creation(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    /// Returns true (and clears the flag) when the next call should fail
    fn take_fail_flag(&self) -> bool {
        let mut flag = self.fail_next.lock().unwrap();
        std::mem::take(&mut *flag)
    }
}

#[cfg(test)]
impl GraphicsDevice for MockGraphicsDevice {
    fn create_texture_2d(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if self.take_fail_flag() {
            return Err(Error::TextureCreation("mock device was told to fail".to_string()));
        }
        self.created_textures.lock().unwrap().push((desc.width, desc.height));
        let info = TextureInfo {
            width: desc.width,
            height: desc.height,
            format: desc.format,
            array_layers: desc.array_layers,
            mip_levels: desc.resolved_mip_levels(),
            sample_count: desc.sample_count,
            access: desc.access,
        };
        Ok(Arc::new(MockTexture { info }))
    }

    fn create_rasterizer_state(&mut self, desc: &RasterizerStateDesc) -> Result<Arc<dyn RasterizerState>> {
        if self.take_fail_flag() {
            return Err(Error::StateCreation("mock device was told to fail".to_string()));
        }
        self.created_rasterizer.lock().unwrap().push(*desc);
        Ok(Arc::new(MockRasterizerState { desc: *desc }))
    }

    fn create_depth_stencil_state(&mut self, desc: &DepthStencilStateDesc) -> Result<Arc<dyn DepthStencilState>> {
        if self.take_fail_flag() {
            return Err(Error::StateCreation("mock device was told to fail".to_string()));
        }
        self.created_depth_stencil.lock().unwrap().push(*desc);
        Ok(Arc::new(MockDepthStencilState { desc: *desc }))
    }

    fn create_blend_state(&mut self, desc: &BlendStateDesc) -> Result<Arc<dyn BlendState>> {
        if self.take_fail_flag() {
            return Err(Error::StateCreation("mock device was told to fail".to_string()));
        }
        self.created_blend.lock().unwrap().push(*desc);
        Ok(Arc::new(MockBlendState { desc: *desc }))
    }

    fn create_sampler_state(&mut self, desc: &SamplerStateDesc) -> Result<Arc<dyn SamplerState>> {
        if self.take_fail_flag() {
            return Err(Error::StateCreation("mock device was told to fail".to_string()));
        }
        self.created_sampler.lock().unwrap().push(*desc);
        Ok(Arc::new(MockSamplerState { desc: *desc }))
    }

    fn create_render_context(&mut self) -> Result<Arc<dyn RenderContext>> {
        if self.take_fail_flag() {
            return Err(Error::BackendError("mock device was told to fail".to_string()));
        }
        *self.contexts_created.lock().unwrap() += 1;
        Ok(Arc::new(MockRenderContext))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
