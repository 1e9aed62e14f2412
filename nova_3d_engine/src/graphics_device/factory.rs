/// RenderObjectFactory - the stateful render-object factory
///
/// Wraps a backend GraphicsDevice and deduplicates fixed-function state
/// objects by descriptor: the first request for a given descriptor compiles
/// a backend object and pools it, every later request with an equal
/// descriptor returns the same shared handle. Pool entries persist for the
/// lifetime of the factory (no eviction).
///
/// Lookup-or-insert must be atomic to preserve the one-object-per-descriptor
/// invariant, so all pooling methods take `&mut self`; shared use goes
/// through `Arc<Mutex<RenderObjectFactory>>` (see [`Engine`](crate::nova3d::Engine)).

use std::sync::Arc;
use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::graphics_device::{
    GraphicsDevice, RenderContext,
    Texture, TextureDesc,
    RasterizerState, RasterizerStateDesc,
    DepthStencilState, DepthStencilStateDesc,
    BlendState, BlendStateDesc,
    SamplerState, SamplerStateDesc,
    StateCategory,
};

/// Number of pooled state objects per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Entries in the rasterizer pool
    pub rasterizer: usize,
    /// Entries in the depth/stencil pool
    pub depth_stencil: usize,
    /// Entries in the blend pool
    pub blend: usize,
    /// Entries in the sampler pool
    pub sampler: usize,
}

impl PoolStats {
    /// Total entries across all four pools
    pub fn total(&self) -> usize {
        self.rasterizer + self.depth_stencil + self.blend + self.sampler
    }
}

/// Stateful render-object factory with per-category state pools
pub struct RenderObjectFactory {
    device: Box<dyn GraphicsDevice>,

    /// Backend render context, instantiated lazily on first use
    render_context: Option<Arc<dyn RenderContext>>,

    rasterizer_pool: FxHashMap<RasterizerStateDesc, Arc<dyn RasterizerState>>,
    depth_stencil_pool: FxHashMap<DepthStencilStateDesc, Arc<dyn DepthStencilState>>,
    blend_pool: FxHashMap<BlendStateDesc, Arc<dyn BlendState>>,
    sampler_pool: FxHashMap<SamplerStateDesc, Arc<dyn SamplerState>>,
}

impl std::fmt::Debug for RenderObjectFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderObjectFactory").finish_non_exhaustive()
    }
}

impl RenderObjectFactory {
    /// Create a factory owning the given device, with empty pools
    pub fn new(device: Box<dyn GraphicsDevice>) -> Self {
        crate::engine_debug!(
            "nova3d::RenderObjectFactory",
            "Factory created for '{}' device", device.name()
        );
        Self {
            device,
            render_context: None,
            rasterizer_pool: FxHashMap::default(),
            depth_stencil_pool: FxHashMap::default(),
            blend_pool: FxHashMap::default(),
            sampler_pool: FxHashMap::default(),
        }
    }

    /// Name of the underlying backend device
    pub fn device_name(&self) -> &str {
        self.device.name()
    }

    // ===== STATE POOLS =====

    /// Get the canonical rasterizer state object for a descriptor
    ///
    /// Returns the pooled handle if one exists, otherwise compiles a new
    /// backend object and pools it. On backend failure the pool is left
    /// unchanged and the factory stays usable.
    pub fn rasterizer_state(&mut self, desc: &RasterizerStateDesc) -> Result<Arc<dyn RasterizerState>> {
        if let Some(state) = self.rasterizer_pool.get(desc) {
            return Ok(Arc::clone(state));
        }
        let state = self.device.create_rasterizer_state(desc)?;
        self.rasterizer_pool.insert(*desc, Arc::clone(&state));
        Self::log_pool_insert(StateCategory::Rasterizer, self.rasterizer_pool.len());
        Ok(state)
    }

    /// Get the canonical depth/stencil state object for a descriptor
    pub fn depth_stencil_state(&mut self, desc: &DepthStencilStateDesc) -> Result<Arc<dyn DepthStencilState>> {
        if let Some(state) = self.depth_stencil_pool.get(desc) {
            return Ok(Arc::clone(state));
        }
        let state = self.device.create_depth_stencil_state(desc)?;
        self.depth_stencil_pool.insert(*desc, Arc::clone(&state));
        Self::log_pool_insert(StateCategory::DepthStencil, self.depth_stencil_pool.len());
        Ok(state)
    }

    /// Get the canonical blend state object for a descriptor
    pub fn blend_state(&mut self, desc: &BlendStateDesc) -> Result<Arc<dyn BlendState>> {
        if let Some(state) = self.blend_pool.get(desc) {
            return Ok(Arc::clone(state));
        }
        let state = self.device.create_blend_state(desc)?;
        self.blend_pool.insert(*desc, Arc::clone(&state));
        Self::log_pool_insert(StateCategory::Blend, self.blend_pool.len());
        Ok(state)
    }

    /// Get the canonical sampler state object for a descriptor
    pub fn sampler_state(&mut self, desc: &SamplerStateDesc) -> Result<Arc<dyn SamplerState>> {
        if let Some(state) = self.sampler_pool.get(desc) {
            return Ok(Arc::clone(state));
        }
        let state = self.device.create_sampler_state(desc)?;
        self.sampler_pool.insert(*desc, Arc::clone(&state));
        Self::log_pool_insert(StateCategory::Sampler, self.sampler_pool.len());
        Ok(state)
    }

    fn log_pool_insert(category: StateCategory, pool_len: usize) {
        crate::engine_trace!(
            "nova3d::RenderObjectFactory",
            "Compiled {:?} state ({} pooled)", category, pool_len
        );
    }

    // ===== NON-POOLED OBJECTS =====

    /// Create a 2D texture
    ///
    /// Textures are not deduplicated; every call creates a new object.
    pub fn create_texture_2d(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        self.device.create_texture_2d(desc)
    }

    /// Get the backend render context, instantiating it on first call
    pub fn render_context(&mut self) -> Result<Arc<dyn RenderContext>> {
        if let Some(ctx) = &self.render_context {
            return Ok(Arc::clone(ctx));
        }
        let ctx = self.device.create_render_context()?;
        self.render_context = Some(Arc::clone(&ctx));
        crate::engine_debug!(
            "nova3d::RenderObjectFactory",
            "Render context instantiated for '{}' device", self.device.name()
        );
        Ok(ctx)
    }

    // ===== STATISTICS =====

    /// Current entry counts of the four state pools
    pub fn pool_stats(&self) -> PoolStats {
        PoolStats {
            rasterizer: self.rasterizer_pool.len(),
            depth_stencil: self.depth_stencil_pool.len(),
            blend: self.blend_pool.len(),
            sampler: self.sampler_pool.len(),
        }
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
