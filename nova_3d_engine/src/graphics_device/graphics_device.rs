/// GraphicsDevice trait - backend object-creation interface

use std::sync::Arc;

use crate::error::Result;
use crate::graphics_device::{
    Texture, TextureDesc,
    RasterizerState, RasterizerStateDesc,
    DepthStencilState, DepthStencilStateDesc,
    BlendState, BlendStateDesc,
    SamplerState, SamplerStateDesc,
};

/// Device configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable validation/debug layers
    pub enable_validation: bool,
    /// Application name
    pub app_name: String,
    /// Application version (major, minor, patch)
    pub app_version: (u32, u32, u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_validation: cfg!(debug_assertions),
            app_name: "Nova3D Application".to_string(),
            app_version: (1, 0, 0),
        }
    }
}

/// Render context trait
///
/// The backend's command-issuing collaborator, instantiated lazily by the
/// factory on first use. Implemented by backend-specific types.
pub trait RenderContext: Send + Sync {
    // No public methods for now, the context is an opaque collaborator
}

/// Graphics device trait
///
/// The backend's object-creation interface. Implemented by backend crates
/// (e.g., HeadlessGraphicsDevice). Callers normally go through
/// [`RenderObjectFactory`](crate::graphics_device::RenderObjectFactory),
/// which deduplicates state objects; calling the `create_*_state` hooks
/// directly bypasses the pools and always compiles a fresh object.
pub trait GraphicsDevice: Send + Sync {
    /// Create a 2D texture
    ///
    /// # Arguments
    ///
    /// * `desc` - Texture descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created texture
    ///
    /// # Errors
    ///
    /// `TextureCreation` if the descriptor is rejected or allocation fails
    fn create_texture_2d(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Compile a rasterizer state object from a descriptor
    fn create_rasterizer_state(&mut self, desc: &RasterizerStateDesc) -> Result<Arc<dyn RasterizerState>>;

    /// Compile a depth/stencil state object from a descriptor
    fn create_depth_stencil_state(&mut self, desc: &DepthStencilStateDesc) -> Result<Arc<dyn DepthStencilState>>;

    /// Compile a blend state object from a descriptor
    fn create_blend_state(&mut self, desc: &BlendStateDesc) -> Result<Arc<dyn BlendState>>;

    /// Compile a sampler state object from a descriptor
    fn create_sampler_state(&mut self, desc: &SamplerStateDesc) -> Result<Arc<dyn SamplerState>>;

    /// Instantiate the backend's render context
    ///
    /// Called at most once per factory; the factory caches the result.
    fn create_render_context(&mut self) -> Result<Arc<dyn RenderContext>>;

    /// Backend name (e.g., "headless", "vulkan")
    fn name(&self) -> &str;
}
