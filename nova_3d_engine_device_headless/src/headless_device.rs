/// HeadlessGraphicsDevice - CPU-only GraphicsDevice implementation
///
/// Validates descriptors with the same rules a GPU backend would apply and
/// allocates texture storage in system memory. No GPU, window system, or
/// graphics driver is touched.

use std::sync::Arc;

use nova_3d_engine::{engine_debug, engine_info, engine_trace};
use nova_3d_engine::nova3d::Result;
use nova_3d_engine::nova3d::render::{
    Config, GraphicsDevice, RenderContext,
    Texture, TextureDesc,
    RasterizerState, RasterizerStateDesc,
    DepthStencilState, DepthStencilStateDesc,
    BlendState, BlendStateDesc,
    SamplerState, SamplerStateDesc,
};

use crate::headless_state::{
    HeadlessRasterizerState, HeadlessDepthStencilState, HeadlessBlendState, HeadlessSamplerState,
};
use crate::headless_texture::HeadlessTexture;

const LOG_SOURCE: &str = "nova3d::headless::Device";

/// Render context of the headless backend
///
/// Opaque placeholder; the headless backend issues no commands.
#[derive(Debug)]
pub struct HeadlessRenderContext;

impl RenderContext for HeadlessRenderContext {}

/// CPU-only graphics device
///
/// # Example
///
/// ```
/// use nova_3d_engine::nova3d::render::{Config, RenderObjectFactory, RasterizerStateDesc};
/// use nova_3d_engine_device_headless::HeadlessGraphicsDevice;
///
/// let device = HeadlessGraphicsDevice::new(Config::default());
/// let mut factory = RenderObjectFactory::new(Box::new(device));
///
/// let state = factory.rasterizer_state(&RasterizerStateDesc::default())?;
/// # Ok::<(), nova_3d_engine::nova3d::Error>(())
/// ```
pub struct HeadlessGraphicsDevice {
    config: Config,
    /// Total system memory allocated for textures over the device lifetime
    allocated_bytes: u64,
}

impl HeadlessGraphicsDevice {
    /// Create a headless device with the given configuration
    pub fn new(config: Config) -> Self {
        engine_info!(
            LOG_SOURCE,
            "Headless device created for '{}' (validation: {})",
            config.app_name, config.enable_validation
        );
        Self {
            config,
            allocated_bytes: 0,
        }
    }

    /// The configuration this device was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Total texture bytes allocated over the device lifetime
    pub fn allocated_bytes(&self) -> u64 {
        self.allocated_bytes
    }
}

impl GraphicsDevice for HeadlessGraphicsDevice {
    fn create_texture_2d(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        let width = desc.width;
        let height = desc.height;
        let texture = HeadlessTexture::new(desc)?;
        self.allocated_bytes += texture.byte_size();
        engine_debug!(
            LOG_SOURCE,
            "Texture {}x{} allocated ({} bytes, {} total)",
            width, height, texture.byte_size(), self.allocated_bytes
        );
        Ok(Arc::new(texture))
    }

    fn create_rasterizer_state(&mut self, desc: &RasterizerStateDesc) -> Result<Arc<dyn RasterizerState>> {
        let state = HeadlessRasterizerState::new(*desc)?;
        engine_trace!(LOG_SOURCE, "Rasterizer state compiled: {:?}", desc);
        Ok(Arc::new(state))
    }

    fn create_depth_stencil_state(&mut self, desc: &DepthStencilStateDesc) -> Result<Arc<dyn DepthStencilState>> {
        let state = HeadlessDepthStencilState::new(*desc)?;
        engine_trace!(LOG_SOURCE, "Depth/stencil state compiled: {:?}", desc);
        Ok(Arc::new(state))
    }

    fn create_blend_state(&mut self, desc: &BlendStateDesc) -> Result<Arc<dyn BlendState>> {
        let state = HeadlessBlendState::new(*desc)?;
        engine_trace!(LOG_SOURCE, "Blend state compiled: {:?}", desc);
        Ok(Arc::new(state))
    }

    fn create_sampler_state(&mut self, desc: &SamplerStateDesc) -> Result<Arc<dyn SamplerState>> {
        let state = HeadlessSamplerState::new(*desc)?;
        engine_trace!(LOG_SOURCE, "Sampler state compiled: {:?}", desc);
        Ok(Arc::new(state))
    }

    fn create_render_context(&mut self) -> Result<Arc<dyn RenderContext>> {
        engine_debug!(LOG_SOURCE, "Render context instantiated");
        Ok(Arc::new(HeadlessRenderContext))
    }

    fn name(&self) -> &str {
        "headless"
    }
}
