/// Headless state objects - descriptor validation without a GPU
///
/// Each `validate_*` function applies the rules a real backend would reject
/// at pipeline-creation time, so descriptor mistakes surface in headless
/// tests instead of on target hardware.

use nova_3d_engine::engine_bail;
use nova_3d_engine::nova3d::Result;
use nova_3d_engine::nova3d::render::{
    RasterizerState, RasterizerStateDesc,
    DepthStencilState, DepthStencilStateDesc,
    BlendState, BlendStateDesc,
    SamplerState, SamplerStateDesc,
    BlendFactor, FilterMode,
};

const LOG_SOURCE: &str = "nova3d::headless::State";

/// Highest anisotropy level the headless backend accepts
pub(crate) const MAX_ANISOTROPY: u8 = 16;

// ============================================================================
// VALIDATION
// ============================================================================

pub(crate) fn validate_rasterizer(desc: &RasterizerStateDesc) -> Result<()> {
    if let Some(bias) = &desc.depth_bias {
        if !bias.constant_factor.is_finite()
            || !bias.slope_factor.is_finite()
            || !bias.clamp.is_finite()
        {
            engine_bail!(
                StateCreation, LOG_SOURCE,
                "depth bias fields must be finite (got constant={}, slope={}, clamp={})",
                bias.constant_factor, bias.slope_factor, bias.clamp
            );
        }
    }
    Ok(())
}

pub(crate) fn validate_depth_stencil(desc: &DepthStencilStateDesc) -> Result<()> {
    if desc.depth_write_enable && !desc.depth_test_enable {
        engine_bail!(
            StateCreation, LOG_SOURCE,
            "depth_write_enable requires depth_test_enable"
        );
    }
    Ok(())
}

pub(crate) fn validate_blend(desc: &BlendStateDesc) -> Result<()> {
    // SrcAlphaSaturate is only defined as a source factor
    if desc.blend_enable
        && (desc.dst_color_factor == BlendFactor::SrcAlphaSaturate
            || desc.dst_alpha_factor == BlendFactor::SrcAlphaSaturate)
    {
        engine_bail!(
            StateCreation, LOG_SOURCE,
            "SrcAlphaSaturate is not a valid destination blend factor"
        );
    }
    Ok(())
}

pub(crate) fn validate_sampler(desc: &SamplerStateDesc) -> Result<()> {
    if desc.max_anisotropy == 0 || desc.max_anisotropy > MAX_ANISOTROPY {
        engine_bail!(
            StateCreation, LOG_SOURCE,
            "max_anisotropy must be in 1..={} (got {})", MAX_ANISOTROPY, desc.max_anisotropy
        );
    }
    if desc.max_anisotropy > 1
        && (desc.mag_filter == FilterMode::Nearest || desc.min_filter == FilterMode::Nearest)
    {
        engine_bail!(
            StateCreation, LOG_SOURCE,
            "anisotropic filtering requires Linear mag/min filters"
        );
    }
    if !desc.mip_lod_bias.is_finite() || !desc.min_lod.is_finite() || !desc.max_lod.is_finite() {
        engine_bail!(
            StateCreation, LOG_SOURCE,
            "LOD fields must be finite (got bias={}, min={}, max={})",
            desc.mip_lod_bias, desc.min_lod, desc.max_lod
        );
    }
    if desc.min_lod > desc.max_lod {
        engine_bail!(
            StateCreation, LOG_SOURCE,
            "min_lod ({}) must not exceed max_lod ({})", desc.min_lod, desc.max_lod
        );
    }
    Ok(())
}

// ============================================================================
// STATE OBJECTS
// ============================================================================

/// Headless rasterizer state - a validated descriptor snapshot
#[derive(Debug)]
pub struct HeadlessRasterizerState {
    desc: RasterizerStateDesc,
}

impl HeadlessRasterizerState {
    pub(crate) fn new(desc: RasterizerStateDesc) -> Result<Self> {
        validate_rasterizer(&desc)?;
        Ok(Self { desc })
    }
}

impl RasterizerState for HeadlessRasterizerState {
    fn desc(&self) -> &RasterizerStateDesc {
        &self.desc
    }
}

/// Headless depth/stencil state
#[derive(Debug)]
pub struct HeadlessDepthStencilState {
    desc: DepthStencilStateDesc,
}

impl HeadlessDepthStencilState {
    pub(crate) fn new(desc: DepthStencilStateDesc) -> Result<Self> {
        validate_depth_stencil(&desc)?;
        Ok(Self { desc })
    }
}

impl DepthStencilState for HeadlessDepthStencilState {
    fn desc(&self) -> &DepthStencilStateDesc {
        &self.desc
    }
}

/// Headless blend state
#[derive(Debug)]
pub struct HeadlessBlendState {
    desc: BlendStateDesc,
}

impl HeadlessBlendState {
    pub(crate) fn new(desc: BlendStateDesc) -> Result<Self> {
        validate_blend(&desc)?;
        Ok(Self { desc })
    }
}

impl BlendState for HeadlessBlendState {
    fn desc(&self) -> &BlendStateDesc {
        &self.desc
    }
}

/// Headless sampler state
#[derive(Debug)]
pub struct HeadlessSamplerState {
    desc: SamplerStateDesc,
}

impl HeadlessSamplerState {
    pub(crate) fn new(desc: SamplerStateDesc) -> Result<Self> {
        validate_sampler(&desc)?;
        Ok(Self { desc })
    }
}

impl SamplerState for HeadlessSamplerState {
    fn desc(&self) -> &SamplerStateDesc {
        &self.desc
    }
}

#[cfg(test)]
#[path = "headless_state_tests.rs"]
mod tests;
