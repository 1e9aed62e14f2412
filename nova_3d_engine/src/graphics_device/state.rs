/// Fixed-function pipeline state descriptors and state object traits
///
/// Each descriptor is an immutable value implementing `Eq + Hash` so it can
/// key a state pool. Float fields compare and hash by bit pattern, so two
/// descriptors are "equal" exactly when every byte of configuration matches.

use std::hash::{Hash, Hasher};

/// State object category, used for pool statistics and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateCategory {
    /// Rasterizer state pool
    Rasterizer,
    /// Depth/stencil state pool
    DepthStencil,
    /// Blend state pool
    Blend,
    /// Sampler state pool
    Sampler,
}

// ===== RASTERIZER ENUMS =====

/// Polygon fill mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillMode {
    /// Fill polygons
    Solid,
    /// Draw edges only
    Wireframe,
    /// Draw vertices only
    Point,
}

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// No culling
    None,
    /// Cull front faces
    Front,
    /// Cull back faces
    Back,
}

/// Front face winding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontFace {
    /// Counter-clockwise vertices define front face
    CounterClockwise,
    /// Clockwise vertices define front face
    Clockwise,
}

/// Depth bias parameters
///
/// Equality and hashing use the raw bit patterns of the float fields.
#[derive(Debug, Clone, Copy)]
pub struct DepthBias {
    /// Constant depth offset
    pub constant_factor: f32,
    /// Slope-based depth offset
    pub slope_factor: f32,
    /// Maximum depth bias clamp
    pub clamp: f32,
}

impl PartialEq for DepthBias {
    fn eq(&self, other: &Self) -> bool {
        self.constant_factor.to_bits() == other.constant_factor.to_bits()
            && self.slope_factor.to_bits() == other.slope_factor.to_bits()
            && self.clamp.to_bits() == other.clamp.to_bits()
    }
}

impl Eq for DepthBias {}

impl Hash for DepthBias {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.constant_factor.to_bits().hash(state);
        self.slope_factor.to_bits().hash(state);
        self.clamp.to_bits().hash(state);
    }
}

// ===== DEPTH/STENCIL ENUMS =====

/// Comparison operator for depth, stencil, and sampler compare tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Never pass
    Never,
    /// Pass if value < reference
    Less,
    /// Pass if value == reference
    Equal,
    /// Pass if value <= reference
    LessOrEqual,
    /// Pass if value > reference
    Greater,
    /// Pass if value != reference
    NotEqual,
    /// Pass if value >= reference
    GreaterOrEqual,
    /// Always pass
    Always,
}

/// Stencil operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilOp {
    /// Keep current value
    Keep,
    /// Set to zero
    Zero,
    /// Replace with reference value
    Replace,
    /// Increment and clamp to max
    IncrementAndClamp,
    /// Decrement and clamp to zero
    DecrementAndClamp,
    /// Bitwise invert
    Invert,
    /// Increment and wrap around
    IncrementAndWrap,
    /// Decrement and wrap around
    DecrementAndWrap,
}

// ===== BLEND ENUMS =====

/// Blend factor for color blending equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    SrcAlphaSaturate,
}

/// Blend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendOp {
    /// result = src * srcFactor + dst * dstFactor
    Add,
    /// result = src * srcFactor - dst * dstFactor
    Subtract,
    /// result = dst * dstFactor - src * srcFactor
    ReverseSubtract,
    /// result = min(src, dst)
    Min,
    /// result = max(src, dst)
    Max,
}

/// Color write mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorWriteMask {
    pub r: bool,
    pub g: bool,
    pub b: bool,
    pub a: bool,
}

impl ColorWriteMask {
    /// All channels enabled
    pub const ALL: Self = Self { r: true, g: true, b: true, a: true };
    /// No channels enabled
    pub const NONE: Self = Self { r: false, g: false, b: false, a: false };
}

impl Default for ColorWriteMask {
    fn default() -> Self {
        Self::ALL
    }
}

// ===== SAMPLER ENUMS =====

/// Texture filtering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Nearest-neighbor filtering
    Nearest,
    /// Linear interpolation
    Linear,
}

/// Texture coordinate addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressMode {
    /// Tile the texture
    Repeat,
    /// Tile with every other repetition mirrored
    MirroredRepeat,
    /// Clamp coordinates to the edge texel
    ClampToEdge,
    /// Coordinates outside [0, 1] read the border color
    ClampToBorder,
}

/// Border color for `AddressMode::ClampToBorder`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderColor {
    TransparentBlack,
    OpaqueBlack,
    OpaqueWhite,
}

// ===== RASTERIZER STATE DESC =====

/// Descriptor for a rasterizer state object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RasterizerStateDesc {
    /// Polygon fill mode
    pub fill_mode: FillMode,
    /// Face culling mode
    pub cull_mode: CullMode,
    /// Front face winding order
    pub front_face: FrontFace,
    /// Depth bias (None = disabled)
    pub depth_bias: Option<DepthBias>,
    /// Clamp fragments to the depth range instead of clipping
    pub depth_clip_enable: bool,
    /// Enable scissor-rectangle culling
    pub scissor_enable: bool,
}

impl Default for RasterizerStateDesc {
    fn default() -> Self {
        Self {
            fill_mode: FillMode::Solid,
            cull_mode: CullMode::Back,
            front_face: FrontFace::CounterClockwise,
            depth_bias: None,
            depth_clip_enable: true,
            scissor_enable: false,
        }
    }
}

// ===== DEPTH/STENCIL STATE DESC =====

/// Stencil operations for one face orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StencilOpDesc {
    /// Action on stencil test fail
    pub fail_op: StencilOp,
    /// Action on stencil pass + depth pass
    pub pass_op: StencilOp,
    /// Action on stencil pass + depth fail
    pub depth_fail_op: StencilOp,
    /// Comparison operator
    pub compare_op: CompareOp,
}

impl Default for StencilOpDesc {
    fn default() -> Self {
        Self {
            fail_op: StencilOp::Keep,
            pass_op: StencilOp::Keep,
            depth_fail_op: StencilOp::Keep,
            compare_op: CompareOp::Always,
        }
    }
}

/// Descriptor for a depth/stencil state object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthStencilStateDesc {
    /// Enable depth testing
    pub depth_test_enable: bool,
    /// Enable writing to the depth buffer
    pub depth_write_enable: bool,
    /// Depth comparison operator
    pub depth_compare_op: CompareOp,
    /// Enable stencil testing
    pub stencil_test_enable: bool,
    /// Bits of the stencil buffer read for compare
    pub stencil_read_mask: u8,
    /// Bits of the stencil buffer written
    pub stencil_write_mask: u8,
    /// Stencil operations for front faces
    pub front: StencilOpDesc,
    /// Stencil operations for back faces
    pub back: StencilOpDesc,
}

impl Default for DepthStencilStateDesc {
    fn default() -> Self {
        Self {
            depth_test_enable: true,
            depth_write_enable: true,
            depth_compare_op: CompareOp::Less,
            stencil_test_enable: false,
            stencil_read_mask: 0xFF,
            stencil_write_mask: 0xFF,
            front: StencilOpDesc::default(),
            back: StencilOpDesc::default(),
        }
    }
}

// ===== BLEND STATE DESC =====

/// Descriptor for a blend state object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendStateDesc {
    /// Enable blending
    pub blend_enable: bool,
    /// Source color blend factor
    pub src_color_factor: BlendFactor,
    /// Destination color blend factor
    pub dst_color_factor: BlendFactor,
    /// Color blend operation
    pub color_blend_op: BlendOp,
    /// Source alpha blend factor
    pub src_alpha_factor: BlendFactor,
    /// Destination alpha blend factor
    pub dst_alpha_factor: BlendFactor,
    /// Alpha blend operation
    pub alpha_blend_op: BlendOp,
    /// Color write mask
    pub color_write_mask: ColorWriteMask,
    /// Enable alpha-to-coverage
    pub alpha_to_coverage: bool,
}

impl Default for BlendStateDesc {
    fn default() -> Self {
        Self {
            blend_enable: false,
            src_color_factor: BlendFactor::One,
            dst_color_factor: BlendFactor::Zero,
            color_blend_op: BlendOp::Add,
            src_alpha_factor: BlendFactor::One,
            dst_alpha_factor: BlendFactor::Zero,
            alpha_blend_op: BlendOp::Add,
            color_write_mask: ColorWriteMask::ALL,
            alpha_to_coverage: false,
        }
    }
}

// ===== SAMPLER STATE DESC =====

/// Descriptor for a sampler state object
///
/// Equality and hashing use the raw bit patterns of the LOD float fields.
#[derive(Debug, Clone, Copy)]
pub struct SamplerStateDesc {
    /// Magnification filter
    pub mag_filter: FilterMode,
    /// Minification filter
    pub min_filter: FilterMode,
    /// Filter between mip levels
    pub mip_filter: FilterMode,
    /// Addressing mode for the U coordinate
    pub address_u: AddressMode,
    /// Addressing mode for the V coordinate
    pub address_v: AddressMode,
    /// Addressing mode for the W coordinate
    pub address_w: AddressMode,
    /// Bias added to the computed mip level
    pub mip_lod_bias: f32,
    /// Lowest mip level to sample
    pub min_lod: f32,
    /// Highest mip level to sample
    pub max_lod: f32,
    /// Maximum anisotropy (1 = disabled, up to 16)
    pub max_anisotropy: u8,
    /// Comparison operator for shadow samplers (None = compare disabled)
    pub compare_op: Option<CompareOp>,
    /// Border color for ClampToBorder addressing
    pub border_color: BorderColor,
}

/// No upper mip clamp; matches the backend "LOD clamp none" convention
pub const LOD_CLAMP_NONE: f32 = 1000.0;

impl Default for SamplerStateDesc {
    fn default() -> Self {
        Self {
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mip_filter: FilterMode::Linear,
            address_u: AddressMode::Repeat,
            address_v: AddressMode::Repeat,
            address_w: AddressMode::Repeat,
            mip_lod_bias: 0.0,
            min_lod: 0.0,
            max_lod: LOD_CLAMP_NONE,
            max_anisotropy: 1,
            compare_op: None,
            border_color: BorderColor::OpaqueBlack,
        }
    }
}

impl PartialEq for SamplerStateDesc {
    fn eq(&self, other: &Self) -> bool {
        self.mag_filter == other.mag_filter
            && self.min_filter == other.min_filter
            && self.mip_filter == other.mip_filter
            && self.address_u == other.address_u
            && self.address_v == other.address_v
            && self.address_w == other.address_w
            && self.mip_lod_bias.to_bits() == other.mip_lod_bias.to_bits()
            && self.min_lod.to_bits() == other.min_lod.to_bits()
            && self.max_lod.to_bits() == other.max_lod.to_bits()
            && self.max_anisotropy == other.max_anisotropy
            && self.compare_op == other.compare_op
            && self.border_color == other.border_color
    }
}

impl Eq for SamplerStateDesc {}

impl Hash for SamplerStateDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mag_filter.hash(state);
        self.min_filter.hash(state);
        self.mip_filter.hash(state);
        self.address_u.hash(state);
        self.address_v.hash(state);
        self.address_w.hash(state);
        self.mip_lod_bias.to_bits().hash(state);
        self.min_lod.to_bits().hash(state);
        self.max_lod.to_bits().hash(state);
        self.max_anisotropy.hash(state);
        self.compare_op.hash(state);
        self.border_color.hash(state);
    }
}

// ===== STATE OBJECT TRAITS =====

/// Rasterizer state object trait
///
/// Implemented by backend-specific types. The object is destroyed when the
/// owning pool and all callers drop their references.
pub trait RasterizerState: Send + Sync {
    /// The descriptor this state object was compiled from
    fn desc(&self) -> &RasterizerStateDesc;
}

/// Depth/stencil state object trait
pub trait DepthStencilState: Send + Sync {
    /// The descriptor this state object was compiled from
    fn desc(&self) -> &DepthStencilStateDesc;
}

/// Blend state object trait
pub trait BlendState: Send + Sync {
    /// The descriptor this state object was compiled from
    fn desc(&self) -> &BlendStateDesc;
}

/// Sampler state object trait
pub trait SamplerState: Send + Sync {
    /// The descriptor this state object was compiled from
    fn desc(&self) -> &SamplerStateDesc;
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
