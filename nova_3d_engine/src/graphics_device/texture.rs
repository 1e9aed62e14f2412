/// Texture trait, texture descriptor, and texture info

use bitflags::bitflags;

/// Pixel format of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    // Color formats
    R8G8B8A8_SRGB,
    R8G8B8A8_UNORM,
    B8G8R8A8_SRGB,
    B8G8R8A8_UNORM,
    R16G16B16A16_FLOAT,

    // Depth/stencil formats
    D16_UNORM,
    D32_FLOAT,
    D24_UNORM_S8_UINT,
}

impl TextureFormat {
    /// Size in bytes of one pixel in this format
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8G8B8A8_SRGB
            | TextureFormat::R8G8B8A8_UNORM
            | TextureFormat::B8G8R8A8_SRGB
            | TextureFormat::B8G8R8A8_UNORM => 4,
            TextureFormat::R16G16B16A16_FLOAT => 8,
            TextureFormat::D16_UNORM => 2,
            TextureFormat::D32_FLOAT => 4,
            TextureFormat::D24_UNORM_S8_UINT => 4,
        }
    }

    /// Returns true for depth and depth/stencil formats
    pub fn is_depth(&self) -> bool {
        matches!(
            self,
            TextureFormat::D16_UNORM
                | TextureFormat::D32_FLOAT
                | TextureFormat::D24_UNORM_S8_UINT
        )
    }
}

bitflags! {
    /// Access hints describing how a texture will be used
    ///
    /// Combined with `|`: e.g. `AccessHint::GPU_READ | AccessHint::CPU_WRITE`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessHint: u32 {
        /// CPU will read the texture contents back
        const CPU_READ      = 1 << 0;
        /// CPU will update the texture contents after creation
        const CPU_WRITE     = 1 << 1;
        /// GPU samples the texture in shaders
        const GPU_READ      = 1 << 2;
        /// GPU renders into the texture
        const GPU_WRITE     = 1 << 3;
        /// Backend should generate the mip chain from level 0
        const GENERATE_MIPS = 1 << 4;
    }
}

impl Default for AccessHint {
    fn default() -> Self {
        AccessHint::GPU_READ
    }
}

/// Multisample count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleCount {
    /// 1 sample (no multisampling)
    S1,
    /// 2 samples
    S2,
    /// 4 samples
    S4,
    /// 8 samples
    S8,
}

impl SampleCount {
    /// Number of samples per pixel
    pub fn count(&self) -> u32 {
        match self {
            SampleCount::S1 => 1,
            SampleCount::S2 => 2,
            SampleCount::S4 => 4,
            SampleCount::S8 => 8,
        }
    }
}

// ===== TEXTURE DATA =====

/// Data for a single layer of a texture array
#[derive(Debug, Clone)]
pub struct TextureLayerData {
    /// Target layer index (0-based)
    pub layer: u32,
    /// Raw pixel bytes for mip level 0 of this layer
    pub data: Vec<u8>,
}

/// Initial data to upload to a texture at creation time
///
/// Only mip level 0 is uploaded; further levels are either generated by
/// the backend (`AccessHint::GENERATE_MIPS`) or left uninitialized.
#[derive(Debug, Clone)]
pub enum TextureData {
    /// Single image data (for simple textures, or layer 0 of an array)
    Single(Vec<u8>),

    /// Per-layer data for array textures.
    /// Only the layers listed are uploaded; others remain uninitialized.
    Layers(Vec<TextureLayerData>),
}

// ===== TEXTURE DESC =====

/// Descriptor for creating a 2D texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Number of mip levels (0 = full chain down to 1x1)
    pub mip_levels: u32,
    /// Number of array layers (1 = simple 2D texture, >1 = texture array)
    pub array_layers: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Samples per pixel
    pub sample_count: SampleCount,
    /// Backend-specific multisample quality level (0 when not multisampled)
    pub sample_quality: u32,
    /// Usage-access hints
    pub access: AccessHint,
    /// Optional initial data to upload at creation time
    pub data: Option<TextureData>,
}

impl TextureDesc {
    /// Number of mip levels in a full chain for the given dimensions
    ///
    /// `floor(log2(max(width, height))) + 1`, minimum 1.
    pub fn max_mip_levels(width: u32, height: u32) -> u32 {
        let largest = width.max(height).max(1);
        32 - largest.leading_zeros()
    }

    /// The mip level count this descriptor resolves to
    ///
    /// 0 means "full chain" and resolves from the dimensions; any other
    /// value is taken as-is.
    pub fn resolved_mip_levels(&self) -> u32 {
        if self.mip_levels == 0 {
            Self::max_mip_levels(self.width, self.height)
        } else {
            self.mip_levels
        }
    }
}

// ===== TEXTURE INFO =====

/// Read-only properties of a created texture.
///
/// Returned by `Texture::info()` to query texture properties without
/// exposing backend-specific details.
#[derive(Debug, Clone)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Number of array layers (1 = simple 2D texture, >1 = texture array)
    pub array_layers: u32,
    /// Number of mip levels (resolved, never 0)
    pub mip_levels: u32,
    /// Samples per pixel
    pub sample_count: SampleCount,
    /// Usage-access hints the texture was created with
    pub access: AccessHint,
}

impl TextureInfo {
    /// Returns true if this texture is a texture array (array_layers > 1)
    pub fn is_array(&self) -> bool {
        self.array_layers > 1
    }

    /// Returns true if this texture has a mip chain (mip_levels > 1)
    pub fn has_mipmaps(&self) -> bool {
        self.mip_levels > 1
    }

    /// Returns true if this texture is multisampled
    pub fn is_multisampled(&self) -> bool {
        self.sample_count != SampleCount::S1
    }

    /// Dimensions of the given mip level, or None if out of range
    ///
    /// Dimensions are halved per level and clamped to 1x1.
    pub fn mip_dimensions(&self, level: u32) -> Option<(u32, u32)> {
        if level >= self.mip_levels {
            return None;
        }
        let w = (self.width >> level).max(1);
        let h = (self.height >> level).max(1);
        Some((w, h))
    }

    /// Byte size of one layer of the given mip level
    ///
    /// None if the level is out of range or the size overflows u64.
    pub fn mip_byte_size(&self, level: u32) -> Option<u64> {
        let (w, h) = self.mip_dimensions(level)?;
        u64::from(w)
            .checked_mul(u64::from(h))?
            .checked_mul(u64::from(self.format.bytes_per_pixel()))
    }
}

// ===== TEXTURE TRAIT =====

/// Texture resource trait
///
/// Implemented by backend-specific texture types (e.g., HeadlessTexture).
/// The texture is automatically destroyed when dropped.
pub trait Texture: Send + Sync {
    /// Get the read-only properties of this texture
    fn info(&self) -> &TextureInfo;
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
