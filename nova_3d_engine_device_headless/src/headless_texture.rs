/// Headless texture - descriptor validation plus system-memory storage

use nova_3d_engine::{engine_bail, engine_error};
use nova_3d_engine::nova3d::{Error, Result};
use nova_3d_engine::nova3d::render::{
    Texture, TextureDesc, TextureInfo, TextureData, SampleCount,
};

const LOG_SOURCE: &str = "nova3d::headless::Texture";

/// Largest width/height the headless backend accepts, matching common
/// GPU limits
pub(crate) const MAX_TEXTURE_DIMENSION: u32 = 16384;

/// Largest array layer count the headless backend accepts
pub(crate) const MAX_TEXTURE_ARRAY_LAYERS: u32 = 2048;

/// Texture backed by system memory
///
/// Storage covers every mip level of every layer, laid out layer-major
/// (all mips of layer 0, then layer 1, ...). Initial data, when provided,
/// is copied into mip level 0 of the addressed layers; all other bytes are
/// zeroed.
#[derive(Debug)]
pub struct HeadlessTexture {
    info: TextureInfo,
    storage: Vec<u8>,
}

impl HeadlessTexture {
    pub(crate) fn new(desc: TextureDesc) -> Result<Self> {
        validate(&desc)?;

        let info = TextureInfo {
            width: desc.width,
            height: desc.height,
            format: desc.format,
            array_layers: desc.array_layers,
            mip_levels: desc.resolved_mip_levels(),
            sample_count: desc.sample_count,
            access: desc.access,
        };

        // Dimension caps keep the per-mip sizes well inside u64, but the
        // layer/sample product and the host allocation can still fail;
        // both must surface as errors, not aborts.
        let layer_size = layer_byte_size(&info);
        let total_size = layer_size
            .checked_mul(u64::from(info.array_layers))
            .and_then(|bytes| bytes.checked_mul(u64::from(info.sample_count.count())))
            .and_then(|bytes| usize::try_from(bytes).ok());
        let Some(total_size) = total_size else {
            engine_bail!(
                TextureCreation, LOG_SOURCE,
                "texture size overflows host memory ({} bytes per layer, {} layers)",
                layer_size, info.array_layers
            );
        };

        let mut storage = Vec::new();
        if storage.try_reserve_exact(total_size).is_err() {
            engine_error!(LOG_SOURCE, "Allocation of {} texture bytes failed", total_size);
            return Err(Error::OutOfMemory);
        }
        storage.resize(total_size, 0u8);

        match desc.data {
            Some(TextureData::Single(bytes)) => {
                storage[..bytes.len()].copy_from_slice(&bytes);
            }
            Some(TextureData::Layers(layers)) => {
                for layer in layers {
                    let offset = (layer_size * u64::from(layer.layer)) as usize;
                    storage[offset..offset + layer.data.len()].copy_from_slice(&layer.data);
                }
            }
            None => {}
        }

        Ok(Self { info, storage })
    }

    /// Total bytes of system memory held by this texture
    pub fn byte_size(&self) -> u64 {
        self.storage.len() as u64
    }
}

impl Texture for HeadlessTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

/// Byte size of one array layer (all mip levels, one sample)
fn layer_byte_size(info: &TextureInfo) -> u64 {
    (0..info.mip_levels)
        .filter_map(|level| info.mip_byte_size(level))
        .sum()
}

fn validate(desc: &TextureDesc) -> Result<()> {
    if desc.width == 0 || desc.height == 0 {
        engine_bail!(
            TextureCreation, LOG_SOURCE,
            "dimensions must be > 0 (got {}x{})", desc.width, desc.height
        );
    }
    if desc.width > MAX_TEXTURE_DIMENSION || desc.height > MAX_TEXTURE_DIMENSION {
        engine_bail!(
            TextureCreation, LOG_SOURCE,
            "dimensions must be <= {} (got {}x{})",
            MAX_TEXTURE_DIMENSION, desc.width, desc.height
        );
    }
    if desc.array_layers == 0 {
        engine_bail!(TextureCreation, LOG_SOURCE, "array_layers must be > 0");
    }
    if desc.array_layers > MAX_TEXTURE_ARRAY_LAYERS {
        engine_bail!(
            TextureCreation, LOG_SOURCE,
            "array_layers must be <= {} (got {})",
            MAX_TEXTURE_ARRAY_LAYERS, desc.array_layers
        );
    }

    let max_mips = TextureDesc::max_mip_levels(desc.width, desc.height);
    if desc.mip_levels > max_mips {
        engine_bail!(
            TextureCreation, LOG_SOURCE,
            "mip_levels {} exceeds full chain length {} for {}x{}",
            desc.mip_levels, max_mips, desc.width, desc.height
        );
    }

    if desc.sample_count == SampleCount::S1 {
        if desc.sample_quality != 0 {
            engine_bail!(
                TextureCreation, LOG_SOURCE,
                "sample_quality must be 0 without multisampling (got {})",
                desc.sample_quality
            );
        }
    } else {
        // Multisampled textures have exactly one mip level and no init data
        if desc.resolved_mip_levels() != 1 {
            engine_bail!(
                TextureCreation, LOG_SOURCE,
                "multisampled textures must have exactly 1 mip level (got {})",
                desc.resolved_mip_levels()
            );
        }
        if desc.data.is_some() {
            engine_bail!(
                TextureCreation, LOG_SOURCE,
                "multisampled textures cannot take initial data"
            );
        }
    }

    // Init data covers mip level 0 exactly
    let level0_size = u64::from(desc.width)
        * u64::from(desc.height)
        * u64::from(desc.format.bytes_per_pixel());
    match &desc.data {
        Some(TextureData::Single(bytes)) => {
            if bytes.len() as u64 != level0_size {
                engine_bail!(
                    TextureCreation, LOG_SOURCE,
                    "initial data is {} bytes, mip level 0 needs {}",
                    bytes.len(), level0_size
                );
            }
        }
        Some(TextureData::Layers(layers)) => {
            for layer in layers {
                if layer.layer >= desc.array_layers {
                    engine_bail!(
                        TextureCreation, LOG_SOURCE,
                        "layer index {} out of range ({} layers)",
                        layer.layer, desc.array_layers
                    );
                }
                if layer.data.len() as u64 != level0_size {
                    engine_bail!(
                        TextureCreation, LOG_SOURCE,
                        "layer {} data is {} bytes, mip level 0 needs {}",
                        layer.layer, layer.data.len(), level0_size
                    );
                }
            }
        }
        None => {}
    }

    Ok(())
}

#[cfg(test)]
#[path = "headless_texture_tests.rs"]
mod tests;
