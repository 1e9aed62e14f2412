//! Unit tests for texture types
//!
//! Tests TextureFormat properties, AccessHint flags, mip-chain math, and
//! TextureInfo queries.

use crate::graphics_device::{
    TextureFormat, AccessHint, SampleCount, TextureDesc, TextureInfo, TextureData,
};

// ============================================================================
// TEXTURE FORMAT TESTS
// ============================================================================

#[test]
fn test_bytes_per_pixel() {
    assert_eq!(TextureFormat::R8G8B8A8_SRGB.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::R8G8B8A8_UNORM.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::B8G8R8A8_SRGB.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::B8G8R8A8_UNORM.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::R16G16B16A16_FLOAT.bytes_per_pixel(), 8);
    assert_eq!(TextureFormat::D16_UNORM.bytes_per_pixel(), 2);
    assert_eq!(TextureFormat::D32_FLOAT.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::D24_UNORM_S8_UINT.bytes_per_pixel(), 4);
}

#[test]
fn test_is_depth() {
    assert!(TextureFormat::D16_UNORM.is_depth());
    assert!(TextureFormat::D32_FLOAT.is_depth());
    assert!(TextureFormat::D24_UNORM_S8_UINT.is_depth());

    assert!(!TextureFormat::R8G8B8A8_SRGB.is_depth());
    assert!(!TextureFormat::R16G16B16A16_FLOAT.is_depth());
}

// ============================================================================
// ACCESS HINT TESTS
// ============================================================================

#[test]
fn test_access_hint_default_is_gpu_read() {
    assert_eq!(AccessHint::default(), AccessHint::GPU_READ);
}

#[test]
fn test_access_hint_combination() {
    let access = AccessHint::GPU_READ | AccessHint::CPU_WRITE;
    assert!(access.contains(AccessHint::GPU_READ));
    assert!(access.contains(AccessHint::CPU_WRITE));
    assert!(!access.contains(AccessHint::CPU_READ));
    assert!(!access.contains(AccessHint::GENERATE_MIPS));
}

#[test]
fn test_access_hint_generate_mips_flag() {
    let access = AccessHint::GPU_READ | AccessHint::GENERATE_MIPS;
    assert!(access.contains(AccessHint::GENERATE_MIPS));
}

// ============================================================================
// SAMPLE COUNT TESTS
// ============================================================================

#[test]
fn test_sample_count_values() {
    assert_eq!(SampleCount::S1.count(), 1);
    assert_eq!(SampleCount::S2.count(), 2);
    assert_eq!(SampleCount::S4.count(), 4);
    assert_eq!(SampleCount::S8.count(), 8);
}

// ============================================================================
// MIP CHAIN MATH TESTS
// ============================================================================

#[test]
fn test_max_mip_levels() {
    // floor(log2(max(w, h))) + 1
    assert_eq!(TextureDesc::max_mip_levels(1, 1), 1);
    assert_eq!(TextureDesc::max_mip_levels(2, 2), 2);
    assert_eq!(TextureDesc::max_mip_levels(256, 256), 9);
    assert_eq!(TextureDesc::max_mip_levels(1024, 1024), 11);

    // Non-square: the larger dimension drives the chain length
    assert_eq!(TextureDesc::max_mip_levels(512, 64), 10);
    assert_eq!(TextureDesc::max_mip_levels(64, 512), 10);

    // Non-power-of-two
    assert_eq!(TextureDesc::max_mip_levels(100, 100), 7);
    assert_eq!(TextureDesc::max_mip_levels(1920, 1080), 11);
}

#[test]
fn test_resolved_mip_levels_zero_means_full_chain() {
    let desc = TextureDesc {
        width: 256,
        height: 256,
        mip_levels: 0,
        array_layers: 1,
        format: TextureFormat::R8G8B8A8_UNORM,
        sample_count: SampleCount::S1,
        sample_quality: 0,
        access: AccessHint::GPU_READ,
        data: None,
    };
    assert_eq!(desc.resolved_mip_levels(), 9);
}

#[test]
fn test_resolved_mip_levels_explicit_value_kept() {
    let desc = TextureDesc {
        width: 256,
        height: 256,
        mip_levels: 4,
        array_layers: 1,
        format: TextureFormat::R8G8B8A8_UNORM,
        sample_count: SampleCount::S1,
        sample_quality: 0,
        access: AccessHint::GPU_READ,
        data: None,
    };
    assert_eq!(desc.resolved_mip_levels(), 4);
}

// ============================================================================
// TEXTURE INFO TESTS
// ============================================================================

fn info_256x128() -> TextureInfo {
    TextureInfo {
        width: 256,
        height: 128,
        format: TextureFormat::R8G8B8A8_UNORM,
        array_layers: 1,
        mip_levels: 9,
        sample_count: SampleCount::S1,
        access: AccessHint::GPU_READ,
    }
}

#[test]
fn test_info_queries() {
    let info = info_256x128();
    assert!(!info.is_array());
    assert!(info.has_mipmaps());
    assert!(!info.is_multisampled());

    let array_info = TextureInfo { array_layers: 6, ..info_256x128() };
    assert!(array_info.is_array());

    let msaa_info = TextureInfo {
        sample_count: SampleCount::S4,
        mip_levels: 1,
        ..info_256x128()
    };
    assert!(msaa_info.is_multisampled());
    assert!(!msaa_info.has_mipmaps());
}

#[test]
fn test_mip_dimensions_halve_and_clamp() {
    let info = info_256x128();

    assert_eq!(info.mip_dimensions(0), Some((256, 128)));
    assert_eq!(info.mip_dimensions(1), Some((128, 64)));
    assert_eq!(info.mip_dimensions(7), Some((2, 1)));
    // Height clamps at 1 while width keeps halving
    assert_eq!(info.mip_dimensions(8), Some((1, 1)));

    // Out of range
    assert_eq!(info.mip_dimensions(9), None);
}

#[test]
fn test_mip_byte_size() {
    let info = info_256x128();

    assert_eq!(info.mip_byte_size(0), Some(256 * 128 * 4));
    assert_eq!(info.mip_byte_size(1), Some(128 * 64 * 4));
    assert_eq!(info.mip_byte_size(8), Some(4));
    assert_eq!(info.mip_byte_size(9), None);
}

#[test]
fn test_mip_byte_size_overflow_returns_none() {
    // u32::MAX squared fits in u64, but not after the bytes-per-pixel factor
    let info = TextureInfo {
        width: u32::MAX,
        height: u32::MAX,
        format: TextureFormat::R16G16B16A16_FLOAT,
        array_layers: 1,
        mip_levels: 1,
        sample_count: SampleCount::S1,
        access: AccessHint::GPU_READ,
    };
    assert_eq!(info.mip_byte_size(0), None);
}

#[test]
fn test_mip_byte_size_wide_format() {
    let info = TextureInfo {
        format: TextureFormat::R16G16B16A16_FLOAT,
        ..info_256x128()
    };
    assert_eq!(info.mip_byte_size(0), Some(256 * 128 * 8));
}

// ============================================================================
// TEXTURE DATA TESTS
// ============================================================================

#[test]
fn test_texture_data_variants() {
    let single = TextureData::Single(vec![0u8; 16]);
    match single {
        TextureData::Single(bytes) => assert_eq!(bytes.len(), 16),
        TextureData::Layers(_) => panic!("expected Single"),
    }

    let layers = TextureData::Layers(vec![
        crate::graphics_device::TextureLayerData { layer: 0, data: vec![0u8; 16] },
        crate::graphics_device::TextureLayerData { layer: 3, data: vec![0u8; 16] },
    ]);
    match layers {
        TextureData::Layers(list) => {
            assert_eq!(list.len(), 2);
            assert_eq!(list[1].layer, 3);
        }
        TextureData::Single(_) => panic!("expected Layers"),
    }
}
