//! Nova3D demo - drives the render-object factory with the headless backend
//!
//! Creates a factory, requests a handful of state objects (some of them
//! duplicates), uploads a small texture, and prints the pool statistics to
//! show deduplication at work.

use nova_3d_engine::engine_info;
use nova_3d_engine::nova3d::{Engine, Result};
use nova_3d_engine::nova3d::render::{
    Config, Texture,
    RasterizerStateDesc, DepthStencilStateDesc, BlendStateDesc, SamplerStateDesc,
    FillMode, CullMode, BlendFactor, AddressMode,
    TextureDesc, TextureData, TextureFormat, SampleCount, AccessHint,
};
use nova_3d_engine_device_headless::HeadlessGraphicsDevice;

const LOG_SOURCE: &str = "nova3d_demo";

fn main() -> Result<()> {
    Engine::initialize()?;

    let factory = Engine::create_factory(
        "main",
        HeadlessGraphicsDevice::new(Config {
            app_name: "Nova3D Demo".to_string(),
            ..Config::default()
        }),
    )?;
    let mut factory = factory.lock().map_err(|_| {
        nova_3d_engine::engine_err!("nova3d_demo", "factory lock poisoned")
    })?;

    // ===== STATE OBJECTS =====

    let opaque = RasterizerStateDesc {
        fill_mode: FillMode::Solid,
        cull_mode: CullMode::Back,
        ..Default::default()
    };
    let wireframe = RasterizerStateDesc {
        fill_mode: FillMode::Wireframe,
        cull_mode: CullMode::None,
        ..Default::default()
    };

    // Three requests, two distinct descriptors
    let a = factory.rasterizer_state(&opaque)?;
    let b = factory.rasterizer_state(&opaque)?;
    let _wire = factory.rasterizer_state(&wireframe)?;
    engine_info!(
        LOG_SOURCE,
        "Duplicate rasterizer request returned the pooled object: {}",
        std::sync::Arc::ptr_eq(&a, &b)
    );

    let _depth = factory.depth_stencil_state(&DepthStencilStateDesc::default())?;

    let _alpha_blend = factory.blend_state(&BlendStateDesc {
        blend_enable: true,
        src_color_factor: BlendFactor::SrcAlpha,
        dst_color_factor: BlendFactor::OneMinusSrcAlpha,
        ..Default::default()
    })?;

    let _clamped = factory.sampler_state(&SamplerStateDesc {
        address_u: AddressMode::ClampToEdge,
        address_v: AddressMode::ClampToEdge,
        max_anisotropy: 8,
        ..Default::default()
    })?;

    // ===== TEXTURE =====

    let checker: Vec<u8> = (0..64 * 64)
        .flat_map(|i| {
            let v = if (i / 8 + i / (64 * 8)) % 2 == 0 { 0xFFu8 } else { 0x20 };
            [v, v, v, 0xFF]
        })
        .collect();

    let texture = factory.create_texture_2d(TextureDesc {
        width: 64,
        height: 64,
        mip_levels: 0,
        array_layers: 1,
        format: TextureFormat::R8G8B8A8_UNORM,
        sample_count: SampleCount::S1,
        sample_quality: 0,
        access: AccessHint::GPU_READ | AccessHint::GENERATE_MIPS,
        data: Some(TextureData::Single(checker)),
    })?;
    engine_info!(
        LOG_SOURCE,
        "Created {}x{} texture with {} mip levels",
        texture.info().width, texture.info().height, texture.info().mip_levels
    );

    let _ctx = factory.render_context()?;

    // ===== STATISTICS =====

    let stats = factory.pool_stats();
    engine_info!(
        LOG_SOURCE,
        "Pools: {} rasterizer, {} depth/stencil, {} blend, {} sampler ({} total)",
        stats.rasterizer, stats.depth_stencil, stats.blend, stats.sampler, stats.total()
    );

    drop(factory);
    Engine::shutdown();
    Ok(())
}
