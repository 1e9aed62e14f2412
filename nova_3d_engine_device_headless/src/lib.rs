/*!
# Nova 3D Engine - Headless Device Backend

CPU-only implementation of the nova_3d_engine device traits.

This crate provides a headless backend that validates descriptors and
allocates texture storage in system memory, with no GPU or window system
required. It is the reference backend for factory-level behavior (state
pooling, texture creation, lazy render-context instantiation) and is used
in tests, CI, and tools that need render objects without rendering.
*/

// Headless implementation modules
mod headless_device;
mod headless_state;
mod headless_texture;

pub use headless_device::{HeadlessGraphicsDevice, HeadlessRenderContext};
pub use headless_state::{
    HeadlessRasterizerState, HeadlessDepthStencilState, HeadlessBlendState, HeadlessSamplerState,
};
pub use headless_texture::HeadlessTexture;
