/*!
# Nova 3D Engine

Core traits and types for the Nova 3D rendering engine.

This crate provides the platform-agnostic render-object factory for 3D
rendering using trait-based dynamic polymorphism (similar to C++ virtual
inheritance). Backend implementations (headless, Vulkan, Direct3D, etc.)
live in separate crates and plug in through the `GraphicsDevice` trait.

## Architecture

- **GraphicsDevice**: backend trait that compiles state objects and
  allocates textures
- **RenderObjectFactory**: wraps a device and deduplicates fixed-function
  pipeline state objects by descriptor (one canonical object per distinct
  descriptor value)
- **Texture / RasterizerState / DepthStencilState / BlendState /
  SamplerState**: opaque resource traits implemented by backends
- **Engine**: global registry of named factories plus the logging system

Backend crates provide concrete types that implement these traits.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;

// Main nova3d namespace module
pub mod nova3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine registry
    pub use crate::engine::Engine;

    // Device abstraction and factory
    pub use crate::graphics_device::{GraphicsDevice, RenderObjectFactory};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they live at the crate root
    }

    // Render sub-module with all device-level types
    pub mod render {
        pub use crate::graphics_device::*;
    }
}
