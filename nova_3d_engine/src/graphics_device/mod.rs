/// Graphics device module - backend abstraction, descriptors, and the factory

// Module declarations
pub mod graphics_device;
pub mod texture;
pub mod state;
pub mod factory;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use texture::*;
pub use state::*;
pub use factory::*;

// Mock graphics device for tests (no backend required)
#[cfg(test)]
pub mod mock_graphics_device;
