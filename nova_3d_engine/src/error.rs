//! Error types for the Nova3D engine
//!
//! This module defines the error types used throughout the engine,
//! including state compilation, texture creation, and initialization.

use std::fmt;

/// Result type for Nova3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nova3D engine errors
///
/// All errors are local and non-fatal: a failed creation leaves the
/// factory and its pools usable for subsequent requests.
#[derive(Debug, Clone)]
pub enum Error {
    /// The backend rejected a state descriptor (invalid field combination)
    StateCreation(String),

    /// The backend rejected texture parameters or the allocation failed
    TextureCreation(String),

    /// Backend-specific error (lock poisoning, device loss, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Initialization failed (engine, device, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StateCreation(msg) => write!(f, "State creation failed: {}", msg),
            Error::TextureCreation(msg) => write!(f, "Texture creation failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] and log it with file:line information.
///
/// The first argument may name the error variant to construct; it defaults
/// to `BackendError` when omitted.
///
/// # Example
///
/// ```ignore
/// let err = engine_err!(StateCreation, "nova3d::headless", "max_anisotropy must be >= 1");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::nova3d::Engine::log_detailed(
            $crate::nova3d::log::LogSeverity::Error,
            $source,
            msg.clone(),
            file!(),
            line!(),
        );
        $crate::nova3d::Error::$variant(msg)
    }};
    ($source:expr, $($arg:tt)*) => {
        $crate::engine_err!(BackendError, $source, $($arg)*)
    };
}

/// Log an error and return it from the enclosing function.
///
/// Shorthand for `return Err(engine_err!(...))`.
#[macro_export]
macro_rules! engine_bail {
    ($variant:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($variant, $source, $($arg)*))
    };
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
