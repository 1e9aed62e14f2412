/// Nova3D Engine - global registry for engine subsystems
///
/// This module provides global management of named render-object factories
/// and the logging system. It uses thread-safe static storage with RwLock
/// for safe concurrent access.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::graphics_device::{GraphicsDevice, RenderObjectFactory};
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine globals
struct EngineState {
    /// Named render-object factories (each wrapped in a Mutex for
    /// thread-safe mutable access to the state pools)
    factories: RwLock<HashMap<String, Arc<Mutex<RenderObjectFactory>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine registry
///
/// Manages the lifecycle of named render-object factories using
/// thread-safe global storage.
///
/// # Example
///
/// ```no_run
/// use nova_3d_engine::nova3d::Engine;
/// use nova_3d_engine::nova3d::render::Config;
/// use nova_3d_engine_device_headless::HeadlessGraphicsDevice;
///
/// // Initialize engine
/// Engine::initialize()?;
///
/// // Create a factory backed by a device
/// let factory = Engine::create_factory("main", HeadlessGraphicsDevice::new(Config::default()))?;
///
/// // Access it globally later
/// let same = Engine::factory("main")?;
///
/// // Cleanup
/// Engine::shutdown();
/// # Ok::<(), nova_3d_engine::nova3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Helper to log errors before returning them (internal use)
    ///
    /// Ensures all Engine errors are logged with proper severity and
    /// source information.
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("nova3d::Engine", "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::engine_error!("nova3d::Engine", "Backend error: {}", msg);
            }
            _ => {
                crate::engine_error!("nova3d::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    /// Initialize the engine
    ///
    /// Must be called once at application startup before creating any
    /// factories. Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// Currently always succeeds, but returns Result for future extensibility.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the engine and destroy all registered factories
    ///
    /// Existing factory references held by callers remain valid until
    /// dropped; the registry itself is emptied.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut factories) = state.factories.write() {
                factories.clear();
            }
        }
    }

    /// Create and register a named render-object factory
    ///
    /// Wraps the device in a [`RenderObjectFactory`] and registers it
    /// under `name`.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique factory name (e.g., "main", "shadow")
    /// * `device` - Any type implementing the GraphicsDevice trait
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A factory with this name already exists
    /// - The registry lock is poisoned
    pub fn create_factory<D: GraphicsDevice + 'static>(
        name: &str,
        device: D,
    ) -> Result<Arc<Mutex<RenderObjectFactory>>> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))?;

        let mut factories = state.factories.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Factory registry lock poisoned".to_string())
            ))?;

        if factories.contains_key(name) {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed(format!(
                    "Factory '{}' already exists. Call Engine::destroy_factory() first.", name
                ))
            ));
        }

        let factory = Arc::new(Mutex::new(RenderObjectFactory::new(Box::new(device))));
        factories.insert(name.to_string(), Arc::clone(&factory));

        crate::engine_info!("nova3d::Engine", "Factory '{}' registered", name);

        Ok(factory)
    }

    /// Get a registered factory by name
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - No factory with this name exists
    pub fn factory(name: &str) -> Result<Arc<Mutex<RenderObjectFactory>>> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))?;

        let factories = state.factories.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Factory registry lock poisoned".to_string())
            ))?;

        factories.get(name)
            .cloned()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed(format!("Factory '{}' not found", name))
            ))
    }

    /// Destroy a registered factory
    ///
    /// Removes the factory from the registry. Destroying a name that is
    /// not registered is a no-op. Existing references remain valid until
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn destroy_factory(name: &str) -> Result<()> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized".to_string())
            ))?;

        let mut factories = state.factories.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Factory registry lock poisoned".to_string())
            ))?;

        if factories.remove(name).is_some() {
            crate::engine_info!("nova3d::Engine", "Factory '{}' destroyed", name);
        }

        Ok(())
    }

    /// Number of registered factories (0 when the engine is uninitialized)
    pub fn factory_count() -> usize {
        ENGINE_STATE.get()
            .and_then(|state| state.factories.read().ok().map(|f| f.len()))
            .unwrap_or(0)
    }

    /// Names of all registered factories (empty when uninitialized)
    pub fn factory_names() -> Vec<String> {
        ENGINE_STATE.get()
            .and_then(|state| state.factories.read().ok().map(|f| f.keys().cloned().collect()))
            .unwrap_or_default()
    }

    /// Reset all registry state for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut factories) = state.factories.write() {
                factories.clear();
            }
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (file
    /// logger, network logger, etc.)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nova_3d_engine::nova3d::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "nova3d::Engine")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! and engine_err! macros to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
