//! Platform glue
//!
//! Browser/native differences the engine itself must not know about:
//! - Logging sink (browser console vs. env_logger)
//! - Which score store backs persistence

use crate::persistence;

/// Initialize the `log` facade. Call once from the host before
/// constructing the engine; repeated calls are harmless.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// The score store suited to the target: browser LocalStorage on wasm32,
/// process-local memory elsewhere
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> persistence::MemoryStore {
    persistence::MemoryStore::default()
}

#[cfg(target_arch = "wasm32")]
pub fn default_store() -> persistence::LocalStore {
    persistence::LocalStore
}
