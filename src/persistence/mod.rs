//! Best-score persistence
//!
//! Exactly one scalar survives across games and restarts: the best score,
//! stored as a base-10 integer string under a fixed key in an external
//! key-value store. Absent or corrupt values read as 0 and never reach the
//! engine as errors.

use std::collections::HashMap;

use crate::consts::BEST_SCORE_KEY;

/// The external key-value store the best score lives in
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Read the persisted best score, defaulting to 0
pub fn load_best_score<S: ScoreStore>(store: &S) -> u32 {
    match store
        .get(BEST_SCORE_KEY)
        .and_then(|raw| raw.trim().parse().ok())
    {
        Some(best) => {
            log::info!("Loaded best score {}", best);
            best
        }
        None => {
            log::info!("No stored best score, starting fresh");
            0
        }
    }
}

/// Persist a new best score
pub fn save_best_score<S: ScoreStore>(store: &mut S, best: u32) {
    store.set(BEST_SCORE_KEY, &best.to_string());
    log::info!("Best score saved ({})", best);
}

/// In-memory store: the native default, and the test double
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        storage.and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("LocalStorage write failed for {}", key);
            }
        }
    }
}
