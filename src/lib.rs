//! Snake Codex - a grid snake game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, food, scoring)
//! - `clock`: Fixed-interval tick pacing
//! - `settings`: Difficulty and boundary-mode presets
//! - `game`: Engine facade the presentation layer talks to
//! - `persistence`: Best-score storage collaborator
//! - `platform`: Browser/native glue (logging, storage selection)

pub mod clock;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::{Game, Snapshot};
pub use settings::{BoundaryMode, Difficulty, Settings};
pub use sim::{Direction, GameState, Status};

/// Game configuration constants
pub mod consts {
    /// The board is a square grid of BOARD_SIZE x BOARD_SIZE cells
    pub const BOARD_SIZE: i32 = 18;
    /// Snake length at the start of a run
    pub const INITIAL_SNAKE_LEN: usize = 3;
    /// Points per food eaten
    pub const FOOD_SCORE: u32 = 10;
    /// Maximum ticks released per `advance` call to prevent spiral of death
    pub const MAX_TICKS_PER_ADVANCE: u32 = 8;
    /// Storage key for the persisted best score
    pub const BEST_SCORE_KEY: &str = "snake_codex_best";
}
