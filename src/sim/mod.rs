//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, one cell of movement per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Direction, GameState, Status, free_cells, in_bounds, initial_snake};
pub use tick::{FOOD_FALLBACK, new_game, set_direction, spawn_food, tick};
