//! Game settings: difficulty presets and boundary mode
//!
//! The engine only honors changes while no run is active.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tick-speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Chill,
    #[default]
    Classic,
    Turbo,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Chill => "Chill",
            Difficulty::Classic => "Classic",
            Difficulty::Turbo => "Turbo",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chill" => Some(Difficulty::Chill),
            "classic" => Some(Difficulty::Classic),
            "turbo" => Some(Difficulty::Turbo),
            _ => None,
        }
    }

    /// Interval between simulation ticks
    pub fn tick_interval(&self) -> Duration {
        match self {
            Difficulty::Chill => Duration::from_millis(220),
            Difficulty::Classic => Duration::from_millis(150),
            Difficulty::Turbo => Duration::from_millis(90),
        }
    }
}

/// What happens when the snake crosses the board edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryMode {
    /// Crossing the edge ends the run
    #[default]
    Wall,
    /// The snake reappears on the opposite edge
    Wrap,
}

impl BoundaryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryMode::Wall => "Wall",
            BoundaryMode::Wrap => "Wrap",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wall" => Some(BoundaryMode::Wall),
            // "pass" is the key the touch UI historically used for wrap
            "wrap" | "pass" => Some(BoundaryMode::Wrap),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub boundary: BoundaryMode,
}
