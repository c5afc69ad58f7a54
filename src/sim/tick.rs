//! Fixed-tick simulation step
//!
//! Advances the snake by exactly one cell per call. Boundary handling is
//! evaluated before body collision, so a corner hit in Wall mode reports
//! as a wall hit.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Direction, GameState, Status, free_cells, in_bounds, initial_snake};
use crate::consts::{BOARD_SIZE, FOOD_SCORE};
use crate::settings::{BoundaryMode, Settings};

/// Food cell used when a fresh board has no free cell to offer
pub const FOOD_FALLBACK: IVec2 = IVec2::new(0, 0);

/// Start a fresh run: canonical snake, heading right, idle, score 0
pub fn new_game(rng: &mut Pcg32) -> GameState {
    let snake = initial_snake();
    let food = spawn_food(&snake, rng).unwrap_or(FOOD_FALLBACK);
    GameState {
        snake,
        food,
        direction: Direction::Right,
        status: Status::Idle,
        score: 0,
    }
}

/// Pick a food cell uniformly over the cells `snake` does not occupy.
/// Enumerates the free cells outright instead of rejection-sampling, so a
/// nearly full board still terminates. `None` when the board is full.
pub fn spawn_food(snake: &[IVec2], rng: &mut Pcg32) -> Option<IVec2> {
    let free = free_cells(snake);
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

/// Record a direction request. Exact reversals are ignored; any request
/// while idle starts the run. Ignored entirely once the run is over.
pub fn set_direction(state: &mut GameState, dir: Direction) {
    if state.status == Status::Over {
        return;
    }
    if !state.direction.is_opposite(dir) {
        state.direction = dir;
    }
    if state.status == Status::Idle {
        state.status = Status::Running;
    }
}

/// Advance the game by one tick. Does nothing unless the run is active.
pub fn tick(state: &mut GameState, settings: &Settings, rng: &mut Pcg32) {
    if state.status != Status::Running {
        return;
    }

    let mut new_head = state.head() + state.direction.delta();

    if !in_bounds(new_head) {
        match settings.boundary {
            BoundaryMode::Wrap => {
                new_head = new_head.rem_euclid(IVec2::splat(BOARD_SIZE));
            }
            BoundaryMode::Wall => {
                log::debug!("Wall hit at {:?}", new_head);
                state.status = Status::Over;
                return;
            }
        }
    }

    // Checked against the pre-move body, tail included: stepping into the
    // cell the tail is about to vacate still ends the run.
    if state.snake.contains(&new_head) {
        log::debug!("Body hit at {:?}", new_head);
        state.status = Status::Over;
        return;
    }

    state.snake.insert(0, new_head);

    if new_head == state.food {
        state.score += FOOD_SCORE;
        match spawn_food(&state.snake, rng) {
            Some(food) => state.food = food,
            // The snake covers the whole board; nowhere left to go
            None => state.status = Status::Over,
        }
    } else {
        state.snake.pop();
    }
}
