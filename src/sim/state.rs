//! Game state and core simulation types

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BOARD_SIZE, INITIAL_SNAKE_LEN};

/// Current status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    /// Waiting for the first direction input
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Suspended; resumed explicitly
    Paused,
    /// Run ended
    Over,
}

/// Movement direction, one grid cell per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this direction. Y grows downward, matching screen rows.
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// True if `other` is the exact 180-degree reversal of `self`
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.delta() + other.delta() == IVec2::ZERO
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Snake body, head first, tail last
    pub snake: Vec<IVec2>,
    /// Current food cell; off the snake whenever one was spawned
    pub food: IVec2,
    /// Direction applied on the next tick
    pub direction: Direction,
    pub status: Status,
    /// Points scored this run
    pub score: u32,
}

impl GameState {
    pub fn head(&self) -> IVec2 {
        self.snake[0]
    }
}

/// The canonical starting snake: a horizontal strip centered on the board,
/// head on the right
pub fn initial_snake() -> Vec<IVec2> {
    let center = BOARD_SIZE / 2;
    (0..INITIAL_SNAKE_LEN as i32)
        .map(|i| IVec2::new(center + 1 - i, center))
        .collect()
}

/// True if `cell` lies on the board
pub fn in_bounds(cell: IVec2) -> bool {
    cell.x >= 0 && cell.x < BOARD_SIZE && cell.y >= 0 && cell.y < BOARD_SIZE
}

/// All board cells not occupied by `snake`, in row-major order
pub fn free_cells(snake: &[IVec2]) -> Vec<IVec2> {
    let mut cells = Vec::with_capacity((BOARD_SIZE * BOARD_SIZE) as usize);
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let cell = IVec2::new(x, y);
            if !snake.contains(&cell) {
                cells.push(cell);
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_unit_steps() {
        assert_eq!(Direction::Up.delta(), IVec2::new(0, -1));
        assert_eq!(Direction::Down.delta(), IVec2::new(0, 1));
        assert_eq!(Direction::Left.delta(), IVec2::new(-1, 0));
        assert_eq!(Direction::Right.delta(), IVec2::new(1, 0));
    }

    #[test]
    fn opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn initial_snake_is_centered_strip() {
        let snake = initial_snake();
        assert_eq!(
            snake,
            vec![IVec2::new(10, 9), IVec2::new(9, 9), IVec2::new(8, 9)]
        );
    }

    #[test]
    fn bounds_checking() {
        assert!(in_bounds(IVec2::new(0, 0)));
        assert!(in_bounds(IVec2::new(17, 17)));
        assert!(!in_bounds(IVec2::new(-1, 0)));
        assert!(!in_bounds(IVec2::new(18, 0)));
        assert!(!in_bounds(IVec2::new(0, 18)));
    }

    #[test]
    fn free_cells_excludes_snake() {
        let snake = initial_snake();
        let free = free_cells(&snake);
        assert_eq!(free.len(), (18 * 18 - 3) as usize);
        for segment in &snake {
            assert!(!free.contains(segment));
        }
    }
}
