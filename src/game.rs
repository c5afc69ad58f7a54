//! Engine facade
//!
//! Owns the authoritative game state, the tick clock, and the best-score
//! record. The presentation layer feeds discrete input events in and pulls
//! a read-only snapshot back out; it never mutates state directly.

use std::time::Duration;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::clock::TickClock;
use crate::persistence::{self, ScoreStore};
use crate::settings::{BoundaryMode, Difficulty, Settings};
use crate::sim::{self, Direction, GameState, Status};

/// Read-only view of engine state, pulled after each observable change
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub snake: &'a [IVec2],
    pub food: IVec2,
    pub status: Status,
    pub score: u32,
    pub best_score: u32,
    pub settings: Settings,
}

/// The game engine
pub struct Game<S: ScoreStore> {
    state: GameState,
    settings: Settings,
    clock: TickClock,
    rng: Pcg32,
    best_score: u32,
    store: S,
}

impl<S: ScoreStore> Game<S> {
    /// Create an engine holding a fresh idle game. The best score is read
    /// from `store` once, here; absent or unparseable values count as 0.
    pub fn new(settings: Settings, store: S, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = sim::new_game(&mut rng);
        let best_score = persistence::load_best_score(&store);
        log::info!("Engine ready, seed {}, best score {}", seed, best_score);
        Self {
            state,
            clock: TickClock::new(settings.difficulty.tick_interval()),
            settings,
            rng,
            best_score,
            store,
        }
    }

    /// Feed elapsed real time from the host's frame callback and run every
    /// tick that came due. While paused or idle the clock is suspended and
    /// this does nothing.
    pub fn advance(&mut self, elapsed: Duration) {
        for _ in 0..self.clock.advance(elapsed) {
            self.tick();
        }
    }

    /// Advance the simulation by exactly one step. No-op unless running.
    /// Exposed for hosts that drive their own timer, and for tests.
    pub fn tick(&mut self) {
        if self.state.status != Status::Running {
            return;
        }
        sim::tick(&mut self.state, &self.settings, &mut self.rng);
        if self.state.status == Status::Over {
            self.finish_run();
        }
    }

    /// Direction input from keys or the touch pad. Reversals are ignored;
    /// any direction while idle starts the run.
    pub fn direction_pressed(&mut self, dir: Direction) {
        let was_idle = self.state.status == Status::Idle;
        sim::set_direction(&mut self.state, dir);
        if was_idle && self.state.status == Status::Running {
            self.clock.resume();
            log::debug!("Run started heading {:?}", self.state.direction);
        }
    }

    /// Start, pause, or resume. Pressed while idle or after a crash this
    /// begins a fresh run immediately.
    pub fn start_or_pause(&mut self) {
        match self.state.status {
            Status::Running => {
                self.state.status = Status::Paused;
                self.clock.suspend();
                log::debug!("Paused at score {}", self.state.score);
            }
            Status::Paused => {
                self.state.status = Status::Running;
                self.clock.resume();
            }
            Status::Idle | Status::Over => {
                self.reset();
                self.state.status = Status::Running;
                self.clock.resume();
            }
        }
    }

    /// Abandon the current run and return to idle
    pub fn restart(&mut self) {
        self.reset();
    }

    /// Change tick speed. Ignored mid-run; otherwise the game resets so
    /// the new cadence applies from a clean board.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.state.status == Status::Running {
            log::debug!("Ignoring difficulty change mid-run");
            return;
        }
        self.settings.difficulty = difficulty;
        self.clock.set_interval(difficulty.tick_interval());
        self.reset();
        log::info!("Difficulty set to {}", difficulty.as_str());
    }

    /// Change boundary behavior. Ignored mid-run; otherwise resets.
    pub fn set_boundary_mode(&mut self, boundary: BoundaryMode) {
        if self.state.status == Status::Running {
            log::debug!("Ignoring boundary change mid-run");
            return;
        }
        self.settings.boundary = boundary;
        self.reset();
        log::info!("Boundary mode set to {}", boundary.as_str());
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.state.snake,
            food: self.state.food,
            status: self.state.status,
            score: self.state.score,
            best_score: self.best_score,
            settings: self.settings,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    fn reset(&mut self) {
        self.state = sim::new_game(&mut self.rng);
        self.clock.suspend();
    }

    /// Runs exactly once per transition into `Over`. The write-back is
    /// immediate, so the stored value is current before any later run
    /// starts.
    fn finish_run(&mut self) {
        self.clock.suspend();
        log::info!("Game over at score {}", self.state.score);
        if self.state.score > self.best_score {
            self.best_score = self.state.score;
            persistence::save_best_score(&mut self.store, self.best_score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BEST_SCORE_KEY;
    use crate::persistence::MemoryStore;

    fn game() -> Game<MemoryStore> {
        Game::new(Settings::default(), MemoryStore::default(), 42)
    }

    fn classic_interval() -> Duration {
        Difficulty::Classic.tick_interval()
    }

    #[test]
    fn best_score_loads_from_store() {
        let mut store = MemoryStore::default();
        store.set(BEST_SCORE_KEY, "230");
        let game = Game::new(Settings::default(), store, 1);
        assert_eq!(game.best_score(), 230);
    }

    #[test]
    fn corrupt_best_score_reads_as_zero() {
        let mut store = MemoryStore::default();
        store.set(BEST_SCORE_KEY, "not-a-number");
        let game = Game::new(Settings::default(), store, 1);
        assert_eq!(game.best_score(), 0);
    }

    #[test]
    fn direction_press_starts_idle_game() {
        let mut game = game();
        assert_eq!(game.snapshot().status, Status::Idle);

        game.direction_pressed(Direction::Up);
        assert_eq!(game.snapshot().status, Status::Running);

        // The clock is live now: real time produces movement
        let head_before = game.snapshot().snake[0];
        game.advance(classic_interval());
        assert_ne!(game.snapshot().snake[0], head_before);
    }

    #[test]
    fn advance_releases_one_tick_per_interval() {
        let mut game = game();
        game.direction_pressed(Direction::Right);
        game.advance(classic_interval() * 3);
        // Started at (10,9), three ticks right
        assert_eq!(game.snapshot().snake[0], IVec2::new(13, 9));
    }

    #[test]
    fn pause_suspends_time() {
        let mut game = game();
        game.direction_pressed(Direction::Right);
        game.start_or_pause();
        assert_eq!(game.snapshot().status, Status::Paused);

        let snake_before = game.snapshot().snake.to_vec();
        game.advance(Duration::from_secs(30));
        assert_eq!(game.snapshot().snake, &snake_before[..]);

        // Resume: the 30 paused seconds are gone, not owed
        game.start_or_pause();
        assert_eq!(game.snapshot().status, Status::Running);
        game.advance(classic_interval() / 2);
        assert_eq!(game.snapshot().snake, &snake_before[..]);
    }

    #[test]
    fn start_from_idle_begins_running() {
        let mut game = game();
        game.start_or_pause();
        assert_eq!(game.snapshot().status, Status::Running);
    }

    #[test]
    fn start_after_game_over_is_a_fresh_run() {
        let mut game = game();
        crash(&mut game);
        assert_eq!(game.snapshot().status, Status::Over);

        game.start_or_pause();
        let snap = game.snapshot();
        assert_eq!(snap.status, Status::Running);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.snake.len(), 3);
    }

    #[test]
    fn restart_returns_to_idle() {
        let mut game = game();
        game.direction_pressed(Direction::Down);
        game.advance(classic_interval());
        game.restart();

        let snap = game.snapshot();
        assert_eq!(snap.status, Status::Idle);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.snake[0], IVec2::new(10, 9));
    }

    /// Drive the running snake straight into the right wall
    fn crash(game: &mut Game<MemoryStore>) {
        game.direction_pressed(Direction::Right);
        for _ in 0..20 {
            game.tick();
            if game.snapshot().status == Status::Over {
                return;
            }
        }
        panic!("snake never crashed");
    }

    #[test]
    fn losing_to_a_better_record_keeps_it() {
        let mut store = MemoryStore::default();
        store.set(BEST_SCORE_KEY, "120");
        let mut game = Game::new(Settings::default(), store, 42);

        // A zero-score crash must not write over the stored record
        game.state.food = IVec2::new(0, 0);
        crash(&mut game);
        assert_eq!(game.snapshot().score, 0);
        assert_eq!(game.best_score(), 120);
        assert_eq!(game.store.get(BEST_SCORE_KEY).as_deref(), Some("120"));
    }

    #[test]
    fn best_score_written_through_on_new_record() {
        let mut game = game();
        game.direction_pressed(Direction::Right);

        // Eat exactly one food two cells ahead, then park the food out of
        // the crash path and run into the wall
        game.state.food = IVec2::new(12, 9);
        game.tick();
        game.tick();
        assert_eq!(game.snapshot().score, 10);
        game.state.food = IVec2::new(0, 0);
        crash(&mut game);

        assert_eq!(game.best_score(), 10);
        assert_eq!(
            game.store.get(BEST_SCORE_KEY).as_deref(),
            Some("10"),
            "record must be observable in the store immediately"
        );
    }

    #[test]
    fn settings_locked_while_running() {
        let mut game = game();
        game.direction_pressed(Direction::Right);
        game.advance(classic_interval());
        let snake_before = game.snapshot().snake.to_vec();

        game.set_difficulty(Difficulty::Turbo);
        game.set_boundary_mode(BoundaryMode::Wrap);

        let snap = game.snapshot();
        assert_eq!(snap.settings, Settings::default());
        assert_eq!(snap.status, Status::Running);
        assert_eq!(snap.snake, &snake_before[..]);
    }

    #[test]
    fn settings_change_while_idle_resets_and_applies() {
        let mut game = game();
        game.set_difficulty(Difficulty::Turbo);
        game.set_boundary_mode(BoundaryMode::Wrap);

        let snap = game.snapshot();
        assert_eq!(snap.settings.difficulty, Difficulty::Turbo);
        assert_eq!(snap.settings.boundary, BoundaryMode::Wrap);
        assert_eq!(snap.status, Status::Idle);

        // New cadence is live on the next run
        game.direction_pressed(Direction::Right);
        game.advance(Difficulty::Turbo.tick_interval());
        assert_eq!(game.snapshot().snake[0], IVec2::new(11, 9));
    }

    #[test]
    fn settings_change_allowed_while_paused() {
        let mut game = game();
        game.direction_pressed(Direction::Right);
        game.start_or_pause();
        game.set_boundary_mode(BoundaryMode::Wrap);

        let snap = game.snapshot();
        assert_eq!(snap.settings.boundary, BoundaryMode::Wrap);
        // The paused run was abandoned for a clean board
        assert_eq!(snap.status, Status::Idle);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = Game::new(Settings::default(), MemoryStore::default(), 777);
        let mut b = Game::new(Settings::default(), MemoryStore::default(), 777);

        let script = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ];
        for dir in script {
            a.direction_pressed(dir);
            b.direction_pressed(dir);
            a.tick();
            b.tick();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn wrap_mode_survives_the_edge() {
        let mut game = game();
        game.set_boundary_mode(BoundaryMode::Wrap);
        game.direction_pressed(Direction::Right);
        for _ in 0..8 {
            game.tick();
        }
        let snap = game.snapshot();
        assert_eq!(snap.status, Status::Running);
        assert_eq!(snap.snake[0], IVec2::new(0, 9));
    }
}
