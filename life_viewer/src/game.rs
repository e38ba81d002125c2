// game.rs - Control-loop state that owns the board
//
// Running and paused are exclusive: timer ticks only advance the board while
// running, and clicks only toggle cells while paused.

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use egui::Color32;
use torus_life::{patterns, Board, PATTERNS};
use tracing::{debug, info};

use crate::config::{Config, MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND};

const HISTORY_LEN: usize = 10;

pub struct GameOfLife {
    board: Board,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u64,
    pub cell_size: f32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub density: f64,

    history: VecDeque<u64>,     // Hashes of recent generations, newest last
}

impl GameOfLife {
    pub fn new(config: &Config) -> Self {
        let mut game = Self {
            board: Board::new(config.width, config.height),
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.tick_interval(),
            generation: 0,
            cell_size: config.cell_size,
            live_color: Color32::WHITE,
            dead_color: Color32::BLACK,
            selected_pattern: 0,
            density: config.density,
            history: VecDeque::with_capacity(HISTORY_LEN),
        };

        if let Some(name) = &config.pattern {
            if let Some(index) = patterns::position(name) {
                game.selected_pattern = index;
                game.apply_selected_pattern();
            }
        } else if let Some(seed) = config.seed {
            game.randomize(seed);
        }

        game.reset_history();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ticks_per_second(&self) -> f64 {
        1.0 / self.update_interval.as_secs_f64()
    }

    /// Rates outside the range the config accepts are ignored.
    pub fn set_ticks_per_second(&mut self, ticks: f64) {
        if (MIN_TICKS_PER_SECOND..=MAX_TICKS_PER_SECOND).contains(&ticks) {
            self.update_interval = Duration::from_secs_f64(1.0 / ticks);
            debug!(ticks, "changed simulation speed");
        }
    }

    /// Runs one generation if the simulation is running and a full interval
    /// has passed since the previous one. Returns whether a generation ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.duration_since(self.last_update) < self.update_interval {
            return false;
        }
        self.last_update = now;
        self.advance();
        true
    }

    /// Runs a single generation by hand while paused.
    pub fn step(&mut self) -> bool {
        if self.is_running {
            return false;
        }
        self.advance();
        true
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = Instant::now();
        }
        info!(running = self.is_running, generation = self.generation, "toggled simulation");
    }

    /// Inverts the cell under a pixel offset from the grid's top-left corner.
    /// Ignored while running.
    pub fn click(&mut self, px: f32, py: f32) -> Option<(usize, usize)> {
        if self.is_running {
            return None;
        }
        let (x, y) = cell_at(px, py, self.cell_size, self.board.width(), self.board.height())?;
        self.board.invert(x, y);
        self.reset_history();
        debug!(x, y, alive = self.board.get(x, y), "toggled cell");
        Some((x, y))
    }

    pub fn clear(&mut self) {
        self.is_running = false;
        self.board.clear();
        self.generation = 0;
        self.reset_history();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.is_running = false;
            pattern.place_centered(&mut self.board);
            self.generation = 0;
            self.reset_history();
            info!(pattern = pattern.name, "applied pattern");
        }
    }

    pub fn randomize(&mut self, seed: u64) {
        self.is_running = false;
        patterns::fill_random(&mut self.board, seed, self.density);
        self.generation = 0;
        self.reset_history();
        info!(seed, population = self.board.population(), "randomized board");
    }

    fn advance(&mut self) {
        self.board.update();
        self.generation += 1;

        if self.check_for_cycle() {
            self.is_running = false;
            info!(generation = self.generation, population = self.board.population(), "board settled, pausing");
        }
    }

    fn hash_board(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.board.hash(&mut hasher);
        hasher.finish()
    }

    /// Records the current generation; true if it repeats a recent one.
    fn check_for_cycle(&mut self) -> bool {
        let current = self.hash_board();
        if self.history.contains(&current) {
            return true;
        }
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(current);
        false
    }

    fn reset_history(&mut self) {
        self.history.clear();
        let current = self.hash_board();
        self.history.push_back(current);
    }
}

/// Translates a pixel offset from the grid origin into board coordinates.
/// Offsets past the far edges wrap around; negative offsets miss the grid.
pub fn cell_at(px: f32, py: f32, cell_size: f32, width: usize, height: usize) -> Option<(usize, usize)> {
    if !(px >= 0.0 && py >= 0.0) || cell_size <= 0.0 {
        return None;
    }
    let col = (px / cell_size) as usize;
    let row = (py / cell_size) as usize;
    Some((col % width, row % height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(width: usize, height: usize) -> GameOfLife {
        GameOfLife::new(&Config { width, height, ..Config::default() })
    }

    #[test]
    fn cell_at_divides_by_cell_size() {
        assert_eq!(cell_at(0.0, 0.0, 20.0, 48, 27), Some((0, 0)));
        assert_eq!(cell_at(19.9, 39.9, 20.0, 48, 27), Some((0, 1)));
        assert_eq!(cell_at(959.0, 539.0, 20.0, 48, 27), Some((47, 26)));
    }

    #[test]
    fn cell_at_wraps_and_rejects_negative() {
        assert_eq!(cell_at(960.0, 540.0, 20.0, 48, 27), Some((0, 0)));
        assert_eq!(cell_at(-1.0, 10.0, 20.0, 48, 27), None);
        assert_eq!(cell_at(f32::NAN, 10.0, 20.0, 48, 27), None);
    }

    #[test]
    fn click_inverts_only_while_paused() {
        let mut game = game(10, 10);
        assert_eq!(game.click(45.0, 65.0), Some((2, 3)));
        assert!(game.board().get(2, 3));
        assert_eq!(game.click(45.0, 65.0), Some((2, 3)));
        assert!(!game.board().get(2, 3));

        game.toggle_running();
        assert_eq!(game.click(45.0, 65.0), None);
        assert!(!game.board().get(2, 3));
    }

    #[test]
    fn tick_waits_for_the_interval() {
        let mut game = game(10, 10);
        game.selected_pattern = patterns::position("Glider").unwrap();
        game.apply_selected_pattern();
        game.toggle_running();

        let start = game.last_update;
        assert!(!game.tick(start + game.update_interval / 2));
        assert_eq!(game.generation, 0);
        assert!(game.tick(start + game.update_interval));
        assert_eq!(game.generation, 1);
        assert!(!game.tick(start + game.update_interval));
    }

    #[test]
    fn tick_does_nothing_while_paused() {
        let mut game = game(10, 10);
        let later = game.last_update + Duration::from_secs(5);
        assert!(!game.tick(later));
        assert_eq!(game.generation, 0);
    }

    #[test]
    fn step_advances_once_while_paused() {
        let mut game = game(5, 5);
        game.click(25.0, 45.0);
        game.click(45.0, 45.0);
        game.click(65.0, 45.0);
        assert!(game.step());
        assert_eq!(game.generation, 1);
        let live: Vec<_> = game.board().live_cells().collect();
        assert_eq!(live, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn oscillator_pauses_the_simulation() {
        let mut game = game(5, 5);
        game.selected_pattern = patterns::position("Blinker").unwrap();
        game.apply_selected_pattern();
        game.toggle_running();

        let mut now = game.last_update;
        now += game.update_interval;
        assert!(game.tick(now));
        assert!(game.is_running);
        now += game.update_interval;
        assert!(game.tick(now));
        assert!(!game.is_running, "blinker repeats after two generations");
        assert_eq!(game.generation, 2);
    }

    #[test]
    fn empty_board_settles_immediately() {
        let mut game = game(6, 6);
        game.toggle_running();
        let now = game.last_update + game.update_interval;
        assert!(game.tick(now));
        assert!(!game.is_running);
    }

    #[test]
    fn starting_pattern_comes_from_config() {
        let config = Config { width: 9, height: 9, pattern: Some("blinker".into()), ..Config::default() };
        let game = GameOfLife::new(&config);
        assert_eq!(game.board().population(), 3);
        assert_eq!(PATTERNS[game.selected_pattern].name, "Blinker");
    }

    #[test]
    fn starting_pattern_name_ignores_case() {
        let config = Config { width: 40, height: 20, pattern: Some("GOSPER glider GUN".into()), ..Config::default() };
        let game = GameOfLife::new(&config);
        assert_eq!(PATTERNS[game.selected_pattern].name, "Gosper Glider Gun");
        assert_eq!(game.board().population(), PATTERNS[game.selected_pattern].cells.len());
    }

    #[test]
    fn random_seed_comes_from_config() {
        let config = Config { width: 16, height: 16, seed: Some(9), ..Config::default() };
        let a = GameOfLife::new(&config);
        let b = GameOfLife::new(&config);
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn clear_resets_generation() {
        let mut game = game(5, 5);
        game.click(0.0, 0.0);
        game.step();
        game.clear();
        assert_eq!(game.generation, 0);
        assert_eq!(game.board().population(), 0);
    }

    #[test]
    fn speed_changes_interval() {
        let mut game = game(5, 5);
        game.set_ticks_per_second(4.0);
        assert_eq!(game.update_interval, Duration::from_millis(250));
        game.set_ticks_per_second(0.0);
        assert_eq!(game.update_interval, Duration::from_millis(250));
        game.set_ticks_per_second(1e-30);
        assert_eq!(game.update_interval, Duration::from_millis(250));
        game.set_ticks_per_second(1e12);
        assert_eq!(game.update_interval, Duration::from_millis(250));
        game.set_ticks_per_second(f64::NAN);
        assert_eq!(game.update_interval, Duration::from_millis(250));
        assert!((game.ticks_per_second() - 4.0).abs() < 1e-9);
    }
}
