// config.rs - Command-line configuration for the viewer

use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use torus_life::patterns;

// 48x27 cells at 20px fills a 960x540 window
pub const DEFAULT_WIDTH: usize = 48;
pub const DEFAULT_HEIGHT: usize = 27;
pub const DEFAULT_CELL_SIZE: f32 = 20.0;
pub const DEFAULT_TICKS_PER_SECOND: f64 = 8.0;
pub const DEFAULT_DENSITY: f64 = 0.33;

pub const MIN_TICKS_PER_SECOND: f64 = 0.1;
pub const MAX_TICKS_PER_SECOND: f64 = 1000.0;
pub const MAX_CELLS: usize = 1 << 22;

#[derive(Debug, Clone, Parser)]
#[command(name = "life_viewer", version, about = "Conway's Game of Life on a wraparound board")]
pub struct Config {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Size of one cell on screen, in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,

    /// Generations per second while running
    #[arg(long, default_value_t = DEFAULT_TICKS_PER_SECOND)]
    pub ticks_per_second: f64,

    /// Pattern to place in the middle of the board at start
    #[arg(long, conflicts_with = "seed")]
    pub pattern: Option<String>,

    /// Fill the board at random from this seed at start
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fraction of cells alive after a random fill
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Tracing filter, e.g. `info` or `life_viewer=debug`
    #[arg(long, default_value = "info")]
    pub log: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    #[error("board of {width}x{height} cells is larger than {max} cells", max = MAX_CELLS)]
    BoardTooLarge { width: usize, height: usize },
    #[error("cell size must be a positive number of pixels, got {0}")]
    CellSize(f32),
    #[error("ticks per second must be between {min} and {max}, got {0}", min = MIN_TICKS_PER_SECOND, max = MAX_TICKS_PER_SECOND)]
    TickRate(f64),
    #[error("density must be between 0 and 1, got {0}")]
    Density(f64),
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            pattern: None,
            seed: None,
            density: DEFAULT_DENSITY,
            log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard { width: self.width, height: self.height });
        }
        if !self.width.checked_mul(self.height).is_some_and(|cells| cells <= MAX_CELLS) {
            return Err(ConfigError::BoardTooLarge { width: self.width, height: self.height });
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(MIN_TICKS_PER_SECOND..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return Err(ConfigError::TickRate(self.ticks_per_second));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        if let Some(name) = &self.pattern {
            if patterns::find(name).is_none() {
                return Err(ConfigError::UnknownPattern(name.clone()));
            }
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second)
    }

    /// Window size that fits the grid plus the control panel around it.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.width as f32 * self.cell_size + 40.0,
            self.height as f32 * self.cell_size + 200.0,
        ]
    }
}
