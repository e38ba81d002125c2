// board.rs - Toroidal board for Conway's Game of Life

use std::fmt;
use std::hash::{Hash, Hasher};

/// Fixed-size grid of live/dead cells whose edges wrap around.
///
/// The left and right columns are adjacent, as are the top and bottom rows,
/// so every cell has exactly eight neighbours.
#[derive(Debug, Clone)]
pub struct Board {
    width   : usize,
    height  : usize,
    cells   : Vec<bool>,     // Row-major, width * height
    scratch : Vec<bool>,     // Next generation is written here, then swapped in
}

impl Board {
    /// Creates a `width` x `height` board with every cell dead.
    ///
    /// Panics if either dimension is zero or the cell count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero, got {width}x{height}");
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("board of {width}x{height} cells overflows usize"));
        Self {
            width,
            height,
            cells   : vec![false; len],
            scratch : vec![false; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn check(&self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} board", self.width, self.height
        );
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        self.check(x, y);
        y * self.width + x
    }

    /// Maps any signed coordinate onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (
            x.rem_euclid(self.width as i64) as usize,
            y.rem_euclid(self.height as i64) as usize,
        )
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        let idx = self.idx(x, y);
        self.cells[idx] = state;
    }

    /// Flips a single cell between live and dead.
    pub fn invert(&mut self, x: usize, y: usize) {
        let idx = self.idx(x, y);
        self.cells[idx] = !self.cells[idx];
    }

    /// Counts live cells among the eight surrounding `(x, y)`, wrapping at the edges.
    pub fn neighbours(&self, x: usize, y: usize) -> u8 {
        self.check(x, y);
        Self::count_neighbours(&self.cells, self.width, self.height, x, y)
    }

    fn count_neighbours(cells: &[bool], width: usize, height: usize, x: usize, y: usize) -> u8 {
        let left  = (x + width - 1) % width;
        let right = (x + 1) % width;
        let up    = (y + height - 1) % height;
        let down  = (y + 1) % height;

        let neighbours = [
            (left, up),   (x, up),   (right, up),
            (left, y),               (right, y),
            (left, down), (x, down), (right, down),
        ];

        neighbours
            .iter()
            .filter(|&&(nx, ny)| cells[ny * width + nx])
            .count() as u8
    }

    /// Advances the whole board by one generation.
    ///
    /// Every next state is computed from the current generation into the
    /// scratch buffer, which replaces the live grid once the pass is done.
    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        for y in 0..height {
            for x in 0..width {
                let count = Self::count_neighbours(&self.cells, width, height, x, y);
                self.scratch[y * width + x] = match (self.cells[y * width + x], count) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx % width, idx / width))
    }
}

// The scratch buffer is transient and takes no part in identity.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        self.cells.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
