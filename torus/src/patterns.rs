// patterns.rs - Seed shapes and random fills for a Board

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::Board;

/// A named shape, as `(x, y)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

impl Pattern {
    /// Width and height of the pattern's bounding box.
    pub fn size(&self) -> (i64, i64) {
        let width = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let height = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (width, height)
    }

    /// Sets the pattern's cells live with its top-left corner at the origin.
    /// Cells that run past an edge wrap around; the rest of the board is left alone.
    pub fn place(&self, board: &mut Board, origin_x: i64, origin_y: i64) {
        for &(dx, dy) in self.cells {
            let (x, y) = board.wrap(origin_x + dx, origin_y + dy);
            board.set(x, y, true);
        }
        debug!(pattern = self.name, origin_x, origin_y, "placed pattern");
    }

    /// Clears the board and places the pattern in the middle of it.
    pub fn place_centered(&self, board: &mut Board) {
        board.clear();
        let (width, height) = self.size();
        let origin_x = (board.width() as i64 - width) / 2;
        let origin_y = (board.height() as i64 - height) / 2;
        self.place(board, origin_x, origin_y);
    }
}

/// Index into `PATTERNS` of the pattern with this name, ignoring case.
pub fn position(name: &str) -> Option<usize> {
    PATTERNS.iter().position(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    position(name).map(|index| &PATTERNS[index])
}

/// Clears the board, then makes each cell live with probability `density`.
/// The same seed always produces the same board.
pub fn fill_random(board: &mut Board, seed: u64, density: f64) {
    board.clear();
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);

    for y in 0..board.height() {
        for x in 0..board.width() {
            if rng.gen_bool(density) {
                board.set(x, y, true);
            }
        }
    }
    debug!(seed, density, population = board.population(), "filled board at random");
}
