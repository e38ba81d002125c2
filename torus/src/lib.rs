// lib.rs - Conway's Game of Life on a wraparound board
//
// The board knows nothing about windows or input. A caller owns it, feeds it
// clicks through `invert` and timer ticks through `update`, and reads it back
// with `get` to draw.

mod board;
pub mod patterns;

pub use board::Board;
pub use patterns::{Pattern, PATTERNS};
