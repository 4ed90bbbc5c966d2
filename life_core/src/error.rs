// error.rs - Construction-time errors
//
// The grid is only fallible at construction; everything after a grid
// exists is infallible.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Either grid dimension is zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// A pattern row has a different length from the first row.
    #[error("pattern row {row} has length {len}, expected {expected}")]
    RaggedPattern {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The pattern footprint does not fit in the grid after horizontal
    /// centering and vertical offset.
    #[error(
        "pattern {pattern_width}x{pattern_height} at offset {offset} \
         does not fit in grid {grid_width}x{grid_height}"
    )]
    PatternDoesNotFit {
        pattern_width: usize,
        pattern_height: usize,
        offset: usize,
        grid_width: usize,
        grid_height: usize,
    },
}
