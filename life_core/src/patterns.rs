// patterns.rs - Static seed matrices for grid construction

use crate::error::GridError;

/// A named seed: a rectangular boolean matrix consumed row-major when the
/// grid is constructed in pattern mode.
#[derive(Clone, Copy, Debug)]
pub struct Pattern<'a> {
    pub name: &'a str,
    pub rows: &'a [&'a [bool]],
}

impl Pattern<'_> {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// All rows must share the first row's length.
    pub fn validate(&self) -> Result<(), GridError> {
        let expected = self.width();
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(GridError::RaggedPattern {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
        }
        Ok(())
    }
}

const O: bool = true;
const N: bool = false;

pub const PATTERNS: &[Pattern<'static>] = &[
    Pattern {
        name: "Glider",
        rows: &[
            &[N, O, N],
            &[N, N, O],
            &[O, O, O],
        ],
    },
    Pattern {
        name: "Blinker",
        rows: &[&[O, O, O]],
    },
    Pattern {
        name: "Toad",
        rows: &[
            &[N, O, O, O],
            &[O, O, O, N],
        ],
    },
    Pattern {
        name: "Beacon",
        rows: &[
            &[O, O, N, N],
            &[O, O, N, N],
            &[N, N, O, O],
            &[N, N, O, O],
        ],
    },
    Pattern {
        name: "R-pentomino",
        rows: &[
            &[N, O, O],
            &[O, O, N],
            &[N, O, N],
        ],
    },
    Pattern {
        name: "Pulsar",
        rows: &[
            &[N, N, O, O, O, N, N, N, O, O, O, N, N],
            &[N, N, N, N, N, N, N, N, N, N, N, N, N],
            &[O, N, N, N, N, O, N, O, N, N, N, N, O],
            &[O, N, N, N, N, O, N, O, N, N, N, N, O],
            &[O, N, N, N, N, O, N, O, N, N, N, N, O],
            &[N, N, O, O, O, N, N, N, O, O, O, N, N],
            &[N, N, N, N, N, N, N, N, N, N, N, N, N],
            &[N, N, O, O, O, N, N, N, O, O, O, N, N],
            &[O, N, N, N, N, O, N, O, N, N, N, N, O],
            &[O, N, N, N, N, O, N, O, N, N, N, N, O],
            &[O, N, N, N, N, O, N, O, N, N, N, N, O],
            &[N, N, N, N, N, N, N, N, N, N, N, N, N],
            &[N, N, O, O, O, N, N, N, O, O, O, N, N],
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        rows: &[
            &[N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, O, N, N, N, N, N, N, N, N, N, N, N],
            &[N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, O, N, O, N, N, N, N, N, N, N, N, N, N, N],
            &[N, N, N, N, N, N, N, N, N, N, N, N, O, O, N, N, N, N, N, N, O, O, N, N, N, N, N, N, N, N, N, N, N, N, O, O],
            &[N, N, N, N, N, N, N, N, N, N, N, O, N, N, N, O, N, N, N, N, O, O, N, N, N, N, N, N, N, N, N, N, N, N, O, O],
            &[O, O, N, N, N, N, N, N, N, N, O, N, N, N, N, N, O, N, N, N, O, O, N, N, N, N, N, N, N, N, N, N, N, N, N, N],
            &[O, O, N, N, N, N, N, N, N, N, O, N, N, N, O, N, O, O, N, N, N, N, O, N, O, N, N, N, N, N, N, N, N, N, N, N],
            &[N, N, N, N, N, N, N, N, N, N, O, N, N, N, N, N, O, N, N, N, N, N, N, N, O, N, N, N, N, N, N, N, N, N, N, N],
            &[N, N, N, N, N, N, N, N, N, N, N, O, N, N, N, O, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N],
            &[N, N, N, N, N, N, N, N, N, N, N, N, O, O, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N],
        ],
    },
];
