//! Core of the morphing Game of Life: a toroidal grid running the
//! standard B3/S23 rule, where each cell remembers when it last flipped
//! and renders as a shape that morphs between a square (alive) and a
//! circle (dead) over a fixed time window.
//!
//! The crate is driver-agnostic: timestamps come in from outside, and
//! geometry goes out as plain contours. See `life_display` for the
//! eframe front end.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod shape;

pub use cell::Cell;
pub use config::{CellStyle, LifeConfig};
pub use error::GridError;
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use shape::{CellShape, Point};
