// cell.rs - A single automaton cell and its time-based shape morph

use crate::config::CellStyle;
use crate::shape::{CellShape, Point};

/// One cell of the grid: discrete Life state plus the transition
/// timestamp that drives the continuous square/circle morph.
///
/// The discrete state only ever changes inside `Grid::evaluate`, and
/// `last_transition` is updated in the same commit, so the renderer can
/// always reconstruct where a cell is in its morph from a timestamp
/// alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) alive: bool,
    /// Staged result of the next rule evaluation; committed as `alive`
    /// in the second pass of `Grid::evaluate`.
    pub(crate) pending: bool,
    /// Timestamp of the most recent alive/dead flip, in the driver's
    /// clock domain. `NEG_INFINITY` means the cell never transitioned.
    pub(crate) last_transition: f64,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize, alive: bool) -> Self {
        Self {
            x,
            y,
            alive,
            pending: alive,
            last_transition: f64::NEG_INFINITY,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn last_transition(&self) -> f64 {
        self.last_transition
    }

    /// Corner radius at render time `now`.
    ///
    /// Linear over the morph window `T`: an alive cell animates from a
    /// full-radius circle down to a sharp square (radius 0), a dead cell
    /// the other way. Once `T` has elapsed (or if the cell never flipped)
    /// the radius rests at exactly 0 or `w`.
    pub fn corner_radius(&self, now: f64, style: &CellStyle) -> f32 {
        let w = style.cell_size;
        let elapsed = (now - self.last_transition).max(0.0);
        if elapsed >= style.morph_window {
            return if self.alive { 0.0 } else { w };
        }
        let progress = (elapsed / style.morph_window) as f32;
        if self.alive {
            (1.0 - progress) * w
        } else {
            progress * w
        }
    }

    /// Geometry for render time `now`, positioned on the grid pitch.
    ///
    /// Below half the box size the cell is a filleted square; at and
    /// above it, a centered circle of radius `w - r` so the two regimes
    /// meet at the inscribed circle.
    pub fn shape(&self, now: f64, style: &CellStyle) -> CellShape {
        let w = style.cell_size;
        let radius = self.corner_radius(now, style);
        let min = Point::new(
            self.x as f32 * style.pitch(),
            self.y as f32 * style.pitch(),
        );
        if radius < w / 2.0 {
            CellShape::RoundedSquare {
                min,
                size: w,
                radius,
            }
        } else {
            CellShape::Circle {
                center: Point::new(min.x + w / 2.0, min.y + w / 2.0),
                radius: (w - radius).max(0.0),
            }
        }
    }
}
