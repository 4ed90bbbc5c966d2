// config.rs - Tuning values for the simulation and the morph animation
//
// Everything here is a presentation/tuning default, not an invariant.
// The core never reads a clock; all timestamps flow in through these
// intervals and the driver-supplied `now`.

/// Master configuration, passed to both the grid and the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    /// Grid width in cells.
    pub grid_width: usize,
    /// Grid height in cells.
    pub grid_height: usize,
    /// Milliseconds between discrete generations.
    pub evolution_interval: f64,
    /// Frame-rate cap for the geometry pass; excess callbacks are no-ops.
    pub max_fps: f64,
    /// Random seeding: cells further than this (in cell units) from the
    /// grid center are always seeded dead.
    pub seed_radius: f32,
    /// Default vertical offset (in rows) when applying a seed pattern.
    pub pattern_offset: usize,
    /// Per-cell shape parameters.
    pub style: CellStyle,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_width: 50,
            grid_height: 50,
            evolution_interval: 500.0,
            max_fps: 60.0,
            seed_radius: 9.0,
            pattern_offset: 10,
            style: CellStyle::default(),
        }
    }
}

/// Shape parameters for a single cell box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellStyle {
    /// Side length `w` of the cell box.
    pub cell_size: f32,
    /// Gap between adjacent cell boxes.
    pub padding: f32,
    /// Interpolation window `T` in milliseconds: how long a cell takes to
    /// morph between square and circle after a state flip.
    pub morph_window: f64,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            padding: 0.5,
            morph_window: 900.0,
        }
    }
}

impl CellStyle {
    /// Grid pitch: distance between the origins of adjacent cell boxes.
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.padding
    }
}
