// shape.rs - Drawable cell geometry, free of any GUI types
//
// The renderer gets one closed contour per cell and composites them
// itself; everything here is plain 2D math so it stays testable without
// a paint surface.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// A point in render space (y grows downward, matching paint surfaces).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The geometry a cell emits for a given render timestamp.
///
/// Two regimes rather than one uniform rounded-rect formula: below half
/// the box size the shape is a square with filleted corners, above it a
/// shrinking centered circle. The regimes coincide at `radius == size/2`
/// (a circle inscribed in the box), so the morph passes through a true
/// circle and a true square instead of approximating them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellShape {
    /// A `size`x`size` box at `min` with each corner filleted by `radius`
    /// (a quarter arc tangent to both adjoining edges). `radius == 0.0`
    /// is a plain square.
    RoundedSquare { min: Point, size: f32, radius: f32 },
    /// A circle centered in the cell box. Degenerates to nothing at
    /// `radius == 0.0` (a fully settled dead cell).
    Circle { center: Point, radius: f32 },
}

impl CellShape {
    /// Flattens the shape into one closed convex contour, traced
    /// clockwise in screen coordinates. `arc_segments` controls how many
    /// line segments approximate each quarter arc (and, times four, the
    /// full circle). A degenerate circle yields an empty contour.
    pub fn outline(&self, arc_segments: usize) -> Vec<Point> {
        match *self {
            CellShape::RoundedSquare { min, size, radius } => {
                rounded_square_outline(min, size, radius, arc_segments)
            }
            CellShape::Circle { center, radius } => {
                circle_outline(center, radius, arc_segments)
            }
        }
    }
}

fn rounded_square_outline(min: Point, size: f32, radius: f32, arc_segments: usize) -> Vec<Point> {
    let max = Point::new(min.x + size, min.y + size);
    if radius <= 0.0 {
        return vec![
            Point::new(min.x, min.y),
            Point::new(max.x, min.y),
            Point::new(max.x, max.y),
            Point::new(min.x, max.y),
        ];
    }

    // Quarter-arc centers, visited top-left -> top-right -> bottom-right
    // -> bottom-left so consecutive tangent points form the straight
    // edges implicitly.
    let corners = [
        (Point::new(min.x + radius, min.y + radius), PI),
        (Point::new(max.x - radius, min.y + radius), PI + FRAC_PI_2),
        (Point::new(max.x - radius, max.y - radius), 0.0),
        (Point::new(min.x + radius, max.y - radius), FRAC_PI_2),
    ];

    let segments = arc_segments.max(1);
    let mut points = Vec::with_capacity(4 * (segments + 1));
    for (center, start) in corners {
        for step in 0..=segments {
            let angle = start + FRAC_PI_2 * step as f32 / segments as f32;
            points.push(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
    }
    points
}

fn circle_outline(center: Point, radius: f32, arc_segments: usize) -> Vec<Point> {
    if radius <= 0.0 {
        return Vec::new();
    }
    let segments = (4 * arc_segments.max(1)).max(8);
    (0..segments)
        .map(|step| {
            let angle = TAU * step as f32 / segments as f32;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
