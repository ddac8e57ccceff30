//! Fixed hexagon geometry: corner offsets, solid/blend split, terrace steps.
//!
//! Cells are pointy-top hexagons in the XZ plane with +Y up. Corner 0 sits on
//! +Z and the table runs clockwise when seen from above, so the wedge for
//! direction `d` spans `CORNERS[d]..CORNERS[d + 1]`.

use bevy::color::LinearRgba;
use bevy::prelude::Vec3;

use super::direction::HexDirection;

/// Ratio between the inner (edge) and outer (corner) radius, `sqrt(3) / 2`.
pub const OUTER_TO_INNER: f32 = 0.866_025_4;

/// Distance from a cell center to any of its corners.
pub const OUTER_RADIUS: f32 = 10.0;

/// Distance from a cell center to the middle of any of its edges.
pub const INNER_RADIUS: f32 = OUTER_RADIUS * OUTER_TO_INNER;

/// Share of the hexagon owned exclusively by its cell.
pub const SOLID_FACTOR: f32 = 0.8;

/// Share of the hexagon blended with neighbors (`1 - SOLID_FACTOR`).
pub const BLEND_FACTOR: f32 = 1.0 - SOLID_FACTOR;

/// World height of one elevation level.
pub const ELEVATION_STEP: f32 = 3.0;

/// Flat terraces on a one-level slope.
pub const TERRACES_PER_SLOPE: u32 = 2;

/// Interpolation steps across a terraced slope: one per terrace edge plus one per riser.
pub const TERRACE_STEPS: u32 = TERRACES_PER_SLOPE * 2 + 1;

/// Horizontal advance per terrace step.
pub const HORIZONTAL_TERRACE_STEP_SIZE: f32 = 1.0 / TERRACE_STEPS as f32;

/// Vertical advance per riser.
pub const VERTICAL_TERRACE_STEP_SIZE: f32 = 1.0 / (TERRACES_PER_SLOPE + 1) as f32;

const CORNERS: [Vec3; 7] = [
    Vec3::new(0.0, 0.0, OUTER_RADIUS),
    Vec3::new(INNER_RADIUS, 0.0, 0.5 * OUTER_RADIUS),
    Vec3::new(INNER_RADIUS, 0.0, -0.5 * OUTER_RADIUS),
    Vec3::new(0.0, 0.0, -OUTER_RADIUS),
    Vec3::new(-INNER_RADIUS, 0.0, -0.5 * OUTER_RADIUS),
    Vec3::new(-INNER_RADIUS, 0.0, 0.5 * OUTER_RADIUS),
    Vec3::new(0.0, 0.0, OUTER_RADIUS),
];

/// Relation between two cells derived from their elevation difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexEdgeType {
    /// Same elevation.
    Flat,
    /// One level apart; rendered as terraces.
    Slope,
    /// Two or more levels apart; bridged by one steep strip.
    Cliff,
}

/// Classifies the connection between elevations `e1` and `e2`.
///
/// A `Cliff` always has `|e1 - e2| >= 2`, which keeps the cliff boundary
/// fraction in the triangulator free of division by zero.
pub fn edge_type(e1: i32, e2: i32) -> HexEdgeType {
    match (e2 - e1).abs() {
        0 => HexEdgeType::Flat,
        1 => HexEdgeType::Slope,
        _ => HexEdgeType::Cliff,
    }
}

/// Unscaled corner at the start of the wedge for `direction`.
pub fn first_corner(direction: HexDirection) -> Vec3 {
    CORNERS[direction.index()]
}

/// Unscaled corner at the end of the wedge for `direction`.
pub fn second_corner(direction: HexDirection) -> Vec3 {
    CORNERS[direction.index() + 1]
}

/// [`first_corner`] pulled in to the solid region.
pub fn first_solid_corner(direction: HexDirection) -> Vec3 {
    first_corner(direction) * SOLID_FACTOR
}

/// [`second_corner`] pulled in to the solid region.
pub fn second_solid_corner(direction: HexDirection) -> Vec3 {
    second_corner(direction) * SOLID_FACTOR
}

/// Offset from a cell's solid edge to its neighbor's solid edge in `direction`.
pub fn bridge(direction: HexDirection) -> Vec3 {
    (first_corner(direction) + second_corner(direction)) * BLEND_FACTOR
}

/// Position `step` of `TERRACE_STEPS` between `a` and `b`.
///
/// XZ advance uniformly; Y only rises on odd steps so even steps stay flat.
pub fn terrace_lerp(a: Vec3, b: Vec3, step: u32) -> Vec3 {
    let h = step as f32 * HORIZONTAL_TERRACE_STEP_SIZE;
    let v = step.div_ceil(2) as f32 * VERTICAL_TERRACE_STEP_SIZE;
    Vec3::new(
        a.x + (b.x - a.x) * h,
        a.y + (b.y - a.y) * v,
        a.z + (b.z - a.z) * h,
    )
}

/// Color `step` of `TERRACE_STEPS` between `a` and `b`; blends with the horizontal parameter.
pub fn terrace_lerp_color(a: LinearRgba, b: LinearRgba, step: u32) -> LinearRgba {
    let h = step as f32 * HORIZONTAL_TERRACE_STEP_SIZE;
    lerp_color(a, b, h)
}

/// Component-wise linear blend between two colors.
pub fn lerp_color(a: LinearRgba, b: LinearRgba, t: f32) -> LinearRgba {
    a * (1.0 - t) + b * t
}
