use bevy::prelude::Vec3;

use super::metrics;

/// Four points along one cell edge: both ends plus the two third-points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeVertices {
    /// First corner.
    pub v1: Vec3,
    /// One third of the way to `v4`.
    pub v2: Vec3,
    /// Two thirds of the way to `v4`.
    pub v3: Vec3,
    /// Second corner.
    pub v4: Vec3,
}

impl EdgeVertices {
    /// Subdivides the segment `corner1..corner2` into thirds.
    pub fn new(corner1: Vec3, corner2: Vec3) -> Self {
        Self {
            v1: corner1,
            v2: corner1.lerp(corner2, 1.0 / 3.0),
            v3: corner1.lerp(corner2, 2.0 / 3.0),
            v4: corner2,
        }
    }

    /// Terrace step `step` between two parallel edges, point by point.
    pub fn terrace_lerp(a: Self, b: Self, step: u32) -> Self {
        Self {
            v1: metrics::terrace_lerp(a.v1, b.v1, step),
            v2: metrics::terrace_lerp(a.v2, b.v2, step),
            v3: metrics::terrace_lerp(a.v3, b.v3, step),
            v4: metrics::terrace_lerp(a.v4, b.v4, step),
        }
    }

    /// The points in order `v1..v4`.
    pub fn points(&self) -> [Vec3; 4] {
        [self.v1, self.v2, self.v3, self.v4]
    }
}
