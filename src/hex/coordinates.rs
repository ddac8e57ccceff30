use std::fmt;

use bevy::prelude::{Reflect, Vec3};
use hexx::Hex;

use super::direction::HexDirection;
use super::metrics::{INNER_RADIUS, OUTER_RADIUS};

/// Cube coordinates of a cell with `X + Y + Z = 0`.
///
/// Stored as an axial [`Hex`] where `hex.x` is `X` and `hex.y` is `Z`; `Y` is
/// always derived. Equality and hashing therefore go through `(X, Z)` only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub struct HexCoordinates(Hex);

impl HexCoordinates {
    /// Builds coordinates from the `X` and `Z` cube components.
    pub const fn new(x: i32, z: i32) -> Self {
        Self(Hex::new(x, z))
    }

    /// Cube `X`.
    pub const fn x(self) -> i32 {
        self.0.x
    }

    /// Cube `Y`, derived as `-X - Z`.
    pub const fn y(self) -> i32 {
        -self.0.x - self.0.y
    }

    /// Cube `Z`, which equals the offset row.
    pub const fn z(self) -> i32 {
        self.0.y
    }

    /// The underlying axial hex.
    pub const fn hex(self) -> Hex {
        self.0
    }

    /// Converts a staggered-row `(col, row)` grid index; odd rows are shifted half a cell east.
    pub const fn from_offset(col: i32, row: i32) -> Self {
        Self::new(col - row / 2, row)
    }

    /// Inverse of [`Self::from_offset`].
    pub const fn to_offset(self) -> (i32, i32) {
        (self.x() + self.z() / 2, self.z())
    }

    /// Coordinates of the cell containing grid-local `position`. `Y` is ignored.
    ///
    /// The three cube components are rounded independently. When that breaks
    /// the zero sum, the component with the largest rounding residual is
    /// re-derived from the other two, checking `X` first, then `Z`, and
    /// otherwise leaving `Y` (which is never stored) to absorb it.
    pub fn from_position(position: Vec3) -> Self {
        let mut x = position.x / (INNER_RADIUS * 2.0);
        let mut y = -x;

        let offset = position.z / (OUTER_RADIUS * 3.0);
        x -= offset;
        y -= offset;
        let z = -x - y;

        let mut ix = x.round_ties_even() as i32;
        let iy = y.round_ties_even() as i32;
        let mut iz = z.round_ties_even() as i32;

        if ix + iy + iz != 0 {
            let dx = (x - ix as f32).abs();
            let dy = (y - iy as f32).abs();
            let dz = (z - iz as f32).abs();

            if dx > dy && dx > dz {
                ix = -iy - iz;
            } else if dz > dy {
                iz = -ix - iy;
            }
        }

        Self::new(ix, iz)
    }

    /// The adjacent coordinates in `direction`.
    pub fn neighbor(self, direction: HexDirection) -> Self {
        let step = match direction {
            HexDirection::NE => Hex::new(0, 1),
            HexDirection::E => Hex::new(1, 0),
            HexDirection::SE => Hex::new(1, -1),
            HexDirection::SW => Hex::new(0, -1),
            HexDirection::W => Hex::new(-1, 0),
            HexDirection::NW => Hex::new(-1, 1),
        };
        Self(self.0 + step)
    }

    /// Number of cell steps between two coordinates.
    pub fn distance_to(self, other: Self) -> u32 {
        self.0.unsigned_distance_to(other.0)
    }

    /// `X`, `Y` and `Z` on separate lines, for stacked labels.
    pub fn to_string_on_separate_lines(self) -> String {
        format!("{}\n{}\n{}", self.x(), self.y(), self.z())
    }
}

impl fmt::Display for HexCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
