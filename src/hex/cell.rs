use bevy::color::LinearRgba;
use bevy::prelude::{Color, Vec3};

use super::coordinates::HexCoordinates;
use super::direction::HexDirection;
use super::metrics::{self, ELEVATION_STEP, HexEdgeType};
use super::noise_sampler::NoiseSampler;

/// Index of a cell inside its [`HexGrid`](super::grid::HexGrid).
pub type CellIndex = usize;

/// One grid cell: placement, elevation, color and links to its neighbors.
///
/// Neighbors are arena indices into the owning grid, never references, so
/// the cell graph carries no ownership cycles.
#[derive(Clone, Debug)]
pub struct HexCell {
    coordinates: HexCoordinates,
    position: Vec3,
    elevation: i32,
    color: LinearRgba,
    neighbors: [Option<CellIndex>; 6],
}

impl HexCell {
    /// A cell at elevation 0 resting at `position`.
    pub fn new(coordinates: HexCoordinates, position: Vec3, color: Color) -> Self {
        Self {
            coordinates,
            position,
            elevation: 0,
            color: color.to_linear(),
            neighbors: [None; 6],
        }
    }

    /// Cube coordinates of this cell.
    pub fn coordinates(&self) -> HexCoordinates {
        self.coordinates
    }

    /// Grid-local center, including the perturbed resting height.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Integer elevation level.
    pub fn elevation(&self) -> i32 {
        self.elevation
    }

    /// Sets the elevation and moves the center to `elevation * ELEVATION_STEP`
    /// plus the noise offset sampled at the cell center.
    pub fn set_elevation(&mut self, elevation: i32, noise: &NoiseSampler) {
        self.elevation = elevation;
        self.position.y =
            elevation as f32 * ELEVATION_STEP + noise.elevation_offset(self.position);
    }

    /// Linear vertex color of this cell.
    pub fn color(&self) -> LinearRgba {
        self.color
    }

    /// Replaces the cell color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color.to_linear();
    }

    /// Index of the neighbor in `direction`, if the map extends that way.
    pub fn neighbor(&self, direction: HexDirection) -> Option<CellIndex> {
        self.neighbors[direction.index()]
    }

    /// Stores one side of a link; [`HexGrid::set_neighbor`](super::grid::HexGrid::set_neighbor)
    /// writes both sides.
    pub(super) fn link(&mut self, direction: HexDirection, cell: CellIndex) {
        self.neighbors[direction.index()] = Some(cell);
    }

    /// How this cell connects to `other`.
    pub fn edge_type_to(&self, other: &HexCell) -> HexEdgeType {
        metrics::edge_type(self.elevation, other.elevation)
    }
}
