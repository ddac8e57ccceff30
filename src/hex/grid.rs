use bevy::prelude::{Color, Vec3};

use super::cell::{CellIndex, HexCell};
use super::coordinates::HexCoordinates;
use super::direction::HexDirection;
use super::metrics::{HexEdgeType, INNER_RADIUS, OUTER_RADIUS};
use super::noise_sampler::NoiseSampler;

/// Fixed-size rectangular map of staggered rows, stored row-major.
///
/// Cell `i` sits at offset `(i % width, i / width)`. Odd rows are shifted half
/// a cell east. The grid owns the noise sampler used to perturb heights so
/// that every elevation change goes through the same field as triangulation.
#[derive(Clone)]
pub struct HexGrid {
    width: usize,
    height: usize,
    cells: Vec<HexCell>,
    noise: NoiseSampler,
}

impl HexGrid {
    /// Places `width * height` cells in `color` at elevation 0 and wires their neighbors.
    pub fn new(width: usize, height: usize, color: Color, noise: NoiseSampler) -> Self {
        let mut grid = Self {
            width,
            height,
            cells: Vec::with_capacity(width * height),
            noise,
        };
        for z in 0..height {
            for x in 0..width {
                grid.create_cell(x, z, color);
            }
        }
        grid
    }

    /// Places one cell and links it to the already placed cells west and south of it.
    ///
    /// The bidirectional links complete the other three sides when the later
    /// cells are placed.
    fn create_cell(&mut self, x: usize, z: usize, color: Color) {
        let i = self.cells.len();
        let coordinates = HexCoordinates::from_offset(x as i32, z as i32);
        let mut cell = HexCell::new(coordinates, Self::center_of(x, z), color);
        cell.set_elevation(0, &self.noise);
        self.cells.push(cell);

        let w = self.width;
        if x > 0 {
            self.set_neighbor(i, HexDirection::W, i - 1);
        }
        if z > 0 {
            if z.is_multiple_of(2) {
                self.set_neighbor(i, HexDirection::SE, i - w);
                if x > 0 {
                    self.set_neighbor(i, HexDirection::SW, i - w - 1);
                }
            } else {
                self.set_neighbor(i, HexDirection::SW, i - w);
                if x + 1 < w {
                    self.set_neighbor(i, HexDirection::SE, i - w + 1);
                }
            }
        }
    }

    /// Grid-local center of the cell at offset `(x, z)`, at height 0.
    pub fn center_of(x: usize, z: usize) -> Vec3 {
        let half_shift = (z % 2) as f32 * 0.5;
        Vec3::new(
            (x as f32 + half_shift) * (INNER_RADIUS * 2.0),
            0.0,
            z as f32 * (OUTER_RADIUS * 1.5),
        )
    }

    /// Links `cell` to `other` in `direction` and `other` back in the opposite direction.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn set_neighbor(&mut self, cell: CellIndex, direction: HexDirection, other: CellIndex) {
        self.cells[cell].link(direction, other);
        self.cells[other].link(direction.opposite(), cell);
    }

    /// Cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    /// The cell at `index`.
    pub fn cell(&self, index: CellIndex) -> Option<&HexCell> {
        self.cells.get(index)
    }

    /// The sampler used for height and vertex perturbation.
    pub fn noise(&self) -> &NoiseSampler {
        &self.noise
    }

    /// Sets the elevation of the cell at `index`. Returns `false` when there is no such cell.
    pub fn set_elevation(&mut self, index: CellIndex, elevation: i32) -> bool {
        let Some(cell) = self.cells.get_mut(index) else {
            return false;
        };
        cell.set_elevation(elevation, &self.noise);
        true
    }

    /// Sets the color of the cell at `index`. Returns `false` when there is no such cell.
    pub fn set_color(&mut self, index: CellIndex, color: Color) -> bool {
        let Some(cell) = self.cells.get_mut(index) else {
            return false;
        };
        cell.set_color(color);
        true
    }

    /// Edge type between the cell at `index` and its neighbor in `direction`.
    pub fn edge_type(&self, index: CellIndex, direction: HexDirection) -> Option<HexEdgeType> {
        let cell = self.cells.get(index)?;
        let neighbor = self.cells.get(cell.neighbor(direction)?)?;
        Some(cell.edge_type_to(neighbor))
    }

    /// Maps cube coordinates to a cell index, or `None` outside the map.
    pub fn index_of(&self, coordinates: HexCoordinates) -> Option<CellIndex> {
        let (x, z) = coordinates.to_offset();
        if z < 0 || x < 0 || x as usize >= self.width {
            return None;
        }
        let index = x as usize + z as usize * self.width;
        (index < self.cells.len()).then_some(index)
    }

    /// The cell at `coordinates`, if it is on the map.
    pub fn cell_at(&self, coordinates: HexCoordinates) -> Option<&HexCell> {
        self.index_of(coordinates).map(|i| &self.cells[i])
    }

    /// Index of the cell under a grid-local `point`. `Y` is ignored.
    pub fn cell_at_position(&self, point: Vec3) -> Option<CellIndex> {
        self.index_of(HexCoordinates::from_position(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::noise_sampler::NoiseSettings;

    fn grid(width: usize, height: usize) -> HexGrid {
        HexGrid::new(
            width,
            height,
            Color::WHITE,
            NoiseSampler::new(&NoiseSettings::default()),
        )
    }

    // ── construction ────────────────────────────────────────────────

    #[test]
    fn cells_are_row_major_offset_order() {
        let g = grid(4, 3);
        assert_eq!(g.len(), 12);
        for (i, cell) in g.cells().iter().enumerate() {
            let expected = HexCoordinates::from_offset((i % 4) as i32, (i / 4) as i32);
            assert_eq!(cell.coordinates(), expected);
        }
    }

    #[test]
    fn centers_follow_staggered_packing() {
        assert_eq!(HexGrid::center_of(0, 0), Vec3::ZERO);
        let odd = HexGrid::center_of(0, 1);
        assert!((odd.x - INNER_RADIUS).abs() < 1e-5);
        assert!((odd.z - 1.5 * OUTER_RADIUS).abs() < 1e-5);
        let even = HexGrid::center_of(2, 2);
        assert!((even.x - 4.0 * INNER_RADIUS).abs() < 1e-5);
    }

    #[test]
    fn cells_rest_on_perturbed_ground() {
        let g = grid(3, 3);
        for cell in g.cells() {
            assert_eq!(cell.elevation(), 0);
            assert!(cell.position().y.abs() <= NoiseSettings::default().elevation_perturb_strength);
        }
    }

    // ── neighbor wiring ─────────────────────────────────────────────

    #[test]
    fn neighbor_links_are_bidirectional() {
        let g = grid(5, 6);
        for (i, cell) in g.cells().iter().enumerate() {
            for dir in HexDirection::ALL {
                if let Some(n) = cell.neighbor(dir) {
                    assert_eq!(g.cells()[n].neighbor(dir.opposite()), Some(i));
                }
            }
        }
    }

    #[test]
    fn neighbor_links_match_coordinates() {
        let g = grid(5, 6);
        for cell in g.cells() {
            for dir in HexDirection::ALL {
                let expected = g.index_of(cell.coordinates().neighbor(dir));
                let linked = cell.neighbor(dir);
                assert_eq!(linked, expected, "{} towards {dir:?}", cell.coordinates());
            }
        }
    }

    #[test]
    fn interior_cells_have_six_neighbors() {
        let g = grid(5, 5);
        let interior = g.index_of(HexCoordinates::from_offset(2, 2)).unwrap();
        let count = HexDirection::ALL
            .iter()
            .filter(|&&d| g.cells()[interior].neighbor(d).is_some())
            .count();
        assert_eq!(count, 6);
    }

    #[test]
    fn corner_cell_of_even_row_has_two_or_three_neighbors() {
        let g = grid(4, 4);
        let first = &g.cells()[0];
        assert_eq!(first.neighbor(HexDirection::E), Some(1));
        assert_eq!(first.neighbor(HexDirection::NE), Some(4));
        assert!(first.neighbor(HexDirection::NW).is_none());
        assert!(first.neighbor(HexDirection::W).is_none());
        assert!(first.neighbor(HexDirection::SW).is_none());
        assert!(first.neighbor(HexDirection::SE).is_none());
    }

    #[test]
    fn set_neighbor_writes_both_sides() {
        let mut g = grid(3, 1);
        g.set_neighbor(0, HexDirection::NE, 2);
        assert_eq!(g.cells()[0].neighbor(HexDirection::NE), Some(2));
        assert_eq!(g.cells()[2].neighbor(HexDirection::SW), Some(0));
    }

    // ── lookup ──────────────────────────────────────────────────────

    #[test]
    fn index_of_inverts_construction() {
        let g = grid(4, 5);
        for (i, cell) in g.cells().iter().enumerate() {
            assert_eq!(g.index_of(cell.coordinates()), Some(i));
        }
    }

    #[test]
    fn lookup_by_position_finds_cell_centers() {
        let g = grid(4, 5);
        for (i, cell) in g.cells().iter().enumerate() {
            assert_eq!(g.cell_at_position(cell.position()), Some(i));
            assert_eq!(
                g.cell_at(cell.coordinates()).map(HexCell::coordinates),
                Some(cell.coordinates())
            );
        }
    }

    #[test]
    fn lookup_outside_bounds_is_none() {
        let g = grid(4, 4);
        assert!(g.cell_at_position(Vec3::new(0.0, 0.0, -20.0)).is_none());
        assert!(g.cell_at_position(Vec3::new(-20.0, 0.0, 0.0)).is_none());
        assert!(g.cell_at_position(Vec3::new(0.0, 0.0, 4.0 * 1.5 * OUTER_RADIUS)).is_none());
        assert!(g.cell_at_position(Vec3::new(4.0 * 2.0 * INNER_RADIUS, 0.0, 0.0)).is_none());
        assert!(g.index_of(HexCoordinates::new(-5, 2)).is_none());
    }

    #[test]
    fn edge_type_by_direction() {
        let mut g = grid(2, 1);
        g.set_elevation(1, 1);
        assert_eq!(g.edge_type(0, HexDirection::E), Some(HexEdgeType::Slope));
        assert_eq!(g.edge_type(1, HexDirection::W), Some(HexEdgeType::Slope));
        assert_eq!(g.edge_type(0, HexDirection::W), None);
        assert_eq!(g.edge_type(5, HexDirection::E), None);
    }

    #[test]
    fn setters_report_missing_cells() {
        let mut g = grid(2, 2);
        assert!(g.set_elevation(3, 2));
        assert_eq!(g.cells()[3].elevation(), 2);
        assert!(g.set_color(0, Color::BLACK));
        assert!(!g.set_elevation(4, 1));
        assert!(!g.set_color(99, Color::BLACK));
    }
}
