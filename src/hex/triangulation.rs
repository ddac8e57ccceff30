//! Turns a [`HexGrid`] into one colored triangle list.
//!
//! Every cell contributes a solid hexagon of six wedge fans. Cells own the
//! bridges towards NE, E and SE and the corner triangles at the end of their
//! NE and E bridges, so each shared edge and each three-cell corner is
//! emitted exactly once. Slopes become terraces, cliffs stay a single steep
//! strip, and corners mixing the two meet at a boundary point on the cliff.
//!
//! All emitted vertices are perturbed horizontally by the grid's noise
//! except cliff boundary points, which are already built from perturbed
//! endpoints so that terraces and cliff faces share them exactly.

use bevy::color::LinearRgba;
use bevy::platform::collections::HashMap;
use bevy::prelude::Vec3;

use super::cell::HexCell;
use super::direction::HexDirection;
use super::edge_vertices::EdgeVertices;
use super::grid::HexGrid;
use super::mesh_data::HexMeshData;
use super::metrics::{self, HexEdgeType, TERRACE_STEPS};
use super::noise_sampler::NoiseSampler;

/// Tessellation chosen for a three-cell corner, named after the role the
/// lowest cell plays. `Mirrored` variants start from a higher cell because
/// the only slope runs between the two upper cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerKind {
    /// Both lower edges are slopes: terraces fan out from the bottom.
    Terraces,
    /// Slope on the left, flat on the right: terraces fan out from the left cell.
    TerracesFromLeft,
    /// Flat on the left, slope on the right: terraces fan out from the right cell.
    TerracesFromRight,
    /// Slope on the left, cliff on the right.
    TerracesCliff,
    /// Cliff on the left, slope on the right.
    CliffTerraces,
    /// Cliffs below, slope between the upper cells with the left one lower.
    CliffTerracesMirrored,
    /// Cliffs below, slope between the upper cells with the right one lower.
    TerracesCliffMirrored,
    /// No slope anywhere: one triangle.
    Plain,
}

/// Picks the corner tessellation from the three edge types around it.
///
/// `left` and `right` connect the bottom cell to the other two, `across`
/// connects those two to each other.
pub fn corner_kind(
    left: HexEdgeType,
    right: HexEdgeType,
    across: HexEdgeType,
    left_below_right: bool,
) -> CornerKind {
    use HexEdgeType::{Cliff, Flat, Slope};
    match (left, right, across) {
        (Slope, Slope, _) => CornerKind::Terraces,
        (Slope, Flat, _) => CornerKind::TerracesFromLeft,
        (Slope, Cliff, _) => CornerKind::TerracesCliff,
        (Flat, Slope, _) => CornerKind::TerracesFromRight,
        (Cliff, Slope, _) => CornerKind::CliffTerraces,
        (Flat | Cliff, Flat | Cliff, Slope) if left_below_right => {
            CornerKind::CliffTerracesMirrored
        }
        (Flat | Cliff, Flat | Cliff, Slope) => CornerKind::TerracesCliffMirrored,
        (Flat | Cliff, Flat | Cliff, Flat | Cliff) => CornerKind::Plain,
    }
}

/// Tally of the branches taken in one pass.
#[derive(Clone, Debug, Default)]
pub struct TriangulationStats {
    /// Cells fanned.
    pub cells: usize,
    /// Bridges emitted, by edge type.
    pub bridges: HashMap<HexEdgeType, usize>,
    /// Corners emitted, by tessellation.
    pub corners: HashMap<CornerKind, usize>,
}

impl TriangulationStats {
    /// Bridges of one edge type.
    pub fn bridge_count(&self, edge: HexEdgeType) -> usize {
        self.bridges.get(&edge).copied().unwrap_or(0)
    }

    /// Corners of one kind.
    pub fn corner_count(&self, kind: CornerKind) -> usize {
        self.corners.get(&kind).copied().unwrap_or(0)
    }

    /// All bridges.
    pub fn total_bridges(&self) -> usize {
        self.bridges.values().sum()
    }

    /// All corners.
    pub fn total_corners(&self) -> usize {
        self.corners.values().sum()
    }
}

/// Triangulates the whole grid into a fresh buffer.
pub fn triangulate(grid: &HexGrid) -> HexMeshData {
    let mut pass = Triangulator {
        grid,
        noise: grid.noise(),
        mesh: HexMeshData::default(),
    };
    for cell in grid.cells() {
        pass.triangulate_cell(cell);
    }
    pass.mesh.stats.cells = grid.len();
    pass.mesh
}

/// A corner vertex together with the cell it belongs to.
#[derive(Clone, Copy)]
struct CornerPoint<'a> {
    position: Vec3,
    cell: &'a HexCell,
}

impl CornerPoint<'_> {
    fn color(&self) -> LinearRgba {
        self.cell.color()
    }

    fn elevation(&self) -> i32 {
        self.cell.elevation()
    }
}

/// Puts the lowest cell first while keeping the cyclic order of the three.
fn order_corner<'a>(
    here: CornerPoint<'a>,
    there: CornerPoint<'a>,
    beyond: CornerPoint<'a>,
) -> (CornerPoint<'a>, CornerPoint<'a>, CornerPoint<'a>) {
    if here.elevation() <= there.elevation() {
        if here.elevation() <= beyond.elevation() {
            (here, there, beyond)
        } else {
            (beyond, here, there)
        }
    } else if there.elevation() <= beyond.elevation() {
        (there, beyond, here)
    } else {
        (beyond, here, there)
    }
}

struct Triangulator<'a> {
    grid: &'a HexGrid,
    noise: &'a NoiseSampler,
    mesh: HexMeshData,
}

impl<'a> Triangulator<'a> {
    fn neighbor(&self, cell: &HexCell, direction: HexDirection) -> Option<&'a HexCell> {
        let grid = self.grid;
        cell.neighbor(direction).and_then(|i| grid.cell(i))
    }

    fn triangulate_cell(&mut self, cell: &'a HexCell) {
        for direction in HexDirection::ALL {
            self.triangulate_direction(direction, cell);
        }
    }

    fn triangulate_direction(&mut self, direction: HexDirection, cell: &'a HexCell) {
        let center = cell.position();
        let edge = EdgeVertices::new(
            center + metrics::first_solid_corner(direction),
            center + metrics::second_solid_corner(direction),
        );
        self.triangulate_edge_fan(center, edge, cell.color());

        if direction.owns_bridge() {
            self.triangulate_connection(direction, cell, edge);
        }
    }

    fn triangulate_connection(&mut self, direction: HexDirection, cell: &'a HexCell, e1: EdgeVertices) {
        let Some(neighbor) = self.neighbor(cell, direction) else {
            return;
        };

        let mut bridge = metrics::bridge(direction);
        bridge.y = neighbor.position().y - cell.position().y;
        let e2 = EdgeVertices::new(e1.v1 + bridge, e1.v4 + bridge);

        let edge = cell.edge_type_to(neighbor);
        *self.mesh.stats.bridges.entry(edge).or_default() += 1;
        match edge {
            HexEdgeType::Slope => self.triangulate_edge_terraces(e1, cell, e2, neighbor),
            HexEdgeType::Flat | HexEdgeType::Cliff => {
                self.triangulate_edge_strip(e1, cell.color(), e2, neighbor.color())
            }
        }

        if !direction.owns_corner() {
            return;
        }
        let Some(next) = self.neighbor(cell, direction.next()) else {
            return;
        };
        let mut v5 = e1.v4 + metrics::bridge(direction.next());
        v5.y = next.position().y;

        let (bottom, left, right) = order_corner(
            CornerPoint { position: e1.v4, cell },
            CornerPoint { position: e2.v4, cell: neighbor },
            CornerPoint { position: v5, cell: next },
        );
        self.triangulate_corner(bottom, left, right);
    }

    // ── edges ───────────────────────────────────────────────────────

    fn triangulate_edge_fan(&mut self, center: Vec3, edge: EdgeVertices, color: LinearRgba) {
        let colors = [color; 3];
        self.add_triangle([center, edge.v1, edge.v2], colors);
        self.add_triangle([center, edge.v2, edge.v3], colors);
        self.add_triangle([center, edge.v3, edge.v4], colors);
    }

    fn triangulate_edge_strip(
        &mut self,
        e1: EdgeVertices,
        c1: LinearRgba,
        e2: EdgeVertices,
        c2: LinearRgba,
    ) {
        let colors = [c1, c1, c2, c2];
        self.add_quad([e1.v1, e1.v2, e2.v1, e2.v2], colors);
        self.add_quad([e1.v2, e1.v3, e2.v2, e2.v3], colors);
        self.add_quad([e1.v3, e1.v4, e2.v3, e2.v4], colors);
    }

    fn triangulate_edge_terraces(
        &mut self,
        begin: EdgeVertices,
        begin_cell: &HexCell,
        end: EdgeVertices,
        end_cell: &HexCell,
    ) {
        let mut e2 = EdgeVertices::terrace_lerp(begin, end, 1);
        let mut c2 = metrics::terrace_lerp_color(begin_cell.color(), end_cell.color(), 1);
        self.triangulate_edge_strip(begin, begin_cell.color(), e2, c2);

        for step in 2..TERRACE_STEPS {
            let (e1, c1) = (e2, c2);
            e2 = EdgeVertices::terrace_lerp(begin, end, step);
            c2 = metrics::terrace_lerp_color(begin_cell.color(), end_cell.color(), step);
            self.triangulate_edge_strip(e1, c1, e2, c2);
        }

        self.triangulate_edge_strip(e2, c2, end, end_cell.color());
    }

    // ── corners ─────────────────────────────────────────────────────

    fn triangulate_corner(
        &mut self,
        bottom: CornerPoint<'a>,
        left: CornerPoint<'a>,
        right: CornerPoint<'a>,
    ) {
        let kind = corner_kind(
            bottom.cell.edge_type_to(left.cell),
            bottom.cell.edge_type_to(right.cell),
            left.cell.edge_type_to(right.cell),
            left.elevation() < right.elevation(),
        );
        *self.mesh.stats.corners.entry(kind).or_default() += 1;

        match kind {
            CornerKind::Terraces => self.triangulate_corner_terraces(bottom, left, right),
            CornerKind::TerracesFromLeft => self.triangulate_corner_terraces(left, right, bottom),
            CornerKind::TerracesFromRight => self.triangulate_corner_terraces(right, bottom, left),
            CornerKind::TerracesCliff => self.triangulate_corner_terraces_cliff(bottom, left, right),
            CornerKind::CliffTerraces => self.triangulate_corner_cliff_terraces(bottom, left, right),
            CornerKind::CliffTerracesMirrored => {
                self.triangulate_corner_cliff_terraces(right, bottom, left)
            }
            CornerKind::TerracesCliffMirrored => {
                self.triangulate_corner_terraces_cliff(left, right, bottom)
            }
            CornerKind::Plain => self.add_triangle(
                [bottom.position, left.position, right.position],
                [bottom.color(), left.color(), right.color()],
            ),
        }
    }

    fn triangulate_corner_terraces(
        &mut self,
        begin: CornerPoint<'a>,
        left: CornerPoint<'a>,
        right: CornerPoint<'a>,
    ) {
        let mut v3 = metrics::terrace_lerp(begin.position, left.position, 1);
        let mut v4 = metrics::terrace_lerp(begin.position, right.position, 1);
        let mut c3 = metrics::terrace_lerp_color(begin.color(), left.color(), 1);
        let mut c4 = metrics::terrace_lerp_color(begin.color(), right.color(), 1);
        self.add_triangle([begin.position, v3, v4], [begin.color(), c3, c4]);

        for step in 2..TERRACE_STEPS {
            let (v1, v2, c1, c2) = (v3, v4, c3, c4);
            v3 = metrics::terrace_lerp(begin.position, left.position, step);
            v4 = metrics::terrace_lerp(begin.position, right.position, step);
            c3 = metrics::terrace_lerp_color(begin.color(), left.color(), step);
            c4 = metrics::terrace_lerp_color(begin.color(), right.color(), step);
            self.add_quad([v1, v2, v3, v4], [c1, c2, c3, c4]);
        }

        self.add_quad(
            [v3, v4, left.position, right.position],
            [c3, c4, left.color(), right.color()],
        );
    }

    /// Slope on the left, cliff on the right; the boundary sits on the cliff.
    fn triangulate_corner_terraces_cliff(
        &mut self,
        begin: CornerPoint<'a>,
        left: CornerPoint<'a>,
        right: CornerPoint<'a>,
    ) {
        let (boundary, boundary_color) = self.cliff_boundary(begin, right);
        self.triangulate_boundary_triangle(begin, left, boundary, boundary_color);
        self.close_cliff_corner(left, right, boundary, boundary_color);
    }

    /// Cliff on the left, slope on the right; mirror of the above.
    fn triangulate_corner_cliff_terraces(
        &mut self,
        begin: CornerPoint<'a>,
        left: CornerPoint<'a>,
        right: CornerPoint<'a>,
    ) {
        let (boundary, boundary_color) = self.cliff_boundary(begin, left);
        self.triangulate_boundary_triangle(right, begin, boundary, boundary_color);
        self.close_cliff_corner(left, right, boundary, boundary_color);
    }

    /// Point on the cliff from `begin` to `top` one elevation level above `begin`.
    ///
    /// Interpolates between the perturbed endpoints so the point lies exactly
    /// on the emitted cliff edge.
    fn cliff_boundary(&self, begin: CornerPoint<'a>, top: CornerPoint<'a>) -> (Vec3, LinearRgba) {
        let levels = top.elevation() - begin.elevation();
        debug_assert!(levels.abs() >= 2, "cliff boundary across {levels} levels");
        let b = (1.0 / levels as f32).abs();
        let boundary = self
            .noise
            .perturb(begin.position)
            .lerp(self.noise.perturb(top.position), b);
        (boundary, metrics::lerp_color(begin.color(), top.color(), b))
    }

    fn close_cliff_corner(
        &mut self,
        left: CornerPoint<'a>,
        right: CornerPoint<'a>,
        boundary: Vec3,
        boundary_color: LinearRgba,
    ) {
        if left.cell.edge_type_to(right.cell) == HexEdgeType::Slope {
            self.triangulate_boundary_triangle(left, right, boundary, boundary_color);
        } else {
            let noise = self.noise;
            self.mesh.push_triangle(
                [noise.perturb(left.position), noise.perturb(right.position), boundary],
                [left.color(), right.color(), boundary_color],
            );
        }
    }

    /// Terrace steps from `begin` to `left`, all converging on `boundary`.
    fn triangulate_boundary_triangle(
        &mut self,
        begin: CornerPoint<'a>,
        left: CornerPoint<'a>,
        boundary: Vec3,
        boundary_color: LinearRgba,
    ) {
        let noise = self.noise;
        let mut v2 = noise.perturb(metrics::terrace_lerp(begin.position, left.position, 1));
        let mut c2 = metrics::terrace_lerp_color(begin.color(), left.color(), 1);
        self.mesh.push_triangle(
            [noise.perturb(begin.position), v2, boundary],
            [begin.color(), c2, boundary_color],
        );

        for step in 2..TERRACE_STEPS {
            let (v1, c1) = (v2, c2);
            v2 = noise.perturb(metrics::terrace_lerp(begin.position, left.position, step));
            c2 = metrics::terrace_lerp_color(begin.color(), left.color(), step);
            self.mesh
                .push_triangle([v1, v2, boundary], [c1, c2, boundary_color]);
        }

        self.mesh.push_triangle(
            [v2, noise.perturb(left.position), boundary],
            [c2, left.color(), boundary_color],
        );
    }

    // ── emission ────────────────────────────────────────────────────

    fn add_triangle(&mut self, positions: [Vec3; 3], colors: [LinearRgba; 3]) {
        let noise = self.noise;
        self.mesh
            .push_triangle(positions.map(|v| noise.perturb(v)), colors);
    }

    /// `v1 v2` on the near side, `v3 v4` on the far side.
    fn add_quad(&mut self, positions: [Vec3; 4], colors: [LinearRgba; 4]) {
        let noise = self.noise;
        let [v1, v2, v3, v4] = positions.map(|v| noise.perturb(v));
        let [c1, c2, c3, c4] = colors;
        self.mesh.push_triangle([v1, v3, v2], [c1, c3, c2]);
        self.mesh.push_triangle([v2, v3, v4], [c2, c3, c4]);
    }
}
