use bevy::asset::RenderAssetUsages;
use bevy::color::LinearRgba;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;

use super::triangulation::TriangulationStats;

/// Output of one triangulation pass: a flat triangle list with per-vertex colors.
///
/// Every three consecutive vertices form one triangle, counter-clockwise when
/// seen from above so face normals point up and out.
#[derive(Clone, Debug, Default)]
pub struct HexMeshData {
    /// Vertex positions, grid-local.
    pub positions: Vec<Vec3>,
    /// One linear color per vertex.
    pub colors: Vec<LinearRgba>,
    /// Which tessellation branches the pass took.
    pub stats: TriangulationStats,
}

impl HexMeshData {
    /// Appends one triangle as given.
    pub fn push_triangle(&mut self, positions: [Vec3; 3], colors: [LinearRgba; 3]) {
        self.positions.extend(positions);
        self.colors.extend(colors);
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Triangle corners in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.positions.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Converts into a non-indexed render mesh with flat normals.
    ///
    /// The mesh stays readable on the main world so ray casts can use it as the
    /// terrain's collision surface.
    pub fn into_render_mesh(self) -> Mesh {
        let positions: Vec<[f32; 3]> = self.positions.iter().map(|v| v.to_array()).collect();
        let colors: Vec<[f32; 4]> = self
            .colors
            .iter()
            .map(|c| [c.red, c.green, c.blue, c.alpha])
            .collect();

        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
            .with_computed_flat_normals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_triangle() -> HexMeshData {
        let mut data = HexMeshData::default();
        data.push_triangle(
            [Vec3::ZERO, Vec3::Z, Vec3::X],
            [LinearRgba::RED, LinearRgba::GREEN, LinearRgba::BLUE],
        );
        data
    }

    #[test]
    fn counts_follow_pushes() {
        let mut data = one_triangle();
        assert_eq!(data.vertex_count(), 3);
        assert_eq!(data.triangle_count(), 1);
        data.push_triangle([Vec3::ZERO; 3], [LinearRgba::WHITE; 3]);
        assert_eq!(data.triangle_count(), 2);
        assert_eq!(data.colors.len(), data.positions.len());
    }

    #[test]
    fn triangles_iterate_in_order() {
        let data = one_triangle();
        let tris: Vec<[Vec3; 3]> = data.triangles().collect();
        assert_eq!(tris, vec![[Vec3::ZERO, Vec3::Z, Vec3::X]]);
    }

    #[test]
    fn render_mesh_carries_all_attributes() {
        let mesh = one_triangle().into_render_mesh();
        assert_eq!(mesh.count_vertices(), 3);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_POSITION).is_some());
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
        assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());
        assert!(mesh.indices().is_none());
    }
}
