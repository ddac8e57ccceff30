//! Hex map core: coordinates, cells, the grid and its triangulation.
//!
//! Everything here is plain data and pure functions. The [`terrain`](crate::terrain)
//! plugin owns a [`HexGrid`] and feeds [`triangulate`]'s output to the renderer.

mod cell;
mod coordinates;
mod direction;
mod edge_vertices;
mod grid;
mod mesh_data;
pub mod metrics;
mod noise_sampler;
mod triangulation;

pub use cell::{CellIndex, HexCell};
pub use coordinates::HexCoordinates;
pub use direction::HexDirection;
pub use edge_vertices::EdgeVertices;
pub use grid::HexGrid;
pub use mesh_data::HexMeshData;
pub use metrics::HexEdgeType;
pub use noise_sampler::{NoiseSampler, NoiseSettings};
pub use triangulation::{CornerKind, TriangulationStats, corner_kind, triangulate};
