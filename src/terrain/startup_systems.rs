use bevy::prelude::*;

use super::MapConfig;
use super::entities::HexMap;
use super::relief::apply_relief;
use crate::hex::{HexGrid, NoiseSampler};

// ── Startup ─────────────────────────────────────────────────────────

/// Builds the grid, applies the initial relief and spawns the map entity with a light.
///
/// The mesh handle starts empty; [`super::systems::retriangulate`] fills it on
/// the first frame because a freshly added [`HexMap`] counts as changed.
pub fn spawn_map(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<MapConfig>,
) {
    let g = &cfg.grid;
    let mut grid = HexGrid::new(
        g.width,
        g.height,
        g.default_color,
        NoiseSampler::new(&cfg.noise),
    );
    if cfg.relief.enabled {
        apply_relief(&mut grid, &cfg.relief, &g.palette);
    }
    info!(
        "Built {}x{} hex map ({} cells, relief {})",
        grid.width(),
        grid.height(),
        grid.len(),
        if cfg.relief.enabled { "on" } else { "off" }
    );

    // Vertex colors carry the cell colors; the base color only tints them.
    let terrain_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.9,
        ..default()
    });

    commands.spawn((
        Name::new("HexMap"),
        HexMap { grid },
        Mesh3d::default(),
        MeshMaterial3d(terrain_material),
        Transform::default(),
        Visibility::default(),
    ));

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-40.0, 100.0, 60.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
