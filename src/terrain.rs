//! Hex map terrain: grid generation, mesh upkeep, cell picking and painting.
//!
//! Owns the single [`HexMap`] entity. Its mesh is rebuilt from scratch by
//! [`triangulate`](crate::hex::triangulate) whenever the grid changes.

mod entities;
mod relief;
mod startup_systems;
mod systems;

pub use entities::{HexBrush, HexMap, PickedCell};
pub use relief::{ReliefSettings, apply_relief, band_color};

use bevy::prelude::*;

use crate::GameState;
use crate::hex::NoiseSettings;

/// Nested configuration for the terrain subsystem.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct MapConfig {
    /// Grid size and colors.
    pub grid: GridSettings,
    /// Vertex and height perturbation.
    pub noise: NoiseSettings,
    /// Initial elevations.
    pub relief: ReliefSettings,
    /// Background clear color.
    pub clear_color: Color,
}

/// Grid dimensions and the color palette shared by relief bands and the brush.
#[derive(Clone, Debug, Reflect)]
pub struct GridSettings {
    /// Cells per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Color of every cell before relief or painting.
    pub default_color: Color,
    /// Palette, lowest band first.
    pub palette: Vec<Color>,
    /// Maximum camera distance at which coordinate labels are drawn.
    pub label_distance: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            grid: GridSettings {
                width: 12,
                height: 10,
                default_color: Color::WHITE,
                palette: vec![
                    Color::srgb(0.20, 0.40, 0.80),
                    Color::srgb(0.90, 0.85, 0.55),
                    Color::srgb(0.45, 0.70, 0.30),
                    Color::srgb(0.25, 0.50, 0.20),
                    Color::srgb(0.50, 0.48, 0.45),
                    Color::srgb(0.95, 0.95, 0.97),
                ],
                label_distance: 120.0,
            },
            noise: NoiseSettings::default(),
            relief: ReliefSettings::default(),
            clear_color: Color::srgb(0.55, 0.70, 0.85),
        }
    }
}

/// Terrain plugin: builds the map at startup, keeps its mesh current, paints on click.
pub struct TerrainPlugin(pub MapConfig);

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MapConfig>()
            .register_type::<HexBrush>()
            .register_type::<PickedCell>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .init_resource::<HexBrush>()
            .init_resource::<PickedCell>()
            .add_systems(Startup, startup_systems::spawn_map)
            .add_systems(
                Update,
                (systems::select_brush, systems::pick_cell)
                    .chain()
                    .run_if(in_state(GameState::Running)),
            )
            .add_systems(
                Update,
                systems::retriangulate
                    .after(systems::pick_cell)
                    .run_if(any_with_component::<HexMap>),
            );

        app.add_systems(
            Update,
            systems::draw_cell_labels.run_if(in_state(GameState::Inspecting)),
        );
    }
}
