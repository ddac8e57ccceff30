//! Overhead viewer camera.
//!
//! WASD pans across the map, Q/E or scroll zooms along the view direction,
//! right-drag turns and tilts. Spawns the Camera3d entity above the map center.

mod entities;
mod systems;

pub use entities::ViewerCamera;

use bevy::prelude::*;

use crate::GameState;

/// Per-plugin configuration for the viewer camera.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct CameraConfig {
    /// WASD pan speed in world-units per second.
    pub pan_speed: f32,
    /// Q/E zoom speed in world-units per second.
    pub zoom_speed: f32,
    /// Zoom distance per scroll line.
    pub scroll_sensitivity: f32,
    /// Right-drag sensitivity (radians per pixel).
    pub mouse_sensitivity: f32,
    /// Margin from vertical to prevent camera flip (radians).
    pub pitch_margin: f32,
    /// Lowest camera height.
    pub min_height: f32,
    /// Highest camera height.
    pub max_height: f32,
    /// Initial height above the map center.
    pub spawn_height: f32,
    /// Initial horizontal distance south of the map center.
    pub spawn_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pan_speed: 60.0,
            zoom_speed: 80.0,
            scroll_sensitivity: 12.0,
            mouse_sensitivity: 0.004,
            pitch_margin: 0.05,
            min_height: 10.0,
            max_height: 400.0,
            spawn_height: 120.0,
            spawn_distance: 90.0,
        }
    }
}

/// Viewer camera with pan, zoom and drag-to-look.
pub struct CameraPlugin(pub CameraConfig);

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ViewerCamera>()
            .register_type::<CameraConfig>()
            .insert_resource(self.0.clone())
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(
                Update,
                systems::fly.run_if(in_state(GameState::Running)),
            );
    }
}
