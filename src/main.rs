//! Hex map viewer: renders a terraced, noise-perturbed hex terrain and lets
//! the user repaint cells with the mouse.

use bevy::app::AppExit;
#[cfg(feature = "native")]
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
#[cfg(feature = "native")]
use clap::Parser;

use hex_map::GameState;
use hex_map::camera::{CameraConfig, CameraPlugin};
use hex_map::terrain::{MapConfig, TerrainPlugin};

/// Hex map viewer
#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "hex-map")]
#[command(about = "Terraced hex terrain with cliffs, color blending and cell painting")]
struct Args {
    /// Cells per row
    #[arg(long)]
    width: Option<usize>,
    /// Number of rows
    #[arg(long)]
    height: Option<usize>,
    /// Seed for both the perturbation noise and the relief
    #[arg(long)]
    seed: Option<u32>,
    /// Start with every cell at elevation 0
    #[arg(long)]
    flat: bool,
}

#[cfg(feature = "native")]
impl Args {
    fn apply_to(&self, mut cfg: MapConfig) -> MapConfig {
        if let Some(width) = self.width {
            cfg.grid.width = width;
        }
        if let Some(height) = self.height {
            cfg.grid.height = height;
        }
        if let Some(seed) = self.seed {
            cfg.noise.seed = seed;
            cfg.relief.seed = seed;
        }
        if self.flat {
            cfg.relief.enabled = false;
        }
        cfg
    }
}

fn main() {
    #[cfg(feature = "native")]
    let map_config = Args::parse().apply_to(MapConfig::default());
    #[cfg(not(feature = "native"))]
    let map_config = MapConfig::default();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hex Map".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(TerrainPlugin(map_config))
    .add_plugins(CameraPlugin(CameraConfig::default()))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Inspecting)));

    #[cfg(feature = "native")]
    app.add_plugins(RemotePlugin::default())
        .add_plugins(RemoteHttpPlugin::default())
        .add_plugins(WireframePlugin::default())
        .add_systems(Update, toggle_wireframe);

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            GameState::Running => GameState::Inspecting,
            GameState::Inspecting => GameState::Running,
        };
        info!("Switching to {new_state:?}");
        next.set(new_state);
    }
}

#[cfg(feature = "native")]
fn toggle_wireframe(mut wireframe: ResMut<WireframeConfig>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyF) {
        wireframe.global = !wireframe.global;
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
