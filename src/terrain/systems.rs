use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;

use bevy_egui::egui;

use super::MapConfig;
use super::entities::{HexBrush, HexMap, PickInput, PickedCell};
use crate::camera::ViewerCamera;
use crate::hex::{HexCell, triangulate};

const PALETTE_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

// ── Update: mesh upkeep ────────────────────────────────────────────

/// Rebuilds the terrain mesh of every [`HexMap`] whose grid changed.
///
/// Each pass triangulates into a fresh buffer and swaps in a new mesh asset,
/// so the renderer and ray casts see either the old mesh or the new one.
pub fn retriangulate(
    mut meshes: ResMut<Assets<Mesh>>,
    mut map_q: Query<(&HexMap, &mut Mesh3d), Changed<HexMap>>,
) {
    for (map, mut mesh3d) in &mut map_q {
        let data = triangulate(&map.grid);
        info!(
            "Triangulated {} cells: {} vertices, {} triangles, bridges {:?}, corners {:?}",
            data.stats.cells,
            data.vertex_count(),
            data.triangle_count(),
            data.stats.bridges,
            data.stats.corners,
        );
        mesh3d.0 = meshes.add(data.into_render_mesh());
    }
}

// ── Update: brush + picking ────────────────────────────────────────

/// Keys 1-9 pick the brush color, Up/Down step the brush elevation.
pub fn select_brush(
    keys: Res<ButtonInput<KeyCode>>,
    mut brush: ResMut<HexBrush>,
    cfg: Res<MapConfig>,
) {
    for (i, key) in PALETTE_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) && i < cfg.grid.palette.len() {
            brush.color_index = i;
            info!("Brush color {}", i + 1);
        }
    }

    let max_elevation = cfg.relief.max_elevation.max(0);
    if keys.just_pressed(KeyCode::ArrowUp) {
        brush.elevation = (brush.elevation + 1).min(max_elevation);
        info!("Brush elevation {}", brush.elevation);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        brush.elevation = (brush.elevation - 1).max(0);
        info!("Brush elevation {}", brush.elevation);
    }
}

/// Left click: ray cast from the camera through the cursor onto the terrain
/// mesh, resolve the cell under the hit and paint it with the [`HexBrush`].
pub fn pick_cell(
    input: PickInput,
    mut map_q: Query<(Entity, &mut HexMap, &GlobalTransform)>,
    mut ray_cast: MeshRayCast,
    brush: Res<HexBrush>,
    cfg: Res<MapConfig>,
    mut picked: ResMut<PickedCell>,
) {
    if !input.mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(cursor) = input.cursor() else {
        return;
    };
    let Some(ray) = input.ray(cursor) else {
        return;
    };
    let Ok((map_entity, mut map, map_gt)) = map_q.single_mut() else {
        return;
    };

    let filter = |entity: Entity| entity == map_entity;
    let settings = MeshRayCastSettings::default().with_filter(&filter);
    let Some(hit_point) = ray_cast
        .cast_ray(ray, &settings)
        .first()
        .map(|(_, hit)| hit.point)
    else {
        debug!("Click at {cursor} missed the map");
        return;
    };

    let local = map_gt.affine().inverse().transform_point3(hit_point);
    let Some(index) = map.grid.cell_at_position(local) else {
        debug!("No cell under {local}");
        return;
    };
    let coordinates = map.grid.cell(index).map(HexCell::coordinates);
    if let Some(coordinates) = coordinates {
        info!("Picked cell {index} at {coordinates}");
    }
    picked.index = Some(index);
    picked.coordinates = coordinates;

    if let Some(stroke) = brush.paint(&map.grid, index, &cfg.grid.palette) {
        stroke.apply(&mut map.grid);
    }
}

// ── Update: debug overlay ──────────────────────────────────────────

/// Draws each cell's cube coordinates as a screen-projected egui label.
pub fn draw_cell_labels(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    camera_q: Query<(&Camera, &GlobalTransform), With<ViewerCamera>>,
    map_q: Query<(&HexMap, &GlobalTransform)>,
    cfg: Res<MapConfig>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok((camera, cam_gt)) = camera_q.single() else {
        return;
    };
    let Ok((map, map_gt)) = map_q.single() else {
        return;
    };
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let cam_pos = cam_gt.translation();

    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());

    for cell in map.grid.cells() {
        let world_pos = map_gt.transform_point(cell.position());
        if cam_pos.distance(world_pos) > cfg.grid.label_distance {
            continue;
        }
        if let Ok(viewport) = camera.world_to_viewport(cam_gt, world_pos) {
            painter.text(
                egui::pos2(viewport.x, viewport.y),
                egui::Align2::CENTER_CENTER,
                cell.coordinates().to_string_on_separate_lines(),
                egui::FontId::proportional(11.0),
                egui::Color32::WHITE,
            );
        }
    }
}
