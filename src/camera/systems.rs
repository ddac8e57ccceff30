use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::MouseScrollUnit;
use bevy::prelude::*;
use bevy::render::view::Hdr;

use super::CameraConfig;
use super::entities::{ViewerCamera, ViewerInput};
use crate::hex::HexGrid;
use crate::math;
use crate::terrain::MapConfig;

/// Spawns the Camera3d entity south of the map center, looking at it.
pub fn spawn_camera(mut commands: Commands, cfg: Res<CameraConfig>, map: Res<MapConfig>) {
    let center = HexGrid::center_of(map.grid.width / 2, map.grid.height / 2);
    commands.spawn((
        Name::new("ViewerCamera"),
        Camera3d::default(),
        Hdr,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(center.x, cfg.spawn_height, center.z + cfg.spawn_distance)
            .looking_at(center, Vec3::Y),
        ViewerCamera,
    ));
}

/// WASD pan + Q/E/scroll zoom + right-drag look.
pub fn fly(mut input: ViewerInput, mut query: Query<&mut Transform, With<ViewerCamera>>) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };
    let dt = input.time.delta_secs();

    // Drag-to-look: yaw (horizontal) + pitch (vertical), only while right button is held
    let mut yaw = 0.0;
    let mut pitch = 0.0;
    if input.buttons.pressed(MouseButton::Right) {
        for ev in input.mouse_motion.read() {
            yaw -= ev.delta.x * input.cfg.mouse_sensitivity;
            pitch -= ev.delta.y * input.cfg.mouse_sensitivity;
        }
    } else {
        for _ in input.mouse_motion.read() {}
    }
    if yaw != 0.0 {
        transform.rotate_y(yaw);
    }
    if pitch != 0.0 {
        let (_, current_pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
        let pitch_delta = math::clamp_pitch(current_pitch, pitch, input.cfg.pitch_margin);
        transform.rotate_local_x(pitch_delta);
    }

    // WASD pan in the camera's forward/right plane (XZ only)
    let forward = transform.forward();
    let forward_xz = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let right = transform.right();
    let right_xz = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();

    let mut direction = Vec3::ZERO;
    if input.keys.pressed(KeyCode::KeyW) {
        direction += forward_xz;
    }
    if input.keys.pressed(KeyCode::KeyS) {
        direction -= forward_xz;
    }
    if input.keys.pressed(KeyCode::KeyD) {
        direction += right_xz;
    }
    if input.keys.pressed(KeyCode::KeyA) {
        direction -= right_xz;
    }
    if direction != Vec3::ZERO {
        transform.translation += direction.normalize() * input.cfg.pan_speed * dt;
    }

    // Q/E and scroll zoom along the view direction
    let mut zoom = 0.0;
    if input.keys.pressed(KeyCode::KeyE) {
        zoom += input.cfg.zoom_speed * dt;
    }
    if input.keys.pressed(KeyCode::KeyQ) {
        zoom -= input.cfg.zoom_speed * dt;
    }
    for ev in input.scroll.read() {
        let lines = match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        };
        zoom += lines * input.cfg.scroll_sensitivity;
    }
    if zoom != 0.0 {
        let target = transform.translation + *forward * zoom;
        if (input.cfg.min_height..=input.cfg.max_height).contains(&target.y) {
            transform.translation = target;
        }
    }
}
