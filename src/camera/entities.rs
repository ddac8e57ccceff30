use bevy::ecs::system::SystemParam;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use super::CameraConfig;

/// Marker component for the viewer camera entity.
#[derive(Component, Reflect)]
pub struct ViewerCamera;

/// Bundled input for [`super::systems::fly`].
#[derive(SystemParam)]
pub struct ViewerInput<'w, 's> {
    /// Keyboard state.
    pub keys: Res<'w, ButtonInput<KeyCode>>,
    /// Mouse buttons; right button enables drag-to-look.
    pub buttons: Res<'w, ButtonInput<MouseButton>>,
    /// Raw mouse motion.
    pub mouse_motion: MessageReader<'w, 's, MouseMotion>,
    /// Scroll wheel.
    pub scroll: MessageReader<'w, 's, MouseWheel>,
    /// Frame time.
    pub time: Res<'w, Time>,
    /// Camera configuration.
    pub cfg: Res<'w, CameraConfig>,
}
