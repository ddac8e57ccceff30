use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::ViewerCamera;
use crate::hex::{CellIndex, HexCoordinates, HexGrid};

/// The map entity's grid. Any mutable access marks it changed and
/// [`super::systems::retriangulate`] rebuilds the mesh.
#[derive(Component)]
pub struct HexMap {
    /// Cells, neighbor links and perturbation noise.
    pub grid: HexGrid,
}

/// Bundled read-only inputs for turning a click into a world-space ray.
#[derive(SystemParam)]
pub struct PickInput<'w, 's> {
    /// Mouse buttons.
    pub mouse: Res<'w, ButtonInput<MouseButton>>,
    /// The primary window, for the cursor position.
    pub windows: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    /// The viewer camera.
    pub camera_q: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<ViewerCamera>>,
}

impl PickInput<'_, '_> {
    /// Cursor position in the primary window, if it is inside.
    pub fn cursor(&self) -> Option<Vec2> {
        self.windows.single().ok()?.cursor_position()
    }

    /// Ray from the camera through the viewport point `cursor`.
    pub fn ray(&self, cursor: Vec2) -> Option<Ray3d> {
        let (camera, cam_gt) = self.camera_q.single().ok()?;
        camera.viewport_to_world(cam_gt, cursor).ok()
    }
}

/// Last cell hit by a click.
#[derive(Resource, Default, Reflect)]
pub struct PickedCell {
    /// Index into the grid.
    pub index: Option<CellIndex>,
    /// Cube coordinates of the same cell.
    pub coordinates: Option<HexCoordinates>,
}

/// What a click paints onto the picked cell.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct HexBrush {
    /// Palette entry to paint (keys 1-9).
    pub color_index: usize,
    /// Elevation to set (Up/Down).
    pub elevation: i32,
    /// Whether clicks change color.
    pub apply_color: bool,
    /// Whether clicks change elevation.
    pub apply_elevation: bool,
}

impl Default for HexBrush {
    fn default() -> Self {
        Self {
            color_index: 0,
            elevation: 0,
            apply_color: true,
            apply_elevation: true,
        }
    }
}

impl HexBrush {
    /// The edit this brush makes to the cell at `index`, or `None` if the
    /// cell already matches and retriangulation can be skipped.
    pub fn paint(&self, grid: &HexGrid, index: CellIndex, palette: &[Color]) -> Option<BrushStroke> {
        let cell = grid.cell(index)?;
        let color = palette
            .get(self.color_index)
            .copied()
            .filter(|c| self.apply_color && c.to_linear() != cell.color());
        let elevation =
            Some(self.elevation).filter(|&e| self.apply_elevation && e != cell.elevation());
        (color.is_some() || elevation.is_some()).then_some(BrushStroke {
            index,
            color,
            elevation,
        })
    }
}

/// Pending edit produced by [`HexBrush::paint`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushStroke {
    /// Target cell.
    pub index: CellIndex,
    /// New color, if it differs.
    pub color: Option<Color>,
    /// New elevation, if it differs.
    pub elevation: Option<i32>,
}

impl BrushStroke {
    /// Writes the edit into `grid`.
    pub fn apply(&self, grid: &mut HexGrid) {
        if let Some(color) = self.color {
            grid.set_color(self.index, color);
        }
        if let Some(elevation) = self.elevation {
            grid.set_elevation(self.index, elevation);
        }
    }
}
