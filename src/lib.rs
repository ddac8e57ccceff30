#![warn(missing_docs)]
//! Hex map terrain with terraces, cliffs and blended cell colors.
//!
//! The [`hex`] module builds a staggered grid of cells and triangulates it
//! into one noise-perturbed mesh. The [`terrain`] plugin renders that mesh
//! and lets the user pick and repaint cells; [`camera`] flies over it.

pub mod camera;
pub mod hex;
pub mod math;
pub mod terrain;

use bevy::prelude::*;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Camera and brush respond to input.
    #[default]
    Running,
    /// Inspector overlay active (Tab to toggle).
    Inspecting,
}
