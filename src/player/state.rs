//! Player components and resources.
//!
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`] — arrow-key movement
//! - [`super::combat`] — firing

use bevy::prelude::*;

/// Marker component for the player ship entity.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Player;

/// What the player wants to do this frame, independent of the input device.
///
/// Cleared at the start of every frame, filled by the input systems, consumed by
/// the movement and firing systems.  Tests write it directly.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    /// Each axis is -1, 0 or +1.
    pub direction: Vec2,
    pub fire: bool,
}

/// Written once per shot that actually left the barrel.
#[derive(Message, Debug, Clone, Copy)]
pub struct ShotFired {
    pub bullets: usize,
}
