//! Player module: ship entity, input handling and firing.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | `Player` marker, `PlayerIntent` resource, `ShotFired` message |
//! | [`control`] | Input systems: arrow keys, Space, movement, playfield clamp |
//! | [`combat`] | Pooled bullet firing with alternating barrels and multi-shot |
//!
//! All public items are re-exported at this level so that the rest of the crate
//! can use flat `crate::player::*` imports.

pub mod combat;
pub mod control;
pub mod state;

pub use combat::{barrel_offsets, player_fire_system};
pub use control::{
    apply_player_intent_system, clamp_player_to_playfield_system, keyboard_to_intent_system,
    player_intent_clear_system,
};
pub use state::{Player, PlayerIntent, ShotFired};

// ── Ship spawn ─────────────────────────────────────────────────────────────────

use crate::combat::{sensor_body, EntityKind};
use crate::constants::{PLAYER_HITBOX_HEIGHT, PLAYER_HITBOX_WIDTH, PLAYER_START_Y};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Spawn the player's ship centred near the bottom edge.
///
/// The hitbox is a little smaller than the drawn ship.
pub fn spawn_player(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            sensor_body(
                EntityKind::Player,
                Collider::cuboid(PLAYER_HITBOX_WIDTH / 2.0, PLAYER_HITBOX_HEIGHT / 2.0),
                Vec2::ZERO,
            ),
            Player,
            Sprite::from_color(
                Color::srgb(0.45, 0.8, 1.0),
                Vec2::new(PLAYER_HITBOX_WIDTH + 10.0, PLAYER_HITBOX_HEIGHT + 10.0),
            ),
            Transform::from_xyz(0.0, PLAYER_START_Y, 1.0),
        ))
        .id()
}
