//! Player input and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`player_intent_clear_system`] — resets `PlayerIntent`.
//! 2. [`keyboard_to_intent_system`] — arrow keys and Space into `PlayerIntent`.
//! 3. [`apply_player_intent_system`] — `PlayerIntent` into `Velocity`.
//! 4. [`clamp_player_to_playfield_system`] — keeps the ship on screen.
//!
//! Firing consumes the same intent in [`super::combat`].

use super::state::{Player, PlayerIntent};
use crate::config::GameConfig;
use crate::constants::{HALF_HEIGHT, HALF_WIDTH, PLAYER_HITBOX_HEIGHT, PLAYER_HITBOX_WIDTH};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

pub fn player_intent_clear_system(mut intent: ResMut<PlayerIntent>) {
    *intent = PlayerIntent::default();
}

/// Horizontal and vertical axes are independent; opposite keys cancel out.
pub fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

pub fn keyboard_to_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<PlayerIntent>) {
    intent.direction = Vec2::new(
        axis(keys.pressed(KeyCode::ArrowLeft), keys.pressed(KeyCode::ArrowRight)),
        axis(keys.pressed(KeyCode::ArrowDown), keys.pressed(KeyCode::ArrowUp)),
    );
    intent.fire = keys.pressed(KeyCode::Space);
}

/// Constant speed on each held axis, zero otherwise.  Diagonals are not
/// normalised.
pub fn apply_player_intent_system(
    intent: Res<PlayerIntent>,
    config: Res<GameConfig>,
    mut q: Query<&mut Velocity, With<Player>>,
) {
    let Ok(mut velocity) = q.single_mut() else {
        return;
    };
    velocity.linvel = intent.direction * config.player_speed;
}

pub fn clamp_player_to_playfield_system(mut q: Query<&mut Transform, With<Player>>) {
    let Ok(mut transform) = q.single_mut() else {
        return;
    };
    let max = Vec2::new(
        HALF_WIDTH - PLAYER_HITBOX_WIDTH / 2.0,
        HALF_HEIGHT - PLAYER_HITBOX_HEIGHT / 2.0,
    );
    let clamped = transform.translation.truncate().clamp(-max, max);
    if clamped != transform.translation.truncate() {
        transform.translation.x = clamped.x;
        transform.translation.y = clamped.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        assert_eq!(axis(true, true), 0.0);
        assert_eq!(axis(false, false), 0.0);
        assert_eq!(axis(true, false), -1.0);
        assert_eq!(axis(false, true), 1.0);
    }

    fn movement_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<PlayerIntent>()
            .insert_resource(GameConfig::default())
            .add_systems(
                Update,
                (apply_player_intent_system, clamp_player_to_playfield_system).chain(),
            );
        app
    }

    #[test]
    fn intent_sets_constant_velocity() {
        let mut app = movement_app();
        let ship = app
            .world_mut()
            .spawn((Player, Velocity::zero(), Transform::default()))
            .id();
        app.world_mut().resource_mut::<PlayerIntent>().direction = Vec2::new(-1.0, 1.0);
        app.update();

        let v = app.world().get::<Velocity>(ship).unwrap().linvel;
        let speed = GameConfig::default().player_speed;
        assert_eq!(v, Vec2::new(-speed, speed));
    }

    #[test]
    fn no_intent_stops_the_ship() {
        let mut app = movement_app();
        let ship = app
            .world_mut()
            .spawn((Player, Velocity::linear(Vec2::new(200.0, 0.0)), Transform::default()))
            .id();
        app.update();
        assert_eq!(app.world().get::<Velocity>(ship).unwrap().linvel, Vec2::ZERO);
    }

    #[test]
    fn ship_cannot_leave_the_playfield() {
        let mut app = movement_app();
        let ship = app
            .world_mut()
            .spawn((Player, Velocity::zero(), Transform::from_xyz(1_000.0, -1_000.0, 0.0)))
            .id();
        app.update();

        let p = app.world().get::<Transform>(ship).unwrap().translation;
        assert_eq!(p.x, HALF_WIDTH - PLAYER_HITBOX_WIDTH / 2.0);
        assert_eq!(p.y, -HALF_HEIGHT + PLAYER_HITBOX_HEIGHT / 2.0);
    }
}
