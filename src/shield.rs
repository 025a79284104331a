//! The player's shield.
//!
//! At most one shield exists at a time.  It follows the player, absorbs every
//! hazard it touches, and disappears after [`GameConfig::shield_max_hits`]
//! hits or [`GameConfig::shield_lifetime`] seconds, whichever comes first.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::combat::{sensor_body, EntityKind};
use crate::config::GameConfig;
use crate::constants::SHIELD_RADIUS;
use crate::player::Player;

#[derive(Component, Debug, Clone)]
pub struct Shield {
    pub hits: u32,
    pub lifetime: Timer,
}

impl Shield {
    pub fn new(lifetime_secs: f32) -> Self {
        Self {
            hits: 0,
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
        }
    }

    /// Count one absorbed hazard.  Returns `true` when the shield breaks.
    pub fn absorb(&mut self, max_hits: u32) -> bool {
        self.hits += 1;
        self.hits >= max_hits
    }
}

/// The live shield entity, if any.  Updated immediately (not via commands) so
/// two pickups in one frame cannot both raise a shield.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ActiveShield(pub Option<Entity>);

/// Raise a shield at `position`.  Returns `None` if one is already up.
pub fn raise_shield(
    commands: &mut Commands,
    active: &mut ActiveShield,
    position: Vec2,
    config: &GameConfig,
) -> Option<Entity> {
    if active.0.is_some() {
        return None;
    }
    let entity = commands
        .spawn((
            sensor_body(EntityKind::Shield, Collider::ball(SHIELD_RADIUS), Vec2::ZERO),
            Shield::new(config.shield_lifetime),
            Sprite::from_color(
                Color::srgba(0.3, 0.6, 1.0, 0.35),
                Vec2::splat(SHIELD_RADIUS * 2.0),
            ),
            Transform::from_translation(position.extend(2.0)),
        ))
        .id();
    active.0 = Some(entity);
    info!("Shield raised");
    Some(entity)
}

pub fn shield_follow_system(
    q_player: Query<&Transform, (With<Player>, Without<Shield>)>,
    mut q_shield: Query<&mut Transform, With<Shield>>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    for mut transform in q_shield.iter_mut() {
        transform.translation.x = player.translation.x;
        transform.translation.y = player.translation.y;
    }
}

pub fn shield_lifetime_system(
    mut commands: Commands,
    time: Res<Time>,
    mut active: ResMut<ActiveShield>,
    mut q_shield: Query<(Entity, &mut Shield)>,
) {
    for (entity, mut shield) in q_shield.iter_mut() {
        shield.lifetime.tick(time.delta());
        if shield.lifetime.is_finished() {
            commands.entity(entity).despawn();
            if active.0 == Some(entity) {
                active.0 = None;
            }
            debug!("Shield expired after {} hits", shield.hits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn shield_breaks_on_the_last_allowed_hit() {
        let mut shield = Shield::new(10.0);
        for _ in 0..9 {
            assert!(!shield.absorb(10));
        }
        assert!(shield.absorb(10));
    }

    #[test]
    fn only_one_shield_at_a_time() {
        let mut world = World::new();
        let mut active = ActiveShield::default();
        let config = GameConfig::default();
        let mut commands = world.commands();

        assert!(raise_shield(&mut commands, &mut active, Vec2::ZERO, &config).is_some());
        assert!(raise_shield(&mut commands, &mut active, Vec2::ZERO, &config).is_none());
    }

    #[test]
    fn shield_follows_and_expires() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ActiveShield>()
            .add_systems(Update, (shield_follow_system, shield_lifetime_system).chain());

        app.world_mut()
            .spawn((Player, Transform::from_xyz(40.0, -200.0, 0.0)));
        let shield = app
            .world_mut()
            .spawn((Shield::new(0.5), Transform::default()))
            .id();
        app.world_mut().resource_mut::<ActiveShield>().0 = Some(shield);

        app.update();
        let t = app.world().get::<Transform>(shield).unwrap();
        assert_eq!(t.translation.truncate(), Vec2::new(40.0, -200.0));

        app.world_mut()
            .get_mut::<Shield>(shield)
            .unwrap()
            .lifetime
            .tick(Duration::from_secs(1));
        app.update();

        assert!(app.world().get_entity(shield).is_err());
        assert!(app.world().resource::<ActiveShield>().0.is_none());
    }
}
