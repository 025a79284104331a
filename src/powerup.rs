//! Power-up pickups and their effects.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::combat::{sensor_body, EntityKind};
use crate::config::GameConfig;
use crate::constants::{HALF_HEIGHT, HALF_WIDTH, POWER_UP_SIZE};
use crate::player::Player;
use crate::pool::{release_bullet, AlienBullet, Pooled};
use crate::session::{Session, TimedEffect};
use crate::shield::{raise_shield, ActiveShield};
use crate::spawner::{Alien, Asteroid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Raise a shield around the player.
    Shield,
    /// Clear every alien, asteroid and alien bullet.  Scores nothing.
    KillAll,
    /// One more spare life, up to the cap.
    ExtraLife,
    /// Three bullets per shot for a while.
    MultiShot,
    DoublePoints,
    RapidFire,
    /// Looks like a power-up, does nothing.
    Fake,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 7] = [
        PowerUpKind::Shield,
        PowerUpKind::KillAll,
        PowerUpKind::ExtraLife,
        PowerUpKind::MultiShot,
        PowerUpKind::DoublePoints,
        PowerUpKind::RapidFire,
        PowerUpKind::Fake,
    ];

    /// Uniform over every kind.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn timed_effect(self) -> Option<TimedEffect> {
        match self {
            PowerUpKind::MultiShot => Some(TimedEffect::MultiShot),
            PowerUpKind::DoublePoints => Some(TimedEffect::DoublePoints),
            PowerUpKind::RapidFire => Some(TimedEffect::RapidFire),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            PowerUpKind::Shield => Color::srgb(0.3, 0.6, 1.0),
            PowerUpKind::KillAll => Color::srgb(1.0, 0.4, 0.1),
            PowerUpKind::ExtraLife => Color::srgb(0.3, 1.0, 0.4),
            PowerUpKind::MultiShot => Color::srgb(0.9, 0.3, 0.9),
            PowerUpKind::DoublePoints => Color::srgb(1.0, 0.85, 0.2),
            PowerUpKind::RapidFire => Color::srgb(0.2, 0.9, 0.9),
            // Same as multi-shot.
            PowerUpKind::Fake => Color::srgb(0.9, 0.3, 0.9),
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct PowerUp(pub PowerUpKind);

/// Written by the collision resolver when the player touches a pickup.
#[derive(Message, Debug, Clone, Copy)]
pub struct PowerUpCollected {
    pub kind: PowerUpKind,
}

/// Anywhere on screen.
pub fn random_power_up_position(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(-HALF_WIDTH..=HALF_WIDTH),
        rng.gen_range(-HALF_HEIGHT..=HALF_HEIGHT),
    )
}

/// Pickups sit still until collected; they never expire.
pub fn spawn_power_up(commands: &mut Commands, kind: PowerUpKind, position: Vec2) -> Entity {
    let half = POWER_UP_SIZE / 2.0;
    commands
        .spawn((
            sensor_body(EntityKind::PowerUp, Collider::cuboid(half, half), Vec2::ZERO),
            PowerUp(kind),
            Sprite::from_color(kind.color(), Vec2::splat(POWER_UP_SIZE)),
            Transform::from_translation(position.extend(0.5)),
        ))
        .id()
}

/// Apply collected power-ups.  Runs right after collision resolution.
#[allow(clippy::too_many_arguments)]
pub fn apply_power_up_system(
    mut commands: Commands,
    mut collected: MessageReader<PowerUpCollected>,
    mut session: ResMut<Session>,
    mut active_shield: ResMut<ActiveShield>,
    config: Res<GameConfig>,
    q_player: Query<&Transform, With<Player>>,
    q_hazards: Query<Entity, Or<(With<Alien>, With<Asteroid>)>>,
    q_alien_bullets: Query<(Entity, &Pooled), With<AlienBullet>>,
) {
    for PowerUpCollected { kind } in collected.read().copied() {
        if session.game_over {
            continue;
        }
        info!("Power-up collected: {kind:?}");

        match kind {
            PowerUpKind::Shield => {
                let Ok(player) = q_player.single() else {
                    continue;
                };
                if raise_shield(
                    &mut commands,
                    &mut active_shield,
                    player.translation.truncate(),
                    &config,
                )
                .is_none()
                {
                    debug!("Shield already up; pickup wasted");
                }
            }
            PowerUpKind::KillAll => {
                let mut cleared = 0;
                for entity in q_hazards.iter() {
                    commands.entity(entity).despawn();
                    cleared += 1;
                }
                for (entity, pooled) in q_alien_bullets.iter() {
                    if pooled.active {
                        release_bullet(&mut commands, entity);
                    }
                }
                debug!("Kill-all cleared {cleared} hazards");
            }
            PowerUpKind::ExtraLife => session.grant_spare_life(config.max_spare_lives),
            PowerUpKind::MultiShot | PowerUpKind::DoublePoints | PowerUpKind::RapidFire => {
                if let Some(effect) = kind.timed_effect() {
                    session.activate(effect, config.power_up_duration);
                }
            }
            PowerUpKind::Fake => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn random_selection_reaches_every_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<PowerUpKind> = (0..500).map(|_| PowerUpKind::random(&mut rng)).collect();
        assert_eq!(seen.len(), PowerUpKind::ALL.len());
    }

    #[test]
    fn only_three_kinds_are_timed() {
        let timed = PowerUpKind::ALL
            .iter()
            .filter(|k| k.timed_effect().is_some())
            .count();
        assert_eq!(timed, 3);
        assert_eq!(PowerUpKind::Fake.timed_effect(), None);
    }

    #[test]
    fn positions_stay_inside_the_playfield() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut widest = 0.0_f32;
        for _ in 0..200 {
            let p = random_power_up_position(&mut rng);
            assert!(p.x.abs() <= HALF_WIDTH && p.y.abs() <= HALF_HEIGHT);
            widest = widest.max(p.x.abs());
        }
        assert!(widest > HALF_WIDTH - POWER_UP_SIZE, "no margin kept from the edges");
    }

    fn effect_app(kind: PowerUpKind) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Session>()
            .init_resource::<ActiveShield>()
            .insert_resource(GameConfig::default())
            .add_message::<PowerUpCollected>()
            .add_systems(Update, apply_power_up_system);
        app.world_mut()
            .spawn((Player, Transform::from_xyz(0.0, -250.0, 0.0)));
        app.world_mut().write_message(PowerUpCollected { kind });
        app
    }

    #[test]
    fn extra_life_is_capped() {
        let mut app = effect_app(PowerUpKind::ExtraLife);
        app.world_mut().resource_mut::<Session>().spare_lives = 3;
        app.update();
        assert_eq!(app.world().resource::<Session>().spare_lives, 3);
    }

    #[test]
    fn kill_all_clears_hazards_without_scoring() {
        let mut app = effect_app(PowerUpKind::KillAll);
        app.world_mut().spawn(Alien);
        app.world_mut().spawn(Asteroid);
        app.update();

        let hazards = app
            .world_mut()
            .query_filtered::<Entity, Or<(With<Alien>, With<Asteroid>)>>()
            .iter(app.world())
            .count();
        assert_eq!(hazards, 0);
        assert_eq!(app.world().resource::<Session>().score, 0);
    }

    #[test]
    fn second_shield_pickup_does_not_stack() {
        let mut app = effect_app(PowerUpKind::Shield);
        app.world_mut()
            .write_message(PowerUpCollected { kind: PowerUpKind::Shield });
        app.update();

        let shields = app
            .world_mut()
            .query::<&crate::shield::Shield>()
            .iter(app.world())
            .count();
        assert_eq!(shields, 1);
        assert!(app.world().resource::<ActiveShield>().0.is_some());
    }

    #[test]
    fn multi_shot_activates_its_timer() {
        let mut app = effect_app(PowerUpKind::MultiShot);
        app.update();
        assert!(app
            .world()
            .resource::<Session>()
            .is_active(TimedEffect::MultiShot));
    }
}
