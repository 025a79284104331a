//! Timed spawning of aliens, asteroids and power-ups, plus alien behaviour.
//!
//! Each spawner owns a one-shot timer whose duration is re-rolled uniformly
//! from its configured range every time it fires.  Cancelling the timers (on
//! game over) stops all spawning; each alien's shooting timer lives on the alien
//! itself and dies with it.

use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::combat::{sensor_body, EntityKind};
use crate::config::GameConfig;
use crate::constants::*;
use crate::pool::{acquire_bullet, AlienBullet, BulletPoolQuery};
use crate::powerup::{random_power_up_position, spawn_power_up, PowerUpKind};

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Alien;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Asteroid;

/// Per-alien countdown to its next shot.
#[derive(Component, Debug, Clone)]
pub struct ShootTimer(pub Timer);

fn roll_timer(range: [f32; 2], rng: &mut impl Rng) -> Timer {
    Timer::from_seconds(rng.gen_range(range[0]..=range[1]), TimerMode::Once)
}

/// Ticks one timer; on expiry replaces it with a freshly rolled one.
fn tick_and_reroll(
    slot: &mut Option<Timer>,
    delta: Duration,
    range: [f32; 2],
    rng: &mut impl Rng,
) -> bool {
    let Some(timer) = slot.as_mut() else {
        return false;
    };
    timer.tick(delta);
    if !timer.is_finished() {
        return false;
    }
    *timer = roll_timer(range, rng);
    true
}

/// What came due during one tick of [`SpawnTimers`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnsDue {
    pub alien: bool,
    pub asteroid: bool,
    pub power_up: bool,
}

/// Spawn countdowns.  `None` means cancelled.
#[derive(Resource, Debug, Default, Clone)]
pub struct SpawnTimers {
    pub alien: Option<Timer>,
    pub asteroid: Option<Timer>,
    pub power_up: Option<Timer>,
}

impl SpawnTimers {
    pub fn start(config: &GameConfig, rng: &mut impl Rng) -> Self {
        Self {
            alien: Some(roll_timer(config.alien_spawn_secs, rng)),
            asteroid: Some(roll_timer(config.asteroid_spawn_secs, rng)),
            power_up: Some(roll_timer(config.power_up_spawn_secs, rng)),
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn is_cancelled(&self) -> bool {
        self.alien.is_none() && self.asteroid.is_none() && self.power_up.is_none()
    }

    pub fn tick(&mut self, delta: Duration, config: &GameConfig, rng: &mut impl Rng) -> SpawnsDue {
        SpawnsDue {
            alien: tick_and_reroll(&mut self.alien, delta, config.alien_spawn_secs, rng),
            asteroid: tick_and_reroll(&mut self.asteroid, delta, config.asteroid_spawn_secs, rng),
            power_up: tick_and_reroll(&mut self.power_up, delta, config.power_up_spawn_secs, rng),
        }
    }
}

// ── Spawn parameters ──────────────────────────────────────────────────────────

/// Aliens enter near the top at a random x anywhere across the width,
/// drifting sideways in a random direction.  One spawned past the bounce
/// limit turns back on its first frame.
pub fn alien_launch(config: &GameConfig, rng: &mut impl Rng) -> (Vec2, Vec2) {
    let x = rng.gen_range(-HALF_WIDTH..=HALF_WIDTH);
    let y = HALF_HEIGHT - ALIEN_SPAWN_TOP_MARGIN;
    let speed = rng.gen_range(config.alien_speed[0]..=config.alien_speed[1]);
    let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    (Vec2::new(x, y), Vec2::new(speed * direction, 0.0))
}

/// Asteroids start just above the top edge and fall straight down.
pub fn asteroid_launch(config: &GameConfig, rng: &mut impl Rng) -> (Vec2, Vec2) {
    let x = rng.gen_range(-HALF_WIDTH..=HALF_WIDTH);
    let speed = rng.gen_range(config.asteroid_speed[0]..=config.asteroid_speed[1]);
    (
        Vec2::new(x, HALF_HEIGHT + ASTEROID_SPAWN_ABOVE),
        Vec2::new(0.0, -speed),
    )
}

/// New horizontal velocity once an alien touches a side edge, pointing back
/// into the playfield.  `None` while it is clear of both edges or already
/// heading inward.
pub fn bounce_velocity(x: f32, vx: f32, config: &GameConfig, rng: &mut impl Rng) -> Option<f32> {
    let limit = HALF_WIDTH - ALIEN_HALF_WIDTH;
    let mut speed = || rng.gen_range(config.alien_bounce_speed[0]..=config.alien_bounce_speed[1]);
    if x <= -limit && vx <= 0.0 {
        Some(speed())
    } else if x >= limit && vx >= 0.0 {
        Some(-speed())
    } else {
        None
    }
}

pub fn spawn_alien(commands: &mut Commands, config: &GameConfig, rng: &mut impl Rng) -> Entity {
    let (position, linvel) = alien_launch(config, rng);
    commands
        .spawn((
            sensor_body(
                EntityKind::Alien,
                Collider::cuboid(ALIEN_HALF_WIDTH, ALIEN_HITBOX_HEIGHT / 2.0),
                linvel,
            ),
            Alien,
            ShootTimer(roll_timer(config.alien_shoot_secs, rng)),
            Sprite::from_color(
                Color::srgb(0.4, 1.0, 0.4),
                Vec2::new(ALIEN_HALF_WIDTH * 2.0, ALIEN_HITBOX_HEIGHT),
            ),
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

pub fn spawn_asteroid(commands: &mut Commands, config: &GameConfig, rng: &mut impl Rng) -> Entity {
    let (position, linvel) = asteroid_launch(config, rng);
    let half = ASTEROID_HITBOX_SIZE / 2.0;
    commands
        .spawn((
            sensor_body(EntityKind::Asteroid, Collider::cuboid(half, half), linvel),
            Asteroid,
            Sprite::from_color(Color::srgb(0.55, 0.5, 0.45), Vec2::splat(ASTEROID_HITBOX_SIZE)),
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

// ── Systems ───────────────────────────────────────────────────────────────────

pub fn spawn_timers_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut timers: ResMut<SpawnTimers>,
) {
    let mut rng = rand::thread_rng();
    let due = timers.tick(time.delta(), &config, &mut rng);

    if due.alien {
        spawn_alien(&mut commands, &config, &mut rng);
    }
    if due.asteroid {
        spawn_asteroid(&mut commands, &config, &mut rng);
    }
    if due.power_up {
        let kind = PowerUpKind::random(&mut rng);
        let position = random_power_up_position(&mut rng);
        spawn_power_up(&mut commands, kind, position);
        debug!("Power-up {kind:?} at {position}");
    }
}

/// Each alien fires one bullet straight down whenever its own timer runs out.
pub fn alien_shoot_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut q_aliens: Query<(&Transform, &mut ShootTimer), (With<Alien>, Without<AlienBullet>)>,
    mut pool: BulletPoolQuery<AlienBullet>,
) {
    let mut rng = rand::thread_rng();
    for (transform, mut shoot) in q_aliens.iter_mut() {
        shoot.0.tick(time.delta());
        if !shoot.0.is_finished() {
            continue;
        }
        shoot.0 = roll_timer(config.alien_shoot_secs, &mut rng);

        let muzzle = transform.translation.truncate() - Vec2::Y * (ALIEN_HITBOX_HEIGHT / 2.0);
        if acquire_bullet(
            &mut pool,
            &mut commands,
            muzzle,
            Vec2::new(0.0, -config.alien_bullet_speed),
        )
        .is_none()
        {
            debug!("Alien bullet pool exhausted; shot skipped");
        }
    }
}

pub fn alien_edge_bounce_system(
    config: Res<GameConfig>,
    mut q_aliens: Query<(&Transform, &mut Velocity), With<Alien>>,
) {
    let mut rng = rand::thread_rng();
    for (transform, mut velocity) in q_aliens.iter_mut() {
        if let Some(vx) = bounce_velocity(transform.translation.x, velocity.linvel.x, &config, &mut rng)
        {
            velocity.linvel.x = vx;
        }
    }
}

/// Asteroids that fell past the bottom edge are gone for good.
pub fn despawn_fallen_asteroids_system(
    mut commands: Commands,
    q_asteroids: Query<(Entity, &Transform), With<Asteroid>>,
) {
    for (entity, transform) in q_asteroids.iter() {
        if transform.translation.y < -HALF_HEIGHT - ASTEROID_HITBOX_SIZE {
            commands.entity(entity).despawn();
        }
    }
}
