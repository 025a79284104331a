//! Fixed-capacity bullet pools.
//!
//! Both pools are spawned in full when a run starts and never grow: firing
//! reactivates a parked bullet, and a bullet that hits something or leaves the
//! playfield is parked again.  An inactive bullet is hidden, stationary, has its
//! collider disabled and sits far outside the playfield.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::combat::{sensor_body, EntityKind};
use crate::constants::{BULLET_HITBOX_HEIGHT, BULLET_HITBOX_WIDTH, HALF_HEIGHT};

/// Where inactive bullets wait, well clear of every spawn point.
const PARKED: Vec3 = Vec3::new(0.0, -10_000.0, 0.0);

const BULLET_Z: f32 = 1.0;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pooled {
    pub active: bool,
}

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerBullet;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AlienBullet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Alien,
}

impl BulletOwner {
    fn kind(self) -> EntityKind {
        match self {
            BulletOwner::Player => EntityKind::PlayerBullet,
            BulletOwner::Alien => EntityKind::AlienBullet,
        }
    }

    fn color(self) -> Color {
        match self {
            BulletOwner::Player => Color::srgb(1.0, 0.95, 0.3),
            BulletOwner::Alien => Color::srgb(1.0, 0.3, 0.3),
        }
    }
}

/// Mutable view over one pool, selected by its marker component.
pub type BulletPoolQuery<'w, 's, M> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut Pooled,
        &'static mut Transform,
        &'static mut Velocity,
        &'static mut Visibility,
    ),
    With<M>,
>;

/// Spawn `capacity` parked bullets for `owner`.
pub fn spawn_bullet_pool(commands: &mut Commands, owner: BulletOwner, capacity: usize) {
    for _ in 0..capacity {
        let mut bullet = commands.spawn((
            sensor_body(
                owner.kind(),
                Collider::cuboid(BULLET_HITBOX_WIDTH / 2.0, BULLET_HITBOX_HEIGHT / 2.0),
                Vec2::ZERO,
            ),
            Pooled { active: false },
            ColliderDisabled,
            Sprite::from_color(owner.color(), Vec2::new(4.0, 16.0)),
            Transform::from_translation(PARKED),
            Visibility::Hidden,
        ));
        match owner {
            BulletOwner::Player => bullet.insert(PlayerBullet),
            BulletOwner::Alien => bullet.insert(AlienBullet),
        };
    }
    debug!("Spawned {capacity} {owner:?} bullets");
}

/// Activate a parked bullet at `position` moving at `linvel`.
///
/// Returns `None` when every bullet in the pool is in flight; the shot is
/// simply skipped.
pub fn acquire_bullet<M: Component>(
    pool: &mut BulletPoolQuery<'_, '_, M>,
    commands: &mut Commands,
    position: Vec2,
    linvel: Vec2,
) -> Option<Entity> {
    let (entity, mut pooled, mut transform, mut velocity, mut visibility) =
        pool.iter_mut().find(|(_, pooled, ..)| !pooled.active)?;

    pooled.active = true;
    transform.translation = position.extend(BULLET_Z);
    velocity.linvel = linvel;
    *visibility = Visibility::Inherited;
    commands.entity(entity).remove::<ColliderDisabled>();
    Some(entity)
}

/// Park a bullet again.  Tolerates the entity having been torn down.
pub fn release_bullet(commands: &mut Commands, entity: Entity) {
    commands.entity(entity).try_insert((
        Pooled { active: false },
        Velocity::zero(),
        Visibility::Hidden,
        ColliderDisabled,
        Transform::from_translation(PARKED),
    ));
}

/// Whether a bullet at height `y` has left the playfield in its travel direction.
pub fn is_off_screen(kind: EntityKind, y: f32) -> bool {
    match kind {
        EntityKind::PlayerBullet => y > HALF_HEIGHT,
        EntityKind::AlienBullet => y < -HALF_HEIGHT,
        _ => false,
    }
}

/// Park every active bullet that has flown off the playfield.
pub fn recycle_offscreen_bullets_system(
    mut commands: Commands,
    q_bullets: Query<(Entity, &Pooled, &Transform, &EntityKind)>,
) {
    for (entity, pooled, transform, kind) in q_bullets.iter() {
        if pooled.active && is_off_screen(*kind, transform.translation.y) {
            release_bullet(&mut commands, entity);
        }
    }
}
