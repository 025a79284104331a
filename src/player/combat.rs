//! Player firing.
//!
//! Holding Space fires whenever the cooldown has elapsed.  A single shot comes
//! out of the left and right barrels alternately; with multi-shot active every
//! shot uses left, centre and right at once.  Bullets come from the fixed pool,
//! so a shot with no free bullet is skipped and does not start the cooldown.

use super::state::{Player, PlayerIntent, ShotFired};
use crate::config::GameConfig;
use crate::constants::{BULLET_FORWARD_OFFSET, BULLET_SIDE_OFFSET};
use crate::pool::{acquire_bullet, BulletPoolQuery, PlayerBullet};
use crate::session::{Session, TimedEffect};
use bevy::prelude::*;

/// Horizontal barrel offsets for the next shot.
pub fn barrel_offsets(shots_fired: u32, multi_shot: bool) -> &'static [f32] {
    const LEFT: &[f32] = &[-BULLET_SIDE_OFFSET];
    const RIGHT: &[f32] = &[BULLET_SIDE_OFFSET];
    const ALL: &[f32] = &[-BULLET_SIDE_OFFSET, 0.0, BULLET_SIDE_OFFSET];

    if multi_shot {
        ALL
    } else if shots_fired % 2 == 0 {
        LEFT
    } else {
        RIGHT
    }
}

#[allow(clippy::too_many_arguments)]
pub fn player_fire_system(
    mut commands: Commands,
    time: Res<Time>,
    intent: Res<PlayerIntent>,
    config: Res<GameConfig>,
    mut session: ResMut<Session>,
    q_player: Query<&Transform, (With<Player>, Without<PlayerBullet>)>,
    mut pool: BulletPoolQuery<PlayerBullet>,
    mut shots: MessageWriter<ShotFired>,
) {
    session.fire_cooldown = (session.fire_cooldown - time.delta_secs()).max(0.0);
    if !intent.fire || session.fire_cooldown > 0.0 {
        return;
    }
    let Ok(player) = q_player.single() else {
        return;
    };

    let origin = player.translation.truncate() + Vec2::Y * BULLET_FORWARD_OFFSET;
    let linvel = Vec2::Y * config.player_bullet_speed;
    let offsets = barrel_offsets(
        session.shots_fired,
        session.is_active(TimedEffect::MultiShot),
    );

    let bullets = offsets
        .iter()
        .filter_map(|dx| {
            acquire_bullet(&mut pool, &mut commands, origin + Vec2::X * *dx, linvel)
        })
        .count();

    if bullets > 0 {
        session.shots_fired += 1;
        session.fire_cooldown = session.shot_interval(&config);
        shots.write(ShotFired { bullets });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{spawn_bullet_pool, BulletOwner, Pooled};
    use bevy_rapier2d::prelude::Velocity;

    #[test]
    fn single_shots_alternate_barrels() {
        assert_eq!(barrel_offsets(0, false), &[-BULLET_SIDE_OFFSET]);
        assert_eq!(barrel_offsets(1, false), &[BULLET_SIDE_OFFSET]);
        assert_eq!(barrel_offsets(2, false), &[-BULLET_SIDE_OFFSET]);
        assert_eq!(barrel_offsets(7, true).len(), 3);
    }

    fn fire_app(pool_size: usize) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Session>()
            .insert_resource(GameConfig::default())
            .insert_resource(PlayerIntent {
                direction: Vec2::ZERO,
                fire: true,
            })
            .add_message::<ShotFired>()
            .add_systems(Startup, move |mut commands: Commands| {
                spawn_bullet_pool(&mut commands, BulletOwner::Player, pool_size);
                commands.spawn((Player, Transform::from_xyz(0.0, -250.0, 0.0)));
            })
            .add_systems(Update, player_fire_system);
        app
    }

    fn active_bullets(app: &mut App) -> Vec<(Vec3, Vec2)> {
        let mut q = app
            .world_mut()
            .query_filtered::<(&Pooled, &Transform, &Velocity), With<PlayerBullet>>();
        q.iter(app.world())
            .filter(|(p, ..)| p.active)
            .map(|(_, t, v)| (t.translation, v.linvel))
            .collect()
    }

    #[test]
    fn first_shot_leaves_the_left_barrel() {
        let mut app = fire_app(10);
        app.update();

        let bullets = active_bullets(&mut app);
        assert_eq!(bullets.len(), 1);
        let (pos, vel) = bullets[0];
        assert_eq!(pos.x, -BULLET_SIDE_OFFSET);
        assert_eq!(pos.y, -250.0 + BULLET_FORWARD_OFFSET);
        assert!(vel.y > 0.0);

        let session = app.world().resource::<Session>();
        assert_eq!(session.shots_fired, 1);
        assert!(session.fire_cooldown > 0.0);
    }

    #[test]
    fn cooldown_blocks_the_next_frame() {
        let mut app = fire_app(10);
        app.update();
        app.update();
        assert_eq!(active_bullets(&mut app).len(), 1);
    }

    #[test]
    fn multi_shot_fires_three() {
        let mut app = fire_app(10);
        app.world_mut()
            .resource_mut::<Session>()
            .activate(TimedEffect::MultiShot, 10.0);
        app.update();

        let mut xs: Vec<f32> = active_bullets(&mut app).iter().map(|(p, _)| p.x).collect();
        xs.sort_by(f32::total_cmp);
        assert_eq!(xs, vec![-BULLET_SIDE_OFFSET, 0.0, BULLET_SIDE_OFFSET]);
    }

    #[test]
    fn empty_pool_skips_the_shot() {
        let mut app = fire_app(0);
        app.update();

        let session = app.world().resource::<Session>();
        assert_eq!(session.shots_fired, 0);
        assert_eq!(session.fire_cooldown, 0.0);
    }
}
