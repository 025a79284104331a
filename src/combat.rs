//! Collision resolution: entity kinds, Rapier collision layers, and the
//! kind-pair dispatch table that turns overlap events into game effects.
//!
//! ## Dispatch table
//!
//! | Subject        | Object                            | Rule                 |
//! |----------------|-----------------------------------|----------------------|
//! | player bullet  | alien                             | `BulletHitsAlien`    |
//! | player bullet  | asteroid                          | `BulletHitsAsteroid` |
//! | player         | alien / asteroid / alien bullet   | `HazardHitsPlayer`   |
//! | shield         | alien / asteroid / alien bullet   | `ShieldAbsorbs`      |
//! | player         | power-up                          | `PickupCollected`    |
//!
//! Every other pair is ignored.  The collision groups from [`collision_groups`]
//! are derived from the same table, so Rapier only reports pairs with a rule.
//!
//! ## Collision groups
//!
//! | Kind          | Group    | Interacts with            |
//! |---------------|----------|---------------------------|
//! | Player        | GROUP_1  | 3, 4, 5, 7                |
//! | Player bullet | GROUP_2  | 3, 4                      |
//! | Alien         | GROUP_3  | 1, 2, 6                   |
//! | Asteroid      | GROUP_4  | 1, 2, 6                   |
//! | Alien bullet  | GROUP_5  | 1, 6                      |
//! | Shield        | GROUP_6  | 3, 4, 5                   |
//! | Power-up      | GROUP_7  | 1                         |

use std::collections::HashSet;

use bevy::prelude::*;
use bevy_rapier2d::geometry::Group;
use bevy_rapier2d::prelude::*;

use crate::config::GameConfig;
use crate::menu::GameState;
use crate::pool::{release_bullet, Pooled};
use crate::powerup::{PowerUp, PowerUpCollected};
use crate::session::Session;
use crate::shield::{ActiveShield, Shield};

// ── Components ────────────────────────────────────────────────────────────────

/// What an entity is, for collision dispatch.  Every collidable entity has one.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    PlayerBullet,
    Alien,
    Asteroid,
    AlienBullet,
    Shield,
    PowerUp,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Player,
        EntityKind::PlayerBullet,
        EntityKind::Alien,
        EntityKind::Asteroid,
        EntityKind::AlienBullet,
        EntityKind::Shield,
        EntityKind::PowerUp,
    ];

    fn membership(self) -> Group {
        match self {
            EntityKind::Player => Group::GROUP_1,
            EntityKind::PlayerBullet => Group::GROUP_2,
            EntityKind::Alien => Group::GROUP_3,
            EntityKind::Asteroid => Group::GROUP_4,
            EntityKind::AlienBullet => Group::GROUP_5,
            EntityKind::Shield => Group::GROUP_6,
            EntityKind::PowerUp => Group::GROUP_7,
        }
    }
}

/// Everything spawned for a play session; despawned wholesale on teardown.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneEntity;

// ── Layers ────────────────────────────────────────────────────────────────────

/// Rapier collision groups for `kind`, derived from the dispatch table.
pub fn collision_groups(kind: EntityKind) -> CollisionGroups {
    let filter = EntityKind::ALL
        .into_iter()
        .filter(|other| collision_rule_for_kinds(kind, *other).is_some())
        .fold(Group::NONE, |acc, other| acc | other.membership());
    CollisionGroups::new(kind.membership(), filter)
}

/// Shared physics bundle: a kinematic sensor that reports overlaps only.
///
/// All actors move purely by velocity; none of them push each other, so every
/// collider is a `Sensor` and kinematic–kinematic pairs must be enabled.
pub fn sensor_body(kind: EntityKind, collider: Collider, linvel: Vec2) -> impl Bundle {
    (
        kind,
        SceneEntity,
        RigidBody::KinematicVelocityBased,
        Velocity::linear(linvel),
        collider,
        Sensor,
        collision_groups(kind),
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
    )
}

// ── Dispatch table ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionRule {
    BulletHitsAlien,
    BulletHitsAsteroid,
    HazardHitsPlayer,
    ShieldAbsorbs,
    PickupCollected,
}

/// A resolved overlap with its two entities in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub rule: CollisionRule,
    /// Bullet, player or shield.
    pub subject: Entity,
    /// The thing being hit or picked up.
    pub object: Entity,
    pub object_kind: EntityKind,
}

fn ordered_rule(subject: EntityKind, object: EntityKind) -> Option<CollisionRule> {
    use EntityKind::*;
    match (subject, object) {
        (PlayerBullet, Alien) => Some(CollisionRule::BulletHitsAlien),
        (PlayerBullet, Asteroid) => Some(CollisionRule::BulletHitsAsteroid),
        (Player, Alien | Asteroid | AlienBullet) => Some(CollisionRule::HazardHitsPlayer),
        (Shield, Alien | Asteroid | AlienBullet) => Some(CollisionRule::ShieldAbsorbs),
        (Player, PowerUp) => Some(CollisionRule::PickupCollected),
        _ => None,
    }
}

/// The rule for an unordered pair of kinds, if any.
pub fn collision_rule_for_kinds(a: EntityKind, b: EntityKind) -> Option<CollisionRule> {
    ordered_rule(a, b).or_else(|| ordered_rule(b, a))
}

/// Look up an event pair in the table, in either order.
pub fn collision_rule(a: (Entity, EntityKind), b: (Entity, EntityKind)) -> Option<Contact> {
    if let Some(rule) = ordered_rule(a.1, b.1) {
        return Some(Contact {
            rule,
            subject: a.0,
            object: b.0,
            object_kind: b.1,
        });
    }
    ordered_rule(b.1, a.1).map(|rule| Contact {
        rule,
        subject: b.0,
        object: a.0,
        object_kind: a.1,
    })
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Remove a hazard: pooled alien bullets are recycled, everything else despawned.
fn destroy_hazard(
    commands: &mut Commands,
    destroyed: &mut HashSet<Entity>,
    entity: Entity,
    kind: EntityKind,
) {
    if kind == EntityKind::AlienBullet {
        release_bullet(commands, entity);
    } else {
        commands.entity(entity).despawn();
    }
    destroyed.insert(entity);
}

/// Apply every overlap reported this frame through the dispatch table.
///
/// Pairs are resolved independently, so a bullet overlapping two aliens in
/// one step kills both.  Entities destroyed earlier in the batch are skipped,
/// inactive pooled bullets never hit, and nothing is resolved after the fatal
/// hit.
#[allow(clippy::too_many_arguments)]
pub fn resolve_collisions_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    q_kind: Query<&EntityKind>,
    q_pooled: Query<&Pooled>,
    q_power_up: Query<&PowerUp>,
    mut q_shield: Query<&mut Shield>,
    mut session: ResMut<Session>,
    mut active_shield: ResMut<ActiveShield>,
    mut next_state: ResMut<NextState<GameState>>,
    mut power_ups: MessageWriter<PowerUpCollected>,
    config: Res<GameConfig>,
) {
    let mut destroyed: HashSet<Entity> = HashSet::new();

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        if session.game_over {
            continue;
        }

        let (Ok(k1), Ok(k2)) = (q_kind.get(e1), q_kind.get(e2)) else {
            continue;
        };
        let Some(contact) = collision_rule((e1, *k1), (e2, *k2)) else {
            continue;
        };

        if destroyed.contains(&contact.subject) || destroyed.contains(&contact.object) {
            continue;
        }
        let inactive = |e: Entity| q_pooled.get(e).is_ok_and(|p| !p.active);
        if inactive(contact.subject) || inactive(contact.object) {
            continue;
        }

        match contact.rule {
            CollisionRule::BulletHitsAlien => {
                release_bullet(&mut commands, contact.subject);
                destroy_hazard(&mut commands, &mut destroyed, contact.object, contact.object_kind);
                session.award(config.alien_kill_points, &config);
            }
            CollisionRule::BulletHitsAsteroid => {
                release_bullet(&mut commands, contact.subject);
                destroy_hazard(&mut commands, &mut destroyed, contact.object, contact.object_kind);
                session.award(config.asteroid_kill_points, &config);
            }
            CollisionRule::HazardHitsPlayer => {
                if session.spend_spare_life() {
                    destroy_hazard(&mut commands, &mut destroyed, contact.object, contact.object_kind);
                    info!("Spare life used; {} left", session.spare_lives);
                } else if session.end() {
                    info!("Player hit by {:?}; game over at score {}", contact.object_kind, session.score);
                    next_state.set(GameState::GameOver);
                }
            }
            CollisionRule::ShieldAbsorbs => {
                let Ok(mut shield) = q_shield.get_mut(contact.subject) else {
                    continue;
                };
                destroy_hazard(&mut commands, &mut destroyed, contact.object, contact.object_kind);
                if shield.absorb(config.shield_max_hits) {
                    commands.entity(contact.subject).despawn();
                    destroyed.insert(contact.subject);
                    active_shield.0 = None;
                    debug!("Shield broke after {} hits", shield.hits);
                }
            }
            CollisionRule::PickupCollected => {
                let Ok(power_up) = q_power_up.get(contact.object) else {
                    continue;
                };
                commands.entity(contact.object).despawn();
                destroyed.insert(contact.object);
                power_ups.write(PowerUpCollected { kind: power_up.0 });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_order_independent() {
        let mut world = World::new();
        let bullet = world.spawn_empty().id();
        let alien = world.spawn_empty().id();

        let forward = collision_rule(
            (bullet, EntityKind::PlayerBullet),
            (alien, EntityKind::Alien),
        )
        .unwrap();
        let backward = collision_rule(
            (alien, EntityKind::Alien),
            (bullet, EntityKind::PlayerBullet),
        )
        .unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward.subject, bullet);
        assert_eq!(forward.object, alien);
        assert_eq!(forward.rule, CollisionRule::BulletHitsAlien);
    }

    #[test]
    fn hazards_do_not_interact_with_each_other() {
        use EntityKind::*;
        assert_eq!(collision_rule_for_kinds(Alien, Asteroid), None);
        assert_eq!(collision_rule_for_kinds(AlienBullet, Alien), None);
        assert_eq!(collision_rule_for_kinds(PlayerBullet, AlienBullet), None);
        assert_eq!(collision_rule_for_kinds(Shield, PowerUp), None);
        assert_eq!(collision_rule_for_kinds(Player, PlayerBullet), None);
    }

    #[test]
    fn every_hazard_threatens_the_player_and_the_shield() {
        use EntityKind::*;
        for hazard in [Alien, Asteroid, AlienBullet] {
            assert_eq!(
                collision_rule_for_kinds(Player, hazard),
                Some(CollisionRule::HazardHitsPlayer)
            );
            assert_eq!(
                collision_rule_for_kinds(hazard, Shield),
                Some(CollisionRule::ShieldAbsorbs)
            );
        }
    }

    #[test]
    fn collision_groups_match_the_table() {
        for a in EntityKind::ALL {
            for b in EntityKind::ALL {
                let ga = collision_groups(a);
                let gb = collision_groups(b);
                let rapier_reports =
                    ga.memberships.intersects(gb.filters) && gb.memberships.intersects(ga.filters);
                assert_eq!(
                    rapier_reports,
                    collision_rule_for_kinds(a, b).is_some(),
                    "groups and table disagree for {a:?} × {b:?}"
                );
            }
        }
    }
}
