//! Gameplay plugin: scene setup and the per-frame system schedule.
//!
//! ## Frame order while `Playing`
//!
//! | Schedule   | Systems (in order)                                                  |
//! |------------|---------------------------------------------------------------------|
//! | Update     | intent clear → keyboard → movement → clamp → fire → bullet recycle → clock → clock text → alien bounce → shield follow |
//! | Update     | spawn timers → alien shooting → fallen asteroids → shield lifetime → power-up timers → HUD text |
//! | (physics)  | Rapier steps and reports `CollisionEvent`s                          |
//! | PostUpdate | collision resolution → power-up effects                             |
//!
//! Everything above stops once [`Session::game_over`] is set; the game-over
//! screen takes over from there.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::combat::resolve_collisions_system;
use crate::config::GameConfig;
use crate::menu::GameState;
use crate::player::{
    apply_player_intent_system, clamp_player_to_playfield_system, keyboard_to_intent_system,
    player_fire_system, player_intent_clear_system, spawn_player, PlayerIntent, ShotFired,
};
use crate::pool::{recycle_offscreen_bullets_system, spawn_bullet_pool, BulletOwner};
use crate::powerup::{apply_power_up_system, PowerUpCollected};
use crate::rendering::{hud_clock_display_system, hud_score_display_system, spawn_hud};
use crate::session::{session_running, tick_modifiers_system, tick_session_clock_system, Session};
use crate::shield::{shield_follow_system, shield_lifetime_system, ActiveShield};
use crate::spawner::{
    alien_edge_bounce_system, alien_shoot_system, despawn_fallen_asteroids_system,
    spawn_timers_system, SpawnTimers,
};
use crate::storage::{HighScore, HighScoreStore, MemoryStore};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Replaced by the file-backed store at startup when running the game.
        if !app.world().contains_resource::<HighScoreStore>() {
            app.insert_resource(HighScoreStore::new(MemoryStore::default()));
        }

        app.init_resource::<GameConfig>()
            .init_resource::<HighScore>()
            .init_resource::<Session>()
            .init_resource::<SpawnTimers>()
            .init_resource::<ActiveShield>()
            .init_resource::<PlayerIntent>()
            .add_message::<ShotFired>()
            .add_message::<PowerUpCollected>()
            .add_message::<CollisionEvent>()
            .add_systems(OnEnter(GameState::Playing), setup_play_scene)
            .add_systems(
                Update,
                (
                    player_intent_clear_system,
                    keyboard_to_intent_system,
                    apply_player_intent_system,
                    clamp_player_to_playfield_system,
                    player_fire_system,
                    recycle_offscreen_bullets_system,
                    tick_session_clock_system,
                    hud_clock_display_system,
                    alien_edge_bounce_system,
                    shield_follow_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing).and(session_running)),
            )
            .add_systems(
                Update,
                (
                    spawn_timers_system,
                    alien_shoot_system,
                    despawn_fallen_asteroids_system,
                    shield_lifetime_system,
                    tick_modifiers_system,
                    hud_score_display_system,
                )
                    .chain()
                    .after(shield_follow_system)
                    .run_if(in_state(GameState::Playing).and(session_running)),
            )
            .add_systems(
                PostUpdate,
                (resolve_collisions_system, apply_power_up_system)
                    .chain()
                    .after(PhysicsSet::Writeback)
                    .run_if(in_state(GameState::Playing).and(session_running)),
            );
    }
}

/// Start a fresh run: reset per-run state, spawn the ship, both bullet pools
/// and the HUD, and arm the spawners.
pub fn setup_play_scene(
    mut commands: Commands,
    config: Res<GameConfig>,
    high_score: Res<HighScore>,
    mut session: ResMut<Session>,
    mut timers: ResMut<SpawnTimers>,
    mut active_shield: ResMut<ActiveShield>,
) {
    *session = Session::default();
    *active_shield = ActiveShield::default();
    *timers = SpawnTimers::start(&config, &mut rand::thread_rng());

    spawn_player(&mut commands);
    spawn_bullet_pool(&mut commands, BulletOwner::Player, config.player_bullet_pool_size);
    spawn_bullet_pool(&mut commands, BulletOwner::Alien, config.alien_bullet_pool_size);
    spawn_hud(&mut commands, high_score.0);

    info!("Run started (high score {})", high_score.0);
}
