use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use space_defender::config::{self, GameConfig};
use space_defender::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use space_defender::graphics::{self, SoundEffects};
use space_defender::menu::MainMenuPlugin;
use space_defender::simulation::SimulationPlugin;
use space_defender::storage;

/// Space has no gravity.
fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Space Defender".into(),
            resolution: WindowResolution::new(PLAYFIELD_WIDTH as u32, PLAYFIELD_HEIGHT as u32),
            resizable: false,
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    // Compiled defaults; load_game_config overwrites them from assets/game.toml
    // (if present) in the Startup schedule.
    .insert_resource(GameConfig::default())
    .init_resource::<SoundEffects>()
    // pixels_per_meter(1.0) keeps world units equal to window pixels.
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
    .add_plugins(MainMenuPlugin)
    .add_plugins(SimulationPlugin)
    .add_systems(
        Startup,
        (
            // Load config first so every other startup system sees the final values.
            config::load_game_config,
            storage::load_high_score_system.after(config::load_game_config),
            graphics::setup_camera,
            graphics::load_sound_effects,
            setup_physics_config,
        ),
    )
    .add_systems(Update, graphics::play_shoot_sound_system);

    app.run();
}
