//! Screen flow: `GameState`, the main menu and the game-over overlay.
//!
//! ## States
//!
//! | State      | Description                                        |
//! |------------|----------------------------------------------------|
//! | `MainMenu` | Initial state; title, Start / Instructions / Quit  |
//! | `Playing`  | A run is in progress; all gameplay systems active  |
//! | `GameOver` | World frozen; summary and Play Again / Menu shown  |
//!
//! ## Systems (registered by `MainMenuPlugin`)
//!
//! | System                     | Schedule             | Purpose                          |
//! |----------------------------|----------------------|----------------------------------|
//! | `setup_main_menu`          | `OnEnter(MainMenu)`  | Spawn full-screen menu UI        |
//! | `cleanup_main_menu`        | `OnExit(MainMenu)`   | Despawn menu UI entities         |
//! | `menu_button_system`       | `Update / MainMenu`  | Start / Instructions / Quit      |
//! | `freeze_world_system`      | `OnEnter(GameOver)`  | Zero velocities, stop spawners   |
//! | `hide_live_score_system`   | `OnEnter(GameOver)`  | Hide HUD score lines             |
//! | `commit_score_system`      | `OnEnter(GameOver)`  | Update and persist the high score|
//! | `setup_game_over`          | `OnEnter(GameOver)`  | Spawn the summary overlay        |
//! | `game_over_button_system`  | `Update / GameOver`  | Play Again / Menu                |
//! | `cleanup_game_over`        | `OnExit(GameOver)`   | Despawn the overlay              |
//! | `cleanup_game_world`       | `OnExit(GameOver)`   | Tear down the scene, reset run   |

mod cleanup;
mod common;
mod game_over;
mod main_menu;
mod types;

pub use cleanup::cleanup_game_world;
pub use game_over::{game_over_target, summary_lines};
pub use main_menu::{menu_outcome, MenuOutcome, INSTRUCTIONS, QUIT_AVAILABLE};
pub use types::*;

use crate::combat::SceneEntity;
use crate::player::Player;
use crate::rendering::hide_live_score_system;
use crate::session::Session;
use crate::shield::ActiveShield;
use crate::spawner::SpawnTimers;
use crate::storage::{commit_high_score, HighScore, HighScoreOutcome, HighScoreStore};
use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;
use common::*;
use game_over::*;
use main_menu::*;

/// Registers `GameState`, the menu and game-over UI, and their button handlers.
///
/// This plugin must be added to the app **before** any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always registered
/// first.
pub struct MainMenuPlugin;

impl Plugin for MainMenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                OnEnter(GameState::GameOver),
                (
                    freeze_world_system,
                    hide_live_score_system,
                    commit_score_system,
                    setup_game_over,
                )
                    .chain(),
            )
            .add_systems(
                OnExit(GameState::GameOver),
                (cleanup_game_over, cleanup_game_world).chain(),
            )
            .add_systems(
                Update,
                (
                    menu_button_system.run_if(in_state(GameState::MainMenu)),
                    game_over_button_system.run_if(in_state(GameState::GameOver)),
                ),
            );
    }
}
