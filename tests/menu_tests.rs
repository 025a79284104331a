//! Headless tests for the [`GameState`] screen flow.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics —
//! so they run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `MainMenu`, with the menu UI spawned.
//! 2. Enter on the main menu starts a run.
//! 3. `Playing` persists across frames with no new transition request.
//! 4. Enter on the game-over screen starts a fresh run.
//! 5. Escape on the game-over screen returns to the menu with the scene gone.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use space_defender::combat::SceneEntity;
use space_defender::menu::{GameOverRoot, GameState, MainMenuPlugin, MainMenuRoot};
use space_defender::player::Player;
use space_defender::session::Session;
use space_defender::simulation::SimulationPlugin;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with both game plugins.
///
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
/// Keyboard input is a bare resource that the tests drive by hand.
fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((MainMenuPlugin, SimulationPlugin));
    app.update();
    app
}

fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Press and release `key` across one frame.
fn tap(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, F>()
        .iter(app.world())
        .count()
}

fn end_run(app: &mut App) {
    app.world_mut().resource_mut::<Session>().end();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::GameOver);
    app.update();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn default_state_is_main_menu() {
    let mut app = headless_app();
    assert_eq!(state(&app), GameState::MainMenu, "initial state must be MainMenu");
    assert_eq!(count::<With<MainMenuRoot>>(&mut app), 1);
    assert_eq!(count::<With<Player>>(&mut app), 0);
}

#[test]
fn enter_starts_a_run() {
    let mut app = headless_app();
    tap(&mut app, KeyCode::Enter);
    app.update();

    assert_eq!(state(&app), GameState::Playing);
    assert_eq!(count::<With<MainMenuRoot>>(&mut app), 0, "menu UI must be gone");
    assert_eq!(count::<With<Player>>(&mut app), 1);
}

#[test]
fn playing_state_persists_across_frames() {
    let mut app = headless_app();
    tap(&mut app, KeyCode::Enter);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(state(&app), GameState::Playing);
}

#[test]
fn play_again_starts_a_fresh_run() {
    let mut app = headless_app();
    tap(&mut app, KeyCode::Enter);
    app.update();
    app.world_mut().resource_mut::<Session>().score = 33;
    end_run(&mut app);

    assert_eq!(state(&app), GameState::GameOver);
    assert_eq!(count::<With<GameOverRoot>>(&mut app), 1);

    tap(&mut app, KeyCode::Enter);
    app.update();

    assert_eq!(state(&app), GameState::Playing);
    assert_eq!(count::<With<GameOverRoot>>(&mut app), 0);
    assert_eq!(count::<With<Player>>(&mut app), 1, "exactly one ship after restart");
    let session = app.world().resource::<Session>();
    assert_eq!(session.score, 0);
    assert!(!session.game_over);
}

#[test]
fn escape_returns_to_menu_and_clears_the_scene() {
    let mut app = headless_app();
    tap(&mut app, KeyCode::Enter);
    app.update();
    end_run(&mut app);

    tap(&mut app, KeyCode::Escape);
    app.update();

    assert_eq!(state(&app), GameState::MainMenu);
    assert_eq!(count::<With<SceneEntity>>(&mut app), 0);
    assert_eq!(count::<With<MainMenuRoot>>(&mut app), 1);
}
