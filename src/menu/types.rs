use bevy::prelude::*;

/// Top-level application state machine.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen; shown on startup.
    #[default]
    MainMenu,
    /// A run is in progress.
    Playing,
    /// The player was hit; world frozen, summary overlay shown.
    GameOver,
}

/// Root node of the main-menu UI; entire tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Instructions,
    Quit,
}

/// Tags a main-menu button with what it does.
#[derive(Component, Debug, Clone, Copy)]
pub struct MenuButton(pub MenuAction);

/// The static controls panel toggled by the Instructions button.
#[derive(Component)]
pub struct InstructionsPanel;

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    PlayAgain,
    Menu,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct GameOverButton(pub GameOverAction);

/// How the last run compared with the high score; set on `OnEnter(GameOver)`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary(pub crate::storage::HighScoreOutcome);
