//! Space Defender: a single-screen arcade shooter.
//!
//! The player's ship sits near the bottom of an 800×600 playfield and shoots
//! upward at aliens drifting across the top and asteroids falling through.
//! One hit ends the run unless a spare life absorbs it; power-ups appear every
//! so often.  The best score is kept in a local key-value store.
//!
//! ## Modules
//!
//! | Module        | Responsibility                                              |
//! |---------------|-------------------------------------------------------------|
//! | [`menu`]      | `GameState`, main menu, game-over overlay, scene teardown   |
//! | [`simulation`]| `SimulationPlugin`: play-scene setup and frame schedule     |
//! | [`player`]    | Ship, input, firing                                         |
//! | [`pool`]      | Fixed-capacity bullet pools                                 |
//! | [`spawner`]   | Alien / asteroid / power-up spawning, alien behaviour       |
//! | [`combat`]    | Entity kinds, collision layers, collision dispatch          |
//! | [`powerup`]   | Power-up kinds and effects                                  |
//! | [`shield`]    | The player's shield                                         |
//! | [`session`]   | Per-run state: score, lives, modifiers, game-over flag      |
//! | [`storage`]   | High-score persistence                                      |
//! | [`rendering`] | HUD text                                                    |
//! | [`graphics`]  | Camera and sound effects                                    |
//! | [`config`]    | `GameConfig` loaded from `assets/game.toml`                 |

pub mod combat;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod menu;
pub mod player;
pub mod pool;
pub mod powerup;
pub mod rendering;
pub mod session;
pub mod shield;
pub mod simulation;
pub mod spawner;
pub mod storage;
