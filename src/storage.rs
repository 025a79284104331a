//! Local key-value persistence for the high score.
//!
//! The game persists exactly one value: the best score ever reached, stored as
//! a string under [`HIGH_SCORE_KEY`].  [`KeyValueStore`] abstracts the backing
//! store so the native TOML file ([`TomlFileStore`]) and the in-memory store
//! used by tests ([`MemoryStore`]) are interchangeable.
//!
//! Storage is never fatal: an unreadable store yields a high score of zero and
//! a failed write is logged and otherwise ignored.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::constants::HIGH_SCORE_KEY;
use crate::error::{GameError, GameResult};

/// Minimal string key-value store, modelled on browser local storage.
pub trait KeyValueStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> GameResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> GameResult<()>;
}

// ── Backends ──────────────────────────────────────────────────────────────────

/// A flat TOML table on disk; every value is stored as a string.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Read the whole table.  A missing file is an empty table.
    fn read_table(&self) -> GameResult<toml::Table> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(source) => {
                return Err(GameError::StorageIo {
                    path: self.display_path(),
                    source,
                })
            }
        };

        contents
            .parse::<toml::Table>()
            .map_err(|err| GameError::StorageFormat {
                path: self.display_path(),
                reason: err.to_string(),
            })
    }
}

impl KeyValueStore for TomlFileStore {
    fn get(&self, key: &str) -> GameResult<Option<String>> {
        let table = self.read_table()?;
        Ok(table.get(key).map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn set(&mut self, key: &str, value: &str) -> GameResult<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| GameError::StorageIo {
                path: self.display_path(),
                source,
            })?;
        }

        let serialized = toml::to_string(&table).map_err(|err| GameError::StorageFormat {
            path: self.display_path(),
            reason: err.to_string(),
        })?;
        fs::write(&self.path, serialized).map_err(|source| GameError::StorageIo {
            path: self.display_path(),
            source,
        })
    }
}

/// Volatile store; also the fallback when no file store can be created.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> GameResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> GameResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// The store backing [`HighScore`].
#[derive(Resource)]
pub struct HighScoreStore(pub Box<dyn KeyValueStore>);

impl HighScoreStore {
    pub fn new(store: impl KeyValueStore) -> Self {
        Self(Box::new(store))
    }
}

/// Best score across all sessions; mirrors the persisted value.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScore(pub u32);

/// Result of committing a finished session against the high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighScoreOutcome {
    /// The session beat the previous best; `score` is the new high score.
    NewHighScore { score: u32 },
    /// The previous best stands.
    Standing { high_score: u32, score: u32 },
}

// ── Operations ────────────────────────────────────────────────────────────────

/// Read the stored high score; an absent key is zero.
pub fn read_high_score(store: &dyn KeyValueStore) -> GameResult<u32> {
    match store.get(HIGH_SCORE_KEY)? {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidStoredValue {
                key: HIGH_SCORE_KEY.to_string(),
                raw,
            }),
    }
}

/// Like [`read_high_score`], but any failure degrades to zero.
pub fn load_high_score(store: &dyn KeyValueStore) -> u32 {
    match read_high_score(store) {
        Ok(score) => score,
        Err(err) => {
            warn!("High score unavailable ({err}); starting from 0");
            0
        }
    }
}

/// Compare a finished session with the high score, updating and persisting it
/// when beaten.  Call exactly once per game-over.
pub fn commit_high_score(
    high: &mut HighScore,
    score: u32,
    store: &mut dyn KeyValueStore,
) -> HighScoreOutcome {
    if score <= high.0 {
        return HighScoreOutcome::Standing {
            high_score: high.0,
            score,
        };
    }

    high.0 = score;
    match store.set(HIGH_SCORE_KEY, &score.to_string()) {
        Ok(()) => info!("New high score {score} saved"),
        Err(err) => error!("Failed to persist high score {score}: {err}"),
    }
    HighScoreOutcome::NewHighScore { score }
}

/// Startup system: open the file store named in the config and read the
/// persisted high score.  Runs after [`crate::config::load_game_config`].
pub fn load_high_score_system(mut commands: Commands, config: Res<GameConfig>) {
    let store = TomlFileStore::new(&config.storage_path);
    let high = load_high_score(&store);
    info!("High score {high} loaded from {}", config.storage_path);
    commands.insert_resource(HighScore(high));
    commands.insert_resource(HighScoreStore::new(store));
}
