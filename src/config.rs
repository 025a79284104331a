//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the tuneable values in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.fire_cooldown`, `config.alien_spawn_secs`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{validate_nonzero, validate_positive, validate_range, GameError, GameResult};
use bevy::prelude::*;
use serde::Deserialize;

pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
///
/// Ranges are stored as `[min, max]` pairs and sampled uniformly.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Player ────────────────────────────────────────────────────────────────
    pub player_speed: f32,
    pub player_bullet_pool_size: usize,
    pub player_bullet_speed: f32,
    pub fire_cooldown: f32,
    pub rapid_fire_cooldown: f32,
    pub max_spare_lives: u32,

    // ── Aliens ────────────────────────────────────────────────────────────────
    pub alien_spawn_secs: [f32; 2],
    pub alien_speed: [f32; 2],
    pub alien_bounce_speed: [f32; 2],
    pub alien_shoot_secs: [f32; 2],
    pub alien_bullet_pool_size: usize,
    pub alien_bullet_speed: f32,
    pub alien_kill_points: u32,

    // ── Asteroids ─────────────────────────────────────────────────────────────
    pub asteroid_spawn_secs: [f32; 2],
    pub asteroid_speed: [f32; 2],
    pub asteroid_kill_points: u32,

    // ── Power-ups ─────────────────────────────────────────────────────────────
    pub power_up_spawn_secs: [f32; 2],
    pub power_up_duration: f32,
    pub double_points_multiplier: u32,

    // ── Shield ────────────────────────────────────────────────────────────────
    pub shield_max_hits: u32,
    pub shield_lifetime: f32,

    // ── Persistence ───────────────────────────────────────────────────────────
    pub storage_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Player
            player_speed: PLAYER_SPEED,
            player_bullet_pool_size: PLAYER_BULLET_POOL_SIZE,
            player_bullet_speed: PLAYER_BULLET_SPEED,
            fire_cooldown: FIRE_COOLDOWN,
            rapid_fire_cooldown: RAPID_FIRE_COOLDOWN,
            max_spare_lives: MAX_SPARE_LIVES,
            // Aliens
            alien_spawn_secs: [ALIEN_SPAWN_MIN_SECS, ALIEN_SPAWN_MAX_SECS],
            alien_speed: [ALIEN_MIN_SPEED, ALIEN_MAX_SPEED],
            alien_bounce_speed: [ALIEN_BOUNCE_MIN_SPEED, ALIEN_BOUNCE_MAX_SPEED],
            alien_shoot_secs: [ALIEN_SHOOT_MIN_SECS, ALIEN_SHOOT_MAX_SECS],
            alien_bullet_pool_size: ALIEN_BULLET_POOL_SIZE,
            alien_bullet_speed: ALIEN_BULLET_SPEED,
            alien_kill_points: ALIEN_KILL_POINTS,
            // Asteroids
            asteroid_spawn_secs: [ASTEROID_SPAWN_MIN_SECS, ASTEROID_SPAWN_MAX_SECS],
            asteroid_speed: [ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED],
            asteroid_kill_points: ASTEROID_KILL_POINTS,
            // Power-ups
            power_up_spawn_secs: [POWER_UP_SPAWN_MIN_SECS, POWER_UP_SPAWN_MAX_SECS],
            power_up_duration: POWER_UP_DURATION_SECS,
            double_points_multiplier: DOUBLE_POINTS_MULTIPLIER,
            // Shield
            shield_max_hits: SHIELD_MAX_HITS,
            shield_lifetime: SHIELD_LIFETIME_SECS,
            // Persistence
            storage_path: STORAGE_PATH.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|e| GameError::ConfigParse {
                path: CONFIG_PATH.to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall timers, freeze entities, empty a bullet
    /// pool or break the shield on contact.
    ///
    /// `max_spare_lives = 0` is allowed and simply disables extra lives.
    pub fn validate(&self) -> GameResult<()> {
        validate_nonzero("player_bullet_pool_size", self.player_bullet_pool_size as u64)?;
        validate_nonzero("alien_bullet_pool_size", self.alien_bullet_pool_size as u64)?;
        validate_nonzero("shield_max_hits", u64::from(self.shield_max_hits))?;
        validate_nonzero("double_points_multiplier", u64::from(self.double_points_multiplier))?;
        validate_positive("player_speed", self.player_speed)?;
        validate_positive("player_bullet_speed", self.player_bullet_speed)?;
        validate_positive("fire_cooldown", self.fire_cooldown)?;
        validate_positive("rapid_fire_cooldown", self.rapid_fire_cooldown)?;
        validate_range("alien_spawn_secs", self.alien_spawn_secs[0], self.alien_spawn_secs[1])?;
        validate_range("alien_speed", self.alien_speed[0], self.alien_speed[1])?;
        validate_range(
            "alien_bounce_speed",
            self.alien_bounce_speed[0],
            self.alien_bounce_speed[1],
        )?;
        validate_range("alien_shoot_secs", self.alien_shoot_secs[0], self.alien_shoot_secs[1])?;
        validate_positive("alien_bullet_speed", self.alien_bullet_speed)?;
        validate_range(
            "asteroid_spawn_secs",
            self.asteroid_spawn_secs[0],
            self.asteroid_spawn_secs[1],
        )?;
        validate_range("asteroid_speed", self.asteroid_speed[0], self.asteroid_speed[1])?;
        validate_range(
            "power_up_spawn_secs",
            self.power_up_spawn_secs[0],
            self.power_up_spawn_secs[1],
        )?;
        validate_positive("power_up_duration", self.power_up_duration)?;
        validate_positive("shield_lifetime", self.shield_lifetime)?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Parse or validation errors are logged and leave the compiled defaults in
/// place.  A missing file is not an error.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match GameConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded game config from {CONFIG_PATH}");
            }
            Err(e) => {
                warn!("{e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = GameConfig::from_toml_str("fire_cooldown = 0.25\n").unwrap();
        assert_eq!(cfg.fire_cooldown, 0.25);
        assert_eq!(cfg.player_bullet_pool_size, PLAYER_BULLET_POOL_SIZE);
        assert_eq!(cfg.alien_spawn_secs, [ALIEN_SPAWN_MIN_SECS, ALIEN_SPAWN_MAX_SECS]);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = GameConfig::from_toml_str("asteroid_speed = [300.0, 100.0]\n").unwrap_err();
        assert!(matches!(err, GameError::UnsafeConstant { name: "asteroid_speed", .. }));
    }

    #[test]
    fn zero_counts_are_rejected() {
        for key in [
            "player_bullet_pool_size",
            "alien_bullet_pool_size",
            "shield_max_hits",
            "double_points_multiplier",
        ] {
            let err = GameConfig::from_toml_str(&format!("{key} = 0\n")).unwrap_err();
            assert!(
                matches!(err, GameError::UnsafeConstant { name, .. } if name == key),
                "{key} = 0 should be rejected"
            );
        }
    }

    #[test]
    fn zero_spare_lives_is_allowed() {
        let cfg = GameConfig::from_toml_str("max_spare_lives = 0\n").unwrap();
        assert_eq!(cfg.max_spare_lives, 0);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GameConfig::from_toml_str("fire_cooldown = \"fast\"").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse { .. }));
    }
}
