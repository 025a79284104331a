//! Game-specific error types.
//!
//! Storage and configuration code propagates failures through [`GameError`];
//! systems sitting on top of them log the error and fall back to defaults
//! instead of panicking.
//!
//! ## Usage
//!
//! ```rust
//! use space_defender::error::{GameError, GameResult};
//!
//! fn parse_score(raw: &str) -> GameResult<u32> {
//!     raw.trim().parse().map_err(|_| GameError::InvalidStoredValue {
//!         key: "highScore".to_string(),
//!         raw: raw.to_string(),
//!     })
//! }
//! ```

use std::fmt;

/// Top-level error enum for Space Defender.
#[derive(Debug)]
pub enum GameError {
    /// The key-value store could not be read or written.
    StorageIo {
        /// Path of the backing file.
        path: String,
        source: std::io::Error,
    },

    /// The backing file exists but is not a valid key-value table.
    StorageFormat {
        path: String,
        /// Human-readable parse/serialise failure.
        reason: String,
    },

    /// A stored value could not be decoded into the expected type.
    InvalidStoredValue { key: String, raw: String },

    /// `assets/game.toml` exists but failed to parse.
    ConfigParse { path: String, reason: String },

    /// A tuning value is outside its safe operating range.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::StorageIo { path, source } => {
                write!(f, "storage i/o failed for '{}': {}", path, source)
            }
            GameError::StorageFormat { path, reason } => {
                write!(f, "storage file '{}' is malformed: {}", path, reason)
            }
            GameError::InvalidStoredValue { key, raw } => {
                write!(f, "stored value for '{}' is not a valid score: {:?}", key, raw)
            }
            GameError::ConfigParse { path, reason } => {
                write!(f, "failed to parse config '{}': {}", path, reason)
            }
            GameError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::StorageIo { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `0 < min <= max`.
///
/// Used for every randomised interval and speed range in the config.
pub fn validate_range(name: &'static str, min: f32, max: f32) -> GameResult<()> {
    validate_positive(name, min)?;
    if max < min || !max.is_finite() {
        return Err(GameError::UnsafeConstant {
            name,
            value: max,
            safe_range: "[min, ∞)",
        });
    }
    Ok(())
}

/// Returns an error unless an integer setting is at least one.
///
/// Pool capacities, the shield threshold and the score multiplier use it.
pub fn validate_nonzero(name: &'static str, value: u64) -> GameResult<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name,
            value: value as f32,
            safe_range: "[1, ∞)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(validate_positive("x", 0.0).is_err());
        assert!(validate_positive("x", f32::NAN).is_err());
        assert!(validate_positive("x", 0.1).is_ok());
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(validate_range("spawn", 3.0, 1.0).is_err());
        assert!(validate_range("spawn", 1.0, 1.0).is_ok());
    }

    #[test]
    fn nonzero_rejects_zero_counts() {
        assert!(validate_nonzero("shield_max_hits", 0).is_err());
        assert!(validate_nonzero("shield_max_hits", 1).is_ok());
    }

    #[test]
    fn display_names_the_constant() {
        let err = validate_positive("fire_cooldown", -1.0).unwrap_err();
        assert!(err.to_string().contains("fire_cooldown"));
    }
}
