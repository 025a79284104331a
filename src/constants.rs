//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig::default`] mirrors these values; override any of
//! them at runtime through `assets/game.toml`.
//!
//! ## Coordinate system
//!
//! The playfield is centred on the world origin: x runs from `-HALF_WIDTH` (left
//! edge) to `+HALF_WIDTH`, y from `-HALF_HEIGHT` (bottom) to `+HALF_HEIGHT` (top).
//! "Down the screen" is therefore negative y.

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Playfield width in world units (one unit = one window pixel).
pub const PLAYFIELD_WIDTH: f32 = 800.0;

/// Playfield height in world units.
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

pub const HALF_WIDTH: f32 = PLAYFIELD_WIDTH / 2.0;
pub const HALF_HEIGHT: f32 = PLAYFIELD_HEIGHT / 2.0;

// ── Player ────────────────────────────────────────────────────────────────────

/// Spawn height of the player ship, 50 units above the bottom edge.
pub const PLAYER_START_Y: f32 = -HALF_HEIGHT + 50.0;

/// Movement speed on either axis while an arrow key is held (u/s).
pub const PLAYER_SPEED: f32 = 200.0;

/// Player hitbox; deliberately smaller than the visual sprite.
pub const PLAYER_HITBOX_WIDTH: f32 = 60.0;
pub const PLAYER_HITBOX_HEIGHT: f32 = 50.0;

/// Spare lives can never exceed this, however many extra-life pickups are taken.
pub const MAX_SPARE_LIVES: u32 = 3;

// ── Player weapons ────────────────────────────────────────────────────────────

/// Maximum number of player bullets alive at once.
pub const PLAYER_BULLET_POOL_SIZE: usize = 10;

/// Upward bullet speed (u/s).
pub const PLAYER_BULLET_SPEED: f32 = 300.0;

/// Seconds between shots while Space is held.
pub const FIRE_COOLDOWN: f32 = 0.4;

/// Seconds between shots while the rapid-fire power-up is active.
pub const RAPID_FIRE_COOLDOWN: f32 = 0.15;

/// Horizontal offset of the left/right gun barrels from the ship centre.
/// Single shots alternate between the two barrels.
pub const BULLET_SIDE_OFFSET: f32 = 25.0;

/// Bullets leave the barrel this far ahead of the ship centre.
pub const BULLET_FORWARD_OFFSET: f32 = 20.0;

/// Bullet hitbox (both player and alien bullets).
pub const BULLET_HITBOX_WIDTH: f32 = 10.0;
pub const BULLET_HITBOX_HEIGHT: f32 = 40.0;

// ── Aliens ────────────────────────────────────────────────────────────────────

/// Seconds between alien spawns; re-rolled uniformly after every spawn.
pub const ALIEN_SPAWN_MIN_SECS: f32 = 1.0;
pub const ALIEN_SPAWN_MAX_SECS: f32 = 3.0;

/// Aliens enter this far below the top edge.
pub const ALIEN_SPAWN_TOP_MARGIN: f32 = 50.0;

/// Initial horizontal speed range (direction is a coin flip).
pub const ALIEN_MIN_SPEED: f32 = 50.0;
pub const ALIEN_MAX_SPEED: f32 = 200.0;

/// Speed range picked after bouncing off a screen edge.
pub const ALIEN_BOUNCE_MIN_SPEED: f32 = 50.0;
pub const ALIEN_BOUNCE_MAX_SPEED: f32 = 100.0;

/// Half the alien width; an alien bounces once its edge touches the screen edge.
pub const ALIEN_HALF_WIDTH: f32 = 25.0;
pub const ALIEN_HITBOX_HEIGHT: f32 = 40.0;

/// Seconds between shots of a single alien; re-rolled after every shot.
pub const ALIEN_SHOOT_MIN_SECS: f32 = 1.0;
pub const ALIEN_SHOOT_MAX_SECS: f32 = 3.0;

/// Maximum number of alien bullets alive at once (shared by all aliens).
pub const ALIEN_BULLET_POOL_SIZE: usize = 50;

/// Downward alien bullet speed (u/s).
pub const ALIEN_BULLET_SPEED: f32 = 300.0;

/// Points for shooting an alien (before the double-points multiplier).
pub const ALIEN_KILL_POINTS: u32 = 5;

// ── Asteroids ─────────────────────────────────────────────────────────────────

pub const ASTEROID_SPAWN_MIN_SECS: f32 = 0.5;
pub const ASTEROID_SPAWN_MAX_SECS: f32 = 2.0;

/// Asteroids spawn this far above the top edge and fall into view.
pub const ASTEROID_SPAWN_ABOVE: f32 = 20.0;

/// Downward speed range (u/s).
pub const ASTEROID_MIN_SPEED: f32 = 100.0;
pub const ASTEROID_MAX_SPEED: f32 = 300.0;

pub const ASTEROID_HITBOX_SIZE: f32 = 60.0;

/// Points for shooting an asteroid (before the double-points multiplier).
pub const ASTEROID_KILL_POINTS: u32 = 1;

// ── Power-ups ─────────────────────────────────────────────────────────────────

pub const POWER_UP_SPAWN_MIN_SECS: f32 = 15.0;
pub const POWER_UP_SPAWN_MAX_SECS: f32 = 30.0;

/// Side length of a power-up pickup sprite and sensor.
pub const POWER_UP_SIZE: f32 = 32.0;

/// Duration of the timed power-ups (multi-shot, double points, rapid fire).
pub const POWER_UP_DURATION_SECS: f32 = 10.0;

/// Score multiplier while double points is active.
pub const DOUBLE_POINTS_MULTIPLIER: u32 = 2;

// ── Shield ────────────────────────────────────────────────────────────────────

/// Hazards absorbed before the shield breaks.
pub const SHIELD_MAX_HITS: u32 = 10;

/// Shield lifetime regardless of hits taken.
pub const SHIELD_LIFETIME_SECS: f32 = 10.0;

/// Radius of the circular shield sensor.
pub const SHIELD_RADIUS: f32 = 48.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

pub const HUD_FONT_SIZE: f32 = 32.0;

// ── Persistence ───────────────────────────────────────────────────────────────

/// Key under which the high score is stored.
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Location of the native key-value store file.
pub const STORAGE_PATH: &str = "saves/storage.toml";
