//! Per-run play state.
//!
//! [`Session`] owns everything that lives exactly as long as one run of the
//! game: score, spare lives, the fire cooldown, timed power-up modifiers and
//! the game-over flag.  It is reset to default when a new run starts.  The
//! high score outlives sessions and lives in [`crate::storage::HighScore`].

use std::time::Duration;

use bevy::prelude::*;

use crate::config::GameConfig;

/// Power-ups that modify play for a limited time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimedEffect {
    MultiShot,
    DoublePoints,
    RapidFire,
}

/// Remaining duration of each timed effect; `None` means inactive.
#[derive(Debug, Clone, Default)]
pub struct Modifiers {
    pub multi_shot: Option<Timer>,
    pub double_points: Option<Timer>,
    pub rapid_fire: Option<Timer>,
}

impl Modifiers {
    fn slot_mut(&mut self, effect: TimedEffect) -> &mut Option<Timer> {
        match effect {
            TimedEffect::MultiShot => &mut self.multi_shot,
            TimedEffect::DoublePoints => &mut self.double_points,
            TimedEffect::RapidFire => &mut self.rapid_fire,
        }
    }

    fn slot(&self, effect: TimedEffect) -> &Option<Timer> {
        match effect {
            TimedEffect::MultiShot => &self.multi_shot,
            TimedEffect::DoublePoints => &self.double_points,
            TimedEffect::RapidFire => &self.rapid_fire,
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Session {
    pub score: u32,
    /// Lives beyond the current one; each absorbs one otherwise fatal hit.
    pub spare_lives: u32,
    /// Set on the fatal hit; no gameplay system mutates anything afterwards.
    pub game_over: bool,
    /// Seconds since the run started, shown as the HUD clock.
    pub elapsed_secs: f32,
    /// Shots fired so far; single shots alternate barrels on its parity.
    pub shots_fired: u32,
    /// Seconds until the next shot is allowed.
    pub fire_cooldown: f32,
    pub modifiers: Modifiers,
}

impl Session {
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.game_over
    }

    /// Flag the run as over.  Returns `true` only for the call that ended it.
    pub fn end(&mut self) -> bool {
        let first = !self.game_over;
        self.game_over = true;
        first
    }

    /// Add `base_points` scaled by the active multiplier.  Returns the points
    /// actually added (zero once the run is over).
    pub fn award(&mut self, base_points: u32, config: &GameConfig) -> u32 {
        if self.game_over {
            return 0;
        }
        let gained = base_points.saturating_mul(self.score_multiplier(config));
        self.score = self.score.saturating_add(gained);
        gained
    }

    pub fn score_multiplier(&self, config: &GameConfig) -> u32 {
        if self.is_active(TimedEffect::DoublePoints) {
            config.double_points_multiplier.max(1)
        } else {
            1
        }
    }

    /// Consume a spare life if one is left.
    pub fn spend_spare_life(&mut self) -> bool {
        if self.spare_lives == 0 {
            return false;
        }
        self.spare_lives -= 1;
        true
    }

    /// Add one spare life, capped at `max`.
    pub fn grant_spare_life(&mut self, max: u32) {
        self.spare_lives = (self.spare_lives + 1).min(max);
    }

    /// Start (or restart) a timed effect.
    pub fn activate(&mut self, effect: TimedEffect, duration_secs: f32) {
        *self.modifiers.slot_mut(effect) = Some(Timer::from_seconds(duration_secs, TimerMode::Once));
    }

    pub fn is_active(&self, effect: TimedEffect) -> bool {
        self.modifiers.slot(effect).is_some()
    }

    /// Advance every active effect, dropping the ones that ran out.
    pub fn tick_modifiers(&mut self, delta: Duration) {
        for effect in [
            TimedEffect::MultiShot,
            TimedEffect::DoublePoints,
            TimedEffect::RapidFire,
        ] {
            let slot = self.modifiers.slot_mut(effect);
            let expired = slot.as_mut().is_some_and(|timer| {
                timer.tick(delta);
                timer.is_finished()
            });
            if expired {
                *slot = None;
            }
        }
    }

    /// Cooldown applied after each shot.
    pub fn shot_interval(&self, config: &GameConfig) -> f32 {
        if self.is_active(TimedEffect::RapidFire) {
            config.rapid_fire_cooldown
        } else {
            config.fire_cooldown
        }
    }
}

/// Run condition: gameplay systems only run while the session is live.
pub fn session_running(session: Res<Session>) -> bool {
    session.is_running()
}

pub fn tick_session_clock_system(time: Res<Time>, mut session: ResMut<Session>) {
    session.elapsed_secs += time.delta_secs();
}

pub fn tick_modifiers_system(time: Res<Time>, mut session: ResMut<Session>) {
    session.tick_modifiers(time.delta());
}
