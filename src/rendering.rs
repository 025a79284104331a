//! In-play HUD: score, high score, elapsed clock and a status line.
//!
//! ## System Responsibilities
//!
//! | System                     | Schedule          | Purpose                          |
//! |----------------------------|-------------------|----------------------------------|
//! | `spawn_hud`                | OnEnter(Playing)  | Spawn the HUD text nodes         |
//! | `hud_score_display_system` | Update            | Refresh score/high score/status  |
//! | `hud_clock_display_system` | Update            | Refresh the `MM:SS` clock        |
//!
//! HUD nodes are [`SceneEntity`]s and go away with the rest of the scene.  On
//! game over the score and high-score lines are hidden (the clock stays).

use crate::combat::SceneEntity;
use crate::constants::HUD_FONT_SIZE;
use crate::session::{Session, TimedEffect};
use crate::storage::HighScore;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

#[derive(Component)]
pub struct HudScoreText;

#[derive(Component)]
pub struct HudHighScoreText;

#[derive(Component)]
pub struct HudClockText;

#[derive(Component)]
pub struct HudStatusText;

/// Score and high-score lines; hidden when the run ends.
#[derive(Component)]
pub struct HudLiveScore;

fn hud_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}

fn status_color() -> Color {
    Color::srgb(0.55, 0.75, 0.95)
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Whole elapsed seconds as zero-padded `MM:SS`.  Minutes keep counting past 59.
pub fn format_clock(elapsed_secs: f32) -> String {
    let total = elapsed_secs.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Spare lives and any running timed power-ups, e.g. `Lives: 1  x2  RAPID`.
pub fn status_line(session: &Session) -> String {
    let mut line = format!("Lives: {}", session.spare_lives);
    for (effect, tag) in [
        (TimedEffect::MultiShot, "MULTI"),
        (TimedEffect::DoublePoints, "x2"),
        (TimedEffect::RapidFire, "RAPID"),
    ] {
        if session.is_active(effect) {
            line.push_str("  ");
            line.push_str(tag);
        }
    }
    line
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

fn hud_text(parent: &mut ChildSpawnerCommands<'_>, text: String, color: Color, marker: impl Bundle) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(color),
        marker,
    ));
}

pub fn spawn_hud(commands: &mut Commands, high_score: u32) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
            SceneEntity,
        ))
        .with_children(|parent| {
            hud_text(
                parent,
                "Score: 0".to_string(),
                hud_color(),
                (HudScoreText, HudLiveScore),
            );
            hud_text(
                parent,
                format!("High Score: {high_score}"),
                hud_color(),
                (HudHighScoreText, HudLiveScore),
            );
            parent.spawn((
                Text::new(status_line(&Session::default())),
                TextFont {
                    font_size: HUD_FONT_SIZE * 0.6,
                    ..default()
                },
                TextColor(status_color()),
                HudStatusText,
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                top: Val::Px(10.0),
                ..default()
            },
            SceneEntity,
        ))
        .with_children(|parent| {
            hud_text(parent, format_clock(0.0), hud_color(), HudClockText);
        });
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Refresh the text lines whenever the session or high score changes.
pub fn hud_score_display_system(
    session: Res<Session>,
    high_score: Res<HighScore>,
    mut q_score: Query<&mut Text, (With<HudScoreText>, Without<HudHighScoreText>, Without<HudStatusText>)>,
    mut q_high: Query<&mut Text, (With<HudHighScoreText>, Without<HudScoreText>, Without<HudStatusText>)>,
    mut q_status: Query<&mut Text, (With<HudStatusText>, Without<HudScoreText>, Without<HudHighScoreText>)>,
) {
    if !session.is_changed() && !high_score.is_changed() {
        return;
    }
    for mut text in q_score.iter_mut() {
        *text = Text::new(format!("Score: {}", session.score));
    }
    for mut text in q_high.iter_mut() {
        *text = Text::new(format!("High Score: {}", high_score.0));
    }
    for mut text in q_status.iter_mut() {
        *text = Text::new(status_line(&session));
    }
}

pub fn hud_clock_display_system(session: Res<Session>, mut q: Query<&mut Text, With<HudClockText>>) {
    let clock = format_clock(session.elapsed_secs);
    for mut text in q.iter_mut() {
        if text.0 != clock {
            text.0 = clock.clone();
        }
    }
}

/// Hide the score and high-score lines.  Runs on game over.
pub fn hide_live_score_system(mut q: Query<&mut Visibility, With<HudLiveScore>>) {
    for mut visibility in q.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}
