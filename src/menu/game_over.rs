use super::*;

/// Banner lines for the game-over overlay.
pub fn summary_lines(outcome: HighScoreOutcome) -> Vec<String> {
    match outcome {
        HighScoreOutcome::NewHighScore { score } => vec![format!("New High Score: {score}")],
        HighScoreOutcome::Standing { high_score, score } => vec![
            format!("High Score: {high_score}"),
            format!("Score: {score}"),
        ],
    }
}

/// Stop the world where it is: every velocity zeroed, no more spawns, the
/// ship tinted red.
pub(super) fn freeze_world_system(
    mut timers: ResMut<SpawnTimers>,
    mut q_bodies: Query<&mut Velocity, With<SceneEntity>>,
    mut q_ship: Query<&mut Sprite, With<Player>>,
) {
    timers.cancel();
    for mut velocity in q_bodies.iter_mut() {
        *velocity = Velocity::zero();
    }
    for mut sprite in q_ship.iter_mut() {
        sprite.color = Color::srgb(1.0, 0.0, 0.0);
    }
}

/// Compare the run with the high score, exactly once per game over.
pub(super) fn commit_score_system(
    mut commands: Commands,
    session: Res<Session>,
    mut high_score: ResMut<HighScore>,
    mut store: ResMut<HighScoreStore>,
) {
    let outcome = commit_high_score(&mut high_score, session.score, &mut *store.0);
    info!(
        "Run over: score {} in {:.1}s ({:?})",
        session.score, session.elapsed_secs, outcome
    );
    commands.insert_resource(GameOverSummary(outcome));
}

/// Spawn the summary banners and the Play Again / Menu buttons.
pub(super) fn setup_game_over(mut commands: Commands, summary: Res<GameOverSummary>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            ZIndex(300),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.06, 0.02, 0.02, 0.85)),
                    BorderColor::all(Color::srgb(0.55, 0.10, 0.10)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("GAME OVER"),
                        TextFont {
                            font_size: 46.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.22, 0.22)),
                    ));

                    for line in summary_lines(summary.0) {
                        card.spawn((
                            Text::new(line),
                            TextFont {
                                font_size: 28.0,
                                ..default()
                            },
                            TextColor(title_color()),
                        ));
                    }

                    spacer(card, 8.0);

                    menu_button(
                        card,
                        "PLAY AGAIN",
                        start_palette(),
                        GameOverButton(GameOverAction::PlayAgain),
                    );
                    menu_button(
                        card,
                        "MENU",
                        info_palette(),
                        GameOverButton(GameOverAction::Menu),
                    );

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new("Enter: play again    Esc: menu"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        });
}

pub(super) fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<GameOverSummary>();
}

pub fn game_over_target(action: GameOverAction) -> GameState {
    match action {
        GameOverAction::PlayAgain => GameState::Playing,
        GameOverAction::Menu => GameState::MainMenu,
    }
}

/// Handle Play Again / Menu in the game-over overlay (Enter / Escape too).
pub(super) fn game_over_button_system(
    buttons: Query<(&Interaction, &Children, &GameOverButton), Changed<Interaction>>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let mut chosen = if keys.just_pressed(KeyCode::Enter) {
        Some(GameOverAction::PlayAgain)
    } else if keys.just_pressed(KeyCode::Escape) {
        Some(GameOverAction::Menu)
    } else {
        None
    };

    for (interaction, children, button) in buttons.iter() {
        let base = match button.0 {
            GameOverAction::PlayAgain => start_text(),
            GameOverAction::Menu => info_text(),
        };
        highlight_label(*interaction, children, base, &mut btn_text);
        if *interaction == Interaction::Pressed {
            chosen.get_or_insert(button.0);
        }
    }

    if let Some(action) = chosen {
        next_state.set(game_over_target(action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_high_score_is_a_single_banner() {
        assert_eq!(
            summary_lines(HighScoreOutcome::NewHighScore { score: 150 }),
            vec!["New High Score: 150".to_string()]
        );
    }

    #[test]
    fn standing_high_score_shows_both_numbers() {
        assert_eq!(
            summary_lines(HighScoreOutcome::Standing {
                high_score: 100,
                score: 80
            }),
            vec!["High Score: 100".to_string(), "Score: 80".to_string()]
        );
    }

    #[test]
    fn buttons_lead_back_into_the_loop() {
        assert_eq!(game_over_target(GameOverAction::PlayAgain), GameState::Playing);
        assert_eq!(game_over_target(GameOverAction::Menu), GameState::MainMenu);
    }
}
