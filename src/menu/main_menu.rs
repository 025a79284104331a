use super::*;

/// Whether this build can close its own window.  Browsers own the page, so
/// the wasm build shows Quit disabled.
pub const QUIT_AVAILABLE: bool = !cfg!(target_arch = "wasm32");

/// What pressing a main-menu button leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Enter(GameState),
    ToggleInstructions,
    Exit,
    /// The button is shown but does nothing on this platform.
    Unavailable,
}

pub fn menu_outcome(action: MenuAction, quit_available: bool) -> MenuOutcome {
    match action {
        MenuAction::Start => MenuOutcome::Enter(GameState::Playing),
        MenuAction::Instructions => MenuOutcome::ToggleInstructions,
        MenuAction::Quit if quit_available => MenuOutcome::Exit,
        MenuAction::Quit => MenuOutcome::Unavailable,
    }
}

pub const INSTRUCTIONS: &str = "Arrow keys: move\n\
Space: shoot\n\
\n\
Shoot aliens (5) and asteroids (1).\n\
One hit ends the run unless you have a spare life.\n\
Grab power-ups: shield, kill-all, extra life,\n\
multi-shot, double points, rapid fire.";

/// Spawn the full-screen main-menu overlay.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │             SPACE DEFENDER                  │
/// │     Defend the sector. Don't get hit.       │
/// │                                             │
/// │            [ START GAME ]                   │
/// │           [ INSTRUCTIONS ]                  │
/// │              [ QUIT ]                       │
/// │                                             │
/// │      (instructions panel, hidden)           │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            MainMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("SPACE DEFENDER"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 10.0);

            root.spawn((
                Text::new("Defend the sector. Don't get hit."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 40.0);

            menu_button(root, "START GAME", start_palette(), MenuButton(MenuAction::Start));
            spacer(root, 14.0);
            menu_button(
                root,
                "INSTRUCTIONS",
                info_palette(),
                MenuButton(MenuAction::Instructions),
            );
            spacer(root, 14.0);
            if QUIT_AVAILABLE {
                menu_button(root, "QUIT", quit_palette(), MenuButton(MenuAction::Quit));
            } else {
                menu_button(
                    root,
                    "QUIT (UNAVAILABLE)",
                    ButtonPalette {
                        text: disabled_text(),
                        ..quit_palette()
                    },
                    MenuButton(MenuAction::Quit),
                );
            }

            spacer(root, 24.0);

            root.spawn((
                Text::new(INSTRUCTIONS),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(subtitle_color()),
                Visibility::Hidden,
                InstructionsPanel,
            ));

            spacer(root, 24.0);

            root.spawn((
                Text::new("Press Enter to start"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

pub(super) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

fn palette_for(action: MenuAction) -> ButtonPalette {
    match action {
        MenuAction::Start => start_palette(),
        MenuAction::Instructions => info_palette(),
        MenuAction::Quit if QUIT_AVAILABLE => quit_palette(),
        MenuAction::Quit => ButtonPalette {
            text: disabled_text(),
            ..quit_palette()
        },
    }
}

/// Handle Start / Instructions / Quit clicks; Enter also starts.
#[allow(clippy::type_complexity)]
pub(super) fn menu_button_system(
    buttons: Query<(&Interaction, &Children, &MenuButton), Changed<Interaction>>,
    mut btn_text: Query<&mut TextColor>,
    mut panel: Query<&mut Visibility, With<InstructionsPanel>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, children, button) in buttons.iter() {
        highlight_label(*interaction, children, palette_for(button.0).text, &mut btn_text);
        if *interaction != Interaction::Pressed {
            continue;
        }

        match menu_outcome(button.0, QUIT_AVAILABLE) {
            MenuOutcome::Enter(state) => next_state.set(state),
            MenuOutcome::ToggleInstructions => {
                for mut visibility in panel.iter_mut() {
                    visibility.toggle_visible_hidden();
                }
            }
            MenuOutcome::Exit => {
                info!("Quit requested from main menu");
                exit.write(AppExit::Success);
            }
            MenuOutcome::Unavailable => debug!("Quit is unavailable on this platform"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_enters_play() {
        assert_eq!(
            menu_outcome(MenuAction::Start, true),
            MenuOutcome::Enter(GameState::Playing)
        );
    }

    #[test]
    fn quit_depends_on_platform_support() {
        assert_eq!(menu_outcome(MenuAction::Quit, true), MenuOutcome::Exit);
        assert_eq!(menu_outcome(MenuAction::Quit, false), MenuOutcome::Unavailable);
    }

    #[test]
    fn instructions_toggle() {
        assert_eq!(
            menu_outcome(MenuAction::Instructions, true),
            MenuOutcome::ToggleInstructions
        );
    }
}
