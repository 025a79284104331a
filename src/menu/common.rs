use bevy::prelude::*;

pub(super) fn start_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn start_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn info_bg() -> Color {
    Color::srgb(0.10, 0.18, 0.36)
}
pub(super) fn info_border() -> Color {
    Color::srgb(0.22, 0.44, 0.78)
}
pub(super) fn info_text() -> Color {
    Color::srgb(0.65, 0.80, 1.0)
}
pub(super) fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(super) fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(super) fn quit_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
pub(super) fn disabled_text() -> Color {
    Color::srgb(0.40, 0.40, 0.45)
}
pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}

/// Background, border and label colours of one button.
#[derive(Clone, Copy)]
pub(super) struct ButtonPalette {
    pub bg: Color,
    pub border: Color,
    pub text: Color,
}

pub(super) fn start_palette() -> ButtonPalette {
    ButtonPalette {
        bg: start_bg(),
        border: start_border(),
        text: start_text(),
    }
}

pub(super) fn info_palette() -> ButtonPalette {
    ButtonPalette {
        bg: info_bg(),
        border: info_border(),
        text: info_text(),
    }
}

pub(super) fn quit_palette() -> ButtonPalette {
    ButtonPalette {
        bg: quit_bg(),
        border: quit_border(),
        text: quit_text(),
    }
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

/// A 220×50 bordered button with a centred label.
pub(super) fn menu_button(
    parent: &mut ChildSpawnerCommands<'_>,
    label: &str,
    palette: ButtonPalette,
    marker: impl Bundle,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(220.0),
                height: Val::Px(50.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(palette.bg),
            BorderColor::all(palette.border),
            marker,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(palette.text),
            ));
        });
}

/// Brighten a button label on hover, restore it otherwise.
pub(super) fn highlight_label(
    interaction: Interaction,
    children: &Children,
    base: Color,
    text_colors: &mut Query<&mut TextColor>,
) {
    let color = match interaction {
        Interaction::Hovered | Interaction::Pressed => Color::WHITE,
        Interaction::None => base,
    };
    for child in children.iter() {
        if let Ok(mut text_color) = text_colors.get_mut(child) {
            *text_color = TextColor(color);
        }
    }
}
