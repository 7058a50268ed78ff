// SPDX-License-Identifier: MPL-2.0
//! Theme-aware widget styles.
//!
//! Every function reads the active token bundle through the theme store at
//! render time, so a global theme switch restyles the whole page on the
//! next redraw without any per-widget plumbing.

use crate::theme::store;
use crate::ui::design_tokens::{opacity, shadow};
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}

/// Muted copy color on the active background.
pub fn muted_text() -> Color {
    with_alpha(store::active().colors.foreground, opacity::TEXT_MUTED)
}

// ============================================================================
// Containers
// ============================================================================

/// A page section on the theme background.
pub fn section(_theme: &Theme) -> container::Style {
    let tokens = store::active();
    container::Style {
        background: Some(Background::Color(tokens.colors.background)),
        text_color: Some(tokens.colors.foreground),
        ..Default::default()
    }
}

/// A page section on the secondary (alternating) surface.
pub fn section_alt(_theme: &Theme) -> container::Style {
    let tokens = store::active();
    container::Style {
        background: Some(Background::Color(with_alpha(
            tokens.colors.secondary,
            opacity::OVERLAY_SUBTLE,
        ))),
        text_color: Some(tokens.colors.foreground),
        ..Default::default()
    }
}

/// An elevated card surface (menu items, team members, value cards).
pub fn card(_theme: &Theme) -> container::Style {
    let tokens = store::active();
    container::Style {
        background: Some(Background::Color(lighten(tokens.colors.background, 0.04))),
        text_color: Some(tokens.colors.foreground),
        border: Border {
            color: with_alpha(tokens.colors.foreground, 0.1),
            width: 1.0,
            radius: tokens.border_radius.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// The primary-colored banner surface (minimal hero, footer).
pub fn banner(_theme: &Theme) -> container::Style {
    let tokens = store::active();
    container::Style {
        background: Some(Background::Color(tokens.colors.primary)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Solid header surface shown once the page has scrolled.
pub fn header_solid(_theme: &Theme) -> container::Style {
    let tokens = store::active();
    container::Style {
        background: Some(Background::Color(with_alpha(
            tokens.colors.background,
            opacity::HEADER_SOLID,
        ))),
        text_color: Some(tokens.colors.foreground),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Transparent header surface over the hero.
pub fn header_transparent(_theme: &Theme) -> container::Style {
    container::Style {
        background: None,
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Dimming scrim behind the mobile drawer and the lightbox.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(Color::BLACK, opacity::SCRIM))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// Primary call-to-action button in the accent color.
pub fn cta(_theme: &Theme, status: button::Status) -> button::Style {
    let tokens = store::active();
    let background = match status {
        button::Status::Hovered => lighten(tokens.colors.accent, 0.08),
        _ => tokens.colors.accent,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: tokens.colors.foreground,
        border: Border {
            color: tokens.colors.accent,
            width: 1.0,
            radius: tokens.border_radius.into(),
        },
        shadow: match status {
            button::Status::Hovered => shadow::MD,
            _ => shadow::SM,
        },
        snap: true,
    }
}

/// Filled button in the primary color (form submits, newsletter).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let tokens = store::active();
    match status {
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(with_alpha(tokens.colors.primary, 0.4))),
            text_color: with_alpha(Color::WHITE, 0.7),
            border: Border {
                radius: tokens.border_radius.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(lighten(tokens.colors.primary, 0.08))),
            text_color: Color::WHITE,
            border: Border {
                radius: tokens.border_radius.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(tokens.colors.primary)),
            text_color: Color::WHITE,
            border: Border {
                radius: tokens.border_radius.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Borderless text button (nav links, accordion headers, footer links).
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let tokens = store::active();
    button::Style {
        background: match status {
            button::Status::Hovered => Some(Background::Color(with_alpha(
                tokens.colors.foreground,
                0.06,
            ))),
            _ => None,
        },
        text_color: match status {
            button::Status::Hovered => tokens.colors.primary,
            _ => tokens.colors.foreground,
        },
        border: Border {
            radius: tokens.border_radius.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Light text button for use over dark media or the scrim.
pub fn ghost_inverse(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: match status {
            button::Status::Hovered => {
                Some(Background::Color(with_alpha(Color::WHITE, 0.15)))
            }
            _ => None,
        },
        text_color: Color::WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Category tab / toggle button; `selected` picks the filled state.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let tokens = store::active();
        if selected {
            button::Style {
                background: Some(Background::Color(tokens.colors.primary)),
                text_color: Color::WHITE,
                border: Border {
                    radius: tokens.border_radius.into(),
                    ..Default::default()
                },
                shadow: shadow::SM,
                snap: true,
            }
        } else {
            button::Style {
                background: match status {
                    button::Status::Hovered => Some(Background::Color(with_alpha(
                        tokens.colors.secondary,
                        opacity::OVERLAY_SUBTLE,
                    ))),
                    _ => None,
                },
                text_color: tokens.colors.foreground,
                border: Border {
                    color: with_alpha(tokens.colors.foreground, 0.2),
                    width: 1.0,
                    radius: tokens.border_radius.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Themed form input; `valid` drives the border into the error color.
pub fn input(valid: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_theme: &Theme, status: text_input::Status| {
        let tokens = store::active();
        let border_color = if !valid {
            Color::from_rgb8(0xDC, 0x26, 0x26)
        } else if matches!(status, text_input::Status::Focused { .. }) {
            tokens.colors.primary
        } else {
            with_alpha(tokens.colors.foreground, 0.25)
        };
        text_input::Style {
            background: Background::Color(lighten(tokens.colors.background, 0.04)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: tokens.border_radius.into(),
            },
            icon: muted_text(),
            placeholder: muted_text(),
            value: tokens.colors.foreground,
            selection: with_alpha(tokens.colors.primary, 0.3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_clamps_at_white() {
        let lightened = lighten(Color::WHITE, 0.5);
        assert_eq!(lightened, Color::WHITE);
    }

    #[test]
    fn tab_selected_state_fills_background() {
        let theme = Theme::Light;
        let selected = tab(true)(&theme, button::Status::Active);
        let unselected = tab(false)(&theme, button::Status::Active);
        assert!(selected.background.is_some());
        assert_ne!(selected.background, unselected.background);
    }

    #[test]
    fn invalid_input_gets_error_border() {
        let theme = Theme::Light;
        let ok = input(true)(&theme, text_input::Status::Active);
        let bad = input(false)(&theme, text_input::Status::Active);
        assert_ne!(ok.border.color, bad.border.color);
    }
}
