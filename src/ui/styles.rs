// SPDX-License-Identifier: MPL-2.0
//! Widget styles for the rail demo.

use crate::rail::{CardPose, TokenKind};
use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Multiplies a color's alpha.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Scales a color's RGB channels, keeping alpha.
#[must_use]
pub fn dim(color: Color, brightness: f32) -> Color {
    Color {
        r: color.r * brightness,
        g: color.g * brightness,
        b: color.b * brightness,
        a: color.a,
    }
}

/// Applies a card pose's opacity and brightness to a color.
#[must_use]
pub fn posed(color: Color, pose: &CardPose) -> Color {
    fade(dim(color, pose.brightness), pose.opacity)
}

#[must_use]
pub fn token_color(kind: TokenKind) -> Color {
    match kind {
        TokenKind::Base => palette::TOKEN_BASE,
        TokenKind::Neutron => palette::TOKEN_NEUTRON,
        TokenKind::Proton => palette::TOKEN_PROTON,
    }
}

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::NEUTRAL_200),
        ..Default::default()
    }
}

/// Card surface. The centre card gets an amber ring.
pub fn card(pose: CardPose) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let ring = if pose.is_center() {
            Border {
                color: fade(palette::AMBER_500, opacity::RING),
                width: 2.0,
                radius: radius::LG.into(),
            }
        } else {
            Border {
                color: posed(fade(palette::WHITE, opacity::BORDER), &pose),
                width: 1.0,
                radius: radius::LG.into(),
            }
        };

        container::Style {
            background: Some(Background::Color(posed(
                fade(palette::NEUTRAL_900, opacity::SURFACE),
                &pose,
            ))),
            text_color: Some(posed(palette::NEUTRAL_200, &pose)),
            border: ring,
            ..Default::default()
        }
    }
}

pub fn token(kind: TokenKind, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let color = token_color(kind);
        container::Style {
            background: Some(Background::Color(fade(color, opacity::GLOW * alpha))),
            text_color: Some(fade(color, alpha)),
            border: Border {
                color: fade(color, alpha),
                width: 2.0,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Round icon buttons of the control pill.
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text) = match status {
        button::Status::Hovered => (fade(palette::AMBER_500, 0.2), palette::AMBER_300),
        button::Status::Disabled => (Color::TRANSPARENT, fade(palette::NEUTRAL_400, 0.3)),
        _ => (Color::TRANSPARENT, palette::NEUTRAL_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: text,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Solid amber pill used for "Explore".
pub fn accent(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::AMBER_400,
        _ => palette::AMBER_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BLACK,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Outlined pill for toggles; `active` highlights the current setting.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let accent = active || matches!(status, button::Status::Hovered);
        button::Style {
            background: Some(Background::Color(fade(palette::WHITE, 0.02))),
            text_color: if accent {
                palette::AMBER_400
            } else {
                palette::AMBER_100
            },
            border: Border {
                color: if accent {
                    fade(palette::AMBER_500, 0.5)
                } else {
                    fade(palette::WHITE, 0.1)
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            ..button::Style::default()
        }
    }
}

pub fn pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(palette::WHITE, 0.05))),
        border: Border {
            color: fade(palette::WHITE, 0.1),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(palette::AMBER_100, 0.05))),
        text_color: Some(palette::NEUTRAL_200),
        border: Border {
            color: fade(palette::AMBER_100, 0.2),
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn posed_color_applies_brightness_then_opacity() {
        let pose = CardPose::for_offset(1);
        let color = posed(Color::from_rgb(1.0, 0.5, 0.0), &pose);
        assert_abs_diff_eq!(color.r, 0.45);
        assert_abs_diff_eq!(color.g, 0.225);
        assert_abs_diff_eq!(color.a, 0.5);
    }

    #[test]
    fn centre_pose_leaves_color_untouched() {
        let pose = CardPose::for_offset(0);
        assert_eq!(posed(palette::AMBER_500, &pose), palette::AMBER_500);
    }
}
