// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::scheme;
use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action (brand colored).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_500,
        _ => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Secondary action on cards (muted surface).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        _ => opacity::OPAQUE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..colors.surface_muted
        })),
        text_color: colors.text_primary,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only link.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let text_color = match status {
        button::Status::Hovered => colors.text_primary,
        _ => colors.brand_primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation tab label drawn over the sliding pill.
///
/// The pill itself is a separate layer; the tab only switches its text color
/// so the label stays readable on top of it.
pub fn nav_tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let text_color = match (active, status) {
            (true, _) => colors.pill_text,
            (false, button::Status::Hovered) => colors.brand_primary,
            (false, _) => colors.text_primary,
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Header logo, faded to `alpha`.
pub fn logo(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status: button::Status| {
        let colors = scheme(theme);
        button::Style {
            background: None,
            text_color: Color {
                a: alpha.clamp(0.0, 1.0),
                ..colors.text_primary
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Skill filter chip in its category color; active chips get a ring.
pub fn chip(
    background: Color,
    text_color: Color,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            _ => opacity::OPAQUE,
        };
        let ring = if active {
            Border {
                color: palette::PRIMARY_300,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            }
        } else {
            Border {
                radius: radius::FULL.into(),
                ..Default::default()
            }
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..background
            })),
            text_color,
            border: ring,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
