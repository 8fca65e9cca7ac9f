// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::scheme;
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind the particle layer.
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).surface_page)),
        ..Default::default()
    }
}

/// Raised card (projects, skills, timeline, certifications).
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Placeholder where a project cover image would go.
pub fn cover(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_muted)),
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded track the navigation pill slides in.
pub fn nav_track(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..scheme(theme).surface_muted
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sliding highlight behind the active tab.
pub fn nav_pill(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha.clamp(0.0, 1.0),
            ..scheme(theme).pill_background
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Static tag badge.
pub fn badge(background: Color, text_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Neutral badge used for experience tags.
pub fn neutral_badge(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.pill_background)),
        text_color: Some(colors.pill_text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dot on the experience timeline.
pub fn timeline_dot(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).brand_primary)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dismissible warning banner.
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_background_differs_between_themes() {
        assert_ne!(page(&Theme::Light).background, page(&Theme::Dark).background);
    }

    #[test]
    fn pill_alpha_is_clamped() {
        let style = nav_pill(2.0)(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 1.0),
            other => panic!("expected color background, got {:?}", other),
        }
    }
}
