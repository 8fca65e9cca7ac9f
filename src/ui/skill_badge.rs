// SPDX-License-Identifier: MPL-2.0
//! Colored skill tags, shared by project cards, the detail page and the
//! gallery filter chips.

use crate::domain::skills::SkillCategory;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text};
use iced::{Color, Element};

/// Background and text color for a skill tag.
#[must_use]
pub fn colors(skill: &str) -> (Color, Color) {
    match SkillCategory::of(skill) {
        SkillCategory::Language => (palette::RED_600, palette::WHITE),
        SkillCategory::Database => (palette::INDIGO_600, palette::WHITE),
        SkillCategory::DataTooling => (palette::GREEN_600, palette::WHITE),
        SkillCategory::MachineLearning => (palette::YELLOW_600, palette::WHITE),
        SkillCategory::Frontend => (palette::TEAL_600, palette::WHITE),
        SkillCategory::Quant => (palette::PINK_600, palette::WHITE),
        SkillCategory::Other => (palette::GRAY_300, palette::BLACK),
    }
}

/// Static badge.
pub fn badge<'a, Message: 'a>(skill: &str) -> Element<'a, Message> {
    let (background, foreground) = colors(skill);
    container(text(skill.to_string()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(background, foreground))
        .into()
}

/// Toggleable filter chip.
pub fn chip<'a, Message: Clone + 'a>(
    skill: &str,
    active: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let (background, foreground) = colors(skill);
    button(text(skill.to_string()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .on_press(on_press)
        .style(styles::button::chip(background, foreground, active))
        .into()
}
