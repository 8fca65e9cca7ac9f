// SPDX-License-Identifier: MPL-2.0
//! Project card shared by the About page and the gallery.

use crate::domain::catalog::ProjectRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::skill_badge;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the detail page of the project with this slug.
    OpenProject(String),
    /// Follow a link target (in-app path or external URL).
    OpenLink(String),
}

pub fn view<'a>(i18n: &I18n, project: &ProjectRecord) -> Element<'a, Message> {
    let cover = container(
        text(project.image.clone())
            .size(typography::CAPTION)
            .center()
            .width(Length::Fill),
    )
    .center_y(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
    .width(Length::Fill)
    .style(styles::container::cover);

    let added = i18n.tr_with_args(
        "project-added",
        &[(
            "date",
            FluentValue::from(project.date_added.date().format("%Y-%m-%d").to_string()),
        )],
    );

    let badges = project
        .skills
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, skill| {
            row.push(skill_badge::badge(skill))
        })
        .wrap();

    let mut actions = Row::new().spacing(spacing::XS).push(
        button(text(i18n.tr("project-view-details")).size(typography::BODY))
            .on_press(Message::OpenProject(project.slug.clone()))
            .style(styles::button::primary),
    );
    if let Some(repository) = &project.repository {
        actions = actions.push(
            button(text(i18n.tr("project-repository")).size(typography::BODY))
                .on_press(Message::OpenLink(repository.clone()))
                .style(styles::button::secondary),
        );
    }
    if let Some(action) = &project.primary_action {
        actions = actions.push(
            button(text(action.label.clone()).size(typography::BODY))
                .on_press(Message::OpenLink(action.target.clone()))
                .style(styles::button::secondary),
        );
    }

    let body = Column::new()
        .spacing(spacing::XS)
        .push(text(project.title.clone()).size(typography::TITLE_SM))
        .push(text(added).size(typography::CAPTION))
        .push(text(project.description.clone()).size(typography::BODY))
        .push(badges)
        .push(actions.wrap());

    container(Column::new().spacing(spacing::SM).push(cover).push(body))
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

/// Lays cards out in rows that wrap with the window width.
pub fn grid<'a>(i18n: &I18n, projects: &[&ProjectRecord]) -> Element<'a, Message> {
    projects
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, project| {
            row.push(view(i18n, project))
        })
        .wrap()
        .vertical_spacing(spacing::LG)
        .into()
}
