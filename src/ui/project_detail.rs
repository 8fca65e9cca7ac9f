// SPDX-License-Identifier: MPL-2.0
//! Project detail page with the rendered write-up.

use crate::content::writeups::Writeup;
use crate::domain::catalog::ProjectRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::skill_badge;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, markdown, text, Column, Row};
use iced::{Element, Theme};

/// Detail page state: which project and its parsed write-up, if any.
#[derive(Debug, Clone)]
pub struct State {
    slug: String,
    writeup: Option<Writeup>,
}

impl State {
    #[must_use]
    pub fn new(slug: String, writeup: Option<Writeup>) -> Self {
        Self { slug, writeup }
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn has_writeup(&self) -> bool {
        self.writeup.is_some()
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub project: &'a ProjectRecord,
    /// Drives code block and link colors in the write-up.
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    LinkClicked(markdown::Uri),
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(String),
    OpenLink(String),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::Navigate("/projects".to_string()),
        Message::LinkClicked(uri) => Event::OpenLink(uri.to_string()),
        Message::OpenLink(target) => Event::OpenLink(target),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let project = ctx.project;
    let i18n = ctx.i18n;

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

    let mut links = Row::new().spacing(spacing::XS);
    if let Some(repository) = &project.repository {
        links = links.push(
            button(text(i18n.tr("project-repository")))
                .on_press(Message::OpenLink(repository.clone()))
                .style(styles::button::secondary),
        );
    }
    if let Some(action) = &project.primary_action {
        links = links.push(
            button(text(action.label.clone()))
                .on_press(Message::OpenLink(action.target.clone()))
                .style(styles::button::secondary),
        );
    }

    let body: Element<'a, Message> = match &ctx.state.writeup {
        Some(writeup) => markdown::view(writeup.iter(), &ctx.theme).map(Message::LinkClicked),
        None => text(project.details.clone())
            .size(typography::BODY_LG)
            .into(),
    };

    Column::new()
        .spacing(spacing::MD)
        .push(
            button(text(i18n.tr("detail-back")))
                .on_press(Message::Back)
                .style(styles::button::link),
        )
        .push(text(project.title.clone()).size(typography::DISPLAY))
        .push(text(added).size(typography::CAPTION))
        .push(text(i18n.tr("detail-skills")).size(typography::TITLE_SM))
        .push(badges)
        .push(links)
        .push(body)
        .max_width(sizing::ARTICLE_MAX_WIDTH)
        .into()
}
