// SPDX-License-Identifier: MPL-2.0
//! About page: hero, featured projects, skills, experience timeline and
//! certifications.

use crate::content::profile::{Certification, ExperienceEntry, Profile, SkillGroup};
use crate::domain::catalog::{self, ProjectRecord};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::project_card;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, text, Column, Row};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    pub projects: &'a [ProjectRecord],
}

#[derive(Debug, Clone)]
pub enum Message {
    Card(project_card::Message),
    ViewAllProjects,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(String),
    OpenLink(String),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Card(project_card::Message::OpenProject(slug)) => {
            Event::Navigate(format!("/projects/{slug}"))
        }
        Message::Card(project_card::Message::OpenLink(target)) => Event::OpenLink(target),
        Message::ViewAllProjects => Event::Navigate("/projects".to_string()),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let featured = catalog::featured(ctx.projects);

    let featured_section = Column::new()
        .spacing(spacing::MD)
        .push(section_title(ctx.i18n.tr("about-featured-title")))
        .push(project_card::grid(ctx.i18n, &featured).map(Message::Card))
        .push(
            button(text(ctx.i18n.tr("about-view-all-projects")))
                .on_press(Message::ViewAllProjects)
                .style(styles::button::link),
        );

    Column::new()
        .spacing(spacing::XXL)
        .push(hero(ctx.profile))
        .push(featured_section)
        .push(skills(ctx.i18n, &ctx.profile.skill_groups))
        .push(experience(ctx.i18n, &ctx.profile.experience))
        .push(certifications(ctx.i18n, &ctx.profile.certifications))
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .into()
}

fn section_title<'a>(title: String) -> Element<'a, Message> {
    text(title).size(typography::TITLE_LG).into()
}

fn hero<'a>(profile: &Profile) -> Element<'a, Message> {
    let socials = profile
        .socials
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, social| {
            row.push(
                button(text(social.label.clone()))
                    .on_press(Message::Card(project_card::Message::OpenLink(
                        social.url.clone(),
                    )))
                    .style(styles::button::secondary),
            )
        });

    Column::new()
        .spacing(spacing::SM)
        .push(text(profile.greeting.clone()).size(typography::DISPLAY))
        .push(text(profile.headline.clone()).size(typography::TITLE_MD))
        .push(text(profile.summary.clone()).size(typography::BODY_LG))
        .push(socials)
        .into()
}

fn skills<'a>(i18n: &I18n, groups: &[SkillGroup]) -> Element<'a, Message> {
    let cards = groups
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, group| {
            let list = group
                .skills
                .iter()
                .fold(Column::new().spacing(spacing::XXS), |col, skill| {
                    col.push(text(format!("• {skill}")).size(typography::BODY))
                });
            row.push(
                container(
                    Column::new()
                        .spacing(spacing::XS)
                        .push(text(group.title.clone()).size(typography::TITLE_SM))
                        .push(list),
                )
                .padding(spacing::MD)
                .width(Length::Fixed(sizing::CARD_WIDTH))
                .style(styles::container::card),
            )
        })
        .wrap()
        .vertical_spacing(spacing::MD);

    Column::new()
        .spacing(spacing::MD)
        .push(section_title(i18n.tr("about-skills-title")))
        .push(cards)
        .into()
}

fn experience<'a>(i18n: &I18n, entries: &[ExperienceEntry]) -> Element<'a, Message> {
    let timeline = entries
        .iter()
        .fold(Column::new().spacing(spacing::LG), |col, entry| {
            col.push(timeline_entry(entry))
        });

    Column::new()
        .spacing(spacing::MD)
        .push(section_title(i18n.tr("about-experience-title")))
        .push(timeline)
        .into()
}

fn timeline_entry<'a>(entry: &ExperienceEntry) -> Element<'a, Message> {
    let dot = container(text(""))
        .width(Length::Fixed(sizing::TIMELINE_DOT))
        .height(Length::Fixed(sizing::TIMELINE_DOT))
        .style(styles::container::timeline_dot);

    let mut heading = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(entry.title.clone()).size(typography::TITLE_SM));
    if let Some(period) = &entry.period {
        heading = heading.push(text(period.clone()).size(typography::CAPTION));
    }

    let tags = entry
        .tags
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, tag| {
            row.push(
                container(text(tag.clone()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::neutral_badge),
            )
        })
        .wrap();

    let body = container(
        Column::new()
            .spacing(spacing::XS)
            .push(heading)
            .push(text(entry.place.clone()).size(typography::CAPTION))
            .push(text(entry.description.clone()).size(typography::BODY))
            .push(tags),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(dot)
        .push(body)
        .into()
}

fn certifications<'a>(i18n: &I18n, certifications: &[Certification]) -> Element<'a, Message> {
    let cards = certifications
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, cert| {
            let issued = i18n.tr_with_args(
                "about-certification-issued",
                &[("date", FluentValue::from(cert.date.as_str()))],
            );
            row.push(
                container(
                    Column::new()
                        .spacing(spacing::XS)
                        .push(text(cert.title.clone()).size(typography::TITLE_SM))
                        .push(text(cert.organization.clone()).size(typography::BODY))
                        .push(text(issued).size(typography::CAPTION))
                        .push(
                            button(text(i18n.tr("about-certification-view")))
                                .on_press(Message::Card(project_card::Message::OpenLink(
                                    cert.url.clone(),
                                )))
                                .style(styles::button::link),
                        ),
                )
                .padding(spacing::MD)
                .width(Length::Fixed(sizing::CARD_WIDTH))
                .style(styles::container::card),
            )
        })
        .wrap()
        .vertical_spacing(spacing::MD);

    Column::new()
        .spacing(spacing::MD)
        .push(section_title(i18n.tr("about-certifications-title")))
        .push(cards)
        .into()
}
