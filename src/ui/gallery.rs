// SPDX-License-Identifier: MPL-2.0
//! Projects page: filter panel and the filtered card grid.
//!
//! The page owns the raw filter inputs. The visible list is derived on every
//! render through [`catalog::apply_filter`]; the catalog itself is never
//! touched.

use crate::domain::catalog::{self, ProjectRecord, SkillSelection, SortOrder};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::project_card;
use crate::ui::skill_badge;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, pick_list, text, text_input, Column, Row, Space};
use iced::{alignment::Vertical, Element, Length};
use std::fmt;

/// Filter inputs of the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    search: String,
    selected: SkillSelection,
    sort: SortOrder,
}

impl State {
    #[must_use]
    pub fn new(sort: SortOrder) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn selected(&self) -> &SkillSelection {
        &self.selected
    }

    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Records matching the current inputs, in display order.
    #[must_use]
    pub fn visible<'p>(&self, projects: &'p [ProjectRecord]) -> Vec<&'p ProjectRecord> {
        catalog::apply_filter(projects, &self.search, &self.selected, self.sort)
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.search.is_empty() || !self.selected.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ToggleSkill(String),
    SortChanged(SortOrder),
    ClearFilters,
    Card(project_card::Message),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(String),
    OpenLink(String),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(search) => {
            state.search = search;
            Event::None
        }
        Message::ToggleSkill(skill) => {
            let selected = state.selected.toggle(&skill);
            tracing::debug!(%skill, selected, "skill filter toggled");
            Event::None
        }
        Message::SortChanged(sort) => {
            state.sort = sort;
            Event::None
        }
        Message::ClearFilters => {
            // Sort order is a preference, not a filter.
            state.search.clear();
            state.selected.clear();
            Event::None
        }
        Message::Card(project_card::Message::OpenProject(slug)) => {
            Event::Navigate(format!("/projects/{slug}"))
        }
        Message::Card(project_card::Message::OpenLink(target)) => Event::OpenLink(target),
    }
}

/// Sort order paired with its localized label for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortOption {
    order: SortOrder,
    label: String,
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub projects: &'a [ProjectRecord],
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let visible = ctx.state.visible(ctx.projects);

    let results: Element<'a, Message> = if visible.is_empty() {
        container(text(ctx.i18n.tr("gallery-no-results")).size(typography::BODY_LG))
            .padding(spacing::XL)
            .center_x(Length::Fill)
            .into()
    } else {
        project_card::grid(ctx.i18n, &visible).map(Message::Card)
    };

    Column::new()
        .spacing(spacing::LG)
        .push(text(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG))
        .push(filter_panel(&ctx, visible.len()))
        .push(results)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .into()
}

fn filter_panel<'a>(ctx: &ViewContext<'a>, count: usize) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let search = text_input(&i18n.tr("gallery-search-placeholder"), &state.search)
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let options: Vec<SortOption> = SortOrder::ALL
        .iter()
        .map(|order| SortOption {
            order: *order,
            label: i18n.tr(order.i18n_key()),
        })
        .collect();
    let selected = options
        .iter()
        .find(|option| option.order == state.sort)
        .cloned();
    let sort = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(i18n.tr("gallery-sort-label")).size(typography::BODY))
        .push(pick_list(options, selected, |option: SortOption| {
            Message::SortChanged(option.order)
        }));

    let count_label = i18n.tr_with_args(
        "gallery-result-count",
        &[("count", FluentValue::from(count))],
    );

    let mut top = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(search)
        .push(sort)
        .push(Space::new().width(Length::Fill))
        .push(text(count_label).size(typography::BODY));
    if state.has_filters() {
        top = top.push(
            button(text(i18n.tr("gallery-clear-filters")).size(typography::BODY))
                .on_press(Message::ClearFilters)
                .style(styles::button::link),
        );
    }

    let chips = catalog::all_skills(ctx.projects)
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, skill| {
            row.push(skill_badge::chip(
                skill,
                state.selected.contains(skill),
                Message::ToggleSkill(skill.to_string()),
            ))
        })
        .wrap()
        .vertical_spacing(spacing::XS);

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(top)
            .push(text(i18n.tr("gallery-skills-label")).size(typography::CAPTION))
            .push(chips),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
