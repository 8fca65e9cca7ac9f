// SPDX-License-Identifier: MPL-2.0
//! Navigation pill shown in the header.
//!
//! The active tab is derived from the current route by exact match. A
//! highlight slides between tabs on a damped spring and fades out when no
//! tab matches, keeping its last position.

use crate::domain::navigation::{self, NavTab, TABS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::Spring;
use crate::ui::styles;
use iced::widget::{button, container, stack, text, Row, Space};
use iced::{alignment::Vertical, Element, Length};
use std::time::Duration;

/// Highlight animation state.
#[derive(Debug, Clone)]
pub struct State {
    active: Option<usize>,
    /// Pill offset in tab widths.
    pill: Spring,
    /// Pill opacity, 0 when no tab is active.
    visibility: Spring,
}

impl State {
    /// Starts at rest on the tab matching `path`.
    #[must_use]
    pub fn new(path: &str) -> Self {
        let active = navigation::active_index(&TABS, path);
        Self {
            active,
            pill: Spring::at(active.unwrap_or(0) as f32),
            visibility: Spring::at(if active.is_some() { 1.0 } else { 0.0 }),
        }
    }

    /// Retargets the highlight after a route change.
    pub fn set_route(&mut self, path: &str) {
        let previous = self.active;
        self.active = navigation::active_index(&TABS, path);

        match (previous, self.active) {
            // Appearing from nothing: jump to the tab, then fade in.
            (None, Some(index)) => {
                self.pill.snap_to(index as f32);
                self.visibility.set_target(1.0);
            }
            (_, Some(index)) => {
                self.pill.set_target(index as f32);
                self.visibility.set_target(1.0);
            }
            (_, None) => self.visibility.set_target(0.0),
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.pill.advance(dt);
        self.visibility.advance(dt);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.pill.is_at_rest() || !self.visibility.is_at_rest()
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn pill_offset(&self) -> f32 {
        self.pill.position()
    }

    #[must_use]
    pub fn pill_opacity(&self) -> f32 {
        self.visibility.position().clamp(0.0, 1.0)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(&'static str),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Select(index) => TABS
            .get(index)
            .map_or(Event::None, |tab: &NavTab| Event::Navigate(tab.route)),
    }
}

/// Horizontal offset of the pill, kept inside the track during overshoot.
fn pill_lead(offset: f32) -> f32 {
    let last = TABS.len().saturating_sub(1) as f32;
    offset.clamp(0.0, last) * sizing::NAV_TAB_WIDTH
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let lead = pill_lead(ctx.state.pill_offset());
    let pill = Row::new()
        .push(Space::new().width(Length::Fixed(lead)))
        .push(
            container(Space::new())
                .width(Length::Fixed(sizing::NAV_TAB_WIDTH))
                .height(Length::Fixed(sizing::NAV_TAB_HEIGHT))
                .style(styles::container::nav_pill(ctx.state.pill_opacity())),
        );

    let tabs = TABS
        .iter()
        .enumerate()
        .fold(Row::new(), |row, (index, tab)| {
            let active = ctx.state.active() == Some(index);
            row.push(
                button(
                    text(ctx.i18n.tr(tab.label_key))
                        .size(typography::BODY)
                        .center()
                        .width(Length::Fill),
                )
                .width(Length::Fixed(sizing::NAV_TAB_WIDTH))
                .height(Length::Fixed(sizing::NAV_TAB_HEIGHT))
                .on_press(Message::Select(index))
                .style(styles::button::nav_tab(active)),
            )
        })
        .align_y(Vertical::Center);

    container(stack![pill, tabs])
        .padding(spacing::XXS)
        .style(styles::container::nav_track)
        .into()
}
