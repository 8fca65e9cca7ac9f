// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, back to front: page background, particle canvas, then the header
//! above a scrollable column holding warnings, the current page and the
//! footer.

use super::{Message, Route};
use crate::content::Content;
use crate::domain::fade::ScrollFade;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::header;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::not_found;
use crate::ui::project_detail;
use crate::ui::state::ParticleField;
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeController};
use crate::ui::widgets::ParticleLayer;
use iced::widget::{button, container, scrollable, text, Column, Id, Row, Space, Stack};
use iced::{alignment::Horizontal, alignment::Vertical, Element, Length, Point};

/// Id of the page scrollable, used to reset the offset on navigation.
pub const SCROLL_ID: &str = "page";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a Content,
    pub route: &'a Route,
    pub theme: &'a ThemeController,
    pub nav: &'a navbar::State,
    pub fade: &'a ScrollFade,
    pub gallery: &'a gallery::State,
    pub detail: Option<&'a project_detail::State>,
    pub particles: Option<&'a ParticleField>,
    pub cursor: Option<Point>,
    pub warnings: &'a [String],
    pub copied_link: Option<&'a str>,
}

/// Renders the current application view based on the active route.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = view_page(&ctx);

    let mut column = Column::new()
        .spacing(spacing::XXL)
        .padding([spacing::XL, spacing::LG])
        .width(Length::Fill)
        .align_x(Horizontal::Center);
    for (index, key) in ctx.warnings.iter().enumerate() {
        column = column.push(warning_banner(ctx.i18n, key, index));
    }
    column = column.push(page).push(
        footer::view(footer::ViewContext {
            i18n: ctx.i18n,
            profile: ctx.content.profile(),
            copied: ctx.copied_link,
        })
        .map(Message::Footer),
    );

    let scroll = scrollable(column)
        .id(Id::new(SCROLL_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut chrome = Column::new().width(Length::Fill).height(Length::Fill);
    if ctx.route.shows_header() {
        chrome = chrome.push(
            header::view(header::ViewContext {
                i18n: ctx.i18n,
                logo: &ctx.content.profile().name,
                fade: ctx.fade,
                nav: ctx.nav,
                theme: ctx.theme.preference(),
            })
            .map(Message::Header),
        );
    }
    chrome = chrome.push(scroll);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page),
        );
    if let Some(field) = ctx.particles {
        let colors = ColorScheme::for_preference(ctx.theme.preference());
        layers = layers.push(
            ParticleLayer::new(field, colors.particle, colors.link_opacity)
                .with_cursor(ctx.cursor)
                .into_element(),
        );
    }

    layers.push(chrome).into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.route {
        Route::About => home::view(home::ViewContext {
            i18n: ctx.i18n,
            profile: ctx.content.profile(),
            projects: ctx.content.projects(),
        })
        .map(Message::Home),
        Route::Projects => gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            state: ctx.gallery,
            projects: ctx.content.projects(),
        })
        .map(Message::Gallery),
        Route::Project(slug) => match (ctx.content.project(slug), ctx.detail) {
            (Some(project), Some(state)) => project_detail::view(project_detail::ViewContext {
                i18n: ctx.i18n,
                state,
                project,
                theme: ctx.theme.theme(),
            })
            .map(Message::Detail),
            _ => not_found::view(ctx.i18n, &ctx.route.path()).map(Message::NotFound),
        },
        Route::NotFound(path) => not_found::view(ctx.i18n, path).map(Message::NotFound),
    }
}

fn warning_banner<'a>(i18n: &I18n, key: &str, index: usize) -> Element<'a, Message> {
    container(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(text(i18n.tr(key)).size(typography::BODY).width(Length::Fill))
            .push(
                button(text(i18n.tr("warning-dismiss")).size(typography::BODY))
                    .on_press(Message::DismissWarning(index))
                    .style(styles::button::secondary),
            ),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::banner)
    .into()
}
