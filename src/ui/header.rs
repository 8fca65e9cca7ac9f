// SPDX-License-Identifier: MPL-2.0
//! Page header: fading logo, navigation pill and theme toggle.

use crate::domain::fade::ScrollFade;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar;
use crate::ui::styles;
use crate::ui::theming::ThemePreference;
use iced::widget::{button, container, text, Row, Space};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub logo: &'a str,
    pub fade: &'a ScrollFade,
    pub nav: &'a navbar::State,
    pub theme: ThemePreference,
}

#[derive(Debug, Clone)]
pub enum Message {
    LogoPressed,
    ToggleTheme,
    Nav(navbar::Message),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    NavigateHome,
    ToggleTheme,
    Navigate(&'static str),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::LogoPressed => Event::NavigateHome,
        Message::ToggleTheme => Event::ToggleTheme,
        Message::Nav(msg) => match navbar::update(msg) {
            navbar::Event::None => Event::None,
            navbar::Event::Navigate(route) => Event::Navigate(route),
        },
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let logo: Element<'a, Message> = if ctx.fade.is_removed() {
        // Keeps the slot so the navbar does not jump once the logo is gone.
        Space::new().width(Length::Fill).into()
    } else {
        container(
            button(text(ctx.logo.to_string()).size(typography::TITLE_MD))
                .on_press(Message::LogoPressed)
                .style(styles::button::logo(ctx.fade.opacity())),
        )
        .width(Length::Fill)
        .into()
    };

    let toggle_label = if ctx.theme.is_dark() {
        ctx.i18n.tr("header-switch-to-light")
    } else {
        ctx.i18n.tr("header-switch-to-dark")
    };
    let toggle = container(
        button(text(toggle_label).size(typography::BODY))
            .on_press(Message::ToggleTheme)
            .style(styles::button::secondary),
    )
    .width(Length::Fill)
    .align_right(Length::Fill);

    let nav = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        state: ctx.nav,
    })
    .map(Message::Nav);

    Row::new()
        .push(logo)
        .push(nav)
        .push(toggle)
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fade::{FadeConfig, ViewportMetrics};
    use std::time::{Duration, Instant};

    #[test]
    fn logo_navigates_home() {
        assert_eq!(update(Message::LogoPressed), Event::NavigateHome);
    }

    #[test]
    fn nav_selection_is_forwarded() {
        assert_eq!(
            update(Message::Nav(navbar::Message::Select(0))),
            Event::Navigate("/")
        );
    }

    #[test]
    fn header_renders_after_logo_removal() {
        let i18n = I18n::default();
        let nav = navbar::State::new("/");
        let mut fade = ScrollFade::new(FadeConfig::default());
        let start = Instant::now();
        fade.mount(
            ViewportMetrics {
                scroll_offset: 500.0,
                width: 800.0,
            },
            start,
        );
        fade.tick(start + Duration::from_secs(1));
        assert!(fade.is_removed());

        let _element = view(ViewContext {
            i18n: &i18n,
            logo: "CL",
            fade: &fade,
            nav: &nav,
            theme: ThemePreference::Dark,
        });
    }
}
