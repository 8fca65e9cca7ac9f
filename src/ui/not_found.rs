// SPDX-License-Identifier: MPL-2.0
//! Fallback page for unknown routes.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, text, Column};
use iced::{alignment::Horizontal, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    GoHome,
}

pub fn view<'a>(i18n: &I18n, path: &str) -> Element<'a, Message> {
    let message = i18n.tr_with_args("not-found-message", &[("path", FluentValue::from(path))]);

    container(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("not-found-title")).size(typography::DISPLAY))
            .push(text(message).size(typography::BODY_LG))
            .push(
                button(text(i18n.tr("not-found-home")))
                    .on_press(Message::GoHome)
                    .style(styles::button::primary),
            ),
    )
    .padding(spacing::XXL)
    .center_x(Length::Fill)
    .into()
}
