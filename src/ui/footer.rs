// SPDX-License-Identifier: MPL-2.0
//! Page footer: social links, copyright and the last copied link.

use crate::content::profile::Profile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, text, Column, Row};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    /// Last external link copied to the clipboard.
    pub copied: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenLink(String),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let socials = ctx
        .profile
        .socials
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, social| {
            row.push(
                button(text(social.label.clone()).size(typography::BODY))
                    .on_press(Message::OpenLink(social.url.clone()))
                    .style(styles::button::link),
            )
        });

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(socials)
        .push(text(ctx.profile.copyright.clone()).size(typography::CAPTION));

    if let Some(url) = ctx.copied {
        column = column.push(
            text(
                ctx.i18n
                    .tr_with_args("footer-link-copied", &[("url", FluentValue::from(url))]),
            )
            .size(typography::CAPTION),
        );
    }

    container(column)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into()
}
