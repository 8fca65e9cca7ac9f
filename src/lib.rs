// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio built with the Iced GUI framework.
//!
//! It presents an About page, a searchable and filterable project gallery and
//! per-project write-ups, with a persisted light/dark theme, a scroll-faded
//! header logo, an animated navigation pill and a particle background.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
