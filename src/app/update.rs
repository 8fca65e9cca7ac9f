// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are forwarded to the component's own `update`, and the
//! returned events are turned into side effects here: route changes, theme
//! persistence and clipboard writes.

use super::{view, App, Message, Route};
use crate::domain::fade::ViewportMetrics;
use crate::domain::navigation;
use crate::ui::footer;
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::not_found;
use crate::ui::project_detail::{self, Event as DetailEvent};
use iced::widget::{operation, scrollable::RelativeOffset, Id};
use iced::{clipboard, Task};
use std::time::{Duration, Instant};

/// Longest frame delta fed to the animations, so a stalled window does not
/// make everything jump.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => match header::update(msg) {
                HeaderEvent::None => Task::none(),
                HeaderEvent::NavigateHome => self.navigate("/"),
                HeaderEvent::Navigate(path) => self.navigate(path),
                HeaderEvent::ToggleTheme => {
                    self.theme.toggle();
                    tracing::info!(
                        theme = %self.theme.preference(),
                        persisted = self.theme.is_persistent(),
                        "theme toggled"
                    );
                    Task::none()
                }
            },
            Message::Home(msg) => match home::update(msg) {
                HomeEvent::Navigate(path) => self.navigate(&path),
                HomeEvent::OpenLink(target) => self.open_link(target),
            },
            Message::Gallery(msg) => match gallery::update(&mut self.gallery, msg) {
                GalleryEvent::None => Task::none(),
                GalleryEvent::Navigate(path) => self.navigate(&path),
                GalleryEvent::OpenLink(target) => self.open_link(target),
            },
            Message::Detail(msg) => match project_detail::update(msg) {
                DetailEvent::Navigate(path) => self.navigate(&path),
                DetailEvent::OpenLink(target) => self.open_link(target),
            },
            Message::NotFound(not_found::Message::GoHome) => self.navigate("/"),
            Message::Footer(footer::Message::OpenLink(target)) => self.open_link(target),
            Message::Navigate(path) => self.navigate(&path),
            Message::Scrolled(viewport) => {
                let offset = viewport.absolute_offset().y;
                self.fade
                    .on_scroll(offset, self.window_size.width, Instant::now());
                Task::none()
            }
            Message::Resized(size) => {
                self.window_size = size;
                self.fade.on_resize(size.width, Instant::now());
                if let Some(particles) = self.particles.as_mut() {
                    particles.resize(size);
                }
                Task::none()
            }
            Message::CursorMoved(position) => {
                self.cursor = position;
                Task::none()
            }
            Message::Frame(now) => {
                self.on_frame(now);
                Task::none()
            }
            Message::DismissWarning(index) => {
                if index < self.warnings.len() {
                    self.warnings.remove(index);
                }
                Task::none()
            }
        }
    }

    /// Switches to the route for `path` and scrolls the page back to the top.
    pub(super) fn navigate(&mut self, path: &str) -> Task<Message> {
        let route = match Route::parse(path) {
            Route::Project(slug) if self.content.project(&slug).is_none() => {
                Route::NotFound(path.to_string())
            }
            route => route,
        };

        if route == self.route {
            return Task::none();
        }

        tracing::debug!(from = %self.route, to = %route, "navigate");

        let now = Instant::now();
        let had_header = self.route.shows_header();

        self.detail = match &route {
            Route::Project(slug) => {
                let writeup = self.content.writeup(slug);
                let stats = self.content.writeup_cache().stats();
                tracing::debug!(
                    slug = %slug,
                    hits = stats.hits,
                    misses = stats.misses,
                    "write-up cache"
                );
                Some(project_detail::State::new(slug.clone(), writeup))
            }
            _ => None,
        };

        self.nav.set_route(&route.path());

        let metrics = ViewportMetrics {
            scroll_offset: 0.0,
            width: self.window_size.width,
        };
        match (had_header, route.shows_header()) {
            (true, false) => self.fade.teardown(),
            (false, true) => self.fade.mount(metrics, now),
            _ => self
                .fade
                .on_scroll(metrics.scroll_offset, metrics.width, now),
        }

        self.route = route;

        operation::snap_to(Id::new(view::SCROLL_ID), RelativeOffset::START)
    }

    /// In-app paths navigate; anything else is copied to the clipboard.
    fn open_link(&mut self, target: String) -> Task<Message> {
        if navigation::is_internal_link(&target) {
            return self.navigate(&target);
        }

        tracing::info!(url = %target, "link copied to clipboard");
        self.copied_link = Some(target.clone());
        clipboard::write(target)
    }

    pub(super) fn on_frame(&mut self, now: Instant) {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).min(MAX_FRAME_DELTA))
            .unwrap_or_default();
        self.last_frame = Some(now);

        self.nav.advance(dt);
        if self.fade.tick(now) {
            tracing::debug!("header logo removed after fade");
        }
        if let Some(particles) = self.particles.as_mut() {
            particles.step(dt);
        }

        if !self.is_animating() {
            // Next animation starts from a fresh delta.
            self.last_frame = None;
        }
    }
}
