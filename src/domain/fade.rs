// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven fade of the header logo.
//!
//! On narrow windows the logo fades out as the page scrolls so it does not
//! collide with the navigation pill. Once it is practically invisible it is
//! also taken out of interaction (no press handler, not focusable), but only
//! after the visual transition had time to finish. That delayed step is a
//! deadline owned by [`ScrollFade`]; callers feed it time through
//! [`ScrollFade::tick`] and it is dropped whenever the logo becomes visible
//! again or the controller is torn down.

use std::time::{Duration, Instant};

/// Tunables for the fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeConfig {
    /// Scroll distance over which opacity goes from 1 to 0.
    pub fade_distance: f32,
    /// Windows wider than this never fade.
    pub breakpoint_width: f32,
    /// Opacity below which the element is taken out of interaction.
    pub hide_threshold: f32,
    /// Delay before removal, matching the visual transition.
    pub hide_delay: Duration,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            fade_distance: 100.0,
            breakpoint_width: 1580.0,
            hide_threshold: 0.05,
            hide_delay: Duration::from_millis(200),
        }
    }
}

/// Scroll position and width of the page viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub scroll_offset: f32,
    pub width: f32,
}

/// Computes the logo opacity for the given viewport.
#[must_use]
pub fn opacity_for(config: &FadeConfig, metrics: ViewportMetrics) -> f32 {
    if metrics.width > config.breakpoint_width {
        return 1.0;
    }

    let offset = metrics.scroll_offset.max(0.0);
    if config.fade_distance <= 0.0 {
        return if offset > 0.0 { 0.0 } else { 1.0 };
    }

    (1.0 - offset / config.fade_distance).clamp(0.0, 1.0)
}

/// Fade controller state.
#[derive(Debug, Clone)]
pub struct ScrollFade {
    config: FadeConfig,
    metrics: ViewportMetrics,
    opacity: f32,
    removed: bool,
    pending_removal: Option<Instant>,
    mounted: bool,
}

impl ScrollFade {
    #[must_use]
    pub fn new(config: FadeConfig) -> Self {
        Self {
            config,
            metrics: ViewportMetrics::default(),
            opacity: 1.0,
            removed: false,
            pending_removal: None,
            mounted: false,
        }
    }

    /// Starts observing and evaluates the initial metrics.
    pub fn mount(&mut self, metrics: ViewportMetrics, now: Instant) {
        self.mounted = true;
        self.metrics = metrics;
        self.evaluate(now);
    }

    /// Stops observing and cancels any pending removal.
    ///
    /// The element is restored so a later [`mount`](Self::mount) starts clean.
    pub fn teardown(&mut self) {
        self.mounted = false;
        self.pending_removal = None;
        self.removed = false;
        self.opacity = 1.0;
    }

    pub fn on_scroll(&mut self, scroll_offset: f32, width: f32, now: Instant) {
        self.metrics = ViewportMetrics {
            scroll_offset,
            width,
        };
        if self.mounted {
            self.evaluate(now);
        }
    }

    pub fn on_resize(&mut self, width: f32, now: Instant) {
        self.metrics.width = width;
        if self.mounted {
            self.evaluate(now);
        }
    }

    /// Fires the pending removal once its deadline has passed.
    ///
    /// Returns true when the element was removed by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_removal {
            Some(deadline) if self.mounted && now >= deadline => {
                self.pending_removal = None;
                self.removed = true;
                true
            }
            _ => false,
        }
    }

    fn evaluate(&mut self, now: Instant) {
        self.opacity = opacity_for(&self.config, self.metrics);

        if self.opacity < self.config.hide_threshold {
            if !self.removed && self.pending_removal.is_none() {
                self.pending_removal = Some(now + self.config.hide_delay);
            }
        } else {
            self.pending_removal = None;
            self.removed = false;
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the element is out of interaction and hidden.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether a removal is scheduled and time must be fed to [`tick`](Self::tick).
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.mounted && self.pending_removal.is_some()
    }

    #[must_use]
    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    #[must_use]
    pub fn config(&self) -> &FadeConfig {
        &self.config
    }
}
