// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Header fade**: Logo fade distance, breakpoint and removal timing
//! - **Background**: Particle field density and motion
//! - **Content**: Write-up cache sizing

// ==========================================================================
// Header Fade Defaults
// ==========================================================================

/// Scroll distance (px) over which the logo fades from opaque to transparent.
pub const DEFAULT_FADE_DISTANCE: f32 = 100.0;

/// Maximum accepted fade distance.
pub const MAX_FADE_DISTANCE: f32 = 2000.0;

/// Viewport width (px) above which the logo never fades.
pub const DEFAULT_FADE_BREAKPOINT: f32 = 1580.0;

/// Opacity below which the logo is removed from interaction.
pub const DEFAULT_HIDE_THRESHOLD: f32 = 0.05;

/// Delay before a faded logo is removed (matches the opacity transition).
pub const DEFAULT_HIDE_DELAY_MS: u64 = 200;

/// Maximum accepted removal delay.
pub const MAX_HIDE_DELAY_MS: u64 = 5000;

// ==========================================================================
// Background Defaults
// ==========================================================================

/// Particle count for an 800x800 window.
pub const DEFAULT_PARTICLE_COUNT: u32 = 40;

/// Upper bound on the base particle count.
pub const MAX_PARTICLE_COUNT: u32 = 400;

/// Window area the base particle count is calibrated for.
pub const PARTICLE_DENSITY_AREA: f32 = 800.0 * 800.0;

/// Distance (px) under which two particles are linked.
pub const DEFAULT_LINK_DISTANCE: f32 = 150.0;

/// Maximum accepted link distance.
pub const MAX_LINK_DISTANCE: f32 = 600.0;

/// Distance (px) under which the cursor grabs particles.
pub const GRAB_DISTANCE: f32 = 200.0;

/// Particle speed in px per 60 Hz frame.
pub const DEFAULT_PARTICLE_SPEED: f32 = 0.5;

/// Maximum accepted particle speed.
pub const MAX_PARTICLE_SPEED: f32 = 10.0;

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Number of parsed write-ups kept in memory.
pub const DEFAULT_WRITEUP_CACHE_SIZE: usize = 8;

/// Maximum write-up cache capacity.
pub const MAX_WRITEUP_CACHE_SIZE: usize = 64;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FADE_DISTANCE > 0.0);
    assert!(DEFAULT_FADE_DISTANCE <= MAX_FADE_DISTANCE);
    assert!(DEFAULT_FADE_BREAKPOINT > 0.0);
    assert!(DEFAULT_HIDE_THRESHOLD > 0.0);
    assert!(DEFAULT_HIDE_THRESHOLD < 1.0);
    assert!(DEFAULT_HIDE_DELAY_MS <= MAX_HIDE_DELAY_MS);

    assert!(DEFAULT_PARTICLE_COUNT <= MAX_PARTICLE_COUNT);
    assert!(DEFAULT_LINK_DISTANCE > 0.0);
    assert!(DEFAULT_LINK_DISTANCE <= MAX_LINK_DISTANCE);
    assert!(GRAB_DISTANCE > 0.0);
    assert!(DEFAULT_PARTICLE_SPEED > 0.0);
    assert!(DEFAULT_PARTICLE_SPEED <= MAX_PARTICLE_SPEED);

    assert!(DEFAULT_WRITEUP_CACHE_SIZE > 0);
    assert!(DEFAULT_WRITEUP_CACHE_SIZE <= MAX_WRITEUP_CACHE_SIZE);
};
