// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`home`] - About page with hero, featured projects and timeline
//! - [`gallery`] - Searchable, filterable project grid
//! - [`project_detail`] - Project write-up rendered from markdown
//! - [`not_found`] - Fallback for unknown routes
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Animation state (navigation spring, particle field)
//! - [`widgets`] - Custom Iced widgets (particle canvas)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark preference, persistence and color schemes
//! - [`header`] and [`navbar`] - Fading logo, navigation pill, theme toggle
//! - [`footer`] - Social links and copyright
//! - [`project_card`] and [`skill_badge`] - Building blocks shared by pages

pub mod design_tokens;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod home;
pub mod navbar;
pub mod not_found;
pub mod project_card;
pub mod project_detail;
pub mod skill_badge;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
