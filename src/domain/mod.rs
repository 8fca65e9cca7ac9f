// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure state and derivations behind the pages.
//!
//! Nothing in here touches Iced, the filesystem or the clock: time is passed
//! in as `Instant`s and every derivation is a plain function, which keeps the
//! rules testable without a window.
//!
//! # Modules
//!
//! - [`catalog`]: Project records and the gallery filter ([`apply_filter`](catalog::apply_filter))
//! - [`fade`]: Scroll-driven logo fade ([`ScrollFade`](fade::ScrollFade))
//! - [`navigation`]: Navigation tabs ([`active_index`](navigation::active_index))
//! - [`skills`]: Skill tag categories ([`SkillCategory`](skills::SkillCategory))

pub mod catalog;
pub mod fade;
pub mod navigation;
pub mod skills;
