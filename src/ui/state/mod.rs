// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Animation state kept outside the components that render it.
//!
//! - [`spring`]: Damped spring for the navigation pill
//! - [`particles`]: Drifting particle field for the background

pub mod particles;
pub mod spring;

pub use particles::{ParticleField, ParticleSettings};
pub use spring::Spring;
