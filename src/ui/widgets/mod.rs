// SPDX-License-Identifier: MPL-2.0
pub mod particle_layer;

pub use particle_layer::ParticleLayer;
