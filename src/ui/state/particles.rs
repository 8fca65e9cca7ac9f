// SPDX-License-Identifier: MPL-2.0
//! Particle field behind the page content.
//!
//! Particles drift in straight lines at a constant speed and wrap around the
//! window edges. The particle count follows the window area so density stays
//! the same when the window is resized. All randomness comes from a seeded
//! [`StdRng`], which keeps layouts reproducible in tests.

use crate::app::config::{BackgroundConfig, GRAB_DISTANCE, PARTICLE_DENSITY_AREA};
use iced::{Point, Size, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::time::Duration;

/// Reference frame length the speed is expressed in.
const FRAME_SECS: f32 = 1.0 / 60.0;

/// Longest step simulated at once; longer gaps are clamped.
const MAX_STEP: Duration = Duration::from_millis(100);

const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    /// Unit direction of travel.
    pub direction: Vector,
    pub radius: f32,
}

/// Field parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSettings {
    /// Particle count for an 800x800 area.
    pub base_count: u32,
    pub link_distance: f32,
    /// Pixels per 60 Hz frame.
    pub speed: f32,
}

impl From<&BackgroundConfig> for ParticleSettings {
    fn from(config: &BackgroundConfig) -> Self {
        Self {
            base_count: config.particle_count(),
            link_distance: config.link_distance(),
            speed: config.speed(),
        }
    }
}

/// Line between two particles, `strength` in (0, 1] fading with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub strength: f32,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    size: Size,
    settings: ParticleSettings,
    rng: StdRng,
}

impl ParticleField {
    #[must_use]
    pub fn new(settings: ParticleSettings, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            size: Size::ZERO,
            settings,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of particles for a window of `size`.
    #[must_use]
    pub fn target_count(&self, size: Size) -> usize {
        let area = (size.width.max(0.0) * size.height.max(0.0)) / PARTICLE_DENSITY_AREA;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = (self.settings.base_count as f32 * area).round() as usize;
        count
    }

    /// Adapts the field to a new window size.
    ///
    /// Existing particles stay where they are (wrapped into the new bounds);
    /// particles are added or dropped to match the target density.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        let target = self.target_count(size);

        if self.particles.len() > target {
            self.particles.truncate(target);
        }
        while self.particles.len() < target {
            let particle = self.spawn();
            self.particles.push(particle);
        }

        for particle in &mut self.particles {
            particle.position = wrap(particle.position, particle.radius, size);
        }
    }

    /// Moves every particle by `elapsed`.
    pub fn step(&mut self, elapsed: Duration) {
        let frames = elapsed.min(MAX_STEP).as_secs_f32() / FRAME_SECS;
        let distance = self.settings.speed * frames;
        let size = self.size;

        for particle in &mut self.particles {
            let moved = particle.position + particle.direction * distance;
            particle.position = wrap(moved, particle.radius, size);
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Links between particles closer than the link distance.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let max = self.settings.link_distance;
        if max <= 0.0 {
            return Vec::new();
        }

        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance < max {
                    links.push(Link {
                        from: a.position,
                        to: b.position,
                        strength: 1.0 - distance / max,
                    });
                }
            }
        }
        links
    }

    /// Links from `cursor` to particles within grab distance.
    #[must_use]
    pub fn grab_links(&self, cursor: Point) -> Vec<Link> {
        self.particles
            .iter()
            .filter_map(|particle| {
                let distance = cursor.distance(particle.position);
                (distance < GRAB_DISTANCE).then(|| Link {
                    from: cursor,
                    to: particle.position,
                    strength: 1.0 - distance / GRAB_DISTANCE,
                })
            })
            .collect()
    }

    fn spawn(&mut self) -> Particle {
        let width = self.size.width.max(1.0);
        let height = self.size.height.max(1.0);
        let angle = self.rng.random_range(0.0..TAU);

        Particle {
            position: Point::new(
                self.rng.random_range(0.0..width),
                self.rng.random_range(0.0..height),
            ),
            direction: Vector::new(angle.cos(), angle.sin()),
            radius: self.rng.random_range(MIN_RADIUS..=MAX_RADIUS),
        }
    }
}

/// Wraps a position that left the window to the opposite edge.
fn wrap(position: Point, radius: f32, size: Size) -> Point {
    Point::new(
        wrap_axis(position.x, radius, size.width),
        wrap_axis(position.y, radius, size.height),
    )
}

fn wrap_axis(value: f32, radius: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return value;
    }
    if value < -radius {
        extent + radius
    } else if value > extent + radius {
        -radius
    } else {
        value
    }
}
