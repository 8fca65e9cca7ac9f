// SPDX-License-Identifier: MPL-2.0
//! Damped spring used to slide the navigation highlight between tabs.
//!
//! Integrates `a = -k (x - target) - c v` with semi-implicit Euler. Large
//! frame deltas are split into steps of at most 4 ms so a stiff spring stays
//! stable after the window was idle.

use std::time::Duration;

/// Longest single integration step.
const MAX_STEP_SECS: f32 = 0.004;

/// Position delta below which the spring may settle.
const REST_POSITION: f32 = 0.001;

/// Velocity below which the spring may settle.
const REST_VELOCITY: f32 = 0.01;

/// Stiffness of the navigation pill.
pub const NAV_STIFFNESS: f32 = 450.0;

/// Damping of the navigation pill.
pub const NAV_DAMPING: f32 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    at_rest: bool,
}

impl Spring {
    /// Creates a spring resting at `position`.
    #[must_use]
    pub fn at(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            stiffness: NAV_STIFFNESS,
            damping: NAV_DAMPING,
            at_rest: true,
        }
    }

    /// Moves the target; wakes the spring if it changed.
    pub fn set_target(&mut self, target: f32) {
        if (self.target - target).abs() > REST_POSITION {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Jumps to `position` without animating.
    pub fn snap_to(&mut self, position: f32) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }

        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let acceleration =
                -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            remaining -= step;
        }

        if (self.position - self.target).abs() < REST_POSITION
            && self.velocity.abs() < REST_VELOCITY
        {
            self.snap_to(self.target);
        }
    }

    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.advance(Duration::from_millis(16));
        }
    }

    #[test]
    fn new_spring_is_at_rest() {
        let spring = Spring::at(1.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn settles_on_new_target() {
        let mut spring = Spring::at(0.0);
        spring.set_target(1.0);
        assert!(!spring.is_at_rest());

        run(&mut spring, 120);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn moves_towards_target_on_first_frames() {
        let mut spring = Spring::at(0.0);
        spring.set_target(1.0);
        run(&mut spring, 3);
        assert!(spring.position() > 0.0);
        assert!(spring.position() < 1.0 + 0.2);
    }

    #[test]
    fn large_delta_is_subdivided() {
        let mut spring = Spring::at(0.0);
        spring.set_target(1.0);
        spring.advance(Duration::from_secs(2));
        assert!(spring.position().is_finite());
        assert!((spring.position() - 1.0).abs() < 0.01);
    }

    #[test]
    fn snap_skips_animation() {
        let mut spring = Spring::at(0.0);
        spring.set_target(1.0);
        spring.snap_to(0.5);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 0.5);
        assert_eq!(spring.target(), 0.5);
    }

    #[test]
    fn same_target_does_not_wake() {
        let mut spring = Spring::at(1.0);
        spring.set_target(1.0);
        assert!(spring.is_at_rest());
    }
}
