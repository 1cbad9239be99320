//! The particle data model and its spawn sampling.
//!
//! A particle is plain data: the simulation in [`Field`](crate::field::Field)
//! moves it, the [`Renderer`](crate::render::Renderer) reads it. Everything
//! random about a particle is decided once, at spawn time, from the caller's
//! RNG, so a seeded field reproduces the same population exactly.

use glam::Vec2;
use rand::Rng;

/// Dot radius range in pixels, sampled uniformly at spawn.
pub const RADIUS_RANGE: (f32, f32) = (0.3, 1.8);

/// Per-axis velocity range in pixels per frame, sampled uniformly at spawn.
pub const VELOCITY_RANGE: (f32, f32) = (-0.2, 0.2);

/// Dot opacity range, sampled uniformly at spawn.
pub const OPACITY_RANGE: (f32, f32) = (0.1, 0.6);

/// One drifting dot in the field.
///
/// Radius and opacity are fixed for the particle's lifetime; position and
/// velocity change as the simulation steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position on the surface, in pixels from the top-left corner.
    pub position: Vec2,
    /// Drift per logical frame, in pixels.
    pub velocity: Vec2,
    /// Dot radius in pixels.
    pub radius: f32,
    /// Dot opacity, 0.0 to 1.0.
    pub opacity: f32,
}

impl Particle {
    /// Sample a fresh particle somewhere on a `width` x `height` surface.
    pub(crate) fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
            velocity: Vec2::new(
                rng.gen_range(VELOCITY_RANGE.0..VELOCITY_RANGE.1),
                rng.gen_range(VELOCITY_RANGE.0..VELOCITY_RANGE.1),
            ),
            radius: rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
            opacity: rng.gen_range(OPACITY_RANGE.0..OPACITY_RANGE.1),
        }
    }
}
