//! The particle field simulation core.
//!
//! A [`Field`] owns a set of particles and advances them one logical frame at
//! a time. It knows nothing about windows, GPUs, or frame scheduling; an
//! external driver (the [`Viewer`](crate::Viewer) loop, a test, a headless
//! embedding) calls [`Field::step`] once per frame and hands the result to a
//! [`Renderer`](crate::render::Renderer).
//!
//! # Example
//!
//! ```ignore
//! use plexus::{Field, PointerState};
//!
//! let mut field = Field::with_seed(800.0, 600.0, 42);
//! let pointer = PointerState::centered(800.0, 600.0);
//!
//! // One logical frame:
//! field.step(pointer.get());
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::particle::Particle;

/// Default population cap. Keeps the O(n^2) connection pass bounded at
/// ~11k pair checks per frame.
pub const MAX_PARTICLES: usize = 150;

/// One particle per this many pixels of surface width.
pub const PIXELS_PER_PARTICLE: f32 = 8.0;

/// Pointer influence radius in pixels.
pub const POINTER_RADIUS: f32 = 120.0;

/// Strength of the per-frame pointer repulsion nudge.
pub const POINTER_PUSH: f32 = 0.03;

/// A bounded 2D surface full of drifting particles.
pub struct Field {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    cap: usize,
    rng: SmallRng,
}

impl Field {
    /// Create a field for a `width` x `height` surface, seeded from entropy.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(width, height, MAX_PARTICLES, SmallRng::from_entropy())
    }

    /// Create a field with a fixed RNG seed, for reproducible populations.
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(width, height, MAX_PARTICLES, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(width: f32, height: f32, cap: usize, rng: SmallRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            cap,
            rng,
        };
        field.populate();
        field
    }

    /// Replace the population cap and respawn to match.
    ///
    /// Chainable at construction time, builder style.
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self.populate();
        self
    }

    /// Population for a given surface width under a cap.
    ///
    /// One particle per 8px of width, capped. A degenerate width yields zero.
    pub fn target_count(width: f32, cap: usize) -> usize {
        if width <= 0.0 {
            return 0;
        }
        ((width / PIXELS_PER_PARTICLE) as usize).min(cap)
    }

    fn populate(&mut self) {
        self.particles.clear();
        // A surface with no area gets no particles and a no-op loop.
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let count = Self::target_count(self.width, self.cap);
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::spawn(&mut self.rng, self.width, self.height));
        }
    }

    /// Resize the surface and respawn the whole population.
    ///
    /// Prior particle state is discarded unconditionally, matching the
    /// viewport-resize behavior of the effect.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Advance every particle by one frame.
    ///
    /// Per particle, in order: pointer repulsion nudge, velocity integration,
    /// boundary reflection. The nudge is a transient positional displacement;
    /// only reflection ever mutates velocity.
    pub fn step(&mut self, pointer: Vec2) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            let to_pointer = pointer - p.position;
            let dist = to_pointer.length();
            if dist < POINTER_RADIUS {
                let force = 1.0 - dist / POINTER_RADIUS;
                p.position -= to_pointer * force * POINTER_PUSH;
            }

            p.position += p.velocity;

            // Reflect and clamp so an out-of-bounds position never survives
            // the frame that produced it.
            if p.position.x < 0.0 || p.position.x > width {
                p.velocity.x = -p.velocity.x;
                p.position.x = p.position.x.clamp(0.0, width);
            }
            if p.position.y < 0.0 || p.position.y > height {
                p.velocity.y = -p.velocity.y;
                p.position.y = p.position.y.clamp(0.0, height);
            }
        }
    }

    /// The current particle set.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for custom effects and test setups.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Surface width in pixels.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field is empty (degenerate surface or zero cap).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Configured population cap.
    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }
}
