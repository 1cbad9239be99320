//! Frame rendering: particle circles plus the proximity connection pass.
//!
//! Drawing is expressed against the [`Canvas`] trait so the pass itself stays
//! independent of any graphics API. The windowed viewer feeds it a geometry
//! batch that turns calls into GPU vertices; tests and headless embeddings
//! use [`Recorder`], which captures every call as a [`DrawOp`].

use glam::Vec2;

use crate::field::Field;

/// Distance under which two particles get a connection line, in pixels.
pub const CONNECTION_RADIUS: f32 = 90.0;

/// Peak alpha of a connection line (reached at zero distance).
pub const CONNECTION_ALPHA: f32 = 0.15;

/// A drawing surface for one frame.
///
/// `clear` is called exactly once at the start of each frame, before any
/// circles or lines.
pub trait Canvas {
    /// Erase the previous frame.
    fn clear(&mut self);
    /// Filled circle in the accent color at the given opacity.
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32);
    /// Straight line in the accent color at the given opacity.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32);
}

/// Renders a [`Field`] onto any [`Canvas`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    connection_radius: f32,
    connection_alpha: f32,
}

impl Renderer {
    /// Renderer with the stock connection distance and alpha.
    pub fn new() -> Self {
        Self {
            connection_radius: CONNECTION_RADIUS,
            connection_alpha: CONNECTION_ALPHA,
        }
    }

    /// Override the connection distance threshold.
    pub fn with_connection_radius(mut self, radius: f32) -> Self {
        self.connection_radius = radius;
        self
    }

    /// Override the peak connection alpha.
    pub fn with_connection_alpha(mut self, alpha: f32) -> Self {
        self.connection_alpha = alpha;
        self
    }

    /// Configured connection distance threshold.
    #[inline]
    pub fn connection_radius(&self) -> f32 {
        self.connection_radius
    }

    /// Draw one frame: clear, every particle, then every close pair.
    ///
    /// The pair pass checks all unordered pairs, O(n^2); the field's
    /// population cap is what keeps this affordable, so callers raising the
    /// cap are also raising this cost quadratically.
    pub fn draw<C: Canvas>(&self, field: &Field, canvas: &mut C) {
        canvas.clear();

        let particles = field.particles();
        for p in particles {
            canvas.fill_circle(p.position, p.radius, p.opacity);
        }

        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let a = particles[i].position;
                let b = particles[j].position;
                let dist = a.distance(b);
                if dist < self.connection_radius {
                    let alpha = (1.0 - dist / self.connection_radius) * self.connection_alpha;
                    canvas.stroke_line(a, b, alpha);
                }
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle { center: Vec2, radius: f32, alpha: f32 },
    Line { from: Vec2, to: Vec2, alpha: f32 },
}

/// A [`Canvas`] that records draw calls instead of rasterizing them.
///
/// Each frame starts with [`DrawOp::Clear`]; prior frames are dropped, so the
/// recorder always holds exactly the latest frame.
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw ops of the latest frame, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of recorded connection lines in the latest frame.
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    /// Number of recorded circles in the latest frame.
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }
}

impl Canvas for Recorder {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.ops.push(DrawOp::Line { from, to, alpha });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Width 16 spawns exactly two particles, which keeps pair counting exact.
    fn two_particle_field(a: Vec2, b: Vec2) -> Field {
        let mut field = Field::with_seed(16.0, 200.0, 1);
        assert_eq!(field.len(), 2);
        field.particles_mut()[0].position = a;
        field.particles_mut()[1].position = b;
        field
    }

    #[test]
    fn test_connection_inside_threshold() {
        let field = two_particle_field(Vec2::new(5.0, 10.0), Vec2::new(5.0, 99.0));
        let mut rec = Recorder::new();
        Renderer::new().draw(&field, &mut rec);

        assert_eq!(rec.circle_count(), 2);
        assert_eq!(rec.line_count(), 1, "89px apart must connect");
        let expected = (1.0 - 89.0 / 90.0) * CONNECTION_ALPHA;
        match rec.ops().last() {
            Some(DrawOp::Line { alpha, .. }) => assert!((alpha - expected).abs() < 1e-6),
            other => panic!("expected trailing line op, got {:?}", other),
        }
    }

    #[test]
    fn test_no_connection_outside_threshold() {
        let field = two_particle_field(Vec2::new(5.0, 10.0), Vec2::new(5.0, 101.0));
        let mut rec = Recorder::new();
        Renderer::new().draw(&field, &mut rec);

        assert_eq!(rec.circle_count(), 2);
        assert_eq!(rec.line_count(), 0, "91px apart must not connect");
    }

    #[test]
    fn test_alpha_fades_with_distance() {
        let near = two_particle_field(Vec2::new(5.0, 10.0), Vec2::new(5.0, 20.0));
        let far = two_particle_field(Vec2::new(5.0, 10.0), Vec2::new(5.0, 90.0));
        let renderer = Renderer::new();

        let alpha_of = |field: &Field| {
            let mut rec = Recorder::new();
            renderer.draw(field, &mut rec);
            match rec.ops().last() {
                Some(DrawOp::Line { alpha, .. }) => *alpha,
                other => panic!("expected line op, got {:?}", other),
            }
        };

        assert!(alpha_of(&near) > alpha_of(&far));
    }

    #[test]
    fn test_empty_field_draws_only_clear() {
        let field = Field::with_seed(0.0, 0.0, 1);
        let mut rec = Recorder::new();
        Renderer::new().draw(&field, &mut rec);
        assert_eq!(rec.ops(), &[DrawOp::Clear]);
    }

    #[test]
    fn test_recorder_keeps_latest_frame_only() {
        let field = two_particle_field(Vec2::new(5.0, 10.0), Vec2::new(5.0, 20.0));
        let mut rec = Recorder::new();
        let renderer = Renderer::new();
        renderer.draw(&field, &mut rec);
        let first_len = rec.ops().len();
        renderer.draw(&field, &mut rec);
        assert_eq!(rec.ops().len(), first_len);
    }

    #[test]
    fn test_custom_connection_radius() {
        let field = two_particle_field(Vec2::new(5.0, 10.0), Vec2::new(5.0, 101.0));
        let mut rec = Recorder::new();
        Renderer::new()
            .with_connection_radius(120.0)
            .draw(&field, &mut rec);
        assert_eq!(rec.line_count(), 1);
    }
}
