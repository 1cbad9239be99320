//! Integration tests for the simulation core and the render pass, driven
//! headlessly through the public API.

use plexus::field::MAX_PARTICLES;
use plexus::{DrawOp, Field, PointerState, Recorder, Renderer, Vec2};

#[test]
fn population_matches_width_formula() {
    // 800 / 8 = 100, under the cap.
    let field = Field::with_seed(800.0, 600.0, 1);
    assert_eq!(field.len(), 100);

    // 1600 / 8 = 200, cap applies.
    let field = Field::with_seed(1600.0, 900.0, 1);
    assert_eq!(field.len(), MAX_PARTICLES);
}

#[test]
fn spawned_particles_are_in_bounds() {
    let field = Field::with_seed(1024.0, 768.0, 99);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 1024.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 768.0);
    }
}

#[test]
fn spawned_attributes_fall_in_documented_ranges() {
    use plexus::particle::{OPACITY_RANGE, RADIUS_RANGE, VELOCITY_RANGE};

    let field = Field::with_seed(1200.0, 800.0, 5);
    assert!(field.len() > 0);
    for p in field.particles() {
        assert!(p.radius >= RADIUS_RANGE.0 && p.radius < RADIUS_RANGE.1);
        assert!(p.opacity >= OPACITY_RANGE.0 && p.opacity < OPACITY_RANGE.1);
        assert!(p.velocity.x >= VELOCITY_RANGE.0 && p.velocity.x < VELOCITY_RANGE.1);
        assert!(p.velocity.y >= VELOCITY_RANGE.0 && p.velocity.y < VELOCITY_RANGE.1);
    }
}

#[test]
fn reinit_produces_fresh_population_of_same_size() {
    let mut field = Field::with_seed(800.0, 600.0, 4);
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    field.resize(800.0, 600.0);
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();

    assert_eq!(before.len(), after.len());
    // Same count and bounds, but a fresh sample of the RNG stream.
    assert_ne!(before, after);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
    }
}

#[test]
fn same_seed_gives_same_population() {
    let a = Field::with_seed(800.0, 600.0, 123);
    let b = Field::with_seed(800.0, 600.0, 123);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn degenerate_surface_runs_without_drawing() {
    let mut field = Field::with_seed(0.0, 0.0, 1);
    assert_eq!(field.len(), 0);

    let pointer = PointerState::centered(0.0, 0.0);
    field.step(pointer.get());

    let mut rec = Recorder::new();
    Renderer::new().draw(&field, &mut rec);
    assert_eq!(rec.ops(), &[DrawOp::Clear]);
}

#[test]
fn repulsed_particle_ends_further_from_pointer() {
    let mut field = Field::with_seed(800.0, 600.0, 2);
    let pointer = Vec2::new(400.0, 300.0);
    let velocity = Vec2::new(0.1, 0.0);

    // Same base velocity, one inside the influence radius, one outside.
    field.particles_mut()[0].position = Vec2::new(340.0, 300.0);
    field.particles_mut()[0].velocity = velocity;
    field.particles_mut()[1].position = Vec2::new(650.0, 300.0);
    field.particles_mut()[1].velocity = velocity;

    field.step(pointer);

    let near = field.particles()[0];
    let far = field.particles()[1];
    let near_gain = near.position.distance(pointer) - 60.0;
    let far_gain = far.position.distance(pointer) - 250.0;

    // Both drifted +0.1 in x; only the near one was also pushed away, so it
    // must have gained strictly more distance from the pointer.
    assert!(near_gain > far_gain);
    assert!(near.position.x < 340.0, "repulsion must dominate the drift");
    assert_eq!(far.position, Vec2::new(650.1, 300.0));
}

#[test]
fn full_frame_draw_ordering() {
    let mut field = Field::with_seed(160.0, 120.0, 7);
    let pointer = PointerState::centered(160.0, 120.0);
    field.step(pointer.get());

    let mut rec = Recorder::new();
    Renderer::new().draw(&field, &mut rec);

    let ops = rec.ops();
    assert_eq!(ops[0], DrawOp::Clear);
    assert_eq!(rec.circle_count(), field.len());

    // Circles come before any line.
    let first_line = ops
        .iter()
        .position(|op| matches!(op, DrawOp::Line { .. }))
        .unwrap_or(ops.len());
    let last_circle = ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::Circle { .. }))
        .expect("populated field must draw circles");
    assert!(last_circle < first_line);
}

#[test]
fn connection_alphas_never_exceed_peak() {
    let mut field = Field::with_seed(600.0, 400.0, 21);
    let pointer = PointerState::centered(600.0, 400.0);
    let renderer = Renderer::new();
    let mut rec = Recorder::new();

    for _ in 0..50 {
        field.step(pointer.get());
        renderer.draw(&field, &mut rec);
        for op in rec.ops() {
            if let DrawOp::Line { alpha, .. } = op {
                assert!(*alpha > 0.0 && *alpha <= plexus::render::CONNECTION_ALPHA);
            }
        }
    }
}

#[test]
fn long_run_keeps_every_invariant() {
    let mut field = Field::with_seed(800.0, 600.0, 77);
    let radii: Vec<f32> = field.particles().iter().map(|p| p.radius).collect();
    let opacities: Vec<f32> = field.particles().iter().map(|p| p.opacity).collect();
    let mut pointer = PointerState::centered(800.0, 600.0);

    for frame in 0..1_000 {
        pointer.set(Vec2::new((frame % 800) as f32, (frame % 600) as f32));
        field.step(pointer.get());
    }

    for (i, p) in field.particles().iter().enumerate() {
        assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
        // Radius and opacity are fixed at spawn, never mutated.
        assert_eq!(p.radius, radii[i]);
        assert_eq!(p.opacity, opacities[i]);
        // Reflection only flips signs, so speed magnitude is preserved.
        assert!(p.velocity.x.abs() < 0.2 && p.velocity.y.abs() < 0.2);
    }
}
