//! # Headless Demo
//!
//! Drives the field without a window or GPU: an external loop calls `step`
//! then `draw` once per logical frame, with a `Recorder` standing in for the
//! canvas. This is the embedding shape to copy when the engine should run
//! under someone else's scheduler.
//!
//! Run with: `cargo run --example headless`

use plexus::{Field, PointerState, Recorder, Renderer, Vec2};

fn main() {
    let (width, height) = (800.0, 600.0);
    let mut field = Field::with_seed(width, height, 42);
    let mut pointer = PointerState::centered(width, height);
    let renderer = Renderer::new();
    let mut rec = Recorder::new();

    println!(
        "field {}x{}: {} particles",
        width,
        height,
        field.len()
    );

    for frame in 0..300u32 {
        // Orbit the pointer around the center to stir the field.
        let angle = frame as f32 * 0.02;
        pointer.set(Vec2::new(
            width / 2.0 + 200.0 * angle.cos(),
            height / 2.0 + 150.0 * angle.sin(),
        ));

        field.step(pointer.get());
        renderer.draw(&field, &mut rec);

        if frame % 60 == 0 {
            println!(
                "frame {:3}: {} circles, {} connections",
                frame,
                rec.circle_count(),
                rec.line_count()
            );
        }
    }
}
