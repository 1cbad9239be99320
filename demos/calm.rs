//! # Calm Field Demo
//!
//! A sparse, warm-tinted field with short connections. Seeded, so the
//! starting layout is the same on every run.
//!
//! Run with: `cargo run --example calm`

use plexus::Viewer;

fn main() {
    if let Err(e) = Viewer::new()
        .with_title("plexus: calm")
        .with_size(1024, 640)
        .with_seed(7)
        .with_max_particles(80)
        .with_connection_radius(60.0)
        .with_accent([1.0, 0.72, 0.3])
        .run()
    {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
