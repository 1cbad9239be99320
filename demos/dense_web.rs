//! # Dense Web Demo
//!
//! Raises the population cap and the connection radius for a thick plexus
//! web. Both knobs feed the O(n^2) pair pass, so this is also a handy
//! worst-case stress run.
//!
//! Run with: `cargo run --example dense_web`

use plexus::Viewer;

fn main() {
    if let Err(e) = Viewer::new()
        .with_title("plexus: dense web")
        .with_size(1280, 720)
        .with_max_particles(300)
        .with_connection_radius(130.0)
        .run()
    {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
