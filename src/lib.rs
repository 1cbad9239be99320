//! # Plexus - ambient particle field engine
//!
//! A 2D particle field that drifts across a surface, shies away from the
//! pointer, and links nearby particles with fading lines. The classic
//! "plexus" background effect, with the simulation core kept separate from
//! any windowing or GPU concern.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plexus::Viewer;
//!
//! fn main() -> Result<(), plexus::ViewerError> {
//!     Viewer::new()
//!         .with_title("ambient field")
//!         .with_size(1280, 720)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Field
//!
//! [`Field`] owns the particles and advances them one logical frame per
//! [`Field::step`] call. Population is derived from surface width (one
//! particle per 8px, capped at [`field::MAX_PARTICLES`]); a resize discards
//! and respawns the whole set. Spawning goes through a seedable RNG, so a
//! field built with [`Field::with_seed`] is fully reproducible.
//!
//! ### Pointer
//!
//! [`PointerState`] holds the latest pointer position, last-write-wins.
//! Particles within 120px of it get a per-frame positional nudge away from
//! the pointer; the nudge never touches stored velocity.
//!
//! ### Rendering
//!
//! [`render::Renderer`] draws a frame onto anything implementing
//! [`render::Canvas`]: every particle as a filled circle, then a line for
//! every pair closer than 90px, alpha fading with distance. The pair pass is
//! O(n^2) on purpose; the population cap is the performance safety valve.
//!
//! ### Driving the loop
//!
//! The engine assumes no scheduling API. [`Viewer`] is the built-in driver
//! (winit window + wgpu renderer, one step+draw per redraw); tests and
//! headless embeddings can call `step` and `draw` themselves with a
//! [`render::Recorder`] as the canvas.

pub mod error;
pub mod field;
mod gpu;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod time;
mod viewer;

pub use error::{GpuError, ViewerError};
pub use field::Field;
pub use glam::Vec2;
pub use particle::Particle;
pub use pointer::PointerState;
pub use render::{Canvas, DrawOp, Recorder, Renderer};
pub use viewer::{Viewer, DEFAULT_ACCENT};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use plexus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ViewerError;
    pub use crate::field::Field;
    pub use crate::particle::Particle;
    pub use crate::pointer::PointerState;
    pub use crate::render::{Canvas, DrawOp, Recorder, Renderer};
    pub use crate::time::Time;
    pub use crate::viewer::Viewer;
    pub use crate::Vec2;
}
