//! Pointer position tracking.
//!
//! The field reads a single pointer position at the start of every frame.
//! Move events arrive between frames and simply overwrite the stored value
//! (last-write-wins, no queuing), so the engine always sees the latest known
//! position.

use glam::Vec2;

/// Latest known pointer position over a surface.
///
/// Starts at the surface center so the field behaves sensibly before any
/// movement event has arrived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    position: Vec2,
}

impl PointerState {
    /// Pointer initialized to the center of a `width` x `height` surface.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Record a movement event. Overwrites any previous position.
    #[inline]
    pub fn set(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Latest known position.
    #[inline]
    pub fn get(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_center() {
        let pointer = PointerState::centered(800.0, 600.0);
        assert_eq!(pointer.get(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_last_write_wins() {
        let mut pointer = PointerState::centered(800.0, 600.0);
        pointer.set(Vec2::new(10.0, 20.0));
        pointer.set(Vec2::new(30.0, 40.0));
        assert_eq!(pointer.get(), Vec2::new(30.0, 40.0));
    }
}
