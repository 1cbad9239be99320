//! Frame timing.
//!
//! The simulation itself is frame-based (velocities are in pixels per frame),
//! so timing here is purely diagnostic: frame counting and a periodically
//! refreshed FPS figure that the viewer surfaces in the window title.

use std::time::{Duration, Instant};

/// Frame counter and FPS tracker.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
}

impl Time {
    /// Create a tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Mark the end of a frame. Call once per frame.
    ///
    /// Returns `true` when the FPS figure was refreshed, which the viewer
    /// uses as its cue to update the window title.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            return true;
        }
        false
    }

    /// Seconds since the tracker was created.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Seconds between the last two frames.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second, refreshed every half second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.fps(), 0.0);
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(5));
        time.tick();
        assert_eq!(time.frame(), 1);
        assert!(time.delta() > 0.0);
        assert!(time.elapsed() > 0.0);
    }

    #[test]
    fn test_fps_refresh_cadence() {
        let mut time = Time::new();
        assert!(!time.tick(), "fps must not refresh on the first frame");
    }
}
