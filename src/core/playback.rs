//! Playback engine seam.
//!
//! The timeline only needs a clock it can read, pause, seek and resume.
//! [`ClockPlayback`] is a wall-clock stand-in for a real video player: it
//! advances by however much time the host tick says has passed.

use std::time::Duration;

/// A video player the timeline follows.
pub trait PlaybackEngine {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    /// Length of the loaded video in seconds.
    fn video_length(&self) -> f64;
    fn is_playing(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);
    /// Jump to a position; clamped to the video.
    fn seek(&mut self, time_seconds: f64);

    fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }
}

/// Playback driven by elapsed wall-clock time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClockPlayback {
    position: f64,
    length: f64,
    playing: bool,
}

impl ClockPlayback {
    pub fn new(length: f64) -> Self {
        Self {
            position: 0.0,
            length: length.max(0.0),
            playing: false,
        }
    }

    pub fn set_video_length(&mut self, length: f64) {
        self.length = length.max(0.0);
        self.position = self.position.min(self.length);
    }

    /// Advance the clock. Playback stops at the end of the video.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.playing {
            return;
        }
        self.position = (self.position + elapsed.as_secs_f64()).min(self.length);
        if self.position >= self.length {
            self.playing = false;
        }
    }
}

impl PlaybackEngine for ClockPlayback {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn video_length(&self) -> f64 {
        self.length
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        if self.position >= self.length {
            self.position = 0.0;
        }
        self.playing = self.length > 0.0;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, time_seconds: f64) {
        let time = if time_seconds.is_finite() { time_seconds } else { 0.0 };
        self.position = time.clamp(0.0, self.length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_only_while_playing() {
        let mut clock = ClockPlayback::new(10.0);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.current_time(), 0.0);
        clock.play();
        clock.advance(Duration::from_millis(2500));
        assert!((clock.current_time() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_stops_at_end() {
        let mut clock = ClockPlayback::new(1.0);
        clock.play();
        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.current_time(), 1.0);
        assert!(!clock.is_playing());

        // Playing again from the end restarts
        clock.play();
        assert_eq!(clock.current_time(), 0.0);
        assert!(clock.is_playing());
    }

    #[test]
    fn test_seek_clamps() {
        let mut clock = ClockPlayback::new(10.0);
        clock.seek(-3.0);
        assert_eq!(clock.current_time(), 0.0);
        clock.seek(42.0);
        assert_eq!(clock.current_time(), 10.0);
        clock.seek(f64::NAN);
        assert_eq!(clock.current_time(), 0.0);
    }

    #[test]
    fn test_toggle_play() {
        let mut clock = ClockPlayback::new(10.0);
        clock.toggle_play();
        assert!(clock.is_playing());
        clock.toggle_play();
        assert!(!clock.is_playing());
    }

    #[test]
    fn test_empty_video_never_plays() {
        let mut clock = ClockPlayback::new(0.0);
        clock.play();
        assert!(!clock.is_playing());
    }
}
