//! Keeps the viewport and the playback engine in step.

use crate::core::playback::PlaybackEngine;

use super::viewport::Viewport;

/// Moves the timeline with playback and pushes committed seeks back to the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayheadSynchronizer;

impl PlayheadSynchronizer {
    /// One playback tick. Returns whether the visible window moved.
    ///
    /// The playhead follows the engine only while it plays, so a paused
    /// timeline keeps whatever the user last dragged it to.
    pub fn tick(engine: &dyn PlaybackEngine, viewport: &mut Viewport) -> bool {
        let length = engine.video_length();
        if (viewport.video_length() - length).abs() > f64::EPSILON {
            viewport.set_video_length(length);
        }
        if !engine.is_playing() {
            return false;
        }
        viewport.recenter_on_playhead(engine.current_time())
    }

    /// Seek the engine to a committed playhead time, pausing around the seek.
    pub fn commit_seek(engine: &mut dyn PlaybackEngine, time_seconds: f64) {
        let was_playing = engine.is_playing();
        if was_playing {
            engine.pause();
        }
        engine.seek(time_seconds);
        if was_playing {
            engine.play();
        }
        log::debug!("Playback seek to {:.2}s (resumed: {})", time_seconds, was_playing);
    }
}
