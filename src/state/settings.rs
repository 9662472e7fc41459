use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use super::ScreenLocation;
use crate::error::ProjectError;

/// File name of the optional timeline configuration in the working directory.
pub const CONFIG_FILE_NAME: &str = "timeline.json";

/// Zoom steps for the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Factor the time width is multiplied/divided by per zoom step
    pub multiplier: f64,
    /// Level used on startup and by zoom reset
    pub default_level: i32,
    /// Most zoomed out level
    pub min_level: i32,
    /// Most zoomed in level
    pub max_level: i32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            multiplier: 2.0,
            default_level: 10,
            min_level: 0,
            max_level: 13,
        }
    }
}

/// Tuning values for the timeline, owned by its viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Width in pixels that `default_time_width` seconds span
    pub minimum_timeline_width: f64,
    /// Seconds visible at the minimum width and default zoom
    pub default_time_width: f64,
    /// Seconds of scrollable space after the end of the video
    pub end_time_buffer: f64,
    pub zoom: ZoomConfig,
    /// Half the width of the playhead triangle; the playhead bar is twice this tall
    pub playhead_half_width: f64,
    /// Distance from a caption edge, in pixels, that still grabs the edge
    pub caption_selection_px: f64,
    /// How far past the control edges a caption rectangle may be drawn
    pub out_of_bounds_draw_limit: f64,
    /// Width of the location label column
    pub location_label_width: f64,
    /// Label text per location row, top to bottom
    pub location_labels: Vec<String>,
    /// Height of the horizontal scrollbar when it is shown
    pub scrollbar_height: f64,
    /// Captions shorter than this many seconds are not drawn
    pub min_drawn_duration: f64,
    /// Width of the box each axis time label is centred in
    pub tick_label_width: f64,
    /// Playback poll interval in milliseconds
    pub playback_tick_ms: u64,
}

fn default_location_labels() -> Vec<String> {
    [
        "Top Left",
        "Top Center",
        "Top Right",
        "Middle Left",
        "Middle Center",
        "Middle Right",
        "Bottom Left",
        "Bottom Center",
        "Bottom Right",
    ]
    .iter()
    .map(|label| label.to_string())
    .collect()
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            minimum_timeline_width: 920.0,
            default_time_width: 10.0,
            end_time_buffer: 5.0,
            zoom: ZoomConfig::default(),
            playhead_half_width: 10.0,
            caption_selection_px: 3.0,
            out_of_bounds_draw_limit: 5.0,
            location_label_width: 95.0,
            location_labels: default_location_labels(),
            scrollbar_height: 17.0,
            min_drawn_duration: 0.1,
            tick_label_width: 70.0,
            playback_tick_ms: 10,
        }
    }
}

impl TimelineConfig {
    /// Height of the playhead bar along the top of the timeline.
    pub fn playhead_bar_height(&self) -> f64 {
        self.playhead_half_width * 2.0
    }

    /// Label for a location row.
    pub fn location_label(&self, location: ScreenLocation) -> &str {
        self.location_labels
            .get(location.row())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };
        let config: TimelineConfig = serde_json::from_str(&json)?;
        Ok(config.sanitized())
    }

    /// Replace unusable values with defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.minimum_timeline_width > 0.0) {
            self.minimum_timeline_width = defaults.minimum_timeline_width;
        }
        if !(self.default_time_width > 0.0) {
            self.default_time_width = defaults.default_time_width;
        }
        if !(self.tick_label_width > 0.0) {
            self.tick_label_width = defaults.tick_label_width;
        }
        if !(self.zoom.multiplier > 1.0) {
            self.zoom.multiplier = defaults.zoom.multiplier;
        }
        if self.zoom.min_level > self.zoom.max_level {
            self.zoom.min_level = defaults.zoom.min_level;
            self.zoom.max_level = defaults.zoom.max_level;
        }
        self.zoom.default_level = self
            .zoom
            .default_level
            .clamp(self.zoom.min_level, self.zoom.max_level);
        self.end_time_buffer = self.end_time_buffer.max(0.0);
        self.location_labels.resize(ScreenLocation::COUNT, String::new());
        if self.playback_tick_ms == 0 {
            self.playback_tick_ms = defaults.playback_tick_ms;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimelineConfig::default();
        assert_eq!(config.playhead_bar_height(), 20.0);
        assert_eq!(config.location_labels.len(), 9);
        assert_eq!(config.location_label(ScreenLocation::MiddleRight), "Middle Right");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TimelineConfig =
            serde_json::from_str(r#"{"default_time_width": 20.0, "zoom": {"max_level": 12}}"#).unwrap();
        assert_eq!(config.default_time_width, 20.0);
        assert_eq!(config.zoom.max_level, 12);
        assert_eq!(config.zoom.multiplier, 2.0);
        assert_eq!(config.minimum_timeline_width, 920.0);
    }

    #[test]
    fn test_sanitized_repairs_values() {
        let mut config = TimelineConfig::default();
        config.zoom.multiplier = 0.5;
        config.zoom.default_level = 99;
        config.location_labels.truncate(3);
        config.playback_tick_ms = 0;
        config.tick_label_width = -1.0;
        let config = config.sanitized();
        assert_eq!(config.zoom.multiplier, 2.0);
        assert_eq!(config.zoom.default_level, 13);
        assert_eq!(config.location_labels.len(), 9);
        assert_eq!(config.playback_tick_ms, 10);
        assert_eq!(config.tick_label_width, 70.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        assert_eq!(TimelineConfig::load(&path).unwrap(), TimelineConfig::default());
    }
}
