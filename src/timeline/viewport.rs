//! Zoom and scroll state of the timeline.
//!
//! The viewport owns every derived value the renderer and hit-testing read:
//! pixels per second, the left/right/center bound times, the axis tick times
//! and the scrollbar geometry. Each mutator recomputes all of them before
//! returning, so a redraw never sees a half-updated viewport.

use crate::state::{ScreenLocation, TimelineConfig, Timestamp};

use super::mapper::CoordinateMapper;

/// Smallest left-bound change that counts as a scroll.
const BOUND_EPSILON: f64 = 1e-9;

/// Horizontal scrollbar geometry, in scrollbar units (pixels at the current zoom).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub value: i64,
    pub maximum: i64,
    pub small_change: i64,
    pub large_change: i64,
    pub visible: bool,
}

impl ScrollState {
    /// Largest value the thumb can reach.
    pub fn max_value(&self) -> i64 {
        (self.maximum - self.large_change).max(0)
    }

    /// Whether the thumb sits at its rightmost position.
    pub fn at_end(&self) -> bool {
        self.value >= self.max_value()
    }
}

/// Visible window of the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    config: TimelineConfig,
    /// Control size in pixels
    width: f64,
    height: f64,
    /// Seconds visible at the minimum control width
    time_width: f64,
    zoom_level: i32,
    left_bound: f64,
    right_bound: f64,
    center_bound: f64,
    pixels_per_second: f64,
    playhead_time: f64,
    video_length: f64,
    draw_location_labels: bool,
    tick_times: Vec<Timestamp>,
    scroll: ScrollState,
}

impl Viewport {
    pub fn new(config: TimelineConfig, width: f64, height: f64) -> Self {
        let config = config.sanitized();
        let zoom_level = config.zoom.default_level;
        let time_width = config.default_time_width;
        let mut viewport = Self {
            config,
            width: width.max(0.0),
            height: height.max(0.0),
            time_width,
            zoom_level,
            left_bound: 0.0,
            right_bound: 0.0,
            center_bound: 0.0,
            pixels_per_second: 0.0,
            playhead_time: 0.0,
            video_length: 0.0,
            draw_location_labels: true,
            tick_times: Vec::new(),
            scroll: ScrollState::default(),
        };
        viewport.recompute(0.0);
        viewport
    }

    /// Control width at which `default_time_width` seconds fill the caption area exactly.
    pub fn natural_width(config: &TimelineConfig) -> f64 {
        config.minimum_timeline_width + config.location_label_width + 2.0
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn time_width(&self) -> f64 {
        self.time_width
    }

    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    pub fn left_bound(&self) -> f64 {
        self.left_bound
    }

    pub fn right_bound(&self) -> f64 {
        self.right_bound
    }

    pub fn center_bound(&self) -> f64 {
        self.center_bound
    }

    pub fn pixels_per_second(&self) -> f64 {
        self.pixels_per_second
    }

    pub fn playhead_time(&self) -> f64 {
        self.playhead_time
    }

    pub fn video_length(&self) -> f64 {
        self.video_length
    }

    pub fn draws_location_labels(&self) -> bool {
        self.draw_location_labels
    }

    /// Axis label times, spaced half a time width apart.
    pub fn tick_times(&self) -> &[Timestamp] {
        &self.tick_times
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// X where caption time zero of the visible window starts.
    pub fn caption_origin_x(&self) -> f64 {
        if self.draw_location_labels {
            self.config.location_label_width
        } else {
            0.0
        }
    }

    /// Width available for drawing captions.
    pub fn available_width(&self) -> f64 {
        let width = if self.draw_location_labels {
            self.width - self.config.location_label_width - 3.0
        } else {
            self.width - 2.0
        };
        width.max(0.0)
    }

    /// Height of the caption rows, below the playhead bar and above the scrollbar.
    pub fn drawable_height(&self) -> f64 {
        let mut height = self.height - self.config.playhead_bar_height();
        if self.scroll.visible {
            height -= self.config.scrollbar_height;
        }
        height.max(0.0)
    }

    pub fn row_height(&self) -> f64 {
        self.drawable_height() / ScreenLocation::COUNT as f64
    }

    /// Snapshot of the time/pixel mapping for the current state.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper {
            left_bound: self.left_bound,
            pixels_per_second: self.pixels_per_second,
            origin_x: self.caption_origin_x(),
            bar_height: self.config.playhead_bar_height(),
            row_height: self.row_height(),
        }
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    fn time_width_for_level(&self, level: i32) -> f64 {
        let steps = self.config.zoom.default_level - level;
        self.config.default_time_width * self.config.zoom.multiplier.powi(steps)
    }

    fn apply_zoom_level(&mut self, level: i32) {
        let level = level.clamp(self.config.zoom.min_level, self.config.zoom.max_level);
        self.zoom_level = level;
        self.time_width = self.time_width_for_level(level);
    }

    /// Jump to a zoom level, clamped to the configured range, keeping the left bound.
    pub fn set_zoom_level(&mut self, level: i32) -> bool {
        let before = self.zoom_level;
        self.apply_zoom_level(level);
        if self.zoom_level == before {
            return false;
        }
        let left = if self.video_length < self.time_width {
            0.0
        } else {
            self.left_bound
        };
        self.recompute(left);
        log::debug!("Timeline zoom level {} ({}s)", self.zoom_level, self.time_width);
        true
    }

    /// Halve the time width and centre the window on the playhead.
    pub fn zoom_in(&mut self) -> bool {
        if self.zoom_level >= self.config.zoom.max_level {
            return false;
        }
        self.apply_zoom_level(self.zoom_level + 1);
        self.recompute(self.playhead_time - self.time_width / 2.0);
        log::debug!("Timeline zoom in to level {}", self.zoom_level);
        true
    }

    /// Double the time width, keeping the left bound unless the whole video now fits.
    pub fn zoom_out(&mut self) -> bool {
        if self.zoom_level <= self.config.zoom.min_level {
            return false;
        }
        self.apply_zoom_level(self.zoom_level - 1);
        let left = if self.video_length < self.time_width {
            0.0
        } else {
            self.left_bound
        };
        self.recompute(left);
        log::debug!("Timeline zoom out to level {}", self.zoom_level);
        true
    }

    /// Back to the default zoom, centred on the playhead.
    pub fn zoom_reset(&mut self) {
        self.apply_zoom_level(self.config.zoom.default_level);
        self.recompute(self.playhead_time - self.time_width / 2.0);
    }

    // =========================================================================
    // Layout and external state
    // =========================================================================

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.recompute(self.left_bound);
    }

    /// Change the video length. A video shorter than the time width snaps
    /// the window back to the origin, since there is nothing left to scroll.
    pub fn set_video_length(&mut self, video_length: f64) {
        self.video_length = if video_length.is_finite() {
            video_length.max(0.0)
        } else {
            0.0
        };
        if self.video_length < self.time_width {
            self.recompute(0.0);
        } else {
            self.update_scrollbar();
        }
    }

    pub fn set_playhead_time(&mut self, time: f64) {
        self.playhead_time = if time.is_finite() { time.max(0.0) } else { 0.0 };
    }

    pub fn toggle_location_labels(&mut self) {
        self.draw_location_labels = !self.draw_location_labels;
        self.recompute(self.left_bound);
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Move the visible window so it starts at `time` (clamped to zero).
    pub fn set_left_bound(&mut self, time: f64) {
        self.set_bounds(time);
        self.update_tick_times();
        self.sync_scroll_value();
    }

    /// Scroll to a scrollbar position in `[0, max_value]`.
    pub fn scroll_to(&mut self, value: i64) {
        let value = value.clamp(0, self.scroll.max_value());
        self.scroll.value = value;
        if value == 0 || self.scroll.maximum <= 0 {
            // exact zero: no rounding drift at the origin
            self.set_bounds(0.0);
        } else {
            let fraction = value as f64 / self.scroll.maximum as f64;
            self.set_bounds(self.video_length * fraction);
        }
        self.update_tick_times();
    }

    /// Scroll by a wheel delta in scrollbar units; positive scrolls towards later times.
    pub fn scroll_by_wheel(&mut self, delta: i64) -> bool {
        if !self.scroll.visible {
            return false;
        }
        let target = self.scroll.value.saturating_add(delta);
        self.scroll_to(target);
        true
    }

    /// Follow the playhead during playback.
    ///
    /// The window only moves when `current_time` leaves the inner half of the
    /// visible span, and never once the scroll value is at its maximum. A
    /// hidden scrollbar does not stop it: a control narrower than the minimum
    /// width shows less than a time width even when the whole video is shorter.
    /// Returns whether the window moved.
    pub fn recenter_on_playhead(&mut self, current_time: f64) -> bool {
        self.set_playhead_time(current_time);
        let current_time = self.playhead_time;
        let span = self.right_bound - self.left_bound;
        let margin = span / 4.0;
        let outside_inner_half = current_time < self.left_bound + margin
            || current_time > self.right_bound - margin;

        let mut moved = false;
        if outside_inner_half && !self.scroll.at_end() {
            let before = self.left_bound;
            self.set_bounds(current_time - span / 2.0);
            if (self.left_bound - before).abs() > BOUND_EPSILON {
                self.update_tick_times();
                moved = true;
            }
        }
        self.sync_scroll_value();
        moved
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    fn recompute(&mut self, left_bound: f64) {
        self.pixels_per_second = self.config.minimum_timeline_width / self.time_width;
        self.set_bounds(left_bound);
        self.update_tick_times();
        self.update_scrollbar();
    }

    fn set_bounds(&mut self, left_bound: f64) {
        self.left_bound = if left_bound.is_finite() {
            left_bound.max(0.0)
        } else {
            0.0
        };
        self.right_bound = self.mapper().x_to_time(self.width - 2.0);
        self.center_bound = (self.left_bound + self.right_bound) / 2.0;
    }

    fn update_tick_times(&mut self) {
        let spacing = self.time_width / 2.0;
        let count = ((self.right_bound - self.left_bound) / spacing).ceil().max(0.0) as usize + 2;
        let base = (self.left_bound / spacing).floor() * spacing;
        self.tick_times = (0..count)
            .map(|i| Timestamp::from_seconds(base + i as f64 * spacing))
            .collect();
    }

    fn update_scrollbar(&mut self) {
        let available = self.available_width();
        self.scroll.small_change = (available / 10.0) as i64;
        self.scroll.large_change = available as i64;
        // one extra page so the end of the video stays reachable despite rounding
        self.scroll.maximum = ((self.video_length + self.config.end_time_buffer)
            * self.pixels_per_second
            + self.scroll.large_change as f64) as i64;
        self.scroll.visible = self.video_length >= self.time_width;
        self.sync_scroll_value();
    }

    fn sync_scroll_value(&mut self) {
        if !self.scroll.visible {
            self.scroll.value = 0;
        } else if self.video_length > 0.0 {
            let value = (self.scroll.maximum as f64 * (self.left_bound / self.video_length)).round() as i64;
            self.scroll.value = value.clamp(0, self.scroll.max_value());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport_with_video(video_length: f64) -> Viewport {
        let config = TimelineConfig::default();
        let width = Viewport::natural_width(&config);
        let mut viewport = Viewport::new(config, width, 300.0);
        viewport.set_video_length(video_length);
        viewport
    }

    #[test]
    fn test_defaults() {
        let viewport = viewport_with_video(100.0);
        assert_eq!(viewport.zoom_level(), 10);
        assert_eq!(viewport.time_width(), 10.0);
        assert!((viewport.pixels_per_second() - 92.0).abs() < 1e-9);
        assert_eq!(viewport.left_bound(), 0.0);
        assert!((viewport.right_bound() - 10.0).abs() < 1e-9);
        assert!((viewport.center_bound() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_in_is_bounded() {
        let mut viewport = viewport_with_video(100.0);
        let min_width = viewport.time_width_for_level(13);
        for _ in 0..20 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom_level(), 13);
        assert_eq!(viewport.time_width(), min_width);
        assert_eq!(viewport.time_width(), 1.25);
        assert!(!viewport.zoom_in());
    }

    #[test]
    fn test_zoom_out_is_bounded() {
        let mut viewport = viewport_with_video(100.0);
        for _ in 0..20 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom_level(), 0);
        assert_eq!(viewport.time_width(), 10.0 * 1024.0);
        assert!(!viewport.zoom_out());
    }

    #[test]
    fn test_zoom_out_snaps_to_origin_when_video_fits() {
        let mut viewport = viewport_with_video(15.0);
        viewport.set_left_bound(6.0);
        viewport.zoom_out();
        assert_eq!(viewport.time_width(), 20.0);
        assert_eq!(viewport.left_bound(), 0.0);
        assert!(!viewport.scroll().visible);
    }

    #[test]
    fn test_zoom_in_centres_on_playhead() {
        let mut viewport = viewport_with_video(100.0);
        viewport.set_playhead_time(40.0);
        viewport.zoom_in();
        assert_eq!(viewport.time_width(), 5.0);
        assert!((viewport.left_bound() - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_set_zoom_level_clamps() {
        let mut viewport = viewport_with_video(100.0);
        assert!(viewport.set_zoom_level(99));
        assert_eq!(viewport.zoom_level(), 13);
        assert!(viewport.set_zoom_level(-5));
        assert_eq!(viewport.zoom_level(), 0);
        assert!(!viewport.set_zoom_level(0));
    }

    #[test]
    fn test_left_bound_never_negative() {
        let mut viewport = viewport_with_video(100.0);
        viewport.set_left_bound(-12.0);
        assert_eq!(viewport.left_bound(), 0.0);
        viewport.set_playhead_time(1.0);
        viewport.zoom_reset();
        assert_eq!(viewport.left_bound(), 0.0);
    }

    #[test]
    fn test_right_bound_follows_width() {
        let mut viewport = viewport_with_video(100.0);
        viewport.set_left_bound(20.0);
        let before = viewport.right_bound();
        viewport.resize(viewport.width() + 92.0, 300.0);
        assert!((viewport.right_bound() - (before + 1.0)).abs() < 1e-9);
        assert_eq!(viewport.left_bound(), 20.0);
    }

    #[test]
    fn test_tick_times_cover_window() {
        let mut viewport = viewport_with_video(100.0);
        viewport.set_left_bound(12.0);
        let ticks = viewport.tick_times();
        assert_eq!(ticks[0], Timestamp::from_seconds(10.0));
        assert!(ticks.windows(2).all(|pair| (pair[1] - pair[0] - 5.0).abs() < 1e-9));
        assert!(ticks.last().unwrap().as_seconds() > viewport.right_bound());
        assert_eq!(ticks.len(), 4);
    }

    #[test]
    fn test_scrollbar_geometry() {
        let viewport = viewport_with_video(100.0);
        let scroll = viewport.scroll();
        assert!(scroll.visible);
        assert_eq!(scroll.large_change, 919);
        assert_eq!(scroll.small_change, 91);
        assert_eq!(scroll.maximum, (105.0 * 92.0 + 919.0) as i64);
        assert_eq!(scroll.value, 0);
    }

    #[test]
    fn test_scrollbar_hidden_when_video_fits() {
        let viewport = viewport_with_video(9.0);
        assert!(!viewport.scroll().visible);
        assert_eq!(viewport.scroll().value, 0);
    }

    #[test]
    fn test_scroll_to_maps_fraction_of_video() {
        let mut viewport = viewport_with_video(100.0);
        let maximum = viewport.scroll().maximum;
        viewport.scroll_to(maximum / 4);
        let expected = 100.0 * (maximum / 4) as f64 / maximum as f64;
        assert!((viewport.left_bound() - expected).abs() < 1e-9);
        viewport.scroll_to(0);
        assert_eq!(viewport.left_bound(), 0.0);
    }

    #[test]
    fn test_scroll_by_wheel_clamps_to_range() {
        let mut viewport = viewport_with_video(100.0);
        assert!(viewport.scroll_by_wheel(-500));
        assert_eq!(viewport.scroll().value, 0);
        viewport.scroll_by_wheel(1_000_000);
        assert_eq!(viewport.scroll().value, viewport.scroll().max_value());
    }

    #[test]
    fn test_recenter_near_right_edge_moves_window() {
        let mut viewport = viewport_with_video(100.0);
        assert!(viewport.recenter_on_playhead(9.9));
        assert!(viewport.left_bound() > 0.0);
        assert!((viewport.center_bound() - 9.9).abs() < 1e-9);
        assert_eq!(viewport.playhead_time(), 9.9);
    }

    #[test]
    fn test_recenter_inside_window_is_stable() {
        let mut viewport = viewport_with_video(100.0);
        assert!(!viewport.recenter_on_playhead(5.0));
        assert_eq!(viewport.left_bound(), 0.0);
        assert_eq!(viewport.playhead_time(), 5.0);
    }

    #[test]
    fn test_recenter_stops_at_scroll_end() {
        let mut viewport = viewport_with_video(100.0);
        let end = viewport.scroll().max_value();
        viewport.scroll_to(end);
        let left = viewport.left_bound();
        assert!(!viewport.recenter_on_playhead(viewport.right_bound() - 0.1));
        assert_eq!(viewport.left_bound(), left);
    }

    #[test]
    fn test_recenter_with_hidden_scrollbar_on_narrow_control() {
        let mut viewport = Viewport::new(TimelineConfig::default(), 600.0, 300.0);
        viewport.set_video_length(9.0);
        assert!(!viewport.scroll().visible);
        assert!(viewport.right_bound() < 8.0);

        assert!(viewport.recenter_on_playhead(8.0));
        assert!(viewport.left_bound() <= 8.0 && 8.0 <= viewport.right_bound());

        // back to the start once playback wraps
        assert!(viewport.recenter_on_playhead(0.0));
        assert_eq!(viewport.left_bound(), 0.0);
    }

    #[test]
    fn test_shorter_video_resets_scrolled_window() {
        let mut viewport = viewport_with_video(100.0);
        viewport.set_left_bound(50.0);
        viewport.set_video_length(5.0);
        assert_eq!(viewport.left_bound(), 0.0);
        assert!(!viewport.scroll().visible);
        assert_eq!(viewport.scroll().value, 0);
        assert!(viewport.right_bound() >= 5.0);
    }

    #[test]
    fn test_longer_video_keeps_scrolled_window() {
        let mut viewport = viewport_with_video(100.0);
        viewport.set_left_bound(50.0);
        viewport.set_video_length(200.0);
        assert_eq!(viewport.left_bound(), 50.0);
        assert!(viewport.scroll().visible);
    }

    #[test]
    fn test_toggle_labels_shifts_origin() {
        let mut viewport = viewport_with_video(100.0);
        let right_with_labels = viewport.right_bound();
        viewport.toggle_location_labels();
        assert_eq!(viewport.caption_origin_x(), 0.0);
        assert!(viewport.right_bound() > right_with_labels);
    }

    #[test]
    fn test_drawable_height_accounts_for_scrollbar() {
        let viewport = viewport_with_video(100.0);
        assert_eq!(viewport.drawable_height(), 300.0 - 20.0 - 17.0);
        let viewport = viewport_with_video(5.0);
        assert_eq!(viewport.drawable_height(), 300.0 - 20.0);
    }
}
