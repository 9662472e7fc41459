use crate::state::ScreenLocation;

/// Converts between timeline pixels and caption time/location.
///
/// A snapshot taken from the viewport; it goes stale as soon as the viewport
/// zooms, scrolls or resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    pub left_bound: f64,
    pub pixels_per_second: f64,
    /// X of `left_bound`
    pub origin_x: f64,
    /// Height of the playhead bar above the rows
    pub bar_height: f64,
    pub row_height: f64,
}

impl CoordinateMapper {
    /// Time at control x.
    pub fn x_to_time(&self, x: f64) -> f64 {
        if self.pixels_per_second <= 0.0 {
            return self.left_bound;
        }
        self.left_bound + (x - self.origin_x) / self.pixels_per_second
    }

    /// Control x of a time.
    pub fn time_to_x(&self, time: f64) -> f64 {
        self.origin_x + (time - self.left_bound) * self.pixels_per_second
    }

    /// Location row under control y. Above or below the rows clamps to the first or last row.
    pub fn y_to_location(&self, y: f64) -> ScreenLocation {
        if !(self.row_height > 0.0) {
            return ScreenLocation::TopLeft;
        }
        let row = ((y - self.bar_height) / self.row_height).floor();
        ScreenLocation::from_row(row as i64)
    }

    /// Y of the top of a location row.
    pub fn row_top(&self, location: ScreenLocation) -> f64 {
        self.bar_height + location.row() as f64 * self.row_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimelineConfig;
    use crate::timeline::viewport::Viewport;
    use proptest::prelude::*;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper {
            left_bound: 30.0,
            pixels_per_second: 92.0,
            origin_x: 95.0,
            bar_height: 20.0,
            row_height: 30.0,
        }
    }

    #[test]
    fn test_origin_maps_to_left_bound() {
        let mapper = mapper();
        assert_eq!(mapper.x_to_time(95.0), 30.0);
        assert_eq!(mapper.time_to_x(31.0), 187.0);
    }

    #[test]
    fn test_rows() {
        let mapper = mapper();
        assert_eq!(mapper.y_to_location(20.0), ScreenLocation::TopLeft);
        assert_eq!(mapper.y_to_location(49.9), ScreenLocation::TopLeft);
        assert_eq!(mapper.y_to_location(50.0), ScreenLocation::TopCenter);
        assert_eq!(mapper.y_to_location(20.0 + 30.0 * 8.5), ScreenLocation::BottomRight);
        assert_eq!(mapper.y_to_location(5000.0), ScreenLocation::BottomRight);
        assert_eq!(mapper.y_to_location(-50.0), ScreenLocation::TopLeft);
        assert_eq!(mapper.row_top(ScreenLocation::MiddleLeft), 110.0);
    }

    #[test]
    fn test_degenerate_rows() {
        let mapper = CoordinateMapper {
            row_height: 0.0,
            ..mapper()
        };
        assert_eq!(mapper.y_to_location(100.0), ScreenLocation::TopLeft);
    }

    proptest! {
        #[test]
        fn x_and_time_are_inverse(
            left in 0.0f64..10_000.0,
            pps in 0.1f64..10_000.0,
            x in -2_000.0f64..5_000.0,
        ) {
            let mapper = CoordinateMapper {
                left_bound: left,
                pixels_per_second: pps,
                ..mapper()
            };
            let back = mapper.time_to_x(mapper.x_to_time(x));
            prop_assert!((back - x).abs() < 1e-6 * (1.0 + x.abs()));
        }

        /// Times inside the visible window survive time -> x -> time.
        #[test]
        fn time_and_x_are_inverse_in_visible_window(
            level in 0i32..=13,
            left in 0.0f64..1_000.0,
            fraction in 0.0f64..=1.0,
            labels in any::<bool>(),
        ) {
            let config = TimelineConfig::default();
            let width = Viewport::natural_width(&config);
            let mut viewport = Viewport::new(config, width, 300.0);
            viewport.set_video_length(10_000.0);
            viewport.set_zoom_level(level);
            if !labels {
                viewport.toggle_location_labels();
            }
            viewport.set_left_bound(left);

            let span = viewport.right_bound() - viewport.left_bound();
            let time = viewport.left_bound() + fraction * span;
            let mapper = viewport.mapper();
            let back = mapper.x_to_time(mapper.time_to_x(time));
            prop_assert!((back - time).abs() < 1e-9 * (1.0 + time.abs()));
        }

        #[test]
        fn every_y_maps_to_a_row(y in -1_000.0f64..1_000.0) {
            let location = mapper().y_to_location(y);
            prop_assert!(location.row() < ScreenLocation::COUNT);
        }
    }
}
