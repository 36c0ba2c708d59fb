//! Spatial pattern onto positioned strip segments
//!
//! LED positions are moved into pattern coordinates by subtracting an offset
//! and scaling each axis. By default the project bounds are centred on the
//! pattern origin and stretched to fill the pattern cube.

use embassy_time::Duration;

use super::{PatternMapper, put_led};
use crate::bounds::Bounds;
use crate::color::{Palette16, Rgb};
use crate::pattern::SpatialPattern;
use crate::point::Point;
use crate::spatial::SpatialStripSegment;

pub struct SpatialPatternMapper<'a, P: SpatialPattern> {
    pattern: P,
    segments: &'a [SpatialStripSegment<'a>],
    offset: Point,
    scale_factors: Point,
}

impl<'a, P: SpatialPattern> SpatialPatternMapper<'a, P> {
    /// Map `pattern` onto `segments`, fitting the project into the pattern cube
    pub fn new(pattern: P, segments: &'a [SpatialStripSegment<'a>]) -> Self {
        let bounds = Bounds::aggregate(segments);
        let (offset, scale_factors) = if bounds.is_empty() {
            (Point::ORIGIN, Point::splat(1.0))
        } else {
            let span = 2.0 * f32::from(pattern.resolution());
            let scale = bounds
                .magnitude()
                .map(|extent| if extent > 0.0 { span / extent } else { 0.0 });
            (bounds.centre(), scale)
        };
        debug_log!(
            "spatial mapper: offset {:?}, scale {:?}",
            offset,
            scale_factors
        );

        Self {
            pattern,
            segments,
            offset,
            scale_factors,
        }
    }

    /// Use a fixed project point as the pattern origin
    #[must_use]
    pub const fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Use fixed per-axis scale factors
    #[must_use]
    pub const fn with_scale_factors(mut self, scale_factors: Point) -> Self {
        self.scale_factors = scale_factors;
        self
    }

    pub const fn offset(&self) -> Point {
        self.offset
    }

    pub const fn scale_factors(&self) -> Point {
        self.scale_factors
    }

    pub const fn pattern(&self) -> &P {
        &self.pattern
    }

    pub fn pattern_mut(&mut self) -> &mut P {
        &mut self.pattern
    }

    /// Project coordinates to pattern coordinates
    #[inline]
    pub fn project_to_pattern(&self, point: Point) -> Point {
        (point - self.offset).hadamard_product(self.scale_factors)
    }

    /// Sample the pattern for every LED of one segment
    pub fn apply_to_segment(&self, leds: &mut [Rgb], segment: &SpatialStripSegment<'_>) {
        for pos in 0..segment.len() {
            let pattern_pos = self.project_to_pattern(segment.spatial_position(pos));
            put_led(leds, segment.led_id(pos), self.pattern.pixel_value(pattern_pos));
        }
    }
}

impl<P: SpatialPattern> PatternMapper for SpatialPatternMapper<'_, P> {
    fn reset(&mut self) {
        self.pattern.reset();
    }

    fn new_frame(&mut self, leds: &mut [Rgb], frame_time: Duration) {
        self.pattern.frame_action(frame_time);
        for segment in self.segments {
            self.apply_to_segment(leds, segment);
        }
    }

    fn set_palette(&mut self, palette: Palette16) {
        self.pattern.set_palette(palette);
    }

    fn reset_palette(&mut self) {
        self.pattern.reset_palette();
    }
}
