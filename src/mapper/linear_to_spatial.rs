//! Linear pattern projected onto a straight path through the project
//!
//! The path runs along a direction vector through the centre of the project
//! bounds. Each LED takes the virtual pixel at its distance from the plane
//! that is perpendicular to the path and passes through the path start.
//! Mirrored mode measures distances on both sides of that plane, so with an
//! offset of half the path the pattern mirrors around the project centre.

use embassy_time::Duration;
use libm::{fabsf, roundf};

use super::{PatternMapper, put_led};
use crate::bounds::Bounds;
use crate::color::{BLACK, Palette16, Rgb};
use crate::pattern::LinearPattern;
use crate::point::Point;
use crate::spatial::SpatialStripSegment;

/// Placement of the projection path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearToSpatialConfig {
    /// Shift of the path start along the direction, in project units
    pub offset: f32,
    /// Path length relative to the project extent along the direction
    pub scale: f32,
    /// Measure distances on both sides of the start plane
    pub mirrored: bool,
}

impl LinearToSpatialConfig {
    pub const DEFAULT: Self = Self {
        offset: 0.0,
        scale: 1.0,
        mirrored: true,
    };

    #[must_use]
    pub const fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }
}

impl Default for LinearToSpatialConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub struct LinearToSpatialPatternMapper<'a, P: LinearPattern, const RESOLUTION: usize> {
    pattern: P,
    pixels: [Rgb; RESOLUTION],
    segments: &'a [SpatialStripSegment<'a>],
    direction: Point,
    mirrored: bool,
    path_start: Point,
    path_end: Point,
    path_length: f32,
    /// `direction · path_start`
    plane_eq_d: f32,
    /// `1 / |direction|`
    inv_norm: f32,
    /// Virtual pixels per unit of distance
    res_per_len: f32,
}

impl<'a, P: LinearPattern, const RESOLUTION: usize>
    LinearToSpatialPatternMapper<'a, P, RESOLUTION>
{
    /// Project `pattern` along `direction` across `segments`
    ///
    /// # Panics
    ///
    /// Panics if `RESOLUTION` is zero or `direction` is the zero vector.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        pattern: P,
        segments: &'a [SpatialStripSegment<'a>],
        direction: Point,
        config: LinearToSpatialConfig,
    ) -> Self {
        assert!(RESOLUTION > 0, "pattern resolution must be at least 1");
        let norm = direction.norm();
        assert!(norm > 0.0, "projection direction must not be zero");

        let bounds = Bounds::aggregate(segments);
        let (centre, extent) = if bounds.is_empty() {
            (Point::ORIGIN, Point::ORIGIN)
        } else {
            (bounds.centre(), bounds.magnitude())
        };

        let unit = direction / norm;
        let unscaled_length = (fabsf(direction.x * extent.x)
            + fabsf(direction.y * extent.y)
            + fabsf(direction.z * extent.z))
            / norm;
        let path_start = centre - unit * (unscaled_length / 2.0 - config.offset);
        let path_length = config.scale * unscaled_length;
        let path_end = path_start + unit * path_length;
        let res_per_len = if path_length > 0.0 {
            (RESOLUTION - 1) as f32 / path_length
        } else {
            0.0
        };
        debug_log!(
            "linear to spatial mapper: path {:?} -> {:?}, length {}",
            path_start,
            path_end,
            path_length
        );

        Self {
            pattern,
            pixels: [BLACK; RESOLUTION],
            segments,
            direction,
            mirrored: config.mirrored,
            path_start,
            path_end,
            path_length,
            plane_eq_d: direction.dot(path_start),
            inv_norm: 1.0 / norm,
            res_per_len,
        }
    }

    pub const fn path_start(&self) -> Point {
        self.path_start
    }

    pub const fn path_end(&self) -> Point {
        self.path_end
    }

    pub const fn path_length(&self) -> f32 {
        self.path_length
    }

    pub const fn pattern(&self) -> &P {
        &self.pattern
    }

    pub fn pattern_mut(&mut self) -> &mut P {
        &mut self.pattern
    }

    /// Signed distance of a point from the start plane
    #[inline]
    pub fn distance_from_start(&self, point: Point) -> f32 {
        (self.direction.dot(point) - self.plane_eq_d) * self.inv_norm
    }

    /// Virtual pixel index for a point, `None` when it is off the path
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_index(&self, point: Point) -> Option<usize> {
        let mut distance = self.distance_from_start(point);
        if self.mirrored {
            distance = fabsf(distance);
        } else if distance < 0.0 {
            return None;
        }
        if distance > self.path_length {
            return None;
        }
        let index = roundf(distance * self.res_per_len) as usize;
        Some(index.min(RESOLUTION - 1))
    }

    pub fn apply_to_segment(&self, leds: &mut [Rgb], segment: &SpatialStripSegment<'_>) {
        for pos in 0..segment.len() {
            let color = self
                .pixel_index(segment.spatial_position(pos))
                .map_or(BLACK, |index| self.pixels[index]);
            put_led(leds, segment.led_id(pos), color);
        }
    }
}

impl<P: LinearPattern, const RESOLUTION: usize> PatternMapper
    for LinearToSpatialPatternMapper<'_, P, RESOLUTION>
{
    fn reset(&mut self) {
        self.pixels = [BLACK; RESOLUTION];
        self.pattern.reset();
    }

    fn new_frame(&mut self, leds: &mut [Rgb], frame_time: Duration) {
        self.pattern.frame_action(&mut self.pixels, frame_time);
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
