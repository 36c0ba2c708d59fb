//! Growing sphere
//!
//! A sphere centred on the pattern origin that grows to the edge of the
//! pattern cube and shrinks back. Hue follows the distance from the centre.

use embassy_time::Duration;

use super::{DEFAULT_SPATIAL_RESOLUTION, Pattern, SpatialPattern};
use crate::color::{BLACK, ColorPicker, ColorSource, RAINBOW_PALETTE, Rgb};
use crate::point::Point;

#[derive(Debug, Clone)]
pub struct GrowingSphere {
    /// Radius change per frame
    speed: u16,
    radius: u16,
    growing: bool,
    resolution: u16,
    colors: ColorSource,
}

impl Default for GrowingSphere {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GrowingSphere {
    pub const fn new(speed: u16) -> Self {
        Self {
            speed,
            radius: 0,
            growing: true,
            resolution: DEFAULT_SPATIAL_RESOLUTION,
            colors: ColorSource::new(ColorPicker::palette(RAINBOW_PALETTE)),
        }
    }

    /// Set the half-extent of the pattern cube
    #[must_use]
    pub const fn with_resolution(mut self, resolution: u16) -> Self {
        self.resolution = resolution;
        self
    }

    #[must_use]
    pub const fn with_picker(mut self, picker: ColorPicker) -> Self {
        self.colors = ColorSource::new(picker);
        self
    }

    pub const fn radius(&self) -> u16 {
        self.radius
    }
}

impl Pattern for GrowingSphere {
    fn reset(&mut self) {
        self.radius = 0;
        self.growing = true;
    }

    fn color_source(&self) -> &ColorSource {
        &self.colors
    }

    fn color_source_mut(&mut self) -> &mut ColorSource {
        &mut self.colors
    }
}

impl SpatialPattern for GrowingSphere {
    fn resolution(&self) -> u16 {
        self.resolution
    }

    fn frame_action(&mut self, _frame_time: Duration) {
        if self.growing {
            self.radius = self.radius.saturating_add(self.speed);
            if self.radius >= self.resolution {
                self.growing = false;
            }
        } else if self.radius <= self.speed {
            self.growing = true;
        } else {
            self.radius -= self.speed;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn pixel_value(&self, point: Point) -> Rgb {
        let distance = point.norm();
        if distance > f32::from(self.radius) {
            return BLACK;
        }
        // Float to int casts saturate, points past the cube edge get hue 255
        let hue = (255.0 * distance / f32::from(self.resolution)) as u8;
        self.colors.color(hue, u8::MAX)
    }
}
