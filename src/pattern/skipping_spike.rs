//! Skipping spike
//!
//! A spike that swells up in place, fades out, then jumps to a new
//! pseudo-random position on the axis. Hue shifts toward the edges of the
//! spike as they dim.

use embassy_time::Duration;

use super::{LinearPattern, Pattern};
use crate::color::{BLACK, ColorPicker, ColorSource, RAINBOW_PALETTE, Rgb};
use crate::math8::mix64;

const DEFAULT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Clone)]
pub struct SkippingSpike {
    max_width: u8,
    /// Ramp change per frame
    speed: u8,
    pulse_pos: u16,
    /// Current half-width of the spike
    ramp: u8,
    ramp_up: bool,
    seed: u64,
    jumps: u64,
    colors: ColorSource,
}

impl SkippingSpike {
    #[allow(clippy::cast_lossless)]
    pub const fn new(max_width: u8, speed: u8) -> Self {
        Self {
            max_width,
            speed,
            pulse_pos: max_width as u16,
            ramp: 0,
            ramp_up: true,
            seed: DEFAULT_SEED,
            jumps: 0,
            colors: ColorSource::new(ColorPicker::palette(RAINBOW_PALETTE)),
        }
    }

    /// Seed for the jump positions, the same seed gives the same sequence
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_picker(mut self, picker: ColorPicker) -> Self {
        self.colors = ColorSource::new(picker);
        self
    }

    pub const fn pulse_pos(&self) -> u16 {
        self.pulse_pos
    }

    pub const fn ramp(&self) -> u8 {
        self.ramp
    }

    #[allow(clippy::cast_possible_truncation)]
    fn jump(&mut self, num_pixels: u16) {
        self.jumps = self.jumps.wrapping_add(1);
        let margin = u16::from(self.max_width / 4).min(num_pixels - 1);
        let span = u64::from(num_pixels - margin);
        self.pulse_pos = margin + (mix64(self.seed, self.jumps) % span) as u16;
    }

    fn advance(&mut self, num_pixels: u16) {
        if self.ramp_up {
            if self.max_width.saturating_sub(self.ramp) <= self.speed {
                self.ramp_up = false;
            } else {
                self.ramp += self.speed;
            }
        } else if self.ramp <= self.speed {
            self.jump(num_pixels);
            self.ramp_up = true;
        } else {
            self.ramp -= self.speed;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pixel_value(&self, i: u16) -> Rgb {
        let diff = i.abs_diff(self.pulse_pos);
        if diff > u16::from(self.ramp) {
            return BLACK;
        }
        let lum = if self.ramp == 0 {
            u8::MAX
        } else {
            (255 - u32::from(diff) * 255 / u32::from(self.ramp)) as u8
        };
        self.colors.color(255 - lum, lum)
    }
}

impl Default for SkippingSpike {
    fn default() -> Self {
        Self::new(8, 1)
    }
}

impl Pattern for SkippingSpike {
    fn reset(&mut self) {
        self.pulse_pos = u16::from(self.max_width);
        self.ramp = 0;
        self.ramp_up = true;
        self.jumps = 0;
    }

    fn color_source(&self) -> &ColorSource {
        &self.colors
    }

    fn color_source_mut(&mut self) -> &mut ColorSource {
        &mut self.colors
    }
}

impl LinearPattern for SkippingSpike {
    #[allow(clippy::cast_possible_truncation)]
    fn frame_action(&mut self, pixels: &mut [Rgb], _frame_time: Duration) {
        if pixels.is_empty() {
            return;
        }
        let num_pixels = pixels.len().min(usize::from(u16::MAX)) as u16;
        self.advance(num_pixels);

        for (i, pixel) in (0..num_pixels).zip(pixels.iter_mut()) {
            *pixel = self.pixel_value(i);
        }
    }
}
