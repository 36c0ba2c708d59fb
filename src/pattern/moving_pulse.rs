//! Moving pulse
//!
//! A pulse with a bright head and a tapering tail travelling along the axis.
//! The hue changes along the axis.

use embassy_time::Duration;

use super::{LinearPattern, Pattern};
use crate::{
    color::{BLACK, ColorPicker, ColorSource, RAINBOW_PALETTE, Rgb},
    math8::lerp8_by_pos,
};

const DEFAULT_PULSE_LEN: u8 = 3;

#[derive(Debug, Clone)]
pub struct MovingPulse {
    /// Position of the pulse head on the virtual axis
    head_pos: u16,
    /// Length of the tail behind the head
    pulse_len: u8,
    colors: ColorSource,
}

impl Default for MovingPulse {
    fn default() -> Self {
        Self::new(DEFAULT_PULSE_LEN)
    }
}

impl MovingPulse {
    pub const fn new(pulse_len: u8) -> Self {
        Self {
            head_pos: 0,
            pulse_len,
            colors: ColorSource::new(ColorPicker::palette(RAINBOW_PALETTE)),
        }
    }

    /// Use another color picker
    #[must_use]
    pub const fn with_picker(mut self, picker: ColorPicker) -> Self {
        self.colors = ColorSource::new(picker);
        self
    }

    pub const fn head_pos(&self) -> u16 {
        self.head_pos
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pixel_value(&self, num_pixels: u16, i: u16) -> Rgb {
        // Pixels in front of the head or past the tail stay dark
        let Some(behind_head) = self.head_pos.checked_sub(i) else {
            return BLACK;
        };
        if behind_head > u16::from(self.pulse_len) {
            return BLACK;
        }

        let lum = lerp8_by_pos(255, 0, behind_head, u16::from(self.pulse_len) + 1);
        let hue = ((u32::from(i) * 255) / u32::from(num_pixels)) as u8;
        self.colors.color(hue, lum)
    }
}

impl Pattern for MovingPulse {
    fn reset(&mut self) {
        self.head_pos = 0;
    }

    fn color_source(&self) -> &ColorSource {
        &self.colors
    }

    fn color_source_mut(&mut self) -> &mut ColorSource {
        &mut self.colors
    }
}

impl LinearPattern for MovingPulse {
    #[allow(clippy::cast_possible_truncation)]
    fn frame_action(&mut self, pixels: &mut [Rgb], _frame_time: Duration) {
        if pixels.is_empty() {
            return;
        }
        let num_pixels = pixels.len().min(usize::from(u16::MAX)) as u16;
        self.head_pos = (self.head_pos + 1) % num_pixels;

        for (i, pixel) in (0..num_pixels).zip(pixels.iter_mut()) {
            *pixel = self.pixel_value(num_pixels, i);
        }
    }
}
