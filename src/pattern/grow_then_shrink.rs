//! Grow then shrink
//!
//! Extends the head to the end of the axis, then retracts the tail, then runs
//! the same way back.

use embassy_time::Duration;

use super::{LinearPattern, Pattern};
use crate::color::{BLACK, ColorPicker, ColorSource, RAINBOW_PALETTE, Rgb};

#[derive(Debug, Clone)]
pub struct GrowThenShrink {
    head_pos: u16,
    tail_pos: u16,
    /// Running back toward the start of the axis
    reverse: bool,
    colors: ColorSource,
}

impl Default for GrowThenShrink {
    fn default() -> Self {
        Self::new(ColorPicker::palette(RAINBOW_PALETTE))
    }
}

impl GrowThenShrink {
    pub const fn new(picker: ColorPicker) -> Self {
        Self {
            head_pos: 0,
            tail_pos: 0,
            reverse: false,
            colors: ColorSource::new(picker),
        }
    }

    /// Lit range as `(tail, head)`, inclusive
    pub const fn lit_range(&self) -> (u16, u16) {
        (self.tail_pos, self.head_pos)
    }

    fn advance(&mut self, last: u16) {
        if self.reverse {
            if self.tail_pos > 0 {
                self.tail_pos -= 1;
            } else if self.head_pos > 0 {
                self.head_pos -= 1;
            } else {
                self.reverse = false;
            }
        } else if self.head_pos < last {
            self.head_pos += 1;
        } else if self.tail_pos < self.head_pos {
            self.tail_pos += 1;
        } else {
            self.reverse = true;
        }
    }
}

impl Pattern for GrowThenShrink {
    fn reset(&mut self) {
        self.head_pos = 0;
        self.tail_pos = 0;
        self.reverse = false;
    }

    fn color_source(&self) -> &ColorSource {
        &self.colors
    }

    fn color_source_mut(&mut self) -> &mut ColorSource {
        &mut self.colors
    }
}

impl LinearPattern for GrowThenShrink {
    #[allow(clippy::cast_possible_truncation)]
    fn frame_action(&mut self, pixels: &mut [Rgb], _frame_time: Duration) {
        if pixels.is_empty() {
            return;
        }
        let num_pixels = pixels.len().min(usize::from(u16::MAX)) as u16;
        self.advance(num_pixels - 1);

        for (i, pixel) in (0..num_pixels).zip(pixels.iter_mut()) {
            *pixel = if (self.tail_pos..=self.head_pos).contains(&i) {
                let hue = ((u32::from(i) * 255) / u32::from(num_pixels)) as u8;
                self.colors.color(hue, u8::MAX)
            } else {
                BLACK
            };
        }
    }
}
