//! Linear pattern onto strip segments
//!
//! The pattern draws into a virtual buffer of `RESOLUTION` pixels which is
//! resampled to the length of every segment. Each LED covers an equal share of
//! the virtual axis and gets the weighted average of the pixels in its share.

use embassy_time::Duration;

use super::{PatternMapper, put_led};
use crate::color::{BLACK, Palette16, Rgb};
use crate::pattern::LinearPattern;
use crate::segment::StripSegment;

pub struct LinearPatternMapper<'a, P: LinearPattern, const RESOLUTION: usize> {
    pattern: P,
    pixels: [Rgb; RESOLUTION],
    segments: &'a [StripSegment],
}

impl<'a, P: LinearPattern, const RESOLUTION: usize> LinearPatternMapper<'a, P, RESOLUTION> {
    /// Map `pattern` onto every segment in `segments`
    ///
    /// # Panics
    ///
    /// Panics if `RESOLUTION` is zero or does not fit a `u16`.
    pub fn new(pattern: P, segments: &'a [StripSegment]) -> Self {
        assert!(RESOLUTION > 0, "pattern resolution must be at least 1");
        assert!(
            RESOLUTION <= usize::from(u16::MAX),
            "pattern resolution must fit a u16"
        );
        debug_log!(
            "linear mapper: resolution {}, {} segments",
            RESOLUTION,
            segments.len()
        );
        Self {
            pattern,
            pixels: [BLACK; RESOLUTION],
            segments,
        }
    }

    pub const fn pattern(&self) -> &P {
        &self.pattern
    }

    pub fn pattern_mut(&mut self) -> &mut P {
        &mut self.pattern
    }

    /// Virtual pixels of the last frame
    pub const fn pixels(&self) -> &[Rgb; RESOLUTION] {
        &self.pixels
    }

    pub const fn segments(&self) -> &'a [StripSegment] {
        self.segments
    }

    /// Resample the virtual pixels onto one segment
    pub fn apply_to_segment(&self, leds: &mut [Rgb], segment: &StripSegment) {
        resample(&self.pixels, segment, leds);
    }
}

impl<P: LinearPattern, const RESOLUTION: usize> PatternMapper
    for LinearPatternMapper<'_, P, RESOLUTION>
{
    fn reset(&mut self) {
        self.pixels = [BLACK; RESOLUTION];
        self.pattern.reset();
    }

    fn new_frame(&mut self, leds: &mut [Rgb], frame_time: Duration) {
        self.pattern.frame_action(&mut self.pixels, frame_time);
        for segment in self.segments {
            resample(&self.pixels, segment, leds);
        }
    }

    fn set_palette(&mut self, palette: Palette16) {
        self.pattern.set_palette(palette);
    }

    fn reset_palette(&mut self) {
        self.pattern.reset_palette();
    }
}

/// Resample `pixels` to the segment length and write the result
fn resample(pixels: &[Rgb], segment: &StripSegment, leds: &mut [Rgb]) {
    let resolution = pixels.len();
    let seg_len = usize::from(segment.len());

    if resolution == seg_len {
        for (pos, &color) in (0..segment.len()).zip(pixels) {
            put_led(leds, segment.led_id(pos), color);
        }
    } else if resolution % seg_len == 0 {
        let step = resolution / seg_len;
        for (pos, chunk) in (0..segment.len()).zip(pixels.chunks_exact(step)) {
            put_led(leds, segment.led_id(pos), average(chunk));
        }
    } else {
        for pos in 0..segment.len() {
            let color = weighted_average(pixels, u32::from(segment.len()), u32::from(pos));
            put_led(leds, segment.led_id(pos), color);
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn average(pixels: &[Rgb]) -> Rgb {
    let count = pixels.len() as u32;
    let (r, g, b) = pixels.iter().fold((0u32, 0u32, 0u32), |(r, g, b), px| {
        (
            r + u32::from(px.r),
            g + u32::from(px.g),
            b + u32::from(px.b),
        )
    });
    Rgb {
        r: (r / count) as u8,
        g: (g / count) as u8,
        b: (b / count) as u8,
    }
}

/// Color of LED `pos` of a segment with `seg_len` LEDs
///
/// Every LED spans `resolution` weight units and every virtual pixel spans
/// `seg_len` units of the same axis. Weights of one LED add up to exactly
/// `resolution`.
#[allow(clippy::cast_possible_truncation)]
fn weighted_average(pixels: &[Rgb], seg_len: u32, pos: u32) -> Rgb {
    let resolution = pixels.len() as u32;
    let last = pixels.len() - 1;

    let mut index = (pos * resolution / seg_len) as usize;
    let consumed = pos * resolution - index as u32 * seg_len;
    let mut weight = (seg_len - consumed).min(resolution);
    let mut remaining = resolution;
    let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);

    while remaining > 0 {
        let px = pixels[index.min(last)];
        r += weight * u32::from(px.r);
        g += weight * u32::from(px.g);
        b += weight * u32::from(px.b);

        remaining -= weight;
        index += 1;
        weight = remaining.min(seg_len);
    }

    Rgb {
        r: (r / resolution) as u8,
        g: (g / resolution) as u8,
        b: (b / resolution) as u8,
    }
}
