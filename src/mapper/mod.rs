//! Pattern mappers
//!
//! A mapper owns a pattern and translates its output onto the physical LED
//! buffer through the strip segments it was configured with. Mappers with a
//! linear pattern rescale the virtual pixel buffer, mappers with a spatial
//! pattern sample the pattern at the position of every LED.

mod linear;
mod linear_to_spatial;
mod multiple;
mod spatial;

use embassy_time::Duration;
pub use linear::LinearPatternMapper;
pub use linear_to_spatial::{LinearToSpatialConfig, LinearToSpatialPatternMapper};
pub use multiple::MultiplePatternMapper;
pub use spatial::SpatialPatternMapper;

use crate::color::{Palette16, Rgb};

/// Renders a pattern onto a LED buffer
///
/// The LED buffer is indexed by strip LED id and must be at least as long as
/// the strips the mapper's segments address. LEDs outside the buffer are
/// skipped. LEDs not covered by any segment are left untouched.
pub trait PatternMapper {
    /// Reset the pattern for a fresh activation
    fn reset(&mut self);

    /// Advance the pattern one frame and write its colors to `leds`
    ///
    /// `frame_time` is the time elapsed since the mapping was activated.
    fn new_frame(&mut self, leds: &mut [Rgb], frame_time: Duration);

    /// Override the palette of the mapped pattern
    fn set_palette(&mut self, palette: Palette16);

    /// Restore the pattern's configured palette
    fn reset_palette(&mut self);
}

/// Write `color` at `led_id` when the buffer reaches that far
///
/// A buffer shorter than the strip is allowed and renders the head of the
/// strip only. LED ids past its end are not written.
#[inline]
pub(crate) fn put_led(leds: &mut [Rgb], led_id: u16, color: Rgb) {
    if let Some(led) = leds.get_mut(usize::from(led_id)) {
        *led = color;
    }
}
