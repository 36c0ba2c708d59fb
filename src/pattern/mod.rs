//! Pattern abstraction
//!
//! Patterns are stateful generators. A [`LinearPattern`] fills a virtual pixel
//! buffer of arbitrary resolution which a mapper then rescales onto strip
//! segments. A [`SpatialPattern`] is a function from a 3D point to a color over
//! a cube with boundaries at +/- `resolution` on each axis.
//!
//! Pattern logic can be driven per frame (speed follows the frame rate) or by
//! the frame time, which is the time elapsed since the pattern was activated.

mod grow_then_shrink;
mod growing_sphere;
mod moving_pulse;
mod skipping_spike;

use embassy_time::Duration;
pub use grow_then_shrink::GrowThenShrink;
pub use growing_sphere::GrowingSphere;
pub use moving_pulse::MovingPulse;
pub use skipping_spike::SkippingSpike;

use crate::color::{ColorSource, Palette16, Rgb};
use crate::point::Point;

/// Default half-extent of a spatial pattern's coordinate cube
pub const DEFAULT_SPATIAL_RESOLUTION: u16 = 256;

/// Behaviour shared by every pattern kind
pub trait Pattern {
    /// Reinitialise state for a fresh activation
    fn reset(&mut self) {}

    /// Color source the pattern resolves its colors through
    fn color_source(&self) -> &ColorSource;

    fn color_source_mut(&mut self) -> &mut ColorSource;

    /// Swap the active palette without touching animation state
    fn set_palette(&mut self, palette: Palette16) {
        self.color_source_mut().set_palette(palette);
    }

    /// Restore the palette the pattern was configured with
    fn reset_palette(&mut self) {
        self.color_source_mut().reset_palette();
    }
}

/// Pattern defined on a linear axis of virtual pixels
pub trait LinearPattern: Pattern {
    /// Advance state by one frame and write every virtual pixel
    ///
    /// `pixels` keeps its contents between frames, its length is the
    /// pattern resolution.
    fn frame_action(&mut self, pixels: &mut [Rgb], frame_time: Duration);
}

/// Pattern defined in 3D space
pub trait SpatialPattern: Pattern {
    /// Half-extent of the pattern cube on each axis
    fn resolution(&self) -> u16;

    /// Advance state by one frame
    fn frame_action(&mut self, frame_time: Duration);

    /// Color at a point in pattern coordinates
    ///
    /// Points outside the pattern cube are the pattern's responsibility.
    fn pixel_value(&self, point: Point) -> Rgb;
}
