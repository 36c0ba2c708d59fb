#![no_std]

/// Debug logging, printed over `esp-println` with the `esp32-log` feature
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        let _ = format_args!($($arg)*);
    }};
}

pub mod bounds;
pub mod color;
pub mod controller;
pub mod mapper;
pub mod math8;
pub mod pattern;
pub mod point;
pub mod runner;
pub mod segment;
pub mod spatial;

pub use bounds::Bounds;
pub use controller::{FrameResult, PatternController};
pub use mapper::{
    LinearPatternMapper, LinearToSpatialConfig, LinearToSpatialPatternMapper,
    MultiplePatternMapper, PatternMapper, SpatialPatternMapper,
};
pub use pattern::{LinearPattern, Pattern, SpatialPattern};
pub use point::Point;
pub use runner::{MappingRunner, RunnerConfig};
pub use segment::{SegmentError, StripSegment};
pub use spatial::SpatialStripSegment;

pub use color::{ColorPicker, ColorSource, Hsv, Palette16, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push rendered frames to the hardware.
/// The pattern controller is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
