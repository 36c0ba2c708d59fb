//! Color types and the indirection between pattern values and concrete RGB
//!
//! Patterns express colors as a hue/brightness pair and resolve them through a
//! [`ColorSource`], so palettes can be swapped without touching pattern state.

mod palette;
mod picker;
mod utils;

pub use palette::{
    BlendType, FAIRY_LIGHT_PALETTE, HALLOWEEN_PALETTE, HEAT_PALETTE, Palette16,
    RAINBOW_PALETTE, RETRO_C9_PALETTE, SNOW_PALETTE, WHITE_PALETTE, color_from_palette,
};
pub use picker::{ColorPicker, ColorSource};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{average_light, blend_colors, hsv2rgb, rgb_from_u32, scale_color};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
