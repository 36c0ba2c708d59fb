//! 16-entry RGB palettes and palette lookup

use crate::color::{Rgb, blend_colors, rgb_from_u32, scale_color};

/// Palette of 16 evenly spaced RGB entries addressed by a 0-255 index
pub type Palette16 = [Rgb; 16];

/// How colors between two palette entries are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendType {
    /// Blend linearly toward the next entry
    #[default]
    Linear,
    /// Snap to the entry the index falls into
    NoBlend,
}

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

#[allow(clippy::unreadable_literal)]
pub const RAINBOW_PALETTE: Palette16 = hex_palette![
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A,
    0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
];

#[allow(clippy::unreadable_literal)]
pub const HEAT_PALETTE: Palette16 = hex_palette![
    0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600,
    0xFF9900, 0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF,
];

// Warm white with half and quarter brightness steps
const FAIRY: u32 = 0xFF_E4_2D;
const HALF_FAIRY: u32 = (FAIRY & 0xFE_FE_FE) / 2;
const QUARTER_FAIRY: u32 = (FAIRY & 0xFC_FC_FC) / 4;

pub const FAIRY_LIGHT_PALETTE: Palette16 = hex_palette![
    FAIRY, FAIRY, FAIRY, FAIRY,
    HALF_FAIRY, HALF_FAIRY, FAIRY, FAIRY,
    QUARTER_FAIRY, QUARTER_FAIRY, FAIRY, FAIRY,
    FAIRY, FAIRY, FAIRY, FAIRY,
];

// Old-school C9 tree lights
const C9_RED: u32 = 0xB8_04_00;
const C9_ORANGE: u32 = 0x90_2C_02;
const C9_GREEN: u32 = 0x04_60_02;
const C9_BLUE: u32 = 0x07_07_58;
const C9_WHITE: u32 = 0x60_68_20;

pub const RETRO_C9_PALETTE: Palette16 = hex_palette![
    C9_RED, C9_ORANGE, C9_RED, C9_ORANGE,
    C9_ORANGE, C9_RED, C9_ORANGE, C9_RED,
    C9_GREEN, C9_GREEN, C9_GREEN, C9_GREEN,
    C9_BLUE, C9_BLUE, C9_BLUE, C9_WHITE,
];

const PURPLE: u32 = 0x66_11_FF;
const ORANGE: u32 = 0xFF_66_00;
const GREEN: u32 = 0x00_FF_11;
const WHITE: u32 = 0xCC_CC_CC;

pub const HALLOWEEN_PALETTE: Palette16 = hex_palette![
    PURPLE, PURPLE, PURPLE, PURPLE,
    ORANGE, ORANGE, ORANGE, ORANGE,
    PURPLE, PURPLE, PURPLE, PURPLE,
    GREEN, GREEN, GREEN, WHITE,
];

// Soft snowflakes with the occasional bright one
const SNOW: u32 = 0x30_40_48;

pub const SNOW_PALETTE: Palette16 = hex_palette![
    SNOW, SNOW, SNOW, SNOW,
    SNOW, SNOW, SNOW, SNOW,
    SNOW, SNOW, SNOW, SNOW,
    SNOW, SNOW, SNOW, 0xE0_F0_FF,
];

pub const WHITE_PALETTE: Palette16 = [rgb_from_u32(0x80_80_80); 16];

/// Look up a color in a 16-entry palette
///
/// The upper nibble of `index` selects the entry, the lower nibble the blend
/// amount toward the following entry (the last entry blends back into the
/// first). The result is then scaled by `brightness`.
pub fn color_from_palette(
    palette: &Palette16,
    index: u8,
    brightness: u8,
    blend: BlendType,
) -> Rgb {
    let hi4 = usize::from(index >> 4);
    let lo4 = index & 0x0F;

    let entry = palette[hi4];
    let color = if lo4 != 0 && blend == BlendType::Linear {
        let next = palette[(hi4 + 1) % palette.len()];
        blend_colors(entry, next, lo4 << 4)
    } else {
        entry
    };

    if brightness == u8::MAX {
        color
    } else {
        scale_color(color, brightness)
    }
}
