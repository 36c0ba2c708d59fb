use crate::color::{BlendType, Hsv, Palette16, Rgb, color_from_palette, hsv2rgb};

/// Resolves a pattern's hue/brightness pair into a concrete color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPicker {
    /// Plain HSV color wheel, no palette involved
    #[default]
    Hsv,
    /// Lookup in a 16-entry palette, `hue` is the palette index
    Palette {
        palette: Palette16,
        blend: BlendType,
    },
}

impl ColorPicker {
    /// Palette picker with linear blending
    pub const fn palette(palette: Palette16) -> Self {
        Self::Palette {
            palette,
            blend: BlendType::Linear,
        }
    }

    /// Palette picker with an explicit blend type
    pub const fn palette_with_blend(palette: Palette16, blend: BlendType) -> Self {
        Self::Palette { palette, blend }
    }

    /// Get a color at full saturation
    pub fn color(&self, hue: u8, brightness: u8) -> Rgb {
        self.color_with_saturation(hue, brightness, u8::MAX)
    }

    /// Get a color
    ///
    /// Saturation only applies to the HSV picker, palettes carry their own.
    pub fn color_with_saturation(&self, hue: u8, brightness: u8, saturation: u8) -> Rgb {
        match self {
            Self::Hsv => hsv2rgb(Hsv {
                hue,
                sat: saturation,
                val: brightness,
            }),
            Self::Palette { palette, blend } => {
                color_from_palette(palette, hue, brightness, *blend)
            }
        }
    }

    /// Same lookup with the blend type forced, for patterns that need crisp
    /// palette steps regardless of configuration
    pub fn color_with_blend(&self, hue: u8, brightness: u8, blend: BlendType) -> Rgb {
        match self {
            Self::Hsv => self.color(hue, brightness),
            Self::Palette { palette, .. } => color_from_palette(palette, hue, brightness, blend),
        }
    }
}

/// Color source owned by a pattern
///
/// Keeps the picker the pattern was configured with, so a palette swapped in
/// at runtime can be reverted without resetting animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSource {
    configured: ColorPicker,
    active: ColorPicker,
}

impl ColorSource {
    pub const fn new(picker: ColorPicker) -> Self {
        Self {
            configured: picker,
            active: picker,
        }
    }

    /// Currently active picker
    pub const fn picker(&self) -> &ColorPicker {
        &self.active
    }

    /// Whether a runtime palette replaced the configured picker
    pub fn is_overridden(&self) -> bool {
        self.active != self.configured
    }

    /// Swap in a new palette
    ///
    /// Keeps the configured blend type when the pattern was built with a
    /// palette, otherwise blends linearly.
    pub fn set_palette(&mut self, palette: Palette16) {
        let blend = match self.configured {
            ColorPicker::Palette { blend, .. } => blend,
            ColorPicker::Hsv => BlendType::Linear,
        };
        self.active = ColorPicker::Palette { palette, blend };
    }

    /// Restore the configured picker
    pub fn reset_palette(&mut self) {
        self.active = self.configured;
    }

    /// Resolve a color through the active picker
    #[inline]
    pub fn color(&self, hue: u8, brightness: u8) -> Rgb {
        self.active.color(hue, brightness)
    }
}

impl From<ColorPicker> for ColorSource {
    fn from(picker: ColorPicker) -> Self {
        Self::new(picker)
    }
}
