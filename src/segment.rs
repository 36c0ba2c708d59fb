//! Strip segments
//!
//! A [`StripSegment`] addresses a contiguous sub-range of a physical LED strip
//! by a segment-relative position. The range may run past the end of the strip
//! and wrap around to its start, and may be traversed in reverse.

use core::fmt;
use core::ops::Neg;

/// Reasons a strip segment configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    /// Segment has no LEDs
    EmptySegment,
    /// Segment is longer than the strip it lives on
    LongerThanStrip { length: u16, strip_len: u16 },
    /// Start offset does not address an LED on the strip
    StartOutOfRange { start_offset: u16, strip_len: u16 },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySegment => write!(f, "segment length must be at least 1"),
            Self::LongerThanStrip { length, strip_len } => write!(
                f,
                "segment length {} exceeds strip length {}",
                length, strip_len
            ),
            Self::StartOutOfRange {
                start_offset,
                strip_len,
            } => write!(
                f,
                "start offset {} outside strip of length {}",
                start_offset, strip_len
            ),
        }
    }
}

impl core::error::Error for SegmentError {}

/// Sub-section of an LED strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StripSegment {
    /// Start offset relative to the start of the LED strip
    start_offset: u16,
    /// Number of LEDs in the segment
    length: u16,
    /// Full length of the LED strip, used for wrap-around
    strip_len: u16,
    /// LED strip id decreases with increasing segment position
    reverse: bool,
}

impl StripSegment {
    /// Create a segment, validating its configuration
    pub const fn try_new(
        start_offset: u16,
        length: u16,
        strip_len: u16,
        reverse: bool,
    ) -> Result<Self, SegmentError> {
        if length == 0 {
            return Err(SegmentError::EmptySegment);
        }
        if length > strip_len {
            return Err(SegmentError::LongerThanStrip { length, strip_len });
        }
        if start_offset >= strip_len {
            return Err(SegmentError::StartOutOfRange {
                start_offset,
                strip_len,
            });
        }
        Ok(Self {
            start_offset,
            length,
            strip_len,
            reverse,
        })
    }

    /// Create a segment
    ///
    /// # Panics
    ///
    /// Panics on an invalid configuration, see [`StripSegment::try_new`].
    pub const fn new(start_offset: u16, length: u16, strip_len: u16, reverse: bool) -> Self {
        match Self::try_new(start_offset, length, strip_len, reverse) {
            Ok(segment) => segment,
            Err(SegmentError::EmptySegment) => panic!("strip segment must not be empty"),
            Err(SegmentError::LongerThanStrip { .. }) => {
                panic!("strip segment is longer than its strip")
            }
            Err(SegmentError::StartOutOfRange { .. }) => {
                panic!("strip segment starts outside its strip")
            }
        }
    }

    /// Forward segment
    pub const fn forward(start_offset: u16, length: u16, strip_len: u16) -> Self {
        Self::new(start_offset, length, strip_len, false)
    }

    /// Segment covering a whole strip, starting at LED 0
    pub const fn whole_strip(strip_len: u16) -> Self {
        Self::new(0, strip_len, strip_len, false)
    }

    pub const fn start_offset(&self) -> u16 {
        self.start_offset
    }

    /// Number of LEDs in the segment
    pub const fn len(&self) -> u16 {
        self.length
    }

    /// Always false, segments have at least one LED
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub const fn strip_len(&self) -> u16 {
        self.strip_len
    }

    pub const fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Get the LED strip id for a segment position
    ///
    /// Positions past the end of the segment are clamped to its last LED.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn led_id(&self, segment_pos: u16) -> u16 {
        let pos = if segment_pos > self.length - 1 {
            self.length - 1
        } else {
            segment_pos
        };
        if self.reverse {
            wrap_subtract(self.start_offset, pos + 1, self.strip_len - 1)
        } else {
            // u32 so start + pos never overflows before the modulo
            ((self.start_offset as u32 + pos as u32) % self.strip_len as u32) as u16
        }
    }

    /// LED strip ids in segment traversal order
    pub fn led_ids(self) -> impl Iterator<Item = u16> {
        (0..self.length).map(move |pos| self.led_id(pos))
    }

    /// Whether the segment covers the given LED
    pub fn contains_led(&self, led_id: u16) -> bool {
        if led_id >= self.strip_len {
            return false;
        }
        // Distance from the first covered LED in strip order
        let first = if self.reverse {
            self.led_id(self.length - 1)
        } else {
            self.start_offset
        };
        let distance = if led_id >= first {
            led_id - first
        } else {
            self.strip_len - first + led_id
        };
        distance < self.length
    }

    /// Segment covering the same LEDs, traversed in the opposite direction
    #[must_use]
    pub const fn negate(&self) -> Self {
        if self.reverse {
            let start = if self.start_offset >= self.length {
                self.start_offset - self.length
            } else {
                self.strip_len - (self.length - self.start_offset)
            };
            Self {
                start_offset: start,
                reverse: false,
                ..*self
            }
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let start =
                ((self.start_offset as u32 + self.length as u32) % self.strip_len as u32) as u16;
            Self {
                start_offset: start,
                reverse: true,
                ..*self
            }
        }
    }
}

impl Neg for StripSegment {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

/// Subtract with wrap-around from 0 back to `max_value`
#[inline]
pub const fn wrap_subtract(value: u16, subtract: u16, max_value: u16) -> u16 {
    if subtract <= value {
        value - subtract
    } else {
        max_value - (subtract - value - 1)
    }
}
