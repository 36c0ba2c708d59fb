//! Spatial positioning of strip segments
//!
//! Attaches a 3D coordinate to every LED of a [`StripSegment`], either from a
//! pre-computed list of points or by sampling a straight line between the
//! positions of the first and the last LED. Generally the project coordinate
//! origin should sit at the physical centre of the installation.

use crate::bounds::Bounds;
use crate::point::Point;
use crate::segment::StripSegment;

/// Where the LED positions of a spatial segment come from
#[derive(Debug, Clone, Copy, PartialEq)]
enum LedPositions<'a> {
    /// One point per segment position
    Points(&'a [Point]),
    /// Evenly spaced LEDs on a straight line
    Line { start: Point, delta: Point, last_index: f32 },
}

/// Strip segment with a spatial position for each LED
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialStripSegment<'a> {
    segment: StripSegment,
    positions: LedPositions<'a>,
    /// Positions are looked up from the far end (set by negation)
    flipped: bool,
}

impl<'a> SpatialStripSegment<'a> {
    /// Create from a pre-defined list of LED positions
    ///
    /// # Panics
    ///
    /// Panics if the number of points differs from the segment length.
    pub fn new(segment: StripSegment, points: &'a [Point]) -> Self {
        assert_eq!(
            points.len(),
            usize::from(segment.len()),
            "one position per segment LED is required"
        );
        Self {
            segment,
            positions: LedPositions::Points(points),
            flipped: false,
        }
    }

    /// Create a straight segment with evenly spaced LEDs
    ///
    /// `start` is the position of the first LED and `end` the position of the
    /// last one.
    ///
    /// # Panics
    ///
    /// Panics if the segment has fewer than 2 LEDs or `start == end`.
    pub fn from_line(segment: StripSegment, start: Point, end: Point) -> Self {
        assert!(
            segment.len() >= 2,
            "a straight segment needs at least two LEDs"
        );
        assert!(start != end, "straight segment start and end coincide");
        Self {
            segment,
            positions: LedPositions::Line {
                start,
                delta: end - start,
                last_index: f32::from(segment.len() - 1),
            },
            flipped: false,
        }
    }

    /// Underlying strip segment
    pub const fn strip_segment(&self) -> &StripSegment {
        &self.segment
    }

    /// Number of LEDs
    pub const fn len(&self) -> u16 {
        self.segment.len()
    }

    /// Always false, segments have at least one LED
    pub const fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// LED strip id for a segment position
    #[inline]
    pub const fn led_id(&self, segment_pos: u16) -> u16 {
        self.segment.led_id(segment_pos)
    }

    /// Spatial position of the LED at a segment position
    ///
    /// Positions past the end of the segment are clamped to its last LED.
    pub fn spatial_position(&self, segment_pos: u16) -> Point {
        let last = self.segment.len() - 1;
        let pos = segment_pos.min(last);
        let pos = if self.flipped { last - pos } else { pos };
        match self.positions {
            LedPositions::Points(points) => points[usize::from(pos)],
            LedPositions::Line {
                start,
                delta,
                last_index,
            } => start + delta * (f32::from(pos) / last_index),
        }
    }

    /// Positions of all LEDs in segment order
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.segment.len()).map(move |pos| self.spatial_position(pos))
    }

    /// Bounding box of all LED positions
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(self.positions())
    }

    /// Same positions, strip traversed in the opposite direction
    ///
    /// Every physical LED keeps its spatial position, only the traversal
    /// order flips.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            segment: self.segment.negate(),
            positions: self.positions,
            flipped: !self.flipped,
        }
    }
}
