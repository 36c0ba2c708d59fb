use crate::point::Point;
use crate::spatial::SpatialStripSegment;

/// Axis-aligned bounding box
///
/// Defined by its minimum (bottom left) and maximum (top right) corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Identity for folding: contains nothing, any included point replaces it
    pub const fn empty() -> Self {
        Self {
            min: Point::splat(f32::INFINITY),
            max: Point::splat(f32::NEG_INFINITY),
        }
    }

    /// Whether no point was ever included
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the bounds to include `point`
    #[must_use]
    pub fn include(self, point: Point) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Smallest bounds containing both
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Bounds of a set of points
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().fold(Self::empty(), Self::include)
    }

    /// Bounds of a set of spatial segments (bounds of their bounds)
    pub fn aggregate(segments: &[SpatialStripSegment<'_>]) -> Self {
        segments
            .iter()
            .map(SpatialStripSegment::bounds)
            .fold(Self::empty(), Self::union)
    }

    /// Extent along each axis (width, length and depth)
    pub fn magnitude(&self) -> Point {
        self.max - self.min
    }

    /// Centre point
    pub fn centre(&self) -> Point {
        (self.max + self.min) / 2.0
    }

    /// Whether the point lies inside or on the boundary
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}
