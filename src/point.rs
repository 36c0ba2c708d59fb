//! 3D cartesian point / vector

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Cartesian coordinate or direction vector in project or pattern space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Unit vector along the x axis
pub const V_X: Point = Point::new(1.0, 0.0, 0.0);
/// Unit vector along the y axis
pub const V_Y: Point = Point::new(0.0, 1.0, 0.0);
/// Unit vector along the z axis
pub const V_Z: Point = Point::new(0.0, 0.0, 1.0);

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Point on the z = 0 plane
    pub const fn planar(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0)
    }

    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Multiply every component by a scalar
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Element-wise product
    #[inline]
    pub fn hadamard_product(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Element-wise division
    #[inline]
    pub fn hadamard_divide(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    /// Squared distance to another point, for comparisons without a square root
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        let d = other - self;
        d.dot(d)
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        libm::sqrtf(self.distance_squared(other))
    }

    /// Distance to the plane through `plane_point` with normal `normal`
    ///
    /// `|n·p - n·p0| / |n|`, the normal does not need to be normalized.
    pub fn distance_to_plane(self, normal: Self, plane_point: Self) -> f32 {
        let d = normal.dot(plane_point);
        libm::fabsf(normal.dot(self) - d) / normal.norm()
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Apply `f` to every component
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs.scale(self)
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Point {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}
