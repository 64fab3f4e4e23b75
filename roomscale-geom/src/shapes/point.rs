use std::fmt;
use std::ops::{Add, Sub};

/// Tolerance for geometric comparisons on boundary points. Play-area
/// coordinates are meters, so this is well below tracking jitter.
pub const EPSILON: f32 = 1e-5;

/// A point (or vector) in the tracking-space ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Point2 {
        Point2 { x, y }
    }

    pub fn dot(self, other: Point2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product of the two vectors lifted into
    /// the plane. Positive when `other` is counter-clockwise from `self`.
    pub fn cross(self, other: Point2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates the vector 90 degrees counter-clockwise.
    pub fn perp(self) -> Point2 {
        Point2::new(-self.y, self.x)
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scales the vector by a scalar.
    pub fn scale(self, s: f32) -> Point2 {
        Point2::new(self.x * s, self.y * s)
    }

    /// Normalizes to a unit vector.
    pub fn normalized(self) -> Point2 {
        let len = self.length();
        if len == 0.0 {
            Point2::new(0.0, 0.0)
        } else {
            Point2::new(self.x / len, self.y / len)
        }
    }

    pub fn approx_eq(self, other: Point2) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, other: Point2) -> Point2 {
        Point2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, other: Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perp_is_ccw_and_orthogonal() {
        let v = Point2::new(3., 1.);
        let p = v.perp();

        assert_eq!(v.dot(p), 0.);
        // quarter turn to the left
        assert!(v.cross(p) > 0.);
        assert_eq!(p, Point2::new(-1., 3.));
    }

    #[test]
    fn test_normalized() {
        let v = Point2::new(3., 4.).normalized();
        assert!((v.length() - 1.).abs() <= EPSILON);

        // zero vector stays put instead of blowing up
        assert_eq!(Point2::new(0., 0.).normalized(), Point2::new(0., 0.));
    }
}
