use super::point::{Point2, EPSILON};

/// The boundary points achieving the extreme projections along the rectangle
/// basis: `right`/`left` along `+u1`/`-u1`, `top`/`bottom` along `+u2`/`-u2`.
#[derive(Debug, Clone, Copy)]
pub struct Supports {
    pub top: Point2,
    pub bottom: Point2,
    pub left: Point2,
    pub right: Point2,
}

/// A minimum-area oriented bounding rectangle.
///
/// `basis` is the orthonormal pair `(u1, u2)` with `u2 = perp(u1)`; `u1` runs
/// along the hull edge the rectangle sits flush against. `corners` are ordered
/// by projection onto the basis:
///
/// ```text
/// [min u1 + min u2,  max u1 + min u2,  min u1 + max u2,  max u1 + max u2]
/// ```
///
/// so `(0,1)`, `(1,3)`, `(0,2)`, `(2,3)` trace the four sides. Degenerate
/// boundaries yield `width` and/or `height` of zero; that is a valid result,
/// not an error.
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    pub basis: (Point2, Point2),
    pub supports: Supports,
    pub corners: [Point2; 4],
    pub center: Point2,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Zero-area rectangle collapsed onto a single point, with a canonical
    /// axis-aligned basis.
    pub fn from_point(p: Point2) -> Rectangle {
        Rectangle {
            basis: (Point2::new(1., 0.), Point2::new(0., 1.)),
            supports: Supports {
                top: p,
                bottom: p,
                left: p,
                right: p,
            },
            corners: [p; 4],
            center: p,
            width: 0.,
            height: 0.,
        }
    }

    /// Zero-height rectangle spanning the segment from `a` to `b`.
    pub fn from_segment(a: Point2, b: Point2) -> Rectangle {
        let u1 = (b - a).normalized();
        Rectangle {
            basis: (u1, u1.perp()),
            supports: Supports {
                top: a,
                bottom: a,
                left: a,
                right: b,
            },
            corners: [a, b, a, b],
            center: a + (b - a).scale(0.5),
            width: (b - a).length(),
            height: 0.,
        }
    }

    /// Assembles the rectangle from extreme projections along an orthonormal
    /// basis. Corners are the four supporting-line intersections, which in
    /// basis coordinates are just the projection extremes.
    pub(crate) fn from_projections(
        u1: Point2,
        u2: Point2,
        supports: Supports,
        min_u1: f32,
        max_u1: f32,
        min_u2: f32,
        max_u2: f32,
    ) -> Rectangle {
        let corner = |s1: f32, s2: f32| u1.scale(s1) + u2.scale(s2);
        let corners = [
            corner(min_u1, min_u2),
            corner(max_u1, min_u2),
            corner(min_u1, max_u2),
            corner(max_u1, max_u2),
        ];
        let center = corners
            .iter()
            .fold(Point2::new(0., 0.), |acc, c| acc + *c)
            .scale(0.25);

        Rectangle {
            basis: (u1, u2),
            supports,
            corners,
            center,
            width: (max_u1 - min_u1).max(0.),
            height: (max_u2 - min_u2).max(0.),
        }
    }

    /// Whether `point` lies inside the rectangle, within tolerance.
    pub fn contains(&self, point: Point2) -> bool {
        let (u1, u2) = self.basis;
        let s1 = point.dot(u1);
        let s2 = point.dot(u2);
        let min_u1 = self.corners[0].dot(u1);
        let max_u1 = self.corners[3].dot(u1);
        let min_u2 = self.corners[0].dot(u2);
        let max_u2 = self.corners[3].dot(u2);

        s1 >= min_u1 - EPSILON
            && s1 <= max_u1 + EPSILON
            && s2 >= min_u2 - EPSILON
            && s2 <= max_u2 + EPSILON
    }
}
