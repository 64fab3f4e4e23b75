use super::point::{Point2, EPSILON};

/// An ordered sequence of vertices, counter-clockwise. Produced by the hull
/// computation; degenerate boundaries reduce to one vertex (all points
/// identical) or two (all points collinear).
#[derive(Debug, Clone)]
pub struct Polygon {
    pub points: Vec<Point2>,
}

impl Polygon {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Directed edges `(v[i], v[i+1])`, wrapping back to the start.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..if n < 2 { 0 } else { n }).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Whether `point` lies inside or on the polygon, within tolerance.
    /// Assumes counter-clockwise convex vertices, which is all the hull
    /// computation ever produces.
    pub fn contains_point(&self, point: Point2) -> bool {
        match self.points.len() {
            0 => false,
            1 => (point - self.points[0]).length() <= EPSILON,
            2 => segment_distance(point, self.points[0], self.points[1]) <= EPSILON,
            _ => self.edges().all(|(a, b)| {
                let edge = b - a;
                // signed distance to the edge line; interior is to the left
                edge.cross(point - a) / edge.length() >= -EPSILON
            }),
        }
    }
}

fn segment_distance(p: Point2, a: Point2, b: Point2) -> f32 {
    let ab = b - a;
    let t = ((p - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
    (p - (a + ab.scale(t))).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let polygon = Polygon::new(Vec::from([
            Point2::new(0., 0.),
            Point2::new(3., 0.),
            Point2::new(3., 3.),
        ]));

        assert!(polygon.contains_point(Point2::new(0., 0.)));
        assert!(polygon.contains_point(Point2::new(2., 1.)));
        assert!(polygon.contains_point(Point2::new(3., 3.)));
        // on the hypotenuse
        assert!(polygon.contains_point(Point2::new(1.5, 1.5)));

        assert!(!polygon.contains_point(Point2::new(1., 2.)));
        assert!(!polygon.contains_point(Point2::new(4., 4.)));
        assert!(!polygon.contains_point(Point2::new(-0.1, 0.)));
    }

    #[test]
    fn test_contains_point_degenerate() {
        let single = Polygon::new(Vec::from([Point2::new(2., 3.)]));
        assert!(single.contains_point(Point2::new(2., 3.)));
        assert!(!single.contains_point(Point2::new(2., 3.1)));

        let segment = Polygon::new(Vec::from([Point2::new(0., 0.), Point2::new(2., 0.)]));
        assert!(segment.contains_point(Point2::new(1., 0.)));
        assert!(segment.contains_point(Point2::new(2., 0.)));
        assert!(!segment.contains_point(Point2::new(2.1, 0.)));
        assert!(!segment.contains_point(Point2::new(1., 0.5)));
    }

    #[test]
    fn test_edges_wrap() {
        let polygon = Polygon::new(Vec::from([
            Point2::new(0., 0.),
            Point2::new(1., 0.),
            Point2::new(0., 1.),
        ]));

        let edges: Vec<_> = polygon.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point2::new(0., 1.), Point2::new(0., 0.)));
    }
}
