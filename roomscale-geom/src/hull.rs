use anyhow::{bail, Result};
use robust::{orient2d, Coord};
use tracing::{debug, span, Level};

use crate::shapes::point::Point2;
use crate::shapes::polygon::Polygon;

/// Convex hull of a finite point set, counter-clockwise, starting at the
/// lowest-y (then lowest-x) vertex. Duplicate points are collapsed; collinear
/// runs keep only their two extremes. Fails only on an empty input.
pub fn convex_hull(points: &[Point2]) -> Result<Polygon> {
    if points.is_empty() {
        bail!("cannot compute the hull of an empty boundary");
    }

    let span = span!(Level::DEBUG, "convex_hull");
    let _guard = span.enter();

    let points = collapse_duplicates(points);
    if points.len() == 1 {
        return Ok(Polygon::new(points));
    }

    // Gift wrapping: from each hull vertex, the next one is the candidate
    // every remaining point lies to the left of. O(n*h) is plenty for
    // boundaries of tens of points.
    let start = lowest_point(&points);
    let mut hull = vec![points[start]];
    let mut current = start;
    loop {
        let next = next_vertex(&points, current);
        if next == start {
            break;
        }
        hull.push(points[next]);
        current = next;
    }

    debug!(input = points.len(), vertices = hull.len(), "wrapped hull");
    Ok(Polygon::new(hull))
}

fn collapse_duplicates(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if !out.iter().any(|q| q.approx_eq(*p)) {
            out.push(*p);
        }
    }
    out
}

fn lowest_point(points: &[Point2]) -> usize {
    let mut lowest = 0;
    for (i, p) in points.iter().enumerate() {
        let l = points[lowest];
        if p.y < l.y || (p.y == l.y && p.x < l.x) {
            lowest = i;
        }
    }
    lowest
}

/// Most clockwise point as seen from `current`: after the scan every other
/// point is to the left of (or on) the edge `current -> best`. Exact
/// collinear ties go to the farther point, so interior collinear points
/// never become hull vertices.
fn next_vertex(points: &[Point2], current: usize) -> usize {
    let c = points[current];
    let mut best = if current == 0 { 1 } else { 0 };

    for (i, p) in points.iter().enumerate() {
        if i == current || i == best {
            continue;
        }

        let turn = orient2d(coord(c), coord(points[best]), coord(*p));
        if turn < 0.
            || (turn == 0.
                && (*p - c).length_squared() > (points[best] - c).length_squared())
        {
            best = i;
        }
    }

    best
}

fn coord(p: Point2) -> Coord<f32> {
    Coord { x: p.x, y: p.y }
}
