use anyhow::Result;
use tracing::{debug, span, trace, Level};

use crate::hull::convex_hull;
use crate::shapes::point::{Point2, EPSILON};
use crate::shapes::rect::{Rectangle, Supports};

/// Smallest-area enclosing rectangle of any orientation.
///
/// Reduces the boundary to its convex hull, then sweeps rotating calipers
/// over the hull edges: the minimum-area rectangle always has one side flush
/// with a hull edge, so only edge-aligned orientations need to be tried.
/// Fails only on an empty input.
pub fn minimum_bounding_rectangle(points: &[Point2]) -> Result<Rectangle> {
    let hull = convex_hull(points)?;

    let span = span!(Level::DEBUG, "calipers");
    let _guard = span.enter();

    let v = &hull.points;
    let rect = match v.len() {
        1 => Rectangle::from_point(v[0]),
        2 => Rectangle::from_segment(v[0], v[1]),
        _ => sweep(v),
    };

    debug!(
        width = rect.width,
        height = rect.height,
        area = rect.area(),
        "fitted rectangle"
    );
    Ok(rect)
}

struct Candidate {
    area: f32,
    u1: Point2,
    u2: Point2,
    bottom: usize,
    top: usize,
    left: usize,
    right: usize,
}

/// One caliper pass over a counter-clockwise convex polygon with at least
/// three vertices. The flush edge supplies the minimum along `u2`; the other
/// three extremes are tracked by pointers that only ever move forward as the
/// trial edge rotates, so the whole sweep is O(h).
fn sweep(v: &[Point2]) -> Rectangle {
    let n = v.len();
    let mut right = 0;
    let mut top = 0;
    let mut left = 0;
    let mut best: Option<Candidate> = None;

    for i in 0..n {
        let u1 = (v[(i + 1) % n] - v[i]).normalized();
        let u2 = u1.perp();

        if i == 0 {
            // seed the pointers once; later edges only advance them
            for j in 0..n {
                if v[j].dot(u1) > v[right].dot(u1) {
                    right = j;
                }
                if v[j].dot(u2) > v[top].dot(u2) {
                    top = j;
                }
                if v[j].dot(u1) < v[left].dot(u1) {
                    left = j;
                }
            }
        } else {
            right = advance(v, right, |p| p.dot(u1));
            top = advance(v, top, |p| p.dot(u2));
            left = advance(v, left, |p| -p.dot(u1));
        }

        let width = v[right].dot(u1) - v[left].dot(u1);
        let height = v[top].dot(u2) - v[i].dot(u2);
        let area = width * height;
        trace!(edge = i, area, "caliper candidate");

        // strict improvement only, so near-ties keep the earliest edge
        if best
            .as_ref()
            .is_none_or(|b| area < b.area - EPSILON * b.area.max(1.))
        {
            best = Some(Candidate {
                area,
                u1,
                u2,
                bottom: i,
                top,
                left,
                right,
            });
        }
    }

    let b = best.expect("polygon has at least one edge");
    Rectangle::from_projections(
        b.u1,
        b.u2,
        Supports {
            top: v[b.top],
            bottom: v[b.bottom],
            left: v[b.left],
            right: v[b.right],
        },
        v[b.left].dot(b.u1),
        v[b.right].dot(b.u1),
        v[b.bottom].dot(b.u2),
        v[b.top].dot(b.u2),
    )
}

/// Walks the pointer forward while the next vertex projects strictly
/// farther. Projections around a convex polygon are unimodal, so the walk
/// stops at the extreme; exact ties keep the earlier vertex.
fn advance(v: &[Point2], mut idx: usize, key: impl Fn(Point2) -> f32) -> usize {
    loop {
        let next = (idx + 1) % v.len();
        if key(v[next]) > key(v[idx]) {
            idx = next;
        } else {
            return idx;
        }
    }
}
