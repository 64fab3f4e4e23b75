//! Geometry core for fitting a room to a VR play-area boundary: convex hull
//! plus the minimum-area oriented bounding rectangle of the hull.

pub mod calipers;
pub mod hull;
pub mod shapes;

pub use calipers::minimum_bounding_rectangle;
pub use hull::convex_hull;
pub use shapes::point::Point2;
pub use shapes::polygon::Polygon;
pub use shapes::rect::{Rectangle, Supports};
