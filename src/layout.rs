use std::fmt;

use roomscale_geom::{Point2, Rectangle};

/// How far corner markers float above the ground plane.
const MARKER_LIFT: f32 = 1.0;
/// Elevation of the room light over the play-area center.
const LIGHT_ELEVATION: f32 = 3.0;

#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub name: &'static str,
    pub color: &'static str,
    pub from: Point2,
    pub to: Point2,
    pub height: f32,
}

impl Wall {
    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }

    pub fn midpoint(&self) -> Point2 {
        self.from + (self.to - self.from).scale(0.5)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub color: &'static str,
    pub position: Point2,
    pub lift: f32,
}

/// A printable room description: ground plane sized to the fitted rectangle,
/// a wall along each side, a marker over each support point, and a light
/// over the center. This is where engine-side generation would pick up.
#[derive(Debug, Clone, Copy)]
pub struct Room {
    pub ground_center: Point2,
    pub ground_width: f32,
    pub ground_depth: f32,
    pub walls: [Wall; 4],
    pub markers: [Marker; 4],
    pub light_position: Point2,
    pub light_elevation: f32,
}

impl Room {
    pub fn from_rectangle(rect: &Rectangle, wall_height: f32) -> Room {
        let c = rect.corners;
        let wall = |name, color, from, to| Wall {
            name,
            color,
            from,
            to,
            height: wall_height,
        };
        let marker = |color, position| Marker {
            color,
            position,
            lift: MARKER_LIFT,
        };

        Room {
            ground_center: rect.center,
            ground_width: rect.width,
            ground_depth: rect.height,
            walls: [
                wall("bottom", "blue", c[0], c[1]),
                wall("right", "yellow", c[1], c[3]),
                wall("left", "green", c[0], c[2]),
                wall("top", "red", c[2], c[3]),
            ],
            markers: [
                marker("red", rect.supports.top),
                marker("blue", rect.supports.bottom),
                marker("yellow", rect.supports.left),
                marker("green", rect.supports.right),
            ],
            light_position: rect.center,
            light_elevation: LIGHT_ELEVATION,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "room {:.3} m x {:.3} m around {}",
            self.ground_width, self.ground_depth, self.ground_center
        )?;
        for w in &self.walls {
            writeln!(
                f,
                "  {:>6} wall  {} -> {}  mid {}  length {:.3}  height {:.2}  [{}]",
                w.name,
                w.from,
                w.to,
                w.midpoint(),
                w.length(),
                w.height,
                w.color
            )?;
        }
        for m in &self.markers {
            writeln!(f, "  marker [{}] at {} +{:.1}", m.color, m.position, m.lift)?;
        }
        writeln!(
            f,
            "  light at {} +{:.1}",
            self.light_position, self.light_elevation
        )
    }
}
