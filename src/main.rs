#![warn(unused_extern_crates)]
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use roomscale_geom::{minimum_bounding_rectangle, Point2, Rectangle, Supports};
use tracing::{debug, info, warn};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use crate::layout::Room;

mod layout;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Boundary point file, one "x y" or "x,y" pair per line. Falls back
    /// to the mock play area if unset
    #[arg(short, long)]
    boundary: Option<PathBuf>,

    /// Wall height (m) for the generated room
    #[arg(long, default_value = "2.5")]
    wall_height: f32,

    /// Print the fitted rectangle only, skipping the room layout
    #[arg(short, long)]
    rect_only: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::from_default_env();
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(filter)
        .init();

    let args = Args::parse();

    let rect = match &args.boundary {
        Some(path) => {
            let points = read_boundary(path)?;
            info!("loaded {} boundary points from {:?}", points.len(), path);
            minimum_bounding_rectangle(&points)?
        }
        None => {
            warn!("no boundary file given, using the mock play area");
            mock_rectangle()
        }
    };

    print_rectangle(&rect);
    if !args.rect_only {
        println!();
        print!("{}", Room::from_rectangle(&rect, args.wall_height));
    }

    Ok(())
}

fn read_boundary(path: &Path) -> Result<Vec<Point2>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading boundary file {path:?}"))?;

    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("expected two coordinates at {path:?}:{}", lineno + 1);
        };

        let x: f32 = x
            .parse()
            .with_context(|| format!("bad x coordinate at {path:?}:{}", lineno + 1))?;
        let y: f32 = y
            .parse()
            .with_context(|| format!("bad y coordinate at {path:?}:{}", lineno + 1))?;
        points.push(Point2::new(x, y));
    }

    debug!("parsed {} boundary points", points.len());
    Ok(points)
}

/// Fixed 10 x 10 play area standing in for an unconfigured headset. Kept out
/// of the geometry library on purpose: fabricating a boundary is caller
/// policy, not geometry.
fn mock_rectangle() -> Rectangle {
    let corners = [
        Point2::new(-5., -5.),
        Point2::new(5., -5.),
        Point2::new(-5., 5.),
        Point2::new(5., 5.),
    ];

    Rectangle {
        basis: (Point2::new(1., 0.), Point2::new(0., 1.)),
        supports: Supports {
            top: corners[3],
            bottom: corners[0],
            left: corners[0],
            right: corners[1],
        },
        corners,
        center: Point2::new(0., 0.),
        width: 10.,
        height: 10.,
    }
}

fn print_rectangle(rect: &Rectangle) {
    let (u1, u2) = rect.basis;
    println!(
        "play area {:.3} m x {:.3} m ({:.3} m^2)",
        rect.width,
        rect.height,
        rect.area()
    );
    println!("  center   {}", rect.center);
    println!("  basis    u1 {}  u2 {}", u1, u2);
    println!(
        "  corners  {}  {}  {}  {}",
        rect.corners[0], rect.corners[1], rect.corners[2], rect.corners[3]
    );
    println!(
        "  supports top {}  bottom {}  left {}  right {}",
        rect.supports.top, rect.supports.bottom, rect.supports.left, rect.supports.right
    );
}
