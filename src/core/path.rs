//! SVG path generation for projected geometries.
//!
//! Rings that are entirely on the visible hemisphere become closed sub-paths.
//! Rings that cross the horizon are cut where each edge meets the horizon
//! circle, so every visible run starts and ends exactly on the globe outline.

use std::fmt::Write;

use crate::core::projection::Orthographic;
use crate::models::{Geometry, Ring};

/// Build the SVG `d` attribute for a geometry under the given projection.
///
/// Returns an empty string when nothing is visible.
pub fn geometry_path(geometry: &Geometry, projection: &Orthographic) -> String {
    let mut d = String::new();
    for ring in geometry.rings() {
        write_ring(&mut d, ring, projection);
    }
    d
}

fn is_visible(v: &[f64; 3]) -> bool {
    v[0] > 0.0
}

fn write_ring(out: &mut String, ring: &Ring, projection: &Orthographic) {
    // The closing position duplicates the first one.
    let unique = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first == last => &ring[..ring.len() - 1],
        _ => &ring[..],
    };
    if unique.len() < 3 {
        return;
    }

    let points: Vec<[f64; 3]> = unique.iter().map(|p| projection.rotate(*p)).collect();
    let n = points.len();

    let Some(start) = points.iter().position(|v| !is_visible(v)) else {
        for (i, v) in points.iter().enumerate() {
            push_command(out, if i == 0 { 'M' } else { 'L' }, projection.to_screen(*v));
        }
        out.push('Z');
        return;
    };

    // Walking from a hidden point back to itself, every visible run is
    // entered and left through the horizon.
    let mut prev = points[start];
    for step in 1..=n {
        let cur = points[(start + step) % n];
        match (is_visible(&prev), is_visible(&cur)) {
            (false, true) => {
                push_command(out, 'M', horizon_point(projection, prev, cur));
                push_command(out, 'L', projection.to_screen(cur));
            }
            (true, true) => push_command(out, 'L', projection.to_screen(cur)),
            (true, false) => {
                push_command(out, 'L', horizon_point(projection, prev, cur));
                out.push('Z');
            }
            (false, false) => {}
        }
        prev = cur;
    }
}

/// Screen position where the edge `a`–`b` crosses the horizon.
///
/// Exactly one of `a`, `b` is visible.
fn horizon_point(projection: &Orthographic, a: [f64; 3], b: [f64; 3]) -> [f64; 2] {
    let t = a[0] / (a[0] - b[0]);
    let y = a[1] + t * (b[1] - a[1]);
    let z = a[2] + t * (b[2] - a[2]);
    let len = y.hypot(z);
    if len < 1e-12 {
        return projection.to_screen([0.0, y, z]);
    }
    projection.to_screen([0.0, y / len, z / len])
}

fn push_command(out: &mut String, command: char, [x, y]: [f64; 2]) {
    let _ = write!(out, "{command}{x:.1},{y:.1}");
}
