use crate::core::path::{PathCommand, polyline};
use crate::core::{CoordinateTransform, Point};

/// Projects line-series points into a pixel-space polyline.
///
/// The function is deterministic and side-effect free so both the scene
/// builder and tests consume the exact same geometry output. Fewer than two
/// points draw nothing.
#[must_use]
pub fn project_line_path(points: &[Point], transform: CoordinateTransform) -> Vec<PathCommand> {
    if points.len() < 2 {
        return Vec::new();
    }

    polyline(points.iter().map(|point| transform.apply(*point)))
}
