use crate::core::path::PathCommand;
use crate::core::{CoordinateTransform, Point};

/// Data-space Y the area is filled against: zero, clamped into the Y scale.
#[must_use]
pub fn area_baseline(transform: CoordinateTransform) -> f64 {
    transform.y_scale().clamp(0.0)
}

/// Projects points into a closed area path.
///
/// The path drops from the first point's X at the baseline, follows the
/// mapped points, returns to the baseline under the last point and closes.
#[must_use]
pub fn project_area_path(points: &[Point], transform: CoordinateTransform) -> Vec<PathCommand> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let baseline = area_baseline(transform);
    let mut commands = Vec::with_capacity(points.len() + 3);
    commands.push(PathCommand::MoveTo(
        transform.apply(Point::new(first.x, baseline)),
    ));
    commands.extend(
        points
            .iter()
            .map(|point| PathCommand::LineTo(transform.apply(*point))),
    );
    commands.push(PathCommand::LineTo(
        transform.apply(Point::new(last.x, baseline)),
    ));
    // Explicit closure so consumers need no implicit closing rules.
    commands.push(PathCommand::Close);
    commands
}
