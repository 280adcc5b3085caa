use serde::{Deserialize, Serialize};

use crate::core::Point;

/// One step of a pixel-space path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

impl PathCommand {
    /// Target point, `None` for `Close`.
    #[must_use]
    pub fn point(self) -> Option<Point> {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => Some(point),
            Self::Close => None,
        }
    }
}

/// Open polyline: one `MoveTo` followed by a `LineTo` per remaining point.
#[must_use]
pub fn polyline<I>(points: I) -> Vec<PathCommand>
where
    I: IntoIterator<Item = Point>,
{
    points
        .into_iter()
        .enumerate()
        .map(|(index, point)| {
            if index == 0 {
                PathCommand::MoveTo(point)
            } else {
                PathCommand::LineTo(point)
            }
        })
        .collect()
}
