//! Data-space to pixel-space point mapping.
//!
//! Both axes run through one formula. A Y-oriented renderable works in
//! axis-local coordinates `(along, across)` and gets a transform that swaps
//! them back to `(x, y)` before mapping, instead of a second formula.

use serde::{Deserialize, Serialize};

use crate::core::scale::scale_value;
use crate::core::{AxisScale, Orientation, Point};

/// Point transform composed from an X scale and a Y scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTransform {
    x_scale: AxisScale,
    y_scale: AxisScale,
    orientation: Orientation,
}

impl CoordinateTransform {
    /// Transform for points given as `(x, y)`.
    #[must_use]
    pub fn new(x_scale: AxisScale, y_scale: AxisScale) -> Self {
        Self {
            x_scale,
            y_scale,
            orientation: Orientation::X,
        }
    }

    /// Transform for points given as `(y, x)`, i.e. along a Y-oriented axis.
    #[must_use]
    pub fn transposed(x_scale: AxisScale, y_scale: AxisScale) -> Self {
        Self {
            x_scale,
            y_scale,
            orientation: Orientation::Y,
        }
    }

    #[must_use]
    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn x_scale(self) -> AxisScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(self) -> AxisScale {
        self.y_scale
    }

    /// Maps a point into pixel space; pixel Y grows downward.
    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        let point = match self.orientation {
            Orientation::X => point,
            Orientation::Y => point.swapped(),
        };
        to_svg_point(self.x_scale, self.y_scale, point)
    }
}

/// Transform for `(x, y)` data points.
#[must_use]
pub fn to_svg_coords(x_scale: AxisScale, y_scale: AxisScale) -> CoordinateTransform {
    CoordinateTransform::new(x_scale, y_scale)
}

/// Transform for axis-local `(y, x)` points.
#[must_use]
pub fn to_svg_coords_y(x_scale: AxisScale, y_scale: AxisScale) -> CoordinateTransform {
    CoordinateTransform::transposed(x_scale, y_scale)
}

fn to_svg_point(x_scale: AxisScale, y_scale: AxisScale, point: Point) -> Point {
    Point {
        x: scale_value(x_scale, point.x - x_scale.lowest),
        y: scale_value(y_scale, y_scale.highest - point.y),
    }
}
