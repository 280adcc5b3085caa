use serde::{Deserialize, Serialize};

use crate::core::{Orientation, Point};
use crate::render::{Color, StrokeStyle};

/// Line series: data points joined in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LineConfig {
    pub points: Vec<Point>,
    pub stroke: StrokeStyle,
}

impl LineConfig {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            stroke: StrokeStyle::default(),
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }
}

/// Area series: data points filled down to the zero baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    pub points: Vec<Point>,
    pub stroke: StrokeStyle,
    pub fill: Color,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AreaConfig {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            stroke: StrokeStyle::default(),
            fill: Color::LIGHT_GRAY,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }
}

/// Grid lines running along `orientation`.
///
/// An `X` grid draws horizontal lines, one per Y value; without explicit
/// `values` it uses the Y axis ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub orientation: Orientation,
    pub values: Option<Vec<f64>>,
    pub stroke: StrokeStyle,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Orientation::X)
    }
}

impl GridConfig {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            values: None,
            stroke: StrokeStyle::new(Color::LIGHT_GRAY, 1.0),
        }
    }

    /// Horizontal lines at the Y ticks.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(Orientation::X)
    }

    /// Vertical lines at the X ticks.
    #[must_use]
    pub fn vertical() -> Self {
        Self::new(Orientation::Y)
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = Some(values);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }
}
