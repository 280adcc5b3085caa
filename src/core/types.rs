use serde::{Deserialize, Serialize};

/// Pixel dimensions of the plotting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Pixel span along `orientation`.
    #[must_use]
    pub fn length(self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::X => self.width,
            Orientation::Y => self.height,
        }
    }
}

/// Pixel padding added below the lowest and above the highest data value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub low: f64,
    pub high: f64,
}

impl Padding {
    pub const ZERO: Self = Self {
        low: 0.0,
        high: 0.0,
    };

    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low >= 0.0 && self.high >= 0.0
    }
}

/// Pair of coordinates, in data space or pixel space depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along `orientation`.
    #[must_use]
    pub fn coordinate(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::X => self.x,
            Orientation::Y => self.y,
        }
    }

    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis orientation. `X` runs horizontally, `Y` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    X,
    Y,
}

impl Orientation {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}
