use serde::{Deserialize, Serialize};

use crate::core::{Orientation, Padding, Point, Size, TickStrategy};
use crate::error::{PlotError, PlotResult};

use super::{AreaConfig, AxisConfig, GridConfig, LabelValues, LineConfig};

/// One renderable of a plot, drawn in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Axis(AxisConfig),
    Grid(GridConfig),
    Line(LineConfig),
    Area(AreaConfig),
}

impl Element {
    /// Data points the element contributes to the scales; axes and grids have none.
    #[must_use]
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Self::Line(line) => Some(&line.points),
            Self::Area(area) => Some(&area.points),
            Self::Axis(_) | Self::Grid(_) => None,
        }
    }
}

impl From<AxisConfig> for Element {
    fn from(value: AxisConfig) -> Self {
        Self::Axis(value)
    }
}

impl From<GridConfig> for Element {
    fn from(value: GridConfig) -> Self {
        Self::Grid(value)
    }
}

impl From<LineConfig> for Element {
    fn from(value: LineConfig) -> Self {
        Self::Line(value)
    }
}

impl From<AreaConfig> for Element {
    fn from(value: AreaConfig) -> Self {
        Self::Area(value)
    }
}

/// Public plot configuration.
///
/// This type is serializable so host applications can persist/load plot
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub size: Size,
    /// Pixel padding applied to the Y scale. X is never padded.
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl PlotConfig {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: Padding::ZERO,
            elements: Vec::new(),
        }
    }

    /// Sets Y padding in pixels below the lowest and above the highest value.
    #[must_use]
    pub fn with_padding(mut self, low: f64, high: f64) -> Self {
        self.padding = Padding::new(low, high);
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Point slices of every line and area series, in element order.
    pub fn series(&self) -> impl Iterator<Item = &[Point]> {
        self.elements.iter().filter_map(Element::points)
    }

    /// Axis configuration in effect for `orientation`: the last one listed.
    #[must_use]
    pub fn effective_axis(&self, orientation: Orientation) -> Option<&AxisConfig> {
        self.elements.iter().fold(None, |current, element| match element {
            Element::Axis(axis) if axis.orientation == orientation => Some(axis),
            _ => current,
        })
    }

    /// Tick strategy in effect for `orientation`, automatic when no axis is configured.
    #[must_use]
    pub fn tick_strategy(&self, orientation: Orientation) -> TickStrategy {
        self.effective_axis(orientation)
            .map(|axis| axis.tick_strategy.clone())
            .unwrap_or_default()
    }

    /// Checks everything that would make scale or tick computation meaningless.
    pub fn validate(&self) -> PlotResult<()> {
        if !self.size.is_valid() {
            return Err(PlotError::InvalidSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        if !self.padding.is_valid() {
            return Err(PlotError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }

        for element in &self.elements {
            match element {
                Element::Axis(axis) => {
                    validate_tick_strategy(&axis.tick_strategy)?;
                    if let LabelValues::FromValues(values) = &axis.label_values {
                        validate_values(values, "label values")?;
                    }
                    axis.stroke.validate()?;
                }
                Element::Grid(grid) => {
                    if let Some(values) = &grid.values {
                        validate_values(values, "grid values")?;
                    }
                    grid.stroke.validate()?;
                }
                Element::Line(line) => {
                    validate_points(&line.points)?;
                    line.stroke.validate()?;
                }
                Element::Area(area) => {
                    validate_points(&area.points)?;
                    area.stroke.validate()?;
                    area.fill.validate()?;
                }
            }
        }

        Ok(())
    }
}

fn validate_tick_strategy(strategy: &TickStrategy) -> PlotResult<()> {
    match strategy {
        TickStrategy::FromValues(values) => validate_values(values, "tick values"),
        TickStrategy::FromDelta(delta) => {
            if delta.is_finite() && *delta > 0.0 {
                Ok(())
            } else {
                Err(PlotError::InvalidTickDelta(*delta))
            }
        }
        TickStrategy::FromCount(0) => Err(PlotError::InvalidData(
            "tick count must be > 0".to_owned(),
        )),
        TickStrategy::FromCount(_) => Ok(()),
    }
}

fn validate_values(values: &[f64], what: &str) -> PlotResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(PlotError::InvalidData(format!("{what} must be finite")))
    }
}

fn validate_points(points: &[Point]) -> PlotResult<()> {
    if points.iter().all(|point| point.is_finite()) {
        Ok(())
    } else {
        Err(PlotError::InvalidData(
            "series points must be finite".to_owned(),
        ))
    }
}
