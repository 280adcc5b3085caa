use serde::{Deserialize, Serialize};

use crate::core::{Orientation, PathCommand, Size};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, LabelPlacement, Segment, StrokeStyle, TickPlacement};

/// Axis baseline, tick marks and labels in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub orientation: Orientation,
    pub baseline: Segment,
    pub ticks: Vec<TickPlacement>,
    pub labels: Vec<LabelPlacement>,
    pub stroke: StrokeStyle,
}

/// Grid lines spanning the plot along one orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub orientation: Orientation,
    pub lines: Vec<Segment>,
    pub stroke: StrokeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub commands: Vec<PathCommand>,
    pub stroke: StrokeStyle,
}

/// Closed fill path; the last command is always `Close` when non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub commands: Vec<PathCommand>,
    pub stroke: StrokeStyle,
    pub fill: Color,
}

/// One renderable's pixel-space geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneElement {
    Axis(AxisGeometry),
    Grid(GridGeometry),
    Line(LineGeometry),
    Area(AreaGeometry),
}

/// Backend-agnostic scene for one plot render pass, in element order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub size: Size,
    pub elements: Vec<SceneElement>,
}

impl Scene {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: SceneElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn axes(&self) -> impl Iterator<Item = &AxisGeometry> {
        self.elements.iter().filter_map(|element| match element {
            SceneElement::Axis(axis) => Some(axis),
            _ => None,
        })
    }

    pub fn grids(&self) -> impl Iterator<Item = &GridGeometry> {
        self.elements.iter().filter_map(|element| match element {
            SceneElement::Grid(grid) => Some(grid),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineGeometry> {
        self.elements.iter().filter_map(|element| match element {
            SceneElement::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn areas(&self) -> impl Iterator<Item = &AreaGeometry> {
        self.elements.iter().filter_map(|element| match element {
            SceneElement::Area(area) => Some(area),
            _ => None,
        })
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.size.is_valid() {
            return Err(PlotError::InvalidSize {
                width: self.size.width,
                height: self.size.height,
            });
        }

        for element in &self.elements {
            match element {
                SceneElement::Axis(axis) => {
                    axis.stroke.validate()?;
                    axis.baseline.validate()?;
                    if axis.ticks.iter().any(|tick| !tick.position.is_finite()) {
                        return Err(PlotError::InvalidData(
                            "tick coordinates must be finite".to_owned(),
                        ));
                    }
                    for label in &axis.labels {
                        label.validate()?;
                    }
                }
                SceneElement::Grid(grid) => {
                    grid.stroke.validate()?;
                    for line in &grid.lines {
                        line.validate()?;
                    }
                }
                SceneElement::Line(line) => {
                    line.stroke.validate()?;
                    validate_commands(&line.commands)?;
                }
                SceneElement::Area(area) => {
                    area.stroke.validate()?;
                    area.fill.validate()?;
                    validate_commands(&area.commands)?;
                }
            }
        }

        Ok(())
    }
}

fn validate_commands(commands: &[PathCommand]) -> PlotResult<()> {
    if commands
        .iter()
        .filter_map(|command| command.point())
        .any(|point| !point.is_finite())
    {
        return Err(PlotError::InvalidData(
            "path coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}
