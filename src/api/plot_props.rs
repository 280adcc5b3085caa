use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisScale, CoordinateTransform, MAX_GENERATED_TICKS, Orientation, Padding, series_extent,
    to_svg_coords, to_svg_coords_y,
};
use crate::error::{PlotError, PlotResult};

use super::{Element, PlotConfig};

/// Scales, transforms and ticks shared by every renderable of one render pass.
///
/// `scale`/`ticks` belong to the axis currently being drawn and the
/// `opposite_*` fields to the perpendicular one. The bundle assembled from a
/// config is X-oriented; [`PlotProps::flip_to_y`] yields the Y-oriented view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotProps {
    pub scale: AxisScale,
    pub opposite_scale: AxisScale,
    pub to_svg_coords: CoordinateTransform,
    pub opposite_to_svg_coords: CoordinateTransform,
    pub ticks: Vec<f64>,
    pub opposite_ticks: Vec<f64>,
}

impl PlotProps {
    /// X-oriented props for the given scales and tick lists.
    #[must_use]
    pub fn new(
        x_scale: AxisScale,
        y_scale: AxisScale,
        x_ticks: Vec<f64>,
        y_ticks: Vec<f64>,
    ) -> Self {
        Self {
            scale: x_scale,
            opposite_scale: y_scale,
            to_svg_coords: to_svg_coords(x_scale, y_scale),
            opposite_to_svg_coords: to_svg_coords_y(x_scale, y_scale),
            ticks: x_ticks,
            opposite_ticks: y_ticks,
        }
    }

    /// Derives scales and tick lists for both axes from `config`.
    ///
    /// Ticks are computed for both axes even when no axis element draws them,
    /// because grids read the perpendicular axis's ticks.
    pub fn assemble(config: &PlotConfig) -> PlotResult<Self> {
        config.validate()?;

        let x_extent =
            series_extent(config.series(), Orientation::X).ok_or(PlotError::EmptyData)?;
        let y_extent =
            series_extent(config.series(), Orientation::Y).ok_or(PlotError::EmptyData)?;

        let x_scale = AxisScale::from_extent(config.size.width, Padding::ZERO, x_extent);
        let y_scale = AxisScale::from_extent(config.size.height, config.padding, y_extent);
        for (axis, scale) in [(Orientation::X, x_scale), (Orientation::Y, y_scale)] {
            if scale.is_degenerate() {
                return Err(PlotError::DegenerateRange { axis });
            }
        }

        for element in &config.elements {
            let Element::Axis(axis) = element else {
                continue;
            };
            let scale = match axis.orientation {
                Orientation::X => x_scale,
                Orientation::Y => y_scale,
            };
            if axis.tick_strategy.exceeds_tick_limit(scale) {
                return Err(PlotError::TooManyTicks {
                    axis: axis.orientation,
                    limit: MAX_GENERATED_TICKS,
                });
            }
        }

        let x_strategy = config.tick_strategy(Orientation::X);
        let y_strategy = config.tick_strategy(Orientation::Y);
        let x_ticks = x_strategy.ticks(x_scale);
        let y_ticks = y_strategy.ticks(y_scale);

        debug!(
            x_lowest = x_scale.lowest,
            x_highest = x_scale.highest,
            y_lowest = y_scale.lowest,
            y_highest = y_scale.highest,
            x_tick_count = x_ticks.len(),
            y_tick_count = y_ticks.len(),
            "assembled plot props"
        );

        Ok(Self::new(x_scale, y_scale, x_ticks, y_ticks))
    }

    /// Orientation of the axis these props currently describe.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.to_svg_coords.orientation()
    }

    /// Swaps every primary/opposite pair. Applying it twice is the identity.
    #[must_use]
    pub fn flip_to_y(self) -> Self {
        Self {
            scale: self.opposite_scale,
            opposite_scale: self.scale,
            to_svg_coords: self.opposite_to_svg_coords,
            opposite_to_svg_coords: self.to_svg_coords,
            ticks: self.opposite_ticks,
            opposite_ticks: self.ticks,
        }
    }

    /// Props viewed from an axis of `orientation`.
    #[must_use]
    pub fn oriented(self, orientation: Orientation) -> Self {
        if self.orientation() == orientation {
            self
        } else {
            self.flip_to_y()
        }
    }

    /// X scale regardless of the current orientation.
    #[must_use]
    pub fn x_scale(&self) -> AxisScale {
        self.to_svg_coords.x_scale()
    }

    /// Y scale regardless of the current orientation.
    #[must_use]
    pub fn y_scale(&self) -> AxisScale {
        self.to_svg_coords.y_scale()
    }
}
