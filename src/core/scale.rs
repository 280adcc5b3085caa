use serde::{Deserialize, Serialize};

use crate::core::range::{Extent, extent_of};
use crate::core::Padding;

/// Affine descriptor mapping a padded data interval onto a pixel span.
///
/// `range == highest - lowest` once padding is folded in. `length` is the
/// untouched pixel span the interval maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub range: f64,
    pub lowest: f64,
    pub highest: f64,
    pub length: f64,
}

impl AxisScale {
    /// Scale over an already known extent.
    #[must_use]
    pub fn from_extent(pixel_length: u32, padding: Padding, extent: Extent) -> Self {
        let range = extent.span();
        let padding_low = pixels_to_value(pixel_length, range, padding.low);
        let padding_high = pixels_to_value(pixel_length, range, padding.high);

        Self {
            range: range + padding_low + padding_high,
            lowest: extent.min - padding_low,
            highest: extent.max + padding_high,
            length: f64::from(pixel_length),
        }
    }

    /// `true` when pixel mapping would divide by a zero or non-finite range.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.range.is_finite() && self.range != 0.0)
    }

    /// Clamps `value` into `[lowest, highest]`.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.lowest).min(self.highest)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lowest && value <= self.highest
    }
}

/// Builds a scale from raw `values`, extending both ends by pixel padding.
///
/// Returns `None` for an empty `values` slice. A single distinct value with
/// zero padding yields `range == 0`; pixel mapping on such a scale is not finite.
#[must_use]
pub fn build_scale(pixel_length: u32, padding: Padding, values: &[f64]) -> Option<AxisScale> {
    extent_of(values.iter().copied())
        .map(|extent| AxisScale::from_extent(pixel_length, padding, extent))
}

/// Converts a pixel distance into data units for a `range` drawn over `pixel_length` pixels.
#[must_use]
pub fn pixels_to_value(pixel_length: u32, range: f64, pixels: f64) -> f64 {
    pixels * range / f64::from(pixel_length)
}

/// Converts a data-space distance into pixels.
#[must_use]
pub fn scale_value(scale: AxisScale, value: f64) -> f64 {
    value * scale.length / scale.range
}
