use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Orientation, Point};

/// Closed data interval observed along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Smallest extent covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Minimum and maximum of `values`, or `None` when there are none.
///
/// NaN entries order above every finite value (`OrderedFloat` semantics), so
/// they can only surface as the maximum; callers validate finiteness upstream.
#[must_use]
pub fn extent_of<I>(values: I) -> Option<Extent>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .fold(None::<(OrderedFloat<f64>, OrderedFloat<f64>)>, |acc, value| {
            let value = OrderedFloat(value);
            Some(match acc {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            })
        })
        .map(|(min, max)| Extent {
            min: min.into_inner(),
            max: max.into_inner(),
        })
}

/// Extent along `orientation` across every point of every series.
#[must_use]
pub fn series_extent<'a, S>(series: S, orientation: Orientation) -> Option<Extent>
where
    S: IntoIterator<Item = &'a [Point]>,
{
    extent_of(
        series
            .into_iter()
            .flat_map(|points| points.iter().map(move |point| point.coordinate(orientation))),
    )
}
