use serde::{Deserialize, Serialize};

use crate::core::{IndexedTick, Orientation, TickStrategy};
use crate::render::StrokeStyle;

/// Where an axis takes its label values from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum LabelValues {
    /// Label every tick the axis draws.
    #[default]
    FromTicks,
    /// Label exactly these values, indexed independently of the ticks.
    FromValues(Vec<f64>),
}

/// Built-in label text formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LabelFormat {
    /// Shortest decimal representation (`10`, `0.5`, `-2.25`).
    #[default]
    Plain,
    /// Fixed number of decimal places.
    FixedDecimals { precision: u8 },
}

impl LabelFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        // Keep `-0` out of labels.
        let value = value + 0.0;
        match self {
            Self::Plain => format!("{value}"),
            Self::FixedDecimals { precision } => {
                format!("{value:.precision$}", precision = usize::from(precision))
            }
        }
    }
}

/// Selects ticks or labels by their zero-crossing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TickFilter {
    #[default]
    All,
    OddIndices,
    EvenIndices,
    /// Every `n`-th tick counted from zero in both directions. `0` keeps all.
    EveryNth(u32),
    NonNegative,
    NonPositive,
}

impl TickFilter {
    #[must_use]
    pub fn keeps(self, tick: IndexedTick) -> bool {
        match self {
            Self::All => true,
            Self::OddIndices => tick.index % 2 != 0,
            Self::EvenIndices => tick.index % 2 == 0,
            Self::EveryNth(0) => true,
            Self::EveryNth(n) => tick.index.unsigned_abs() % n == 0,
            Self::NonNegative => tick.index >= 0,
            Self::NonPositive => tick.index <= 0,
        }
    }
}

/// Configuration of one axis element.
///
/// Builder calls overwrite each other, so the last tick strategy set wins:
/// `AxisConfig::x().with_tick_values(..).with_tick_delta(2.0)` ticks by delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub orientation: Orientation,
    pub tick_strategy: TickStrategy,
    pub tick_filter: TickFilter,
    pub label_values: LabelValues,
    pub label_format: LabelFormat,
    pub label_filter: TickFilter,
    /// Drops the zero tick and label where the axes cross.
    pub clean_crossings: bool,
    pub stroke: StrokeStyle,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::new(Orientation::X)
    }
}

impl AxisConfig {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            tick_strategy: TickStrategy::default(),
            tick_filter: TickFilter::All,
            label_values: LabelValues::FromTicks,
            label_format: LabelFormat::Plain,
            label_filter: TickFilter::All,
            clean_crossings: false,
            stroke: StrokeStyle::default(),
        }
    }

    #[must_use]
    pub fn x() -> Self {
        Self::new(Orientation::X)
    }

    #[must_use]
    pub fn y() -> Self {
        Self::new(Orientation::Y)
    }

    #[must_use]
    pub fn with_tick_strategy(mut self, strategy: TickStrategy) -> Self {
        self.tick_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_tick_values(self, values: Vec<f64>) -> Self {
        self.with_tick_strategy(TickStrategy::FromValues(values))
    }

    #[must_use]
    pub fn with_tick_delta(self, delta: f64) -> Self {
        self.with_tick_strategy(TickStrategy::FromDelta(delta))
    }

    #[must_use]
    pub fn with_tick_count(self, count: usize) -> Self {
        self.with_tick_strategy(TickStrategy::FromCount(count))
    }

    #[must_use]
    pub fn with_tick_filter(mut self, filter: TickFilter) -> Self {
        self.tick_filter = filter;
        self
    }

    #[must_use]
    pub fn with_label_values(mut self, values: Vec<f64>) -> Self {
        self.label_values = LabelValues::FromValues(values);
        self
    }

    #[must_use]
    pub fn with_label_format(mut self, format: LabelFormat) -> Self {
        self.label_format = format;
        self
    }

    #[must_use]
    pub fn with_label_filter(mut self, filter: TickFilter) -> Self {
        self.label_filter = filter;
        self
    }

    #[must_use]
    pub fn with_clean_crossings(mut self, clean_crossings: bool) -> Self {
        self.clean_crossings = clean_crossings;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelFormat, TickFilter};
    use crate::core::IndexedTick;

    fn tick(index: i32) -> IndexedTick {
        IndexedTick {
            index,
            value: f64::from(index),
        }
    }

    #[test]
    fn plain_format_drops_trailing_zeros() {
        assert_eq!(LabelFormat::Plain.format(10.0), "10");
        assert_eq!(LabelFormat::Plain.format(0.5), "0.5");
        assert_eq!(LabelFormat::Plain.format(-0.0), "0");
    }

    #[test]
    fn fixed_format_pads_decimals() {
        let format = LabelFormat::FixedDecimals { precision: 2 };
        assert_eq!(format.format(3.0), "3.00");
        assert_eq!(format.format(-1.5), "-1.50");
    }

    #[test]
    fn odd_filter_handles_negative_indices() {
        assert!(TickFilter::OddIndices.keeps(tick(-1)));
        assert!(!TickFilter::OddIndices.keeps(tick(-2)));
        assert!(TickFilter::EvenIndices.keeps(tick(0)));
    }

    #[test]
    fn every_nth_counts_from_zero() {
        let filter = TickFilter::EveryNth(3);
        let kept: Vec<i32> = (-4..=4)
            .map(tick)
            .filter(|t| filter.keeps(*t))
            .map(|t| t.index)
            .collect();
        assert_eq!(kept, vec![-3, 0, 3]);
    }
}
