use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::AxisScale;
use crate::core::primitives::{
    QUOTIENT_EPSILON, ceil_to_nearest_multiple, delta_precision, round_to_precision,
};

/// Tick count used when an axis does not configure a strategy.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Upper bound on ticks produced from a delta; guards against tiny deltas over huge ranges.
pub const MAX_GENERATED_TICKS: usize = 10_000;

const NICE_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// How an axis chooses its tick values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickStrategy {
    /// Explicit values, used verbatim.
    FromValues(Vec<f64>),
    /// Every multiple of the delta inside the scale.
    FromDelta(f64),
    /// About this many ticks on a 1-2-5 step.
    FromCount(usize),
}

impl Default for TickStrategy {
    fn default() -> Self {
        Self::FromCount(DEFAULT_TICK_COUNT)
    }
}

impl TickStrategy {
    /// Tick values for `scale`.
    #[must_use]
    pub fn ticks(&self, scale: AxisScale) -> Vec<f64> {
        match self {
            Self::FromValues(values) => values.clone(),
            Self::FromDelta(delta) => ticks_from_delta(*delta, scale),
            Self::FromCount(count) => ticks_from_count(*count, scale),
        }
    }

    /// Whether covering `scale` would take more than [`MAX_GENERATED_TICKS`] values.
    #[must_use]
    pub fn exceeds_tick_limit(&self, scale: AxisScale) -> bool {
        let delta = match self {
            Self::FromValues(_) => return false,
            Self::FromDelta(delta) => Some(*delta),
            Self::FromCount(count) => nice_delta(scale.range, *count),
        };
        delta
            .and_then(|delta| delta_steps(delta, scale))
            .is_some_and(|steps| steps >= MAX_GENERATED_TICKS)
    }
}

/// Multiples of `delta` between `scale.lowest` and `scale.highest`, bounds included.
///
/// Values are rounded to [`delta_precision`] places so repeated additions
/// never leak float drift into the output. `delta` must be finite and `> 0`.
/// Output stops at [`MAX_GENERATED_TICKS`]; see [`TickStrategy::exceeds_tick_limit`].
#[must_use]
pub fn ticks_from_delta(delta: f64, scale: AxisScale) -> Vec<f64> {
    let Some(steps) = delta_steps(delta, scale) else {
        return Vec::new();
    };

    let tick_count = if steps >= MAX_GENERATED_TICKS {
        warn!(
            delta,
            lowest = scale.lowest,
            highest = scale.highest,
            limit = MAX_GENERATED_TICKS,
            "tick delta too small for scale, truncating ticks"
        );
        MAX_GENERATED_TICKS - 1
    } else {
        steps
    };
    let first_value = ceil_to_nearest_multiple(delta, scale.lowest);
    let precision = delta_precision(delta);

    // Drift slack may land a rounded value just outside the scale.
    let mut ticks: Vec<f64> = (0..=tick_count)
        .map(|index| round_to_precision(first_value + index as f64 * delta, precision))
        .skip_while(|tick| *tick < scale.lowest)
        .collect();
    while ticks.last().is_some_and(|tick| *tick > scale.highest) {
        ticks.pop();
    }
    ticks
}

/// Intervals between the first and last multiple of `delta` in `scale`, or
/// `None` when no multiple fits.
fn delta_steps(delta: f64, scale: AxisScale) -> Option<usize> {
    let first_value = ceil_to_nearest_multiple(delta, scale.lowest);
    let steps = ((scale.range - (first_value - scale.lowest)) / delta + QUOTIENT_EPSILON).floor();
    (steps.is_finite() && steps >= 0.0).then_some(steps as usize)
}

/// About `approx_count` ticks on a nice delta, see [`nice_delta`].
///
/// A zero or non-finite range has no meaningful step; the scale's lowest
/// value is returned as the lone tick.
#[must_use]
pub fn ticks_from_count(approx_count: usize, scale: AxisScale) -> Vec<f64> {
    match nice_delta(scale.range, approx_count) {
        Some(delta) => ticks_from_delta(delta, scale),
        None => vec![scale.lowest],
    }
}

/// Picks a step from `{1, 2, 5, 10} x 10^k` for splitting `range` into about
/// `approx_count` intervals.
///
/// `k` is the magnitude of `range / approx_count`. The candidate whose
/// interval count `range / delta` lies closest to `approx_count` wins; on a
/// tie the larger delta (fewer ticks) wins.
#[must_use]
pub fn nice_delta(range: f64, approx_count: usize) -> Option<f64> {
    if approx_count == 0 || !range.is_finite() || range <= 0.0 {
        return None;
    }

    let target = approx_count as f64;
    let raw_delta = range / target;
    let magnitude = power_of_ten(raw_delta.log10().floor() as i32);

    let candidates: SmallVec<[f64; 4]> = NICE_MULTIPLIERS
        .iter()
        .map(|multiplier| multiplier * magnitude)
        .filter(|delta| delta.is_finite() && *delta > 0.0)
        .collect();

    // `min_by_key` keeps the first minimum, so walk from the largest delta.
    candidates
        .iter()
        .rev()
        .copied()
        .min_by_key(|delta| OrderedFloat((range / delta - target).abs()))
}

/// Nearest double to `10^exponent`; negative powers divide so `0.1` stays `0.1`.
fn power_of_ten(exponent: i32) -> f64 {
    if exponent >= 0 {
        10f64.powi(exponent)
    } else {
        1.0 / 10f64.powi(-exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::power_of_ten;

    #[test]
    fn negative_powers_match_literals() {
        assert_eq!(power_of_ten(-1), 0.1);
        assert_eq!(power_of_ten(-3), 0.001);
        assert_eq!(power_of_ten(2), 100.0);
    }
}
