use serde::{Deserialize, Serialize};

/// Tick value tagged with its signed distance from the zero tick.
///
/// Index `1` is always the first positive tick and `-1` the first negative
/// one, whether or not zero itself is among the ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexedTick {
    pub index: i32,
    pub value: f64,
}

/// Assigns zero-crossing indices to ticks sorted ascending.
#[must_use]
pub fn index_ticks(ticks: &[f64]) -> Vec<IndexedTick> {
    let negative_count = ticks.iter().filter(|tick| **tick < 0.0).count() as i32;
    let has_zero = ticks.iter().any(|tick| *tick == 0.0);

    ticks
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            let position = position as i32;
            let index = if value == 0.0 {
                0
            } else if value > 0.0 {
                position - negative_count + i32::from(!has_zero)
            } else {
                position - negative_count
            };
            IndexedTick { index, value }
        })
        .collect()
}

/// Drops the zero tick, used where two perpendicular axes cross.
#[must_use]
pub fn remove_zero_tick(ticks: &[f64]) -> Vec<f64> {
    ticks.iter().copied().filter(|tick| *tick != 0.0).collect()
}

/// Indexes ticks, optionally removing zero first.
#[must_use]
pub fn index_ticks_filtered(ticks: &[f64], remove_zero: bool) -> Vec<IndexedTick> {
    if remove_zero {
        index_ticks(&remove_zero_tick(ticks))
    } else {
        index_ticks(ticks)
    }
}
