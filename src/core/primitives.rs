use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Slack applied before `ceil`/`floor` when a quotient of two floats should
/// land on an integer but drifted by a few ulps.
pub(crate) const QUOTIENT_EPSILON: f64 = 1e-9;

/// Significant digits kept when reading the decimal expansion of a delta.
const DELTA_SIGNIFICANT_DIGITS: u32 = 12;

/// Largest scale `rust_decimal` can round to.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Smallest multiple of `delta` that is `>= value`.
#[must_use]
pub fn ceil_to_nearest_multiple(delta: f64, value: f64) -> f64 {
    let multiple = (value / delta - QUOTIENT_EPSILON).ceil() * delta;
    // ceil(-0.5) is -0.0; ticks must never carry a negative zero.
    multiple + 0.0
}

/// Number of decimal places tick values keep for a given step.
///
/// Steps `>= 1` keep none; smaller steps keep `-floor(log10(delta))` places,
/// widened when the step itself needs more digits (`0.25` keeps two).
#[must_use]
pub fn delta_precision(delta: f64) -> u32 {
    if !delta.is_finite() || delta <= 0.0 {
        return 0;
    }

    let magnitude = delta.log10().floor().min(0.0).abs() as u32;
    let digits = Decimal::from_f64(delta)
        .and_then(|value| value.round_sf(DELTA_SIGNIFICANT_DIGITS))
        .map(|value| value.normalize().scale())
        .unwrap_or(0);

    magnitude.max(digits).min(MAX_DECIMAL_SCALE)
}

/// Rounds `value` to `precision` decimal places, midpoint away from zero.
///
/// Rounding goes through decimal arithmetic so the result never depends on
/// float formatting. Values outside the decimal range are returned unchanged.
#[must_use]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let Some(decimal) = Decimal::from_f64(value) else {
        return value;
    };

    decimal
        .round_dp_with_strategy(
            precision.min(MAX_DECIMAL_SCALE),
            RoundingStrategy::MidpointAwayFromZero,
        )
        .to_f64()
        .map_or(value, |rounded| rounded + 0.0)
}

#[cfg(test)]
mod tests {
    use super::{ceil_to_nearest_multiple, delta_precision, round_to_precision};

    #[test]
    fn ceil_never_yields_negative_zero() {
        let value = ceil_to_nearest_multiple(4.0, -2.0);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn ceil_absorbs_quotient_drift() {
        // 1.1 / 0.1 == 11.000000000000002
        assert!((ceil_to_nearest_multiple(0.1, 1.1) - 1.1).abs() < 1e-12);
    }

    #[test]
    fn precision_follows_magnitude_and_digits() {
        assert_eq!(delta_precision(10.0), 0);
        assert_eq!(delta_precision(1.0), 0);
        assert_eq!(delta_precision(0.5), 1);
        assert_eq!(delta_precision(0.01), 2);
        assert_eq!(delta_precision(0.25), 2);
        assert_eq!(delta_precision(2.5), 1);
    }

    #[test]
    fn rounding_removes_accumulated_drift() {
        assert_eq!(round_to_precision(0.1 + 0.2, 1), 0.3);
        assert_eq!(round_to_precision(2.5, 0), 3.0);
        assert_eq!(round_to_precision(-2.5, 0), -3.0);
    }
}
