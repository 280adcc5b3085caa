use approx::assert_relative_eq;
use plot_rs::core::{
    AxisScale, MAX_GENERATED_TICKS, Padding, TickStrategy, build_scale, nice_delta,
    ticks_from_count, ticks_from_delta,
};

fn scale(lowest: f64, highest: f64) -> AxisScale {
    AxisScale {
        range: highest - lowest,
        lowest,
        highest,
        length: 500.0,
    }
}

#[test]
fn explicit_values_pass_through_untouched() {
    let strategy = TickStrategy::FromValues(vec![0.0, 1.0, 2.0, 4.0, 8.0]);
    assert_eq!(strategy.ticks(scale(-100.0, 3.0)), vec![0.0, 1.0, 2.0, 4.0, 8.0]);

    let unsorted = TickStrategy::FromValues(vec![5.0, -1.0, 5.0]);
    assert_eq!(unsorted.ticks(scale(0.0, 1.0)), vec![5.0, -1.0, 5.0]);
}

#[test]
fn delta_starts_at_first_multiple_above_lowest() {
    let ticks = ticks_from_delta(4.0, scale(-2.0, 10.0));
    assert_eq!(ticks, vec![0.0, 4.0, 8.0]);
    assert!(ticks[0].is_sign_positive());
}

#[test]
fn delta_includes_both_bounds_when_they_are_multiples() {
    assert_eq!(
        ticks_from_delta(5.0, scale(-10.0, 10.0)),
        vec![-10.0, -5.0, 0.0, 5.0, 10.0]
    );
}

#[test]
fn delta_never_overshoots_positive_lowest() {
    let ticks = ticks_from_delta(4.0, scale(3.0, 19.0));
    assert_eq!(ticks, vec![4.0, 8.0, 12.0, 16.0]);
}

#[test]
fn fractional_delta_values_are_exact_decimals() {
    let ticks = ticks_from_delta(0.1, scale(0.0, 1.0));
    let expected = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    assert_eq!(ticks, expected);
}

#[test]
fn quarter_delta_keeps_two_decimals() {
    assert_eq!(
        ticks_from_delta(0.25, scale(-0.3, 0.8)),
        vec![-0.25, 0.0, 0.25, 0.5, 0.75]
    );
}

#[test]
fn delta_larger_than_range_may_yield_nothing() {
    assert!(ticks_from_delta(10.0, scale(1.0, 9.0)).is_empty());
}

#[test]
fn automatic_count_on_hundred_picks_ten() {
    assert_eq!(nice_delta(100.0, 10), Some(10.0));

    let ticks = ticks_from_count(10, scale(0.0, 100.0));
    assert_eq!(ticks.len(), 11);
    assert!(ticks.iter().all(|tick| tick % 10.0 == 0.0));
}

#[test]
fn nice_delta_uses_one_two_five_steps() {
    assert_eq!(nice_delta(1.0, 10), Some(0.1));
    assert_eq!(nice_delta(28.0, 10), Some(2.0));
    assert_eq!(nice_delta(42.0, 10), Some(5.0));
    assert_eq!(nice_delta(3_000.0, 4), Some(1_000.0));
}

#[test]
fn nice_delta_tie_prefers_fewer_ticks() {
    // range 20 / count 7: delta 2 gives 10 intervals, delta 5 gives 4; both 3 away.
    assert_eq!(nice_delta(20.0, 7), Some(5.0));
}

#[test]
fn nice_delta_rejects_degenerate_input() {
    assert_eq!(nice_delta(0.0, 10), None);
    assert_eq!(nice_delta(10.0, 0), None);
    assert_eq!(nice_delta(f64::NAN, 10), None);
}

#[test]
fn automatic_count_on_zero_range_returns_lowest() {
    assert_eq!(ticks_from_count(10, scale(3.0, 3.0)), vec![3.0]);
}

#[test]
fn default_strategy_is_ten_ticks() {
    assert_eq!(TickStrategy::default(), TickStrategy::FromCount(10));
}

#[test]
fn automatic_ticks_on_padded_scale_stay_inside() {
    let values = [8.0, 13.0, 14.0, 12.0, 11.0, 16.0, 22.0, 32.0, 36.0];
    let scale = build_scale(500, Padding::new(10.0, 10.0), &values).expect("scale");
    let ticks = TickStrategy::default().ticks(scale);

    assert!(!ticks.is_empty());
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(ticks.iter().all(|tick| scale.contains(*tick)));
    // range 29.12 over ~10 ticks: delta 5 (5.8 intervals) beats delta 2 (14.6).
    assert_relative_eq!(ticks[1] - ticks[0], 5.0);
    assert_eq!(ticks, vec![10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);
}

#[test]
fn delta_ticks_stop_at_generation_limit() {
    let scale = scale(0.0, 1_000.0);
    let ticks = ticks_from_delta(0.01, scale);

    assert_eq!(ticks.len(), MAX_GENERATED_TICKS);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(99.99));
    assert!(TickStrategy::FromDelta(0.01).exceeds_tick_limit(scale));
    assert!(!TickStrategy::FromDelta(0.1).exceeds_tick_limit(scale));
    assert!(!TickStrategy::FromValues(vec![0.0; 20_000]).exceeds_tick_limit(scale));
}

#[test]
fn drift_slack_never_places_ticks_outside_the_scale() {
    let ticks = ticks_from_delta(4.0, scale(2e-9, 7.999_999_998));
    assert_eq!(ticks, vec![4.0]);

    let ticks = ticks_from_delta(4.0, scale(-4.000_000_001, 12.000_000_001));
    assert_eq!(ticks, vec![-4.0, 0.0, 4.0, 8.0, 12.0]);
}
