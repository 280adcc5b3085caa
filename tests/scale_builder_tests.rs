use approx::assert_relative_eq;
use plot_rs::core::{AxisScale, Extent, Padding, build_scale, pixels_to_value, scale_value};

#[test]
fn unpadded_scale_spans_raw_values() {
    let values = [8.0, 13.0, 14.0, 12.0, 11.0, 16.0, 22.0, 32.0, 36.0];
    let scale = build_scale(500, Padding::ZERO, &values).expect("non-empty values");

    assert_eq!(
        scale,
        AxisScale {
            range: 28.0,
            lowest: 8.0,
            highest: 36.0,
            length: 500.0,
        }
    );
}

#[test]
fn pixel_padding_extends_both_ends() {
    // 100 data units over 500 px: 50 px == 10 units, 25 px == 5 units.
    let scale = build_scale(500, Padding::new(50.0, 25.0), &[0.0, 100.0]).expect("scale");

    assert_relative_eq!(scale.lowest, -10.0);
    assert_relative_eq!(scale.highest, 105.0);
    assert_relative_eq!(scale.range, 115.0);
    assert_relative_eq!(scale.range, scale.highest - scale.lowest);
    assert_eq!(scale.length, 500.0);
}

#[test]
fn single_value_without_padding_is_degenerate() {
    let scale = build_scale(300, Padding::ZERO, &[4.0, 4.0]).expect("scale");
    assert_eq!(scale.range, 0.0);
    assert!(scale.is_degenerate());
}

#[test]
fn padding_on_single_value_stays_degenerate() {
    // Padding converts through the data range, which is zero here.
    let scale = build_scale(300, Padding::new(10.0, 10.0), &[4.0]).expect("scale");
    assert_eq!(scale.range, 0.0);
}

#[test]
fn from_extent_matches_build_scale() {
    let extent = Extent {
        min: -3.0,
        max: 7.0,
    };
    let padding = Padding::new(20.0, 40.0);
    let from_extent = AxisScale::from_extent(200, padding, extent);
    let built = build_scale(200, padding, &[7.0, -3.0, 0.0]).expect("scale");
    assert_eq!(from_extent, built);
}

#[test]
fn scale_value_maps_range_onto_length() {
    let scale = build_scale(400, Padding::ZERO, &[-50.0, 50.0]).expect("scale");
    assert_eq!(scale_value(scale, 0.0), 0.0);
    assert_relative_eq!(scale_value(scale, 100.0), 400.0);
    assert_relative_eq!(scale_value(scale, 25.0), 100.0);
}

#[test]
fn pixels_to_value_is_inverse_of_scale_value() {
    let scale = build_scale(640, Padding::ZERO, &[2.0, 18.0]).expect("scale");
    let data = pixels_to_value(640, scale.range, 120.0);
    assert_relative_eq!(scale_value(scale, data), 120.0, epsilon = 1e-9);
}
