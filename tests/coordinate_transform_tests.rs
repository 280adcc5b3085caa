use approx::assert_relative_eq;
use plot_rs::core::{AxisScale, Orientation, Point, to_svg_coords, to_svg_coords_y};

fn scale(lowest: f64, highest: f64, length: f64) -> AxisScale {
    AxisScale {
        range: highest - lowest,
        lowest,
        highest,
        length,
    }
}

#[test]
fn x_grows_right_and_y_grows_down() {
    let transform = to_svg_coords(scale(0.0, 10.0, 1000.0), scale(0.0, 100.0, 500.0));

    let origin = transform.apply(Point::new(0.0, 0.0));
    assert_eq!(origin, Point::new(0.0, 500.0));

    let top_right = transform.apply(Point::new(10.0, 100.0));
    assert_eq!(top_right, Point::new(1000.0, 0.0));

    let middle = transform.apply(Point::new(5.0, 50.0));
    assert_relative_eq!(middle.x, 500.0);
    assert_relative_eq!(middle.y, 250.0);
}

#[test]
fn negative_lowest_shifts_origin_inward() {
    let transform = to_svg_coords(scale(-5.0, 5.0, 100.0), scale(-10.0, 10.0, 200.0));
    let origin = transform.apply(Point::new(0.0, 0.0));
    assert_relative_eq!(origin.x, 50.0);
    assert_relative_eq!(origin.y, 100.0);
}

#[test]
fn positive_lowest_maps_to_left_edge() {
    let transform = to_svg_coords(scale(8.0, 36.0, 500.0), scale(0.0, 1.0, 100.0));
    assert_relative_eq!(transform.apply(Point::new(8.0, 0.0)).x, 0.0);
    assert_relative_eq!(transform.apply(Point::new(36.0, 0.0)).x, 500.0);
}

#[test]
fn transposed_transform_swaps_before_mapping() {
    let x_scale = scale(0.0, 10.0, 1000.0);
    let y_scale = scale(0.0, 100.0, 500.0);
    let standard = to_svg_coords(x_scale, y_scale);
    let transposed = to_svg_coords_y(x_scale, y_scale);

    assert_eq!(standard.orientation(), Orientation::X);
    assert_eq!(transposed.orientation(), Orientation::Y);

    for (along, across) in [(0.0, 0.0), (25.0, 3.0), (100.0, 10.0), (-7.5, 2.5)] {
        assert_eq!(
            transposed.apply(Point::new(along, across)),
            standard.apply(Point::new(across, along))
        );
    }
}

#[test]
fn degenerate_range_yields_non_finite_pixels() {
    let transform = to_svg_coords(scale(3.0, 3.0, 100.0), scale(0.0, 1.0, 100.0));
    assert!(!transform.apply(Point::new(4.0, 0.5)).is_finite());
}
