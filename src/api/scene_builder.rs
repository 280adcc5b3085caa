use tracing::trace;

use crate::core::{
    CoordinateTransform, IndexedTick, Point, index_ticks_filtered, project_area_path,
    project_line_path, to_svg_coords,
};
use crate::render::{
    AreaGeometry, AxisGeometry, GridGeometry, LabelPlacement, LineGeometry, Scene, SceneElement,
    Segment, TickPlacement,
};

use super::{
    AreaConfig, AxisConfig, Element, GridConfig, LabelValues, LineConfig, PlotConfig, PlotProps,
};

/// Builds pixel-space geometry for every element of `config`, in list order.
///
/// `props` must come from [`PlotProps::assemble`] on the same config.
#[must_use]
pub fn build_scene(config: &PlotConfig, props: &PlotProps) -> Scene {
    config
        .elements
        .iter()
        .fold(Scene::new(config.size), |scene, element| {
            let built = match element {
                Element::Axis(axis) => {
                    let oriented = props.clone().oriented(axis.orientation);
                    SceneElement::Axis(axis_geometry(axis, &oriented))
                }
                Element::Grid(grid) => {
                    let oriented = props.clone().oriented(grid.orientation);
                    SceneElement::Grid(grid_geometry(grid, &oriented))
                }
                Element::Line(line) => SceneElement::Line(line_geometry(line, props)),
                Element::Area(area) => SceneElement::Area(area_geometry(area, props)),
            };
            trace!(kind = element_kind(element), "built scene element");
            scene.with_element(built)
        })
}

/// Axis geometry drawn in axis-local `(along, across)` coordinates.
///
/// The baseline sits where the perpendicular axis crosses zero, clamped into
/// its range. `props` must already be oriented like the axis.
#[must_use]
pub fn axis_geometry(axis: &AxisConfig, props: &PlotProps) -> AxisGeometry {
    let transform = props.to_svg_coords;
    let across = props.opposite_scale.clamp(0.0);
    let place = |value: f64| transform.apply(Point::new(value, across));

    let tick_values = axis.tick_strategy.ticks(props.scale);
    let ticks = index_ticks_filtered(&tick_values, axis.clean_crossings)
        .into_iter()
        .filter(|tick| axis.tick_filter.keeps(*tick))
        .map(|IndexedTick { index, value }| TickPlacement {
            index,
            value,
            position: place(value),
        })
        .collect();

    let label_values = match &axis.label_values {
        LabelValues::FromTicks => &tick_values,
        LabelValues::FromValues(values) => values,
    };
    let labels = index_ticks_filtered(label_values, axis.clean_crossings)
        .into_iter()
        .filter(|tick| axis.label_filter.keeps(*tick))
        .map(|IndexedTick { index, value }| LabelPlacement {
            index,
            value,
            text: axis.label_format.format(value),
            position: place(value),
        })
        .collect();

    AxisGeometry {
        orientation: axis.orientation,
        baseline: Segment::new(place(props.scale.lowest), place(props.scale.highest)),
        ticks,
        labels,
        stroke: axis.stroke,
    }
}

/// One line per grid value, spanning the whole primary scale.
///
/// `props` must already be oriented like the grid.
#[must_use]
pub fn grid_geometry(grid: &GridConfig, props: &PlotProps) -> GridGeometry {
    let transform = props.to_svg_coords;
    let values = grid.values.as_deref().unwrap_or(&props.opposite_ticks);
    let lines = values
        .iter()
        .map(|&value| {
            Segment::new(
                transform.apply(Point::new(props.scale.lowest, value)),
                transform.apply(Point::new(props.scale.highest, value)),
            )
        })
        .collect();

    GridGeometry {
        orientation: grid.orientation,
        lines,
        stroke: grid.stroke,
    }
}

#[must_use]
pub fn line_geometry(line: &LineConfig, props: &PlotProps) -> LineGeometry {
    LineGeometry {
        commands: project_line_path(&line.points, data_transform(props)),
        stroke: line.stroke,
    }
}

#[must_use]
pub fn area_geometry(area: &AreaConfig, props: &PlotProps) -> AreaGeometry {
    AreaGeometry {
        commands: project_area_path(&area.points, data_transform(props)),
        stroke: area.stroke,
        fill: area.fill,
    }
}

/// Series points are always `(x, y)`, whatever the props orientation.
fn data_transform(props: &PlotProps) -> CoordinateTransform {
    to_svg_coords(props.x_scale(), props.y_scale())
}

fn element_kind(element: &Element) -> &'static str {
    match element {
        Element::Axis(_) => "axis",
        Element::Grid(_) => "grid",
        Element::Line(_) => "line",
        Element::Area(_) => "area",
    }
}
