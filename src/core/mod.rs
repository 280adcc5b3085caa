pub mod area_series;
pub mod line_series;
pub mod path;
pub mod primitives;
pub mod range;
pub mod scale;
pub mod tick_index;
pub mod ticks;
pub mod transform;
pub mod types;

pub use area_series::{area_baseline, project_area_path};
pub use line_series::project_line_path;
pub use path::{PathCommand, polyline};
pub use primitives::{ceil_to_nearest_multiple, delta_precision, round_to_precision};
pub use range::{Extent, extent_of, series_extent};
pub use scale::{AxisScale, build_scale, pixels_to_value, scale_value};
pub use tick_index::{IndexedTick, index_ticks, index_ticks_filtered, remove_zero_tick};
pub use ticks::{
    DEFAULT_TICK_COUNT, MAX_GENERATED_TICKS, TickStrategy, nice_delta, ticks_from_count,
    ticks_from_delta,
};
pub use transform::{CoordinateTransform, to_svg_coords, to_svg_coords_y};
pub use types::{Orientation, Padding, Point, Size};
