mod axis_config;
mod engine;
mod json_contract;
mod plot_config;
mod plot_props;
mod scene_builder;
mod series_config;

pub use axis_config::{AxisConfig, LabelFormat, LabelValues, TickFilter};
pub use engine::PlotEngine;
pub use json_contract::{PLOT_CONFIG_JSON_SCHEMA_V1, PlotConfigJsonContractV1};
pub use plot_config::{Element, PlotConfig};
pub use plot_props::PlotProps;
pub use scene_builder::{area_geometry, axis_geometry, build_scene, grid_geometry, line_geometry};
pub use series_config::{AreaConfig, GridConfig, LineConfig};
