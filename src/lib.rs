//! plot-rs: declarative plot scale, tick and coordinate engine.
//!
//! Given line/area series and axis/grid configuration, the crate derives one
//! affine scale per axis, generates tick values, indexes them by distance from
//! zero and maps every renderable into a backend-agnostic pixel-space scene.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotConfig, PlotEngine, PlotProps};
pub use error::{PlotError, PlotResult};
