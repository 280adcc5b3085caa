mod null_renderer;
mod primitives;
mod scene;

pub use null_renderer::NullRenderer;
pub use primitives::{Color, LabelPlacement, Segment, StrokeStyle, TickPlacement};
pub use scene::{AreaGeometry, AxisGeometry, GridGeometry, LineGeometry, Scene, SceneElement};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `Scene` so markup
/// generation stays isolated from scale and tick computation.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> PlotResult<()>;
}
