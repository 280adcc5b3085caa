use tracing::{debug, warn};

use crate::error::PlotResult;
use crate::render::{Renderer, Scene};

use super::{PlotConfig, PlotProps, build_scene};

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` owns a validated configuration and a renderer, and runs one
/// full pass (props, scene, render) per `render` call.
pub struct PlotEngine<R: Renderer> {
    renderer: R,
    config: PlotConfig,
}

impl<R: Renderer> PlotEngine<R> {
    pub fn new(renderer: R, config: PlotConfig) -> PlotResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PlotConfig) -> PlotResult<()> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejected plot config");
            return Err(err);
        }
        self.config = config;
        Ok(())
    }

    pub fn plot_props(&self) -> PlotResult<PlotProps> {
        PlotProps::assemble(&self.config)
    }

    pub fn build_scene(&self) -> PlotResult<Scene> {
        let props = self.plot_props()?;
        Ok(build_scene(&self.config, &props))
    }

    /// Builds the scene, hands it to the renderer and returns it.
    pub fn render(&mut self) -> PlotResult<Scene> {
        let scene = self.build_scene()?;
        debug!(element_count = scene.elements.len(), "render plot scene");
        self.renderer.render(&scene)?;
        Ok(scene)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
