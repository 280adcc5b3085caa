use crate::error::PlotResult;
use crate::render::{Renderer, Scene};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates scene content so tests catch invalid geometry before a
/// real markup backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_element_count: usize,
    pub last_label_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> PlotResult<()> {
        scene.validate()?;
        self.last_element_count = scene.elements.len();
        self.last_label_count = scene.axes().map(|axis| axis.labels.len()).sum();
        self.render_count += 1;
        Ok(())
    }
}
