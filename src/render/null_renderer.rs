use crate::error::ChartResult;
use crate::render::{BarFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so callers catch non-finite geometry
/// without a drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &BarFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rects.len();
        self.render_count += 1;
        Ok(())
    }
}
