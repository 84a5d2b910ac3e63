mod frame;
mod null_renderer;
mod svg;

pub use frame::BarFrame;
pub use null_renderer::NullRenderer;
pub use svg::{MOUNT_ELEMENT_ID, SVG_NAMESPACE, SvgRenderer, html_page};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully laid-out `BarFrame`, so drawing code never
/// touches samples or layout math.
pub trait Renderer {
    fn render(&mut self, frame: &BarFrame) -> ChartResult<()>;
}
