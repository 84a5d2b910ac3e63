use tracing::{debug, trace};

use crate::core::{LayoutConfig, RectDescriptor, SampleSource, layout};
use crate::error::ChartResult;
use crate::render::{BarFrame, Renderer};

/// Facade wiring one layout config to one renderer.
///
/// Every render pass is an explicit call with the samples to draw; nothing is
/// laid out or drawn implicitly.
pub struct BarChart<R: Renderer> {
    renderer: R,
    config: LayoutConfig,
}

impl<R: Renderer> BarChart<R> {
    pub fn new(renderer: R, config: LayoutConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the config; the previous one is kept when validation fails.
    pub fn set_config(&mut self, config: LayoutConfig) -> ChartResult<()> {
        config.validate()?;
        debug!(
            canvas_width = config.canvas_width,
            canvas_height = config.canvas_height,
            bar_padding = config.bar_padding,
            "layout config updated"
        );
        self.config = config;
        Ok(())
    }

    pub fn layout(&self, samples: &[f64]) -> ChartResult<Vec<RectDescriptor>> {
        layout(samples, &self.config)
    }

    pub fn frame(&self, samples: &[f64]) -> ChartResult<BarFrame> {
        let rects = self.layout(samples)?;
        Ok(BarFrame::from_layout(&self.config, rects))
    }

    /// Lays out `samples`, hands the frame to the renderer and returns it.
    pub fn render(&mut self, samples: &[f64]) -> ChartResult<BarFrame> {
        let frame = self.frame(samples)?;
        trace!(rects = frame.rects.len(), "render bar frame");
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    /// Pulls one batch from `source` and renders it.
    pub fn render_from<S: SampleSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> ChartResult<BarFrame> {
        let samples = source.next_samples()?;
        debug!(count = samples.len(), "render samples from source");
        self.render(&samples)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
