use crate::core::{LayoutConfig, RectDescriptor};
use crate::error::{ChartError, ChartResult};

/// Backend-agnostic scene for one bar chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFrame {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub rects: Vec<RectDescriptor>,
}

impl BarFrame {
    #[must_use]
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            rects: Vec::new(),
        }
    }

    /// Takes the canvas size from `config` and ownership of `rects`.
    #[must_use]
    pub fn from_layout(config: &LayoutConfig, rects: Vec<RectDescriptor>) -> Self {
        Self {
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            rects,
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectDescriptor) -> Self {
        self.rects.push(rect);
        self
    }

    /// Rejects unusable canvases and non-finite rect geometry.
    ///
    /// Negative extents are finite and therefore accepted here; whether they
    /// can be drawn is up to each backend.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.canvas_width.is_finite()
            || !self.canvas_height.is_finite()
            || self.canvas_width <= 0.0
            || self.canvas_height <= 0.0
        {
            return Err(ChartError::InvalidConfig(format!(
                "frame canvas must be finite and > 0, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }

        for (index, rect) in self.rects.iter().enumerate() {
            if !rect.x.is_finite()
                || !rect.y.is_finite()
                || !rect.width.is_finite()
                || !rect.height.is_finite()
            {
                return Err(ChartError::InvalidData(format!(
                    "rect {index} geometry must be finite"
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
