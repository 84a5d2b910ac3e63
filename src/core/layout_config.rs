use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const WIDE_CANVAS_WIDTH: f64 = 500.0;
pub const NARROW_CANVAS_WIDTH: f64 = 400.0;
pub const CANVAS_HEIGHT: f64 = 300.0;
pub const DEFAULT_BAR_PADDING: f64 = 5.0;
pub const DEFAULT_FILL_COLOR: &str = "steelblue";

/// Canvas size, bar gutter and fill shared by every bar of one layout pass.
///
/// This type is serializable so hosts can keep chart setup in a JSON file
/// instead of hard-coding constants next to the draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    /// Also the baseline every bar grows up from.
    pub canvas_height: f64,
    #[serde(default = "default_bar_padding")]
    pub bar_padding: f64,
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
}

impl LayoutConfig {
    #[must_use]
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        bar_padding: f64,
        fill_color: impl Into<String>,
    ) -> Self {
        Self {
            canvas_width,
            canvas_height,
            bar_padding,
            fill_color: fill_color.into(),
        }
    }

    /// 500x300 canvas, 5px gutters, `steelblue` bars.
    #[must_use]
    pub fn wide_steelblue() -> Self {
        Self::new(
            WIDE_CANVAS_WIDTH,
            CANVAS_HEIGHT,
            DEFAULT_BAR_PADDING,
            DEFAULT_FILL_COLOR,
        )
    }

    /// 400x300 canvas, 10px gutters, `blue` bars.
    ///
    /// With ten samples every slot is 40px wide and every bar 30px wide.
    #[must_use]
    pub fn narrow_blue() -> Self {
        Self::new(NARROW_CANVAS_WIDTH, CANVAS_HEIGHT, 10.0, "blue")
    }

    #[must_use]
    pub fn with_canvas_size(mut self, canvas_width: f64, canvas_height: f64) -> Self {
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
        self
    }

    #[must_use]
    pub fn with_bar_padding(mut self, bar_padding: f64) -> Self {
        self.bar_padding = bar_padding;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, fill_color: impl Into<String>) -> Self {
        self.fill_color = fill_color.into();
        self
    }

    /// Checks canvas dimensions, padding and fill.
    ///
    /// Padding is not compared against the slot width: that depends on the
    /// sample count and oversized padding is passed through as-is.
    pub fn validate(&self) -> ChartResult<()> {
        validate_canvas_dimension("canvas_width", self.canvas_width)?;
        validate_canvas_dimension("canvas_height", self.canvas_height)?;
        if !self.bar_padding.is_finite() || self.bar_padding < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "bar_padding must be finite and >= 0, got {}",
                self.bar_padding
            )));
        }
        if self.fill_color.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "fill_color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse layout config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout config: {e}"))
        })
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::wide_steelblue()
    }
}

fn validate_canvas_dimension(field: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{field} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

fn default_bar_padding() -> f64 {
    DEFAULT_BAR_PADDING
}

fn default_fill_color() -> String {
    DEFAULT_FILL_COLOR.to_owned()
}
