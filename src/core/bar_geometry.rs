use serde::{Deserialize, Serialize};

use crate::core::LayoutConfig;
use crate::error::{ChartError, ChartResult};

/// Screen-space geometry and fill for one bar.
///
/// `y` is the top edge; bars grow up from `canvas_height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectDescriptor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// Horizontal space given to each of `sample_count` bars before padding.
pub fn slot_width(canvas_width: f64, sample_count: usize) -> ChartResult<f64> {
    if sample_count == 0 {
        return Err(ChartError::DivisionByZero(
            "slot width needs at least one sample".to_owned(),
        ));
    }
    Ok(canvas_width / sample_count as f64)
}

/// Maps samples to one rectangle each, in input order.
///
/// Bar `i` starts at `i * slot_width`, is `slot_width - bar_padding` wide and
/// `samples[i]` tall, with its top at `canvas_height - samples[i]`.
///
/// Sample values are not validated: negative values yield negative heights and
/// values above `canvas_height` yield negative `y`. Padding at or above the
/// slot width yields zero or negative widths. Empty input yields an empty
/// layout.
pub fn layout(samples: &[f64], config: &LayoutConfig) -> ChartResult<Vec<RectDescriptor>> {
    config.validate()?;

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let slot = slot_width(config.canvas_width, samples.len())?;
    let bar_width = slot - config.bar_padding;

    let rects = samples
        .iter()
        .enumerate()
        .map(|(index, &value)| RectDescriptor {
            x: index as f64 * slot,
            y: config.canvas_height - value,
            width: bar_width,
            height: value,
            fill: config.fill_color.clone(),
        })
        .collect();

    Ok(rects)
}
