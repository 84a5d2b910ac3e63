use std::fmt::Write as _;

use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{BarFrame, Renderer};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// Id of the element the chart is mounted into by `html_page`.
pub const MOUNT_ELEMENT_ID: &str = "barplot";

/// Renders frames into standalone SVG documents.
///
/// Each call to `render` replaces the previous document; a failed render
/// leaves it empty.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered document, empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn take_document(&mut self) -> String {
        std::mem::take(&mut self.document)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &BarFrame) -> ChartResult<()> {
        self.document.clear();
        frame.validate()?;
        let document = write_svg(frame).map_err(|e| {
            ChartError::InvalidData(format!("failed to write svg document: {e}"))
        })?;
        debug!(
            rects = frame.rects.len(),
            bytes = document.len(),
            "rendered svg document"
        );
        self.document = document;
        Ok(())
    }
}

fn write_svg(frame: &BarFrame) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="{SVG_NAMESPACE}" width="{}" height="{}">"#,
        frame.canvas_width, frame.canvas_height
    )?;
    for (index, rect) in frame.rects.iter().enumerate() {
        if rect.width < 0.0 || rect.height < 0.0 {
            // Negative extents disable rendering of the element in SVG.
            warn!(
                index,
                width = rect.width,
                height = rect.height,
                "rect has negative extent and will not be drawn"
            );
        }
        writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape_attribute(&rect.fill)
        )?;
    }
    out.push_str("</svg>\n");
    Ok(out)
}

/// Wraps an SVG document into a minimal HTML page with a chart mount point.
#[must_use]
pub fn html_page(title: &str, svg: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>{}</title>\n</head>\n<body>\n<div id=\"{MOUNT_ELEMENT_ID}\">\n{}</div>\n</body>\n</html>\n",
        escape_text(title),
        svg
    )
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attribute(value: &str) -> String {
    escape_text(value)
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
