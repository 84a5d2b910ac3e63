//! barplot: deterministic bar chart geometry.
//!
//! Samples are mapped to one rectangle each by `core::layout`, collected into
//! a backend-agnostic `render::BarFrame` and handed to a `render::Renderer`
//! (headless or SVG). `api::BarChart` wires the pieces for one render pass.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::BarChart;
pub use crate::core::{LayoutConfig, RectDescriptor, layout};
pub use error::{ChartError, ChartResult};
