use serde::{Deserialize, Serialize};

use crate::core::{LayoutConfig, RectDescriptor};
use crate::error::{ChartError, ChartResult};
use crate::render::BarFrame;

pub const BAR_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON payload for a laid-out bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayoutJsonContractV1 {
    pub schema_version: u32,
    pub config: LayoutConfig,
    pub rects: Vec<RectDescriptor>,
}

impl BarLayoutJsonContractV1 {
    #[must_use]
    pub fn new(config: LayoutConfig, rects: Vec<RectDescriptor>) -> Self {
        Self {
            schema_version: BAR_LAYOUT_JSON_SCHEMA_V1,
            config,
            rects,
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize bar layout contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse bar layout json payload: {e}"))
        })?;
        if payload.schema_version != BAR_LAYOUT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported bar layout schema version: {}",
                payload.schema_version
            )));
        }
        payload.config.validate()?;
        Ok(payload)
    }

    #[must_use]
    pub fn into_frame(self) -> BarFrame {
        BarFrame::from_layout(&self.config, self.rects)
    }
}

impl BarFrame {
    /// Serializes this frame together with the config that produced it.
    pub fn to_json_contract_v1_pretty(&self, config: &LayoutConfig) -> ChartResult<String> {
        BarLayoutJsonContractV1::new(config.clone(), self.rects.clone()).to_json_pretty()
    }
}
