mod bar_chart;
mod json_contract;

pub use bar_chart::BarChart;
pub use json_contract::{BAR_LAYOUT_JSON_SCHEMA_V1, BarLayoutJsonContractV1};
