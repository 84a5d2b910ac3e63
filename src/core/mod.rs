pub mod bar_geometry;
pub mod layout_config;
pub mod sampling;

pub use bar_geometry::{RectDescriptor, layout, slot_width};
pub use layout_config::{
    CANVAS_HEIGHT, DEFAULT_BAR_PADDING, DEFAULT_FILL_COLOR, LayoutConfig, NARROW_CANVAS_WIDTH,
    WIDE_CANVAS_WIDTH,
};
pub use sampling::{
    DEFAULT_SAMPLE_COUNT, FixedSamples, NARROW_PRESET_MAX, SampleSource, UniformSampleSource,
    WIDE_PRESET_MAX,
};
