pub mod color;
pub mod components;
pub mod format;
pub(crate) mod lenient;
pub mod options;

pub use color::{NativeColor, PickerValue, format_color, format_native};
pub use components::{
    ComponentOverrides, ComponentToggles, InteractionOverrides, InteractionToggles, ToggleMerge,
    merge_components,
};
pub use format::OutputFormat;
pub use options::{
    ButtonLabels, FALLBACK_DEFAULT_COLOR, LabelOverrides, PartialOptions, PickerOptions, Position,
    Representation, SliderOrientation, Swatches, Theme,
};
