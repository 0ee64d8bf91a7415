use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PickerError, PickerResult};

use super::components::ComponentToggles;
use super::lenient;

/// Color used when neither the host value nor any default names one.
pub const FALLBACK_DEFAULT_COLOR: &str = "#42445a";

pub const DEFAULT_SAVE_LABEL: &str = "Save";
pub const DEFAULT_CLEAR_LABEL: &str = "Clear";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

pub type Swatches = SmallVec<[String; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Monolith,
    Nano,
}

impl Theme {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Monolith => "monolith",
            Self::Nano => "nano",
        }
    }
}

/// Popup placement relative to the anchor: `{side}-{alignment}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "top-start")]
    TopStart,
    #[serde(rename = "top-middle")]
    TopMiddle,
    #[serde(rename = "top-end")]
    TopEnd,
    #[serde(rename = "bottom-start")]
    BottomStart,
    #[default]
    #[serde(rename = "bottom-middle")]
    BottomMiddle,
    #[serde(rename = "bottom-end")]
    BottomEnd,
    #[serde(rename = "left-start")]
    LeftStart,
    #[serde(rename = "left-middle")]
    LeftMiddle,
    #[serde(rename = "left-end")]
    LeftEnd,
    #[serde(rename = "right-start")]
    RightStart,
    #[serde(rename = "right-middle")]
    RightMiddle,
    #[serde(rename = "right-end")]
    RightEnd,
}

/// Slider layout override; absent means the theme decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderOrientation {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

/// Representation shown in the result input when the picker opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Representation {
    #[default]
    Hex,
    Rgba,
    Hsva,
    Hsla,
    Cmyk,
}

/// Recognized engine options, each optional.
///
/// Used both for caller input and for a widget's built-in defaults. Keys
/// outside this set are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialOptions {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub close_on_scroll: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub app_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub use_as_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub inline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub auto_reposition: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub sliders: Option<SliderOrientation>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub lock_opacity: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub output_precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub comparison: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub swatches: Option<Swatches>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub default_representation: Option<Representation>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub show_always: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub close_with_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub position: Option<Position>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional",
        alias = "adjustableNumber"
    )]
    pub adjustable_numbers: Option<bool>,
}

/// Button label overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelOverrides {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub save: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub clear: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub cancel: Option<String>,
}

/// Resolved button labels, emitted under the engine's `i18n` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabels {
    #[serde(rename = "btn:save")]
    pub save: String,
    #[serde(rename = "btn:clear")]
    pub clear: String,
    #[serde(rename = "btn:cancel")]
    pub cancel: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            save: DEFAULT_SAVE_LABEL.to_owned(),
            clear: DEFAULT_CLEAR_LABEL.to_owned(),
            cancel: DEFAULT_CANCEL_LABEL.to_owned(),
        }
    }
}

/// Complete configuration the engine is constructed with.
///
/// Built once per mount and never mutated after it is handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOptions {
    pub theme: Theme,
    pub close_on_scroll: bool,
    pub app_class: Option<String>,
    pub use_as_button: bool,
    pub inline: bool,
    pub auto_reposition: bool,
    pub sliders: Option<SliderOrientation>,
    pub disabled: bool,
    pub lock_opacity: bool,
    pub output_precision: u32,
    pub comparison: bool,
    pub default: String,
    pub swatches: Swatches,
    pub default_representation: Representation,
    pub show_always: bool,
    pub close_with_key: String,
    pub position: Position,
    pub adjustable_numbers: bool,
    pub i18n: ButtonLabels,
    pub components: ComponentToggles,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            close_on_scroll: false,
            app_class: None,
            use_as_button: false,
            inline: false,
            auto_reposition: true,
            sliders: None,
            disabled: false,
            lock_opacity: false,
            output_precision: 0,
            comparison: true,
            default: FALLBACK_DEFAULT_COLOR.to_owned(),
            swatches: Swatches::new(),
            default_representation: Representation::default(),
            show_always: false,
            close_with_key: "Escape".to_owned(),
            position: Position::default(),
            adjustable_numbers: true,
            i18n: ButtonLabels::default(),
            components: ComponentToggles::default(),
        }
    }
}

impl PickerOptions {
    /// JSON object in the engine's own option spelling, for script-side engines.
    pub fn to_json_value(&self) -> PickerResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| PickerError::InvalidData(format!("failed to serialize options: {e}")))
    }
}
