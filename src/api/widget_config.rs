use serde::{Deserialize, Serialize};

use crate::core::{
    ComponentOverrides, LabelOverrides, OutputFormat, PartialOptions, Position, Representation,
    SliderOrientation, Swatches, Theme,
};
use crate::error::{PickerError, PickerResult};

/// Caller-facing widget configuration.
///
/// Every recognized engine option is optional and falls back to the widget's
/// built-in defaults at assembly time. The record is serializable so hosts can
/// keep picker setup next to the rest of their settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    #[serde(flatten)]
    pub options: PartialOptions,
    #[serde(
        skip_serializing_if = "ComponentOverrides::is_empty",
        deserialize_with = "crate::core::lenient::or_default"
    )]
    pub components: ComponentOverrides,
    #[serde(deserialize_with = "crate::core::lenient::or_default")]
    pub labels: LabelOverrides,
    /// Output format name; `None` hands the host native colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl WidgetConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configured format name.
    pub fn output_format(&self) -> PickerResult<Option<OutputFormat>> {
        OutputFormat::resolve(self.format.as_deref())
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.options.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.options.default = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_swatches<I, S>(mut self, swatches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.swatches = Some(swatches.into_iter().map(Into::into).collect::<Swatches>());
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.options.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_sliders(mut self, sliders: SliderOrientation) -> Self {
        self.options.sliders = Some(sliders);
        self
    }

    #[must_use]
    pub fn with_default_representation(mut self, representation: Representation) -> Self {
        self.options.default_representation = Some(representation);
        self
    }

    #[must_use]
    pub fn with_output_precision(mut self, precision: u32) -> Self {
        self.options.output_precision = Some(precision);
        self
    }

    #[must_use]
    pub fn with_inline(mut self, inline: bool) -> Self {
        self.options.inline = Some(inline);
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.options.disabled = Some(disabled);
        self
    }

    #[must_use]
    pub fn with_lock_opacity(mut self, lock_opacity: bool) -> Self {
        self.options.lock_opacity = Some(lock_opacity);
        self
    }

    #[must_use]
    pub fn with_show_always(mut self, show_always: bool) -> Self {
        self.options.show_always = Some(show_always);
        self
    }

    #[must_use]
    pub fn with_components(mut self, components: ComponentOverrides) -> Self {
        self.components = components;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelOverrides) -> Self {
        self.labels = labels;
        self
    }

    /// Serializes config to pretty JSON for settings files.
    pub fn to_json_pretty(&self) -> PickerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PickerError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    ///
    /// Unrecognized keys are ignored and invalid values for recognized keys
    /// fall back to their defaults; only malformed JSON fails.
    pub fn from_json_str(input: &str) -> PickerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PickerError::InvalidData(format!("failed to parse config: {e}")))
    }
}
