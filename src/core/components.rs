use serde::{Deserialize, Serialize};

use super::lenient;

/// Depth-wise merge of a partial override onto a fully populated toggle node.
///
/// Leaves are plain booleans whose partial form is `Option<bool>`; branches
/// merge field by field so an override never replaces a whole subtree.
pub trait ToggleMerge: Sized {
    type Partial;

    #[must_use]
    fn merge(self, partial: &Self::Partial) -> Self;
}

impl ToggleMerge for bool {
    type Partial = Option<bool>;

    fn merge(self, partial: &Option<bool>) -> Self {
        partial.unwrap_or(self)
    }
}

/// Interaction row toggles (result inputs and action buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionToggles {
    pub hex: bool,
    pub rgba: bool,
    pub hsla: bool,
    pub hsva: bool,
    pub cmyk: bool,
    pub input: bool,
    pub cancel: bool,
    pub clear: bool,
    pub save: bool,
}

impl Default for InteractionToggles {
    fn default() -> Self {
        Self {
            hex: true,
            rgba: true,
            hsla: false,
            hsva: true,
            cmyk: false,
            input: true,
            cancel: false,
            clear: true,
            save: true,
        }
    }
}

/// Partial form of [`InteractionToggles`]; `None` keeps the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionOverrides {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub hex: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub rgba: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub hsla: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub hsva: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub cmyk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub input: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub cancel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub clear: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub save: Option<bool>,
}

impl ToggleMerge for InteractionToggles {
    type Partial = InteractionOverrides;

    fn merge(self, partial: &InteractionOverrides) -> Self {
        Self {
            hex: self.hex.merge(&partial.hex),
            rgba: self.rgba.merge(&partial.rgba),
            hsla: self.hsla.merge(&partial.hsla),
            hsva: self.hsva.merge(&partial.hsva),
            cmyk: self.cmyk.merge(&partial.cmyk),
            input: self.input.merge(&partial.input),
            cancel: self.cancel.merge(&partial.cancel),
            clear: self.clear.merge(&partial.clear),
            save: self.save.merge(&partial.save),
        }
    }
}

/// Complete feature-toggle tree handed to the engine under `components`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentToggles {
    pub palette: bool,
    pub preview: bool,
    pub opacity: bool,
    pub hue: bool,
    pub interaction: InteractionToggles,
}

impl Default for ComponentToggles {
    fn default() -> Self {
        Self {
            palette: true,
            preview: true,
            opacity: true,
            hue: true,
            interaction: InteractionToggles::default(),
        }
    }
}

/// Caller-supplied partial toggle tree.
///
/// Only the keys that are present override the defaults; a nested
/// `interaction` override leaves its unspecified siblings untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentOverrides {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub palette: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub opacity: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional")]
    pub hue: Option<bool>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub interaction: InteractionOverrides,
}

impl ComponentOverrides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ToggleMerge for ComponentToggles {
    type Partial = ComponentOverrides;

    fn merge(self, partial: &ComponentOverrides) -> Self {
        Self {
            palette: self.palette.merge(&partial.palette),
            preview: self.preview.merge(&partial.preview),
            opacity: self.opacity.merge(&partial.opacity),
            hue: self.hue.merge(&partial.hue),
            interaction: self.interaction.merge(&partial.interaction),
        }
    }
}

/// Merges `overrides` over the built-in default tree.
#[must_use]
pub fn merge_components(overrides: &ComponentOverrides) -> ComponentToggles {
    ComponentToggles::default().merge(overrides)
}
