use std::fmt;

use crate::error::PickerResult;

use super::format::OutputFormat;

/// Contract for the engine's native color object.
///
/// Conversion math lives entirely on the engine side; the bridge only asks
/// for a named serialization.
pub trait NativeColor: Clone + fmt::Debug {
    fn to_hsva(&self) -> String;
    fn to_hsla(&self) -> String;
    fn to_rgba(&self) -> String;
    fn to_hexa(&self) -> String;
    fn to_cmyk(&self) -> String;

    fn to_format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Hsva => self.to_hsva(),
            OutputFormat::Hsla => self.to_hsla(),
            OutputFormat::Rgba => self.to_rgba(),
            OutputFormat::Hexa => self.to_hexa(),
            OutputFormat::Cmyk => self.to_cmyk(),
        }
    }
}

/// Host-observable color value.
///
/// `Native` only appears when no output format is configured.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerValue<C> {
    Text(String),
    Native(C),
}

impl<C> PickerValue<C> {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Native(_) => None,
        }
    }

    #[must_use]
    pub fn as_native(&self) -> Option<&C> {
        match self {
            Self::Text(_) => None,
            Self::Native(color) => Some(color),
        }
    }
}

/// Converts a native color into the configured representation.
///
/// Absent colors stay absent; without a format the native object is passed
/// through unconverted.
#[must_use]
pub fn format_native<C: NativeColor>(
    color: Option<&C>,
    format: Option<OutputFormat>,
) -> Option<PickerValue<C>> {
    let color = color?;
    Some(match format {
        Some(format) => PickerValue::Text(color.to_format(format)),
        None => PickerValue::Native(color.clone()),
    })
}

/// Formats `color` with a format given by name.
///
/// An absent color is absent whatever the format; the name is only
/// validated when there is a color to convert.
pub fn format_color<C: NativeColor>(
    color: Option<&C>,
    format: Option<&str>,
) -> PickerResult<Option<PickerValue<C>>> {
    let Some(color) = color else {
        return Ok(None);
    };
    let format = OutputFormat::resolve(format)?;
    Ok(format_native(Some(color), format))
}
