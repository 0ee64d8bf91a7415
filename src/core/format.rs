use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

/// Serialization applied to native colors before they reach the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    Hsva,
    Hsla,
    Rgba,
    Hexa,
    Cmyk,
}

impl OutputFormat {
    pub const ALL: [Self; 5] = [Self::Hsva, Self::Hsla, Self::Rgba, Self::Hexa, Self::Cmyk];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hsva => "HSVA",
            Self::Hsla => "HSLA",
            Self::Rgba => "RGBA",
            Self::Hexa => "HEXA",
            Self::Cmyk => "CMYK",
        }
    }

    /// Parses a format name case-insensitively.
    ///
    /// `HEX` is accepted as a legacy alias of `HEXA`.
    pub fn parse(input: &str) -> PickerResult<Self> {
        let normalized = input.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "HSVA" => Ok(Self::Hsva),
            "HSLA" => Ok(Self::Hsla),
            "RGBA" => Ok(Self::Rgba),
            "HEXA" | "HEX" => Ok(Self::Hexa),
            "CMYK" => Ok(Self::Cmyk),
            _ => Err(PickerError::UnsupportedFormat {
                format: input.to_owned(),
            }),
        }
    }

    /// Resolves an optional configured name; `None` selects raw passthrough.
    pub fn resolve(input: Option<&str>) -> PickerResult<Option<Self>> {
        input.map(Self::parse).transpose()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = PickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OutputFormat> for String {
    fn from(value: OutputFormat) -> Self {
        value.name().to_owned()
    }
}
