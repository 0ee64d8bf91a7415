use thiserror::Error;

pub type PickerResult<T> = Result<T, PickerError>;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("picker engine could not be initialized: {reason}")]
    EngineInit { reason: String },

    #[error("unsupported output format `{format}` (expected HSVA, HSLA, RGBA, HEXA or CMYK)")]
    UnsupportedFormat { format: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl PickerError {
    pub(crate) fn engine_init(reason: impl Into<String>) -> Self {
        Self::EngineInit {
            reason: reason.into(),
        }
    }
}
