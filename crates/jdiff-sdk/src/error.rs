use thiserror::Error;

use crate::compare::Side;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("{side} document: {source}")]
    Format {
        side: Side,
        #[source]
        source: jdiff_format::FormatError,
    },

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: String, value: String },

    #[error("settings error: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
