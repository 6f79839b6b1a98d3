use crate::error::FormatError;
use crate::postal::Country;
use crate::settings::SettingsError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FmtError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("invalid argument: {msg}")]
    InvalidArgument { msg: String },
}

impl From<FormatError> for FmtError {
    fn from(e: FormatError) -> Self {
        match e {
            FormatError::InvalidArgument(msg) => FmtError::InvalidArgument { msg },
            other => FmtError::InvalidData {
                msg: other.to_string(),
            },
        }
    }
}

impl From<SettingsError> for FmtError {
    fn from(e: SettingsError) -> Self {
        FmtError::InvalidData { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum FmtPostalCountry {
    Us,
    Ca,
}

impl From<FmtPostalCountry> for Country {
    fn from(c: FmtPostalCountry) -> Self {
        match c {
            FmtPostalCountry::Us => Country::Us,
            FmtPostalCountry::Ca => Country::Ca,
        }
    }
}
