//! Error types for the color helpers

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Argument outside the accepted domain (empty palette, negative step count)
    #[error("Invalid argument: {parameter} ({reason})")]
    InvalidArgument { parameter: String, reason: String },

    /// Input rejected by strict parsing
    #[error("Malformed color '{input}': {reason}")]
    MalformedColor { input: String, reason: String },

    /// Options object could not be decoded
    #[error("Invalid options: {message}")]
    InvalidConfig { message: String },
}

impl ColorError {
    pub fn invalid_argument(parameter: &str, reason: impl Into<String>) -> Self {
        ColorError::InvalidArgument {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed(input: &str, reason: impl Into<String>) -> Self {
        let err = ColorError::MalformedColor {
            input: input.to_string(),
            reason: reason.into(),
        };
        log::warn!("{}", err);
        err
    }
}

impl From<ColorError> for napi::Error {
    fn from(err: ColorError) -> Self {
        let status = match err {
            ColorError::InvalidArgument { .. } | ColorError::InvalidConfig { .. } => {
                napi::Status::InvalidArg
            }
            ColorError::MalformedColor { .. } => napi::Status::GenericFailure,
        };
        napi::Error::new(status, err.to_string())
    }
}
