use thiserror::Error;

/// Errors raised by the framework itself.
///
/// Manifest findings are [`ValidationError`](crate::ValidationError) values and
/// never appear here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestValidatorError {
    #[error("Unrecognized validation error kind: {0:?}")]
    UnknownErrorKind(String),

    #[error("Invalid validator set configuration: {0}")]
    InvalidConfig(String),
}
