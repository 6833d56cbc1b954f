pub mod error_kind;
pub mod framework_error;
pub mod validation_error;

pub use error_kind::ErrorKind;
pub use framework_error::ManifestValidatorError;
pub use validation_error::ValidationError;

pub type Result<T> = std::result::Result<T, ManifestValidatorError>;
