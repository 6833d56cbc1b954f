use crate::error::ManifestValidatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a validation finding.
///
/// The serialized form is the stable machine code returned by [`ErrorKind::code`],
/// kept identical to the codes used by upstream operator tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "CSVFileNotValid")]
    InvalidCsv,
    #[serde(rename = "OptionalFieldNotFound")]
    OptionalFieldMissing,
    #[serde(rename = "MandatoryFieldNotFound")]
    MandatoryFieldMissing,
    #[serde(rename = "FieldTypeNotSupported")]
    UnsupportedType,
    #[serde(rename = "Unmarshall/ParseError")]
    InvalidParse,
    #[serde(rename = "FileReadError")]
    Io,
    #[serde(rename = "ValidationFailed")]
    FailedValidation,
    #[serde(rename = "OperationFailed")]
    InvalidOperation,
    #[serde(rename = "DefaultChannelNotValid")]
    InvalidDefaultChannel,
}

impl ErrorKind {
    /// Every kind, in declaration order
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::InvalidCsv,
        ErrorKind::OptionalFieldMissing,
        ErrorKind::MandatoryFieldMissing,
        ErrorKind::UnsupportedType,
        ErrorKind::InvalidParse,
        ErrorKind::Io,
        ErrorKind::FailedValidation,
        ErrorKind::InvalidOperation,
        ErrorKind::InvalidDefaultChannel,
    ];

    /// Returns the machine code for the kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidCsv => "CSVFileNotValid",
            ErrorKind::OptionalFieldMissing => "OptionalFieldNotFound",
            ErrorKind::MandatoryFieldMissing => "MandatoryFieldNotFound",
            ErrorKind::UnsupportedType => "FieldTypeNotSupported",
            ErrorKind::InvalidParse => "Unmarshall/ParseError",
            ErrorKind::Io => "FileReadError",
            ErrorKind::FailedValidation => "ValidationFailed",
            ErrorKind::InvalidOperation => "OperationFailed",
            ErrorKind::InvalidDefaultChannel => "DefaultChannelNotValid",
        }
    }

    /// Returns the canonical human-readable description for the kind
    pub fn description(&self) -> &'static str {
        Self::describe_code(self.code())
    }

    /// Maps a raw kind code to its canonical description.
    ///
    /// # Panics
    ///
    /// Panics on any code that is not one of the nine known kinds. Codes only
    /// reach this function through [`ErrorKind::code`], so an unknown code is a
    /// programming error rather than bad input; use [`ErrorKind::from_str`] to
    /// check untrusted codes.
    pub fn describe_code(code: &str) -> &'static str {
        match code {
            "CSVFileNotValid" => "CSV file not valid",
            "OptionalFieldNotFound" => "Optional field not found",
            "MandatoryFieldNotFound" => "Mandatory field not found",
            "FieldTypeNotSupported" => "Field type not supported",
            "Unmarshall/ParseError" => "Unmarshall/Parse error",
            "FileReadError" => "File read error",
            "ValidationFailed" => "Validation failed",
            "OperationFailed" => "Operation failed",
            "DefaultChannelNotValid" => "Default channel not found",
            other => panic!("Unrecognized validation error: {:?}", other),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl FromStr for ErrorKind {
    type Err = ManifestValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| ManifestValidatorError::UnknownErrorKind(s.to_string()))
    }
}
