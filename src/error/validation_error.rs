/*!
 * Structured validation findings
 * A ValidationError is always returned as data inside a ManifestResult, never raised
 */

use crate::error::ErrorKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single finding about a manifest: kind, location, offending value and message.
///
/// Severity is not part of the value. Whether a finding is an error or a warning
/// depends only on which list of a [`ManifestResult`](crate::ManifestResult) the
/// producing validator puts it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Category of the finding
    pub kind: ErrorKind,

    /// Dot-hierarchical path of the offending field, empty when the finding
    /// is not about a specific field
    pub field: String,

    /// The field or file that caused the finding
    pub bad_value: Value,

    /// Human-readable message
    pub detail: String,
}

impl ValidationError {
    /// Creates a finding from its four parts
    pub fn new<D: Into<String>, F: Into<String>, V: Into<Value>>(
        kind: ErrorKind,
        detail: D,
        field: F,
        bad_value: V,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            bad_value: bad_value.into(),
            detail: detail.into(),
        }
    }

    /// The document is not a valid CSV
    pub fn invalid_csv<D: Into<String>>(detail: D) -> Self {
        Self::new(ErrorKind::InvalidCsv, detail, "", "")
    }

    /// The declared default channel is not valid
    pub fn invalid_default_channel<D: Into<String>, V: Into<Value>>(detail: D, value: V) -> Self {
        Self::new(ErrorKind::InvalidDefaultChannel, detail, "", value)
    }

    /// An optional field is absent (conventionally reported as a warning)
    pub fn optional_field_missing<D: Into<String>, F: Into<String>, V: Into<Value>>(
        detail: D,
        field: F,
        value: V,
    ) -> Self {
        Self::new(ErrorKind::OptionalFieldMissing, detail, field, value)
    }

    /// A mandatory field is absent (conventionally reported as an error)
    pub fn mandatory_field_missing<D: Into<String>, F: Into<String>, V: Into<Value>>(
        detail: D,
        field: F,
        value: V,
    ) -> Self {
        Self::new(ErrorKind::MandatoryFieldMissing, detail, field, value)
    }

    /// A field has a type the checker does not support
    pub fn unsupported_type<D: Into<String>>(detail: D) -> Self {
        Self::new(ErrorKind::UnsupportedType, detail, "", "")
    }

    /// The document could not be unmarshalled
    pub fn invalid_parse<D: Into<String>, V: Into<Value>>(detail: D, value: V) -> Self {
        Self::new(ErrorKind::InvalidParse, detail, "", value)
    }

    /// A file could not be read
    pub fn io_error<D: Into<String>, V: Into<Value>>(detail: D, value: V) -> Self {
        Self::new(ErrorKind::Io, detail, "", value)
    }

    /// A semantic check failed
    pub fn failed_validation<D: Into<String>, V: Into<Value>>(detail: D, value: V) -> Self {
        Self::new(ErrorKind::FailedValidation, detail, "", value)
    }

    /// An operation needed by the check failed
    pub fn invalid_operation<D: Into<String>, V: Into<Value>>(detail: D, value: V) -> Self {
        Self::new(ErrorKind::InvalidOperation, detail, "", value)
    }

    /// Terse rendering: the detail message verbatim
    pub fn terse(&self) -> &str {
        &self.detail
    }

    /// Verbose rendering for display and debugging.
    ///
    /// The layout is fixed:
    /// `Detail: <detail> | Error type: <kind description> | Value: <value> | Field: <field>`.
    /// String values are written without quotes, everything else as compact JSON.
    pub fn verbose(&self) -> String {
        format!(
            "Detail: {} | Error type: {} | Value: {} | Field: {}",
            self.detail,
            self.kind.description(),
            self.bad_value_display(),
            self.field
        )
    }

    /// Display form of `bad_value`
    pub fn bad_value_display(&self) -> String {
        match &self.bad_value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the finding points at a specific field
    pub fn is_field_specific(&self) -> bool {
        !self.field.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.terse())
    }
}

impl std::error::Error for ValidationError {}
