//! # manifest-validator
//!
//! Validation result vocabulary and validator aggregation for manifest bundles.
//!
//! Checks over individual manifests are written as [`Validator`] implementations.
//! A [`ValidatorSet`] registers them once by name, runs them in order and
//! concatenates the [`ManifestResult`]s they produce. Every finding is a
//! [`ValidationError`] value; whether it is an error or a warning depends on
//! the list it is placed in.
//!
//! ## Features
//!
//! - **Uniform findings**: nine [`ErrorKind`]s with canonical descriptions
//! - **Two renderings**: terse (`detail` only) and verbose (kind, value, field)
//! - **First registration wins**: duplicate validator names are silently skipped
//! - **Ordered aggregation**: results keep registration order, even when run in parallel
//! - **Panic policy**: abort the run, or isolate the faulty validator
//!
//! ## Quick Start
//!
//! ```rust
//! use manifest_validator::{FnValidator, ManifestResult, ResultSummary, ValidationError, ValidatorSet};
//!
//! let mut set = ValidatorSet::new();
//! set.add_validator(FnValidator::new("csv", || {
//!     vec![ManifestResult::new("my-operator.v1.0.0").with_errors(vec![
//!         ValidationError::invalid_csv("CSV missing required field 'displayName'"),
//!     ])]
//! }));
//! set.add_validator(FnValidator::new("channel", || {
//!     vec![ManifestResult::new("my-operator.v1.0.0").with_warnings(vec![
//!         ValidationError::invalid_default_channel("channel 'alpha' not declared", "alpha"),
//!     ])]
//! }));
//!
//! let results = set.validate_all();
//! assert_eq!(results.len(), 2);
//!
//! for result in &results {
//!     for error in &result.errors {
//!         println!("{}: {}", result.name, error.verbose());
//!     }
//! }
//!
//! assert!(!ResultSummary::from_results(&results).passed());
//! ```

pub mod config;
pub mod error;
pub mod manifest;
pub mod validator;

// Error model exports
pub use error::{ErrorKind, ManifestValidatorError, ValidationError};

// Result type alias
pub use error::Result;

// Manifest result exports
pub use manifest::{ManifestResult, ResultSummary};

// Validator exports
pub use validator::{FnValidator, Validator, ValidatorSet};

// Configuration exports
pub use config::{PanicPolicy, ValidatorSetConfig};

// Re-export the open value type used for offending values
pub use serde_json::{json, Value as JsonValue};

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        ErrorKind, FnValidator, JsonValue, ManifestResult, ManifestValidatorError, PanicPolicy,
        Result, ResultSummary, ValidationError, Validator, ValidatorSet, ValidatorSetConfig,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
