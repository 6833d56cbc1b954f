/*!
 * Per-manifest validation outcome
 * A result with no errors and no warnings is the success signal; it is still emitted
 */

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Findings for one named manifest from a bundle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ManifestResult {
    /// Identifies the manifest, usually its declared object name
    pub name: String,

    /// Problems that must be corrected
    pub errors: Vec<ValidationError>,

    /// Problems that are optional to correct
    pub warnings: Vec<ValidationError>,
}

impl ManifestResult {
    /// Create an empty result for the named manifest
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Replace the error list
    pub fn with_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.errors = errors;
        self
    }

    /// Replace the warning list
    pub fn with_warnings(mut self, warnings: Vec<ValidationError>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Counts over an aggregate of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultSummary {
    pub results: usize,
    pub clean: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl ResultSummary {
    pub fn from_results(results: &[ManifestResult]) -> Self {
        let mut summary = ResultSummary::default();

        for result in results {
            summary.results += 1;
            summary.errors += result.errors.len();
            summary.warnings += result.warnings.len();
            if result.is_clean() {
                summary.clean += 1;
            }
        }

        summary
    }

    /// True when no result carries an error; warnings are advisory only
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_clean() {
        let result = ManifestResult::new("etcdoperator.v0.9.4");
        assert_eq!(result.name, "etcdoperator.v0.9.4");
        assert!(result.is_clean());
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_severity_is_placement() {
        let mut result = ManifestResult::new("etcdoperator.v0.9.4");
        result.add_warning(ValidationError::mandatory_field_missing("no maintainers", "spec.maintainers", ""));

        assert!(!result.has_errors());
        assert!(result.has_warnings());
        assert!(!result.is_clean());
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            ManifestResult::new("a"),
            ManifestResult::new("b").with_warnings(vec![
                ValidationError::optional_field_missing("no icon", "spec.icon", ""),
                ValidationError::optional_field_missing("no links", "spec.links", ""),
            ]),
            ManifestResult::new("c").with_errors(vec![ValidationError::invalid_csv("bad")]),
        ];

        let summary = ResultSummary::from_results(&results);
        assert_eq!(summary.results, 3);
        assert_eq!(summary.clean, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.warnings, 2);
        assert!(!summary.passed());
    }

    #[test]
    fn test_summary_warnings_only_passes() {
        let results = vec![ManifestResult::new("a")
            .with_warnings(vec![ValidationError::invalid_default_channel("not declared", "alpha")])];
        assert!(ResultSummary::from_results(&results).passed());
        assert!(ResultSummary::from_results(&[]).passed());
    }
}
