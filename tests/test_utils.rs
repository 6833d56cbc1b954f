#![allow(dead_code)]

use manifest_validator::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Validator returning a fixed result list and counting its invocations
pub struct StaticValidator {
    name: String,
    results: Vec<ManifestResult>,
    calls: Arc<AtomicUsize>,
}

impl StaticValidator {
    pub fn new(name: &str, results: Vec<ManifestResult>) -> Self {
        Self {
            name: name.to_string(),
            results,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared invocation counter, readable after the validator moves into a set
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn into_shared(self) -> Arc<dyn Validator> {
        Arc::new(self)
    }
}

impl Validator for StaticValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Vec<ManifestResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results.clone()
    }
}

/// Validator that always panics with the given message
pub struct PanickingValidator {
    pub name: String,
    pub message: String,
}

impl PanickingValidator {
    pub fn shared(name: &str, message: &str) -> Arc<dyn Validator> {
        Arc::new(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

impl Validator for PanickingValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Vec<ManifestResult> {
        panic!("{}", self.message)
    }
}

/// Result list matching a CSV check over an operator bundle
pub fn csv_results() -> Vec<ManifestResult> {
    vec![ManifestResult::new("my-operator.v1.0.0").with_errors(vec![
        ValidationError::invalid_csv("CSV missing required field 'displayName'"),
    ])]
}

/// Result list matching a default-channel check over a package manifest
pub fn channel_results() -> Vec<ManifestResult> {
    vec![ManifestResult::new("my-operator.v1.0.0").with_warnings(vec![
        ValidationError::invalid_default_channel("channel 'alpha' not declared", "alpha"),
    ])]
}

/// A clean result plus one with a field-level error
pub fn crd_results() -> Vec<ManifestResult> {
    vec![
        ManifestResult::new("etcdclusters.etcd.database.coreos.com"),
        ManifestResult::new("etcdbackups.etcd.database.coreos.com").with_errors(vec![
            ValidationError::mandatory_field_missing(
                "spec.versions is required",
                "spec.versions",
                json!([]),
            ),
        ]),
    ]
}
