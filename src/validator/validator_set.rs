/*!
 * Validator registration and execution
 * Registration is deduplicated by name (first wins); results are concatenated in registration order
 */

use crate::config::{PanicPolicy, ValidatorSetConfig};
use crate::error::{Result, ValidationError};
use crate::manifest::ManifestResult;
use crate::validator::Validator;
use log::{debug, error, info, warn};
use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

/// An ordered, name-deduplicated collection of validators.
///
/// Running the set never mutates it. `add` needs `&mut self`, so sharing a set
/// across threads while registering requires external synchronization such as
/// a `Mutex<ValidatorSet>`.
pub struct ValidatorSet {
    validators: Vec<Arc<dyn Validator>>,
    seen_names: HashSet<String>,
    config: ValidatorSetConfig,
}

impl ValidatorSet {
    /// Create an empty set with the default configuration
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
            seen_names: HashSet::new(),
            config: ValidatorSetConfig::default(),
        }
    }

    /// Create a set holding each uniquely named validator in `validators`
    pub fn from_validators<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Validator>>,
    {
        let mut set = Self::new();
        set.add(validators);
        set
    }

    /// Create a set with an explicit configuration
    pub fn with_config<I>(config: ValidatorSetConfig, validators: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn Validator>>,
    {
        config.validate()?;

        let mut set = Self::new();
        set.config = config;
        set.add(validators);
        Ok(set)
    }

    /// Append each validator whose name is not yet registered, in argument order.
    ///
    /// Later validators with an already registered name are skipped. Returns how
    /// many were actually added.
    pub fn add<I>(&mut self, validators: I) -> usize
    where
        I: IntoIterator<Item = Arc<dyn Validator>>,
    {
        let mut added = 0;
        for validator in validators {
            if self.add_shared(validator) {
                added += 1;
            }
        }
        added
    }

    /// Register a single validator, returning false if its name was already taken
    pub fn add_validator<V: Validator + 'static>(&mut self, validator: V) -> bool {
        self.add_shared(Arc::new(validator))
    }

    /// Register a shared validator, returning false if its name was already taken
    pub fn add_shared(&mut self, validator: Arc<dyn Validator>) -> bool {
        let name = validator.name().to_string();
        if self.seen_names.contains(&name) {
            debug!("Skipping validator '{}': name already registered", name);
            return false;
        }

        debug!("Registered validator '{}' at position {}", name, self.validators.len());
        self.seen_names.insert(name);
        self.validators.push(validator);
        true
    }

    /// Run every validator in registration order and concatenate their results.
    ///
    /// Results are neither sorted, filtered nor deduplicated. An empty set yields
    /// an empty vector. With `parallel` enabled the validators may run
    /// concurrently, but the output order is the same as a sequential run.
    ///
    /// # Panics
    ///
    /// Under [`PanicPolicy::Propagate`] a panicking validator aborts the run and
    /// the panic resumes in the caller.
    pub fn validate_all(&self) -> Vec<ManifestResult> {
        info!(
            "Running {} validators ({})",
            self.validators.len(),
            if self.config.parallel { "parallel" } else { "sequential" }
        );

        let all_results = if self.config.parallel {
            self.run_parallel()
        } else {
            self.run_sequential()
        };

        info!(
            "Validation finished: {} results from {} validators",
            all_results.len(),
            self.validators.len()
        );
        all_results
    }

    fn run_sequential(&self) -> Vec<ManifestResult> {
        let mut all_results = Vec::new();
        for validator in &self.validators {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| validator.validate()));
            all_results.extend(self.settle(validator.as_ref(), outcome));
        }
        all_results
    }

    fn run_parallel(&self) -> Vec<ManifestResult> {
        // One slot per validator, filled batch by batch in registration order
        let mut slots: Vec<Vec<ManifestResult>> = Vec::with_capacity(self.validators.len());

        for batch in self.validators.chunks(self.config.max_parallel) {
            let outcomes: Vec<thread::Result<Vec<ManifestResult>>> = thread::scope(|s| {
                let handles: Vec<_> = batch
                    .iter()
                    .map(|validator| s.spawn(move || validator.validate()))
                    .collect();
                handles.into_iter().map(|handle| handle.join()).collect()
            });

            for (validator, outcome) in batch.iter().zip(outcomes) {
                slots.push(self.settle(validator.as_ref(), outcome));
            }
        }

        slots.into_iter().flatten().collect()
    }

    fn settle(
        &self,
        validator: &dyn Validator,
        outcome: thread::Result<Vec<ManifestResult>>,
    ) -> Vec<ManifestResult> {
        match outcome {
            Ok(results) => {
                debug!("Validator '{}' returned {} results", validator.name(), results.len());
                results
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                match self.config.panic_policy {
                    PanicPolicy::Propagate => {
                        error!("Validator '{}' panicked, aborting run: {}", validator.name(), message);
                        panic::resume_unwind(payload)
                    }
                    PanicPolicy::Isolate => {
                        warn!("Validator '{}' panicked, recording failure: {}", validator.name(), message);
                        vec![panic_result(validator.name(), &message)]
                    }
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Registered names in execution order
    pub fn names(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen_names.contains(name)
    }

    pub fn config(&self) -> &ValidatorSetConfig {
        &self.config
    }
}

impl Default for ValidatorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorSet")
            .field("validators", &self.names())
            .field("config", &self.config)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn panic_result(name: &str, message: &str) -> ManifestResult {
    ManifestResult::new(name).with_errors(vec![ValidationError::invalid_operation(
        format!("validator '{}' panicked: {}", name, message),
        name,
    )])
}
