use crate::error::{ManifestValidatorError, Result};

/// What happens when a validator panics during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanicPolicy {
    /// Abort the run and resume unwinding in the caller; no partial results
    #[default]
    Propagate,
    /// Replace the validator's output with one `OperationFailed` result and keep going
    Isolate,
}

/// Configuration for ValidatorSet execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorSetConfig {
    /// Panic handling (Default: Propagate)
    pub panic_policy: PanicPolicy,

    /// Run validators on scoped threads (Default: false)
    pub parallel: bool,

    /// Validators run at once when parallel (Default: 4)
    pub max_parallel: usize,
}

impl Default for ValidatorSetConfig {
    fn default() -> Self {
        Self {
            panic_policy: PanicPolicy::Propagate,
            parallel: false,
            max_parallel: 4,
        }
    }
}

impl ValidatorSetConfig {
    /// Create a new configuration with all default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequential execution, panics propagate
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Sequential execution, panics are turned into failure results
    pub fn isolated() -> Self {
        Self {
            panic_policy: PanicPolicy::Isolate,
            ..Self::default()
        }
    }

    /// Parallel execution with at most `max_parallel` validators in flight
    pub fn parallel(max_parallel: usize) -> Self {
        Self {
            parallel: true,
            max_parallel,
            ..Self::default()
        }
    }

    pub fn with_panic_policy(mut self, panic_policy: PanicPolicy) -> Self {
        self.panic_policy = panic_policy;
        self
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_parallel == 0 {
            return Err(ManifestValidatorError::InvalidConfig(
                "max_parallel must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
