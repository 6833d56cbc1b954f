use crate::manifest::ManifestResult;
use std::fmt;

/// An independent check over one or more manifests.
///
/// Implementations close over the data they inspect, so `validate` takes no
/// input. A validator reports its own failures (unreadable files, failed
/// lookups) as findings inside the returned results instead of panicking.
///
/// [`ValidatorSet::validate_all`](crate::ValidatorSet::validate_all) is only
/// repeatable if `validate` is free of side effects that change its next output.
pub trait Validator: Send + Sync {
    /// Stable identifier; a set keeps only the first validator registered under a name
    fn name(&self) -> &str;

    /// Run the check, yielding zero or more results
    fn validate(&self) -> Vec<ManifestResult>;
}

/// A [`Validator`] built from a name and a closure
pub struct FnValidator<F> {
    name: String,
    check_fn: F,
}

impl<F> FnValidator<F>
where
    F: Fn() -> Vec<ManifestResult> + Send + Sync,
{
    pub fn new<S: Into<String>>(name: S, check_fn: F) -> Self {
        Self {
            name: name.into(),
            check_fn,
        }
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn() -> Vec<ManifestResult> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Vec<ManifestResult> {
        (self.check_fn)()
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").field("name", &self.name).finish()
    }
}
