pub mod validator_trait;
pub mod validator_set;

pub use validator_trait::{FnValidator, Validator};
pub use validator_set::ValidatorSet;
