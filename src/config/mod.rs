pub mod validator_set_config;

pub use validator_set_config::{PanicPolicy, ValidatorSetConfig};
