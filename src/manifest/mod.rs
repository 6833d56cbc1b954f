pub mod manifest_result;

pub use manifest_result::{ManifestResult, ResultSummary};
