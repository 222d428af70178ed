//! Shared types for polyspell.
//!
//! - [`script`] -- Unicode script classification used for language detection
//! - [`outcome`] -- verdict and outcome of a spell-check request

pub mod outcome;
pub mod script;

pub use outcome::{CheckOutcome, Verdict};
pub use script::{Script, dominant_script, script_of};
