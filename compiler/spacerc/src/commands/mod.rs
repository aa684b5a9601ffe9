//! Command handlers for the spacer CLI.

mod check;
mod explain;

pub use check::{check_file, CheckError, CheckOptions, CheckOutcome, UsageError};
pub use explain::{explain_error, list_codes, ExplainError};
