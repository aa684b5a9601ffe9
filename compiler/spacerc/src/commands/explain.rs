//! The `explain` command: print documentation for a diagnostic code.

use spacer_diagnostic::{ErrorCode, ErrorDocs, UnknownErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error(transparent)]
    UnknownCode(#[from] UnknownErrorCode),

    #[error("no documentation for {0}")]
    Undocumented(ErrorCode),
}

/// Look up the documentation for a code such as `W1001`.
pub fn explain_error(code: &str) -> Result<&'static str, ExplainError> {
    let code: ErrorCode = code.parse()?;
    ErrorDocs::get(code).ok_or(ExplainError::Undocumented(code))
}

/// One `CODE  title` line per known diagnostic code.
pub fn list_codes() -> String {
    ErrorCode::ALL
        .iter()
        .map(|code| format!("{code}  {}\n", code.title()))
        .collect()
}
