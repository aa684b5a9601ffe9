//! Diagnostic system for reporting rule violations.
//!
//! Each reported violation becomes a [`Diagnostic`]:
//! - Code for searchability (`spacer explain W1001`)
//! - Severity assigned by configuration
//! - Clear message naming the offending token
//! - 1-based line, 0-based column of the offending token
//!
//! Emitters render diagnostics for humans; see [`emitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity, UnknownSeverity};
pub use emitter::{ColorMode, TerminalEmitter};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use errors::ErrorDocs;
