//! Whitespace-after rule
//!
//! Flags configured tokens (separators, some keywords, the lambda arrow,
//! the closing parenthesis of a type cast, the variadic ellipsis) that are
//! not immediately followed by whitespace, and repairs them in place.
//!
//! # Architecture
//!
//! 1. **Detect**: [`WhitespaceAfter::check`] looks at one token and the single
//!    code point after it. [`WhitespaceAfter::check_tree`] walks a token tree
//!    and gathers an ordered [`Violation`] set.
//! 2. **Fix**: [`apply_fixes`] inserts one space per violation into a
//!    [`LineBuffer`], sliding later insertions on the same line right by the
//!    number already made. [`autofix_file`] wraps it in one read and one write.
//!
//! Detection is stateless; nothing survives between files.
//!
//! # Modules
//!
//! - [`config`]: which token kinds are checked, and at what severity
//! - [`detector`]: the classification rule and tree walk
//! - [`violation`]: violation records and their messages
//! - [`autofix`]: line buffer and shift-accumulating insertion

pub mod autofix;
pub mod config;
pub mod detector;
mod error;
pub mod violation;

pub use autofix::{apply_fixes, autofix_file, fix_source, insert_space_at, FixSummary, LineBuffer};
pub use config::{WhitespaceAfterConfig, ACCEPTABLE_TOKENS};
pub use detector::{is_breaking_whitespace, is_followed_by_whitespace, WhitespaceAfter};
pub use error::{AutofixError, ConfigError, LintError};
pub use violation::{Violation, ViolationKind};
