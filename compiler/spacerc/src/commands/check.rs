//! The `check` command: run the whitespace rule on one source file.
//!
//! The token tree comes from an external parser as a JSON array of token
//! trees (see `spacer_ir::Token`). With `--fix`, the file is rewritten in
//! place after the diagnostics are printed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use spacer_diagnostic::{ColorMode, Severity, TerminalEmitter, UnknownSeverity};
use spacer_ir::{SourceLines, Token};
use spacer_lint::{
    autofix_file, AutofixError, ConfigError, FixSummary, LintError, WhitespaceAfter,
    WhitespaceAfterConfig,
};

/// Options for the check command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    /// Source file to check.
    pub source: PathBuf,
    /// JSON token dump for `source`.
    pub tokens: PathBuf,
    /// Comma-separated token kinds; all acceptable kinds when `None`.
    pub checks: Option<String>,
    pub severity: Severity,
    /// Rewrite the source file with the missing spaces.
    pub fix: bool,
    pub color: ColorMode,
}

/// Bad command line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing source file")]
    MissingSource,

    #[error("missing --tokens=<file.json>")]
    MissingTokens,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error(transparent)]
    Severity(#[from] UnknownSeverity),

    #[error("unknown color mode '{0}' (expected auto, always or never)")]
    Color(String),
}

impl CheckOptions {
    /// Parse the arguments that follow `check`.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        let mut source = None;
        let mut tokens = None;
        let mut checks = None;
        let mut severity = Severity::default();
        let mut fix = false;
        let mut color = ColorMode::Auto;

        for arg in args {
            if let Some(path) = arg.strip_prefix("--tokens=") {
                tokens = Some(PathBuf::from(path));
            } else if let Some(list) = arg.strip_prefix("--checks=") {
                checks = Some(list.to_string());
            } else if let Some(level) = arg.strip_prefix("--severity=") {
                severity = level.parse()?;
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                color = match mode {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => return Err(UsageError::Color(mode.to_string())),
                };
            } else if arg == "--fix" {
                fix = true;
            } else if arg.starts_with('-') {
                return Err(UsageError::UnknownOption(arg.clone()));
            } else if source.is_none() {
                source = Some(PathBuf::from(arg));
            } else {
                return Err(UsageError::UnexpectedArgument(arg.clone()));
            }
        }

        Ok(CheckOptions {
            source: source.ok_or(UsageError::MissingSource)?,
            tokens: tokens.ok_or(UsageError::MissingTokens)?,
            checks,
            severity,
            fix,
            color,
        })
    }
}

/// The check run failed before or while fixing.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid token dump `{}`: {source}", .path.display())]
    TokenDump {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid --checks: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lint(#[from] LintError),

    #[error(transparent)]
    Autofix(#[from] AutofixError),
}

/// Result of a completed check run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub violations: usize,
    pub errors: usize,
    pub warnings: usize,
    /// Diagnostics whose severity fails the run.
    pub failing: usize,
    /// Set when `--fix` ran.
    pub fixed: Option<FixSummary>,
}

impl CheckOutcome {
    /// 0 when clean or fixed, 1 when failing diagnostics remain.
    pub fn exit_code(&self) -> i32 {
        if self.failing == 0 || self.fixed.is_some() {
            0
        } else {
            1
        }
    }
}

fn read(path: &Path) -> Result<String, CheckError> {
    fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Check one file and report through `emitter`.
pub fn check_file<W: Write>(
    options: &CheckOptions,
    emitter: &mut TerminalEmitter<W>,
) -> Result<CheckOutcome, CheckError> {
    let config = match &options.checks {
        Some(property) => WhitespaceAfterConfig::from_tokens_property(property)?,
        None => WhitespaceAfterConfig::default(),
    }
    .with_severity(options.severity);
    let rule = WhitespaceAfter::new(config);
    tracing::debug!(
        tokens = rule.config().tokens().count(),
        severity = %rule.config().severity,
        "rule configured"
    );

    let text = read(&options.source)?;
    let dump = read(&options.tokens)?;
    let tokens: Vec<Token> =
        serde_json::from_str(&dump).map_err(|source| CheckError::TokenDump {
            path: options.tokens.clone(),
            source,
        })?;
    tracing::debug!(roots = tokens.len(), "token dump loaded");

    let violations = rule.check_tree(&tokens, &SourceLines::new(&text))?;
    let diagnostics = rule.diagnostics(&violations);

    let path = options.source.display().to_string();
    emitter.emit_all(&path, &diagnostics);
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    let failing = diagnostics
        .iter()
        .filter(|d| d.severity.is_failure())
        .count();
    emitter.emit_summary(errors, warnings);
    emitter.flush();

    let fixed = if options.fix {
        Some(autofix_file(&options.source, &violations)?)
    } else {
        None
    };

    Ok(CheckOutcome {
        violations: violations.len(),
        errors,
        warnings,
        failing,
        fixed,
    })
}
