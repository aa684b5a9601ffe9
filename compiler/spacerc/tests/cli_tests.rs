//! End-to-end tests for the `spacer` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

const SOURCE: &str = "if(ok) {\n  f(a,b);\n  x = (int)y;\n}\n";

const TOKENS: &str = r#"[
  { "kind": "LITERAL_IF", "line": 1, "column": 0, "text": "if" },
  { "kind": "COMMA", "line": 2, "column": 5, "text": "," },
  { "kind": "SEMI", "line": 2, "column": 8, "text": ";" },
  { "kind": "TYPECAST", "line": 3, "column": 6, "text": "(",
    "children": [
      { "kind": "IDENT", "line": 3, "column": 7, "text": "int" },
      { "kind": "RPAREN", "line": 3, "column": 10, "text": ")" }
    ] }
]"#;

fn spacer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spacer"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run spacer")
}

fn setup(dir: &Path) -> (String, String) {
    let source = dir.join("Main.java");
    let tokens = dir.join("Main.json");
    fs::write(&source, SOURCE).unwrap();
    fs::write(&tokens, TOKENS).unwrap();
    (
        source.display().to_string(),
        format!("--tokens={}", tokens.display()),
    )
}

#[test]
fn check_reports_violations() {
    let dir = tempfile::tempdir().unwrap();
    let (source, tokens) = setup(dir.path());

    let output = spacer(&["check", &source, &tokens, "--color=never"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("{source}:1:1: warning[W1001]: 'if' is not followed by whitespace."),
            format!("{source}:2:6: warning[W1001]: ',' is not followed by whitespace."),
            format!("{source}:3:11: warning[W1002]: 'typecast' is not followed by whitespace."),
            "warning: 3 warnings emitted".to_string(),
        ]
    );
    assert_eq!(fs::read_to_string(&source).unwrap(), SOURCE);
}

#[test]
fn check_with_fix_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let (source, tokens) = setup(dir.path());

    let output = spacer(&["check", &source, &tokens, "--color=never", "--fix"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&source).unwrap(),
        "if (ok) {\n  f(a, b);\n  x = (int) y;\n}\n"
    );
}

#[test]
fn check_respects_selected_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let (source, tokens) = setup(dir.path());

    let output = spacer(&[
        "check",
        &source,
        &tokens,
        "--checks=TYPECAST",
        "--severity=error",
        "--color=never",
    ]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("error[W1002]"));
    assert!(!stdout.contains("W1001"));
}

#[test]
fn info_severity_does_not_fail() {
    let dir = tempfile::tempdir().unwrap();
    let (source, tokens) = setup(dir.path());

    let output = spacer(&["check", &source, &tokens, "--severity=info", "--color=never"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|line| line.contains(": info[W100")), "{stdout}");
}

#[test]
fn malformed_tree_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (source, _) = setup(dir.path());
    let tokens = dir.path().join("broken.json");
    fs::write(
        &tokens,
        r#"[{ "kind": "TYPECAST", "line": 3, "column": 6, "text": "(" }]"#,
    )
    .unwrap();

    let output = spacer(&[
        "check",
        &source,
        &format!("--tokens={}", tokens.display()),
    ]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("no closing parenthesis"), "{stderr}");
}

#[test]
fn usage_errors_exit_with_two() {
    let output = spacer(&["check", "Main.java"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("missing --tokens"));
}

#[test]
fn explain_prints_docs() {
    let output = spacer(&["explain", "W1002"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .starts_with("# W1002"));
}

#[test]
fn explain_without_code_lists_titles() {
    let output = spacer(&["explain"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "W1001  token not followed by whitespace\nW1002  type cast not followed by whitespace\n"
    );
}
