//! File-level autofix: one read, one write, detector and fixer together.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::BTreeSet;
use std::fs;

use pretty_assertions::assert_eq;
use spacer_ir::{SourceLines, Token, TokenKind};
use spacer_lint::{autofix_file, AutofixError, FixSummary, Violation, WhitespaceAfter};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    fs::write(file.path(), contents).expect("write temp file");
    file
}

#[test]
fn fixes_file_in_place() {
    let file = write_temp("class A {\n  void f() { g(a,b;c); }\n}\n");
    let violations: BTreeSet<_> = [
        Violation::not_followed(2, 16, ","),
        Violation::not_followed(2, 18, ";"),
    ]
    .into_iter()
    .collect();

    let summary = autofix_file(file.path(), &violations).unwrap();

    assert_eq!(
        summary,
        FixSummary {
            insertions: 2,
            lines: 1
        }
    );
    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        "class A {\n  void f() { g(a, b; c); }\n}\n"
    );
}

#[test]
fn compliant_file_is_rewritten_identically() {
    let original = "int x = (int) y;\r\nfor (;;) {}\nno newline at end";
    let file = write_temp(original);

    let summary = autofix_file(file.path(), &BTreeSet::new()).unwrap();

    assert_eq!(summary, FixSummary::default());
    assert_eq!(fs::read(file.path()).unwrap(), original.as_bytes());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Missing.java");

    let err = autofix_file(&path, &BTreeSet::new()).unwrap_err();

    assert!(matches!(err, AutofixError::Read { .. }));
    assert!(err.to_string().contains("Missing.java"));
}

#[test]
fn stale_violation_leaves_file_untouched() {
    let original = "a,b\n";
    let file = write_temp(original);
    let violations: BTreeSet<_> = [
        Violation::not_followed(1, 1, ","),
        Violation::not_followed(4, 0, ","),
    ]
    .into_iter()
    .collect();

    let err = autofix_file(file.path(), &violations).unwrap_err();

    assert!(matches!(err, AutofixError::LineOutOfRange { line: 4, .. }));
    assert_eq!(fs::read_to_string(file.path()).unwrap(), original);
}

#[test]
fn detect_then_fix_round_trip() {
    let source = "if(ok) {\n  x = (long)y;\n  f(a,b);\n}\n";
    let file = write_temp(source);
    let tokens = vec![
        Token::new(TokenKind::LiteralIf, 1, 0, "if"),
        Token::new(TokenKind::Typecast, 2, 6, "(")
            .with_child(Token::new(TokenKind::Ident, 2, 7, "long"))
            .with_child(Token::new(TokenKind::RParen, 2, 11, ")")),
        Token::new(TokenKind::Semi, 2, 13, ";"),
        Token::new(TokenKind::Comma, 3, 5, ","),
        Token::new(TokenKind::Semi, 3, 8, ";"),
    ];
    let rule = WhitespaceAfter::default();

    let violations = rule
        .check_tree(&tokens, &SourceLines::new(source))
        .unwrap();
    assert_eq!(violations.len(), 3);

    autofix_file(file.path(), &violations).unwrap();
    let fixed = fs::read_to_string(file.path()).unwrap();
    assert_eq!(fixed, "if (ok) {\n  x = (long) y;\n  f(a, b);\n}\n");

    // The fixed text is clean once tokens are shifted to their new columns.
    let shifted = vec![
        Token::new(TokenKind::LiteralIf, 1, 0, "if"),
        Token::new(TokenKind::Typecast, 2, 6, "(")
            .with_child(Token::new(TokenKind::RParen, 2, 11, ")")),
        Token::new(TokenKind::Semi, 2, 14, ";"),
        Token::new(TokenKind::Comma, 3, 5, ","),
        Token::new(TokenKind::Semi, 3, 9, ";"),
    ];
    let again = rule.check_tree(&shifted, &SourceLines::new(&fixed)).unwrap();
    assert!(again.is_empty(), "{again:?}");
}
