//! Property-based tests for the detector and the autofix shift accumulator.
//!
//! The autofixer is compared against an independent reference: inserting
//! spaces right to left, which needs no shift at all.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::cast_possible_truncation,
    reason = "Generated lines are far shorter than u32::MAX"
)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use spacer_ir::{SourceLines, Token, TokenKind};
use spacer_lint::{fix_source, Violation, WhitespaceAfter};

/// Tokens for every `,` and `;` on a single line.
fn separator_tokens(line: &str) -> Vec<Token> {
    line.chars()
        .enumerate()
        .filter_map(|(column, c)| {
            let kind = match c {
                ',' => TokenKind::Comma,
                ';' => TokenKind::Semi,
                _ => return None,
            };
            Some(Token::new(kind, 1, column as u32, c.to_string()))
        })
        .collect()
}

fn detect(line: &str) -> BTreeSet<Violation> {
    WhitespaceAfter::default()
        .check_tree(&separator_tokens(line), &SourceLines::new(line))
        .unwrap()
}

/// Right-to-left insertion; earlier columns are never disturbed.
fn reference_fix(line: &str, violations: &BTreeSet<Violation>) -> String {
    let mut chars: Vec<char> = line.chars().collect();
    for violation in violations.iter().rev() {
        chars.insert(violation.column as usize + violation.fix_width(), ' ');
    }
    chars.into_iter().collect()
}

proptest! {
    #[test]
    fn comma_classification(prefix in "\\PC{0,12}", suffix in "\\PC{0,12}") {
        let line = format!("{prefix},{suffix}");
        let column = prefix.chars().count() as u32;
        let token = Token::new(TokenKind::Comma, 1, column, ",");

        let result = WhitespaceAfter::default()
            .check(&token, &SourceLines::new(&line))
            .unwrap();

        let accepted = match suffix.chars().next() {
            None => true,
            Some(c) => {
                c == ';'
                    || c == ')'
                    || matches!(c, '\t'..='\r' | '\u{1C}'..='\u{1F}')
                    || (c.is_whitespace()
                        && !matches!(c, '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}'))
            }
        };
        prop_assert_eq!(result.is_none(), accepted);
        if let Some(violation) = result {
            prop_assert_eq!(violation, Violation::not_followed(1, column, ","));
        }
    }

    #[test]
    fn shifted_fix_matches_reference(line in "[a-z,;() \t]{0,40}") {
        let violations = detect(&line);
        let fixed = fix_source(&line, &violations).unwrap();
        prop_assert_eq!(fixed, reference_fix(&line, &violations));
    }

    #[test]
    fn fix_adds_one_space_per_violation(line in "[a-z,;()]{0,40}") {
        let violations = detect(&line);
        let fixed = fix_source(&line, &violations).unwrap();
        prop_assert_eq!(
            fixed.chars().count(),
            line.chars().count() + violations.len()
        );
        prop_assert_eq!(fixed.replace(' ', ""), line);
    }

    #[test]
    fn fixed_line_is_clean(line in "[a-z,;()]{0,40}") {
        let fixed = fix_source(&line, &detect(&line)).unwrap();
        prop_assert!(detect(&fixed).is_empty(), "{:?} -> {:?}", line, fixed);
    }

    #[test]
    fn detection_is_repeatable(line in "\\PC{0,30}") {
        prop_assert_eq!(detect(&line), detect(&line));
    }
}
