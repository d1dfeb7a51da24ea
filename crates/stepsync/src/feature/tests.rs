//! Tests for feature file step extraction.

use rstest::rstest;
use tempfile::TempDir;

use super::*;

fn step(ty: StepType, description: &str) -> Step {
    Step {
        ty,
        description: description.to_string(),
        parameters: String::new(),
    }
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn extracts_steps_from_scenario_blocks() {
    let source = concat!(
        "Feature: login\n",
        "\n",
        "Scenario: failed login\n",
        "  Given the user is on \"the login page\"\n",
        "  When they submit \"bad\" credentials\n",
        "  Then an error \"Invalid\" is shown\n",
    );

    let steps = scan_feature_source(source).expect("scan feature source");
    assert_eq!(
        steps,
        vec![
            step(StepType::Given, "the user is on {string}"),
            step(StepType::When, "they submit {string} credentials"),
            step(StepType::Then, "an error {string} is shown"),
        ]
    );
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn conjunctions_inherit_the_preceding_type() {
    let source = concat!(
        "Scenario: setup\n",
        "  Given a user exists\n",
        "  And the user is active\n",
        "  When they log in\n",
        "  But the password expired\n",
        "  Then a reset is required\n",
        "  And a mail is sent\n",
    );

    let steps = scan_feature_source(source).expect("scan feature source");
    assert_eq!(
        steps,
        vec![
            step(StepType::Given, "a user exists"),
            step(StepType::Given, "the user is active"),
            step(StepType::When, "they log in"),
            step(StepType::When, "the password expired"),
            step(StepType::Then, "a reset is required"),
            step(StepType::Then, "a mail is sent"),
        ]
    );
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[rstest]
#[case("the result is \"42\"", "the result is {string}")]
#[case("the result is <value>", "the result is {string}")]
#[case(
    "the result is \"42\" and <flag> is set",
    "the result is {string} and {string} is set"
)]
#[case("the result is \"\"", "the result is ''")]
#[case("Paula's \"draft\" is saved", "Paula's {string} is saved")]
fn quoted_literals_and_placeholders_collapse(#[case] text: &str, #[case] expected: &str) {
    let source = format!("Scenario: s\n  Given {text}\n");
    let steps = scan_feature_source(&source).expect("scan feature source");
    assert_eq!(steps, vec![step(StepType::Given, expected)]);
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn descriptions_are_trimmed() {
    let source = "Scenario: s\n  Given   padded text   \n";
    let steps = scan_feature_source(source).expect("scan feature source");
    assert_eq!(steps, vec![step(StepType::Given, "padded text")]);
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn blank_line_closes_the_block() {
    let source = concat!(
        "Scenario: s\n",
        "  Given a user exists\n",
        "\n",
        "  When this line is outside any block\n",
    );

    let steps = scan_feature_source(source).expect("scan feature source");
    assert_eq!(steps, vec![step(StepType::Given, "a user exists")]);
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn steps_before_any_header_are_ignored() {
    let source = concat!(
        "Given this line precedes every block\n",
        "Scenario: s\n",
        "  When they log in\n",
    );

    let steps = scan_feature_source(source).expect("scan feature source");
    assert_eq!(steps, vec![step(StepType::When, "they log in")]);
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn adjacent_headers_keep_the_resolved_type() {
    // Only a blank line resets the conjunction tracking, so a header that
    // immediately follows another block inherits its last resolved type.
    let source = concat!(
        "Scenario: first\n",
        "  When they log in\n",
        "Scenario: second\n",
        "  And the session persists\n",
    );

    let steps = scan_feature_source(source).expect("scan feature source");
    assert_eq!(
        steps,
        vec![
            step(StepType::When, "they log in"),
            step(StepType::When, "the session persists"),
        ]
    );
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn conjunction_without_primary_step_is_an_error() {
    let source = "Scenario: s\n  But nothing came before\n";
    let err = scan_feature_source(source).expect_err("expected dangling conjunction");
    assert!(matches!(
        err,
        SyncError::DanglingConjunction {
            keyword: StepKeyword::But,
            line: 2,
        }
    ));
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn blank_line_resets_conjunction_tracking() {
    let source = concat!(
        "Scenario: first\n",
        "  Given a user exists\n",
        "\n",
        "Scenario: second\n",
        "  And this dangles\n",
    );

    let err = scan_feature_source(source).expect_err("expected dangling conjunction");
    assert!(matches!(
        err,
        SyncError::DanglingConjunction {
            keyword: StepKeyword::And,
            line: 5,
        }
    ));
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn crlf_sources_scan_identically() {
    let source = "Scenario: s\r\n  Given a user exists\r\n  And the user is active\r\n";
    let steps = scan_feature_source(source).expect("scan feature source");
    assert_eq!(
        steps,
        vec![
            step(StepType::Given, "a user exists"),
            step(StepType::Given, "the user is active"),
        ]
    );
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn crlf_dangling_conjunction_keeps_its_line_number() {
    let source = "Scenario: s\r\n  And nothing came before\r\n";
    let err = scan_feature_source(source).expect_err("expected dangling conjunction");
    assert!(matches!(
        err,
        SyncError::DanglingConjunction {
            keyword: StepKeyword::And,
            line: 2,
        }
    ));
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn scenario_outline_headers_do_not_open_blocks() {
    let source = concat!(
        "Scenario Outline: parameterised\n",
        "  Given a <kind> user\n",
    );

    let steps = scan_feature_source(source).expect("scan feature source");
    assert!(steps.is_empty());
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn empty_source_produces_no_steps() {
    assert!(scan_feature_source("").expect("scan feature source").is_empty());
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn scan_feature_file_reads_from_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("login.feature");
    std::fs::write(&path, "Scenario: s\n  Given a user exists\n").expect("write feature file");

    let steps = scan_feature_file(&path).expect("scan feature file");
    assert_eq!(steps, vec![step(StepType::Given, "a user exists")]);
}

#[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
#[test]
fn scan_feature_file_reports_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let err = scan_feature_file(&dir.path().join("absent.feature"))
        .expect_err("expected missing file error");
    assert!(matches!(err, SyncError::Io(_)));
}
