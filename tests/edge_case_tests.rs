//! Edge cases around line extraction and the recovery cascade.

#![cfg(all(feature = "extract", feature = "recovery"))]

use ogm::core::*;
use ogm::extract::{find, find_all, find_numeric, find_structured, identify};
use ogm::recovery::{Step, candidates, normalize_query, recover};

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

#[test]
fn unicode_text_around_code() {
    let line = "Règlement facture été → +++123/4567/89095+++ ✓";
    let m = find_structured(line).unwrap();
    assert_eq!(&line[m.start()..m.end()], "+++123/4567/89095+++");
}

#[test]
fn non_ascii_digits_do_not_extend_a_run() {
    // U+0661 is ARABIC-INDIC DIGIT ONE, not part of an ASCII digit run.
    let line = "\u{661}123456789095\u{661}";
    assert_eq!(find_numeric(line).unwrap().as_str(), "123456789095");
}

#[test]
fn first_match_is_returned_even_if_invalid() {
    // The first structured value has a bad checksum; the second is fine.
    let line = "+++123/4567/89000+++ or +++123/4567/89095+++";
    let err = identify(line, Notation::Structured).unwrap_err();
    assert_eq!(err.kind(), RejectionKind::ChecksumMismatch);
}

#[test]
fn numeric_run_touching_letters_is_accepted() {
    assert_eq!(
        find_numeric("REF123456789095EUR").unwrap().as_str(),
        "123456789095"
    );
}

#[test]
fn twelve_digits_inside_longer_runs_are_skipped() {
    let line = "00123456789095 1234567890950 99123456789095";
    assert!(find_numeric(line).is_err());
    assert_eq!(find_all(line, Notation::Numeric).count(), 0);
}

#[test]
fn structured_has_no_digit_boundary_rule() {
    // Digits glued to the outer `+++` do not matter.
    let line = "9+++123/4567/89095+++9";
    assert_eq!(
        find(line, Notation::Structured).unwrap().as_str(),
        "+++123/4567/89095+++"
    );
}

#[test]
fn newline_only_line_is_blank() {
    assert_eq!(find_numeric("\n\r\n").unwrap_err(), Rejection::Blank);
}

#[test]
fn structured_across_newline_is_not_matched() {
    assert!(find_structured("+++123/4567\n/89095+++").is_err());
}

// ---------------------------------------------------------------------------
// Recovery cascade
// ---------------------------------------------------------------------------

fn validate_structured(s: &str) -> CheckResult {
    CheckResult::now(parse_structured(s).and_then(validate))
}

#[test]
fn cascade_order_is_fixed() {
    let steps: Vec<Step> = candidates("p", Some("r")).map(|(s, _)| s).collect();
    assert_eq!(steps, Step::CASCADE);
}

#[test]
fn valid_primary_short_circuits_raw() {
    let mut calls = 0;
    let r = recover("+++123/4567/89095+++", Some("ignored"), |s| {
        calls += 1;
        validate_structured(s)
    });
    assert_eq!(calls, 1);
    assert_eq!(r.step, Some(Step::Primary));
}

#[test]
fn checksum_failure_is_not_recovered_into_success() {
    let r = recover("   123/4567/89000   ", None, validate_structured);
    assert!(!r.result.is_valid());
    // The first attempt's reason is kept, not the mismatch from step 2.
    assert_eq!(r.result.rejection().unwrap().kind(), RejectionKind::Format);
}

#[test]
fn plus_to_space_only_goes_one_way() {
    // A value that needs `+` turned into a space is not recovered.
    let r = recover("+123456789095+", None, |s| {
        CheckResult::now(parse_numeric(s).and_then(validate))
    });
    assert!(r.step.is_none());
}

#[test]
fn quotes_are_caller_side() {
    let r = recover("\"+++123/4567/89095+++\"", None, validate_structured);
    assert!(!r.result.is_valid());

    let r = recover(
        normalize_query("\"+++123/4567/89095+++\""),
        None,
        validate_structured,
    );
    assert!(r.result.is_valid());
}
