use crate::{CandidacyStatus, CoreError};

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_candidacy_status_as_str() {
    assert_eq!(CandidacyStatus::ToApply.as_str(), "ToApply");
    assert_eq!(CandidacyStatus::PreInterview.as_str(), "PreInterview");
    assert_eq!(CandidacyStatus::Withdrawn.as_str(), "Withdrawn");
}

#[test]
fn test_candidacy_status_from_str() {
    assert_eq!(
        CandidacyStatus::from_str("Applied").unwrap(),
        CandidacyStatus::Applied
    );
    assert_eq!(
        CandidacyStatus::from_str("Ghosted").unwrap(),
        CandidacyStatus::Ghosted
    );
    assert!(CandidacyStatus::from_str("NotARealStatus").is_err());
}

#[test]
fn test_candidacy_status_from_str_is_case_sensitive() {
    assert!(CandidacyStatus::from_str("applied").is_err());
    assert!(CandidacyStatus::from_str("APPLIED").is_err());
    assert!(CandidacyStatus::from_str("").is_err());
}

#[test]
fn test_candidacy_status_default() {
    assert_eq!(CandidacyStatus::default(), CandidacyStatus::ToApply);
}

#[test]
fn test_candidacy_status_ordinals_follow_board_order() {
    assert_eq!(i32::from(CandidacyStatus::ToApply), 0);
    assert_eq!(i32::from(CandidacyStatus::Offered), 4);
    assert_eq!(i32::from(CandidacyStatus::Withdrawn), 7);
    assert!(CandidacyStatus::try_from(8).is_err());
    assert!(CandidacyStatus::try_from(-1).is_err());
}

#[test]
fn given_status_when_serialized_then_writes_ordinal() {
    let json = serde_json::to_string(&CandidacyStatus::PostInterview).unwrap();
    assert_eq!(json, "3");
}

#[test]
fn given_name_when_deserialized_then_accepts_symbolic_form() {
    let status: CandidacyStatus = serde_json::from_str("\"Rejected\"").unwrap();
    assert_eq!(status, CandidacyStatus::Rejected);
}

#[test]
fn given_unknown_ordinal_when_deserialized_then_fails() {
    assert!(serde_json::from_str::<CandidacyStatus>("42").is_err());
    assert!(serde_json::from_str::<CandidacyStatus>("\"Hired\"").is_err());
}

#[test]
fn given_unknown_name_when_parsed_then_error_carries_value() {
    match CandidacyStatus::from_str("Hired") {
        Err(CoreError::InvalidCandidacyStatus { value, .. }) => assert_eq!(value, "Hired"),
        other => panic!("Expected InvalidCandidacyStatus, got {other:?}"),
    }
}

#[test]
fn given_name_or_ordinal_text_when_parsed_then_both_forms_accepted() {
    assert_eq!(
        CandidacyStatus::from_name_or_ordinal("Applied").unwrap(),
        CandidacyStatus::Applied
    );
    assert_eq!(
        CandidacyStatus::from_name_or_ordinal("1").unwrap(),
        CandidacyStatus::Applied
    );
    assert_eq!(
        CandidacyStatus::from_name_or_ordinal("7").unwrap(),
        CandidacyStatus::Withdrawn
    );
}

#[test]
fn given_wrong_case_or_out_of_range_ordinal_when_parsed_then_error() {
    for raw in ["applied", "8", "99", "-1", "1.5", ""] {
        assert!(
            CandidacyStatus::from_name_or_ordinal(raw).is_err(),
            "{raw:?} should be rejected"
        );
    }
}

proptest! {
    #[test]
    fn given_any_ordinal_text_when_parsed_then_matches_board_order(ordinal in -20i32..20) {
        let parsed = CandidacyStatus::from_name_or_ordinal(&ordinal.to_string()).ok();
        let expected = usize::try_from(ordinal).ok().and_then(|i| CandidacyStatus::ALL.get(i).copied());
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn given_any_status_when_name_parsed_then_same_status(index in 0usize..8) {
        let status = CandidacyStatus::ALL[index];
        prop_assert_eq!(CandidacyStatus::from_str(status.as_str()).unwrap(), status);
    }

    #[test]
    fn given_any_status_when_ordinal_converted_then_same_status(index in 0usize..8) {
        let status = CandidacyStatus::ALL[index];
        prop_assert_eq!(CandidacyStatus::try_from(i32::from(status)).unwrap(), status);
        prop_assert_eq!(i32::from(status), index as i32);
    }

    #[test]
    fn given_random_word_when_parsed_then_only_known_names_succeed(name in "[A-Za-z]{1,16}") {
        let known = CandidacyStatus::ALL.iter().any(|s| s.as_str() == name);
        prop_assert_eq!(CandidacyStatus::from_str(&name).is_ok(), known);
    }
}
