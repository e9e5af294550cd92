use crate::{Candidacy, CandidacyStatus, CandidacyStep, CoreError};

use googletest::assert_that;
use googletest::prelude::{eq, gt};
use serde_json::json;

fn sample_candidacy() -> Candidacy {
    Candidacy {
        id: "c-1".into(),
        company: "Acme".into(),
        title: "Backend Engineer".into(),
        job_link: Some("https://acme.example/jobs/1".into()),
        job_description: None,
        date_applied: 1_700_000_000,
        status: CandidacyStatus::PreInterview,
        application_steps: vec![
            CandidacyStep::new("Phone screen", 1_700_100_000, None),
            CandidacyStep::new("Onsite", 1_700_200_000, Some("Bring laptop".into())),
        ],
    }
}

#[test]
fn given_new_candidacy_then_defaults_apply() {
    let candidacy = Candidacy::new("Acme", "Engineer");

    assert_that!(candidacy.id.is_empty(), eq(false));
    assert_that!(candidacy.status, eq(CandidacyStatus::ToApply));
    assert!(candidacy.application_steps.is_empty());
    assert_that!(candidacy.date_applied, gt(0));
}

#[test]
fn given_two_defaults_then_ids_differ() {
    assert_ne!(Candidacy::default().id, Candidacy::default().id);
}

#[test]
fn given_candidacy_when_serialized_then_uses_wire_field_names() {
    let value = serde_json::to_value(sample_candidacy()).unwrap();

    assert_eq!(value["id"], json!("c-1"));
    assert_eq!(value["jobLink"], json!("https://acme.example/jobs/1"));
    assert_eq!(value["dateApplied"], json!(1_700_000_000));
    assert_eq!(value["status"], json!(2));
    assert_eq!(value["applicationSteps"][1]["type"], json!("Onsite"));
    assert_eq!(value["applicationSteps"][1]["notes"], json!("Bring laptop"));
    assert!(value.get("jobDescription").is_none());
    assert!(value["applicationSteps"][0].get("notes").is_none());
}

#[test]
fn given_serialized_candidacy_when_deserialized_then_equal_with_step_order() {
    let original = sample_candidacy();

    let json = serde_json::to_string_pretty(&original).unwrap();
    let restored: Candidacy = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.application_steps[0].step_type, "Phone screen");
    assert_eq!(restored.application_steps[1].step_type, "Onsite");
}

#[test]
fn given_record_without_id_when_deserialized_then_id_generated() {
    let candidacy: Candidacy =
        serde_json::from_str(r#"{"company":"Acme","title":"Engineer"}"#).unwrap();

    assert!(!candidacy.id.is_empty());
    assert!(candidacy.application_steps.is_empty());
    assert_eq!(candidacy.status, CandidacyStatus::ToApply);
}

#[test]
fn given_null_fields_when_deserialized_then_treated_as_missing() {
    let candidacy: Candidacy = serde_json::from_str(
        r#"{"id":null,"company":null,"title":"Engineer","applicationSteps":null,"status":null}"#,
    )
    .unwrap();

    assert!(!candidacy.id.is_empty());
    assert_eq!(candidacy.company, "");
    assert!(candidacy.application_steps.is_empty());
}

#[test]
fn given_status_name_in_record_when_deserialized_then_accepted() {
    let candidacy: Candidacy =
        serde_json::from_str(r#"{"id":"x","company":"A","title":"B","status":"Offered"}"#)
            .unwrap();

    assert_eq!(candidacy.status, CandidacyStatus::Offered);
}

#[test]
fn given_blank_company_or_title_then_required_fields_missing() {
    let mut candidacy = sample_candidacy();
    assert!(candidacy.validate().is_ok());

    candidacy.company = String::new();
    assert!(candidacy.validate().is_err());

    candidacy.company = "Acme".into();
    candidacy.title = "   \t".into();
    assert!(candidacy.validate().is_err());
}

#[test]
fn given_blank_title_when_validated_then_error_names_field() {
    let mut candidacy = sample_candidacy();
    candidacy.title = String::new();

    let err = candidacy.validate().unwrap_err();

    match err {
        CoreError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("title")),
        other => panic!("unexpected error: {other}"),
    }
}
