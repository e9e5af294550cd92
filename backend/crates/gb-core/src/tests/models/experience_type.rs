use crate::ExperienceType;

use std::str::FromStr;

#[test]
fn test_experience_type_round_trips_by_name() {
    for kind in [
        ExperienceType::Project,
        ExperienceType::VolunteerWork,
        ExperienceType::Other,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
        assert_eq!(serde_json::from_str::<ExperienceType>(&json).unwrap(), kind);
    }
}

#[test]
fn test_experience_type_accepts_ordinal() {
    let kind: ExperienceType = serde_json::from_str("1").unwrap();
    assert_eq!(kind, ExperienceType::VolunteerWork);
    assert!(serde_json::from_str::<ExperienceType>("3").is_err());
}

#[test]
fn test_experience_type_from_str_rejects_unknown() {
    assert!(ExperienceType::from_str("Hobby").is_err());
}
