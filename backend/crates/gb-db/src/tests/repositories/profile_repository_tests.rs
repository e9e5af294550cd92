use crate::tests::files_with_prefix;
use crate::{JsonProfileRepository, PROFILE_FILE_NAME, ProfileRepository};

use gb_core::{Certification, ExperienceType, OtherExperience, Profile};

use std::fs;

use googletest::assert_that;
use googletest::prelude::none;
use tempfile::TempDir;

fn setup() -> (TempDir, JsonProfileRepository) {
    let temp = TempDir::new().unwrap();
    let repo = JsonProfileRepository::new(temp.path()).unwrap();
    (temp, repo)
}

fn sample_profile() -> Profile {
    Profile {
        first_name: Some("Grace".into()),
        last_name: Some("Hopper".into()),
        email: Some("grace@example.com".into()),
        phone_number: None,
        skills: vec!["COBOL".into(), "Compilers".into()],
        certifications: vec![Certification {
            name: Some("Rear Admiral".into()),
            earned_date: Some(1985),
            description: None,
            link: None,
        }],
        job_experiences: Vec::new(),
        other_experiences: vec![OtherExperience {
            experience_type: Some(ExperienceType::Project),
            title: Some("FLOW-MATIC".into()),
            accomplishments: vec!["English-like syntax".into()],
            ..OtherExperience::default()
        }],
        education: Vec::new(),
    }
}

#[test]
fn given_nested_data_dir_when_new_then_directory_created() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("a").join("b");

    let repo = JsonProfileRepository::new(&dir).unwrap();

    assert!(dir.is_dir());
    assert_eq!(repo.path(), dir.join(PROFILE_FILE_NAME));
}

#[test]
fn given_fresh_directory_when_get_profile_then_none() {
    let (_temp, repo) = setup();

    assert_that!(repo.get_profile(), none());
}

#[test]
fn given_saved_profile_when_get_profile_then_round_trips_every_field() {
    let (_temp, repo) = setup();
    let profile = sample_profile();

    assert!(repo.save_profile(&profile));

    assert_eq!(repo.get_profile(), Some(profile));
}

#[test]
fn given_saved_profile_then_empty_lists_stay_empty_and_absent_strings_stay_absent() {
    let (_temp, repo) = setup();

    assert!(repo.save_profile(&sample_profile()));

    let contents = fs::read_to_string(repo.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["jobExperiences"], serde_json::json!([]));
    assert!(value.get("phoneNumber").is_none());

    let loaded = repo.get_profile().unwrap();
    assert!(loaded.job_experiences.is_empty());
    assert!(loaded.phone_number.is_none());
}

#[test]
fn given_existing_profile_when_save_then_replaced_not_merged() {
    let (_temp, repo) = setup();
    assert!(repo.save_profile(&sample_profile()));

    let replacement = Profile {
        first_name: Some("Ada".into()),
        ..Profile::default()
    };
    assert!(repo.save_profile(&replacement));

    let loaded = repo.get_profile().unwrap();
    assert_eq!(loaded, replacement);
    assert!(loaded.skills.is_empty());
    assert!(loaded.last_name.is_none());
}

#[test]
fn given_garbage_file_when_get_profile_then_none_not_error() {
    let (_temp, repo) = setup();
    fs::write(repo.path(), "this is not json").unwrap();

    assert_that!(repo.get_profile(), none());
}

#[test]
fn given_null_file_when_get_profile_then_none() {
    let (_temp, repo) = setup();
    fs::write(repo.path(), "null").unwrap();

    assert_that!(repo.get_profile(), none());
}

#[test]
fn given_file_missing_lists_when_get_profile_then_lists_empty() {
    let (_temp, repo) = setup();
    fs::write(repo.path(), r#"{"firstName":"Ada","email":"ada@example.com"}"#).unwrap();

    let loaded = repo.get_profile().unwrap();

    assert_eq!(loaded.first_name.as_deref(), Some("Ada"));
    assert!(loaded.skills.is_empty());
    assert!(loaded.education.is_empty());
}

#[test]
fn given_garbage_file_when_save_profile_then_old_file_backed_up() {
    let (temp, repo) = setup();
    fs::write(repo.path(), "garbage").unwrap();

    assert!(repo.save_profile(&sample_profile()));

    assert_eq!(repo.get_profile(), Some(sample_profile()));
    let backups = files_with_prefix(temp.path(), "profile.json.corrupted.");
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "garbage");
}

#[test]
fn given_data_dir_removed_when_save_profile_then_false() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("data");
    let repo = JsonProfileRepository::new(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert!(!repo.save_profile(&sample_profile()));
}

#[test]
fn given_saved_profile_when_delete_twice_then_both_true() {
    let (_temp, repo) = setup();
    assert!(repo.save_profile(&sample_profile()));

    assert!(repo.delete_profile());
    assert!(repo.delete_profile());
    assert_that!(repo.get_profile(), none());
}

#[test]
fn given_no_profile_when_delete_then_true() {
    let (_temp, repo) = setup();

    assert!(repo.delete_profile());
}

#[test]
fn given_valid_file_when_backup_corrupted_then_none() {
    let (_temp, repo) = setup();
    assert!(repo.save_profile(&sample_profile()));

    assert!(repo.backup_corrupted().unwrap().is_none());
    assert!(repo.path().exists());
}
