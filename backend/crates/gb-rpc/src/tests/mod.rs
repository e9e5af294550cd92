
use crate::{FunctionBinder, BoundFunction, RpcResultType, WebviewHost};

use gb_core::{Candidacy, CandidacyStatus, Profile};
use gb_db::{CandidacyRepository, ProfileRepository};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

// =========================================================================
// Hosts
// =========================================================================

/// Records every `return_result` call.
#[derive(Default)]
pub(crate) struct RecordingHost {
    returns: Mutex<Vec<(String, RpcResultType, String)>>,
}

impl RecordingHost {
    pub(crate) fn count(&self) -> usize {
        self.returns.lock().unwrap().len()
    }

    /// The single reply delivered so far, with its envelope parsed.
    pub(crate) fn only_reply(&self) -> (String, RpcResultType, Value) {
        let returns = self.returns.lock().unwrap();
        assert_eq!(returns.len(), 1, "expected exactly one return_result call");
        let (request_id, kind, json) = returns[0].clone();
        (request_id, kind, serde_json::from_str(&json).unwrap())
    }
}

impl WebviewHost for RecordingHost {
    fn return_result(&self, request_id: &str, kind: RpcResultType, json: &str) {
        self.returns
            .lock()
            .unwrap()
            .push((request_id.to_string(), kind, json.to_string()));
    }
}

#[derive(Default)]
pub(crate) struct MapBinder {
    pub(crate) functions: HashMap<String, BoundFunction>,
}

impl FunctionBinder for MapBinder {
    fn bind(&mut self, name: &str, handler: BoundFunction) {
        self.functions.insert(name.to_string(), handler);
    }
}

/// Assert an error envelope with `message` and a matching transport tag.
pub(crate) fn assert_error_reply(host: &RecordingHost, message: &str) {
    let (_, kind, envelope) = host.only_reply();
    assert_eq!(kind, RpcResultType::Error);
    assert_eq!(envelope["isError"], Value::Bool(true));
    assert_eq!(envelope["errorMessage"], Value::from(message));
    assert!(envelope.get("data").is_none());
}

/// Assert a success envelope whose data is `message`.
pub(crate) fn assert_message_reply(host: &RecordingHost, message: &str) {
    let (_, kind, envelope) = host.only_reply();
    assert_eq!(kind, RpcResultType::Success);
    assert_eq!(envelope["isError"], Value::Bool(false));
    assert_eq!(envelope["data"], Value::from(message));
    assert!(envelope.get("errorMessage").is_none());
}

// =========================================================================
// Fake repositories
// =========================================================================

pub(crate) struct FakeProfileRepository {
    pub(crate) profile: Mutex<Option<Profile>>,
    pub(crate) accept_writes: bool,
    pub(crate) save_calls: AtomicUsize,
}

impl FakeProfileRepository {
    pub(crate) fn new(profile: Option<Profile>) -> Self {
        Self {
            profile: Mutex::new(profile),
            accept_writes: true,
            save_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn rejecting_writes() -> Self {
        Self {
            accept_writes: false,
            ..Self::new(None)
        }
    }
}

impl ProfileRepository for FakeProfileRepository {
    fn get_profile(&self) -> Option<Profile> {
        self.profile.lock().unwrap().clone()
    }

    fn save_profile(&self, profile: &Profile) -> bool {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.accept_writes {
            *self.profile.lock().unwrap() = Some(profile.clone());
        }
        self.accept_writes
    }

    fn delete_profile(&self) -> bool {
        *self.profile.lock().unwrap() = None;
        true
    }
}

pub(crate) struct PanickingProfileRepository;

impl ProfileRepository for PanickingProfileRepository {
    fn get_profile(&self) -> Option<Profile> {
        panic!("profile storage exploded")
    }

    fn save_profile(&self, _profile: &Profile) -> bool {
        panic!("profile storage exploded")
    }

    fn delete_profile(&self) -> bool {
        panic!("profile storage exploded")
    }
}

pub(crate) struct FakeCandidacyRepository {
    pub(crate) candidacies: Mutex<Vec<Candidacy>>,
    pub(crate) accept_writes: bool,
    pub(crate) calls: AtomicUsize,
}

impl FakeCandidacyRepository {
    pub(crate) fn new(candidacies: Vec<Candidacy>) -> Self {
        Self {
            candidacies: Mutex::new(candidacies),
            accept_writes: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn rejecting_writes() -> Self {
        Self {
            accept_writes: false,
            ..Self::new(Vec::new())
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn stored(&self) -> Vec<Candidacy> {
        self.candidacies.lock().unwrap().clone()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl CandidacyRepository for FakeCandidacyRepository {
    fn get_all_candidacies(&self) -> Vec<Candidacy> {
        self.touch();
        self.stored()
    }

    fn get_candidacy(&self, id: &str) -> Option<Candidacy> {
        self.touch();
        self.stored().into_iter().find(|c| c.id == id)
    }

    fn save_candidacy(&self, candidacy: &Candidacy) -> bool {
        self.touch();
        if self.accept_writes {
            self.candidacies.lock().unwrap().push(candidacy.clone());
        }
        self.accept_writes
    }

    fn update_candidacy(&self, candidacy: &Candidacy) -> bool {
        self.touch();
        let mut stored = self.candidacies.lock().unwrap();
        match stored.iter_mut().find(|c| c.id == candidacy.id) {
            Some(existing) if self.accept_writes => {
                *existing = candidacy.clone();
                true
            }
            _ => false,
        }
    }

    fn delete_candidacy(&self, id: &str) -> bool {
        self.touch();
        let mut stored = self.candidacies.lock().unwrap();
        let before = stored.len();
        stored.retain(|c| c.id != id);
        self.accept_writes && stored.len() < before
    }

    fn update_candidacy_status(&self, id: &str, status: CandidacyStatus) -> bool {
        self.touch();
        let mut stored = self.candidacies.lock().unwrap();
        match stored.iter_mut().find(|c| c.id == id) {
            Some(existing) if self.accept_writes => {
                existing.status = status;
                true
            }
            _ => false,
        }
    }
}

pub(crate) struct PanickingCandidacyRepository;

impl CandidacyRepository for PanickingCandidacyRepository {
    fn get_all_candidacies(&self) -> Vec<Candidacy> {
        panic!("candidacy storage exploded")
    }

    fn get_candidacy(&self, _id: &str) -> Option<Candidacy> {
        panic!("candidacy storage exploded")
    }

    fn save_candidacy(&self, _candidacy: &Candidacy) -> bool {
        panic!("candidacy storage exploded")
    }

    fn update_candidacy(&self, _candidacy: &Candidacy) -> bool {
        panic!("candidacy storage exploded")
    }

    fn delete_candidacy(&self, _id: &str) -> bool {
        panic!("candidacy storage exploded")
    }

    fn update_candidacy_status(&self, _id: &str, _status: CandidacyStatus) -> bool {
        panic!("candidacy storage exploded")
    }
}

pub(crate) fn sample_candidacy(id: &str) -> Candidacy {
    let mut candidacy = Candidacy::new("Acme", "Rust Engineer");
    candidacy.id = id.to_string();
    candidacy.job_link = Some("https://acme.example/jobs/1".to_string());
    candidacy
}
