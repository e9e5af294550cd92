use crate::{
    BoundFunction, CandidacyRpc, FunctionBinder, ProfileRpc, Result, RpcError, WebviewHost,
};

use gb_db::{CandidacyRepository, ProfileRepository};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{info, warn};

/// Every function is exposed to the UI under this prefix.
pub const FUNCTION_NAME_PREFIX: &str = "GRIND_BREAKER_";

/// Bound names in registration order.
pub const FUNCTION_NAMES: [&str; 8] = [
    "GRIND_BREAKER_GetProfile",
    "GRIND_BREAKER_SaveProfile",
    "GRIND_BREAKER_GetAllCandidacies",
    "GRIND_BREAKER_GetCandidacy",
    "GRIND_BREAKER_SaveCandidacy",
    "GRIND_BREAKER_UpdateCandidacy",
    "GRIND_BREAKER_DeleteCandidacy",
    "GRIND_BREAKER_UpdateCandidacyStatus",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcFunction {
    GetProfile,
    SaveProfile,
    GetAllCandidacies,
    GetCandidacy,
    SaveCandidacy,
    UpdateCandidacy,
    DeleteCandidacy,
    UpdateCandidacyStatus,
}

impl RpcFunction {
    pub const ALL: [RpcFunction; 8] = [
        RpcFunction::GetProfile,
        RpcFunction::SaveProfile,
        RpcFunction::GetAllCandidacies,
        RpcFunction::GetCandidacy,
        RpcFunction::SaveCandidacy,
        RpcFunction::UpdateCandidacy,
        RpcFunction::DeleteCandidacy,
        RpcFunction::UpdateCandidacyStatus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RpcFunction::GetProfile => "GetProfile",
            RpcFunction::SaveProfile => "SaveProfile",
            RpcFunction::GetAllCandidacies => "GetAllCandidacies",
            RpcFunction::GetCandidacy => "GetCandidacy",
            RpcFunction::SaveCandidacy => "SaveCandidacy",
            RpcFunction::UpdateCandidacy => "UpdateCandidacy",
            RpcFunction::DeleteCandidacy => "DeleteCandidacy",
            RpcFunction::UpdateCandidacyStatus => "UpdateCandidacyStatus",
        }
    }

    /// Name as registered on the host, e.g. `GRIND_BREAKER_GetProfile`.
    pub fn bound_name(&self) -> &'static str {
        match self {
            RpcFunction::GetProfile => FUNCTION_NAMES[0],
            RpcFunction::SaveProfile => FUNCTION_NAMES[1],
            RpcFunction::GetAllCandidacies => FUNCTION_NAMES[2],
            RpcFunction::GetCandidacy => FUNCTION_NAMES[3],
            RpcFunction::SaveCandidacy => FUNCTION_NAMES[4],
            RpcFunction::UpdateCandidacy => FUNCTION_NAMES[5],
            RpcFunction::DeleteCandidacy => FUNCTION_NAMES[6],
            RpcFunction::UpdateCandidacyStatus => FUNCTION_NAMES[7],
        }
    }
}

impl fmt::Display for RpcFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RpcFunction {
    type Err = RpcError;

    /// Accepts the bare name or the prefixed bound name. Case-sensitive.
    fn from_str(s: &str) -> Result<Self> {
        let bare = s.strip_prefix(FUNCTION_NAME_PREFIX).unwrap_or(s);
        RpcFunction::ALL
            .into_iter()
            .find(|function| function.name() == bare)
            .ok_or_else(|| RpcError::unknown_function(s))
    }
}

/// Owns the handlers and routes named calls to them.
pub struct RpcRouter {
    profile: ProfileRpc,
    candidacy: CandidacyRpc,
}

impl RpcRouter {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository>,
        candidacy_repository: Arc<dyn CandidacyRepository>,
    ) -> Self {
        Self {
            profile: ProfileRpc::new(profile_repository),
            candidacy: CandidacyRpc::new(candidacy_repository),
        }
    }

    /// Invoke one function. Always ends in exactly one `return_result`.
    pub fn call(
        &self,
        function: RpcFunction,
        host: &dyn WebviewHost,
        request_id: &str,
        raw_args: &str,
    ) {
        match function {
            RpcFunction::GetProfile => self.profile.get_profile(host, request_id, raw_args),
            RpcFunction::SaveProfile => self.profile.save_profile(host, request_id, raw_args),
            RpcFunction::GetAllCandidacies => {
                self.candidacy
                    .get_all_candidacies(host, request_id, raw_args)
            }
            RpcFunction::GetCandidacy => self.candidacy.get_candidacy(host, request_id, raw_args),
            RpcFunction::SaveCandidacy => {
                self.candidacy.save_candidacy(host, request_id, raw_args)
            }
            RpcFunction::UpdateCandidacy => {
                self.candidacy.update_candidacy(host, request_id, raw_args)
            }
            RpcFunction::DeleteCandidacy => {
                self.candidacy.delete_candidacy(host, request_id, raw_args)
            }
            RpcFunction::UpdateCandidacyStatus => {
                self.candidacy
                    .update_candidacy_status(host, request_id, raw_args)
            }
        }
    }

    /// Route by name. An unknown name is an integration error: nothing is
    /// returned to the host in that case.
    pub fn dispatch(
        &self,
        host: &dyn WebviewHost,
        name: &str,
        request_id: &str,
        raw_args: &str,
    ) -> Result<()> {
        let function = name.parse::<RpcFunction>().inspect_err(|e| {
            warn!("Dispatch failed: {e}");
        })?;
        self.call(function, host, request_id, raw_args);
        Ok(())
    }

    /// Register every function on the host under its bound name.
    pub fn bind_all(self: &Arc<Self>, binder: &mut dyn FunctionBinder, host: Arc<dyn WebviewHost>) {
        for function in RpcFunction::ALL {
            let router = Arc::clone(self);
            let host = Arc::clone(&host);
            let handler: BoundFunction = Arc::new(move |request_id: &str, raw_args: &str| {
                router.call(function, host.as_ref(), request_id, raw_args);
            });
            binder.bind(function.bound_name(), handler);
        }
        info!("Bound {} RPC functions", RpcFunction::ALL.len());
    }
}
