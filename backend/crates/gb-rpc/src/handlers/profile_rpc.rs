use crate::handlers::args::parse_args;
use crate::handlers::error_boundary::respond;
use crate::handlers::messages::{
    INVALID_JSON_FORMAT, INVALID_PROFILE_DATA, PROFILE_RETRIEVE_ERROR, PROFILE_SAVE_ERROR,
    PROFILE_SAVE_FAILED, PROFILE_SAVED, PROFILE_SERIALIZATION_ERROR,
};
use crate::{Lookup, Reply, RequestContext, RpcFunction, WebviewHost};

use gb_core::Profile;
use gb_db::ProfileRepository;

use std::sync::Arc;

use log::{debug, error, warn};

/// RPC surface for the single user profile.
pub struct ProfileRpc {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileRpc {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// `GetProfile []`. A missing profile is a not-found success, not an error.
    pub fn get_profile(&self, host: &dyn WebviewHost, request_id: &str, _raw_args: &str) {
        respond(
            host,
            request_id,
            RpcFunction::GetProfile.name(),
            PROFILE_RETRIEVE_ERROR,
            |ctx| {
                let lookup = Lookup::from(self.repository.get_profile());
                if !lookup.is_found() {
                    debug!("{} No profile stored yet", ctx.log_prefix());
                }
                Reply::from_result(&lookup.into_result(), PROFILE_SERIALIZATION_ERROR)
            },
        );
    }

    /// `SaveProfile [profile]`
    pub fn save_profile(&self, host: &dyn WebviewHost, request_id: &str, raw_args: &str) {
        respond(
            host,
            request_id,
            RpcFunction::SaveProfile.name(),
            PROFILE_SAVE_ERROR,
            |ctx| self.save_profile_reply(ctx, raw_args),
        );
    }

    fn save_profile_reply(&self, ctx: &RequestContext, raw_args: &str) -> Reply {
        let profiles: Vec<Option<Profile>> = match parse_args(raw_args) {
            Ok(profiles) => profiles,
            Err(e) => {
                warn!("{} SaveProfile rejected: {}", ctx.log_prefix(), e);
                return Reply::error(INVALID_JSON_FORMAT);
            }
        };

        let Some(first) = profiles.into_iter().next() else {
            warn!("{} SaveProfile called without a profile", ctx.log_prefix());
            return Reply::error(INVALID_PROFILE_DATA);
        };

        // A `null` element reaches the store as "nothing to save".
        let Some(profile) = first else {
            warn!("{} SaveProfile refused a null profile", ctx.log_prefix());
            return Reply::error(PROFILE_SAVE_FAILED);
        };

        if self.repository.save_profile(&profile) {
            Reply::message(PROFILE_SAVED)
        } else {
            error!("{} Profile repository refused the save", ctx.log_prefix());
            Reply::error(PROFILE_SAVE_FAILED)
        }
    }
}
