use crate::handlers::args::{coerce_to_string, id_arg, parse_args};
use crate::handlers::error_boundary::respond;
use crate::handlers::messages::{
    CANDIDACIES_RETRIEVE_ERROR, CANDIDACIES_SERIALIZATION_ERROR, CANDIDACY_DELETE_ERROR,
    CANDIDACY_DELETE_FAILED, CANDIDACY_DELETED, CANDIDACY_RETRIEVE_ERROR, CANDIDACY_SAVE_ERROR,
    CANDIDACY_SAVE_FAILED, CANDIDACY_SAVED, CANDIDACY_UPDATE_ERROR, CANDIDACY_UPDATE_FAILED,
    CANDIDACY_UPDATED, INVALID_CANDIDACY_DATA, INVALID_CANDIDACY_ID, INVALID_JSON_FORMAT,
    INVALID_STATUS_REQUEST, INVALID_STATUS_VALUE, REQUIRED_FIELDS_MISSING, STATUS_FIELDS_REQUIRED,
    STATUS_UPDATE_ERROR, STATUS_UPDATE_FAILED, STATUS_UPDATED,
};
use crate::{Lookup, Reply, RequestContext, RpcFunction, RpcResult, WebviewHost};

use gb_core::{Candidacy, CandidacyStatus};
use gb_db::CandidacyRepository;

use std::sync::Arc;

use log::{debug, error, warn};
use serde_json::Value;

/// RPC surface for tracked job applications.
pub struct CandidacyRpc {
    repository: Arc<dyn CandidacyRepository>,
}

impl CandidacyRpc {
    pub fn new(repository: Arc<dyn CandidacyRepository>) -> Self {
        Self { repository }
    }

    /// `GetAllCandidacies []`
    pub fn get_all_candidacies(&self, host: &dyn WebviewHost, request_id: &str, _raw_args: &str) {
        respond(
            host,
            request_id,
            RpcFunction::GetAllCandidacies.name(),
            CANDIDACIES_RETRIEVE_ERROR,
            |ctx| {
                let candidacies = self.repository.get_all_candidacies();
                debug!("{} Loaded {} candidacies", ctx.log_prefix(), candidacies.len());
                Reply::from_result(
                    &RpcResult::success(candidacies),
                    CANDIDACIES_SERIALIZATION_ERROR,
                )
            },
        );
    }

    /// `GetCandidacy [id]`. Unknown ids are a not-found success.
    pub fn get_candidacy(&self, host: &dyn WebviewHost, request_id: &str, raw_args: &str) {
        respond(
            host,
            request_id,
            RpcFunction::GetCandidacy.name(),
            CANDIDACY_RETRIEVE_ERROR,
            |ctx| {
                let id = match candidacy_id(ctx, "GetCandidacy", raw_args) {
                    Ok(id) => id,
                    Err(reply) => return reply,
                };

                let lookup = Lookup::from(self.repository.get_candidacy(&id));
                if !lookup.is_found() {
                    debug!("{} Candidacy {} not found", ctx.log_prefix(), id);
                }
                Reply::from_result(&lookup.into_result(), CANDIDACY_RETRIEVE_ERROR)
            },
        );
    }

    /// `SaveCandidacy [candidacy]`. Appends; ids are not checked for duplicates.
    pub fn save_candidacy(&self, host: &dyn WebviewHost, request_id: &str, raw_args: &str) {
        respond(
            host,
            request_id,
            RpcFunction::SaveCandidacy.name(),
            CANDIDACY_SAVE_ERROR,
            |ctx| {
                let candidacy = match candidacy_arg(ctx, "SaveCandidacy", raw_args) {
                    Ok(candidacy) => candidacy,
                    Err(reply) => return reply,
                };

                if self.repository.save_candidacy(&candidacy) {
                    Reply::message(CANDIDACY_SAVED)
                } else {
                    error!("{} Failed to save candidacy {}", ctx.log_prefix(), candidacy.id);
                    Reply::error(CANDIDACY_SAVE_FAILED)
                }
            },
        );
    }

    /// `UpdateCandidacy [candidacy]`. Replaces the stored record with the same id.
    pub fn update_candidacy(&self, host: &dyn WebviewHost, request_id: &str, raw_args: &str) {
        respond(
            host,
            request_id,
            RpcFunction::UpdateCandidacy.name(),
            CANDIDACY_UPDATE_ERROR,
            |ctx| {
                let candidacy = match candidacy_arg(ctx, "UpdateCandidacy", raw_args) {
                    Ok(candidacy) => candidacy,
                    Err(reply) => return reply,
                };

                if self.repository.update_candidacy(&candidacy) {
                    Reply::message(CANDIDACY_UPDATED)
                } else {
                    warn!("{} Candidacy {} was not updated", ctx.log_prefix(), candidacy.id);
                    Reply::error(CANDIDACY_UPDATE_FAILED)
                }
            },
        );
    }

    /// `DeleteCandidacy [id]`
    pub fn delete_candidacy(&self, host: &dyn WebviewHost, request_id: &str, raw_args: &str) {
        respond(
            host,
            request_id,
            RpcFunction::DeleteCandidacy.name(),
            CANDIDACY_DELETE_ERROR,
            |ctx| {
                let id = match candidacy_id(ctx, "DeleteCandidacy", raw_args) {
                    Ok(id) => id,
                    Err(reply) => return reply,
                };

                if self.repository.delete_candidacy(&id) {
                    Reply::message(CANDIDACY_DELETED)
                } else {
                    warn!("{} Candidacy {} was not deleted", ctx.log_prefix(), id);
                    Reply::error(CANDIDACY_DELETE_FAILED)
                }
            },
        );
    }

    /// `UpdateCandidacyStatus [id, statusName]`. Only the status field changes.
    pub fn update_candidacy_status(
        &self,
        host: &dyn WebviewHost,
        request_id: &str,
        raw_args: &str,
    ) {
        respond(
            host,
            request_id,
            RpcFunction::UpdateCandidacyStatus.name(),
            STATUS_UPDATE_ERROR,
            |ctx| self.update_candidacy_status_reply(ctx, raw_args),
        );
    }

    fn update_candidacy_status_reply(&self, ctx: &RequestContext, raw_args: &str) -> Reply {
        let args: Vec<Value> = match parse_args(raw_args) {
            Ok(args) => args,
            Err(e) => {
                warn!("{} UpdateCandidacyStatus rejected: {}", ctx.log_prefix(), e);
                return Reply::error(INVALID_JSON_FORMAT);
            }
        };

        if args.len() < 2 {
            warn!(
                "{} UpdateCandidacyStatus expected 2 arguments, got {}",
                ctx.log_prefix(),
                args.len()
            );
            return Reply::error(INVALID_STATUS_REQUEST);
        }

        let id = coerce_to_string(&args[0]).filter(|s| !s.is_empty());
        let status_name = coerce_to_string(&args[1]).filter(|s| !s.is_empty());
        let (Some(id), Some(status_name)) = (id, status_name) else {
            warn!("{} UpdateCandidacyStatus missing id or status", ctx.log_prefix());
            return Reply::error(STATUS_FIELDS_REQUIRED);
        };

        let Ok(status) = CandidacyStatus::from_name_or_ordinal(&status_name) else {
            warn!(
                "{} UpdateCandidacyStatus unknown status {:?}",
                ctx.log_prefix(),
                status_name
            );
            return Reply::error(INVALID_STATUS_VALUE);
        };

        if self.repository.update_candidacy_status(&id, status) {
            Reply::message(STATUS_UPDATED)
        } else {
            warn!(
                "{} Status of candidacy {} was not updated to {}",
                ctx.log_prefix(),
                id,
                status
            );
            Reply::error(STATUS_UPDATE_FAILED)
        }
    }
}

/// First argument as a non-empty candidacy id, or the reply to send instead.
fn candidacy_id(
    ctx: &RequestContext,
    operation: &str,
    raw_args: &str,
) -> Result<String, Reply> {
    let args: Vec<Value> = parse_args(raw_args).map_err(|e| {
        warn!("{} {} rejected: {}", ctx.log_prefix(), operation, e);
        Reply::error(INVALID_JSON_FORMAT)
    })?;

    match id_arg(&args, 0) {
        Ok(Some(id)) if !id.is_empty() => Ok(id),
        Ok(_) => {
            warn!("{} {} called without an id", ctx.log_prefix(), operation);
            Err(Reply::error(INVALID_CANDIDACY_ID))
        }
        Err(e) => {
            warn!("{} {} rejected: {}", ctx.log_prefix(), operation, e);
            Err(Reply::error(INVALID_JSON_FORMAT))
        }
    }
}

/// First argument as a candidacy with company and title filled in, or the
/// reply to send instead.
fn candidacy_arg(
    ctx: &RequestContext,
    operation: &str,
    raw_args: &str,
) -> Result<Candidacy, Reply> {
    let candidacies: Vec<Option<Candidacy>> = parse_args(raw_args).map_err(|e| {
        warn!("{} {} rejected: {}", ctx.log_prefix(), operation, e);
        Reply::error(INVALID_JSON_FORMAT)
    })?;

    let Some(Some(candidacy)) = candidacies.into_iter().next() else {
        warn!("{} {} called without a candidacy", ctx.log_prefix(), operation);
        return Err(Reply::error(INVALID_CANDIDACY_DATA));
    };

    if let Err(e) = candidacy.validate() {
        warn!(
            "{} {} rejected candidacy {}: {}",
            ctx.log_prefix(),
            operation,
            candidacy.id,
            e
        );
        return Err(Reply::error(REQUIRED_FIELDS_MISSING));
    }

    Ok(candidacy)
}
