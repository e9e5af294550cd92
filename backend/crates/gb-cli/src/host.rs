use gb_rpc::{RpcResultType, WebviewHost};

use std::sync::{Mutex, PoisonError};

use log::debug;

/// A reply the handlers delivered through `return_result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReply {
    pub request_id: String,
    pub kind: RpcResultType,
    pub json: String,
}

/// Collects replies so the caller can print them after the call returns.
#[derive(Debug, Default)]
pub struct CliHost {
    replies: Mutex<Vec<HostReply>>,
}

impl CliHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the reply for `request_id`, if one arrived.
    pub fn take_reply(&self, request_id: &str) -> Option<HostReply> {
        let mut replies = self.replies.lock().unwrap_or_else(PoisonError::into_inner);
        let index = replies.iter().position(|r| r.request_id == request_id)?;
        Some(replies.remove(index))
    }
}

impl WebviewHost for CliHost {
    fn return_result(&self, request_id: &str, kind: RpcResultType, json: &str) {
        debug!("Host received {} reply for {}", kind, request_id);
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(HostReply {
                request_id: request_id.to_string(),
                kind,
                json: json.to_string(),
            });
    }
}
