//! Seam between the RPC handlers and whatever embeds the UI.

use crate::RpcResultType;

use std::sync::Arc;

/// Receives `(request_id, raw_args_json)` for one bound function.
pub type BoundFunction = Arc<dyn Fn(&str, &str) + Send + Sync>;

/// The host side of the bridge: delivers a finished envelope to the caller.
pub trait WebviewHost: Send + Sync {
    fn return_result(&self, request_id: &str, kind: RpcResultType, json: &str);
}

/// Registers named functions the UI can call.
pub trait FunctionBinder {
    fn bind(&mut self, name: &str, handler: BoundFunction);
}
