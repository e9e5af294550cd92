use crate::handlers::response_builder::Reply;
use crate::{RequestContext, WebviewHost, log_handler_entry, log_handler_exit};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::error;

/// Run a handler body with panic recovery. A panic becomes an error reply
/// carrying `fallback_message`.
pub fn with_error_boundary<F>(
    ctx: &RequestContext,
    handler_name: &str,
    fallback_message: &str,
    handler: F,
) -> Reply
where
    F: FnOnce() -> Reply,
{
    match panic::catch_unwind(AssertUnwindSafe(handler)) {
        Ok(reply) => reply,
        Err(payload) => {
            error!(
                "{} Handler {} panicked: {}",
                ctx.log_prefix(),
                handler_name,
                panic_message(payload.as_ref())
            );
            Reply::error(fallback_message)
        }
    }
}

/// Full request lifecycle: context, logging, boundary, and exactly one
/// `return_result` on the host.
pub(crate) fn respond<F>(
    host: &dyn WebviewHost,
    request_id: &str,
    handler_name: &str,
    fallback_message: &str,
    handler: F,
) where
    F: FnOnce(&RequestContext) -> Reply,
{
    let ctx = RequestContext::new(request_id);
    log_handler_entry!(ctx, handler_name);

    let reply = with_error_boundary(&ctx, handler_name, fallback_message, || handler(&ctx));

    log_handler_exit!(ctx, handler_name, reply);
    host.return_result(request_id, reply.kind, &reply.json);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "Unknown panic".to_string()
    }
}
