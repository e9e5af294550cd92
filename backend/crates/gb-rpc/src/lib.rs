pub mod error;
pub mod handlers;
pub mod lookup;
pub mod request_context;
pub mod request_logging;
pub mod router;
pub mod rpc_result;
pub mod transport;

pub use error::{Result, RpcError};
pub use handlers::candidacy_rpc::CandidacyRpc;
pub use handlers::profile_rpc::ProfileRpc;
pub use handlers::response_builder::Reply;
pub use lookup::Lookup;
pub use request_context::RequestContext;
pub use router::{FUNCTION_NAME_PREFIX, FUNCTION_NAMES, RpcFunction, RpcRouter};
pub use rpc_result::{RpcResult, RpcResultType};
pub use transport::{BoundFunction, FunctionBinder, WebviewHost};

#[cfg(test)]
mod tests;
