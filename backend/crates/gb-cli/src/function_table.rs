use crate::{CliError, Result};

use gb_rpc::{BoundFunction, FUNCTION_NAME_PREFIX, FunctionBinder};

use std::collections::BTreeMap;

use log::warn;

/// Name → callback table, the stand-in for functions bound on a webview.
#[derive(Default)]
pub struct FunctionTable {
    functions: BTreeMap<String, BoundFunction>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Call a bound function. `name` may omit the `GRIND_BREAKER_` prefix.
    pub fn invoke(&self, name: &str, request_id: &str, raw_args: &str) -> Result<()> {
        let bound = if name.starts_with(FUNCTION_NAME_PREFIX) {
            name.to_string()
        } else {
            format!("{FUNCTION_NAME_PREFIX}{name}")
        };

        let function = self
            .functions
            .get(&bound)
            .ok_or_else(|| {
                warn!(
                    "{name} is not bound; available: {}",
                    self.names().collect::<Vec<_>>().join(", ")
                );
                CliError::UnknownFunction {
                    name: name.to_string(),
                }
            })?;

        function(request_id, raw_args);
        Ok(())
    }
}

impl FunctionBinder for FunctionTable {
    fn bind(&mut self, name: &str, handler: BoundFunction) {
        self.functions.insert(name.to_string(), handler);
    }
}
