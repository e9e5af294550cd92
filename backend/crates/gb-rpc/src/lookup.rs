use crate::RpcResult;

/// Outcome of reading a single record: present or not. Neither case is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_result(self) -> RpcResult<T> {
        match self {
            Lookup::Found(value) => RpcResult::success(value),
            Lookup::NotFound => RpcResult::not_found(),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}
