//! `key` route: what the current key may do.

use super::Caller;
use crate::endpoints::key as ep;
use crate::error::ApiResult;
use crate::transport::Transport;
use crate::types::key::ApiKeyInfo;

pub struct KeyApi<T> {
    caller: Caller<T>,
}

impl<T: Transport> KeyApi<T> {
    pub(crate) fn new(caller: Caller<T>) -> Self {
        Self { caller }
    }

    pub async fn info(&self) -> ApiResult<ApiKeyInfo> {
        self.caller.get(&ep::INFO).await
    }
}
