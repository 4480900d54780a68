//! `forum` route, served from the v2 scheme.

use super::Caller;
use crate::endpoints::forum as ep;
use crate::error::ApiResult;
use crate::query::{QueryParams, Sort};
use crate::transport::Transport;
use crate::types::forum::*;

pub struct ForumApi<T> {
    caller: Caller<T>,
}

impl<T: Transport> ForumApi<T> {
    pub(crate) fn new(caller: Caller<T>) -> Self {
        Self { caller }
    }

    pub async fn categories(&self) -> ApiResult<Vec<ForumCategory>> {
        self.caller.get(&ep::CATEGORIES).await
    }

    /// One page of a thread's posts.
    pub async fn posts(&self, id: i64, offset: u32, cat: PostContentType) -> ApiResult<ForumPosts> {
        let params = QueryParams {
            offset: Some(offset),
            cat: Some(cat.to_string()),
            ..ep::POSTS.params().with_id(Some(id))
        };
        self.caller.call(&ep::POSTS, params).await
    }

    pub async fn thread(&self, id: i64) -> ApiResult<ForumThreadDetail> {
        let params = ep::THREAD.params().with_id(Some(id));
        self.caller.call(&ep::THREAD, params).await
    }

    /// Threads, across all forums or only the ones in `ids`.
    pub async fn threads(
        &self,
        ids: &[i64],
        limit: Option<u32>,
        from: Option<i64>,
        to: Option<i64>,
        sort: Option<Sort>,
    ) -> ApiResult<Vec<ForumThread>> {
        let params = QueryParams {
            ids: ids.iter().map(i64::to_string).collect(),
            limit,
            sort,
            ..ep::THREADS.params().with_range(from, to)
        };
        self.caller.call(&ep::THREADS, params).await
    }
}
