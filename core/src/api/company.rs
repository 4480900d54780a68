//! `company` route.

use serde_json::{Map, Value};

use super::{not_implemented, Caller};
use crate::endpoints::company as ep;
use crate::error::ApiResult;
use crate::transport::Transport;
use crate::types::company::*;

pub struct CompanyApi<T> {
    caller: Caller<T>,
}

impl<T: Transport> CompanyApi<T> {
    pub(crate) fn new(caller: Caller<T>) -> Self {
        Self { caller }
    }

    pub async fn multi(&self, selections: &[&str], id: Option<&str>) -> ApiResult<Map<String, Value>> {
        self.caller.multi(&ep::MULTI, selections, id).await
    }

    pub fn applications(&self) -> ! {
        not_implemented("company", "applications")
    }

    /// Companies of the given company type.
    pub async fn companies(&self, id: &str) -> ApiResult<Vec<Company>> {
        let params = ep::COMPANIES.params().with_id(Some(id));
        self.caller.call(&ep::COMPANIES, params).await
    }

    pub fn detailed(&self) -> ! {
        not_implemented("company", "detailed")
    }

    pub async fn employees(&self, id: Option<&str>) -> ApiResult<Vec<CompanyEmployee>> {
        let params = ep::EMPLOYEES.params().with_id(id);
        self.caller.call(&ep::EMPLOYEES, params).await
    }

    pub fn news(&self) -> ! {
        not_implemented("company", "news")
    }

    pub fn newsfull(&self) -> ! {
        not_implemented("company", "newsfull")
    }

    pub async fn profile(&self, id: Option<&str>) -> ApiResult<CompanyProfile> {
        let params = ep::PROFILE.params().with_id(id);
        self.caller.call(&ep::PROFILE, params).await
    }

    pub fn stock(&self) -> ! {
        not_implemented("company", "stock")
    }
}
