//! `property` route.

use serde_json::{Map, Value};

use super::Caller;
use crate::endpoints::property as ep;
use crate::error::ApiResult;
use crate::transport::Transport;
use crate::types::property::Property;

pub struct PropertyApi<T> {
    caller: Caller<T>,
}

impl<T: Transport> PropertyApi<T> {
    pub(crate) fn new(caller: Caller<T>) -> Self {
        Self { caller }
    }

    pub async fn multi(&self, selections: &[&str], id: Option<&str>) -> ApiResult<Map<String, Value>> {
        self.caller.multi(&ep::MULTI, selections, id).await
    }

    pub async fn property(&self, id: Option<&str>) -> ApiResult<Property> {
        let params = ep::PROPERTY.params().with_id(id);
        self.caller.call(&ep::PROPERTY, params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TornApiError;
    use crate::transport::stub::{api, StubTransport};

    #[tokio::test]
    async fn property_by_id() {
        let api = api(StubTransport::fixture("property/property"));
        let property = api.property().property(Some("123456")).await.unwrap();
        assert_eq!(property.property, "Private Island");
        assert_eq!(property.upgrades.len(), 2);
        assert!(property.rented.is_none());
        assert_eq!(
            api.transport().last_url(),
            "https://api.torn.com/property/123456?selections=property&key=key"
        );
    }

    #[tokio::test]
    async fn every_method_returns_domain_errors() {
        let api = api(StubTransport::json(r#"{"error":{"code":2,"error":"Incorrect key"}}"#));
        let expected = TornApiError::new(2, "Incorrect key");
        assert_eq!(api.property().multi(&["property"], None).await.unwrap_err(), expected);
        assert_eq!(api.property().property(None).await.unwrap_err(), expected);
    }
}
