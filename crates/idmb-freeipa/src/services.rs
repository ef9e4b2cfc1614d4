//! Kerberos service principal administration.

use crate::client::{options_to_map, FreeIpaClient};
use crate::error::IpaResult;
use crate::types::{FindOptions, ServiceAddOptions};
use serde_json::{json, Map, Value};

impl FreeIpaClient {
    pub async fn service_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("service_find", args, options_to_map(options))
            .await
    }

    pub async fn service_show(&self, principal: &str, all: bool) -> IpaResult<Value> {
        let mut options = Map::new();
        if all {
            options.insert("all".to_string(), json!(true));
        }
        self.call("service_show", vec![json!(principal)], options)
            .await
    }

    /// Add a service principal, e.g. `HTTP/web.example.com`.
    pub async fn service_add(
        &self,
        principal: &str,
        options: &ServiceAddOptions,
    ) -> IpaResult<Value> {
        self.call(
            "service_add",
            vec![json!(principal)],
            options_to_map(options),
        )
        .await
    }

    pub async fn service_del(&self, principal: &str) -> IpaResult<bool> {
        self.call_discard("service_del", vec![json!(principal)], Map::new())
            .await
    }
}
