//! Host entry administration.

use crate::client::{options_to_map, FreeIpaClient};
use crate::error::IpaResult;
use crate::types::{FindOptions, HostAddOptions};
use serde_json::{json, Map, Value};

impl FreeIpaClient {
    pub async fn host_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("host_find", args, options_to_map(options)).await
    }

    pub async fn host_show(&self, fqdn: &str, all: bool) -> IpaResult<Value> {
        let mut options = Map::new();
        if all {
            options.insert("all".to_string(), json!(true));
        }
        self.call("host_show", vec![json!(fqdn)], options).await
    }

    pub async fn host_add(&self, fqdn: &str, options: &HostAddOptions) -> IpaResult<Value> {
        self.call("host_add", vec![json!(fqdn)], options_to_map(options))
            .await
    }

    pub async fn host_del(&self, fqdn: &str) -> IpaResult<bool> {
        self.call_discard("host_del", vec![json!(fqdn)], Map::new())
            .await
    }
}
