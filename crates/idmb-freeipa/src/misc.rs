//! Connectivity and introspection calls.

use crate::client::FreeIpaClient;
use crate::error::IpaResult;
use serde_json::{json, Map, Value};

impl FreeIpaClient {
    /// Round-trip check against the server. `ping` carries no payload, so
    /// success is reported as a plain boolean.
    pub async fn ping(&self) -> IpaResult<bool> {
        self.call("ping", Vec::new(), Map::new()).await?;
        Ok(true)
    }

    /// Server environment variables; pass a name to fetch a single one.
    pub async fn env(&self, variable: Option<&str>) -> IpaResult<Value> {
        let args = variable.map(|v| vec![json!(v)]).unwrap_or_default();
        self.call("env", args, Map::new()).await
    }

    /// Identity of the authenticated principal.
    pub async fn whoami(&self) -> IpaResult<Value> {
        self.call("whoami", Vec::new(), Map::new()).await
    }
}
