//! Group administration and membership management.

use crate::client::{options_to_map, FreeIpaClient};
use crate::error::IpaResult;
use crate::types::{FindOptions, GroupAddOptions, UserMembers};
use serde_json::{json, Map, Value};

impl FreeIpaClient {
    pub async fn group_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("group_find", args, options_to_map(options)).await
    }

    pub async fn group_show(&self, cn: &str, all: bool) -> IpaResult<Value> {
        let mut options = Map::new();
        if all {
            options.insert("all".to_string(), json!(true));
        }
        self.call("group_show", vec![json!(cn)], options).await
    }

    pub async fn group_add(&self, cn: &str, options: &GroupAddOptions) -> IpaResult<Value> {
        self.call("group_add", vec![json!(cn)], options_to_map(options))
            .await
    }

    pub async fn group_del(&self, cn: &str) -> IpaResult<bool> {
        self.call_discard("group_del", vec![json!(cn)], Map::new())
            .await
    }

    /// Add users and/or nested groups to a group. A relation the caller did
    /// not supply is omitted from the payload entirely.
    pub async fn group_add_member(&self, cn: &str, members: &UserMembers) -> IpaResult<Value> {
        self.call("group_add_member", vec![json!(cn)], options_to_map(members))
            .await
    }

    pub async fn group_remove_member(&self, cn: &str, members: &UserMembers) -> IpaResult<Value> {
        self.call(
            "group_remove_member",
            vec![json!(cn)],
            options_to_map(members),
        )
        .await
    }
}
