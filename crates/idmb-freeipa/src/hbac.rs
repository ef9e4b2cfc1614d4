//! Host-based access control — rules, rule membership, HBAC services.

use crate::client::{options_to_map, FreeIpaClient};
use crate::error::IpaResult;
use crate::types::{FindOptions, HbacRuleAddOptions, HostMembers, ServiceMembers, UserMembers};
use serde_json::{json, Map, Value};

impl FreeIpaClient {
    pub async fn hbacrule_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("hbacrule_find", args, options_to_map(options))
            .await
    }

    pub async fn hbacrule_show(&self, name: &str, all: bool) -> IpaResult<Value> {
        let mut options = Map::new();
        if all {
            options.insert("all".to_string(), json!(true));
        }
        self.call("hbacrule_show", vec![json!(name)], options).await
    }

    pub async fn hbacrule_add(&self, name: &str, options: &HbacRuleAddOptions) -> IpaResult<Value> {
        self.call("hbacrule_add", vec![json!(name)], options_to_map(options))
            .await
    }

    pub async fn hbacrule_del(&self, name: &str) -> IpaResult<bool> {
        self.call_discard("hbacrule_del", vec![json!(name)], Map::new())
            .await
    }

    pub async fn hbacrule_enable(&self, name: &str) -> IpaResult<bool> {
        self.call_discard("hbacrule_enable", vec![json!(name)], Map::new())
            .await
    }

    pub async fn hbacrule_disable(&self, name: &str) -> IpaResult<bool> {
        self.call_discard("hbacrule_disable", vec![json!(name)], Map::new())
            .await
    }

    pub async fn hbacrule_add_user(&self, name: &str, members: &UserMembers) -> IpaResult<Value> {
        self.call(
            "hbacrule_add_user",
            vec![json!(name)],
            options_to_map(members),
        )
        .await
    }

    pub async fn hbacrule_add_host(&self, name: &str, members: &HostMembers) -> IpaResult<Value> {
        self.call(
            "hbacrule_add_host",
            vec![json!(name)],
            options_to_map(members),
        )
        .await
    }

    pub async fn hbacrule_add_service(
        &self,
        name: &str,
        members: &ServiceMembers,
    ) -> IpaResult<Value> {
        self.call(
            "hbacrule_add_service",
            vec![json!(name)],
            options_to_map(members),
        )
        .await
    }

    /// List the PAM services HBAC rules can reference (sshd, sudo, ...).
    pub async fn hbacsvc_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("hbacsvc_find", args, options_to_map(options))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_members_serialize_hbacsvc_key() {
        let members = ServiceMembers {
            hbacsvc: Some(vec!["sshd".into(), "sudo".into()]),
        };
        let map = options_to_map(&members);
        assert_eq!(map["hbacsvc"], json!(["sshd", "sudo"]));
    }
}
