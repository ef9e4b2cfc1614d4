//! User account administration — find, show, add, modify, delete,
//! enable, disable.

use crate::client::{options_to_map, FreeIpaClient};
use crate::error::IpaResult;
use crate::types::{UserAddOptions, UserFindOptions, UserModOptions};
use serde_json::{json, Map, Value};

impl FreeIpaClient {
    /// Search user accounts. `criteria` matches login, name, and mail.
    pub async fn user_find(
        &self,
        criteria: Option<&str>,
        options: &UserFindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("user_find", args, options_to_map(options)).await
    }

    /// Show one user. `all` requests the full attribute set.
    pub async fn user_show(&self, uid: &str, all: bool) -> IpaResult<Value> {
        let mut options = Map::new();
        if all {
            options.insert("all".to_string(), json!(true));
        }
        self.call("user_show", vec![json!(uid)], options).await
    }

    pub async fn user_add(&self, uid: &str, options: &UserAddOptions) -> IpaResult<Value> {
        self.call("user_add", vec![json!(uid)], options_to_map(options))
            .await
    }

    pub async fn user_mod(&self, uid: &str, options: &UserModOptions) -> IpaResult<Value> {
        self.call("user_mod", vec![json!(uid)], options_to_map(options))
            .await
    }

    pub async fn user_del(&self, uid: &str) -> IpaResult<bool> {
        self.call_discard("user_del", vec![json!(uid)], Map::new())
            .await
    }

    pub async fn user_enable(&self, uid: &str) -> IpaResult<bool> {
        self.call_discard("user_enable", vec![json!(uid)], Map::new())
            .await
    }

    pub async fn user_disable(&self, uid: &str) -> IpaResult<bool> {
        self.call_discard("user_disable", vec![json!(uid)], Map::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_options_serialize_only_set_fields() {
        let options = UserFindOptions {
            in_group: Some("engineering".into()),
            sizelimit: Some(10),
            ..Default::default()
        };
        let map = options_to_map(&options);
        assert_eq!(map.len(), 2);
        assert_eq!(map["in_group"], "engineering");
        assert_eq!(map["sizelimit"], 10);
    }

    #[test]
    fn add_options_carry_identity_attributes() {
        let options = UserAddOptions {
            givenname: Some("Alice".into()),
            sn: Some("Smith".into()),
            mail: Some("alice@example.com".into()),
            ..Default::default()
        };
        let map = options_to_map(&options);
        assert_eq!(map["givenname"], "Alice");
        assert_eq!(map["sn"], "Smith");
        assert!(!map.contains_key("loginshell"));
    }
}
