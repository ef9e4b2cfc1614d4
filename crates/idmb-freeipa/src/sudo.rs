//! Sudo policy administration — rules, commands, and command groups.

use crate::client::{options_to_map, FreeIpaClient};
use crate::error::IpaResult;
use crate::types::{
    FindOptions, HostMembers, SudoCmdAddOptions, SudoCommandMembers, SudoRuleAddOptions,
    UserMembers,
};
use serde_json::{json, Map, Value};

impl FreeIpaClient {
    // ── Sudo rules ──────────────────────────────────────────────────────

    pub async fn sudorule_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("sudorule_find", args, options_to_map(options))
            .await
    }

    pub async fn sudorule_show(&self, name: &str, all: bool) -> IpaResult<Value> {
        let mut options = Map::new();
        if all {
            options.insert("all".to_string(), json!(true));
        }
        self.call("sudorule_show", vec![json!(name)], options).await
    }

    pub async fn sudorule_add(&self, name: &str, options: &SudoRuleAddOptions) -> IpaResult<Value> {
        self.call("sudorule_add", vec![json!(name)], options_to_map(options))
            .await
    }

    pub async fn sudorule_del(&self, name: &str) -> IpaResult<bool> {
        self.call_discard("sudorule_del", vec![json!(name)], Map::new())
            .await
    }

    pub async fn sudorule_enable(&self, name: &str) -> IpaResult<bool> {
        self.call_discard("sudorule_enable", vec![json!(name)], Map::new())
            .await
    }

    pub async fn sudorule_disable(&self, name: &str) -> IpaResult<bool> {
        self.call_discard("sudorule_disable", vec![json!(name)], Map::new())
            .await
    }

    /// Attach allowed commands and/or command groups to a rule.
    pub async fn sudorule_add_allow_command(
        &self,
        name: &str,
        members: &SudoCommandMembers,
    ) -> IpaResult<Value> {
        self.call(
            "sudorule_add_allow_command",
            vec![json!(name)],
            options_to_map(members),
        )
        .await
    }

    pub async fn sudorule_add_host(&self, name: &str, members: &HostMembers) -> IpaResult<Value> {
        self.call(
            "sudorule_add_host",
            vec![json!(name)],
            options_to_map(members),
        )
        .await
    }

    pub async fn sudorule_add_user(&self, name: &str, members: &UserMembers) -> IpaResult<Value> {
        self.call(
            "sudorule_add_user",
            vec![json!(name)],
            options_to_map(members),
        )
        .await
    }

    // ── Sudo commands ───────────────────────────────────────────────────

    pub async fn sudocmd_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("sudocmd_find", args, options_to_map(options))
            .await
    }

    /// Register a command path so it can be referenced from rules.
    pub async fn sudocmd_add(
        &self,
        command: &str,
        options: &SudoCmdAddOptions,
    ) -> IpaResult<Value> {
        self.call("sudocmd_add", vec![json!(command)], options_to_map(options))
            .await
    }

    pub async fn sudocmd_del(&self, command: &str) -> IpaResult<bool> {
        self.call_discard("sudocmd_del", vec![json!(command)], Map::new())
            .await
    }

    // ── Sudo command groups ─────────────────────────────────────────────

    pub async fn sudocmdgroup_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("sudocmdgroup_find", args, options_to_map(options))
            .await
    }

    pub async fn sudocmdgroup_show(&self, cn: &str, all: bool) -> IpaResult<Value> {
        let mut options = Map::new();
        if all {
            options.insert("all".to_string(), json!(true));
        }
        self.call("sudocmdgroup_show", vec![json!(cn)], options)
            .await
    }

    pub async fn sudocmdgroup_add(
        &self,
        cn: &str,
        options: &SudoCmdAddOptions,
    ) -> IpaResult<Value> {
        self.call("sudocmdgroup_add", vec![json!(cn)], options_to_map(options))
            .await
    }

    pub async fn sudocmdgroup_del(&self, cn: &str) -> IpaResult<bool> {
        self.call_discard("sudocmdgroup_del", vec![json!(cn)], Map::new())
            .await
    }

    pub async fn sudocmdgroup_add_member(
        &self,
        cn: &str,
        members: &SudoCommandMembers,
    ) -> IpaResult<Value> {
        self.call(
            "sudocmdgroup_add_member",
            vec![json!(cn)],
            options_to_map(members),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_members_keep_only_supplied_relations() {
        let members = SudoCommandMembers {
            sudocmd: Some(vec!["/usr/bin/systemctl".into()]),
            sudocmdgroup: None,
        };
        let map = options_to_map(&members);
        assert_eq!(map["sudocmd"], json!(["/usr/bin/systemctl"]));
        assert!(!map.contains_key("sudocmdgroup"));
    }

    #[test]
    fn rule_options_support_categories() {
        let options = SudoRuleAddOptions {
            description: Some("ops full access".into()),
            cmdcategory: Some("all".into()),
            ..Default::default()
        };
        let map = options_to_map(&options);
        assert_eq!(map["cmdcategory"], "all");
        assert!(!map.contains_key("hostcategory"));
    }
}
