//! Wire envelope types and per-operation option records.
//!
//! FreeIPA's JSON-RPC convention is fixed-arity: every request carries a
//! two-slot parameter array `[positional_args, named_options]`. The option
//! records below serialize with `skip_serializing_if` so an omitted field is
//! absent from the wire payload — never sent as `null` or an empty list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ===============================
// Response envelope
// ===============================

/// Top-level JSON-RPC response body.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<RpcResult>,
    #[serde(default)]
    pub error: Option<RpcFault>,
    #[serde(default)]
    pub id: Option<u64>,
}

/// Success payload. FreeIPA nests the method's return value one level
/// deeper (`result.result`); some methods (`ping`) return only a summary.
#[derive(Debug, Deserialize)]
pub struct RpcResult {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub truncated: Option<bool>,
}

/// In-band structured fault, returned in an otherwise well-formed body.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcFault {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub name: String,
}

// ===============================
// User operations
// ===============================

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFindOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    /// Restrict the search to members of this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizelimit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserAddOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub givenname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userpassword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loginshell: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homedirectory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephonenumber: Option<String>,
}

/// `user_mod` accepts the same attribute set as `user_add`.
pub type UserModOptions = UserAddOptions;

// ===============================
// Membership option records
// ===============================
// One record per relation family. A `None` field is omitted from the wire
// payload entirely; member-add methods never send an empty list for a
// relation the caller did not supply.

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserMembers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HostMembers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostgroup: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SudoCommandMembers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sudocmd: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sudocmdgroup: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceMembers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hbacsvc: Option<Vec<String>>,
}

// ===============================
// Group / rule / host options
// ===============================

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupAddOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gidnumber: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonposix: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SudoRuleAddOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `all` to match every command without listing members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmdcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usercategory: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SudoCmdAddOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HbacRuleAddOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servicecategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usercategory: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HostAddOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Skip the DNS A/AAAA lookup for the host being added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceAddOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

// ===============================
// Certificate / DNS options
// ===============================

#[derive(Debug, Clone, Default, Serialize)]
pub struct CertFindOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_serial_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_serial_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizelimit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DnsZoneAddOptions {
    /// Authoritative name server (SOA MNAME).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idnssoamname: Option<String>,
    /// Zone administrator mail (SOA RNAME).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idnssoarname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_overlap_check: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DnsRecordOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arecord: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aaaarecord: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnamerecord: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptrrecord: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mxrecord: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txtrecord: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srvrecord: Option<Vec<String>>,
}

/// Generic search limits shared by the simpler `*_find` operations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FindOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizelimit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timelimit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_option_fields_are_absent_from_wire() {
        let options = UserAddOptions {
            givenname: Some("Alice".into()),
            sn: Some("Smith".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["givenname"], "Alice");
        assert!(!map.contains_key("mail"));
        assert!(!map.contains_key("userpassword"));
    }

    #[test]
    fn member_record_omits_unsupplied_relation() {
        let members = UserMembers {
            user: Some(vec!["alice".into()]),
            group: None,
        };
        let value = serde_json::to_value(&members).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map["user"], serde_json::json!(["alice"]));
        assert!(!map.contains_key("group"));
    }

    #[test]
    fn fault_deserializes_from_error_body() {
        let body = r#"{"result": null, "error": {"code": 4002, "message": "no such entry", "name": "NotFound"}, "id": 3}"#;
        let parsed: RpcResponse = serde_json::from_str(body).unwrap();
        let fault = parsed.error.unwrap();
        assert_eq!(fault.code, 4002);
        assert_eq!(fault.name, "NotFound");
        assert!(parsed.result.is_none());
    }

    #[test]
    fn nested_result_deserializes() {
        let body = r#"{"result": {"result": {"uid": ["alice"]}, "count": 1, "truncated": false}, "error": null, "id": 1}"#;
        let parsed: RpcResponse = serde_json::from_str(body).unwrap();
        let result = parsed.result.unwrap();
        assert_eq!(result.count, Some(1));
        assert_eq!(result.result["uid"][0], "alice");
    }
}
