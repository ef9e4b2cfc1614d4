//! DNS zone and record administration.

use crate::client::{options_to_map, FreeIpaClient};
use crate::error::IpaResult;
use crate::types::{DnsRecordOptions, DnsZoneAddOptions, FindOptions};
use serde_json::{json, Map, Value};

impl FreeIpaClient {
    pub async fn dnszone_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> IpaResult<Value> {
        let args = criteria.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call("dnszone_find", args, options_to_map(options))
            .await
    }

    pub async fn dnszone_show(&self, zone: &str, all: bool) -> IpaResult<Value> {
        let mut options = Map::new();
        if all {
            options.insert("all".to_string(), json!(true));
        }
        self.call("dnszone_show", vec![json!(zone)], options).await
    }

    pub async fn dnszone_add(&self, zone: &str, options: &DnsZoneAddOptions) -> IpaResult<Value> {
        self.call("dnszone_add", vec![json!(zone)], options_to_map(options))
            .await
    }

    pub async fn dnszone_del(&self, zone: &str) -> IpaResult<bool> {
        self.call_discard("dnszone_del", vec![json!(zone)], Map::new())
            .await
    }

    /// List records in a zone.
    pub async fn dnsrecord_find(&self, zone: &str, criteria: Option<&str>) -> IpaResult<Value> {
        let mut args = vec![json!(zone)];
        if let Some(c) = criteria {
            args.push(json!(c));
        }
        self.call("dnsrecord_find", args, Map::new()).await
    }

    /// Add record data to `name` in `zone`. Record types the caller leaves
    /// unset are omitted, so existing data of other types is untouched.
    pub async fn dnsrecord_add(
        &self,
        zone: &str,
        name: &str,
        options: &DnsRecordOptions,
    ) -> IpaResult<Value> {
        self.call(
            "dnsrecord_add",
            vec![json!(zone), json!(name)],
            options_to_map(options),
        )
        .await
    }

    pub async fn dnsrecord_del(
        &self,
        zone: &str,
        name: &str,
        options: &DnsRecordOptions,
    ) -> IpaResult<bool> {
        self.call_discard(
            "dnsrecord_del",
            vec![json!(zone), json!(name)],
            options_to_map(options),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_options_keep_only_supplied_types() {
        let options = DnsRecordOptions {
            arecord: Some(vec!["192.0.2.10".into()]),
            ..Default::default()
        };
        let map = options_to_map(&options);
        assert_eq!(map.len(), 1);
        assert_eq!(map["arecord"], json!(["192.0.2.10"]));
    }
}
