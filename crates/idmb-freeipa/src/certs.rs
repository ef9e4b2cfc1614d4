//! Certificate queries and revocation against the integrated CA.

use crate::client::{options_to_map, FreeIpaClient};
use crate::error::{IpaError, IpaResult};
use crate::types::CertFindOptions;
use serde_json::{json, Map, Value};

impl FreeIpaClient {
    pub async fn cert_find(&self, options: &CertFindOptions) -> IpaResult<Value> {
        self.call("cert_find", Vec::new(), options_to_map(options))
            .await
    }

    /// Show one certificate by serial number.
    pub async fn cert_show(&self, serial_number: u64) -> IpaResult<Value> {
        self.call("cert_show", vec![json!(serial_number)], Map::new())
            .await
    }

    /// Revoke a certificate. `revocation_reason` follows RFC 5280 (0 =
    /// unspecified, 1 = key compromise, 4 = superseded, 6 = hold, ...).
    pub async fn cert_revoke(&self, serial_number: u64, revocation_reason: u8) -> IpaResult<bool> {
        // RFC 5280 defines reason codes 0..=10; 7 is unassigned.
        if revocation_reason > 10 || revocation_reason == 7 {
            return Err(IpaError::InvalidParameter(format!(
                "revocation_reason must be 0-10 excluding 7, got {}",
                revocation_reason
            )));
        }
        let mut options = Map::new();
        options.insert(
            "revocation_reason".to_string(),
            json!(revocation_reason),
        );
        self.call_discard("cert_revoke", vec![json!(serial_number)], options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn out_of_range_revocation_reason_is_rejected_locally() {
        let client = FreeIpaClient::new(
            &idmb_core::config::FreeIpaSettings {
                server: "ipa.example.test".to_string(),
                username: "admin".to_string(),
                verify_tls: true,
                timeout_secs: 5,
            },
            secrecy::SecretString::new("secret".to_string()),
        )
        .unwrap();
        let err = client.cert_revoke(1234, 7).await.unwrap_err();
        assert!(matches!(err, IpaError::InvalidParameter(_)));
        let err = client.cert_revoke(1234, 11).await.unwrap_err();
        assert!(matches!(err, IpaError::InvalidParameter(_)));
    }

    #[test]
    fn cert_find_serializes_serial_bounds() {
        let options = CertFindOptions {
            min_serial_number: Some(100),
            max_serial_number: Some(200),
            ..Default::default()
        };
        let map = options_to_map(&options);
        assert_eq!(map["min_serial_number"], 100);
        assert_eq!(map["max_serial_number"], 200);
        assert!(!map.contains_key("subject"));
    }
}
