//! Batch isolation tests against unreachable loopback endpoints.
//!
//! No SSH server is required: connecting to a closed loopback port fails
//! fast, which is exactly the per-host failure mode the batch entry point
//! must absorb.

use idmb_core::config::FleetSettings;
use idmb_fleet::{CommandFleet, FleetError, CHANNEL_FAILURE_EXIT_CODE};
use secrecy::SecretString;

/// A loopback port with no listener; connections are refused immediately.
async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn fleet_on(port: u16) -> CommandFleet {
    CommandFleet::new(
        &FleetSettings {
            username: "root".to_string(),
            port,
            connect_timeout_secs: 2,
            domain: "example.test".to_string(),
        },
        SecretString::new("pw".to_string()),
    )
}

#[tokio::test]
async fn single_host_connection_failure_rejects_with_channel_error() {
    let fleet = fleet_on(closed_port().await);
    let err = fleet
        .execute_command("127.0.0.1", "true", None)
        .await
        .unwrap_err();
    match err {
        FleetError::Channel { host, message } => {
            assert_eq!(host, "127.0.0.1");
            assert!(!message.is_empty());
        }
        other => panic!("expected Channel error, got {:?}", other),
    }
}

#[tokio::test]
async fn batch_resolves_with_one_entry_per_host() {
    let fleet = fleet_on(closed_port().await);
    let hosts = vec!["127.0.0.1".to_string(), "localhost".to_string()];

    let results = fleet.execute_on_hosts(&hosts, "true").await;

    assert_eq!(results.len(), 2);
    for host in &hosts {
        let outcome = results.get(host).expect("entry per requested host");
        assert_eq!(outcome.exit_code, CHANNEL_FAILURE_EXIT_CODE);
        assert!(outcome.stdout.is_empty());
        assert!(!outcome.stderr.is_empty());
    }
}

#[tokio::test]
async fn clear_cache_batch_absorbs_unreachable_hosts() {
    let fleet = fleet_on(closed_port().await);
    let hosts = vec!["127.0.0.1".to_string()];

    let results = fleet.clear_sss_cache(&hosts, true).await;

    assert_eq!(results.len(), 1);
    assert_eq!(
        results["127.0.0.1"].exit_code,
        CHANNEL_FAILURE_EXIT_CODE
    );
}

#[tokio::test]
async fn bad_identifier_fails_before_any_connection() {
    let fleet = fleet_on(22);
    let err = fleet
        .invalidate_user_cache(&["ipa01.example.test".to_string()], "alice; rm -rf /")
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::Validation(_)));
}

#[tokio::test]
async fn negative_timeout_fails_before_any_connection() {
    let fleet = fleet_on(22);

    let err = fleet
        .update_sssd_timeout("ipa01.example.test", -1, 3600)
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::Validation(_)));

    let err = fleet
        .update_sssd_timeout_on_hosts(&["ipa01.example.test".to_string()], 5400, -7)
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::Validation(_)));
}
