//! SSSD cache management — fixed command templates over the execution
//! engine.
//!
//! These are the remote operations the directory dispatcher triggers after
//! policy changes: clearing the identity cache so enrolled hosts pick up
//! changes immediately, invalidating single users/groups, and tuning the
//! cache timeouts in `sssd.conf`.

use crate::fleet::error::FleetResult;
use crate::fleet::service::CommandFleet;
use crate::fleet::types::{CommandOutcome, HostResults};
use crate::fleet::validate::{escape_domain, validate_identifier, validate_timeout};

const SSSD_CONF: &str = "/etc/sssd/sssd.conf";

/// Marker echoed back by the connectivity check.
const CONNECTIVITY_MARKER: &str = "idmb-fleet-ok";

/// Stop the daemon, wipe the on-disk cache, restart. Steps are joined with
/// `&&` so a failure short-circuits the remainder and lands in stderr.
fn clear_cache_command(force_expire: bool) -> String {
    let mut cmd = String::from(
        "systemctl stop sssd && \
         rm -f /var/lib/sss/db/* && \
         rm -f /var/lib/sss/mc/* && \
         systemctl start sssd",
    );
    if force_expire {
        cmd.push_str(" && sss_cache -E");
    }
    cmd
}

/// Rewrite both timeout lines: delete any existing occurrence, insert fresh
/// values right after the domain section header, restart the daemon. The
/// domain is escaped so its dots match literally.
fn timeout_update_command(domain: &str, entry_cache_timeout: i64, sudo_timeout: i64) -> String {
    let domain = escape_domain(domain);
    format!(
        "sed -i '/^entry_cache_timeout/d' {conf} && \
         sed -i '/^ldap_sudo_smart_refresh_interval/d' {conf} && \
         sed -i '/^\\[domain\\/{domain}\\]/a entry_cache_timeout = {entry}' {conf} && \
         sed -i '/^\\[domain\\/{domain}\\]/a ldap_sudo_smart_refresh_interval = {sudo}' {conf} && \
         systemctl restart sssd",
        conf = SSSD_CONF,
        domain = domain,
        entry = entry_cache_timeout,
        sudo = sudo_timeout,
    )
}

impl CommandFleet {
    /// Clear the SSSD cache on every host. `force_expire` additionally runs
    /// `sss_cache -E` after the restart.
    pub async fn clear_sss_cache(&self, hosts: &[String], force_expire: bool) -> HostResults {
        self.execute_on_hosts(hosts, &clear_cache_command(force_expire))
            .await
    }

    /// Invalidate one user's cache entries on every host. The identifier is
    /// the only caller-controlled fragment reaching the command text, so it
    /// is validated here, before any connection is opened.
    pub async fn invalidate_user_cache(
        &self,
        hosts: &[String],
        uid: &str,
    ) -> FleetResult<HostResults> {
        validate_identifier(uid)?;
        Ok(self
            .execute_on_hosts(hosts, &format!("sss_cache -u {}", uid))
            .await)
    }

    /// Invalidate one group's cache entries on every host.
    pub async fn invalidate_group_cache(
        &self,
        hosts: &[String],
        group: &str,
    ) -> FleetResult<HostResults> {
        validate_identifier(group)?;
        Ok(self
            .execute_on_hosts(hosts, &format!("sss_cache -g {}", group))
            .await)
    }

    /// Update `entry_cache_timeout` and the sudo refresh interval on one
    /// host. Both values are validated before any connection attempt.
    pub async fn update_sssd_timeout(
        &self,
        host: &str,
        entry_cache_timeout: i64,
        sudo_timeout: i64,
    ) -> FleetResult<CommandOutcome> {
        validate_timeout("entry_cache_timeout", entry_cache_timeout)?;
        validate_timeout("sudo_timeout", sudo_timeout)?;
        let command = timeout_update_command(&self.domain, entry_cache_timeout, sudo_timeout);
        self.execute_command(host, &command, None).await
    }

    /// Multi-host variant of [`update_sssd_timeout`](Self::update_sssd_timeout);
    /// validation still happens before any host is contacted.
    pub async fn update_sssd_timeout_on_hosts(
        &self,
        hosts: &[String],
        entry_cache_timeout: i64,
        sudo_timeout: i64,
    ) -> FleetResult<HostResults> {
        validate_timeout("entry_cache_timeout", entry_cache_timeout)?;
        validate_timeout("sudo_timeout", sudo_timeout)?;
        let command = timeout_update_command(&self.domain, entry_cache_timeout, sudo_timeout);
        Ok(self.execute_on_hosts(hosts, &command).await)
    }

    /// Daemon status on every host, read-only.
    pub async fn sssd_status(&self, hosts: &[String]) -> HostResults {
        self.execute_on_hosts(hosts, "systemctl status sssd --no-pager --lines=0")
            .await
    }

    /// On-disk cache sizes on every host, read-only.
    pub async fn cache_stats(&self, hosts: &[String]) -> HostResults {
        self.execute_on_hosts(hosts, "du -sh /var/lib/sss/db /var/lib/sss/mc")
            .await
    }

    /// Echo round-trip: true iff stdout matches the marker and the exit
    /// code is zero.
    pub async fn test_connectivity(&self, host: &str) -> FleetResult<bool> {
        let outcome = self
            .execute_command(host, &format!("echo {}", CONNECTIVITY_MARKER), None)
            .await?;
        Ok(outcome.exit_code == 0 && outcome.stdout == CONNECTIVITY_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_cache_command_joins_steps() {
        let cmd = clear_cache_command(false);
        assert!(cmd.starts_with("systemctl stop sssd && "));
        assert!(cmd.contains("rm -f /var/lib/sss/db/*"));
        assert!(cmd.contains("rm -f /var/lib/sss/mc/*"));
        assert!(cmd.ends_with("systemctl start sssd"));
        assert!(!cmd.contains("sss_cache -E"));
    }

    #[test]
    fn clear_cache_command_appends_force_expire() {
        let cmd = clear_cache_command(true);
        assert!(cmd.ends_with("systemctl start sssd && sss_cache -E"));
    }

    #[test]
    fn timeout_command_escapes_domain_and_rewrites_both_lines() {
        let cmd = timeout_update_command("idm.example.com", 5400, 3600);
        assert!(cmd.contains("/^entry_cache_timeout/d"));
        assert!(cmd.contains("/^ldap_sudo_smart_refresh_interval/d"));
        assert!(cmd.contains("idm\\.example\\.com"));
        assert!(!cmd.contains("[domain/idm.example.com]"));
        assert!(cmd.contains("entry_cache_timeout = 5400"));
        assert!(cmd.contains("ldap_sudo_smart_refresh_interval = 3600"));
        assert!(cmd.ends_with("systemctl restart sssd"));
    }
}
