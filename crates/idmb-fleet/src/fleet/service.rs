//! SSH execution engine — one fresh connection per command, unbounded
//! multi-host fan-out with per-host failure isolation.

use crate::fleet::error::{FleetError, FleetResult};
use crate::fleet::types::{CommandOutcome, HostResults};
use crate::fleet::validate::validate_hostname;
use futures::future::join_all;
use idmb_core::config::FleetSettings;
use log::{debug, warn};
use secrecy::{ExposeSecret, SecretString};
use ssh2::Session;
use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Executes shell commands on remote hosts over password-authenticated SSH.
///
/// Holds credentials only: every call opens a fresh connection and drops it
/// when the command finishes. Nothing is pooled or reused across calls, and
/// the command string is passed to the remote side exactly as supplied — no
/// quoting or escaping is applied here (see [`crate::fleet::validate`]).
#[derive(Clone)]
pub struct CommandFleet {
    username: String,
    password: SecretString,
    port: u16,
    connect_timeout: Duration,
    pub(crate) domain: String,
}

impl CommandFleet {
    /// Build a fleet from settings plus the environment-sourced password.
    pub fn new(settings: &FleetSettings, password: SecretString) -> Self {
        CommandFleet {
            username: settings.username.clone(),
            password,
            port: settings.port,
            connect_timeout: Duration::from_secs(settings.connect_timeout_secs),
            domain: settings.domain.clone(),
        }
    }

    /// Run `command` on a single host, returning the captured streams and
    /// the real remote exit status. Connection-level failures reject with
    /// [`FleetError::Channel`] — never a fabricated outcome.
    pub async fn execute_command(
        &self,
        host: &str,
        command: &str,
        port: Option<u16>,
    ) -> FleetResult<CommandOutcome> {
        validate_hostname(host)?;
        let port = port.unwrap_or(self.port);
        debug!("ssh exec on {}:{}: {}", host, port, command);

        let fleet = self.clone();
        let host = host.to_string();
        let command = command.to_string();
        tokio::task::spawn_blocking(move || fleet.run_blocking(&host, port, &command))
            .await
            .map_err(|e| FleetError::Internal(format!("ssh worker task failed: {}", e)))?
    }

    /// Run `command` on every host concurrently and wait for all of them.
    ///
    /// Unbounded fan-out, no cancellation. The returned map always holds
    /// exactly one entry per requested host: a host whose call rejected is
    /// folded into a `-1` outcome carrying the failure message, so the
    /// batch itself never fails.
    pub async fn execute_on_hosts(&self, hosts: &[String], command: &str) -> HostResults {
        let tasks = hosts.iter().map(|host| {
            let host = host.clone();
            async move {
                let outcome = match self.execute_command(&host, command, None).await {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        warn!("command failed on {}: {}", host, err);
                        CommandOutcome::channel_failure(err.message())
                    }
                };
                (host, outcome)
            }
        });
        join_all(tasks).await.into_iter().collect()
    }

    fn run_blocking(&self, host: &str, port: u16, command: &str) -> FleetResult<CommandOutcome> {
        let channel_err = |message: String| FleetError::Channel {
            host: host.to_string(),
            message,
        };

        let sockaddr = (host, port)
            .to_socket_addrs()
            .map_err(|e| channel_err(format!("address lookup failed: {}", e)))?
            .next()
            .ok_or_else(|| channel_err(format!("no address found for {}", host)))?;

        let stream = TcpStream::connect_timeout(&sockaddr, self.connect_timeout)
            .map_err(|e| channel_err(format!("connect failed: {}", e)))?;
        stream
            .set_read_timeout(Some(self.connect_timeout * 2))
            .ok();
        stream.set_write_timeout(Some(self.connect_timeout)).ok();

        let mut session =
            Session::new().map_err(|e| channel_err(format!("failed to create session: {}", e)))?;
        session.set_tcp_stream(stream);
        session
            .handshake()
            .map_err(|e| channel_err(format!("ssh handshake failed: {}", e)))?;
        session
            .userauth_password(&self.username, self.password.expose_secret())
            .map_err(|e| channel_err(format!("authentication failed: {}", e)))?;

        let mut channel = session
            .channel_session()
            .map_err(|e| channel_err(format!("failed to open channel: {}", e)))?;
        channel
            .exec(command)
            .map_err(|e| channel_err(format!("failed to start command: {}", e)))?;

        let mut stdout = String::new();
        channel
            .read_to_string(&mut stdout)
            .map_err(|e| channel_err(format!("failed to read stdout: {}", e)))?;
        let mut stderr = String::new();
        channel
            .stderr()
            .read_to_string(&mut stderr)
            .map_err(|e| channel_err(format!("failed to read stderr: {}", e)))?;

        channel
            .wait_close()
            .map_err(|e| channel_err(format!("failed to close channel: {}", e)))?;
        let exit_code = channel
            .exit_status()
            .map_err(|e| channel_err(format!("failed to read exit status: {}", e)))?;

        Ok(CommandOutcome {
            stdout: stdout.trim().to_string(),
            stderr: stderr.trim().to_string(),
            exit_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fleet() -> CommandFleet {
        CommandFleet::new(
            &FleetSettings {
                username: "root".to_string(),
                port: 22,
                connect_timeout_secs: 2,
                domain: "example.test".to_string(),
            },
            SecretString::new("pw".to_string()),
        )
    }

    #[tokio::test]
    async fn malformed_hostname_is_rejected_before_any_io() {
        let fleet = test_fleet();
        let err = fleet
            .execute_command("host; reboot", "true", None)
            .await
            .unwrap_err();
        assert!(matches!(err, FleetError::Validation(_)));
    }
}
