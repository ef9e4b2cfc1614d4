//! Result types for remote command execution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exit code recorded when a command never ran because the connection,
/// authentication, or channel failed. A remote shell reporting a genuine
/// `-1` would collide with this sentinel; callers needing to distinguish
/// the two should check `stderr` alongside the code.
pub const CHANNEL_FAILURE_EXIT_CODE: i32 = -1;

/// Captured output of one command on one host, streams trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutcome {
    /// Synthesized record for a host whose connection or channel failed
    /// before the command could run.
    pub fn channel_failure(message: impl Into<String>) -> Self {
        CommandOutcome {
            stdout: String::new(),
            stderr: message.into(),
            exit_code: CHANNEL_FAILURE_EXIT_CODE,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// One entry per requested host, present even when the host was
/// unreachable.
pub type HostResults = HashMap<String, CommandOutcome>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_failure_uses_sentinel_exit_code() {
        let outcome = CommandOutcome::channel_failure("connection refused");
        assert_eq!(outcome.exit_code, -1);
        assert!(outcome.stdout.is_empty());
        assert_eq!(outcome.stderr, "connection refused");
        assert!(!outcome.succeeded());
    }

    #[test]
    fn outcome_serializes_with_exit_code() {
        let outcome = CommandOutcome {
            stdout: "ok".into(),
            stderr: String::new(),
            exit_code: 0,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"exit_code\":0"));
    }
}
