//! Allow-list validation for values spliced into remote command text.
//!
//! Commands are built by plain string interpolation, so every
//! caller-supplied fragment must pass one of these checks before it reaches
//! the command string — at each call site, not just at the API boundary.

use crate::fleet::error::{FleetError, FleetResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._@-]+$").expect("identifier regex");
    static ref HOSTNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9.-]+$").expect("hostname regex");
}

/// User/group identifiers: letters, digits, dot, hyphen, underscore,
/// at-sign. Everything else (whitespace, shell metacharacters) is rejected.
pub fn validate_identifier(value: &str) -> FleetResult<()> {
    if value.is_empty() || !IDENTIFIER_RE.is_match(value) {
        return Err(FleetError::Validation(format!(
            "invalid identifier '{}'",
            value
        )));
    }
    Ok(())
}

pub fn validate_hostname(host: &str) -> FleetResult<()> {
    if host.is_empty() || host.len() > 255 || !HOSTNAME_RE.is_match(host) {
        return Err(FleetError::Validation(format!("invalid hostname '{}'", host)));
    }
    Ok(())
}

/// Cache timeouts must be non-negative whole seconds.
pub fn validate_timeout(name: &str, value: i64) -> FleetResult<()> {
    if value < 0 {
        return Err(FleetError::Validation(format!(
            "{} must be a non-negative integer, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Escape a domain name for literal matching inside a remote `sed`
/// expression — dots become `\.` so they stop acting as wildcards.
pub fn escape_domain(domain: &str) -> String {
    domain.replace('.', "\\.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_accepts_principal_style_names() {
        assert!(validate_identifier("alice.smith@EXAMPLE.COM").is_ok());
        assert!(validate_identifier("svc_backup-01").is_ok());
    }

    #[test]
    fn identifier_rejects_shell_metacharacters() {
        assert!(validate_identifier("alice; rm -rf /").is_err());
        assert!(validate_identifier("alice$(whoami)").is_err());
        assert!(validate_identifier("a b").is_err());
        assert!(validate_identifier("").is_err());
    }

    #[test]
    fn hostname_rules() {
        assert!(validate_hostname("web01.example.com").is_ok());
        assert!(validate_hostname("127.0.0.1").is_ok());
        assert!(validate_hostname("host name").is_err());
        assert!(validate_hostname("host;reboot").is_err());
        assert!(validate_hostname(&"a".repeat(256)).is_err());
    }

    #[test]
    fn timeout_rejects_negative_values() {
        assert!(validate_timeout("entry_cache_timeout", 0).is_ok());
        assert!(validate_timeout("entry_cache_timeout", 5400).is_ok());
        assert!(validate_timeout("entry_cache_timeout", -1).is_err());
    }

    #[test]
    fn domain_dots_become_literal() {
        assert_eq!(escape_domain("idm.example.com"), "idm\\.example\\.com");
    }
}
