//! Settings file parsing and credential loading.
//!
//! The YAML settings file carries connection parameters only. Password
//! fields are rejected at parse time (`deny_unknown_fields`), which keeps
//! the "credentials come from the environment, never from a shared file"
//! contract enforceable rather than advisory.

use log::debug;
use secrecy::SecretString;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Environment variable holding the FreeIPA principal's password.
pub const IPA_PASSWORD_ENV: &str = "IDMB_IPA_PASSWORD";
/// Environment variable holding the SSH password for fleet operations.
pub const SSH_PASSWORD_ENV: &str = "IDMB_SSH_PASSWORD";

fn default_true() -> bool {
    true
}
fn default_rpc_timeout_secs() -> u64 {
    30
}
fn default_ssh_port() -> u16 {
    22
}
fn default_connect_timeout_secs() -> u64 {
    10
}

/// Full settings tree as loaded from the YAML settings file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub freeipa: FreeIpaSettings,
    pub fleet: FleetSettings,
}

/// Connection parameters for the FreeIPA JSON-RPC client.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FreeIpaSettings {
    /// Server hostname, or a full `http(s)://` URL for non-standard setups.
    pub server: String,
    /// Principal used for `session/login_password`.
    pub username: String,
    #[serde(default = "default_true")]
    pub verify_tls: bool,
    #[serde(default = "default_rpc_timeout_secs")]
    pub timeout_secs: u64,
}

/// Connection parameters for SSH fleet operations.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetSettings {
    pub username: String,
    #[serde(default = "default_ssh_port")]
    pub port: u16,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// IdM domain the managed hosts are enrolled in, e.g. `example.com`.
    /// Spliced (escaped) into the SSSD config-section matcher.
    pub domain: String,
}

/// Errors raised while loading settings or credentials.
#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read.
    Io(String),
    /// Settings file is not valid YAML or contains unknown fields.
    Parse(String),
    /// A required credential environment variable is unset or empty.
    MissingCredential(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "failed to read settings file: {}", msg),
            Self::Parse(msg) => write!(f, "invalid settings file: {}", msg),
            Self::MissingCredential(var) => {
                write!(f, "credential environment variable '{}' is unset or empty", var)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Settings {
    /// Load and parse a YAML settings file.
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        debug!("loading settings from {}", path.display());
        serde_yaml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn password_from_env(var: &'static str) -> Result<SecretString, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(SecretString::new(value)),
        _ => Err(ConfigError::MissingCredential(var)),
    }
}

/// Read the FreeIPA password from [`IPA_PASSWORD_ENV`].
pub fn ipa_password_from_env() -> Result<SecretString, ConfigError> {
    password_from_env(IPA_PASSWORD_ENV)
}

/// Read the fleet SSH password from [`SSH_PASSWORD_ENV`].
pub fn ssh_password_from_env() -> Result<SecretString, ConfigError> {
    password_from_env(SSH_PASSWORD_ENV)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;
    use std::io::Write;

    const GOOD_YAML: &str = "\
freeipa:
  server: ipa.example.com
  username: admin
fleet:
  username: root
  domain: example.com
";

    #[test]
    fn settings_parse_with_defaults() {
        let settings: Settings = serde_yaml::from_str(GOOD_YAML).unwrap();
        assert_eq!(settings.freeipa.server, "ipa.example.com");
        assert!(settings.freeipa.verify_tls);
        assert_eq!(settings.freeipa.timeout_secs, 30);
        assert_eq!(settings.fleet.port, 22);
        assert_eq!(settings.fleet.connect_timeout_secs, 10);
        assert_eq!(settings.fleet.domain, "example.com");
    }

    #[test]
    fn password_in_settings_file_is_rejected() {
        let yaml = "\
freeipa:
  server: ipa.example.com
  username: admin
  password: hunter2
fleet:
  username: root
  domain: example.com
";
        let err = serde_yaml::from_str::<Settings>(yaml).unwrap_err();
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GOOD_YAML.as_bytes()).unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.fleet.username, "root");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Settings::load(Path::new("/nonexistent/idmb.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    #[serial]
    fn ipa_password_read_from_environment() {
        std::env::set_var(IPA_PASSWORD_ENV, "s3cret");
        let password = ipa_password_from_env().unwrap();
        assert_eq!(password.expose_secret(), "s3cret");
        std::env::remove_var(IPA_PASSWORD_ENV);
    }

    #[test]
    #[serial]
    fn missing_password_env_is_an_error() {
        std::env::remove_var(SSH_PASSWORD_ENV);
        let err = ssh_password_from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(SSH_PASSWORD_ENV)));
    }

    #[test]
    #[serial]
    fn empty_password_env_is_an_error() {
        std::env::set_var(SSH_PASSWORD_ENV, "");
        assert!(ssh_password_from_env().is_err());
        std::env::remove_var(SSH_PASSWORD_ENV);
    }
}
