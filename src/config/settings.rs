use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Storage backend: "memory" or "file"
    #[serde(default = "default_session_backend")]
    pub backend: String,
    /// Directory holding one file per storage key (file backend only)
    #[serde(default = "default_session_dir")]
    pub file_dir: PathBuf,
    /// Key under which the signed-in identity snapshot is kept
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub restore_policy: RestorePolicy,
}

/// How a persisted identity snapshot is treated on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestorePolicy {
    /// Restore the snapshot as-is, without any check.
    #[default]
    Trust,
    /// Restore only if the snapshot matches a directory entry (same id, handle and role).
    Directory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Passphrase shared by every account in the demo directory
    #[serde(default = "default_shared_passphrase")]
    pub shared_passphrase: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Start the notification feed with the demo notifications
    #[serde(default = "default_true")]
    pub notifications: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_body_limit() -> usize {
    64 * 1024 // 64 KiB
}

fn default_session_backend() -> String {
    "memory".to_string()
}

fn default_session_dir() -> PathBuf {
    PathBuf::from(".session")
}

fn default_storage_key() -> String {
    "defense_user".to_string()
}

fn default_shared_passphrase() -> String {
    "password".to_string()
}

fn default_true() -> bool {
    true
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("session.backend", default_session_backend())?
            .set_default("session.storage_key", default_storage_key())?
            .set_default("seed.notifications", true)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // DASHBOARD__SERVER__PORT, DASHBOARD__SESSION__BACKEND, ...
            .add_source(
                Environment::with_prefix("DASHBOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: default_session_backend(),
            file_dir: default_session_dir(),
            storage_key: default_storage_key(),
            restore_policy: RestorePolicy::default(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            shared_passphrase: default_shared_passphrase(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            notifications: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8090);
        assert_eq!(settings.session.backend, "memory");
        assert_eq!(settings.session.storage_key, "defense_user");
        assert_eq!(settings.session.restore_policy, RestorePolicy::Trust);
        assert_eq!(settings.directory.shared_passphrase, "password");
        assert!(settings.seed.notifications);
        assert_eq!(settings.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_server_addr() {
        let settings = Settings::default();
        assert_eq!(settings.server_addr(), "127.0.0.1:8090");
    }

    #[test]
    fn test_restore_policy_parsing() {
        let policy: RestorePolicy = serde_json::from_str("\"directory\"").unwrap();
        assert_eq!(policy, RestorePolicy::Directory);
    }

    #[test]
    fn test_session_file_dir_key() {
        let session: SessionConfig =
            serde_json::from_str(r#"{"backend":"file","file_dir":"/var/lib/dashboard"}"#).unwrap();
        assert_eq!(session.backend, "file");
        assert_eq!(session.file_dir, PathBuf::from("/var/lib/dashboard"));
        assert_eq!(session.storage_key, "defense_user");
    }
}
