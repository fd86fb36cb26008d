use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VmailError};

const SYSTEM_CONFIG: &str = "/etc/vmailctl/config.toml";
const DEFAULT_DB_USER: &str = "mailadmin";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub mail: MailConfig,
}

/// Administrative credential used for every connection.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub user: Option<String>,
    pub password: Option<String>,
    /// Unix socket used when the host is a loopback name.
    pub socket: Option<PathBuf>,
}

impl DatabaseConfig {
    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_DB_USER)
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("socket", &self.socket)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub default_domain: Option<String>,
}

impl Config {
    /// Loads the system and per-user files, or the single file named by
    /// `VMAILCTL_CONFIG`, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let config = match std::env::var_os("VMAILCTL_CONFIG") {
            Some(path) => Self::load_file(Path::new(&path))?.unwrap_or_default(),
            None => {
                let system = Self::load_file(Path::new(SYSTEM_CONFIG))?;
                let user = Self::load_file(&Self::user_config_path())?;
                Self::merge(system, user)
            }
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    fn user_config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "vmailctl")
            .map_or_else(
                || PathBuf::from("~/.config/vmailctl"),
                |d| d.config_dir().to_path_buf(),
            )
            .join("config.toml")
    }

    fn load_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| VmailError::Config(format!("{}: {e}", path.display())))
    }

    fn merge(system: Option<Self>, user: Option<Self>) -> Self {
        match (system, user) {
            (Some(system), Some(user)) => Self {
                database: DatabaseConfig {
                    user: user.database.user.or(system.database.user),
                    password: user.database.password.or(system.database.password),
                    socket: user.database.socket.or(system.database.socket),
                },
                mail: MailConfig {
                    default_domain: user.mail.default_domain.or(system.mail.default_domain),
                },
            },
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => Self::default(),
        }
    }

    fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(user) = var("VMAILCTL_DB_USER") {
            self.database.user = Some(user);
        }
        if let Some(password) = var("VMAILCTL_DB_PASSWORD") {
            self.database.password = Some(password);
        }
        if let Some(domain) = var("VMAILCTL_DEFAULT_DOMAIN") {
            self.mail.default_domain = Some(domain);
        }
        self
    }

    pub fn default_domain(&self) -> &str {
        self.mail.default_domain.as_deref().unwrap_or_default()
    }
}
