use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::store::MockIdentity;

const CONFIG_DIR: &str = ".userdemo";

/// A validation error in the configuration
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.field, self.message)
    }
}

/// Defaults for the user created on each run
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Identity the mock store returns on lookup
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MockConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct JournalConfig {
    /// Journal directory; journaling is off when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

impl Config {
    /// Load configuration from default paths
    /// Priority: local (.userdemo/config.local.toml) > project (.userdemo/config.toml) > user (~/.userdemo/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(CONFIG_DIR).join("config.toml");
            if user_config.exists() {
                config.merge(Self::load_from(&user_config)?);
            }
        }

        let project_config = Path::new(CONFIG_DIR).join("config.toml");
        if project_config.exists() {
            config.merge(Self::load_from(&project_config)?);
        }

        // Should be gitignored
        let local_config = Path::new(CONFIG_DIR).join("config.local.toml");
        if local_config.exists() {
            config.merge(Self::load_from(&local_config)?);
        }

        tracing::debug!(?config, "loaded layered config");
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Merge another config into this one (other takes priority for fields it sets)
    pub fn merge(&mut self, other: Config) {
        if other.user.name.is_some() {
            self.user.name = other.user.name;
        }
        if other.user.email.is_some() {
            self.user.email = other.user.email;
        }
        if other.mock.name.is_some() {
            self.mock.name = other.mock.name;
        }
        if other.mock.email.is_some() {
            self.mock.email = other.mock.email;
        }
        if other.journal.dir.is_some() {
            self.journal.dir = other.journal.dir;
        }
    }

    pub fn user_name(&self) -> &str {
        self.user.name.as_deref().unwrap_or("John Doe")
    }

    pub fn user_email(&self) -> &str {
        self.user.email.as_deref().unwrap_or("john@example.com")
    }

    pub fn mock_identity(&self) -> MockIdentity {
        let defaults = MockIdentity::default();
        MockIdentity {
            name: self.mock.name.clone().unwrap_or(defaults.name),
            email: self.mock.email.clone().unwrap_or(defaults.email),
        }
    }

    /// Validate configuration and return any errors found
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let blank = |v: &Option<String>| v.as_deref().is_some_and(|s| s.trim().is_empty());

        if blank(&self.mock.name) {
            errors.push(ValidationError {
                field: "mock.name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if blank(&self.mock.email) {
            errors.push(ValidationError {
                field: "mock.email".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(dir) = &self.journal.dir {
            if dir.as_os_str().is_empty() {
                errors.push(ValidationError {
                    field: "journal.dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            } else if dir.is_file() {
                errors.push(ValidationError {
                    field: "journal.dir".to_string(),
                    message: format!("{} is a file, not a directory", dir.display()),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
