//! Configuration
//!
//! Defaults, overlaid by the user-level config file, overlaid by the
//! workspace's `.sartor/config.yaml`, overlaid by environment variables.
//! Loading never fails; an unreadable or malformed file just contributes
//! nothing.

use std::path::Path;

use serde::Deserialize;

use crate::catalog::SuitType;
use crate::core::workspace::Workspace;

pub const AUTHOR_ENV: &str = "SARTOR_AUTHOR";

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    author: String,
    currency: String,
    default_suit_type: SuitType,
}

/// On-disk shape; every field optional so layers merge
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    author: Option<String>,
    currency: Option<String>,
    default_suit_type: Option<SuitType>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: std::env::var("USER")
                .or_else(|_| std::env::var("USERNAME"))
                .unwrap_or_else(|_| "anonymous".to_string()),
            currency: "USD".to_string(),
            default_suit_type: SuitType::default(),
        }
    }
}

impl Config {
    /// Load layered configuration; `workspace` adds the project layer
    pub fn load(workspace: Option<&Workspace>) -> Config {
        let mut config = Config::default();

        if let Some(dirs) = directories::ProjectDirs::from("", "", "sartor") {
            config.apply_file(&dirs.config_dir().join("config.yaml"));
        }

        if let Some(ws) = workspace {
            config.apply_file(&ws.config_file());
        }

        if let Ok(author) = std::env::var(AUTHOR_ENV) {
            if !author.trim().is_empty() {
                config.author = author;
            }
        }

        config
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn default_suit_type(&self) -> SuitType {
        self.default_suit_type
    }

    fn apply_file(&mut self, path: &Path) {
        let Ok(content) = std::fs::read_to_string(path) else {
            return;
        };
        let Ok(file) = serde_yml::from_str::<ConfigFile>(&content) else {
            return;
        };
        self.apply(file);
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(author) = file.author {
            self.author = author;
        }
        if let Some(currency) = file.currency {
            self.currency = currency;
        }
        if let Some(suit_type) = file.default_suit_type {
            self.default_suit_type = suit_type;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_unset_fields() {
        let mut config = Config {
            author: "fallback".to_string(),
            currency: "USD".to_string(),
            default_suit_type: SuitType::TwoPiece,
        };
        let file: ConfigFile = serde_yml::from_str("currency: EUR\n").unwrap();
        config.apply(file);

        assert_eq!(config.author(), "fallback");
        assert_eq!(config.currency(), "EUR");
        assert_eq!(config.default_suit_type(), SuitType::TwoPiece);
    }

    #[test]
    fn test_workspace_layer_wins() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::init(dir.path()).unwrap();
        std::fs::write(
            ws.config_file(),
            "author: Atelier Nord\ndefault_suit_type: three-piece\n",
        )
        .unwrap();

        let mut config = Config {
            author: "fallback".to_string(),
            currency: "USD".to_string(),
            default_suit_type: SuitType::TwoPiece,
        };
        config.apply_file(&ws.config_file());

        assert_eq!(config.author(), "Atelier Nord");
        assert_eq!(config.default_suit_type(), SuitType::ThreePiece);
        assert_eq!(config.currency(), "USD");
    }

    #[test]
    fn test_malformed_file_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "author: [unclosed").unwrap();

        let mut config = Config {
            author: "fallback".to_string(),
            currency: "USD".to_string(),
            default_suit_type: SuitType::TwoPiece,
        };
        config.apply_file(&path);
        assert_eq!(config.author(), "fallback");
    }
}
