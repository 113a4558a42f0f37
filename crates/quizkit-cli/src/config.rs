//! CLI configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizkit_core::parser::{parse_catalog, LoadedCatalog};

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level quizkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizkitConfig {
    /// Catalog file to load; the built-in questions when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Default tracing directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for QuizkitConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl QuizkitConfig {
    /// Load the catalog named by `override_path`, else the configured one,
    /// else the built-in questions.
    pub fn load_catalog(&self, override_path: Option<&Path>) -> Result<LoadedCatalog> {
        match override_path.or(self.catalog.as_deref()) {
            Some(path) => parse_catalog(path),
            None => {
                tracing::debug!("no catalog configured, using built-in questions");
                Ok(LoadedCatalog::builtin())
            }
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizkit.toml` in the current directory
/// 2. `~/.config/quizkit/config.toml`
///
/// Environment variable override: `QUIZKIT_CATALOG`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizkitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizkit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizkitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizkitConfig::default(),
    };

    if let Ok(catalog) = std::env::var("QUIZKIT_CATALOG") {
        if !catalog.is_empty() {
            config.catalog = Some(PathBuf::from(catalog));
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizkit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizkitConfig::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn parse_config() {
        let toml_str = r#"
catalog = "catalogs/space.toml"
format = "json"
"#;
        let config: QuizkitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("catalogs/space.toml")));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config_from(Some(Path::new("no/such/quizkit.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizkit.toml");
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn no_catalog_means_builtin() {
        let config = QuizkitConfig::default();
        let loaded = config.load_catalog(None).unwrap();
        assert_eq!(loaded.id, "builtin");
        assert_eq!(loaded.catalog.len(), 5);
    }
}
