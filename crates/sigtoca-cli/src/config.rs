//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/sigtoca/config.toml` by default:
//!
//! ```toml
//! [templates]
//! dialect = "class"
//! title = "${acronym} - ${type}"
//! description = "Room: ${room.name}<br/>Teacher: ${teacher.name}"
//!
//! [one_click]
//! asset_base = "chrome-extension://<extension-id>/"
//!
//! [output]
//! services = ["google", "outlook"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sigtoca_core::{BaseUrlResolver, CalendarService, TemplateDialect, TemplateExtractor};

use crate::error::{CliError, CliResult};

/// Configuration for the sigtoca CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Debug mode.
    pub debug: bool,

    /// Title and description templates.
    pub templates: TemplateSettings,

    /// One-click element settings.
    pub one_click: OneClickSettings,

    /// Which links `sigtoca links` prints.
    pub output: OutputSettings,
}

/// Title and description templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Placeholder vocabulary of `title` and `description`.
    pub dialect: TemplateDialect,

    /// Event title template.
    pub title: String,

    /// Event description template (HTML, `<br/>` for line breaks).
    pub description: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            dialect: TemplateDialect::Class,
            title: "${acronym} - ${type}".to_string(),
            description: "Room: ${room.name}<br/>Teacher: ${teacher.name}".to_string(),
        }
    }
}

impl TemplateSettings {
    /// Builds the extractor for these templates.
    pub fn extractor(&self) -> TemplateExtractor {
        TemplateExtractor::new(self.dialect, &self.title, &self.description)
    }
}

/// One-click element settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OneClickSettings {
    /// CSS class of the anchor.
    pub link_class: String,

    /// CSS class of the icon.
    pub icon_class: String,

    /// Base URL the icon paths are resolved against.
    pub asset_base: String,
}

impl Default for OneClickSettings {
    fn default() -> Self {
        Self {
            link_class: "sigtoca-one-click".to_string(),
            icon_class: "sigtoca-one-click-icon".to_string(),
            asset_base: "chrome-extension://sigtoca/".to_string(),
        }
    }
}

impl OneClickSettings {
    /// Builds the asset resolver for `asset_base`.
    pub fn resolver(&self) -> CliResult<BaseUrlResolver> {
        Ok(BaseUrlResolver::new(&self.asset_base)?)
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Services to build links for, in print order.
    pub services: Vec<CalendarService>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            services: CalendarService::ALL.to_vec(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the default path, or defaults if it does not exist.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Checks that the settings can be used to build links and elements.
    pub fn validate(&self) -> CliResult<()> {
        self.one_click.resolver()?;
        if self.output.services.is_empty() {
            return Err(CliError::Config("output.services must not be empty".into()));
        }
        if self.templates.title.trim().is_empty() {
            return Err(CliError::Config("templates.title must not be empty".into()));
        }
        Ok(())
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sigtoca")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert!(!config.debug);
        assert_eq!(config.templates.dialect, TemplateDialect::Class);
        assert_eq!(config.one_click.link_class, "sigtoca-one-click");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[templates]
dialect = "moodle"
title = "${name}"
"#,
        )
        .unwrap();
        assert_eq!(config.templates.dialect, TemplateDialect::Moodle);
        assert_eq!(config.templates.title, "${name}");
        assert_eq!(
            config.templates.description,
            TemplateSettings::default().description
        );
        assert_eq!(config.one_click.asset_base, "chrome-extension://sigtoca/");
    }

    #[test]
    fn output_services() {
        let config: CliConfig = toml::from_str("[output]\nservices = [\"outlook\"]\n").unwrap();
        assert_eq!(config.output.services, vec![CalendarService::Outlook]);
        assert_eq!(CliConfig::default().output.services.len(), 2);
    }

    #[test]
    fn empty_services_fail_validation() {
        let mut config = CliConfig::default();
        config.output.services.clear();
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        let result: Result<CliConfig, _> = toml::from_str("[templates]\ndialect = \"bogus\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debug = true\n[one_click]\nlink_class = \"oc\"").unwrap();

        let config = CliConfig::load_from(file.path()).unwrap();
        assert!(config.debug);
        assert_eq!(config.one_click.link_class, "oc");
        assert_eq!(config.one_click.icon_class, "sigtoca-one-click-icon");
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn invalid_asset_base_fails_validation() {
        let mut config = CliConfig::default();
        config.one_click.asset_base = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn roundtrips_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.templates.title, config.templates.title);
        assert_eq!(parsed.one_click.asset_base, config.one_click.asset_base);
    }

    #[test]
    fn default_path_ends_with_config_toml() {
        let path = CliConfig::default_path();
        assert!(path.ends_with("sigtoca/config.toml"));
    }
}
