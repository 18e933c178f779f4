//! Configuration module
//!
//! Display settings for cache lines, loaded from a config file and
//! overridden by environment variables and command line flags.

mod env;
mod file;

pub use env::{print_env_help, EnvConfig};
pub use file::ConfigFile;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Display settings shared by the join helpers and the resource formatter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Separator between joined elements
    pub separator: String,

    /// Separator between a label key and its value
    pub label_separator: String,

    /// Maximum number of elements displayed by a bounded join
    pub max_items: usize,

    /// Label keys never displayed
    pub excluded_labels: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            label_separator: "=".to_string(),
            max_items: 5,
            excluded_labels: vec![
                "pod-template-hash".to_string(),
                "controller-revision-hash".to_string(),
            ],
        }
    }
}

impl DisplayConfig {
    /// Separators must not split the space separated fields of a cache line
    pub fn validate(&self) -> Result<()> {
        if self.label_separator.is_empty() {
            anyhow::bail!("display.label_separator must not be empty");
        }
        if self.separator.chars().any(char::is_whitespace) {
            anyhow::bail!(
                "display.separator must not contain whitespace: {:?}",
                self.separator
            );
        }
        if self.label_separator.chars().any(char::is_whitespace) {
            anyhow::bail!(
                "display.label_separator must not contain whitespace: {:?}",
                self.label_separator
            );
        }
        Ok(())
    }

    /// Apply environment overrides
    pub fn with_env(mut self, env: &EnvConfig) -> Self {
        if let Some(separator) = &env.separator {
            self.separator = separator.clone();
        }
        if let Some(max_items) = env.max_items {
            self.max_items = max_items;
        }
        if let Some(excluded) = &env.excluded_labels {
            self.excluded_labels = excluded.clone();
        }
        self
    }

    /// Override the separator
    pub fn with_separator(mut self, separator: Option<String>) -> Self {
        if let Some(separator) = separator {
            self.separator = separator;
        }
        self
    }

    /// Override the maximum displayed elements
    pub fn with_max_items(mut self, max_items: Option<usize>) -> Self {
        if let Some(max_items) = max_items {
            self.max_items = max_items;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.separator, ",");
        assert_eq!(config.max_items, 5);
        assert!(config
            .excluded_labels
            .contains(&"pod-template-hash".to_string()));
    }

    #[test]
    fn test_validate_separators() {
        assert!(DisplayConfig::default().validate().is_ok());

        let spaced = DisplayConfig::default().with_separator(Some(" ".to_string()));
        assert!(spaced.validate().is_err());

        let tabbed = DisplayConfig {
            label_separator: "\t".to_string(),
            ..Default::default()
        };
        assert!(tabbed.validate().is_err());

        let empty = DisplayConfig {
            label_separator: String::new(),
            ..Default::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = EnvConfig {
            separator: Some(";".to_string()),
            max_items: Some(2),
            ..Default::default()
        };
        let config = DisplayConfig::default().with_env(&env);
        assert_eq!(config.separator, ";");
        assert_eq!(config.max_items, 2);
        assert_eq!(config.label_separator, "=");
    }

    #[test]
    fn test_flags_override_env() {
        let env = EnvConfig {
            separator: Some(";".to_string()),
            max_items: Some(2),
            ..Default::default()
        };
        let config = DisplayConfig::default()
            .with_env(&env)
            .with_separator(Some("|".to_string()))
            .with_max_items(None);
        assert_eq!(config.separator, "|");
        assert_eq!(config.max_items, 2);
    }
}
