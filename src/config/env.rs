//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "KUBE_FZF_UTIL";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Separator from KUBE_FZF_UTIL_SEPARATOR
    pub separator: Option<String>,
    /// Maximum displayed elements from KUBE_FZF_UTIL_MAX_ITEMS
    pub max_items: Option<usize>,
    /// Excluded label keys from KUBE_FZF_UTIL_EXCLUDED_LABELS (comma separated)
    pub excluded_labels: Option<Vec<String>>,
    /// Config file from KUBE_FZF_UTIL_CONFIG
    pub config_file: Option<String>,
    /// Verbose from KUBE_FZF_UTIL_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            separator: get_env("SEPARATOR"),
            max_items: get_env_parse("MAX_ITEMS"),
            excluded_labels: get_env_list("EXCLUDED_LABELS"),
            config_file: get_env("CONFIG"),
            verbose: get_env_bool("VERBOSE"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.separator.is_some()
            || self.max_items.is_some()
            || self.excluded_labels.is_some()
            || self.config_file.is_some()
            || self.verbose.is_some()
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_SEPARATOR:       {:?}", ENV_PREFIX, self.separator);
        println!("  {}_MAX_ITEMS:       {:?}", ENV_PREFIX, self.max_items);
        println!("  {}_EXCLUDED_LABELS: {:?}", ENV_PREFIX, self.excluded_labels);
        println!("  {}_CONFIG:          {:?}", ENV_PREFIX, self.config_file);
        println!("  {}_VERBOSE:         {:?}", ENV_PREFIX, self.verbose);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Get comma separated environment variable, dropping empty entries
fn get_env_list(name: &str) -> Option<Vec<String>> {
    get_env(name).map(|v| {
        v.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
}

/// Print all KUBE_FZF_UTIL environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_SEPARATOR        Separator between joined elements");
    println!("  {ENV_PREFIX}_MAX_ITEMS        Maximum displayed elements before '...'");
    println!("  {ENV_PREFIX}_EXCLUDED_LABELS  Comma separated label keys to hide");
    println!("  {ENV_PREFIX}_CONFIG           Path to configuration file");
    println!("  {ENV_PREFIX}_VERBOSE          Enable verbose output (true/false)");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_MAX_ITEMS=3");
    println!("  kubectl get pods -o json | kube-fzf-util line");
}
