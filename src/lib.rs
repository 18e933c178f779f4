//! Formatting helpers for kubectl fzf completion caches
//!
//! Joins slices and maps for display, compares collections, formats
//! resource ages, extracts cluster names from API server URLs and renders
//! Kubernetes objects as one-line cache entries.

pub mod collections;
pub mod config;
pub mod error;
pub mod fatal;
pub mod format;
pub mod k8s;
pub mod utils;

pub use collections::{exclude_from_slice, maps_equal, slices_equal};
pub use config::{ConfigFile, DisplayConfig, EnvConfig};
pub use error::{Result, UtilError};
pub use fatal::{check, fatal_if, FatalError};
pub use format::{
    age_between, dump_line, join_int_or_none, join_or_none, join_string_map,
    join_with_max_or_none, time_to_age,
};
pub use k8s::{extract_cluster_from_host, ResourceFormatter};
