//! Kubernetes helpers
//!
//! Cluster naming and cache line rendering for Kubernetes objects.

mod cluster;
mod resource;

pub use cluster::extract_cluster_from_host;
pub use resource::ResourceFormatter;
