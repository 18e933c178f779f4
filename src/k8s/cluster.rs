//! Cluster name extraction
//!
//! API server URLs usually look like `https://kubernetes.<cluster>:6443`;
//! the cluster name is the host with the `kubernetes.` prefix removed.

use tracing::debug;
use url::Url;

use crate::error::{Result, UtilError};

const KUBERNETES_HOST_PREFIX: &str = "kubernetes.";

/// Get the cluster name from an API server URL
///
/// The authority is kept as written, port and letter case included:
/// `https://kubernetes.Prod:443` gives `Prod:443`.
pub fn extract_cluster_from_host(host: &str) -> Result<String> {
    let parsed = Url::parse(host).map_err(|source| UtilError::InvalidUrl {
        host: host.to_string(),
        source,
    })?;

    let hostname = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| UtilError::MissingHost(host.to_string()))?;

    let authority = match raw_authority(host) {
        Some(authority) => authority.to_string(),
        None => match parsed.port() {
            Some(port) => format!("{hostname}:{port}"),
            None => hostname.to_string(),
        },
    };

    let cluster = authority
        .strip_prefix(KUBERNETES_HOST_PREFIX)
        .unwrap_or(&authority)
        .to_string();

    debug!("Extracted cluster {} from {}", cluster, host);
    Ok(cluster)
}

/// Authority of `scheme://[user@]host[:port]/...` as written, without user info
fn raw_authority(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let authority = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    (!authority.is_empty()).then_some(authority)
}
