//! Cache line rendering for Kubernetes objects
//!
//! Every object is rendered as a single space separated line:
//! `<namespace> <name> <age> <labels>`, the format fzf completion reads.

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::format::{age_between, dump_line, join_string_map, join_with_max_or_none};

/// Any Kubernetes object; only the metadata is read
#[derive(Debug, Deserialize)]
struct ObjectEnvelope {
    #[serde(default)]
    metadata: ObjectMeta,
}

/// Renders object metadata as cache lines
#[derive(Clone, Debug)]
pub struct ResourceFormatter {
    separator: String,
    label_separator: String,
    max_labels: usize,
    excluded_labels: HashSet<String>,
}

impl ResourceFormatter {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            separator: config.separator.clone(),
            label_separator: config.label_separator.clone(),
            max_labels: config.max_items,
            excluded_labels: config.excluded_labels.iter().cloned().collect(),
        }
    }

    /// Line fields, before `None` substitution
    pub fn fields(&self, meta: &ObjectMeta, now: DateTime<Utc>) -> Vec<String> {
        let age = meta
            .creation_timestamp
            .as_ref()
            .map(|ts| age_between(ts.0, now))
            .unwrap_or_default();

        let labels = match &meta.labels {
            Some(labels) => join_string_map(labels, &self.excluded_labels, &self.label_separator),
            None => Vec::new(),
        };

        vec![
            meta.namespace.clone().unwrap_or_default(),
            meta.name.clone().unwrap_or_default(),
            age,
            join_with_max_or_none(&labels, self.max_labels, &self.separator),
        ]
    }

    /// Render a newline terminated cache line
    pub fn render(&self, meta: &ObjectMeta, now: DateTime<Utc>) -> String {
        dump_line(&self.fields(meta, now))
    }

    /// Render cache lines from JSON, either a single object or a list with
    /// an `items` array as printed by `kubectl get -o json`
    pub fn render_json(&self, json: &str, now: DateTime<Utc>) -> Result<String> {
        let value: Value = serde_json::from_str(json)?;
        let objects = match value.get("items").and_then(Value::as_array) {
            Some(items) => items.clone(),
            None => vec![value],
        };

        let mut output = String::new();
        for object in objects {
            let object: ObjectEnvelope = serde_json::from_value(object)?;
            debug!(
                "Rendering {}/{}",
                object.metadata.namespace.as_deref().unwrap_or("-"),
                object.metadata.name.as_deref().unwrap_or("-")
            );
            output.push_str(&self.render(&object.metadata, now));
        }
        Ok(output)
    }
}

impl Default for ResourceFormatter {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}
