//! Display formatting helpers
//!
//! Joins slices and maps into the strings shown in fzf cache lines.
//! Empty collections are displayed as `None` rather than an empty string.

pub mod age;

pub use age::{age_between, time_to_age};

use std::collections::HashSet;

/// Placeholder displayed for empty values
pub const NONE_PLACEHOLDER: &str = "None";

/// Marker appended when a bounded join drops elements
pub const ELLIPSIS: &str = "...";

/// Join a slice with a separator, or display `None` if it has no elements
pub fn join_or_none<S: AsRef<str>>(items: &[S], sep: &str) -> String {
    if items.is_empty() {
        return NONE_PLACEHOLDER.to_string();
    }
    join(items, sep)
}

/// Join at most `max` elements of a slice with a separator
///
/// When the slice holds `max` elements or more, only the first `max` are
/// kept and [`ELLIPSIS`] is appended as an extra element.
pub fn join_with_max_or_none<S: AsRef<str>>(items: &[S], max: usize, sep: &str) -> String {
    if items.is_empty() {
        return NONE_PLACEHOLDER.to_string();
    }
    if items.len() < max {
        return join(items, sep);
    }

    let mut displayed: Vec<&str> = items[..max].iter().map(AsRef::as_ref).collect();
    displayed.push(ELLIPSIS);
    displayed.join(sep)
}

/// Join integers with a separator, or display `None` if there are none
pub fn join_int_or_none(items: &[i64], sep: &str) -> String {
    if items.is_empty() {
        return NONE_PLACEHOLDER.to_string();
    }
    items
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Render map entries as `<key><sep><value>`, skipping excluded keys
///
/// Entries are sorted by key.
pub fn join_string_map<'a, I, K, V>(map: I, excluded: &HashSet<String>, sep: &str) -> Vec<String>
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    K: AsRef<str> + 'a + ?Sized,
    V: AsRef<str> + 'a + ?Sized,
{
    let mut entries: Vec<(&str, &str)> = map
        .into_iter()
        .map(|(k, v)| (k.as_ref(), v.as_ref()))
        .filter(|(k, _)| !excluded.contains(*k))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    entries
        .into_iter()
        .map(|(k, v)| format!("{k}{sep}{v}"))
        .collect()
}

/// Build a cache line: empty fields become `None`, fields are joined by a
/// space and the line is newline terminated
pub fn dump_line<S: AsRef<str>>(fields: &[S]) -> String {
    let fields: Vec<&str> = fields
        .iter()
        .map(|f| match f.as_ref() {
            "" => NONE_PLACEHOLDER,
            field => field,
        })
        .collect();
    format!("{}\n", fields.join(" "))
}

fn join<S: AsRef<str>>(items: &[S], sep: &str) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(sep)
}
