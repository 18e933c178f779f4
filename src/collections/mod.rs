//! Collection comparison and filtering

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Returns true if both maps hold the same keys with equal values
pub fn maps_equal<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> bool
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|(k, v)| b.get(k) == Some(v))
}

/// Returns true if both slices hold equal elements in the same order
pub fn slices_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Copy `items` without the elements present in `excluded`, keeping order
pub fn exclude_from_slice<S: AsRef<str>>(items: &[S], excluded: &HashSet<String>) -> Vec<String> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !excluded.contains(*item))
        .map(str::to_string)
        .collect()
}
