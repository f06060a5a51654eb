//! Link table built from a listing page.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{AppError, Result};

/// Mapping from a URL-derived subject key to the subject's detail page URL.
///
/// Built once per listing fetch and read-only afterwards. Keys iterate in
/// sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkTable {
    links: BTreeMap<String, String>,
}

impl LinkTable {
    /// Insert a link unless the key is already taken.
    ///
    /// Returns the URL already stored under `key` when the insert is refused.
    pub(crate) fn insert_first(&mut self, key: String, url: String) -> Option<&str> {
        use std::collections::btree_map::Entry;

        match self.links.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(url);
                None
            }
            Entry::Occupied(slot) => Some(slot.into_mut().as_str()),
        }
    }

    /// Look up the URL for a subject key.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.links
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| AppError::unknown_subject(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.links.contains_key(key)
    }

    /// Subject keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// `(key, url)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
