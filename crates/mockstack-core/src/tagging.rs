//! Generic per-resource tag storage.
//!
//! Service emulations attach tags to resources identified by an opaque
//! string (usually an ARN, sometimes a synthetic placeholder identifier).
//! [`TagStore`] keeps one key-to-values mapping per resource identifier and
//! is shared by whichever service operations need tagging semantics.

use std::collections::HashMap;

use dashmap::DashMap;
use tracing::debug;

/// Concurrent key/value-list tag storage keyed by resource identifier.
#[derive(Debug, Default)]
pub struct TagStore {
    tags: DashMap<String, HashMap<String, Vec<String>>>,
}

impl TagStore {
    /// Create a new empty tag store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tags: DashMap::new(),
        }
    }

    /// Attach tags to a resource, replacing the value list of any key that
    /// is already present and leaving other keys untouched.
    pub fn tag_resource(
        &self,
        resource_id: &str,
        tags: impl IntoIterator<Item = (String, Vec<String>)>,
    ) {
        let mut entry = self.tags.entry(resource_id.to_owned()).or_default();
        for (key, values) in tags {
            entry.insert(key, values);
        }
    }

    /// Remove the named tag keys from a resource. Unknown keys are ignored.
    pub fn untag_resource(&self, resource_id: &str, keys: &[String]) {
        if let Some(mut entry) = self.tags.get_mut(resource_id) {
            for key in keys {
                entry.remove(key);
            }
            debug!(resource = resource_id, removed = keys.len(), "untagged resource");
        }
    }

    /// All tags on a resource as a flat key-to-values map.
    #[must_use]
    pub fn get_tags(&self, resource_id: &str) -> HashMap<String, Vec<String>> {
        self.tags
            .get(resource_id)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }

    /// The value list for a single tag key, if the key exists.
    #[must_use]
    pub fn get_tag(&self, resource_id: &str, key: &str) -> Option<Vec<String>> {
        self.tags
            .get(resource_id)
            .and_then(|entry| entry.get(key).cloned())
    }

    /// Whether the resource carries the given tag key.
    #[must_use]
    pub fn has_tag(&self, resource_id: &str, key: &str) -> bool {
        self.tags
            .get(resource_id)
            .is_some_and(|entry| entry.contains_key(key))
    }

    /// Drop all tags for all resources.
    pub fn reset(&self) {
        self.tags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_store_and_fetch_tags() {
        let store = TagStore::new();
        store.tag_resource(
            "arn:aws:s3:::bucket",
            [("env".to_owned(), vec!["prod".to_owned()])],
        );

        assert_eq!(
            store.get_tag("arn:aws:s3:::bucket", "env"),
            Some(vec!["prod".to_owned()])
        );
        assert!(store.has_tag("arn:aws:s3:::bucket", "env"));
        assert!(!store.has_tag("arn:aws:s3:::bucket", "team"));
    }

    #[test]
    fn test_should_replace_values_for_existing_key() {
        let store = TagStore::new();
        store.tag_resource("r1", [("k".to_owned(), vec!["v1".to_owned()])]);
        store.tag_resource("r1", [("k".to_owned(), vec!["v2".to_owned(), "v3".to_owned()])]);

        assert_eq!(
            store.get_tag("r1", "k"),
            Some(vec!["v2".to_owned(), "v3".to_owned()])
        );
    }

    #[test]
    fn test_should_untag_only_named_keys() {
        let store = TagStore::new();
        store.tag_resource(
            "r1",
            [
                ("a".to_owned(), vec!["1".to_owned()]),
                ("b".to_owned(), vec!["2".to_owned()]),
            ],
        );
        store.untag_resource("r1", &["a".to_owned(), "missing".to_owned()]);

        let tags = store.get_tags("r1");
        assert_eq!(tags.len(), 1);
        assert!(tags.contains_key("b"));
    }

    #[test]
    fn test_should_return_empty_map_for_unknown_resource() {
        let store = TagStore::new();
        assert!(store.get_tags("nope").is_empty());
        assert_eq!(store.get_tag("nope", "k"), None);
    }
}
