//! Per-type header label cache.
//!
//! Humanized header labels are a pure function of a record type's
//! descriptor table, so they are computed once per type and shared
//! read-only across callers.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::Record;

/// Thread-safe cache of humanized header labels keyed by record type.
///
/// Uses `parking_lot::RwLock` for faster, non-poisoning locks. Entries are
/// never mutated after insertion.
#[derive(Default)]
pub struct HeaderCache {
    cache: RwLock<HashMap<TypeId, Arc<[String]>>>,
}

impl HeaderCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the header labels for `T`, computing them with `label` on first
    /// use.
    pub fn labels<T: Record + 'static>(&self, label: impl Fn(&str) -> String) -> Arc<[String]> {
        let key = TypeId::of::<T>();
        if let Some(labels) = self.cache.read().get(&key) {
            return Arc::clone(labels);
        }

        let labels: Arc<[String]> = T::fields().iter().map(|f| label(f.name)).collect();
        let mut cache = self.cache.write();
        Arc::clone(cache.entry(key).or_insert(labels))
    }

    /// Number of cached record types.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
