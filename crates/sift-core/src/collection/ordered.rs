use crate::{collection::Bucket, hash::DualHash};
use std::{collections::HashMap, fmt};

///
/// OrderedDualHashMap
///
/// `DualHashMap` that iterates in first-insertion order.
/// Re-inserting an existing key replaces its value in place.
///

#[derive(Clone)]
pub struct OrderedDualHashMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<Bucket, Vec<usize>>,
}

impl<K, V> OrderedDualHashMap<K, V>
where
    K: DualHash + Eq,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.index
            .get(&key.dual_hash())?
            .iter()
            .copied()
            .find(|&pos| self.entries[pos].0 == *key)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|pos| &self.entries[pos].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Entry at an insertion position.
    #[must_use]
    pub fn get_index(&self, pos: usize) -> Option<(&K, &V)> {
        self.entries.get(pos).map(|(key, value)| (key, value))
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(pos) = self.position(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }

        let pos = self.entries.len();
        self.index.entry(key.dual_hash()).or_default().push(pos);
        self.entries.push((key, value));

        None
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K, V> Default for OrderedDualHashMap<K, V>
where
    K: DualHash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for OrderedDualHashMap<K, V>
where
    K: DualHash + Eq + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedDualHashMap<K, V>
where
    K: DualHash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedDualHashMap<K, V>
where
    K: DualHash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
