use crate::{collection::Bucket, hash::DualHash};
use std::{collections::HashMap, fmt};

///
/// DualHashMap
///
/// Unordered map over `DualHash + Eq` keys.
///

#[derive(Clone)]
pub struct DualHashMap<K, V> {
    buckets: HashMap<Bucket, Vec<(K, V)>>,
    len: usize,
}

impl<K, V> DualHashMap<K, V>
where
    K: DualHash + Eq,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            len: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: HashMap::with_capacity(capacity),
            len: 0,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets
            .get(&key.dual_hash())?
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.buckets
            .get_mut(&key.dual_hash())?
            .iter_mut()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let bucket = self.buckets.entry(key.dual_hash()).or_default();

        if let Some((_, slot)) = bucket.iter_mut().find(|(candidate, _)| *candidate == key) {
            return Some(std::mem::replace(slot, value));
        }

        bucket.push((key, value));
        self.len += 1;

        None
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let hash = key.dual_hash();
        let bucket = self.buckets.get_mut(&hash)?;
        let pos = bucket.iter().position(|(candidate, _)| candidate == key)?;
        let (_, value) = bucket.swap_remove(pos);

        if bucket.is_empty() {
            self.buckets.remove(&hash);
        }
        self.len -= 1;

        Some(value)
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.iter().map(|(key, value)| (key, value)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V> Default for DualHashMap<K, V>
where
    K: DualHash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for DualHashMap<K, V>
where
    K: DualHash + Eq + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for DualHashMap<K, V>
where
    K: DualHash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for DualHashMap<K, V>
where
    K: DualHash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
