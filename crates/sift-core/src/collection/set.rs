use crate::{collection::DualHashMap, hash::DualHash};
use std::fmt;

///
/// DualHashSet
///
/// Set over `DualHash + Eq` elements. Equality ignores insertion order.
///

#[derive(Clone)]
pub struct DualHashSet<T> {
    inner: DualHashMap<T, ()>,
}

impl<T> DualHashSet<T>
where
    T: DualHash + Eq,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DualHashMap::new(),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Insert an element, returning `true` if it was newly inserted.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains_key(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.keys()
    }
}

impl<T> Default for DualHashSet<T>
where
    T: DualHash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for DualHashSet<T>
where
    T: DualHash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T> Eq for DualHashSet<T> where T: DualHash + Eq {}

impl<T> fmt::Debug for DualHashSet<T>
where
    T: DualHash + Eq + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DualHashSet<T>
where
    T: DualHash + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for DualHashSet<T>
where
    T: DualHash + Eq,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
