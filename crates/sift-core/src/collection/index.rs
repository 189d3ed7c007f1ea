use crate::{
    collection::{DualHashMap, OrderedDualHashMap},
    model::EntityKind,
};
use std::borrow::Borrow;

///
/// IdIndex
///
/// Identifier-to-entity lookup consumed by the ordering engine's explicit
/// sequence path and the façade's identifier fast path.
///

pub trait IdIndex<E: EntityKind> {
    fn lookup(&self, key: &E::Key) -> Option<&E>;

    fn entry_count(&self) -> usize;
}

impl<E, V> IdIndex<E> for DualHashMap<E::Key, V>
where
    E: EntityKind,
    V: Borrow<E>,
{
    fn lookup(&self, key: &E::Key) -> Option<&E> {
        self.get(key).map(Borrow::borrow)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<E, V> IdIndex<E> for OrderedDualHashMap<E::Key, V>
where
    E: EntityKind,
    V: Borrow<E>,
{
    fn lookup(&self, key: &E::Key) -> Option<&E> {
        self.get(key).map(Borrow::borrow)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}
