use crate::{
    collection::{DualHashMap, IdIndex, OrderedDualHashMap},
    model::EntityKind,
};

/// Identifier-keyed entities, iteration order unspecified.
pub type EntityMap<E> = DualHashMap<<E as EntityKind>::Key, E>;

/// Identifier-keyed entities, iterated in insertion order.
pub type OrderedEntityMap<E> = OrderedDualHashMap<<E as EntityKind>::Key, E>;

///
/// EntitySource
///
/// Container shape the façade can query.
///
/// Keyed sources expose their identifier index so filter and order can
/// answer by lookup instead of scanning.
///

pub trait EntitySource<E: EntityKind> {
    /// Every entity, in the container's iteration order.
    fn entities(&self) -> Box<dyn Iterator<Item = &E> + '_>;

    /// Identifier index over exactly the entities held, if the shape has one.
    fn id_index(&self) -> Option<&dyn IdIndex<E>>;
}

impl<E: EntityKind> EntitySource<E> for [E] {
    fn entities(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }

    fn id_index(&self) -> Option<&dyn IdIndex<E>> {
        None
    }
}

impl<E: EntityKind> EntitySource<E> for Vec<E> {
    fn entities(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        self.as_slice().entities()
    }

    fn id_index(&self) -> Option<&dyn IdIndex<E>> {
        None
    }
}

impl<E: EntityKind> EntitySource<E> for DualHashMap<E::Key, E> {
    fn entities(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.values())
    }

    fn id_index(&self) -> Option<&dyn IdIndex<E>> {
        Some(self)
    }
}

impl<E: EntityKind> EntitySource<E> for OrderedDualHashMap<E::Key, E> {
    fn entities(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.values())
    }

    fn id_index(&self) -> Option<&dyn IdIndex<E>> {
        Some(self)
    }
}

/// Key entities by identifier. A repeated identifier replaces the earlier
/// entity.
pub fn entity_map<E, I>(entities: I) -> EntityMap<E>
where
    E: EntityKind,
    I: IntoIterator<Item = E>,
{
    entities
        .into_iter()
        .map(|entity| (entity.id().clone(), entity))
        .collect()
}

/// Key entities by identifier, keeping first-insertion order. A repeated
/// identifier replaces the earlier entity in place.
pub fn ordered_entity_map<E, I>(entities: I) -> OrderedEntityMap<E>
where
    E: EntityKind,
    I: IntoIterator<Item = E>,
{
    entities
        .into_iter()
        .map(|entity| (entity.id().clone(), entity))
        .collect()
}
