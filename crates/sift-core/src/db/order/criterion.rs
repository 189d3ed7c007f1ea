use crate::model::EntityKind;

///
/// OrderCriterion
///
/// One sort key. A criteria slice is priority ordered: index 0 is the most
/// significant key.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OrderCriterion<K, A> {
    IdentifierAscending,
    IdentifierDescending,
    AttributeAscending(A),
    AttributeDescending(A),

    /// No reordering at this priority level.
    Natural,

    /// Listed identifiers first, in list order; unlisted entities follow in
    /// their prior relative order.
    ExplicitIdentifiers(Vec<K>),
}

impl<K, A> OrderCriterion<K, A> {
    pub fn explicit<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self::ExplicitIdentifiers(keys.into_iter().collect())
    }
}

/// Order criterion for entity type `E`.
pub type OrderBy<E> = OrderCriterion<<E as EntityKind>::Key, <E as EntityKind>::Attribute>;
