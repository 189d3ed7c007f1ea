use crate::{error::Error, hash::DualHash, types::RelationshipId, value::IndexedValue};
use std::fmt::Debug;

// ============================================================================
// ENTITY CAPABILITY
// ============================================================================
//
// The query core owns no entities. It needs exactly two things from them:
// a unique orderable identifier and a pure attribute lookup.
//

///
/// EntityKey
///
/// Identifier type of an entity.
///
/// ## Semantics
/// - Identity is key equality
/// - Keys are totally ordered (identifier sort criteria)
/// - Keys carry a two-part hash (identifier maps)
/// - Keys convert to and from `IndexedValue` so predicates can compare them
///   against literals
///

pub trait EntityKey: Clone + Debug + DualHash + Eq + Ord {
    /// Wrap this key as a value operand.
    fn to_value(&self) -> IndexedValue;

    /// Recover a key from a literal; `None` when the literal cannot be a key.
    fn from_value(value: &IndexedValue) -> Option<Self>;
}

impl EntityKey for i64 {
    fn to_value(&self) -> IndexedValue {
        IndexedValue::Integer(*self)
    }

    fn from_value(value: &IndexedValue) -> Option<Self> {
        value.as_integer()
    }
}

impl EntityKey for String {
    fn to_value(&self) -> IndexedValue {
        IndexedValue::String(self.clone())
    }

    fn from_value(value: &IndexedValue) -> Option<Self> {
        value.as_str().map(ToString::to_string)
    }
}

impl EntityKey for RelationshipId {
    fn to_value(&self) -> IndexedValue {
        IndexedValue::Relationship(self.clone())
    }

    fn from_value(value: &IndexedValue) -> Option<Self> {
        match value {
            IndexedValue::Relationship(id) => Some(id.clone()),
            _ => None,
        }
    }
}

///
/// AttributeKind
///
/// Finite, compile-time set of queryable attribute tags for one entity type.
/// Textual names resolve through `ALL`; there is no runtime reflection.
///

pub trait AttributeKind: Copy + Debug + Eq + 'static {
    const ALL: &'static [Self];

    /// Stable attribute name used for text resolution and diagnostics.
    fn name(self) -> &'static str;

    /// Resolve a textual attribute name to its tag.
    fn from_name(name: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|attribute| attribute.name() == name)
            .ok_or_else(|| Error::unknown_attribute(name))
    }
}

///
/// EntityKind
///
/// An immutable snapshot of a domain entity.
///
/// `attribute_value` must be pure for the lifetime of a query: the same
/// attribute read twice yields equal values.
///

pub trait EntityKind {
    type Key: EntityKey;
    type Attribute: AttributeKind;

    fn id(&self) -> &Self::Key;

    /// Value of one attribute; `None` when the entity has no value for it.
    fn attribute_value(&self, attribute: Self::Attribute) -> Option<IndexedValue>;
}

///
/// TESTS
///
