use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// RelationshipId
///
/// Identifier of a related entity, held by value. Resolving it to the
/// related entity is the caller's concern.
///

#[derive(
    Clone, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct RelationshipId(String);

impl RelationshipId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RelationshipId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
