//! Sample entity shared by unit tests.

use crate::{model::EntityKind, value::IndexedValue};

crate::attribute_kind! {
    pub(crate) enum ItemAttr {
        Rank => "rank",
        Name => "name",
        Score => "score",
        Active => "active",
        Tags => "tags",
        Note => "note",
    }
}

///
/// Item
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Item {
    pub(crate) id: i64,
    pub(crate) rank: i64,
    pub(crate) name: String,
    pub(crate) score: f64,
    pub(crate) active: bool,
    pub(crate) tags: Vec<String>,
    pub(crate) note: Option<String>,
}

impl Item {
    pub(crate) fn new(id: i64, rank: i64, name: &str) -> Self {
        Self {
            id,
            rank,
            name: name.to_string(),
            score: 0.0,
            active: true,
            tags: Vec::new(),
            note: None,
        }
    }

    pub(crate) fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub(crate) fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub(crate) fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    pub(crate) const fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

impl EntityKind for Item {
    type Key = i64;
    type Attribute = ItemAttr;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn attribute_value(&self, attribute: ItemAttr) -> Option<IndexedValue> {
        match attribute {
            ItemAttr::Rank => Some(self.rank.into()),
            ItemAttr::Name => Some(self.name.as_str().into()),
            ItemAttr::Score => IndexedValue::try_from(self.score).ok(),
            ItemAttr::Active => Some(self.active.into()),
            ItemAttr::Tags => Some(IndexedValue::array(self.tags.iter().cloned())),
            ItemAttr::Note => IndexedValue::optional(self.note.clone()),
        }
    }
}

/// Three items named A, B, C with identifiers 1, 2, 3.
pub(crate) fn abc() -> Vec<Item> {
    vec![
        Item::new(1, 30, "A"),
        Item::new(2, 10, "B"),
        Item::new(3, 20, "C"),
    ]
}
