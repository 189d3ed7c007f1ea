use crate::value::IndexedValue;

///
/// ValueTag
///
/// Stable variant tag used by hashing and diagnostics surfaces.
///
/// IMPORTANT:
/// Tag values feed the first half of every value hash and must remain fixed.
///
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Array = 1,
    Bool = 2,
    Color = 3,
    Date = 4,
    Double = 5,
    Float = 6,
    Integer = 7,
    Pattern = 8,
    Relationship = 9,
    String = 10,
    Subtype = 11,
    Time = 12,
    Url = 13,
    Void = 14,
}

impl ValueTag {
    /// Reserved tag for a missing value (`None` slot); never produced by `tag()`.
    pub const MISSING: u8 = 0;

    /// Stable hash byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Array => "Array",
            Self::Bool => "Bool",
            Self::Color => "Color",
            Self::Date => "Date",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Integer => "Integer",
            Self::Pattern => "Pattern",
            Self::Relationship => "Relationship",
            Self::String => "String",
            Self::Subtype => "Subtype",
            Self::Time => "Time",
            Self::Url => "Url",
            Self::Void => "Void",
        }
    }
}

/// Variant tag of one value.
#[must_use]
pub(super) const fn value_tag(value: &IndexedValue) -> ValueTag {
    match value {
        IndexedValue::Array(_) => ValueTag::Array,
        IndexedValue::Bool(_) => ValueTag::Bool,
        IndexedValue::Color(_) => ValueTag::Color,
        IndexedValue::Date(_) => ValueTag::Date,
        IndexedValue::Double(_) => ValueTag::Double,
        IndexedValue::Float(_) => ValueTag::Float,
        IndexedValue::Integer(_) => ValueTag::Integer,
        IndexedValue::Pattern(_) => ValueTag::Pattern,
        IndexedValue::Relationship(_) => ValueTag::Relationship,
        IndexedValue::String(_) => ValueTag::String,
        IndexedValue::Subtype(_) => ValueTag::Subtype,
        IndexedValue::Time(_) => ValueTag::Time,
        IndexedValue::Url(_) => ValueTag::Url,
        IndexedValue::Void => ValueTag::Void,
    }
}
