mod compare;
mod hash;
mod tag;


use crate::{error::Error, types::*};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

// re-exports
pub use compare::{partial_cmp_slots, slot_less_than};
pub use hash::ARRAY_HASH_PAYLOAD;
pub use tag::ValueTag;

///
/// IndexedValue
///
/// Tagged union for any attribute or literal operand in a query.
///
/// - Equality is structural per variant; mixed variants are never equal.
/// - Ordering is total only within a variant (see `PartialOrd`).
/// - Hashing is two-part (`DualHash`); all arrays share one hash.
///
/// A missing value is not a variant: operand slots are `Option<IndexedValue>`
/// and `None` is the missing value.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum IndexedValue {
    String(String),
    Integer(i64),
    Double(Float64),
    Float(Float32),
    Relationship(RelationshipId),
    Subtype(SubtypeCode),
    Bool(bool),
    Date(Date),
    Time(Duration),
    Url(Url),
    Color(Color),
    Pattern(Pattern),
    Void,
    /// Ordered list of values; nests without bound.
    Array(Vec<Self>),
}

impl IndexedValue {
    ///
    /// CONSTRUCTION
    ///

    /// Wrap a maybe-missing scalar; `None` stays the missing value.
    pub fn optional<T>(value: Option<T>) -> Option<Self>
    where
        T: Into<Self>,
    {
        value.map(Into::into)
    }

    /// Wrap a duration scalar as the `Time` variant.
    pub fn time(value: impl Into<Duration>) -> Self {
        Self::Time(value.into())
    }

    /// Wrap a fractional-seconds duration as the `Time` variant.
    #[must_use]
    pub fn time_secs(secs: f64) -> Option<Self> {
        Duration::from_secs_f64(secs).map(Self::Time)
    }

    /// Compile pattern source text into a `Pattern` value.
    pub fn pattern(source: &str) -> Result<Self, Error> {
        Pattern::new(source).map(Self::Pattern)
    }

    /// Build an `Array` from owned items.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    ///
    /// INSPECTION
    ///

    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::value_tag(self)
    }

    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        self.tag().label()
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Double(_) | Self::Float(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Self::Pattern(p) => Some(p),
            _ => None,
        }
    }

    /// Canonical decimal text for numeric variants.
    ///
    /// Integers render plainly; doubles and floats always carry a fractional
    /// part (`3.0`, `1.5`).
    #[must_use]
    pub fn canonical_number_text(&self) -> Option<String> {
        match self {
            Self::Integer(i) => Some(i.to_string()),
            Self::Double(v) => Some(v.canonical_text()),
            Self::Float(v) => Some(v.canonical_text()),
            _ => None,
        }
    }
}

impl PartialOrd for IndexedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare::partial_cmp_values(self, other)
    }
}

impl Display for IndexedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Double(v) => write!(f, "{}", v.canonical_text()),
            Self::Float(v) => write!(f, "{}f", v.canonical_text()),
            Self::Relationship(r) => write!(f, "@{r}"),
            Self::Subtype(s) => write!(f, "subtype({s})"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::Url(u) => write!(f, "<{u}>"),
            Self::Color(c) => write!(f, "{c}"),
            Self::Pattern(p) => write!(f, "{p}"),
            Self::Void => write!(f, "void"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

///
/// CONVERSIONS
///

macro_rules! impl_from_for_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for IndexedValue {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    String => String,
    &str => String,
    i64 => Integer,
    i32 => Integer,
    u32 => Integer,
    bool => Bool,
    Float64 => Double,
    Float32 => Float,
    RelationshipId => Relationship,
    SubtypeCode => Subtype,
    Date => Date,
    Duration => Time,
    Url => Url,
    Color => Color,
    Pattern => Pattern,
    Vec<IndexedValue> => Array,
}

impl From<()> for IndexedValue {
    fn from((): ()) -> Self {
        Self::Void
    }
}

impl TryFrom<f64> for IndexedValue {
    type Error = Error;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Float64::try_from(v).map(Self::Double)
    }
}

impl TryFrom<f32> for IndexedValue {
    type Error = Error;

    fn try_from(v: f32) -> Result<Self, Self::Error> {
        Float32::try_from(v).map(Self::Float)
    }
}
