use crate::{collection::DualHashSet, model::EntityKey, value::IndexedValue};
use std::fmt::{self, Display};

/// Literal set operand of `ContainedIn`. May contain the missing value.
pub type ValueSet = DualHashSet<Option<IndexedValue>>;

///
/// Operator
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    Equal,
    And,
    Or,
    Match,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    ContainedIn,
}

impl Operator {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::And => "and",
            Self::Or => "or",
            Self::Match => "match",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::ContainedIn => "in",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// PropertyRef
///
/// Reference to an entity property: its identifier, or one attribute tag.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PropertyRef<A> {
    Identifier,
    Attribute(A),
}

///
/// Predicate
///
/// Immutable filter expression over entities whose attribute tag is `A`.
/// Trees hold no entity state and can be evaluated any number of times.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate<A> {
    Binary {
        left: Box<Self>,
        op: Operator,
        right: Box<Self>,
    },
    Negate(Box<Self>),
    Property(PropertyRef<A>),
    Literal(Option<IndexedValue>),
    LiteralSet(ValueSet),
}

impl<A> Predicate<A> {
    ///
    /// LEAVES
    ///

    #[must_use]
    pub const fn identifier() -> Self {
        Self::Property(PropertyRef::Identifier)
    }

    #[must_use]
    pub const fn attribute(attribute: A) -> Self {
        Self::Property(PropertyRef::Attribute(attribute))
    }

    pub fn literal(value: impl Into<IndexedValue>) -> Self {
        Self::Literal(Some(value.into()))
    }

    /// The missing-value literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(None)
    }

    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<IndexedValue>,
    {
        Self::LiteralSet(items.into_iter().map(|item| Some(item.into())).collect())
    }

    ///
    /// COMBINATORS
    ///

    #[must_use]
    pub fn binary(left: Self, op: Operator, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn eq(left: Self, right: Self) -> Self {
        Self::binary(left, Operator::Equal, right)
    }

    #[must_use]
    pub fn lt(left: Self, right: Self) -> Self {
        Self::binary(left, Operator::LessThan, right)
    }

    #[must_use]
    pub fn lte(left: Self, right: Self) -> Self {
        Self::binary(left, Operator::LessThanOrEqual, right)
    }

    #[must_use]
    pub fn gt(left: Self, right: Self) -> Self {
        Self::binary(left, Operator::GreaterThan, right)
    }

    #[must_use]
    pub fn gte(left: Self, right: Self) -> Self {
        Self::binary(left, Operator::GreaterThanOrEqual, right)
    }

    #[must_use]
    pub fn matches(left: Self, right: Self) -> Self {
        Self::binary(left, Operator::Match, right)
    }

    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::binary(left, Operator::And, right)
    }

    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::binary(left, Operator::Or, right)
    }

    #[must_use]
    pub fn not(child: Self) -> Self {
        Self::Negate(Box::new(child))
    }

    #[must_use]
    pub fn contained_in(property: Self, set: Self) -> Self {
        Self::binary(property, Operator::ContainedIn, set)
    }

    /// `identifier == k0 or identifier == k1 or ...`, folded left.
    ///
    /// An empty key list yields the literal `false`.
    pub fn any_identifier<K, I>(keys: I) -> Self
    where
        K: EntityKey,
        I: IntoIterator<Item = K>,
    {
        keys.into_iter()
            .map(|key| Self::eq(Self::identifier(), Self::Literal(Some(key.to_value()))))
            .reduce(Self::or)
            .unwrap_or_else(|| Self::literal(false))
    }
}
