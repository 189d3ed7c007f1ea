use crate::value::IndexedValue;
use std::cmp::Ordering;

/// Same-variant comparator.
///
/// Ordering rules:
/// 1. Values of the same variant delegate to the payload's order
/// 2. Booleans order `false < true`; every other boolean pair is not less
/// 3. Patterns order by source text, lexically
/// 4. Arrays order element-wise, then by length; an unordered element pair
///    makes the whole pair unordered
/// 5. Mixed variants are unordered (`None`)
///
/// This is a partial order. Sorting a variant-mixed attribute can produce
/// non-transitive results; callers keep sorted attributes homogeneous.
#[must_use]
pub(super) fn partial_cmp_values(left: &IndexedValue, right: &IndexedValue) -> Option<Ordering> {
    match (left, right) {
        (IndexedValue::String(a), IndexedValue::String(b)) => Some(a.cmp(b)),
        (IndexedValue::Integer(a), IndexedValue::Integer(b)) => Some(a.cmp(b)),
        (IndexedValue::Double(a), IndexedValue::Double(b)) => Some(a.cmp(b)),
        (IndexedValue::Float(a), IndexedValue::Float(b)) => Some(a.cmp(b)),
        (IndexedValue::Relationship(a), IndexedValue::Relationship(b)) => Some(a.cmp(b)),
        (IndexedValue::Subtype(a), IndexedValue::Subtype(b)) => Some(a.cmp(b)),
        (IndexedValue::Bool(a), IndexedValue::Bool(b)) => Some(cmp_bool(*a, *b)),
        (IndexedValue::Date(a), IndexedValue::Date(b)) => Some(a.cmp(b)),
        (IndexedValue::Time(a), IndexedValue::Time(b)) => Some(a.cmp(b)),
        (IndexedValue::Url(a), IndexedValue::Url(b)) => Some(a.cmp(b)),
        (IndexedValue::Color(a), IndexedValue::Color(b)) => Some(a.cmp(b)),
        (IndexedValue::Pattern(a), IndexedValue::Pattern(b)) => Some(a.cmp(b)),
        (IndexedValue::Void, IndexedValue::Void) => Some(Ordering::Equal),
        (IndexedValue::Array(a), IndexedValue::Array(b)) => partial_cmp_arrays(a, b),
        _ => None,
    }
}

/// Compare two possibly-missing operands.
///
/// Two missing operands compare `Equal`; a missing operand is unordered
/// against a present one. This differs from `Option`'s own ordering, which
/// would place `None` first.
#[must_use]
pub fn partial_cmp_slots(
    left: Option<&IndexedValue>,
    right: Option<&IndexedValue>,
) -> Option<Ordering> {
    match (left, right) {
        (Some(left), Some(right)) => partial_cmp_values(left, right),
        (None, None) => Some(Ordering::Equal),
        _ => None,
    }
}

/// Strict `<` over two possibly-missing operands.
#[must_use]
pub fn slot_less_than(left: Option<&IndexedValue>, right: Option<&IndexedValue>) -> bool {
    partial_cmp_slots(left, right).is_some_and(Ordering::is_lt)
}

// Only `false < true` is strictly less.
const fn cmp_bool(left: bool, right: bool) -> Ordering {
    match (left, right) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn partial_cmp_arrays(left: &[IndexedValue], right: &[IndexedValue]) -> Option<Ordering> {
    for (left, right) in left.iter().zip(right.iter()) {
        match partial_cmp_values(left, right)? {
            Ordering::Equal => {}
            ordering => return Some(ordering),
        }
    }

    Some(left.len().cmp(&right.len()))
}
