use crate::{
    collection::DualHashSet,
    db::predicate::ast::{Operator, Predicate, PropertyRef},
    model::EntityKey,
};

/// Identifiers named by a pure OR-of-identifier-equality tree.
///
/// Recognizes `identifier == literal` (either operand order) joined only by
/// `or`. Returns `None` for any other shape. Keys come back in tree order with
/// duplicates collapsed. Literals that cannot be a key of type `K` are
/// dropped, since no entity identifier can equal them.
#[must_use]
pub fn extract_identifiers<A, K>(predicate: &Predicate<A>) -> Option<Vec<K>>
where
    K: EntityKey,
{
    let mut keys = Vec::new();
    collect_keys(predicate, &mut keys)?;

    let mut seen = DualHashSet::new();
    keys.retain(|key: &K| seen.insert(key.clone()));

    Some(keys)
}

fn collect_keys<A, K: EntityKey>(predicate: &Predicate<A>, out: &mut Vec<K>) -> Option<()> {
    let Predicate::Binary { left, op, right } = predicate else {
        return None;
    };

    match op {
        Operator::Or => {
            collect_keys(left, out)?;
            collect_keys(right, out)
        }
        Operator::Equal => match (left.as_ref(), right.as_ref()) {
            (Predicate::Property(PropertyRef::Identifier), Predicate::Literal(literal))
            | (Predicate::Literal(literal), Predicate::Property(PropertyRef::Identifier)) => {
                if let Some(key) = literal.as_ref().and_then(K::from_value) {
                    out.push(key);
                }
                Some(())
            }
            _ => None,
        },
        _ => None,
    }
}
