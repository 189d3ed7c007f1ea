use crate::{
    collection::{DualHashMap, DualHashSet, IdIndex},
    config::QueryOptions,
    db::order::{
        criterion::{OrderBy, OrderCriterion},
        stable::stable_sort_by,
    },
    model::EntityKind,
    obs::{DiagnosticKind, DiagnosticsSink, NOOP_SINK, Reporter},
    value::{IndexedValue, slot_less_than},
};

// Rank of entities absent from an explicit identifier list.
const UNLISTED_RANK: usize = usize::MAX;

///
/// OrderingEngine
///
/// Pure (entities, criteria, optional identifier index) ordering.
///

#[derive(Clone, Copy, Debug)]
pub struct OrderingEngine<'s> {
    reporter: Reporter<'s>,
    explicit_sequence_fast_path: bool,
}

impl<'s> OrderingEngine<'s> {
    #[must_use]
    pub fn new(sink: &'s dyn DiagnosticsSink) -> Self {
        Self::with_options(sink, QueryOptions::default())
    }

    #[must_use]
    pub const fn with_options(sink: &'s dyn DiagnosticsSink, options: QueryOptions) -> Self {
        Self::from_reporter(
            Reporter::new(sink, options.min_severity),
            options.explicit_sequence_fast_path,
        )
    }

    pub(crate) const fn from_reporter(
        reporter: Reporter<'s>,
        explicit_sequence_fast_path: bool,
    ) -> Self {
        Self {
            reporter,
            explicit_sequence_fast_path,
        }
    }

    /// Order `entities` by `criteria` (index 0 most significant).
    ///
    /// `index`, when supplied, must map identifiers to the same entities the
    /// input refers to; it only enables the explicit-sequence fast path. An
    /// empty criteria slice returns the input unchanged.
    pub fn order<'e, E: EntityKind>(
        &self,
        entities: Vec<&'e E>,
        criteria: &[OrderBy<E>],
        index: Option<&'e dyn IdIndex<E>>,
    ) -> Vec<&'e E> {
        criteria
            .iter()
            .rev()
            .fold(entities, |ordered, criterion| match criterion {
                OrderCriterion::Natural => ordered,
                OrderCriterion::IdentifierAscending => {
                    stable_sort_by(ordered, |a, b| a.id() < b.id())
                }
                OrderCriterion::IdentifierDescending => {
                    stable_sort_by(ordered, |a, b| b.id() < a.id())
                }
                OrderCriterion::AttributeAscending(attribute) => {
                    sort_by_attribute(ordered, *attribute, false)
                }
                OrderCriterion::AttributeDescending(attribute) => {
                    sort_by_attribute(ordered, *attribute, true)
                }
                OrderCriterion::ExplicitIdentifiers(keys) => self.order_explicit(ordered, keys, index),
            })
    }

    fn order_explicit<'e, E: EntityKind>(
        &self,
        entities: Vec<&'e E>,
        keys: &[E::Key],
        index: Option<&'e dyn IdIndex<E>>,
    ) -> Vec<&'e E> {
        // a list shorter than the input can never resolve every entity
        if self.explicit_sequence_fast_path && keys.len() >= entities.len() {
            let emitted = match index {
                Some(index) => {
                    emit_listed(&entities, keys, index.entry_count(), move |key| index.lookup(key))
                }
                None => {
                    let built: DualHashMap<E::Key, &'e E> = entities
                        .iter()
                        .map(|entity| (entity.id().clone(), *entity))
                        .collect();

                    emit_listed(&entities, keys, built.len(), |key| built.get(key).copied())
                }
            };

            if let Some(emitted) = emitted {
                self.reporter
                    .report(DiagnosticKind::ExplicitSequenceFastPath { listed: keys.len() });

                return emitted;
            }
        }

        self.order_by_rank(entities, keys)
    }

    // General path: stable sort by first position in the list.
    fn order_by_rank<'e, E: EntityKind>(&self, entities: Vec<&'e E>, keys: &[E::Key]) -> Vec<&'e E> {
        let mut ranks: DualHashMap<E::Key, usize> = DualHashMap::with_capacity(keys.len());
        for (rank, key) in keys.iter().enumerate() {
            if !ranks.contains_key(key) {
                ranks.insert(key.clone(), rank);
            }
        }

        let ranked: Vec<(usize, &'e E)> = entities
            .into_iter()
            .map(|entity| {
                let rank = ranks.get(entity.id()).copied().unwrap_or(UNLISTED_RANK);
                (rank, entity)
            })
            .collect();

        let unlisted = ranked.iter().filter(|(rank, _)| *rank == UNLISTED_RANK).count();
        if unlisted > 0 {
            self.reporter
                .report(DiagnosticKind::UnlistedIdentifiers { count: unlisted });
        }

        stable_sort_by(ranked, |a, b| a.0 < b.0)
            .into_iter()
            .map(|(_, entity)| entity)
            .collect()
    }
}

impl Default for OrderingEngine<'_> {
    fn default() -> Self {
        Self::new(&NOOP_SINK)
    }
}

// Emit listed entities straight from the index when it holds exactly the
// input set and the list resolves every one of them. `None` otherwise.
fn emit_listed<'e, E, F>(
    entities: &[&'e E],
    keys: &[E::Key],
    index_len: usize,
    lookup: F,
) -> Option<Vec<&'e E>>
where
    E: EntityKind,
    F: Fn(&E::Key) -> Option<&'e E>,
{
    if index_len != entities.len() || keys.len() < entities.len() {
        return None;
    }
    if !entities.iter().all(|entity| lookup(entity.id()).is_some()) {
        return None;
    }

    let mut seen = DualHashSet::new();
    let emitted: Vec<&'e E> = keys
        .iter()
        .filter(|key| seen.insert((*key).clone()))
        .filter_map(|key| lookup(key))
        .collect();

    (emitted.len() == entities.len()).then_some(emitted)
}

fn sort_by_attribute<'e, E: EntityKind>(
    entities: Vec<&'e E>,
    attribute: E::Attribute,
    descending: bool,
) -> Vec<&'e E> {
    let keyed: Vec<(Option<IndexedValue>, &'e E)> = entities
        .into_iter()
        .map(|entity| (entity.attribute_value(attribute), entity))
        .collect();

    let sorted = if descending {
        stable_sort_by(keyed, |a, b| slot_less_than(b.0.as_ref(), a.0.as_ref()))
    } else {
        stable_sort_by(keyed, |a, b| slot_less_than(a.0.as_ref(), b.0.as_ref()))
    };

    sorted.into_iter().map(|(_, entity)| entity).collect()
}
