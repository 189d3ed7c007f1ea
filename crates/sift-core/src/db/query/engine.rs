use crate::{
    config::QueryOptions,
    db::{
        order::{OrderBy, OrderingEngine},
        predicate::{Predicate, PredicateEvaluator, extract_identifiers},
        query::source::EntitySource,
    },
    model::{EntityKey, EntityKind},
    obs::{DiagnosticKind, DiagnosticsSink, NOOP_SINK, Reporter},
};

///
/// QueryEngine
///
/// Entry point for `filter`, `order` and `query` over any `EntitySource`.
///
/// Options only pick between equivalent algorithms; results never depend on
/// them.
///

#[derive(Clone, Copy, Debug)]
pub struct QueryEngine<'s> {
    reporter: Reporter<'s>,
    options: QueryOptions,
}

impl<'s> QueryEngine<'s> {
    #[must_use]
    pub fn new(sink: &'s dyn DiagnosticsSink) -> Self {
        Self::with_options(sink, QueryOptions::default())
    }

    #[must_use]
    pub const fn with_options(sink: &'s dyn DiagnosticsSink, options: QueryOptions) -> Self {
        Self {
            reporter: Reporter::new(sink, options.min_severity),
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &QueryOptions {
        &self.options
    }

    #[must_use]
    pub const fn evaluator(&self) -> PredicateEvaluator<'s> {
        PredicateEvaluator::from_reporter(self.reporter)
    }

    #[must_use]
    pub const fn ordering(&self) -> OrderingEngine<'s> {
        OrderingEngine::from_reporter(self.reporter, self.options.explicit_sequence_fast_path)
    }

    /// Entities satisfying `predicate`.
    ///
    /// `None` returns every entity in source order (unspecified for
    /// `EntityMap`). On keyed sources an OR of identifier equalities is
    /// answered by lookups in list order; identifiers with no entity are
    /// dropped.
    pub fn filter<'e, E, S>(
        &self,
        source: &'e S,
        predicate: Option<&Predicate<E::Attribute>>,
    ) -> Vec<&'e E>
    where
        E: EntityKind,
        S: EntitySource<E> + ?Sized,
    {
        let Some(predicate) = predicate else {
            return source.entities().collect();
        };

        if let Some(found) = self.lookup_identifiers(source, predicate) {
            return found;
        }

        let evaluator = self.evaluator();

        source
            .entities()
            .filter(|entity| evaluator.matches(predicate, *entity))
            .collect()
    }

    /// Entities ordered by `criteria`, using the source's identifier index
    /// when it has one.
    pub fn order<'e, E, S>(&self, source: &'e S, criteria: &[OrderBy<E>]) -> Vec<&'e E>
    where
        E: EntityKind,
        S: EntitySource<E> + ?Sized,
    {
        self.ordering()
            .order(source.entities().collect(), criteria, source.id_index())
    }

    /// `filter` followed by `order`.
    pub fn query<'e, E, S>(
        &self,
        source: &'e S,
        predicate: Option<&Predicate<E::Attribute>>,
        criteria: &[OrderBy<E>],
    ) -> Vec<&'e E>
    where
        E: EntityKind,
        S: EntitySource<E> + ?Sized,
    {
        let filtered = self.filter(source, predicate);

        self.ordering().order(filtered, criteria, source.id_index())
    }

    /// Identifiers named by an OR-of-identifier-equality predicate, or `None`
    /// when the predicate has any other shape.
    #[must_use]
    pub fn extract_identifiers<A, K: EntityKey>(&self, predicate: &Predicate<A>) -> Option<Vec<K>> {
        extract_identifiers(predicate)
    }

    fn lookup_identifiers<'e, E, S>(
        &self,
        source: &'e S,
        predicate: &Predicate<E::Attribute>,
    ) -> Option<Vec<&'e E>>
    where
        E: EntityKind,
        S: EntitySource<E> + ?Sized,
    {
        if !self.options.identifier_fast_path {
            return None;
        }

        let index = source.id_index()?;
        let keys: Vec<E::Key> = extract_identifiers(predicate)?;
        let found: Vec<&'e E> = keys.iter().filter_map(|key| index.lookup(key)).collect();

        self.reporter.report(DiagnosticKind::IdentifierFastPath {
            requested: keys.len(),
            found: found.len(),
        });

        Some(found)
    }
}

impl Default for QueryEngine<'_> {
    fn default() -> Self {
        Self::new(&NOOP_SINK)
    }
}
