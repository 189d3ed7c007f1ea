use crate::{
    db::predicate::{
        ast::{Operator, Predicate, PropertyRef},
        pattern::match_slots,
    },
    model::{EntityKey, EntityKind},
    obs::{DiagnosticKind, DiagnosticsSink, NOOP_SINK, Reporter, Severity},
    value::{IndexedValue, partial_cmp_slots},
};
use std::cmp::Ordering;

///
/// EvalResult
///
/// Tri-kind result of evaluating one tree node. Sub-expressions carry typed
/// operands up to the comparison that consumes them.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvalResult<K> {
    Bool(bool),
    Identifier(K),
    Value(Option<IndexedValue>),
}

impl<K: EntityKey> EvalResult<K> {
    /// Boolean truth, if this result has one.
    ///
    /// `Bool(b)` and a boolean value are truthy as `b`; every other result has
    /// no truth value.
    #[must_use]
    pub const fn truth(&self) -> Option<bool> {
        match self {
            Self::Bool(b) | Self::Value(Some(IndexedValue::Bool(b))) => Some(*b),
            _ => None,
        }
    }

    /// Operand form used by comparisons.
    #[must_use]
    pub fn into_value(self) -> Option<IndexedValue> {
        match self {
            Self::Bool(b) => Some(IndexedValue::Bool(b)),
            Self::Identifier(key) => Some(key.to_value()),
            Self::Value(value) => value,
        }
    }
}

///
/// PredicateEvaluator
///
/// Pure (predicate, entity) evaluation. Never panics and never fails:
/// malformed shapes degrade to `false` and report a diagnostic.
///

#[derive(Clone, Copy, Debug)]
pub struct PredicateEvaluator<'s> {
    reporter: Reporter<'s>,
}

impl<'s> PredicateEvaluator<'s> {
    #[must_use]
    pub fn new(sink: &'s dyn DiagnosticsSink) -> Self {
        Self::with_severity(sink, Severity::Debug)
    }

    /// Evaluator that drops diagnostics below `min_severity`.
    #[must_use]
    pub fn with_severity(sink: &'s dyn DiagnosticsSink, min_severity: Severity) -> Self {
        Self {
            reporter: Reporter::new(sink, min_severity),
        }
    }

    pub(crate) const fn from_reporter(reporter: Reporter<'s>) -> Self {
        Self { reporter }
    }

    /// Evaluate a tree against one entity.
    pub fn evaluate<E: EntityKind>(
        &self,
        predicate: &Predicate<E::Attribute>,
        entity: &E,
    ) -> EvalResult<E::Key> {
        match predicate {
            Predicate::Binary { left, op, right } => {
                EvalResult::Bool(self.eval_binary(left, *op, right, entity))
            }
            Predicate::Negate(child) => EvalResult::Bool(!self.truth_of(child, entity, "negate")),
            Predicate::Property(PropertyRef::Identifier) => {
                EvalResult::Identifier(entity.id().clone())
            }
            Predicate::Property(PropertyRef::Attribute(attribute)) => {
                EvalResult::Value(entity.attribute_value(*attribute))
            }
            Predicate::Literal(value) => EvalResult::Value(value.clone()),

            // a set only means something under ContainedIn
            Predicate::LiteralSet(_) => EvalResult::Bool(true),
        }
    }

    /// Truthiness of `evaluate`; non-boolean results are false.
    pub fn matches<E: EntityKind>(&self, predicate: &Predicate<E::Attribute>, entity: &E) -> bool {
        self.evaluate(predicate, entity).truth().unwrap_or(false)
    }

    fn eval_binary<E: EntityKind>(
        &self,
        left: &Predicate<E::Attribute>,
        op: Operator,
        right: &Predicate<E::Attribute>,
        entity: &E,
    ) -> bool {
        match op {
            Operator::ContainedIn => self.eval_contained_in(left, right, entity),
            Operator::And => {
                self.truth_of(left, entity, op.label()) && self.truth_of(right, entity, op.label())
            }
            Operator::Or => {
                self.truth_of(left, entity, op.label()) || self.truth_of(right, entity, op.label())
            }
            Operator::Equal
            | Operator::Match
            | Operator::LessThan
            | Operator::LessThanOrEqual
            | Operator::GreaterThan
            | Operator::GreaterThanOrEqual => {
                let left = self.evaluate(left, entity).into_value();
                let right = self.evaluate(right, entity).into_value();

                self.compare(op, left.as_ref(), right.as_ref())
            }
        }
    }

    fn compare(&self, op: Operator, left: Option<&IndexedValue>, right: Option<&IndexedValue>) -> bool {
        let ordering = || partial_cmp_slots(left, right);

        match op {
            Operator::Equal => left == right,
            Operator::Match => match_slots(&self.reporter, left, right),
            Operator::LessThan => ordering().is_some_and(Ordering::is_lt),
            Operator::LessThanOrEqual => ordering().is_some_and(Ordering::is_le),
            Operator::GreaterThan => ordering().is_some_and(Ordering::is_gt),
            Operator::GreaterThanOrEqual => ordering().is_some_and(Ordering::is_ge),
            Operator::And | Operator::Or | Operator::ContainedIn => false,
        }
    }

    // Only `property in set` and `set in property` are meaningful.
    fn eval_contained_in<E: EntityKind>(
        &self,
        left: &Predicate<E::Attribute>,
        right: &Predicate<E::Attribute>,
        entity: &E,
    ) -> bool {
        match (left, right) {
            (Predicate::Property(property), Predicate::LiteralSet(set))
            | (Predicate::LiteralSet(set), Predicate::Property(property)) => {
                set.contains(&property_value(property, entity))
            }
            _ => {
                self.reporter.report(DiagnosticKind::NonCanonicalContainedIn);
                false
            }
        }
    }

    fn truth_of<E: EntityKind>(
        &self,
        predicate: &Predicate<E::Attribute>,
        entity: &E,
        operator: &'static str,
    ) -> bool {
        self.evaluate(predicate, entity).truth().unwrap_or_else(|| {
            self.reporter
                .report(DiagnosticKind::NonBooleanOperand { operator });
            false
        })
    }
}

impl Default for PredicateEvaluator<'_> {
    fn default() -> Self {
        Self::new(&NOOP_SINK)
    }
}

fn property_value<E: EntityKind>(
    property: &PropertyRef<E::Attribute>,
    entity: &E,
) -> Option<IndexedValue> {
    match property {
        PropertyRef::Identifier => Some(entity.id().to_value()),
        PropertyRef::Attribute(attribute) => entity.attribute_value(*attribute),
    }
}
