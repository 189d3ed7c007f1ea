//! ## Crate layout
//! - `core`: runtime value model, predicates, ordering, collections, and
//!   observability.
//! - `config`: query options loadable from TOML.
//! - `error`: construction-time error taxonomy.
//!
//! The `prelude` module carries the query vocabulary callers build filters
//! and orderings from; diagnostics sinks live under `obs`.

pub use sift_core as core;

pub use sift_core::{
    Error, attribute_kind, collection, config, db, error, hash, model, obs, types, value,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        config::QueryOptions,
        db::{
            order::{OrderBy, OrderCriterion},
            predicate::{Predicate, PropertyRef},
            query::{EntityMap, OrderedEntityMap, QueryEngine, entity_map, ordered_entity_map},
        },
        model::{AttributeKind as _, EntityKey, EntityKind},
        value::IndexedValue,
    };
}
