//! Core runtime for sift: indexed values, predicate trees and their
//! evaluator, the ordering engine, dual-hash collections, and the collection
//! query façade, plus the vocabulary exported via the `prelude`.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod collection;
pub mod config;
pub mod db;
pub mod error;
pub mod hash;
pub mod model;
pub mod obs;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only query vocabulary.
/// No sinks, collections internals, or config loaders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{
            order::{OrderBy, OrderCriterion},
            predicate::{Operator, Predicate, PropertyRef},
            query::{EntityMap, OrderedEntityMap, QueryEngine, entity_map, ordered_entity_map},
        },
        model::{AttributeKind, EntityKey, EntityKind},
        value::IndexedValue,
    };
}
