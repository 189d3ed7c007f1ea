//! Collection query façade.
//!
//! Adapts the predicate evaluator and the ordering engine to plain sequences
//! and identifier-keyed maps, and applies the identifier fast paths.

mod engine;
mod source;

#[cfg(test)]
mod tests;

pub use engine::QueryEngine;
pub use source::{EntityMap, EntitySource, OrderedEntityMap, entity_map, ordered_entity_map};
