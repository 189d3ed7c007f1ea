//! Multi-key ordering of entity sequences.
//!
//! A criteria list is applied as a chain of single-key stable passes, from
//! the lowest-priority criterion to the highest, so ties at each level keep
//! the order established by the levels below it.

mod criterion;
mod engine;
mod stable;

#[cfg(test)]
mod tests;

pub use criterion::{OrderBy, OrderCriterion};
pub use engine::OrderingEngine;
