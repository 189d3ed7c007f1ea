//! Query layer: predicate trees and their evaluator, the ordering engine,
//! and the collection façade that ties them to entity containers.

pub mod order;
pub mod predicate;
pub mod query;
