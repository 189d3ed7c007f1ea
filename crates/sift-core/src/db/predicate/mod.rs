//! Predicate trees and their evaluation against single entities.

mod ast;
mod eval;
mod extract;
mod pattern;


pub use ast::{Operator, Predicate, PropertyRef, ValueSet};
pub use eval::{EvalResult, PredicateEvaluator};
pub use extract::extract_identifiers;
