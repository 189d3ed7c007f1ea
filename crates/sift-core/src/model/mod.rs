pub mod entity;

pub use entity::{AttributeKind, EntityKey, EntityKind};
