//! Scalar payload types carried by `IndexedValue` variants.

mod color;
mod date;
mod duration;
mod float;
mod pattern;
mod relationship;
mod subtype;
mod url;

pub use color::Color;
pub use date::Date;
pub use duration::Duration;
pub use float::{Float32, Float64};
pub use pattern::Pattern;
pub use relationship::RelationshipId;
pub use subtype::SubtypeCode;
pub use url::Url;
