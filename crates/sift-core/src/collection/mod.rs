//! Collision-aware collections keyed by `DualHash`.
//!
//! Buckets are addressed by the full two-part hash; equality resolves
//! collisions inside a bucket. Values whose hashes collide on purpose
//! (every array) still behave as distinct keys.

mod index;
mod map;
mod ordered;
mod set;


pub use index::IdIndex;
pub use map::DualHashMap;
pub use ordered::OrderedDualHashMap;
pub use set::DualHashSet;

type Bucket = (u64, u64);
