//! Two-part hashing contract shared by values, identifiers, and the dual-hash
//! collections.

use crate::{types::RelationshipId, value::ValueTag};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Stable XXH3 seed used by every payload digest.
pub(crate) const HASH_SEED: u64 = 0;

///
/// DualHash
///
/// A key that contributes a two-part hash: a discriminating part (the variant
/// or type tag) and a payload part.
///
/// Contract: `a == b` implies `a.dual_hash() == b.dual_hash()`. Unequal keys
/// may share both parts; collections resolve such collisions with `Eq`.
///

pub trait DualHash {
    fn dual_hash(&self) -> (u64, u64);
}

/// Digest arbitrary payload bytes with the stable seed.
#[must_use]
pub(crate) fn digest_bytes(bytes: &[u8]) -> u64 {
    xxh3_64_with_seed(bytes, HASH_SEED)
}

// Key type tags live above the value tag range so a raw key never shares a
// discriminating part with a value of another kind.
const KEY_TAG_U64: u64 = 0x100;
const KEY_TAG_I64: u64 = 0x101;
const KEY_TAG_TEXT: u64 = 0x102;
const KEY_TAG_RELATIONSHIP: u64 = 0x103;

impl DualHash for u64 {
    fn dual_hash(&self) -> (u64, u64) {
        (KEY_TAG_U64, *self)
    }
}

impl DualHash for i64 {
    fn dual_hash(&self) -> (u64, u64) {
        (KEY_TAG_I64, u64::from_be_bytes(self.to_be_bytes()))
    }
}

impl DualHash for String {
    fn dual_hash(&self) -> (u64, u64) {
        (KEY_TAG_TEXT, digest_bytes(self.as_bytes()))
    }
}

impl DualHash for RelationshipId {
    fn dual_hash(&self) -> (u64, u64) {
        (KEY_TAG_RELATIONSHIP, digest_bytes(self.as_str().as_bytes()))
    }
}

impl<T: DualHash> DualHash for Option<T> {
    fn dual_hash(&self) -> (u64, u64) {
        match self {
            Some(inner) => inner.dual_hash(),
            None => (u64::from(ValueTag::MISSING), 0),
        }
    }
}

impl<T: DualHash + ?Sized> DualHash for &T {
    fn dual_hash(&self) -> (u64, u64) {
        (**self).dual_hash()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_keys_share_both_parts() {
        assert_eq!("a".to_string().dual_hash(), "a".to_string().dual_hash());
        assert_eq!(7u64.dual_hash(), 7u64.dual_hash());
        assert_eq!(
            RelationshipId::new("r1").dual_hash(),
            RelationshipId::new("r1").dual_hash()
        );
    }

    #[test]
    fn key_kinds_use_distinct_tags() {
        assert_ne!(1u64.dual_hash().0, 1i64.dual_hash().0);
        assert_ne!(
            "r1".to_string().dual_hash().0,
            RelationshipId::new("r1").dual_hash().0
        );
    }

    #[test]
    fn missing_slot_hashes_to_reserved_tag() {
        assert_eq!(None::<u64>.dual_hash(), (0, 0));
        assert_eq!(Some(5u64).dual_hash(), 5u64.dual_hash());
    }
}
