use crate::{
    hash::{DualHash, HASH_SEED},
    value::IndexedValue,
};
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

/// Payload half shared by every `Array` value.
///
/// Arrays are excluded from structural hashing: all arrays collide on this
/// constant and equality decides membership. Keep it fixed.
pub const ARRAY_HASH_PAYLOAD: u64 = 0xA77A_7A77_A77A_7A77;

fn feed_u8(h: &mut Xxh3, x: u8) {
    h.update(&[x]);
}
fn feed_u32(h: &mut Xxh3, x: u32) {
    h.update(&x.to_be_bytes());
}
fn feed_i64(h: &mut Xxh3, x: i64) {
    h.update(&x.to_be_bytes());
}
fn feed_bytes(h: &mut Xxh3, b: &[u8]) {
    h.update(b);
}

#[expect(clippy::cast_possible_truncation)]
fn feed_text(h: &mut Xxh3, s: &str) {
    feed_u32(h, s.len() as u32);
    feed_bytes(h, s.as_bytes());
}

// Scalar payload digest. Arrays never reach this point.
fn payload_hash(value: &IndexedValue) -> u64 {
    let mut h = Xxh3::with_seed(HASH_SEED);

    match value {
        IndexedValue::String(s) => feed_text(&mut h, s),
        IndexedValue::Integer(i) => feed_i64(&mut h, *i),
        IndexedValue::Double(v) => feed_bytes(&mut h, &v.to_be_bytes()),
        IndexedValue::Float(v) => feed_bytes(&mut h, &v.to_be_bytes()),
        IndexedValue::Relationship(r) => feed_text(&mut h, r.as_str()),
        IndexedValue::Subtype(s) => feed_u32(&mut h, s.get()),
        IndexedValue::Bool(b) => feed_u8(&mut h, u8::from(*b)),
        IndexedValue::Date(d) => feed_i64(&mut h, d.unix_millis()),
        IndexedValue::Time(t) => feed_i64(&mut h, t.get()),
        IndexedValue::Url(u) => feed_text(&mut h, u.as_str()),
        IndexedValue::Color(c) => feed_u32(&mut h, c.packed()),
        IndexedValue::Pattern(p) => feed_text(&mut h, p.as_str()),
        IndexedValue::Void => {}
        IndexedValue::Array(_) => return ARRAY_HASH_PAYLOAD,
    }

    h.digest()
}

impl DualHash for IndexedValue {
    fn dual_hash(&self) -> (u64, u64) {
        let tag = u64::from(self.tag().to_u8());

        match self {
            Self::Array(_) => (tag, ARRAY_HASH_PAYLOAD),
            _ => (tag, payload_hash(self)),
        }
    }
}

impl Hash for IndexedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (tag, payload) = self.dual_hash();
        state.write_u64(tag);
        state.write_u64(payload);
    }
}
