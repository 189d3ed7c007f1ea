use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

///
/// SubtypeCode
///
/// Numeric discriminator for the concrete subtype of a polymorphic entity.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct SubtypeCode(u32);

impl SubtypeCode {
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}
