//! Query engine options.
//!
//! Options only choose between equivalent algorithms and filter diagnostics;
//! no option changes which entities a query returns or their order.

use crate::{error::Error, obs::Severity};
use serde::{Deserialize, Serialize};

///
/// QueryOptions
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryOptions {
    /// Answer OR-of-identifier-equality filters on keyed collections by lookup.
    pub identifier_fast_path: bool,

    /// Emit explicit identifier orderings straight from the identifier map
    /// when it covers the whole input.
    pub explicit_sequence_fast_path: bool,

    /// Diagnostics below this severity are dropped before reaching the sink.
    pub min_severity: Severity,
}

impl QueryOptions {
    /// Options with both fast paths disabled; used to cross-check results.
    #[must_use]
    pub const fn without_fast_paths() -> Self {
        Self {
            identifier_fast_path: false,
            explicit_sequence_fast_path: false,
            min_severity: Severity::Debug,
        }
    }

    /// Parse options from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        toml::from_str(text).map_err(|err| Error::invalid_config(err.to_string()))
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            identifier_fast_path: true,
            explicit_sequence_fast_path: true,
            min_severity: Severity::Debug,
        }
    }
}

///
/// TESTS
///
