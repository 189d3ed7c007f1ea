use crate::error::Error;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Url
///
/// Absolute URL text. Only the scheme is validated; the remainder is kept
/// verbatim and compared byte-wise.
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Url(String);

impl Url {
    pub fn parse(text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();

        match text.split_once(':') {
            Some((scheme, _)) if is_valid_scheme(scheme) => Ok(Self(text)),
            _ => Err(Error::invalid_value(format!(
                "url is missing a valid scheme: '{text}'"
            ))),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scheme component, without the trailing `:`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.split_once(':').map_or("", |(scheme, _)| scheme)
    }
}

// RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();

    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl TryFrom<String> for Url {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Url> for String {
    fn from(value: Url) -> Self {
        value.0
    }
}

///
/// TESTS
///
