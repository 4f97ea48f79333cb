use serde::{de, Deserialize};
use std::fmt;

pub static CENSOR_STRING: &str = "***REMOVED***";

/// Holds a credential read from configuration. Formatting, whether through
/// `Debug` in a tracing field or `Display`, only ever shows the
/// representation.
#[derive(Clone, PartialEq, Eq)]
pub struct CensoredString {
    data: String,
    representation: String,
}

impl CensoredString {
    pub fn new<T: Into<String>>(secret: T, representation: Option<&str>) -> Self {
        Self {
            data: secret.into(),
            representation: representation.unwrap_or(CENSOR_STRING).to_owned(),
        }
    }

    /// The secret itself, for the one place that must send it.
    pub fn expose(&self) -> &str {
        &self.data
    }
}

impl From<String> for CensoredString {
    fn from(src: String) -> Self {
        Self::new(src, None)
    }
}

impl<'de> Deserialize<'de> for CensoredString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(CensoredString::from)
    }
}

impl fmt::Debug for CensoredString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.representation, f)
    }
}

impl fmt::Display for CensoredString {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.representation, f)
    }
}
