use std::convert::AsRef;
use std::fmt;
use std::str::FromStr;

pub static NAME_REQUIRED: &str = "Name is required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFilteredName(String);

impl ContactFilteredName {
    pub fn new(name: &str) -> Result<Self, String> {
        Self::parse(name)
    }
    pub fn parse(name: &str) -> Result<Self, String> {
        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return Err(NAME_REQUIRED.to_owned());
        }
        Ok(Self(trimmed_name.to_owned()))
    }
}

impl AsRef<str> for ContactFilteredName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContactFilteredName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ContactFilteredName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
