use std::convert::AsRef;
use std::fmt;
use std::str::FromStr;

pub static MESSAGE_REQUIRED: &str = "Message is required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFilteredMessage(String);

impl ContactFilteredMessage {
    pub fn new(message: &str) -> Result<Self, String> {
        Self::parse(message)
    }
    /// Inner line breaks are kept, only surrounding whitespace goes.
    pub fn parse(message: &str) -> Result<Self, String> {
        let trimmed_message = message.trim();
        if trimmed_message.is_empty() {
            return Err(MESSAGE_REQUIRED.to_owned());
        }
        Ok(Self(trimmed_message.to_owned()))
    }
}

impl AsRef<str> for ContactFilteredMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContactFilteredMessage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ContactFilteredMessage {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactFilteredMessage, MESSAGE_REQUIRED};
    use claims::{assert_err, assert_ok};

    #[test]
    fn message_rejects_empty_input() {
        assert_err!(ContactFilteredMessage::new(""));
        assert_eq!(
            Err(MESSAGE_REQUIRED.to_owned()),
            ContactFilteredMessage::new("\n\n")
        );
    }

    #[test]
    fn message_keeps_inner_line_breaks() {
        let message = assert_ok!(ContactFilteredMessage::new("\nHello,\n\nthanks!\n"));
        assert_eq!("Hello,\n\nthanks!", message.as_ref());
    }
}
