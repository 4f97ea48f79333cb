use regex::Regex;
use std::convert::AsRef;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::LazyLock;

pub static EMAIL_REQUIRED: &str = "Email is required";
pub static EMAIL_INVALID: &str = "Invalid email address";

// Same shape the contact page validates against: local part, '@', a dotted
// domain and an alphabetic top-level domain of two or more letters.
static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFilteredEmail(String);

impl ContactFilteredEmail {
    pub fn new(email: &str) -> Result<Self, String> {
        Self::parse(email)
    }
    pub fn parse(email: &str) -> Result<Self, String> {
        let trimmed_email = email.trim();
        if trimmed_email.is_empty() {
            return Err(EMAIL_REQUIRED.to_owned());
        }
        if EMAIL_FORMAT.is_match(trimmed_email) {
            Ok(Self(trimmed_email.to_owned()))
        } else {
            Err(EMAIL_INVALID.to_owned())
        }
    }
}

impl AsRef<str> for ContactFilteredEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ContactFilteredEmail {
    type Target = String;
    fn deref(&self) -> &String {
        &self.0
    }
}

impl fmt::Display for ContactFilteredEmail {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ContactFilteredEmail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactFilteredEmail, EMAIL_INVALID, EMAIL_REQUIRED};
    use claims::{assert_err, assert_ok};

    #[test]
    fn email_rejects_empty_input() {
        assert_eq!(Err(EMAIL_REQUIRED.to_owned()), ContactFilteredEmail::parse(""));
        assert_eq!(
            Err(EMAIL_REQUIRED.to_owned()),
            ContactFilteredEmail::parse(" \t\n")
        );
    }

    #[test]
    fn email_rejects_missing_at_symbol() {
        assert_eq!(
            Err(EMAIL_INVALID.to_owned()),
            ContactFilteredEmail::parse("ava.example.com")
        );
    }

    #[test]
    fn email_rejects_missing_local_part() {
        assert_err!(ContactFilteredEmail::parse("@example.com"));
    }

    #[test]
    fn email_rejects_single_letter_top_level_domain() {
        assert_err!(ContactFilteredEmail::parse("ava@example.c"));
    }

    #[test]
    fn email_rejects_intermediate_whitespace() {
        assert_err!(ContactFilteredEmail::parse("ava @example.com"));
    }

    #[test]
    fn email_accepts_mixed_case_and_keeps_it() {
        let email = assert_ok!(ContactFilteredEmail::parse("Ava.Smith+site@Example.COM"));
        assert_eq!("Ava.Smith+site@Example.COM", email.as_ref());
    }

    #[test]
    fn email_is_trimmed() {
        let email = assert_ok!("  ava@example.com \n".parse::<ContactFilteredEmail>());
        assert_eq!("ava@example.com", email.as_str());
    }
}
