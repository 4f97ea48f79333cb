//! Markup stripping applied to every value before it reaches an email
//! template.

use crate::contact::{Field, FormInput};
use ammonia::Builder;
use std::collections::HashSet;

/// Values safe to interpolate into the delivery template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trims the value and removes every tag. Text inside `script` and `style`
/// is dropped with its tag, text inside other tags is kept.
///
/// The result is plain text: entities written by the cleaner are decoded
/// again, escaping is left to the template.
pub fn sanitize_text(value: &str) -> String {
    let cleaned = Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .strip_comments(true)
        .clean(value.trim())
        .to_string();
    html_escape::decode_html_entities(&cleaned).trim().to_owned()
}

/// Sanitizes all three fields, failing on the first one left empty.
pub fn sanitize_input(input: &FormInput) -> Result<SanitizedPayload, Field> {
    let name = sanitize_field(Field::Name, input.name.as_ref())?;
    let email = sanitize_field(Field::Email, input.email.as_ref())?;
    let message = sanitize_field(Field::Message, input.message.as_ref())?;
    Ok(SanitizedPayload {
        name,
        email,
        message,
    })
}

fn sanitize_field(field: Field, value: &str) -> Result<String, Field> {
    let sanitized = sanitize_text(value);
    if sanitized.is_empty() {
        return Err(field);
    }
    Ok(sanitized)
}
