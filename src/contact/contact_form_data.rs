use crate::contact::contact_filtered_email::ContactFilteredEmail;
use crate::contact::contact_filtered_message::ContactFilteredMessage;
use crate::contact::contact_filtered_name::ContactFilteredName;
use crate::contact::field::{Field, FieldError, ValidationErrors};
use crate::contact::schema::FormSchema;

/// Raw values as typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Decoy input hidden from people; anything typed here came from a bot.
    pub website: String,
}

impl ContactFormData {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn decoy(&self) -> &str {
        &self.website
    }

    pub fn validate(&self, schema: &FormSchema) -> Result<FormInput, ValidationErrors> {
        schema.check(self)?;
        FormInput::try_from(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub name: ContactFilteredName,
    pub email: ContactFilteredEmail,
    pub message: ContactFilteredMessage,
}

impl TryFrom<&ContactFormData> for FormInput {
    type Error = ValidationErrors;

    fn try_from(values: &ContactFormData) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();
        let name = ContactFilteredName::parse(&values.name)
            .map_err(|message| errors.push(FieldError::new(Field::Name, message)))
            .ok();
        let email = ContactFilteredEmail::parse(&values.email)
            .map_err(|message| errors.push(FieldError::new(Field::Email, message)))
            .ok();
        let message = ContactFilteredMessage::parse(&values.message)
            .map_err(|message| errors.push(FieldError::new(Field::Message, message)))
            .ok();
        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactFormData, FormInput};
    use crate::contact::{Field, FormSchema};
    use claims::{assert_err, assert_ok};

    #[test]
    fn url_encoded_body_fills_missing_fields_with_empty_values() {
        let values: ContactFormData =
            serde_urlencoded::from_str("name=Ava&email=ava%40example.com").unwrap();
        assert_eq!("ava@example.com", values.email);
        assert_eq!("", values.message);
        assert_eq!("", values.decoy());
    }

    #[test]
    fn validate_builds_trimmed_form_input() {
        let values = ContactFormData {
            name: " Ava ".to_owned(),
            email: "ava@example.com".to_owned(),
            message: "Hello\n".to_owned(),
            website: String::new(),
        };
        let input = assert_ok!(values.validate(&FormSchema::contact()));
        assert_eq!("Ava", input.name.as_ref());
        assert_eq!("Hello", input.message.as_ref());
    }

    #[test]
    fn typed_conversion_still_guards_a_permissive_schema() {
        let values = ContactFormData {
            email: "not-an-email".to_owned(),
            ..ContactFormData::default()
        };
        let errors = assert_err!(values.validate(&FormSchema::empty()));
        assert_eq!(3, errors.len());
        assert!(errors.get(Field::Email).is_some());
        assert_err!(FormInput::try_from(&values));
    }
}
