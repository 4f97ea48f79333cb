use crate::contact::contact_filtered_email::ContactFilteredEmail;
use crate::contact::contact_filtered_message::ContactFilteredMessage;
use crate::contact::contact_filtered_name::ContactFilteredName;
use crate::contact::contact_form_data::ContactFormData;
use crate::contact::field::{Field, FieldError, ValidationErrors};

/// Returns the inline message to show when the value is rejected.
pub type FieldValidator = fn(&str) -> Result<(), String>;

pub struct FieldRule {
    pub field: Field,
    pub validate: FieldValidator,
}

/// Field to validator table, applied to every field before a submission is
/// handed to the pipeline. Every field is checked so each input gets its own
/// message; within a field the first failing rule wins.
pub struct FormSchema {
    rules: Vec<FieldRule>,
}

impl FormSchema {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rule(mut self, field: Field, validate: FieldValidator) -> Self {
        self.rules.push(FieldRule { field, validate });
        self
    }

    /// Required name, required and well-formed email, required message.
    pub fn contact() -> Self {
        Self::empty()
            .rule(Field::Name, |value| ContactFilteredName::parse(value).map(drop))
            .rule(Field::Email, |value| {
                ContactFilteredEmail::parse(value).map(drop)
            })
            .rule(Field::Message, |value| {
                ContactFilteredMessage::parse(value).map(drop)
            })
    }

    pub fn check(&self, values: &ContactFormData) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rule in &self.rules {
            // One message per field, like the inline slot it lands in.
            if errors.get(rule.field).is_some() {
                continue;
            }
            if let Err(message) = (rule.validate)(values.value(rule.field)) {
                errors.push(FieldError::new(rule.field, message));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::contact()
    }
}

#[cfg(test)]
mod tests {
    use super::FormSchema;
    use crate::contact::{ContactFormData, Field};
    use arbitrary::Unstructured;
    use claims::{assert_err, assert_ok};

    fn values(name: &str, email: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
            ..ContactFormData::default()
        }
    }

    #[test]
    fn contact_schema_accepts_complete_form() {
        assert_ok!(FormSchema::contact().check(&values("Ava", "ava@example.com", "Hello")));
    }

    #[test]
    fn contact_schema_reports_every_invalid_field() {
        let errors = assert_err!(FormSchema::contact().check(&values("", "nope", " ")));
        assert_eq!(3, errors.len());
        assert_eq!("Name is required", errors.get(Field::Name).unwrap().message);
        assert_eq!(
            "Invalid email address",
            errors.get(Field::Email).unwrap().message
        );
        assert_eq!(
            "Message is required",
            errors.get(Field::Message).unwrap().message
        );
    }

    #[test]
    fn first_failing_rule_wins_per_field() {
        let schema = FormSchema::empty()
            .rule(Field::Message, |_| Err("first".to_owned()))
            .rule(Field::Message, |_| Err("second".to_owned()));
        let errors = assert_err!(schema.check(&ContactFormData::default()));
        assert_eq!(1, errors.len());
        assert_eq!("first", errors.get(Field::Message).unwrap().message);
    }

    #[test]
    fn empty_schema_accepts_anything() {
        assert_ok!(FormSchema::empty().check(&ContactFormData::default()));
    }

    #[test]
    fn schema_never_panics_on_arbitrary_values() {
        arbtest::arbtest(|u: &mut Unstructured<'_>| {
            let values = values(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?);
            let _ = FormSchema::contact().check(&values);
            Ok(())
        });
    }
}
