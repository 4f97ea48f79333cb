mod contact_filtered_email;
mod contact_filtered_message;
mod contact_filtered_name;
mod contact_form_data;
mod field;
mod schema;

pub use contact_filtered_email::ContactFilteredEmail;
pub use contact_filtered_message::ContactFilteredMessage;
pub use contact_filtered_name::ContactFilteredName;
pub use contact_form_data::{ContactFormData, FormInput};
pub use field::{Field, FieldError, ValidationErrors};
pub use schema::{FieldRule, FieldValidator, FormSchema};
