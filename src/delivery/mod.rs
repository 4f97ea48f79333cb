mod emailjs_email_sender;

pub use emailjs_email_sender::EmailJsEmailSender;

use futures::future::BoxFuture;
use std::time::Duration;

/// Variables interpolated into the delivery service's email template.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("network error while contacting the mail service: {0}")]
    Network(String),
    #[error("mail service answered {status}: {message}")]
    Service { status: u16, message: String },
    #[error("mail service did not answer within {0:?}")]
    Timeout(Duration),
}

/// Outbound mail capability. Implementations are configured with whatever
/// identifies the sending account and template; callers only supply the
/// template variables.
pub trait MailDelivery: Send + Sync {
    fn send<'a>(&'a self, params: &'a TemplateParams) -> BoxFuture<'a, Result<(), DeliveryError>>;
}
