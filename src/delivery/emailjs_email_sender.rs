use crate::censoredstring::CensoredString;
use crate::configuration::EmailJsSettings;
use crate::delivery::{DeliveryError, MailDelivery, TemplateParams};
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use std::time::Duration;

static SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Delivers contact messages through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsEmailSender {
    http_client: Client,
    send_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
    access_token: Option<CensoredString>,
    timeout: Duration,
}

impl EmailJsEmailSender {
    pub fn new(settings: &EmailJsSettings) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            http_client,
            send_url: format!("{}{}", settings.base_url.trim_end_matches('/'), SEND_PATH),
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
            public_key: settings.public_key.clone(),
            access_token: settings.access_token.clone(),
            timeout: settings.timeout(),
        })
    }

    pub fn send_url(&self) -> &str {
        &self.send_url
    }

    #[tracing::instrument(
        name = "Sending contact message through EmailJS",
        skip(self, params),
        fields(
            service_id = %self.service_id,
            template_id = %self.template_id,
            access_token = ?self.access_token,
        )
    )]
    pub async fn send_email(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
        let request = SendEmailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
            access_token: self.access_token.as_ref().map(CensoredString::expose),
        };
        let response = self
            .http_client
            .post(&self.send_url)
            .json(&request)
            .send()
            .await
            .map_err(|error| self.transport_error(error))?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!("EmailJS accepted the message with status {}.", status);
            return Ok(());
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|error| format!("unreadable response body: {}", error));
        Err(DeliveryError::Service {
            status: status.as_u16(),
            message,
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> DeliveryError {
        if error.is_timeout() {
            DeliveryError::Timeout(self.timeout)
        } else {
            DeliveryError::Network(error.to_string())
        }
    }
}

impl MailDelivery for EmailJsEmailSender {
    fn send<'a>(&'a self, params: &'a TemplateParams) -> BoxFuture<'a, Result<(), DeliveryError>> {
        self.send_email(params).boxed()
    }
}
