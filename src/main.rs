use anyhow::Context;
use portfolio_contact::{
    configuration::{get_configuration, Settings},
    contact::ContactFormData,
    delivery::EmailJsEmailSender,
    form::{ContactForm, FormStatus},
    notification::{Notification, NotificationSurface},
    pipeline::{ContactPipeline, PipelineSettings},
    telemetry::{get_subscriber, init_subscriber},
};
use std::io::Read;
use time::OffsetDateTime;

// Prints each notification as one JSON line on stdout; logs go to stderr.
struct StdoutNotifications;

impl NotificationSurface for StdoutNotifications {
    fn notify(&self, notification: Notification) {
        match serde_json::to_string(&notification) {
            Ok(json) => println!("{}", json),
            Err(error) => tracing::error!("Failed to serialize notification: {}", error),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_file: &str = "configuration";
    let configuration: Settings = get_configuration(config_file)
        .with_context(|| format!("Failed to read configuration file \"{}\"", config_file))?;
    init_subscriber(get_subscriber(&configuration.telemetry, std::io::stderr))?;

    // One application/x-www-form-urlencoded body, as the browser would post it.
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("Failed to read contact form body from stdin")?;
    let values: ContactFormData = serde_urlencoded::from_str(body.trim())
        .context("Failed to decode contact form body")?;

    let sender = EmailJsEmailSender::new(&configuration.emailjs)
        .context("Failed to build EmailJS HTTP client")?;
    let pipeline_settings = PipelineSettings {
        cooldown: configuration.submission.cooldown(),
        delivery_timeout: configuration.submission.delivery_timeout(),
        recipient_name: configuration.recipient.name.clone(),
    };
    let mut form = ContactForm::new(
        ContactPipeline::new(sender, pipeline_settings),
        StdoutNotifications,
    )
    .with_direct_email(configuration.recipient.direct_email.clone());
    form.set_values(values);

    let status = form.submit(OffsetDateTime::now_utc()).await;
    for error in form.errors().iter() {
        println!("{}", serde_json::to_string(error)?);
    }
    match status {
        FormStatus::Sent | FormStatus::Discarded => Ok(()),
        FormStatus::Failed
        | FormStatus::Invalid
        | FormStatus::RateLimited { .. }
        | FormStatus::Busy => std::process::exit(1),
    }
}
