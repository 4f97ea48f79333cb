#![allow(dead_code)]

use futures::future::{self, BoxFuture, FutureExt};
use portfolio_contact::{
    configuration::TelemetrySettings,
    contact::{ContactFormData, FormInput, FormSchema},
    delivery::{DeliveryError, MailDelivery, TemplateParams},
    notification::{Notification, NotificationSurface},
    pipeline::{ContactPipeline, PipelineSettings},
    telemetry::{get_subscriber, init_subscriber},
};
use std::sync::{LazyLock, Mutex};
use std::time::Duration;
use time::OffsetDateTime;

pub static RECIPIENT: &str = "Portfolio Owner";

// Subscriber can only be installed once per test binary.
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let settings = TelemetrySettings {
        name: "test".to_owned(),
        level: "debug".to_owned(),
    };
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(&settings, std::io::stdout))
            .expect("Failed to initialize subscriber to stdout");
    } else {
        init_subscriber(get_subscriber(&settings, std::io::sink))
            .expect("Failed to initialize subscriber");
    }
});

pub fn init_tracing() {
    LazyLock::force(&TRACING);
}

/// Answers every send with the same result and remembers what it was given.
pub struct RecordingDelivery {
    result: Result<(), DeliveryError>,
    sent: Mutex<Vec<TemplateParams>>,
}

impl RecordingDelivery {
    pub fn succeeding() -> Self {
        Self {
            result: Ok(()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DeliveryError) -> Self {
        Self {
            result: Err(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent.lock().unwrap().clone()
    }
}

impl MailDelivery for RecordingDelivery {
    fn send<'a>(&'a self, params: &'a TemplateParams) -> BoxFuture<'a, Result<(), DeliveryError>> {
        self.sent.lock().unwrap().push(params.clone());
        future::ready(self.result.clone()).boxed()
    }
}

/// Never answers.
pub struct HangingDelivery;

impl MailDelivery for HangingDelivery {
    fn send<'a>(&'a self, _params: &'a TemplateParams) -> BoxFuture<'a, Result<(), DeliveryError>> {
        future::pending().boxed()
    }
}

#[derive(Default)]
pub struct RecordingNotifications {
    shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifications {
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }
}

impl NotificationSurface for RecordingNotifications {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

pub fn pipeline<D: MailDelivery>(delivery: D) -> ContactPipeline<D> {
    pipeline_with_timeout(delivery, Duration::from_secs(5))
}

pub fn pipeline_with_timeout<D: MailDelivery>(
    delivery: D,
    delivery_timeout: Duration,
) -> ContactPipeline<D> {
    let settings = PipelineSettings {
        delivery_timeout,
        ..PipelineSettings::new(RECIPIENT)
    };
    ContactPipeline::new(delivery, settings)
}

pub fn form_values(name: &str, email: &str, message: &str) -> ContactFormData {
    ContactFormData {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
        website: String::new(),
    }
}

pub fn form_input(name: &str, email: &str, message: &str) -> FormInput {
    form_values(name, email, message)
        .validate(&FormSchema::contact())
        .expect("Test input should pass structural validation")
}

pub fn valid_input() -> FormInput {
    form_input("Ava", "ava@example.com", "Hello")
}

pub fn at_millis(millis: u64) -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + Duration::from_millis(millis)
}
