//! Submission pipeline for the contact form.
//!
//! A validated [`FormInput`] goes through, in order: the decoy check, the
//! cooldown gate, sanitization, the cooldown commit and finally delivery.
//! The first failing stage ends the submission. Nothing before the commit
//! touches [`SubmissionState`], so a rejected attempt never opens a new
//! cooldown window. A failed delivery keeps the window it opened.

use crate::contact::{Field, FormInput, ValidationErrors};
use crate::delivery::{DeliveryError, MailDelivery, TemplateParams};
use crate::rate_limit::{SubmissionState, DEFAULT_COOLDOWN};
use crate::sanitize::sanitize_input;
use std::time::Duration;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub cooldown: Duration,
    pub delivery_timeout: Duration,
    /// Fixed `to_name` sent along with every message.
    pub recipient_name: String,
}

impl PipelineSettings {
    pub fn new<T: Into<String>>(recipient_name: T) -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            delivery_timeout: Duration::from_secs(10),
            recipient_name: recipient_name.into(),
        }
    }
}

/// Terminal result of a submission that reached the delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed(DeliveryError),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Why a submission never reached the delivery service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// Raised by the form, before the pipeline is entered.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("submission discarded: decoy field was filled in")]
    BotDetected,
    #[error("too many submissions, retry after {retry_after_seconds} second(s)")]
    RateLimited {
        retry_after: Duration,
        retry_after_seconds: u64,
    },
    #[error("{0} contains nothing but markup")]
    SanitizationEmptied(Field),
}

pub struct ContactPipeline<D> {
    delivery: D,
    settings: PipelineSettings,
}

impl<D: MailDelivery> ContactPipeline<D> {
    pub fn new(delivery: D, settings: PipelineSettings) -> Self {
        Self { delivery, settings }
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    /// The exclusive borrow of `state` spans the delivery call, so a second
    /// submission for the same form cannot start before this one resolves.
    #[tracing::instrument(
        name = "Submitting contact form",
        skip(self, state, input, decoy),
        fields(submission_count = state.submission_count())
    )]
    pub async fn submit(
        &self,
        state: &mut SubmissionState,
        input: &FormInput,
        decoy: &str,
        now: OffsetDateTime,
    ) -> Result<DeliveryOutcome, SubmissionError> {
        if !decoy.is_empty() {
            tracing::warn!("Discarding contact submission with a filled decoy field.");
            return Err(SubmissionError::BotDetected);
        }

        if let Err(cooldown) = state.check(now, self.settings.cooldown) {
            tracing::info!(
                "Rejecting contact submission inside cooldown window, {:?} left.",
                cooldown.retry_after
            );
            return Err(SubmissionError::RateLimited {
                retry_after: cooldown.retry_after,
                retry_after_seconds: cooldown.retry_after_seconds(),
            });
        }

        let payload = sanitize_input(input).map_err(|field| {
            tracing::info!("Contact submission field {} was only markup.", field);
            SubmissionError::SanitizationEmptied(field)
        })?;

        state.commit(now);

        let params = TemplateParams {
            from_name: payload.name,
            from_email: payload.email,
            message: payload.message,
            to_name: self.settings.recipient_name.clone(),
        };
        let outcome = match tokio::time::timeout(
            self.settings.delivery_timeout,
            self.delivery.send(&params),
        )
        .await
        {
            Ok(Ok(())) => DeliveryOutcome::Delivered,
            Ok(Err(error)) => DeliveryOutcome::Failed(error),
            Err(_) => DeliveryOutcome::Failed(DeliveryError::Timeout(
                self.settings.delivery_timeout,
            )),
        };
        match &outcome {
            DeliveryOutcome::Delivered => tracing::info!("Contact message delivered."),
            DeliveryOutcome::Failed(error) => {
                tracing::error!("Contact message delivery failed: {}", error)
            }
        }
        Ok(outcome)
    }
}
