use crate::contact::{ContactFormData, Field, FieldError, FormSchema, ValidationErrors};
use crate::delivery::MailDelivery;
use crate::notification::{Notification, NotificationSurface};
use crate::pipeline::{ContactPipeline, DeliveryOutcome, SubmissionError};
use crate::rate_limit::SubmissionState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use time::OffsetDateTime;

/// What the form did with one press of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    /// Delivered; the values were cleared.
    Sent,
    /// Delivery failed; the values were kept for another try.
    Failed,
    /// Field errors were placed in their slots.
    Invalid,
    /// Cooldown still running.
    RateLimited { retry_after_seconds: u64 },
    /// Decoy was filled in; nothing was sent and nothing was shown.
    Discarded,
    /// Another submission holding the same control is still running.
    Busy,
}

/// Shared "submitting" flag behind the send button. Clones observe the same
/// flag, so a renderer can disable the button while a submission is awaited.
#[derive(Debug, Clone, Default)]
pub struct SubmitControl {
    submitting: Arc<AtomicBool>,
}

impl SubmitControl {
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    fn begin(&self) -> Option<SubmittingGuard> {
        self.submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmittingGuard {
                submitting: Arc::clone(&self.submitting),
            })
    }
}

/// Clears the flag when dropped, including when the submit future is.
struct SubmittingGuard {
    submitting: Arc<AtomicBool>,
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        self.submitting.store(false, Ordering::Release);
    }
}

/// Input-collection side of the contact section. Owns the values being
/// edited, one error slot per field and the cooldown state of this mount.
pub struct ContactForm<D, N> {
    values: ContactFormData,
    errors: ValidationErrors,
    control: SubmitControl,
    state: SubmissionState,
    schema: FormSchema,
    pipeline: ContactPipeline<D>,
    notifications: N,
    direct_email: Option<String>,
}

impl<D: MailDelivery, N: NotificationSurface> ContactForm<D, N> {
    pub fn new(pipeline: ContactPipeline<D>, notifications: N) -> Self {
        Self {
            values: ContactFormData::default(),
            errors: ValidationErrors::default(),
            control: SubmitControl::default(),
            state: SubmissionState::new(),
            schema: FormSchema::contact(),
            pipeline,
            notifications,
            direct_email: None,
        }
    }

    pub fn with_direct_email<T: Into<String>>(mut self, direct_email: Option<T>) -> Self {
        self.direct_email = direct_email.map(Into::into);
        self
    }

    pub fn with_schema(mut self, schema: FormSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Shares the send button with other forms; only one of them can be
    /// submitting at a time.
    pub fn with_submit_control(mut self, control: SubmitControl) -> Self {
        self.control = control;
        self
    }

    pub fn values(&self) -> &ContactFormData {
        &self.values
    }

    pub fn set_values(&mut self, values: ContactFormData) {
        self.values = values;
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.control.is_submitting()
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.control.clone()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn pipeline(&self) -> &ContactPipeline<D> {
        &self.pipeline
    }

    pub fn notifications(&self) -> &N {
        &self.notifications
    }

    pub async fn submit(&mut self, now: OffsetDateTime) -> FormStatus {
        let Some(_guard) = self.control.begin() else {
            tracing::info!("Ignoring contact submission while another one is running.");
            return FormStatus::Busy;
        };
        self.run_submission(now).await
    }

    async fn run_submission(&mut self, now: OffsetDateTime) -> FormStatus {
        self.errors = ValidationErrors::default();
        let result = match self.values.validate(&self.schema) {
            Ok(input) => {
                self.pipeline
                    .submit(&mut self.state, &input, self.values.decoy(), now)
                    .await
            }
            Err(errors) => Err(SubmissionError::from(errors)),
        };
        match result {
            Ok(outcome) => {
                self.notifications.notify(Notification::for_outcome(
                    &outcome,
                    self.direct_email.as_deref(),
                ));
                match outcome {
                    DeliveryOutcome::Delivered => {
                        self.values = ContactFormData::default();
                        FormStatus::Sent
                    }
                    DeliveryOutcome::Failed(_) => FormStatus::Failed,
                }
            }
            Err(error) => {
                if let Some(notification) = Notification::for_rejection(&error) {
                    self.notifications.notify(notification);
                }
                match error {
                    SubmissionError::Validation(errors) => {
                        self.errors = errors;
                        FormStatus::Invalid
                    }
                    SubmissionError::SanitizationEmptied(field) => {
                        self.errors = FieldError::new(
                            field,
                            format!("{} must contain text, not only markup", field.label()),
                        )
                        .into();
                        FormStatus::Invalid
                    }
                    SubmissionError::RateLimited {
                        retry_after_seconds,
                        ..
                    } => FormStatus::RateLimited {
                        retry_after_seconds,
                    },
                    SubmissionError::BotDetected => FormStatus::Discarded,
                }
            }
        }
    }
}
