use crate::pipeline::{DeliveryOutcome, SubmissionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

/// Toast shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

/// Passive renderer for notifications; owns their display and dismissal.
pub trait NotificationSurface {
    fn notify(&self, notification: Notification);
}

impl Notification {
    pub fn delivered() -> Self {
        Self {
            title: "Message sent successfully!".to_owned(),
            description: "Thank you for reaching out. I'll get back to you soon.".to_owned(),
            variant: Variant::Default,
        }
    }

    pub fn delivery_failed(direct_email: Option<&str>) -> Self {
        let description = match direct_email {
            Some(direct_email) => format!(
                "Please try again or contact me directly via email at {}.",
                direct_email
            ),
            None => "Please try again or contact me directly via email.".to_owned(),
        };
        Self {
            title: "Failed to send message".to_owned(),
            description,
            variant: Variant::Destructive,
        }
    }

    pub fn rate_limited(retry_after_seconds: u64) -> Self {
        let unit = if retry_after_seconds == 1 {
            "second"
        } else {
            "seconds"
        };
        Self {
            title: "Please wait before sending again".to_owned(),
            description: format!(
                "You can send another message in {} {}.",
                retry_after_seconds, unit
            ),
            variant: Variant::Destructive,
        }
    }

    pub fn for_outcome(outcome: &DeliveryOutcome, direct_email: Option<&str>) -> Self {
        match outcome {
            DeliveryOutcome::Delivered => Self::delivered(),
            DeliveryOutcome::Failed(_) => Self::delivery_failed(direct_email),
        }
    }

    /// `None` for rejections that are shown inline or not at all.
    pub fn for_rejection(error: &SubmissionError) -> Option<Self> {
        match error {
            SubmissionError::RateLimited {
                retry_after_seconds,
                ..
            } => Some(Self::rate_limited(*retry_after_seconds)),
            SubmissionError::Validation(_)
            | SubmissionError::SanitizationEmptied(_)
            | SubmissionError::BotDetected => None,
        }
    }
}
