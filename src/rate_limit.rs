use std::time::Duration;
use time::OffsetDateTime;

pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(30);

/// Cooldown bookkeeping for one mounted contact form. Lives only as long as
/// the form owning it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    last_submission: Option<OffsetDateTime>,
    submission_count: u64,
}

/// Remaining wait before the form accepts another submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownActive {
    pub retry_after: Duration,
}

impl CooldownActive {
    /// Wait time as shown to the submitter, rounded up to whole seconds.
    pub fn retry_after_seconds(&self) -> u64 {
        ceil_seconds(self.retry_after)
    }
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_submission(&self) -> Option<OffsetDateTime> {
        self.last_submission
    }

    pub fn submission_count(&self) -> u64 {
        self.submission_count
    }

    /// Fails while `now` is still inside the cooldown window opened by the
    /// last accepted submission. A clock that moved backwards counts as no
    /// time elapsed.
    pub fn check(&self, now: OffsetDateTime, cooldown: Duration) -> Result<(), CooldownActive> {
        let last_submission = match self.last_submission {
            Some(last_submission) => last_submission,
            None => return Ok(()),
        };
        let elapsed = Duration::try_from(now - last_submission).unwrap_or(Duration::ZERO);
        if elapsed < cooldown {
            return Err(CooldownActive {
                retry_after: cooldown - elapsed,
            });
        }
        Ok(())
    }

    /// Arms the cooldown window at `now`.
    pub fn commit(&mut self, now: OffsetDateTime) {
        self.last_submission = Some(now);
        self.submission_count += 1;
    }
}

pub fn ceil_seconds(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}
