//! Vote form controller: validate, send, reset, and a timed success banner.

use std::time::Duration;

use ballot_logging::{ballot_debug, ballot_info, ballot_warn};

use crate::validate::{validate, Field, RawSubmission, ValidationErrors};
use crate::{AttemptId, Country, Effect, RequestFailure};

/// How long the success banner stays up unless another attempt intervenes.
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Last attempt failed validation; nothing was sent.
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Announcements to the rest of the application. The form never calls other
/// controllers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    VoteAccepted,
}

/// What applying a vote response did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Settled {
    Accepted {
        event: SubmissionEvent,
        effects: Vec<Effect>,
    },
    Failed,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionForm {
    fields: RawSubmission,
    phase: SubmissionPhase,
    errors: ValidationErrors,
    error_message: Option<String>,
    success_visible: bool,
    attempt: AttemptId,
}

impl SubmissionForm {
    pub fn fields(&self) -> &RawSubmission {
        &self.fields
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub(crate) fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Country => self.fields.country = value,
        }
    }

    /// Runs validation and, when it passes, asks for the vote to be sent.
    /// Returns `None` when the submit was ignored.
    pub(crate) fn submit(&mut self, catalog: &[Country]) -> Option<Vec<Effect>> {
        if self.is_submitting() {
            ballot_debug!("Submit ignored: attempt {} still in flight", self.attempt);
            return None;
        }

        self.attempt += 1;
        self.success_visible = false;
        self.error_message = None;

        match validate(&self.fields, catalog) {
            Err(errors) => {
                ballot_debug!(
                    "Attempt {} rejected locally for fields {:?}",
                    self.attempt,
                    errors.fields()
                );
                self.errors = errors;
                self.phase = SubmissionPhase::Invalid;
                Some(Vec::new())
            }
            Ok(submission) => {
                self.errors = ValidationErrors::default();
                self.phase = SubmissionPhase::Submitting;
                Some(vec![Effect::SubmitVote {
                    attempt: self.attempt,
                    submission,
                }])
            }
        }
    }

    /// Applies the server's answer for `attempt`. Answers for anything but the
    /// in-flight attempt are dropped.
    pub(crate) fn finish(
        &mut self,
        attempt: AttemptId,
        result: Result<(), RequestFailure>,
    ) -> Settled {
        if !self.is_submitting() || attempt != self.attempt {
            ballot_debug!(
                "Dropping vote response for attempt {} (current {}, phase {:?})",
                attempt,
                self.attempt,
                self.phase
            );
            return Settled::Ignored;
        }

        match result {
            Ok(()) => {
                ballot_info!("Vote accepted for attempt {}", attempt);
                self.fields = RawSubmission::default();
                self.phase = SubmissionPhase::Succeeded;
                self.success_visible = true;
                Settled::Accepted {
                    event: SubmissionEvent::VoteAccepted,
                    effects: vec![Effect::ScheduleSuccessDismiss {
                        attempt,
                        delay: SUCCESS_BANNER_TTL,
                    }],
                }
            }
            Err(failure) => {
                ballot_warn!("Vote attempt {} failed: {:?}", attempt, failure);
                self.phase = SubmissionPhase::Failed;
                self.error_message = Some(failure.display_message());
                Settled::Failed
            }
        }
    }

    pub(crate) fn dismiss_success(&mut self, attempt: AttemptId) -> bool {
        if self.success_visible && attempt == self.attempt {
            self.success_visible = false;
            true
        } else {
            false
        }
    }
}
