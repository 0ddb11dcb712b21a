//! Simulated contact-form submission.
//!
//! # Responsibility
//! - Track form feedback state (Idle -> Sending -> Success).
//! - Model the artificial submission delay as an explicit deferred task
//!   queue the embedding event loop polls.
//!
//! # Invariants
//! - Completions are neither cancellable nor retried.
//! - A submission never completes before its full delay has elapsed.
//! - Feedback stays on Success once reached (the original never clears
//!   it).

use chrono::Utc;
use log::info;
use uuid::Uuid;

/// Artificial delay between submit and completion, from the original
/// `setTimeout` call.
pub const SUBMIT_DELAY_MS: i64 = 700;

/// Feedback text while a submission is pending.
pub const SENDING_MESSAGE: &str = "Sending...";

/// Feedback text after the simulated submission completes.
pub const SUCCESS_MESSAGE: &str =
    "Thank you for reaching out. We will respond as soon as possible.";

/// Correlation id for one submission attempt.
pub type SubmissionId = Uuid;

/// Observable contact-form feedback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFeedback {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// At least one submission is in flight.
    Sending,
    /// A submission completed; the UI shows the success style and resets
    /// the form fields.
    Success,
}

impl FormFeedback {
    /// Display text for the feedback region, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(SENDING_MESSAGE),
            Self::Success => Some(SUCCESS_MESSAGE),
        }
    }

    /// Whether the success styling applies.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingSubmission {
    id: SubmissionId,
    due_at_ms: i64,
}

/// Deferred-submission service for the contact form.
#[derive(Debug, Default)]
pub struct ContactService {
    feedback: FormFeedback,
    pending: Vec<PendingSubmission>,
}

impl ContactService {
    /// Creates the service in the Idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts one simulated submission at `now_ms`.
    ///
    /// Sets feedback to Sending and schedules the completion
    /// [`SUBMIT_DELAY_MS`] later. Returns the submission id for
    /// correlation.
    pub fn submit(&mut self, now_ms: i64) -> SubmissionId {
        let id = Uuid::new_v4();
        self.feedback = FormFeedback::Sending;
        self.pending.push(PendingSubmission {
            id,
            due_at_ms: now_ms + SUBMIT_DELAY_MS,
        });

        info!("event=contact_submit module=contact status=start id={id}");
        id
    }

    /// Completes every submission due at `now_ms` and returns their ids
    /// in submit order.
    ///
    /// Each completion applies the defined callback: feedback becomes
    /// Success, which also signals the UI to reset the form fields.
    pub fn poll_due(&mut self, now_ms: i64) -> Vec<SubmissionId> {
        let mut completed = Vec::new();
        self.pending.retain(|submission| {
            if submission.due_at_ms <= now_ms {
                completed.push(submission.id);
                false
            } else {
                true
            }
        });

        for id in &completed {
            self.feedback = FormFeedback::Success;
            info!("event=contact_submit module=contact status=ok id={id}");
        }

        completed
    }

    /// Current feedback state.
    pub fn feedback(&self) -> FormFeedback {
        self.feedback
    }

    /// Number of submissions still in flight.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Wall-clock epoch milliseconds for embedders that drive the engine from
/// real events rather than a scripted timeline.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::{ContactService, FormFeedback, SENDING_MESSAGE, SUBMIT_DELAY_MS, SUCCESS_MESSAGE};

    #[test]
    fn feedback_messages_match_the_site_copy() {
        assert_eq!(FormFeedback::Idle.message(), None);
        assert_eq!(FormFeedback::Sending.message(), Some(SENDING_MESSAGE));
        assert_eq!(FormFeedback::Success.message(), Some(SUCCESS_MESSAGE));
        assert!(FormFeedback::Success.is_success());
        assert!(!FormFeedback::Sending.is_success());
    }

    #[test]
    fn submission_completes_only_after_full_delay() {
        let mut contact = ContactService::new();
        let id = contact.submit(1_000);

        assert_eq!(contact.feedback(), FormFeedback::Sending);
        assert!(contact.poll_due(1_000 + SUBMIT_DELAY_MS - 1).is_empty());
        assert_eq!(contact.feedback(), FormFeedback::Sending);

        let completed = contact.poll_due(1_000 + SUBMIT_DELAY_MS);
        assert_eq!(completed, vec![id]);
        assert_eq!(contact.feedback(), FormFeedback::Success);
        assert_eq!(contact.pending_count(), 0);
    }

    #[test]
    fn overlapping_submissions_complete_in_submit_order() {
        let mut contact = ContactService::new();
        let first = contact.submit(0);
        let second = contact.submit(100);

        let completed = contact.poll_due(100 + SUBMIT_DELAY_MS);
        assert_eq!(completed, vec![first, second]);
        assert_ne!(first, second);
    }
}
