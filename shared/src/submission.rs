//! Aggregate submit decision and the simulated send cycle.

use crate::validation::FieldVerdict;

/// Inline error for an unchecked privacy-consent checkbox.
pub const CONSENT_REQUIRED_MESSAGE: &str = "You must accept the privacy policy to continue.";
/// Notification shown when a submit is blocked.
pub const FORM_ERRORS_MESSAGE: &str = "Please correct the errors in the form.";
/// Notification shown after the simulated send completes.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
/// Markup placed in the submit button while sending.
pub const SENDING_BUTTON_HTML: &str =
    r#"<span class="spinner-border spinner-border-sm me-2"></span>Sending..."#;

/// Whether a submit may continue to the send step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Every field passed and consent (if asked for) was given.
    Proceed,
    /// At least one check failed.
    Blocked {
        /// Number of fields with an invalid verdict.
        invalid_fields: usize,
        /// The consent checkbox exists and is unchecked.
        consent_missing: bool,
    },
}

/// Combine per-field verdicts with the consent checkbox state.
///
/// `consent` is `None` when the form has no consent checkbox.
pub fn decide(verdicts: &[FieldVerdict], consent: Option<bool>) -> SubmitDecision {
    let invalid_fields = verdicts.iter().filter(|verdict| !verdict.is_valid()).count();
    let consent_missing = consent == Some(false);
    if invalid_fields == 0 && !consent_missing {
        SubmitDecision::Proceed
    } else {
        SubmitDecision::Blocked {
            invalid_fields,
            consent_missing,
        }
    }
}

/// Phase of one form's simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Ready to accept a submit.
    #[default]
    Idle,
    /// The send timer is running.
    Sending,
}

/// Guards a form against overlapping sends.
#[derive(Debug, Default)]
pub struct Submission {
    phase: SubmissionPhase,
}

impl Submission {
    /// Current phase.
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Enter `Sending`. Returns `false` if a send is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.phase == SubmissionPhase::Sending {
            tracing::debug!("submit ignored: send already in flight");
            return false;
        }
        self.phase = SubmissionPhase::Sending;
        true
    }

    /// Return to `Idle` once the send timer fires.
    pub fn finish(&mut self) {
        self.phase = SubmissionPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_valid_without_consent_box_proceeds() {
        let verdicts = [FieldVerdict::Valid, FieldVerdict::Valid];
        assert_eq!(decide(&verdicts, None), SubmitDecision::Proceed);
        assert_eq!(decide(&verdicts, Some(true)), SubmitDecision::Proceed);
    }

    #[test]
    fn unchecked_consent_blocks() {
        assert_eq!(decide(&[FieldVerdict::Valid], Some(false)), SubmitDecision::Blocked {
            invalid_fields: 0,
            consent_missing: true,
        });
    }

    #[test]
    fn invalid_field_blocks_and_is_counted() {
        let verdicts = [
            FieldVerdict::Invalid("First name is required.".to_string()),
            FieldVerdict::Valid,
            FieldVerdict::Invalid("x".to_string()),
        ];
        assert_eq!(decide(&verdicts, Some(true)), SubmitDecision::Blocked {
            invalid_fields: 2,
            consent_missing: false,
        });
    }

    #[test]
    fn overlapping_submits_are_rejected() {
        let mut submission = Submission::default();
        assert!(submission.begin());
        assert!(!submission.begin());
        assert_eq!(submission.phase(), SubmissionPhase::Sending);
        submission.finish();
        assert!(submission.begin());
    }
}
