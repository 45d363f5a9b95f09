use super::utils::{validate, ContactField, ContactFormData, FormErrors};
use crate::api::{ApiError, ContactMessageRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Unset,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Settled(SubmitOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("a contact submission is already in flight")]
    InFlight,
    #[error("{} contact field(s) failed validation", .0.len())]
    Invalid(FormErrors),
}

/// Everything the contact section renders from: field values, inline errors,
/// the banner status and where the submission currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSession {
    data: ContactFormData,
    errors: FormErrors,
    status: SubmitStatus,
    phase: SubmissionPhase,
}

impl ContactSession {
    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.data.set(field, value);
        self.errors.clear_field(field);
    }

    /// Validates the form and, when it passes, moves into `Submitting` and
    /// hands back the payload to send.
    pub fn begin_submit(&mut self) -> Result<ContactMessageRequest, SubmitRejection> {
        if self.is_submitting() {
            return Err(SubmitRejection::InFlight);
        }

        self.phase = SubmissionPhase::Validating;
        let errors = validate(&self.data);
        if !errors.is_empty() {
            self.errors = errors.clone();
            self.phase = SubmissionPhase::Idle;
            return Err(SubmitRejection::Invalid(errors));
        }

        self.phase = SubmissionPhase::Submitting;
        self.status = SubmitStatus::Unset;
        self.errors.clear();
        Ok(self.data.to_payload())
    }

    /// Applies the intake result. Returns `false` when nothing was in flight.
    pub fn settle(&mut self, result: Result<(), ApiError>) -> bool {
        if !self.is_submitting() {
            log::warn!("ignoring contact submission result with nothing in flight");
            return false;
        }

        match result {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.data.reset();
                self.errors.clear();
                self.phase = SubmissionPhase::Settled(SubmitOutcome::Success);
            }
            Err(err) => {
                log::error!("contact submission failed: {} ({})", err, err.code);
                self.status = SubmitStatus::Error;
                self.phase = SubmissionPhase::Settled(SubmitOutcome::Error);
            }
        }
        true
    }
}
