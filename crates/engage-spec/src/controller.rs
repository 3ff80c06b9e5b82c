use chrono::Utc;
use log::debug;
use thiserror::Error;

use crate::sanitize::sanitize_value;
use crate::spec::category::Category;
use crate::spec::field::descriptor;
use crate::submission::SubmissionRecord;
use crate::validate::validate;
use crate::values::{ErrorMap, FieldValue, FieldValues};

/// State machine driven by the form session.
///
/// `Submitting` falls back to `CategorySelected` only through a failed
/// validation gate, before any suspension begins.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    NoCategorySelected,
    CategorySelected(Category),
    Submitting(Category),
    Submitted(SubmissionRecord),
}

impl Default for FormState {
    fn default() -> Self {
        FormState::NoCategorySelected
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no category selected")]
    NoCategory,
    #[error("a submission is already in progress")]
    SubmissionInProgress,
    #[error("the form was already submitted; reset it first")]
    AlreadySubmitted,
    #[error("no submission is pending")]
    NoPendingSubmission,
    #[error("field '{0}' is not part of the current form")]
    UnknownField(String),
}

/// Result of the validation gate in [`FormController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the controller is now `Submitting`.
    Accepted,
    /// Validation failed; the error map is stored and the state unchanged.
    Rejected,
}

/// Owns the single form session: category, field values, error state.
///
/// The caller owns the simulated submission delay: after `submit` returns
/// [`SubmitOutcome::Accepted`], schedule the delay and then call
/// [`FormController::complete_submission`]. While the controller is
/// `Submitting`, every other transition is rejected; that state guard is
/// the sole concurrency control.
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
    values: FieldValues,
    errors: ErrorMap,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn category(&self) -> Option<Category> {
        match &self.state {
            FormState::NoCategorySelected => None,
            FormState::CategorySelected(category) | FormState::Submitting(category) => {
                Some(*category)
            }
            FormState::Submitted(record) => Some(record.category),
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn record(&self) -> Option<&SubmissionRecord> {
        match &self.state {
            FormState::Submitted(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting(_))
    }

    /// Activates a category, unconditionally resetting values and errors.
    pub fn select_category(&mut self, category: Category) -> Result<(), FormError> {
        match self.state {
            FormState::Submitting(_) => Err(FormError::SubmissionInProgress),
            FormState::Submitted(_) => Err(FormError::AlreadySubmitted),
            _ => {
                debug!("category selected: {}", category);
                self.state = FormState::CategorySelected(category);
                self.values.clear();
                self.errors.clear();
                Ok(())
            }
        }
    }

    /// Sanitizes and stores a field value, clearing that field's stale error
    /// without re-validating it.
    pub fn edit_field(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let category = match self.state {
            FormState::NoCategorySelected => return Err(FormError::NoCategory),
            FormState::Submitting(_) => return Err(FormError::SubmissionInProgress),
            FormState::Submitted(_) => return Err(FormError::AlreadySubmitted),
            FormState::CategorySelected(category) => category,
        };
        if descriptor(category, name).is_none() {
            return Err(FormError::UnknownField(name.to_string()));
        }
        self.values.insert(name.to_string(), sanitize_value(value));
        self.errors.remove(name);
        Ok(())
    }

    /// Runs the validation gate. On success the controller enters
    /// `Submitting` and waits for [`FormController::complete_submission`].
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        match self.state {
            FormState::Submitting(_) => return Err(FormError::SubmissionInProgress),
            FormState::Submitted(_) => return Err(FormError::AlreadySubmitted),
            _ => {}
        }

        let errors = validate(self.category(), &self.values);
        if !errors.is_empty() {
            debug!("submission rejected: {} field error(s)", errors.len());
            self.errors = errors;
            return Ok(SubmitOutcome::Rejected);
        }

        // The category gate in `validate` guarantees one is selected here.
        let Some(category) = self.category() else {
            return Err(FormError::NoCategory);
        };
        debug!("submission accepted for category {}", category);
        self.errors.clear();
        self.state = FormState::Submitting(category);
        Ok(SubmitOutcome::Accepted)
    }

    /// Finalizes a pending submission: stamps the current UTC time, copies
    /// the field values into an immutable record, and enters `Submitted`.
    pub fn complete_submission(&mut self) -> Result<SubmissionRecord, FormError> {
        let FormState::Submitting(category) = self.state else {
            return Err(FormError::NoPendingSubmission);
        };
        let record = SubmissionRecord {
            category,
            fields: self.values.clone(),
            submitted_at_utc: Utc::now(),
        };
        debug!("submission completed at {}", record.submitted_at_utc);
        self.state = FormState::Submitted(record.clone());
        Ok(record)
    }

    /// Discards any record and returns to `NoCategorySelected`. Not
    /// available while a submission is in flight; there is no cancellation.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmissionInProgress);
        }
        debug!("form reset");
        self.state = FormState::NoCategorySelected;
        self.values.clear();
        self.errors.clear();
        Ok(())
    }
}
