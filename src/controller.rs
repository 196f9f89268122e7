//! Contact form controller: field state, validation, and the submit state
//! machine.
//!
//! DESIGN
//! ======
//! Three states. `Editing` accepts edits and submits. `Submitting` lasts for
//! exactly one in-flight request. `Submitted` is terminal and only reached on
//! a 2xx. Because `submit` holds `&mut self` across the await, a second
//! submission on the same controller cannot overlap the first. A submit
//! future dropped mid-request returns the form to `Editing`.
//!
//! Collaborators are injected: the endpoint as `Arc<dyn InquirySink>`, the
//! toast layer as `Arc<dyn Notifier>`. An optional state listener lets a UI
//! disable its submit button while `Submitting`.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures stay local: errors are recorded per field and no
//! request is made. Any `SubmissionError` produces one generic notification
//! and puts the controller back in `Editing`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::inquiry::{ContactInquiry, Field, FieldUpdate};
use crate::notify::{Notification, Notifier};
use crate::submit::{InquirySink, SubmissionError};
use crate::validate::{self, FieldErrors, ValidationError};

pub const CONFIRMATION_MESSAGE: &str =
    "We've received your inquiry and will be contacting you via email shortly.";

// =============================================================================
// STATE
// =============================================================================

/// Lifecycle of one form instance. `Submitted` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
        })
    }
}

/// Errors returned by controller operations.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("inquiry failed validation: {0}")]
    Invalid(FieldErrors),
    #[error("submission failed: {0}")]
    Submission(#[from] SubmissionError),
    #[error("form is not editable while {0}")]
    NotEditable(FormState),
}

type StateListener = Box<dyn Fn(FormState) + Send + Sync>;

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct ContactFormController {
    inquiry: ContactInquiry,
    state: FormState,
    errors: FieldErrors,
    sink: Arc<dyn InquirySink>,
    notifier: Arc<dyn Notifier>,
    listener: Option<StateListener>,
}

impl ContactFormController {
    /// A pristine form in `Editing`.
    #[must_use]
    pub fn new(sink: Arc<dyn InquirySink>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inquiry: ContactInquiry::default(),
            state: FormState::Editing,
            errors: FieldErrors::new(),
            sink,
            notifier,
            listener: None,
        }
    }

    /// Call `listener` on every state transition.
    #[must_use]
    pub fn with_state_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(FormState) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    #[must_use]
    pub fn inquiry(&self) -> &ContactInquiry {
        &self.inquiry
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == FormState::Editing
    }

    /// Confirmation text replacing the form once submitted.
    #[must_use]
    pub fn confirmation(&self) -> Option<&'static str> {
        (self.state == FormState::Submitted).then_some(CONFIRMATION_MESSAGE)
    }

    /// Apply one field edit and refresh that field's inline error.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotEditable`] outside `Editing`.
    pub fn update_field(&mut self, update: FieldUpdate) -> Result<(), FormError> {
        self.ensure_editing()?;
        let field = update.field();
        self.inquiry.apply(update);

        match validate::validate_field(&self.inquiry, field) {
            Ok(()) => self.errors.remove(field),
            Err(e) => {
                debug!(field = %field, error = %e, "field invalid");
                self.errors.insert(field, e);
            }
        }
        Ok(())
    }

    /// Restore the pristine inquiry and clear errors.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotEditable`] outside `Editing`.
    pub fn reset(&mut self) -> Result<(), FormError> {
        self.ensure_editing()?;
        self.inquiry = ContactInquiry::default();
        self.errors.clear();
        Ok(())
    }

    /// Validate and submit the current inquiry.
    ///
    /// Issues at most one request. On success the controller is `Submitted`;
    /// on any error it is `Editing` again.
    ///
    /// # Errors
    ///
    /// - [`FormError::Invalid`] if validation fails (no request is made).
    /// - [`FormError::Submission`] if the endpoint call fails.
    /// - [`FormError::NotEditable`] if called outside `Editing`.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        self.ensure_editing()?;

        if let Err(errors) = validate::validate_inquiry(&self.inquiry) {
            debug!(count = errors.len(), "inquiry rejected by validation");
            self.errors = errors.clone();
            return Err(FormError::Invalid(errors));
        }
        self.errors.clear();

        let submission_id = Uuid::new_v4();
        info!(%submission_id, "submitting contact inquiry");

        let Self { inquiry, state, sink, notifier, listener, .. } = self;
        let in_flight = InFlight::enter(state, listener.as_ref(), notifier.as_ref(), submission_id);

        match sink.submit(inquiry).await {
            Ok(()) => {
                info!(%submission_id, "contact inquiry accepted");
                in_flight.settle(FormState::Submitted);
                Ok(())
            }
            Err(e) => {
                warn!(%submission_id, error = %e, "contact inquiry submission failed");
                in_flight.settle(FormState::Editing);
                notifier.notify(&Notification::submission_failed());
                Err(FormError::Submission(e))
            }
        }
    }

    fn ensure_editing(&self) -> Result<(), FormError> {
        if self.state == FormState::Editing {
            Ok(())
        } else {
            Err(FormError::NotEditable(self.state))
        }
    }
}

// =============================================================================
// IN-FLIGHT GUARD
// =============================================================================

/// Holds the controller in `Submitting` for the duration of one request.
///
/// If the submit future is dropped before the sink answers, the guard puts
/// the form back in `Editing` and emits the generic failure notification.
struct InFlight<'a> {
    state: &'a mut FormState,
    listener: Option<&'a StateListener>,
    notifier: &'a dyn Notifier,
    submission_id: Uuid,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn enter(
        state: &'a mut FormState,
        listener: Option<&'a StateListener>,
        notifier: &'a dyn Notifier,
        submission_id: Uuid,
    ) -> Self {
        let mut guard = Self { state, listener, notifier, submission_id, armed: true };
        guard.set(FormState::Submitting);
        guard
    }

    fn set(&mut self, next: FormState) {
        *self.state = next;
        if let Some(listener) = self.listener {
            listener(next);
        }
    }

    /// Record the sink's answer and disarm.
    fn settle(mut self, next: FormState) {
        self.armed = false;
        self.set(next);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!(submission_id = %self.submission_id, "contact inquiry submission abandoned");
            self.set(FormState::Editing);
            self.notifier.notify(&Notification::submission_failed());
        }
    }
}
