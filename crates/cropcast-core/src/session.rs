//! Client-side request lifecycle for one prediction form.
//!
//! A form moves `Idle -> Validating -> Submitting -> Idle`, landing back
//! in `Idle` with either a result or an error message. One submission may
//! be outstanding at a time per form; [`FormSession::begin`] refuses a
//! second submission while one is in flight (simple mutual exclusion, not
//! a queue). The recorded error is surfaced verbatim and cleared when the
//! user dismisses it.

use thiserror::Error;

use crate::error::ValidationError;
use crate::request::{PredictionRequest, RawPredictionRequest};
use crate::validate::validate;

/// Where the form currently is in the request lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Why a submission could not begin.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// A previous submission has not completed yet.
    #[error("a prediction request is already in flight")]
    InFlight,

    /// The form input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// State for a single prediction form.
#[derive(Debug, Default)]
pub struct FormSession {
    phase: Phase,
    result: Option<f64>,
    error: Option<String>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Submitting
    }

    /// Starts a submission: validates the input and moves to `Submitting`.
    ///
    /// On validation failure the form returns to `Idle` with the error
    /// recorded. While a submission is outstanding, further calls fail
    /// with [`SubmitError::InFlight`] and leave all state untouched.
    pub fn begin(
        &mut self,
        raw: &RawPredictionRequest,
    ) -> Result<PredictionRequest, SubmitError> {
        if self.phase == Phase::Submitting {
            return Err(SubmitError::InFlight);
        }

        self.phase = Phase::Validating;
        self.result = None;
        self.error = None;

        match validate(raw) {
            Ok(request) => {
                self.phase = Phase::Submitting;
                Ok(request)
            }
            Err(err) => {
                self.phase = Phase::Idle;
                self.error = Some(err.to_string());
                Err(SubmitError::Invalid(err))
            }
        }
    }

    /// Finishes the outstanding submission, returning the form to `Idle`
    /// with either the predicted yield or the failure message.
    pub fn complete(&mut self, outcome: Result<f64, String>) {
        self.phase = Phase::Idle;
        match outcome {
            Ok(value) => self.result = Some(value),
            Err(message) => self.error = Some(message),
        }
    }

    /// The last successful prediction, if any.
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// The current error banner text, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismisses the error banner, returning its text.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }
}
