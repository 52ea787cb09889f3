// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use szi_quote_domain::{ContactField, ContactFormData, FieldIssue, validate_contact};
use time::OffsetDateTime;

/// The complete state of the contact form: the single-step counterpart of
/// the quote wizard, with the same validation, duplicate-suppression and
/// loading-flag pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactState {
    /// The accumulated form input.
    pub data: ContactFormData,
    /// Field errors surfaced by the last submit attempt.
    pub errors: Vec<FieldIssue<ContactField>>,
    /// When the last successful submission completed.
    pub last_submitted_at: Option<OffsetDateTime>,
    /// Whether a submission is currently in flight.
    pub loading: bool,
}

impl ContactState {
    /// Creates an empty contact form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the error for a field, if the last attempt flagged it.
    #[must_use]
    pub fn error_for(&self, field: ContactField) -> Option<&FieldIssue<ContactField>> {
        self.errors.iter().find(|issue| issue.field == field)
    }
}

/// Runs whole-schema validation over the contact form, returning the state
/// with its error map refreshed. At most one error is kept per field.
#[must_use]
pub fn validate_contact_state(state: &ContactState) -> ContactState {
    let mut validated: ContactState = state.clone();
    validated.errors = match validate_contact(&state.data) {
        Ok(()) => Vec::new(),
        Err(issues) => issues,
    };
    validated
}

/// Finalizes a confirmed contact submission: the replacement state is a
/// cleared form with the submission instant recorded for the
/// duplicate-submission window. A failed insert instead keeps the prior
/// state, form contents included, for correction.
#[must_use]
pub fn clear_contact_after_submission(now: OffsetDateTime) -> ContactState {
    ContactState {
        data: ContactFormData::default(),
        errors: Vec::new(),
        last_submitted_at: Some(now),
        loading: false,
    }
}
