// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission orchestration for the quote wizard and the contact form.
//!
//! Each submit runs the same guarded pipeline: refuse while a submission
//! is already in flight, enforce the resubmit window, snapshot attribution,
//! validate and compose the outbound record, insert through the gateway,
//! and only then report the tracking event and advance local state. The
//! resubmit timestamp moves only on a confirmed insert, so a failed
//! attempt can be retried immediately.

use crate::compose::{prepare_contact_record, prepare_quote_record};
use crate::error::{ApiError, LocalizedIssue};
use crate::messages::localize_validation;
use crate::tracking::{TrackingEmitter, track_contact_submitted, track_quote_submitted};
use szi_quote::{
    ContactState, WizardState, check_not_in_flight, check_submit_window,
    clear_contact_after_submission, complete_quote_submission, CoreError,
};
use szi_quote_attribution::{format_for_notes, AttributionStorage, AttributionStore};
use szi_quote_domain::{FieldIssue, Locale};
use szi_quote_gateway::SubmissionGateway;
use time::OffsetDateTime;
use tracing::{debug, warn};

fn localize_issues<F: Copy>(
    issues: &[FieldIssue<F>],
    locale: Locale,
    field_name: impl Fn(F) -> &'static str,
) -> ApiError {
    let issues: Vec<LocalizedIssue> = issues
        .iter()
        .map(|issue| LocalizedIssue {
            field: field_name(issue.field),
            message: localize_validation(issue.message, locale),
        })
        .collect();
    ApiError::Validation { issues }
}

fn guard_error(err: CoreError) -> ApiError {
    match err {
        CoreError::RateLimited { retry_after } => ApiError::RateLimited { retry_after },
        CoreError::SubmissionInFlight => ApiError::SubmissionInFlight,
    }
}

/// Submits the wizard's quote request through the gateway.
///
/// On success the returned state sits on the summary step with the
/// resubmit timestamp set to `now`. On any failure the input state is
/// left untouched and the caller may retry once the cause is addressed.
///
/// # Errors
///
/// * [`ApiError::SubmissionInFlight`] if the state is already loading.
/// * [`ApiError::RateLimited`] inside the resubmit window.
/// * [`ApiError::Validation`] with localized per-field issues.
/// * [`ApiError::Gateway`] when the insert fails or confirms no row.
pub fn submit_quote<S: AttributionStorage, G: SubmissionGateway>(
    state: &WizardState,
    gateway: &mut G,
    attribution: &AttributionStore<S>,
    emitter: &TrackingEmitter,
    locale: Locale,
    now: OffsetDateTime,
) -> Result<WizardState, ApiError> {
    check_not_in_flight(state.loading).map_err(guard_error)?;
    check_submit_window(state.last_submitted_at, now).map_err(guard_error)?;

    let record = attribution.load();
    let note = record.as_ref().and_then(format_for_notes);
    let quote = prepare_quote_record(&state.data, state.estimate, note)
        .map_err(|issues| localize_issues(&issues, locale, |field| field.as_str()))?;

    let receipt = gateway
        .insert_quote(&quote)
        .and_then(szi_quote_gateway::InsertReceipt::confirmed)
        .map_err(|err| {
            warn!(%err, "quote insert failed");
            ApiError::Gateway {
                detail: err.to_string(),
            }
        })?;
    debug!(rows = receipt.rows, service = %quote.service_type, "quote inserted");

    track_quote_submitted(emitter, locale, &quote.service_type, record);
    Ok(complete_quote_submission(state, now))
}

/// Submits the contact form through the gateway.
///
/// On success the returned state holds a cleared form with the resubmit
/// timestamp set to `now`. On any failure the input state is left
/// untouched, entered values included.
///
/// # Errors
///
/// Same failure surface as [`submit_quote`].
pub fn submit_contact<S: AttributionStorage, G: SubmissionGateway>(
    state: &ContactState,
    gateway: &mut G,
    attribution: &AttributionStore<S>,
    emitter: &TrackingEmitter,
    locale: Locale,
    now: OffsetDateTime,
) -> Result<ContactState, ApiError> {
    check_not_in_flight(state.loading).map_err(guard_error)?;
    check_submit_window(state.last_submitted_at, now).map_err(guard_error)?;

    let record = attribution.load();
    let contact = prepare_contact_record(&state.data)
        .map_err(|issues| localize_issues(&issues, locale, |field| field.as_str()))?;

    let receipt = gateway
        .insert_contact(&contact)
        .and_then(szi_quote_gateway::InsertReceipt::confirmed)
        .map_err(|err| {
            warn!(%err, "contact insert failed");
            ApiError::Gateway {
                detail: err.to_string(),
            }
        })?;
    debug!(rows = receipt.rows, "contact message inserted");

    track_contact_submitted(emitter, locale, record);
    Ok(clear_contact_after_submission(now))
}
