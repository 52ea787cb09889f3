// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::estimate::compute_estimate;
use crate::state::{WizardState, WizardStep};
use szi_quote_domain::{QuoteField, validate_quote_fields};
use time::{Duration, OffsetDateTime};

/// Cooldown after a successful submission during which resubmission
/// attempts are rejected client-side.
pub const RESUBMIT_WINDOW: Duration = Duration::seconds(10);

/// The fields a step gates on before the flow may advance past it.
///
/// The subsets are disjoint: each input field is owned by exactly one
/// step, and errors for fields the user has not reached yet are never
/// surfaced early.
#[must_use]
pub const fn fields_for_step(step: WizardStep) -> &'static [QuoteField] {
    match step {
        WizardStep::ServiceSelection => &[QuoteField::ServiceType],
        WizardStep::RouteDetails => &[QuoteField::Origin, QuoteField::Destination],
        WizardStep::CargoDetails => &[QuoteField::Weight],
        WizardStep::ContactInfo => &[
            QuoteField::ContactName,
            QuoteField::Email,
            QuoteField::Phone,
        ],
        WizardStep::Summary => &[],
    }
}

/// Attempts to advance the wizard one step.
///
/// Validates only the fields the current step owns. On failure the step
/// does not change and the field errors are surfaced on the returned
/// state. On success from the cargo step, the estimate is computed and
/// stored before advancing. The forward flow caps at `ContactInfo`:
/// leaving it requires a submission, and `Summary` is terminal.
#[must_use]
pub fn next(state: &WizardState) -> WizardState {
    let mut next_state: WizardState = state.clone();

    if state.step.is_terminal() {
        return next_state;
    }

    match validate_quote_fields(&state.data, fields_for_step(state.step)) {
        Ok(()) => {
            next_state.errors.clear();
            if state.step == WizardStep::CargoDetails {
                next_state.estimate = Some(compute_estimate(&state.data));
            }
            next_state.step = state.step.next();
        }
        Err(issues) => {
            next_state.errors = issues;
        }
    }

    next_state
}

/// Moves the wizard one step back, unconditionally. No validation runs and
/// pending errors are dropped; backing out of a step is always allowed.
#[must_use]
pub fn prev(state: &WizardState) -> WizardState {
    let mut prev_state: WizardState = state.clone();
    prev_state.step = state.step.prev();
    prev_state.errors.clear();
    prev_state
}

/// Refuses a submit while a prior one is still in flight. The `loading`
/// flag is the re-entrancy guard for the synchronous gateway call.
///
/// # Errors
///
/// Returns [`CoreError::SubmissionInFlight`] when `loading` is set.
pub const fn check_not_in_flight(loading: bool) -> Result<(), CoreError> {
    if loading {
        Err(CoreError::SubmissionInFlight)
    } else {
        Ok(())
    }
}

/// Checks the duplicate-submission window.
///
/// The window is evaluated against the last *successful* submission; a
/// failed gateway insert does not start it, so the user may retry
/// immediately after a failure.
///
/// # Errors
///
/// Returns [`CoreError::RateLimited`] when a successful submission
/// completed less than [`RESUBMIT_WINDOW`] ago.
pub fn check_submit_window(
    last_submitted_at: Option<OffsetDateTime>,
    now: OffsetDateTime,
) -> Result<(), CoreError> {
    if let Some(last) = last_submitted_at {
        let elapsed: Duration = now - last;
        if elapsed < RESUBMIT_WINDOW {
            return Err(CoreError::RateLimited {
                retry_after: RESUBMIT_WINDOW - elapsed,
            });
        }
    }
    Ok(())
}

/// Finalizes a confirmed submission: moves to the summary step, records
/// the submission instant for the duplicate-submission window, and clears
/// errors and the loading flag.
///
/// Only called after the gateway confirmed the insert; a failed insert
/// leaves the state untouched.
#[must_use]
pub fn complete_quote_submission(state: &WizardState, now: OffsetDateTime) -> WizardState {
    let mut done: WizardState = state.clone();
    done.step = WizardStep::Summary;
    done.errors.clear();
    done.last_submitted_at = Some(now);
    done.loading = false;
    done
}
