// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_valid_quote_data;
use crate::{WizardState, WizardStep, complete_quote_submission, next, prev};
use szi_quote_domain::{QuoteField, ValidationMessage};
use time::macros::datetime;

#[test]
fn test_new_wizard_starts_at_service_selection() {
    let state: WizardState = WizardState::new();
    assert_eq!(state.step, WizardStep::ServiceSelection);
    assert_eq!(state.step.number(), 1);
    assert!(state.errors.is_empty());
    assert!(state.estimate.is_none());
}

#[test]
fn test_next_blocks_step_one_without_service_type() {
    let state: WizardState = WizardState::new();
    let after: WizardState = next(&state);

    assert_eq!(after.step, WizardStep::ServiceSelection);
    let issue = after
        .error_for(QuoteField::ServiceType)
        .expect("service type error expected");
    assert_eq!(issue.message, ValidationMessage::Required);
}

#[test]
fn test_next_advances_step_one_with_service_type() {
    let mut state: WizardState = WizardState::new();
    state.data.service_type = String::from("spanish-road");

    let after: WizardState = next(&state);
    assert_eq!(after.step, WizardStep::RouteDetails);
    assert!(after.errors.is_empty());
}

#[test]
fn test_next_only_checks_fields_owned_by_the_step() {
    // Step 1 must advance even though route and contact fields are empty.
    let mut state: WizardState = WizardState::new();
    state.data.service_type = String::from("global");

    let after: WizardState = next(&state);
    assert_eq!(after.step, WizardStep::RouteDetails);
}

#[test]
fn test_next_blocks_route_step_on_missing_destination() {
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::RouteDetails;
    state.data = create_valid_quote_data();
    state.data.destination = String::new();

    let after: WizardState = next(&state);
    assert_eq!(after.step, WizardStep::RouteDetails);
    assert!(after.error_for(QuoteField::Destination).is_some());
    assert!(after.error_for(QuoteField::Origin).is_none());
}

#[test]
fn test_next_from_cargo_step_computes_estimate() {
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::CargoDetails;
    state.data = create_valid_quote_data();

    let after: WizardState = next(&state);
    assert_eq!(after.step, WizardStep::ContactInfo);
    assert!(after.estimate.is_some());
}

#[test]
fn test_next_from_cargo_step_with_bad_weight_keeps_no_estimate() {
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::CargoDetails;
    state.data = create_valid_quote_data();
    state.data.weight = String::from("-5");

    let after: WizardState = next(&state);
    assert_eq!(after.step, WizardStep::CargoDetails);
    assert!(after.estimate.is_none());
    assert!(after.error_for(QuoteField::Weight).is_some());
}

#[test]
fn test_next_caps_at_contact_info() {
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::ContactInfo;
    state.data = create_valid_quote_data();

    let after: WizardState = next(&state);
    assert_eq!(after.step, WizardStep::ContactInfo);
}

#[test]
fn test_next_is_noop_on_summary() {
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::Summary;

    let after: WizardState = next(&state);
    assert_eq!(after.step, WizardStep::Summary);
}

#[test]
fn test_prev_moves_back_without_validation() {
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::CargoDetails;
    // Form entirely empty; prev must still succeed.

    let after: WizardState = prev(&state);
    assert_eq!(after.step, WizardStep::RouteDetails);
}

#[test]
fn test_prev_floors_at_step_one() {
    let state: WizardState = WizardState::new();
    let after: WizardState = prev(&state);
    assert_eq!(after.step, WizardStep::ServiceSelection);
}

#[test]
fn test_prev_clears_pending_errors() {
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::RouteDetails;
    let blocked: WizardState = next(&state);
    assert!(!blocked.errors.is_empty());

    let after: WizardState = prev(&blocked);
    assert!(after.errors.is_empty());
}

#[test]
fn test_next_keeps_form_data_intact() {
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::RouteDetails;
    state.data = create_valid_quote_data();

    let after: WizardState = next(&state);
    assert_eq!(after.data, state.data);
}

#[test]
fn test_complete_submission_reaches_summary_and_records_instant() {
    let now = datetime!(2026-04-01 12:00 UTC);
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::ContactInfo;
    state.data = create_valid_quote_data();
    state.loading = true;

    let done: WizardState = complete_quote_submission(&state, now);
    assert_eq!(done.step, WizardStep::Summary);
    assert!(done.step.is_terminal());
    assert_eq!(done.last_submitted_at, Some(now));
    assert!(!done.loading);
}
