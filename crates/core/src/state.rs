// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::estimate::QuoteEstimate;
use crate::seed::QuoteSeed;
use szi_quote_domain::{FieldIssue, QuoteField, QuoteFormData};
use time::OffsetDateTime;

/// The five steps of the quote wizard, in flow order.
///
/// The flow is linear: `ServiceSelection` through `ContactInfo` collect
/// input, and `Summary` is the terminal success state, reached only
/// through a confirmed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Step 1: pick a service type.
    ServiceSelection,
    /// Step 2: origin and destination.
    RouteDetails,
    /// Step 3: weight, dimensions and special requirements.
    CargoDetails,
    /// Step 4: contact details; submitting happens from here.
    ContactInfo,
    /// Step 5: submission confirmed. No transitions lead out of it.
    Summary,
}

impl WizardStep {
    /// The 1-based step number shown in the progress indicator.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::ServiceSelection => 1,
            Self::RouteDetails => 2,
            Self::CargoDetails => 3,
            Self::ContactInfo => 4,
            Self::Summary => 5,
        }
    }

    /// Whether this is the terminal success step.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Summary)
    }

    /// The step after this one in the input flow. `ContactInfo` caps the
    /// forward flow: leaving it requires a submission, and `Summary` has
    /// no successor.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::ServiceSelection => Self::RouteDetails,
            Self::RouteDetails => Self::CargoDetails,
            Self::CargoDetails | Self::ContactInfo => Self::ContactInfo,
            Self::Summary => Self::Summary,
        }
    }

    /// The step before this one. `ServiceSelection` floors the backward
    /// flow.
    #[must_use]
    pub const fn prev(&self) -> Self {
        match self {
            Self::ServiceSelection | Self::RouteDetails => Self::ServiceSelection,
            Self::CargoDetails => Self::RouteDetails,
            Self::ContactInfo => Self::CargoDetails,
            Self::Summary => Self::ContactInfo,
        }
    }
}

/// The complete state of one quote wizard instance.
///
/// Transitions never mutate in place: each one returns a new state, so the
/// hosting UI can treat the state as an immutable snapshot to render.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    /// The step currently shown.
    pub step: WizardStep,
    /// The accumulated form input.
    pub data: QuoteFormData,
    /// Field errors surfaced by the last gating or submit attempt.
    pub errors: Vec<FieldIssue<QuoteField>>,
    /// The advisory estimate, computed when leaving the cargo step.
    pub estimate: Option<QuoteEstimate>,
    /// When the last successful submission completed, for the
    /// duplicate-submission window.
    pub last_submitted_at: Option<OffsetDateTime>,
    /// Whether a submission is currently in flight.
    pub loading: bool,
}

impl WizardState {
    /// Creates a fresh wizard at step 1 with empty form data.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: WizardStep::ServiceSelection,
            data: QuoteFormData::default(),
            errors: Vec::new(),
            estimate: None,
            last_submitted_at: None,
            loading: false,
        }
    }

    /// Creates a wizard pre-filled from navigation-state seed values.
    ///
    /// Other pages (the instant-quote bar, relocation landing pages) hand
    /// off partial input this way. A `city` seed without an explicit
    /// origin becomes the origin, so relocation CTAs land with their city
    /// already filled in.
    #[must_use]
    pub fn from_seed(seed: &QuoteSeed) -> Self {
        let mut state: Self = Self::new();
        let data: &mut QuoteFormData = &mut state.data;
        if let Some(service_type) = &seed.service_type {
            data.service_type.clone_from(service_type);
        }
        if let Some(origin) = &seed.origin {
            data.origin.clone_from(origin);
        } else if let Some(city) = &seed.city {
            data.origin.clone_from(city);
        }
        if let Some(destination) = &seed.destination {
            data.destination.clone_from(destination);
        }
        if let Some(weight) = &seed.weight {
            data.weight.clone_from(weight);
        }
        if let Some(email) = &seed.email {
            data.email.clone_from(email);
        }
        if let Some(planned_date) = &seed.planned_date {
            data.pickup_date.clone_from(planned_date);
        }
        state
    }

    /// Returns the error message code for a field, if the last attempt
    /// flagged it.
    #[must_use]
    pub fn error_for(&self, field: QuoteField) -> Option<&FieldIssue<QuoteField>> {
        self.errors.iter().find(|issue| issue.field == field)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
