// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form state machines for the SZI marketing site.
//!
//! The quote wizard is a five-step linear flow; the contact form is a
//! single-step variant of the same pattern. All transitions here are pure
//! functions over immutable state: validation gating, estimate
//! computation and the duplicate-submission window take the current state
//! (and the wall-clock instant where relevant) and return the next state.
//! Side effects (the gateway insert, attribution reads, tracking) live in
//! the api crate, which drives these transitions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod contact;
mod error;
mod estimate;
mod seed;
mod state;
mod transition;

#[cfg(test)]
mod tests;

pub use contact::{ContactState, clear_contact_after_submission, validate_contact_state};
pub use error::CoreError;
pub use estimate::{QuoteEstimate, compute_estimate};
pub use seed::QuoteSeed;
pub use state::{WizardState, WizardStep};
pub use transition::{
    RESUBMIT_WINDOW, check_not_in_flight, check_submit_window, complete_quote_submission,
    fields_for_step, next, prev,
};
