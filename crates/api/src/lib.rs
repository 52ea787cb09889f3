// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Orchestration boundary for the SZI quote pipeline.
//!
//! The hosting UI drives everything through this crate: it renders the
//! pure form state from `szi-quote`, and calls [`submit_quote`] /
//! [`submit_contact`] on submit clicks. Those functions own the side
//! effects and their ordering: duplicate-submission window, whole-schema
//! validation, attribution snapshot, gateway insert, tracking emission,
//! success transition. A failed insert surfaces a generic error and leaves
//! the form intact; tracking and attribution problems are absorbed and
//! never affect the submission outcome.

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

mod compose;
mod error;
mod messages;
mod submit;
mod tracking;

#[cfg(test)]
mod tests;

pub use compose::{prepare_contact_record, prepare_quote_record};
pub use error::{ApiError, LocalizedIssue};
pub use messages::{ToastCopy, contact_copy, localize_validation, quote_copy};
pub use submit::{submit_contact, submit_quote};
pub use tracking::{
    CtaAction, CtaPosition, EventLog, SinkError, TrackingEmitter, TrackingEvent, TrackingSink,
    track_contact_submitted, track_quote_submitted, track_relocation_cta, track_shipment_lookup,
};
