// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod tracking_tests;

use crate::tracking::{EventLog, TrackingEmitter, TrackingSink};
use szi_quote::{ContactState, QuoteEstimate, WizardState, WizardStep};
use szi_quote_attribution::{AttributionStore, MemoryStorage, PageView};
use szi_quote_domain::{ContactFormData, QuoteFormData};
use time::OffsetDateTime;
use time::macros::datetime;

pub const T0: OffsetDateTime = datetime!(2026-03-01 10:00:00 UTC);
pub const T1: OffsetDateTime = datetime!(2026-03-01 10:00:07 UTC);
pub const T2: OffsetDateTime = datetime!(2026-03-01 10:00:15 UTC);

pub fn create_valid_quote_data() -> QuoteFormData {
    QuoteFormData {
        service_type: String::from("european-road"),
        origin: String::from("Madrid"),
        destination: String::from("Lyon"),
        weight: String::from("120"),
        contact_name: String::from("Ana Ruiz"),
        email: String::from("ana@example.com"),
        phone: String::from("+34 600 000 000"),
        ..QuoteFormData::default()
    }
}

pub fn create_submittable_quote_state() -> WizardState {
    let mut state: WizardState = WizardState::new();
    state.step = WizardStep::ContactInfo;
    state.data = create_valid_quote_data();
    state.estimate = Some(QuoteEstimate { amount: 510.0 });
    state
}

pub fn create_valid_contact_data() -> ContactFormData {
    ContactFormData {
        name: String::from("Marta Vidal"),
        email: String::from("marta@example.com"),
        phone: String::from("+34 611 111 111"),
        company: String::new(),
        message: String::from("We need weekly groupage to Lisbon."),
    }
}

pub fn create_submittable_contact_state() -> ContactState {
    let mut state: ContactState = ContactState::new();
    state.data = create_valid_contact_data();
    state
}

/// An attribution store seeded with one campaign landing.
pub fn create_seeded_attribution() -> AttributionStore<MemoryStorage> {
    let mut store: AttributionStore<MemoryStorage> =
        AttributionStore::new(MemoryStorage::new());
    let view: PageView = PageView {
        path: String::from("/get-quote"),
        query: String::from("utm_source=google&utm_campaign=spring"),
        referrer: Some(String::from("https://www.google.com/")),
    };
    store.save(&view, T0);
    store
}

/// An emitter wired to a single event log, plus a handle to inspect it.
pub fn create_logging_emitter() -> (TrackingEmitter, EventLog) {
    let log: EventLog = EventLog::new();
    let sink: Box<dyn TrackingSink> = Box::new(log.clone());
    (TrackingEmitter::new(vec![sink]), log)
}
