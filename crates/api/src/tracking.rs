// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fire-and-forget analytics events.
//!
//! Events are delivered to an injected list of sinks: typically a generic
//! ordered event log plus the advertising/analytics hooks the host page
//! happens to carry. Every sink is optional and every delivery is
//! best-effort; a sink failure is logged at debug level and swallowed.
//! Nothing in this module ever affects a submission's outcome.
//!
//! The emitter does not retry or deduplicate. Callers emit exactly once
//! per logical event; the submit orchestration guarantees this for the
//! form events by emitting only after a confirmed insert.

use serde::Serialize;
use std::sync::{Arc, Mutex};
use szi_quote_attribution::AttributionRecord;
use szi_quote_domain::Locale;
use thiserror::Error;
use tracing::debug;

/// Where on the page a relocation call-to-action lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaPosition {
    /// The hero section at the top of a landing page.
    Hero,
    /// The closing section at the bottom.
    Footer,
}

/// What a relocation call-to-action leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaAction {
    /// Jump into the quote wizard.
    Quote,
    /// Jump to the contact form.
    Contact,
}

/// A named analytics event with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackingEvent {
    /// A quote request was inserted successfully.
    #[serde(rename_all = "snake_case")]
    QuoteSubmitted {
        /// Locale the form was submitted in.
        locale: Locale,
        /// The submitted service code.
        service_type: String,
        /// Attribution snapshot taken at submit time, if one existed.
        attribution: Option<AttributionRecord>,
    },
    /// A contact message was inserted successfully.
    #[serde(rename_all = "snake_case")]
    ContactSubmitted {
        /// Locale the form was submitted in.
        locale: Locale,
        /// Attribution snapshot taken at submit time, if one existed.
        attribution: Option<AttributionRecord>,
    },
    /// A relocation landing-page call-to-action was clicked.
    #[serde(rename = "relocation_cta_click", rename_all = "snake_case")]
    RelocationCta {
        /// Locale of the landing page.
        locale: Locale,
        /// The city the landing page targets.
        city: String,
        /// Where on the page the CTA lives.
        position: CtaPosition,
        /// What the CTA leads to.
        action: CtaAction,
    },
    /// A visitor looked up a shipment reference.
    #[serde(rename_all = "snake_case")]
    ShipmentLookup {
        /// Locale of the page.
        locale: Locale,
        /// The reference that was looked up.
        reference: String,
    },
}

impl TrackingEvent {
    /// The wire name of this event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::QuoteSubmitted { .. } => "quote_submitted",
            Self::ContactSubmitted { .. } => "contact_submitted",
            Self::RelocationCta { .. } => "relocation_cta_click",
            Self::ShipmentLookup { .. } => "shipment_lookup",
        }
    }
}

/// A sink delivery failure. Diagnostic only; the emitter swallows it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The sink refused or failed to take the event.
    #[error("Sink rejected event: {0}")]
    Rejected(String),
}

/// One destination for tracking events.
pub trait TrackingSink {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when delivery fails; the emitter logs and
    /// swallows it.
    fn deliver(&self, event: &TrackingEvent) -> Result<(), SinkError>;
}

/// A generic ordered in-memory event log.
///
/// The handle is cheaply cloneable; clones share the same log, so a host
/// can keep one handle for inspection while the emitter owns another as a
/// sink.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<TrackingEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the events delivered so far, in delivery order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TrackingEvent> {
        self.events.lock().map_or_else(|_| Vec::new(), |events| events.clone())
    }
}

impl TrackingSink for EventLog {
    fn deliver(&self, event: &TrackingEvent) -> Result<(), SinkError> {
        self.events
            .lock()
            .map_err(|_| SinkError::Rejected(String::from("event log poisoned")))?
            .push(event.clone());
        Ok(())
    }
}

/// Best-effort fan-out of tracking events to zero or more sinks.
#[derive(Default)]
pub struct TrackingEmitter {
    sinks: Vec<Box<dyn TrackingSink>>,
}

impl TrackingEmitter {
    /// Creates an emitter over an injected list of sinks. An empty list
    /// is valid: emission becomes a no-op.
    #[must_use]
    pub const fn new(sinks: Vec<Box<dyn TrackingSink>>) -> Self {
        Self { sinks }
    }

    /// An emitter with no sinks, for hosts without analytics access.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Delivers one event to every sink. Failures are logged and
    /// swallowed; this never returns an error and never panics a caller.
    pub fn emit(&self, event: &TrackingEvent) {
        for sink in &self.sinks {
            if let Err(err) = sink.deliver(event) {
                debug!(event = event.name(), %err, "tracking sink failed");
            }
        }
    }
}

impl std::fmt::Debug for TrackingEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingEmitter")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Reports a confirmed quote submission.
pub fn track_quote_submitted(
    emitter: &TrackingEmitter,
    locale: Locale,
    service_type: &str,
    attribution: Option<AttributionRecord>,
) {
    emitter.emit(&TrackingEvent::QuoteSubmitted {
        locale,
        service_type: service_type.to_string(),
        attribution,
    });
}

/// Reports a confirmed contact submission.
pub fn track_contact_submitted(
    emitter: &TrackingEmitter,
    locale: Locale,
    attribution: Option<AttributionRecord>,
) {
    emitter.emit(&TrackingEvent::ContactSubmitted {
        locale,
        attribution,
    });
}

/// Reports a relocation landing-page CTA click.
pub fn track_relocation_cta(
    emitter: &TrackingEmitter,
    locale: Locale,
    city: &str,
    position: CtaPosition,
    action: CtaAction,
) {
    emitter.emit(&TrackingEvent::RelocationCta {
        locale,
        city: city.to_string(),
        position,
        action,
    });
}

/// Reports a shipment reference lookup.
pub fn track_shipment_lookup(emitter: &TrackingEmitter, locale: Locale, reference: &str) {
    emitter.emit(&TrackingEvent::ShipmentLookup {
        locale,
        reference: reference.to_string(),
    });
}
