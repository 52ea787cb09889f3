// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tracking::{
    CtaAction, CtaPosition, EventLog, SinkError, TrackingEmitter, TrackingEvent, TrackingSink,
    track_relocation_cta, track_shipment_lookup,
};
use szi_quote_domain::Locale;

struct RefusingSink;

impl TrackingSink for RefusingSink {
    fn deliver(&self, _event: &TrackingEvent) -> Result<(), SinkError> {
        Err(SinkError::Rejected(String::from("blocked")))
    }
}

#[test]
fn test_event_log_preserves_delivery_order() {
    let log: EventLog = EventLog::new();
    let emitter: TrackingEmitter = TrackingEmitter::new(vec![Box::new(log.clone())]);

    track_relocation_cta(
        &emitter,
        Locale::En,
        "Valencia",
        CtaPosition::Hero,
        CtaAction::Quote,
    );
    track_shipment_lookup(&emitter, Locale::En, "SZI-1042");

    let events: Vec<TrackingEvent> = log.snapshot();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name(), "relocation_cta_click");
    assert_eq!(events[1].name(), "shipment_lookup");
}

#[test]
fn test_disabled_emitter_is_a_noop() {
    let emitter: TrackingEmitter = TrackingEmitter::disabled();
    track_shipment_lookup(&emitter, Locale::Es, "SZI-7");
}

#[test]
fn test_failing_sink_does_not_stop_later_sinks() {
    let log: EventLog = EventLog::new();
    let emitter: TrackingEmitter =
        TrackingEmitter::new(vec![Box::new(RefusingSink), Box::new(log.clone())]);

    track_shipment_lookup(&emitter, Locale::En, "SZI-9");

    assert_eq!(log.snapshot().len(), 1);
}

#[test]
fn test_cloned_log_handles_share_one_log() {
    let log: EventLog = EventLog::new();
    let handle: EventLog = log.clone();
    let emitter: TrackingEmitter = TrackingEmitter::new(vec![Box::new(log)]);

    track_shipment_lookup(&emitter, Locale::En, "SZI-3");

    assert_eq!(handle.snapshot().len(), 1);
}

#[test]
fn test_relocation_cta_payload_serializes_with_event_tag() {
    let event: TrackingEvent = TrackingEvent::RelocationCta {
        locale: Locale::Es,
        city: String::from("Sevilla"),
        position: CtaPosition::Footer,
        action: CtaAction::Contact,
    };

    let value: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["event"], "relocation_cta_click");
    assert_eq!(value["locale"], "es");
    assert_eq!(value["city"], "Sevilla");
    assert_eq!(value["position"], "footer");
    assert_eq!(value["action"], "contact");
}
