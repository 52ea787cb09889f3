// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::record::{AttributionRecord, PageView};
use time::OffsetDateTime;
use tracing::debug;

/// Name of the durable slot a browser host backs the storage with.
pub const ATTRIBUTION_STORAGE_KEY: &str = "szi_attribution";

/// The query parameters the attribution store recognizes. Any other
/// parameter in the query string is ignored.
const RECOGNIZED_PARAMS: [&str; 7] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "ref",
    "partner",
];

/// A single-slot string storage capability.
///
/// Hosts that can persist (browser local storage, a file, a test buffer)
/// implement this; hosts that cannot plug in [`DisabledStorage`].
pub trait AttributionStorage {
    /// Reads the raw slot contents, or `None` when nothing is stored.
    fn get(&self) -> Option<String>;

    /// Replaces the slot contents wholesale.
    fn put(&mut self, value: &str);
}

/// In-memory slot, used by tests and short-lived hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }
}

impl AttributionStorage for MemoryStorage {
    fn get(&self) -> Option<String> {
        self.slot.clone()
    }

    fn put(&mut self, value: &str) {
        self.slot = Some(value.to_string());
    }
}

/// Storage for hosts without durable storage access.
///
/// Reads return nothing and writes are dropped, so the attribution store
/// degrades to a no-op instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStorage;

impl AttributionStorage for DisabledStorage {
    fn get(&self) -> Option<String> {
        None
    }

    fn put(&mut self, _value: &str) {}
}

/// Reads and merges the persisted attribution record.
///
/// The merge rules are:
/// - first-touch fields (`landing_path`, `referrer`, `first_touch_at`) are
///   set when the record is created and never overwritten afterwards;
/// - recognized query parameters overwrite their field on every visit where
///   they are present (last-touch wins), and are left untouched otherwise;
/// - `last_touch_at` is refreshed on every visit.
#[derive(Debug, Clone, Default)]
pub struct AttributionStore<S: AttributionStorage> {
    storage: S,
}

impl<S: AttributionStorage> AttributionStore<S> {
    /// Creates a store over the given storage capability.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the persisted record.
    ///
    /// A missing or malformed slot yields `None`; corrupt contents are
    /// never an error.
    #[must_use]
    pub fn load(&self) -> Option<AttributionRecord> {
        let raw: String = self.storage.get()?;
        serde_json::from_str(&raw).ok()
    }

    /// Merges a page view into the persisted record and writes it back.
    ///
    /// Called once per route change by the hosting application. `now` is
    /// the wall-clock instant of the visit; it becomes `first_touch_at` on
    /// record creation and `last_touch_at` always.
    pub fn save(&mut self, view: &PageView, now: OffsetDateTime) {
        let mut record: AttributionRecord = self.load().unwrap_or_else(|| AttributionRecord {
            landing_path: Some(view.landing_path()),
            referrer: view.referrer.clone().filter(|r| !r.is_empty()),
            first_touch_at: Some(now),
            ..AttributionRecord::default()
        });

        apply_query_params(&mut record, &view.query);
        record.last_touch_at = Some(now);

        if let Ok(serialized) = serde_json::to_string(&record) {
            debug!(path = %view.path, "attribution slot updated");
            self.storage.put(&serialized);
        }
    }
}

impl AttributionStore<DisabledStorage> {
    /// A store that degrades to a no-op, for hosts without storage access.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(DisabledStorage)
    }
}

/// Overwrites attribution fields from the recognized query parameters.
/// Absent or empty parameters leave the stored value untouched.
fn apply_query_params(record: &mut AttributionRecord, query: &str) {
    for (key, value) in parse_query(query) {
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "utm_source" => record.utm_source = Some(value),
            "utm_medium" => record.utm_medium = Some(value),
            "utm_campaign" => record.utm_campaign = Some(value),
            "utm_term" => record.utm_term = Some(value),
            "utm_content" => record.utm_content = Some(value),
            "ref" => record.ref_code = Some(value),
            "partner" => record.partner = Some(value),
            _ => {}
        }
    }
}

/// Splits a raw query string into decoded key/value pairs, keeping only the
/// recognized attribution parameters.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key: String = percent_decode(key);
            RECOGNIZED_PARAMS
                .contains(&key.as_str())
                .then(|| (key, percent_decode(value)))
        })
        .collect()
}

/// Decodes `%XX` escapes and `+`-encoded spaces. Invalid escapes are kept
/// verbatim rather than rejected; query strings come from the address bar
/// and are best-effort input.
fn percent_decode(input: &str) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    let bytes: &[u8] = input.as_bytes();
    let mut i: usize = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 3 <= bytes.len() => {
                let high: Option<u32> = char::from(bytes[i + 1]).to_digit(16);
                let low: Option<u32> = char::from(bytes[i + 2]).to_digit(16);
                if let (Some(high), Some(low)) = (high, low) {
                    #[allow(clippy::cast_possible_truncation)]
                    out.push((high * 16 + low) as u8);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
