// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The persisted attribution slot.
///
/// The wire form is camelCase JSON with absent fields omitted, matching the
/// shape historically stored by the site. Unknown stored fields are ignored
/// on read so older records keep loading after a schema change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributionRecord {
    /// `utm_source` of the most recent campaign touch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    /// `utm_medium` of the most recent campaign touch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    /// `utm_campaign` of the most recent campaign touch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    /// `utm_term` of the most recent campaign touch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    /// `utm_content` of the most recent campaign touch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    /// Referral code (`ref` query parameter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_code: Option<String>,
    /// Partner code (`partner` query parameter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    /// Document referrer captured on the first touch. Never overwritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    /// Path (including query string) of the first page viewed. Never
    /// overwritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_path: Option<String>,
    /// When the visitor was first seen. Set once, never overwritten.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub first_touch_at: Option<OffsetDateTime>,
    /// When the visitor was last seen. Refreshed on every page view.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub last_touch_at: Option<OffsetDateTime>,
}

/// A single page navigation as seen by the attribution store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// The path of the page, without query string (e.g. `/get-quote`).
    pub path: String,
    /// The raw query string, without the leading `?`. May be empty.
    pub query: String,
    /// The document referrer, if the host exposes one.
    pub referrer: Option<String>,
}

impl PageView {
    /// Creates a page view for a path with no query string or referrer.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            query: String::new(),
            referrer: None,
        }
    }

    /// The landing path recorded on a first touch: path plus query string.
    #[must_use]
    pub fn landing_path(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// Serializes an attribution record into the free-text `notes` field of a
/// quote submission.
///
/// Returns `None` when the record cannot be serialized; the submission then
/// simply carries no attribution note. Attribution must never block a
/// submission.
#[must_use]
pub fn format_for_notes(record: &AttributionRecord) -> Option<String> {
    serde_json::to_string(record).ok()
}
