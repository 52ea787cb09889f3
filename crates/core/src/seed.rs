// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Seed values handed to the quote wizard through navigation state.
///
/// The instant-quote bar, service pages and relocation landing pages all
/// link to the wizard with some fields pre-filled. The wire form is
/// camelCase JSON, matching the navigation-state shape the site has always
/// used. All fields are optional; absent fields leave the wizard blank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteSeed {
    /// Pre-selected service code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    /// Pre-filled origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Pre-filled destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Pre-filled weight, as entered (string, not parsed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Pre-filled contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Planned date, seeded into the pickup date field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_date: Option<String>,
    /// City context from relocation landing pages; used as the origin when
    /// no explicit origin is seeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl QuoteSeed {
    /// Seed used by relocation landing-page CTAs: service pre-set to
    /// relocation, city carried as origin context.
    #[must_use]
    pub fn for_relocation(city: &str) -> Self {
        Self {
            service_type: Some(String::from("relocation")),
            city: Some(city.to_string()),
            ..Self::default()
        }
    }
}
