// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The wire shape of one row in the hosted `quotes` table.
///
/// Field names are snake_case on the wire. Optional inputs the user left
/// blank are `None`, never empty strings or zeros: the composition step in
/// the api crate normalizes them before a record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Service code (`spanish-road`, `relocation`, ...).
    pub service_type: String,
    /// Origin city or address.
    pub origin: String,
    /// Destination city or address.
    pub destination: String,
    /// Requested pickup date, when given.
    pub pickup_date: Option<String>,
    /// Requested delivery date, when given.
    pub delivery_date: Option<String>,
    /// Cargo weight in kilograms.
    pub weight: f64,
    /// Cargo length in centimetres, when given.
    pub length: Option<f64>,
    /// Cargo width in centimetres, when given.
    pub width: Option<f64>,
    /// Cargo height in centimetres, when given.
    pub height: Option<f64>,
    /// Selected special-requirement codes; `None` when none were selected.
    pub special_requirements: Option<Vec<String>>,
    /// Name of the person requesting the quote.
    pub contact_name: String,
    /// Company name, when given.
    pub company_name: Option<String>,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// The advisory estimate shown at submission time, when one was
    /// computed.
    pub estimated_cost: Option<f64>,
    /// Serialized attribution metadata, when a record existed at
    /// submission time.
    pub notes: Option<String>,
}

/// The wire shape of one row in the hosted `contact_submissions` table.
/// All fields are plain strings; optional inputs are submitted as entered,
/// including empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Name of the sender.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Phone number, possibly empty.
    pub phone: String,
    /// Company name, possibly empty.
    pub company: String,
    /// Message body.
    pub message: String,
}
