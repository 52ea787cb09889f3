// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pricing constants for the client-side cost estimate.
//!
//! The estimate shown in the wizard summary is non-binding; a formal quote
//! is prepared by the sales team after submission. The formula is
//! `base_rate(service) + weight * WEIGHT_FACTOR + requirements * SPECIAL_REQUIREMENT_COST`.

use crate::types::ServiceType;
use std::str::FromStr;

/// Base rate in EUR applied when the selected service code is not recognized.
pub const DEFAULT_BASE_RATE: f64 = 300.0;

/// Estimate contribution per kilogram of cargo weight, in EUR.
pub const WEIGHT_FACTOR: f64 = 0.5;

/// Flat estimate contribution per selected special requirement, in EUR.
pub const SPECIAL_REQUIREMENT_COST: f64 = 50.0;

/// Special-requirement codes selectable on the cargo step.
pub const SPECIAL_REQUIREMENT_OPTIONS: [&str; 6] = [
    "fragile",
    "temperature-controlled",
    "hazardous",
    "insurance",
    "express-delivery",
    "loading-assistance",
];

/// Returns the base rate in EUR for a service type.
#[must_use]
pub const fn base_rate(service: ServiceType) -> f64 {
    match service {
        ServiceType::SpanishRoad => 300.0,
        ServiceType::EuropeanRoad => 450.0,
        ServiceType::Relocation => 600.0,
        ServiceType::Global => 900.0,
        ServiceType::Warehousing => 250.0,
        ServiceType::Consultancy => 200.0,
    }
}

/// Returns the base rate for a raw service code.
///
/// Unrecognized codes fall back to [`DEFAULT_BASE_RATE`] rather than
/// failing; the estimate is advisory and must never block the form.
#[must_use]
pub fn base_rate_for_code(code: &str) -> f64 {
    ServiceType::from_str(code).map_or(DEFAULT_BASE_RATE, base_rate)
}
