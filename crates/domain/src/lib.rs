// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod constants;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use constants::{
    DEFAULT_BASE_RATE, SPECIAL_REQUIREMENT_COST, SPECIAL_REQUIREMENT_OPTIONS, WEIGHT_FACTOR,
    base_rate, base_rate_for_code,
};
pub use error::DomainError;
pub use types::{ContactField, ContactFormData, Locale, QuoteField, QuoteFormData, ServiceType};
pub use validation::{
    FieldIssue, MIN_MESSAGE_LEN, ValidationMessage, validate_contact, validate_contact_fields,
    validate_quote, validate_quote_fields,
};
