// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Composition of validated form input into gateway wire records.

use szi_quote::QuoteEstimate;
use szi_quote_domain::{
    ContactField, ContactFormData, FieldIssue, QuoteField, QuoteFormData, ValidationMessage,
    validate_contact, validate_quote,
};
use szi_quote_gateway::{ContactRecord, QuoteRecord};

/// Validates the whole quote schema and composes the insert record.
///
/// Blank optional inputs (dates, dimensions, company name) are normalized
/// to absent rather than submitted as empty strings or parsed as zero.
/// The mandatory `weight` gets no such exemption: it must parse as a
/// strictly positive number or the whole submission is rejected.
///
/// # Errors
///
/// Returns the field issues when validation fails.
pub fn prepare_quote_record(
    data: &QuoteFormData,
    estimate: Option<QuoteEstimate>,
    attribution_note: Option<String>,
) -> Result<QuoteRecord, Vec<FieldIssue<QuoteField>>> {
    validate_quote(data)?;

    let weight: f64 = parse_number(&data.weight).ok_or_else(|| {
        vec![FieldIssue {
            field: QuoteField::Weight,
            message: ValidationMessage::NotAPositiveNumber,
        }]
    })?;

    Ok(QuoteRecord {
        service_type: data.service_type.trim().to_string(),
        origin: data.origin.trim().to_string(),
        destination: data.destination.trim().to_string(),
        pickup_date: normalize_optional(&data.pickup_date),
        delivery_date: normalize_optional(&data.delivery_date),
        weight,
        length: parse_number(&data.length),
        width: parse_number(&data.width),
        height: parse_number(&data.height),
        special_requirements: if data.special_requirements.is_empty() {
            None
        } else {
            Some(data.special_requirements.clone())
        },
        contact_name: data.contact_name.trim().to_string(),
        company_name: normalize_optional(&data.company_name),
        email: data.email.trim().to_string(),
        phone: data.phone.trim().to_string(),
        estimated_cost: estimate.map(|e| e.amount),
        notes: attribution_note,
    })
}

/// Validates the whole contact schema and composes the insert record.
/// Contact fields are submitted as entered; empty optionals stay empty
/// strings per the hosted table's contract.
///
/// # Errors
///
/// Returns the field issues when validation fails.
pub fn prepare_contact_record(
    data: &ContactFormData,
) -> Result<ContactRecord, Vec<FieldIssue<ContactField>>> {
    validate_contact(data)?;

    Ok(ContactRecord {
        name: data.name.clone(),
        email: data.email.clone(),
        phone: data.phone.clone(),
        company: data.company.clone(),
        message: data.message.clone(),
    })
}

fn normalize_optional(value: &str) -> Option<String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}
