// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Declarative validation rules for the quote and contact forms.
//!
//! Each schema is a flat list of per-field constraints evaluated in order.
//! The rules are locale-independent: a violation is reported as a
//! [`ValidationMessage`] code, and the presentation layer maps codes to
//! English or Spanish copy. At most one violation is reported per field
//! (the first rule that fails wins).

use crate::types::{ContactField, ContactFormData, QuoteField, QuoteFormData, ServiceType};
use std::str::FromStr;

/// Minimum trimmed length of a contact message. Rejects throwaway input
/// like "Hi" while accepting any ordinary sentence.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Locale-independent code identifying why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMessage {
    /// A required field is empty or blank.
    Required,
    /// The value does not name a known service type.
    UnknownServiceType,
    /// The value is not a valid email address.
    InvalidEmail,
    /// The value must parse as a strictly positive finite number.
    NotAPositiveNumber,
    /// The message is shorter than [`MIN_MESSAGE_LEN`] characters.
    MessageTooShort,
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue<F> {
    /// The offending field.
    pub field: F,
    /// Why the field was rejected.
    pub message: ValidationMessage,
}

/// One declarative constraint: a field plus a predicate over the whole form.
struct Rule<D, F> {
    field: F,
    check: fn(&D) -> Option<ValidationMessage>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks the shape of an email address: exactly one `@`, a non-empty local
/// part, and a domain containing a dot with non-empty labels. Matches the
/// permissive pattern the forms have always used; deliverability is not
/// verified here.
fn is_valid_email(value: &str) -> bool {
    let trimmed: &str = value.trim();
    if trimmed.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && !tld.is_empty()
}

fn parses_positive(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite() && n > 0.0)
}

fn require(value: &str) -> Option<ValidationMessage> {
    is_blank(value).then_some(ValidationMessage::Required)
}

fn check_service_type(data: &QuoteFormData) -> Option<ValidationMessage> {
    if is_blank(&data.service_type) {
        return Some(ValidationMessage::Required);
    }
    if ServiceType::from_str(data.service_type.trim()).is_err() {
        return Some(ValidationMessage::UnknownServiceType);
    }
    None
}

fn check_weight(data: &QuoteFormData) -> Option<ValidationMessage> {
    if is_blank(&data.weight) {
        return Some(ValidationMessage::Required);
    }
    if !parses_positive(&data.weight) {
        return Some(ValidationMessage::NotAPositiveNumber);
    }
    None
}

/// Optional dimensions may be left blank, but a non-blank value must still
/// parse as a positive number.
fn check_optional_dimension(value: &str) -> Option<ValidationMessage> {
    if is_blank(value) || parses_positive(value) {
        None
    } else {
        Some(ValidationMessage::NotAPositiveNumber)
    }
}

fn check_quote_email(data: &QuoteFormData) -> Option<ValidationMessage> {
    if is_blank(&data.email) {
        return Some(ValidationMessage::Required);
    }
    if !is_valid_email(&data.email) {
        return Some(ValidationMessage::InvalidEmail);
    }
    None
}

const QUOTE_RULES: &[Rule<QuoteFormData, QuoteField>] = &[
    Rule {
        field: QuoteField::ServiceType,
        check: check_service_type,
    },
    Rule {
        field: QuoteField::Origin,
        check: |data| require(&data.origin),
    },
    Rule {
        field: QuoteField::Destination,
        check: |data| require(&data.destination),
    },
    Rule {
        field: QuoteField::Weight,
        check: check_weight,
    },
    Rule {
        field: QuoteField::Length,
        check: |data| check_optional_dimension(&data.length),
    },
    Rule {
        field: QuoteField::Width,
        check: |data| check_optional_dimension(&data.width),
    },
    Rule {
        field: QuoteField::Height,
        check: |data| check_optional_dimension(&data.height),
    },
    Rule {
        field: QuoteField::ContactName,
        check: |data| require(&data.contact_name),
    },
    Rule {
        field: QuoteField::Email,
        check: check_quote_email,
    },
    Rule {
        field: QuoteField::Phone,
        check: |data| require(&data.phone),
    },
];

fn check_contact_email(data: &ContactFormData) -> Option<ValidationMessage> {
    if is_blank(&data.email) {
        return Some(ValidationMessage::Required);
    }
    if !is_valid_email(&data.email) {
        return Some(ValidationMessage::InvalidEmail);
    }
    None
}

fn check_message(data: &ContactFormData) -> Option<ValidationMessage> {
    if is_blank(&data.message) {
        return Some(ValidationMessage::Required);
    }
    if data.message.trim().chars().count() < MIN_MESSAGE_LEN {
        return Some(ValidationMessage::MessageTooShort);
    }
    None
}

const CONTACT_RULES: &[Rule<ContactFormData, ContactField>] = &[
    Rule {
        field: ContactField::Name,
        check: |data| require(&data.name),
    },
    Rule {
        field: ContactField::Email,
        check: check_contact_email,
    },
    Rule {
        field: ContactField::Message,
        check: check_message,
    },
];

fn run_rules<D, F: Copy + PartialEq>(
    rules: &[Rule<D, F>],
    data: &D,
    fields: Option<&[F]>,
) -> Result<(), Vec<FieldIssue<F>>> {
    let mut issues: Vec<FieldIssue<F>> = Vec::new();
    for rule in rules {
        if let Some(subset) = fields
            && !subset.contains(&rule.field)
        {
            continue;
        }
        // First violation per field wins; rules are one-per-field, but the
        // guard keeps the invariant if that ever changes.
        if issues.iter().any(|issue| issue.field == rule.field) {
            continue;
        }
        if let Some(message) = (rule.check)(data) {
            issues.push(FieldIssue {
                field: rule.field,
                message,
            });
        }
    }
    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

/// Validates the whole quote schema.
///
/// # Errors
///
/// Returns one [`FieldIssue`] per offending field.
pub fn validate_quote(data: &QuoteFormData) -> Result<(), Vec<FieldIssue<QuoteField>>> {
    run_rules(QUOTE_RULES, data, None)
}

/// Validates only the named subset of quote fields.
///
/// Used by the wizard to gate a step on the fields it owns without
/// surfacing errors for fields the user has not reached yet.
///
/// # Errors
///
/// Returns one [`FieldIssue`] per offending field in the subset.
pub fn validate_quote_fields(
    data: &QuoteFormData,
    fields: &[QuoteField],
) -> Result<(), Vec<FieldIssue<QuoteField>>> {
    run_rules(QUOTE_RULES, data, Some(fields))
}

/// Validates the whole contact schema.
///
/// # Errors
///
/// Returns one [`FieldIssue`] per offending field.
pub fn validate_contact(data: &ContactFormData) -> Result<(), Vec<FieldIssue<ContactField>>> {
    run_rules(CONTACT_RULES, data, None)
}

/// Validates only the named subset of contact fields.
///
/// # Errors
///
/// Returns one [`FieldIssue`] per offending field in the subset.
pub fn validate_contact_fields(
    data: &ContactFormData,
    fields: &[ContactField],
) -> Result<(), Vec<FieldIssue<ContactField>>> {
    run_rules(CONTACT_RULES, data, Some(fields))
}
