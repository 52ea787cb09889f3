// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ContactField, ContactFormData, FieldIssue, QuoteField, QuoteFormData, ValidationMessage,
    validate_contact, validate_quote, validate_quote_fields,
};

fn create_test_quote() -> QuoteFormData {
    QuoteFormData {
        service_type: String::from("spanish-road"),
        origin: String::from("Madrid"),
        destination: String::from("Barcelona"),
        pickup_date: String::from("2026-01-01"),
        delivery_date: String::from("2026-01-02"),
        weight: String::from("500"),
        length: String::from("200"),
        width: String::from("100"),
        height: String::from("150"),
        special_requirements: Vec::new(),
        contact_name: String::from("John Doe"),
        company_name: String::from("Acme Corp"),
        email: String::from("john@example.com"),
        phone: String::from("+34612345678"),
    }
}

fn create_test_contact() -> ContactFormData {
    ContactFormData {
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: String::new(),
        company: String::new(),
        message: String::from("I need help with a shipment."),
    }
}

fn issue_for<F: Copy + PartialEq>(
    issues: &[FieldIssue<F>],
    field: F,
) -> Option<ValidationMessage> {
    issues
        .iter()
        .find(|issue| issue.field == field)
        .map(|issue| issue.message)
}

#[test]
fn test_validate_quote_accepts_valid_payload() {
    let data: QuoteFormData = create_test_quote();
    assert!(validate_quote(&data).is_ok());
}

#[test]
fn test_validate_quote_accepts_blank_optionals() {
    let mut data: QuoteFormData = create_test_quote();
    data.pickup_date = String::new();
    data.delivery_date = String::new();
    data.length = String::new();
    data.width = String::new();
    data.height = String::new();
    data.company_name = String::new();
    assert!(validate_quote(&data).is_ok());
}

#[test]
fn test_validate_quote_rejects_missing_service_type() {
    let mut data: QuoteFormData = create_test_quote();
    data.service_type = String::new();

    let issues: Vec<FieldIssue<QuoteField>> =
        validate_quote(&data).expect_err("blank service type must fail");
    assert_eq!(
        issue_for(&issues, QuoteField::ServiceType),
        Some(ValidationMessage::Required)
    );
}

#[test]
fn test_validate_quote_rejects_unknown_service_type() {
    let mut data: QuoteFormData = create_test_quote();
    data.service_type = String::from("teleportation");

    let issues: Vec<FieldIssue<QuoteField>> =
        validate_quote(&data).expect_err("unknown service type must fail");
    assert_eq!(
        issue_for(&issues, QuoteField::ServiceType),
        Some(ValidationMessage::UnknownServiceType)
    );
}

#[test]
fn test_validate_quote_rejects_zero_weight() {
    let mut data: QuoteFormData = create_test_quote();
    data.weight = String::from("0");

    let issues: Vec<FieldIssue<QuoteField>> =
        validate_quote(&data).expect_err("zero weight must fail");
    assert_eq!(
        issue_for(&issues, QuoteField::Weight),
        Some(ValidationMessage::NotAPositiveNumber)
    );
}

#[test]
fn test_validate_quote_rejects_negative_weight() {
    let mut data: QuoteFormData = create_test_quote();
    data.weight = String::from("-12");

    assert!(validate_quote(&data).is_err());
}

#[test]
fn test_validate_quote_rejects_non_numeric_weight() {
    let mut data: QuoteFormData = create_test_quote();
    data.weight = String::from("heavy");

    let issues: Vec<FieldIssue<QuoteField>> =
        validate_quote(&data).expect_err("non-numeric weight must fail");
    assert_eq!(
        issue_for(&issues, QuoteField::Weight),
        Some(ValidationMessage::NotAPositiveNumber)
    );
}

#[test]
fn test_validate_quote_rejects_infinite_weight() {
    let mut data: QuoteFormData = create_test_quote();
    data.weight = String::from("inf");

    assert!(validate_quote(&data).is_err());
}

#[test]
fn test_validate_quote_accepts_positive_weight() {
    let mut data: QuoteFormData = create_test_quote();
    data.weight = String::from("500");

    assert!(validate_quote(&data).is_ok());
}

#[test]
fn test_validate_quote_rejects_invalid_email() {
    let mut data: QuoteFormData = create_test_quote();
    data.email = String::from("not-an-email");

    let issues: Vec<FieldIssue<QuoteField>> =
        validate_quote(&data).expect_err("invalid email must fail");
    assert_eq!(
        issue_for(&issues, QuoteField::Email),
        Some(ValidationMessage::InvalidEmail)
    );
}

#[test]
fn test_validate_quote_rejects_non_numeric_dimension() {
    let mut data: QuoteFormData = create_test_quote();
    data.length = String::from("long");

    let issues: Vec<FieldIssue<QuoteField>> =
        validate_quote(&data).expect_err("non-numeric length must fail");
    assert_eq!(
        issue_for(&issues, QuoteField::Length),
        Some(ValidationMessage::NotAPositiveNumber)
    );
}

#[test]
fn test_validate_quote_reports_every_offending_field() {
    let data: QuoteFormData = QuoteFormData::default();

    let issues: Vec<FieldIssue<QuoteField>> =
        validate_quote(&data).expect_err("empty form must fail");
    for field in [
        QuoteField::ServiceType,
        QuoteField::Origin,
        QuoteField::Destination,
        QuoteField::Weight,
        QuoteField::ContactName,
        QuoteField::Email,
        QuoteField::Phone,
    ] {
        assert!(issue_for(&issues, field).is_some(), "missing issue: {field}");
    }
}

#[test]
fn test_validate_quote_fields_checks_only_the_subset() {
    let data: QuoteFormData = QuoteFormData {
        service_type: String::from("relocation"),
        ..QuoteFormData::default()
    };

    // Everything else is empty, but step 1 only owns service_type.
    let result = validate_quote_fields(&data, &[QuoteField::ServiceType]);
    assert!(result.is_ok());
}

#[test]
fn test_validate_quote_fields_reports_subset_violations() {
    let data: QuoteFormData = QuoteFormData::default();

    let issues: Vec<FieldIssue<QuoteField>> =
        validate_quote_fields(&data, &[QuoteField::Origin, QuoteField::Destination])
            .expect_err("blank route must fail");
    assert_eq!(issues.len(), 2);
    assert_eq!(
        issue_for(&issues, QuoteField::Origin),
        Some(ValidationMessage::Required)
    );
}

#[test]
fn test_validate_contact_accepts_minimal_payload() {
    let data: ContactFormData = create_test_contact();
    assert!(validate_contact(&data).is_ok());
}

#[test]
fn test_validate_contact_rejects_too_short_message() {
    let mut data: ContactFormData = create_test_contact();
    data.message = String::from("Hi");

    let issues: Vec<FieldIssue<ContactField>> =
        validate_contact(&data).expect_err("short message must fail");
    assert_eq!(
        issue_for(&issues, ContactField::Message),
        Some(ValidationMessage::MessageTooShort)
    );
}

#[test]
fn test_validate_contact_rejects_blank_message() {
    let mut data: ContactFormData = create_test_contact();
    data.message = String::from("   ");

    let issues: Vec<FieldIssue<ContactField>> =
        validate_contact(&data).expect_err("blank message must fail");
    assert_eq!(
        issue_for(&issues, ContactField::Message),
        Some(ValidationMessage::Required)
    );
}

#[test]
fn test_validate_contact_rejects_invalid_email() {
    let mut data: ContactFormData = create_test_contact();
    data.email = String::from("jane_at_example.com");

    let issues: Vec<FieldIssue<ContactField>> =
        validate_contact(&data).expect_err("invalid email must fail");
    assert_eq!(
        issue_for(&issues, ContactField::Email),
        Some(ValidationMessage::InvalidEmail)
    );
}

#[test]
fn test_validate_contact_rejects_blank_name() {
    let mut data: ContactFormData = create_test_contact();
    data.name = String::new();

    let issues: Vec<FieldIssue<ContactField>> =
        validate_contact(&data).expect_err("blank name must fail");
    assert_eq!(
        issue_for(&issues, ContactField::Name),
        Some(ValidationMessage::Required)
    );
}
