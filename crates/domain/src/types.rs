// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed catalogue of services a quote can be requested for.
///
/// The wire form is the kebab-case code used by the quote form and the
/// hosted backend (`"spanish-road"`, `"european-road"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    /// Domestic road transport within Spain.
    SpanishRoad,
    /// Road freight across Europe.
    EuropeanRoad,
    /// Business relocation (office and warehouse moves).
    Relocation,
    /// Intercontinental logistics.
    Global,
    /// Warehousing and storage.
    Warehousing,
    /// Supply chain consultancy.
    Consultancy,
}

impl ServiceType {
    /// All service types, in the order they are offered on the form.
    pub const ALL: [Self; 6] = [
        Self::SpanishRoad,
        Self::EuropeanRoad,
        Self::Relocation,
        Self::Global,
        Self::Warehousing,
        Self::Consultancy,
    ];

    /// Converts this service type to its wire code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SpanishRoad => "spanish-road",
            Self::EuropeanRoad => "european-road",
            Self::Relocation => "relocation",
            Self::Global => "global",
            Self::Warehousing => "warehousing",
            Self::Consultancy => "consultancy",
        }
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spanish-road" => Ok(Self::SpanishRoad),
            "european-road" => Ok(Self::EuropeanRoad),
            "relocation" => Ok(Self::Relocation),
            "global" => Ok(Self::Global),
            "warehousing" => Ok(Self::Warehousing),
            "consultancy" => Ok(Self::Consultancy),
            _ => Err(DomainError::InvalidServiceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two locales the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default locale, no URL prefix).
    #[default]
    En,
    /// Spanish (`/es` URL prefix).
    Es,
}

impl Locale {
    /// Converts this locale to its wire code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(DomainError::InvalidLocale(s.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw input accumulated by the quote wizard.
///
/// Every field holds the user's input verbatim. Numeric and date fields stay
/// strings until submission composition, so invalid input can be surfaced as
/// a field error instead of being silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteFormData {
    /// Selected service code (must match a [`ServiceType`] wire code).
    pub service_type: String,
    /// Origin city or address.
    pub origin: String,
    /// Destination city or address.
    pub destination: String,
    /// Requested pickup date (optional, ISO date string).
    pub pickup_date: String,
    /// Requested delivery date (optional, ISO date string).
    pub delivery_date: String,
    /// Cargo weight in kilograms (required, must parse positive).
    pub weight: String,
    /// Cargo length in centimetres (optional).
    pub length: String,
    /// Cargo width in centimetres (optional).
    pub width: String,
    /// Cargo height in centimetres (optional).
    pub height: String,
    /// Selected special-requirement codes (may be empty).
    pub special_requirements: Vec<String>,
    /// Name of the person requesting the quote.
    pub contact_name: String,
    /// Company name (optional).
    pub company_name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

/// Raw input held by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFormData {
    /// Name of the sender.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: String,
    /// Company name (optional).
    pub company: String,
    /// Message body (required, minimum length enforced).
    pub message: String,
}

/// Names the validatable fields of the quote form.
///
/// Used to address per-field validation errors and to select the subset of
/// rules a wizard step gates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    ServiceType,
    Origin,
    Destination,
    PickupDate,
    DeliveryDate,
    Weight,
    Length,
    Width,
    Height,
    SpecialRequirements,
    ContactName,
    CompanyName,
    Email,
    Phone,
}

impl QuoteField {
    /// Converts this field to its snake_case wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceType => "service_type",
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::PickupDate => "pickup_date",
            Self::DeliveryDate => "delivery_date",
            Self::Weight => "weight",
            Self::Length => "length",
            Self::Width => "width",
            Self::Height => "height",
            Self::SpecialRequirements => "special_requirements",
            Self::ContactName => "contact_name",
            Self::CompanyName => "company_name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl std::fmt::Display for QuoteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Names the validatable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl ContactField {
    /// Converts this field to its snake_case wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
