// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! English and Spanish copy for validation and submission feedback.
//!
//! Validation rules are locale-independent; this module is the
//! presentation layer that maps a [`ValidationMessage`] code and the
//! toast-level outcomes to the copy shown to the user.

use szi_quote_domain::{Locale, MIN_MESSAGE_LEN, ValidationMessage};

/// Returns the localized message for a validation failure code.
#[must_use]
pub const fn localize_validation(message: ValidationMessage, locale: Locale) -> &'static str {
    match (message, locale) {
        (ValidationMessage::Required, Locale::En) => "This field is required",
        (ValidationMessage::Required, Locale::Es) => "Este campo es obligatorio",
        (ValidationMessage::UnknownServiceType, Locale::En) => "Please select a service type",
        (ValidationMessage::UnknownServiceType, Locale::Es) => {
            "Por favor selecciona un tipo de servicio"
        }
        (ValidationMessage::InvalidEmail, Locale::En) => "Please enter a valid email address",
        (ValidationMessage::InvalidEmail, Locale::Es) => {
            "Por favor introduce un correo electrónico válido"
        }
        (ValidationMessage::NotAPositiveNumber, Locale::En) => "Must be a positive number",
        (ValidationMessage::NotAPositiveNumber, Locale::Es) => "Debe ser un número positivo",
        (ValidationMessage::MessageTooShort, Locale::En) => {
            "Please tell us a bit more (at least 10 characters)"
        }
        (ValidationMessage::MessageTooShort, Locale::Es) => {
            "Cuéntanos un poco más (al menos 10 caracteres)"
        }
    }
}

const _: () = assert!(MIN_MESSAGE_LEN == 10);

/// Toast-level copy for one form in one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastCopy {
    /// Headline shown when the submission succeeds.
    pub success_title: &'static str,
    /// Detail shown when the submission succeeds.
    pub success_description: &'static str,
    /// Headline shown when the gateway insert fails.
    pub error_title: &'static str,
    /// Detail shown when the gateway insert fails.
    pub error_description: &'static str,
    /// Headline shown when the duplicate-submission window blocks.
    pub rate_limit_title: &'static str,
    /// Detail shown when the duplicate-submission window blocks.
    pub rate_limit_description: &'static str,
}

/// Toast copy for the quote wizard.
#[must_use]
pub const fn quote_copy(locale: Locale) -> ToastCopy {
    match locale {
        Locale::En => ToastCopy {
            success_title: "Quote Request Submitted!",
            success_description: "Our team will contact you within 2 hours with a formal quote.",
            error_title: "Error",
            error_description: "Failed to submit quote. Please try again.",
            rate_limit_title: "Please wait",
            rate_limit_description:
                "You recently submitted a quote request. Please wait a few seconds before trying again.",
        },
        Locale::Es => ToastCopy {
            success_title: "¡Solicitud de presupuesto enviada!",
            success_description:
                "Nuestro equipo te contactará en menos de 2 horas con un presupuesto formal.",
            error_title: "Error",
            error_description: "No se pudo enviar el presupuesto. Por favor inténtalo de nuevo.",
            rate_limit_title: "Por favor espera",
            rate_limit_description:
                "Acabas de enviar una solicitud de presupuesto. Espera unos segundos antes de intentarlo de nuevo.",
        },
    }
}

/// Toast copy for the contact form.
#[must_use]
pub const fn contact_copy(locale: Locale) -> ToastCopy {
    match locale {
        Locale::En => ToastCopy {
            success_title: "Message sent!",
            success_description: "Thanks for reaching out. We will get back to you shortly.",
            error_title: "Error",
            error_description: "Failed to send your message. Please try again.",
            rate_limit_title: "Please wait",
            rate_limit_description:
                "You recently sent a message. Please wait a few seconds before trying again.",
        },
        Locale::Es => ToastCopy {
            success_title: "¡Mensaje enviado!",
            success_description: "Gracias por escribirnos. Te responderemos en breve.",
            error_title: "Error",
            error_description: "No se pudo enviar tu mensaje. Por favor inténtalo de nuevo.",
            rate_limit_title: "Por favor espera",
            rate_limit_description:
                "Acabas de enviar un mensaje. Espera unos segundos antes de intentarlo de nuevo.",
        },
    }
}
