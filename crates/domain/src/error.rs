// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The service code does not name a known service type.
    InvalidServiceType(String),
    /// The locale code is neither `en` nor `es`.
    InvalidLocale(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidServiceType(code) => write!(f, "Unknown service type '{code}'"),
            Self::InvalidLocale(code) => write!(f, "Unknown locale '{code}'"),
        }
    }
}

impl std::error::Error for DomainError {}
