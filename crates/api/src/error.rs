// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the orchestration boundary.

use time::Duration;

/// A field error carrying the human-readable message for the requested
/// locale, ready for the UI to render next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedIssue {
    /// The snake_case wire name of the offending field.
    pub field: &'static str,
    /// The localized message.
    pub message: &'static str,
}

/// User-visible submission failures.
///
/// These are the only errors a form surfaces. Storage and tracking
/// degradation are absorbed below this boundary and never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Whole-schema validation failed; the form stays where it is and
    /// shows the field errors.
    Validation {
        /// One localized message per offending field.
        issues: Vec<LocalizedIssue>,
    },
    /// A successful submission completed within the duplicate-submission
    /// window. Recoverable by waiting; the gateway was not contacted.
    RateLimited {
        /// How long until the window reopens.
        retry_after: Duration,
    },
    /// A submission is already in flight; the click is dropped.
    SubmissionInFlight,
    /// The gateway rejected the insert or confirmed no row. Retryable
    /// immediately; the duplicate-submission window is not started.
    Gateway {
        /// Diagnostic detail, logged but not shown to the user; the UI
        /// shows the generic localized failure copy instead.
        detail: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { issues } => {
                write!(f, "Validation failed for {} field(s)", issues.len())
            }
            Self::RateLimited { retry_after } => {
                write!(
                    f,
                    "Submitted too recently; retry in {} seconds",
                    retry_after.whole_seconds().max(0)
                )
            }
            Self::SubmissionInFlight => write!(f, "A submission is already in progress"),
            Self::Gateway { detail } => write!(f, "Submission failed: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}
