// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Duration;

/// Errors that can block a submission before it reaches the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A successful submission completed within the duplicate-submission
    /// window; the user must wait before resubmitting.
    RateLimited {
        /// How long until the window reopens.
        retry_after: Duration,
    },
    /// A submission is already in flight for this form.
    SubmissionInFlight,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateLimited { retry_after } => {
                write!(
                    f,
                    "A submission completed recently; retry in {} seconds",
                    retry_after.whole_seconds().max(0)
                )
            }
            Self::SubmissionInFlight => {
                write!(f, "A submission is already in progress")
            }
        }
    }
}

impl std::error::Error for CoreError {}
