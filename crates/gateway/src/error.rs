// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during a gateway insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend rejected the insert.
    Rejected(String),
    /// The backend reported success without confirming a written row.
    /// Treated as a failure: an unconfirmed insert cannot be shown to the
    /// user as submitted.
    NoConfirmedRow,
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(msg) => write!(f, "Insert rejected: {msg}"),
            Self::NoConfirmedRow => {
                write!(f, "Insert reported success but confirmed no row")
            }
        }
    }
}

impl std::error::Error for GatewayError {}
