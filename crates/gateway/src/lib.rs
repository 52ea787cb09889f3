// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission gateway contract for the SZI marketing site.
//!
//! Form submissions land in a hosted data store through an insert-only
//! API. This crate defines the wire record shapes, the gateway trait the
//! rest of the pipeline programs against, and an in-memory backend used by
//! tests. The hosted backend is opaque: one insert per submission, never
//! updated or deleted by the client afterwards.

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

mod error;
mod memory;
mod records;

#[cfg(test)]
mod tests;

pub use error::GatewayError;
pub use memory::MemoryGateway;
pub use records::{ContactRecord, QuoteRecord};

/// Confirmation of an accepted insert.
///
/// A gateway that reports success must also confirm at least one written
/// row; see [`InsertReceipt::confirmed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertReceipt {
    /// The number of rows the backend confirmed writing.
    pub rows: usize,
}

impl InsertReceipt {
    /// Checks the receipt against a backend that claims success without
    /// confirming a row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NoConfirmedRow`] when zero rows were
    /// confirmed.
    pub const fn confirmed(self) -> Result<Self, GatewayError> {
        if self.rows == 0 {
            Err(GatewayError::NoConfirmedRow)
        } else {
            Ok(self)
        }
    }
}

/// The insert-only API the hosted data store exposes.
///
/// One method per entity type. Implementations report failure through
/// [`GatewayError`]; callers treat a success carrying no confirmed row as
/// a failure too, via [`InsertReceipt::confirmed`].
pub trait SubmissionGateway {
    /// Inserts one quote request.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the backend rejects the record.
    fn insert_quote(&mut self, record: &QuoteRecord) -> Result<InsertReceipt, GatewayError>;

    /// Inserts one contact submission.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the backend rejects the record.
    fn insert_contact(&mut self, record: &ContactRecord) -> Result<InsertReceipt, GatewayError>;
}
