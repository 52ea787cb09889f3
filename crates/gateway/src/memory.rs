// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::GatewayError;
use crate::records::{ContactRecord, QuoteRecord};
use crate::{InsertReceipt, SubmissionGateway};
use tracing::{debug, warn};

/// How the in-memory gateway responds to the next insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FailureMode {
    /// Accept and record the insert.
    #[default]
    Accept,
    /// Reject the insert outright.
    Reject,
    /// Report success but confirm zero rows.
    AcceptWithoutRow,
}

/// In-memory gateway backend.
///
/// Records accepted inserts for inspection and can be switched into
/// failure modes, so orchestration tests can drive the insert-failed and
/// unconfirmed-insert paths without a hosted backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    quotes: Vec<QuoteRecord>,
    contacts: Vec<ContactRecord>,
    failure_mode: FailureMode,
}

impl MemoryGateway {
    /// Creates an empty gateway that accepts all inserts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent inserts fail as rejected.
    pub fn fail_next_inserts(&mut self) {
        self.failure_mode = FailureMode::Reject;
    }

    /// Makes subsequent inserts report success without a confirmed row.
    pub fn confirm_nothing(&mut self) {
        self.failure_mode = FailureMode::AcceptWithoutRow;
    }

    /// Restores normal accepting behavior.
    pub fn accept_inserts(&mut self) {
        self.failure_mode = FailureMode::Accept;
    }

    /// The quote rows accepted so far, in insertion order.
    #[must_use]
    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    /// The contact rows accepted so far, in insertion order.
    #[must_use]
    pub fn contacts(&self) -> &[ContactRecord] {
        &self.contacts
    }

    fn receipt(&self) -> Result<InsertReceipt, GatewayError> {
        match self.failure_mode {
            FailureMode::Accept => Ok(InsertReceipt { rows: 1 }),
            FailureMode::Reject => {
                warn!("memory gateway rejecting insert");
                Err(GatewayError::Rejected(String::from(
                    "backend unavailable",
                )))
            }
            FailureMode::AcceptWithoutRow => Ok(InsertReceipt { rows: 0 }),
        }
    }
}

impl SubmissionGateway for MemoryGateway {
    fn insert_quote(&mut self, record: &QuoteRecord) -> Result<InsertReceipt, GatewayError> {
        let receipt: InsertReceipt = self.receipt()?;
        if receipt.rows > 0 {
            debug!(service_type = %record.service_type, "quote insert accepted");
            self.quotes.push(record.clone());
        }
        Ok(receipt)
    }

    fn insert_contact(&mut self, record: &ContactRecord) -> Result<InsertReceipt, GatewayError> {
        let receipt: InsertReceipt = self.receipt()?;
        if receipt.rows > 0 {
            debug!(email = %record.email, "contact insert accepted");
            self.contacts.push(record.clone());
        }
        Ok(receipt)
    }
}
