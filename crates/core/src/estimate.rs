// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use szi_quote_domain::{
    QuoteFormData, SPECIAL_REQUIREMENT_COST, WEIGHT_FACTOR, base_rate_for_code,
};

/// A client-computed, non-binding price approximation in EUR.
///
/// Shown on the summary step and attached to the submission; the formal
/// quote is prepared by the sales team afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteEstimate {
    /// The rounded whole-EUR amount.
    pub amount: f64,
}

/// Computes the advisory estimate from the current form input.
///
/// `base_rate(service) + weight * WEIGHT_FACTOR + requirements * SPECIAL_REQUIREMENT_COST`,
/// rounded half-to-even to a whole amount. Unrecognized service codes use
/// the default base rate, and an unparseable weight contributes nothing;
/// the estimate is advisory and must never fail.
#[must_use]
pub fn compute_estimate(data: &QuoteFormData) -> QuoteEstimate {
    let base: f64 = base_rate_for_code(data.service_type.trim());
    let weight: f64 = data.weight.trim().parse::<f64>().unwrap_or(0.0);
    #[allow(clippy::cast_precision_loss)]
    let requirement_cost: f64 = data.special_requirements.len() as f64 * SPECIAL_REQUIREMENT_COST;

    let total: f64 = base + weight * WEIGHT_FACTOR + requirement_cost;
    QuoteEstimate {
        amount: total.round_ties_even(),
    }
}
