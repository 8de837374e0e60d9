//! Management fee, profit, contingency and consumption tax.
//!
//! ```text
//! adjusted subtotal ──┬── × 8%  management
//!                     ├── × 18% profit
//!                     └── × 10% contingency
//!                              │
//!        before tax = subtotal + management + contingency + profit
//!                              │
//!                     tax = before tax × 10%
//!                     total = before tax + tax
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::BasisPoints;

pub const MANAGEMENT_RATE: BasisPoints = BasisPoints::from_bps(800);
pub const PROFIT_RATE: BasisPoints = BasisPoints::from_bps(1800);
pub const CONTINGENCY_RATE: BasisPoints = BasisPoints::from_bps(1000);
/// Fixed consumption tax.
pub const CONSUMPTION_TAX_RATE: BasisPoints = BasisPoints::from_bps(1000);

/// Amounts derived from the rush-adjusted subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Overheads {
    pub management: f64,
    pub profit: f64,
    pub contingency: f64,
    pub before_tax: f64,
    pub tax: f64,
    pub total: f64,
}

impl Overheads {
    /// Computes overheads and tax for a rush-adjusted subtotal.
    pub fn from_adjusted_subtotal(adjusted_subtotal: f64) -> Self {
        let management = MANAGEMENT_RATE.apply(adjusted_subtotal);
        let profit = PROFIT_RATE.apply(adjusted_subtotal);
        let contingency = CONTINGENCY_RATE.apply(adjusted_subtotal);
        let before_tax = adjusted_subtotal + management + contingency + profit;
        let tax = CONSUMPTION_TAX_RATE.apply(before_tax);

        Overheads {
            management,
            profit,
            contingency,
            before_tax,
            tax,
            total: before_tax + tax,
        }
    }
}
