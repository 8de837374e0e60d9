//! # Whole-Yen Quote
//!
//! Rounds an [`EstimateResult`] into the integer amounts a client quote
//! prints, without letting the rounding break the arithmetic on the page.
//!
//! ## Reconciliation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Round each category line half away from zero                        │
//! │  2. target = round(subtotal + profit)                                   │
//! │  3. residual = target − Σ lines   (usually −3 … +3 yen)                 │
//! │  4. residual > 0 goes onto the largest line                             │
//! │     residual < 0 comes off the largest lines, none below zero          │
//! │                                                                         │
//! │  before tax = Σ lines + management + contingency                        │
//! │  tax        = before tax × 10%   (integer, half up)                     │
//! │  total      = before tax + tax                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every printed total is therefore the exact sum of the printed lines above
//! it. The quote total may differ from `round(EstimateResult::total)` by a
//! yen or two; the printed one wins.

use std::cmp::{min, Reverse};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engine::overhead::CONSUMPTION_TAX_RATE;
use crate::engine::{Category, EstimateResult};
use crate::money::Yen;

/// One category line on the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub category: Category,
    pub amount: Yen,
}

/// Client-facing quote in whole yen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Category lines (profit included), in quote order.
    pub lines: Vec<QuoteLine>,
    pub management: Yen,
    pub contingency: Yen,
    pub before_tax: Yen,
    pub tax: Yen,
    pub total: Yen,
}

impl Quote {
    /// Rounds an estimate into a self-consistent quote.
    ///
    /// ## Example
    /// ```rust
    /// use cgquote_core::{estimate, ProductionConfig, Quote, RateTable};
    ///
    /// let result = estimate(&ProductionConfig::default(), &RateTable::studio_standard()).unwrap();
    /// let quote = Quote::from_estimate(&result);
    /// assert_eq!(quote.total.yen(), 1_171_368);
    /// assert_eq!(quote.total, quote.before_tax + quote.tax);
    /// ```
    pub fn from_estimate(result: &EstimateResult) -> Self {
        let mut lines: Vec<QuoteLine> = result
            .breakdown
            .iter()
            .map(|(category, amount)| QuoteLine {
                category,
                amount: Yen::from_amount(amount),
            })
            .collect();

        let target = Yen::from_amount(result.adjusted_subtotal + result.profit);
        let rounded: Yen = lines.iter().map(|line| line.amount).sum();
        reconcile(&mut lines, target - rounded);

        let management = Yen::from_amount(result.management);
        let contingency = Yen::from_amount(result.contingency);
        let before_tax = lines.iter().map(|line| line.amount).sum::<Yen>() + management + contingency;
        let tax = before_tax.calculate_tax(CONSUMPTION_TAX_RATE);

        Quote {
            lines,
            management,
            contingency,
            before_tax,
            tax,
            total: before_tax + tax,
        }
    }

    /// Amount printed for one category.
    pub fn line(&self, category: Category) -> Yen {
        self.lines
            .iter()
            .find(|line| line.category == category)
            .map(|line| line.amount)
            .unwrap_or_default()
    }

    /// Sum of the category lines.
    pub fn lines_total(&self) -> Yen {
        self.lines.iter().map(|line| line.amount).sum()
    }
}

/// Folds the rounding residual back into the lines.
///
/// Lines are never negative and the target never is either, so a negative
/// residual is always covered by the lines it came from.
fn reconcile(lines: &mut [QuoteLine], mut residual: Yen) {
    if residual.is_zero() {
        return;
    }

    if !residual.is_negative() {
        if let Some(largest) = lines.iter_mut().max_by_key(|line| line.amount) {
            largest.amount += residual;
        }
        return;
    }

    let mut order: Vec<usize> = (0..lines.len()).collect();
    order.sort_by_key(|&index| Reverse(lines[index].amount));

    for index in order {
        if !residual.is_negative() {
            break;
        }
        let take = min(lines[index].amount, Yen::zero() - residual);
        lines[index].amount -= take;
        residual += take;
    }
}
