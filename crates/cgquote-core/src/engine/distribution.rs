//! Folds the profit back into the category lines.
//!
//! The quote shows seven category lines, management, contingency and tax.
//! Profit has no line of its own, so each category absorbs the share of
//! profit matching its share of the adjusted subtotal:
//!
//! ```text
//! display[k] = adjusted[k] + (adjusted[k] / Σ adjusted) × profit
//! Σ display  = Σ adjusted + profit
//! ```

use crate::engine::categories::CategoryCosts;

/// Spreads `profit` across the rush-adjusted categories in proportion to
/// their amounts.
///
/// A zero subtotal has no proportions to speak of; every category then
/// receives no profit rather than `0/0`.
///
/// ## Example
/// ```rust
/// use cgquote_core::engine::{distribute_profit, CategoryCosts};
///
/// let adjusted = CategoryCosts { planning: 300.0, modeling: 100.0, ..Default::default() };
/// let display = distribute_profit(&adjusted, 40.0);
/// assert_eq!(display.planning, 330.0);
/// assert_eq!(display.modeling, 110.0);
/// assert_eq!(display.total(), 440.0);
/// ```
pub fn distribute_profit(adjusted: &CategoryCosts, profit: f64) -> CategoryCosts {
    let subtotal = adjusted.total();
    if subtotal <= 0.0 {
        return *adjusted;
    }

    adjusted.map(|amount| amount + amount / subtotal * profit)
}
