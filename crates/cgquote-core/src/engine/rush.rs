//! Schedule-compression surcharge.
//!
//! Below the standard lead time every week cut adds 10% to all labor, up to
//! a cap of 40%:
//!
//! ```text
//!  weeks   4   5   6   7   8   9   10  11  12 … 24
//!  rush   1.4 1.4 1.4 1.4 1.4 1.3 1.2 1.1 1.0 … 1.0
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::BasisPoints;

/// Lead time at and above which no surcharge applies.
pub const STANDARD_LEAD_WEEKS: u32 = 12;

const SURCHARGE_PER_WEEK_BPS: u32 = 1000;
const MAX_SURCHARGE_BPS: u32 = 4000;

/// Multiplier applied uniformly to every category before overheads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RushMultiplier {
    surcharge: BasisPoints,
}

impl RushMultiplier {
    /// No rush.
    pub const NONE: RushMultiplier = RushMultiplier {
        surcharge: BasisPoints::zero(),
    };

    /// Surcharge for a delivery lead time.
    ///
    /// ## Example
    /// ```rust
    /// use cgquote_core::engine::RushMultiplier;
    ///
    /// assert_eq!(RushMultiplier::for_delivery_weeks(10).surcharge().bps(), 2000);
    /// assert_eq!(RushMultiplier::for_delivery_weeks(6).surcharge().bps(), 4000);
    /// assert_eq!(RushMultiplier::for_delivery_weeks(16).surcharge().bps(), 0);
    /// ```
    pub fn for_delivery_weeks(weeks: u32) -> Self {
        if weeks >= STANDARD_LEAD_WEEKS {
            return RushMultiplier::NONE;
        }

        let weeks_short = STANDARD_LEAD_WEEKS - weeks;
        let bps = (weeks_short * SURCHARGE_PER_WEEK_BPS).min(MAX_SURCHARGE_BPS);
        RushMultiplier {
            surcharge: BasisPoints::from_bps(bps),
        }
    }

    /// The surcharge on its own (4000 bps = +40%).
    #[inline]
    pub const fn surcharge(&self) -> BasisPoints {
        self.surcharge
    }

    /// The factor to multiply costs by (1.0 to 1.4).
    #[inline]
    pub fn factor(&self) -> f64 {
        1.0 + self.surcharge.fraction()
    }

    /// Whether any surcharge applies.
    #[inline]
    pub const fn is_rushed(&self) -> bool {
        !self.surcharge.is_zero()
    }

    /// Applies the multiplier to an amount.
    #[inline]
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.factor()
    }
}

impl Default for RushMultiplier {
    fn default() -> Self {
        RushMultiplier::NONE
    }
}
