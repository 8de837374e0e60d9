//! # Estimation Engine
//!
//! One pure function, [`estimate`], built from forward-only stages.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductionConfig + RateTable                                           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  validate_config / RateTable::validate ──── ConfigurationError ──► Err │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  derived::DerivedQuantities        scenes, shots                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  categories::calculate_category_costs   seven pre-rush amounts          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  rush::RushMultiplier              × 1.0 … 1.4 on every category        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  overhead::Overheads               management, profit, contingency, tax │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  distribution::distribute_profit   profit folded into category lines    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  EstimateResult ──────────────────────────────────────────────────► Ok │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No stage reads a later stage's output, and nothing is cached between
//! calls.

pub mod categories;
pub mod derived;
pub mod distribution;
pub mod overhead;
pub mod rush;

pub use categories::{calculate_category_costs, Category, CategoryCosts};
pub use derived::DerivedQuantities;
pub use distribution::distribute_profit;
pub use overhead::Overheads;
pub use rush::RushMultiplier;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ConfigResult;
use crate::rates::RateTable;
use crate::types::ProductionConfig;
use crate::validation::validate_config;

// =============================================================================
// Estimate Result
// =============================================================================

/// A fully itemized estimate.
///
/// ## Invariants
/// - `breakdown.total() == adjusted_subtotal + profit`
/// - `before_tax == adjusted_subtotal + management + contingency + profit`
/// - `total == before_tax × 1.10`
///
/// The presentation layer reads this and never writes to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    /// Sum of the rush-adjusted category costs.
    #[serde(rename = "subtotal")]
    pub adjusted_subtotal: f64,
    /// Rush-adjusted category costs with their share of profit folded in.
    pub breakdown: CategoryCosts,
    pub management: f64,
    pub profit: f64,
    pub contingency: f64,
    pub before_tax: f64,
    pub tax: f64,
    pub total: f64,
    pub scenes: u32,
    pub shots: u32,
    pub rush_multiplier: f64,
    /// The rush surcharge alone, in basis points (4000 = +40%).
    pub rush_surcharge_bps: u32,
}

impl EstimateResult {
    /// Packages the stage outputs. No arithmetic happens here.
    fn assemble(
        derived: DerivedQuantities,
        rush: RushMultiplier,
        adjusted_subtotal: f64,
        breakdown: CategoryCosts,
        overheads: Overheads,
    ) -> Self {
        EstimateResult {
            adjusted_subtotal,
            breakdown,
            management: overheads.management,
            profit: overheads.profit,
            contingency: overheads.contingency,
            before_tax: overheads.before_tax,
            tax: overheads.tax,
            total: overheads.total,
            scenes: derived.scenes,
            shots: derived.shots,
            rush_multiplier: rush.factor(),
            rush_surcharge_bps: rush.surcharge().bps(),
        }
    }
}

// =============================================================================
// Estimate
// =============================================================================

/// Prices a production.
///
/// Both arguments are only read. Either every stage succeeds and a complete
/// [`EstimateResult`] comes back, or the configuration/rate table is
/// rejected up front with a [`crate::ConfigurationError`].
///
/// ## Example
/// ```rust
/// use cgquote_core::{estimate, ProductionConfig, RateTable};
///
/// let result = estimate(&ProductionConfig::default(), &RateTable::studio_standard()).unwrap();
/// assert_eq!(result.scenes, 1);
/// assert_eq!(result.shots, 4);
/// assert_eq!(result.rush_multiplier, 1.0);
/// assert!((result.total - 1_171_368.0).abs() < 1e-6);
/// ```
pub fn estimate(config: &ProductionConfig, rates: &RateTable) -> ConfigResult<EstimateResult> {
    validate_config(config)?;
    rates.validate()?;

    let derived = DerivedQuantities::resolve(config.duration_seconds, config.animation_complexity);
    let costs = calculate_category_costs(config, rates, &derived);

    let rush = RushMultiplier::for_delivery_weeks(config.delivery_weeks);
    let adjusted = costs.map(|amount| rush.apply(amount));
    let adjusted_subtotal = adjusted.total();

    let overheads = Overheads::from_adjusted_subtotal(adjusted_subtotal);
    let breakdown = distribute_profit(&adjusted, overheads.profit);

    debug!(
        scenes = derived.scenes,
        shots = derived.shots,
        raw_subtotal = costs.total(),
        rush = rush.factor(),
        adjusted_subtotal,
        total = overheads.total,
        "estimate computed"
    );

    Ok(EstimateResult::assemble(
        derived,
        rush,
        adjusted_subtotal,
        breakdown,
        overheads,
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::types::{CadModels, LiveActionShoot, NarrationType, PlanningLevel};

    /// Relative tolerance for amounts that reach tens of millions of yen.
    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance.max(1e-6),
            "expected {expected}, got {actual}"
        );
    }

    fn zero_rates() -> RateTable {
        RateTable {
            pm: 0.0,
            planner: 0.0,
            writer: 0.0,
            designer: 0.0,
            cg_generalist: 0.0,
            modeler: 0.0,
            animator: 0.0,
            motion_graphics: 0.0,
            compositor: 0.0,
            sound: 0.0,
            translation_ja_to_en: 0.0,
            translation_en_to_ja: 0.0,
            narrator_ai: 0.0,
            narrator_human: 0.0,
            studio: 0.0,
            bgm_license: 0.0,
        }
    }

    #[test]
    fn test_basic_scenario() {
        let rates = RateTable::studio_standard();
        let result = estimate(&ProductionConfig::default(), &rates).unwrap();

        assert_eq!(result.scenes, 1);
        assert_eq!(result.shots, 4);
        assert_eq!(result.rush_multiplier, 1.0);
        assert_eq!(result.rush_surcharge_bps, 0);

        // pre-profit category costs
        let planning = 8.0 * rates.planner + 1.0 * rates.designer;
        let modeling = 2.0 * 12.0 * rates.modeler;
        let animation = 4.0 * 4.0 * rates.animator + 32.0 * rates.cg_generalist;
        let rendering = 4.0 * 2.0 * rates.cg_generalist;
        let editing = 2.0 * rates.compositor;
        let language = rates.bgm_license;
        let subtotal = planning + modeling + animation + rendering + editing + language;

        assert_close(result.adjusted_subtotal, subtotal);
        assert_close(result.adjusted_subtotal, 783_000.0);
        assert_close(result.management, 62_640.0);
        assert_close(result.profit, 140_940.0);
        assert_close(result.contingency, 78_300.0);
        assert_close(result.before_tax, 1_064_880.0);
        assert_close(result.tax, 106_488.0);
        assert_close(result.total, 1_171_368.0);

        // each line carries 18% profit
        assert_close(result.breakdown.modeling, modeling * 1.18);
        assert_close(result.breakdown.animation, animation * 1.18);
        assert_close(result.breakdown.planning, 94_400.0);
        assert_eq!(result.breakdown.live_action, 0.0);
    }

    #[test]
    fn test_rush_scenario() {
        let rates = RateTable::studio_standard();
        let base = estimate(&ProductionConfig::default(), &rates).unwrap();

        let rushed_config = ProductionConfig {
            delivery_weeks: 6,
            ..ProductionConfig::default()
        };
        let rushed = estimate(&rushed_config, &rates).unwrap();

        assert_close(rushed.rush_multiplier, 1.4);
        assert_eq!(rushed.rush_surcharge_bps, 4000);
        for (category, amount) in rushed.breakdown.iter() {
            assert_close(amount, base.breakdown.get(category) * 1.4);
        }
        assert_close(rushed.total, 1_171_368.0 * 1.4);
        assert_close(rushed.breakdown.planning, 80_000.0 * 1.4 * 1.18);
    }

    #[test]
    fn test_zero_floor() {
        let config = ProductionConfig {
            cad_models: CadModels::default(),
            ..ProductionConfig::default()
        };
        let result = estimate(&config, &RateTable::studio_standard()).unwrap();

        assert_eq!(result.breakdown.modeling, 0.0);
        assert_eq!(result.breakdown.live_action, 0.0);
        assert!(result.total >= 0.0);
    }

    #[test]
    fn test_all_zero_rates_gives_zero_estimate() {
        let result = estimate(&ProductionConfig::default(), &zero_rates()).unwrap();

        assert_eq!(result.adjusted_subtotal, 0.0);
        assert_eq!(result.total, 0.0);
        for (_, amount) in result.breakdown.iter() {
            assert_eq!(amount, 0.0);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_before_pricing() {
        let config = ProductionConfig {
            duration_seconds: 610,
            ..ProductionConfig::default()
        };
        let err = estimate(&config, &RateTable::studio_standard()).unwrap_err();
        assert_eq!(err.field(), "durationSeconds");

        let mut config = ProductionConfig::default();
        config.languages.remove("ja");
        config.languages.insert("en".to_string(), NarrationType::Ai);
        let err = estimate(&config, &RateTable::studio_standard()).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingBaseLanguage { .. }));
    }

    #[test]
    fn test_invalid_rates_are_rejected() {
        let mut rates = RateTable::studio_standard();
        rates.animator = -8500.0;
        let err = estimate(&ProductionConfig::default(), &rates).unwrap_err();
        assert_eq!(err.field(), "rates.animator");
    }

    #[test]
    fn test_huge_dirty_cad_count_still_prices() {
        let config = ProductionConfig {
            cad_models: CadModels {
                small: u32::MAX,
                medium: 1,
                large: 0,
            },
            cad_clean: false,
            ..ProductionConfig::default()
        };

        let result = estimate(&config, &RateTable::studio_standard()).unwrap();
        assert!(result.total.is_finite());
        assert!(result.breakdown.modeling > result.breakdown.animation);
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let config = ProductionConfig {
            planning_level: PlanningLevel::L3,
            delivery_weeks: 9,
            live_action: Some(LiveActionShoot {
                days: 3,
                location_scouting: true,
            }),
            ..ProductionConfig::default()
        };
        let rates = RateTable::studio_standard();
        assert_eq!(estimate(&config, &rates), estimate(&config, &rates));
    }

    #[test]
    fn test_result_serializes_with_display_names() {
        let result = estimate(&ProductionConfig::default(), &RateTable::studio_standard()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("subtotal").is_some());
        assert!(json.get("beforeTax").is_some());
        assert!(json.get("rushMultiplier").is_some());
        assert!(json["breakdown"].get("liveAction").is_some());
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProductionConfig>();
        assert_send_sync::<RateTable>();
        assert_send_sync::<EstimateResult>();
    }
}
