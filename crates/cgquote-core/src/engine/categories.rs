//! # Category Cost Calculators
//!
//! Seven independent calculators, one per cost category. Each is a sum of
//! additive hour × rate terms; no calculator reads another's result.
//!
//! ## Hour Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Planning      L0 8h · L1 24h · L2 48h · L3 80h          (planner)     │
//! │                workshop 3h · extra concept 11h · interview 2h          │
//! │                research none 0 · light 8h · detailed 24h               │
//! │                storyboard/scene rough 0.5h · std 1h · detailed 2h      │
//! │                brand guide 16h                           (designer)    │
//! │                × approval single 1.0 · multi 1.15 · complex 1.3        │
//! │                                                                         │
//! │  Modeling      scratch S 8h · M 20h · L 48h                            │
//! │                CAD small 6h · medium 12h · large 28h (+4h if dirty)    │
//! │                                                                         │
//! │  Animation     4h/shot · motion graphics 0/2/4/8 h per minute          │
//! │                look-dev light 16h · standard 32h · rich 64h            │
//! │                                                                         │
//! │  Rendering     2h/shot (× 1.6 at 4K)                                   │
//! │  Editing       2h/min + 1h/min per additional version                  │
//! │  Language      script · narration · translation · subtitles · BGM      │
//! │  Live action   8h/day crew + studio, optional 6h location scout        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All amounts here are pre-rush. The calculators trust their inputs; bounds
//! are enforced by [`crate::validation`] before they run.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engine::derived::DerivedQuantities;
use crate::rates::RateTable;
use crate::types::{
    ApprovalLayers, LookDevelopment, MotionGraphicsLevel, NarrationType, PlanningLevel,
    ProductionConfig, ResearchDepth, Resolution, ScriptProvided, StoryboardDetail,
};
use crate::PRIMARY_TRANSLATION_TARGET;

// =============================================================================
// Category
// =============================================================================

/// One of the seven cost groupings on the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Planning,
    Modeling,
    Animation,
    Rendering,
    Editing,
    Language,
    LiveAction,
}

impl Category {
    /// Every category, in quote order.
    pub const ALL: [Category; 7] = [
        Category::Planning,
        Category::Modeling,
        Category::Animation,
        Category::Rendering,
        Category::Editing,
        Category::Language,
        Category::LiveAction,
    ];

    /// Wire spelling of this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Planning => "planning",
            Category::Modeling => "modeling",
            Category::Animation => "animation",
            Category::Rendering => "rendering",
            Category::Editing => "editing",
            Category::Language => "language",
            Category::LiveAction => "liveAction",
        }
    }
}

// =============================================================================
// Category Costs
// =============================================================================

/// One amount per category.
///
/// Used three times over in an estimate: raw costs, rush-adjusted costs, and
/// the profit-distributed breakdown the quote displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCosts {
    pub planning: f64,
    pub modeling: f64,
    pub animation: f64,
    pub rendering: f64,
    pub editing: f64,
    pub language: f64,
    pub live_action: f64,
}

impl CategoryCosts {
    /// Builds a cost set by evaluating `f` once per category.
    pub fn from_fn(mut f: impl FnMut(Category) -> f64) -> Self {
        CategoryCosts {
            planning: f(Category::Planning),
            modeling: f(Category::Modeling),
            animation: f(Category::Animation),
            rendering: f(Category::Rendering),
            editing: f(Category::Editing),
            language: f(Category::Language),
            live_action: f(Category::LiveAction),
        }
    }

    /// Amount for one category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Planning => self.planning,
            Category::Modeling => self.modeling,
            Category::Animation => self.animation,
            Category::Rendering => self.rendering,
            Category::Editing => self.editing,
            Category::Language => self.language,
            Category::LiveAction => self.live_action,
        }
    }

    /// `(category, amount)` pairs in quote order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Applies `f` to every amount.
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        CategoryCosts::from_fn(|c| f(self.get(c)))
    }

    /// Sum over all categories.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, amount)| amount).sum()
    }
}

// =============================================================================
// Hour Tables
// =============================================================================

const WORKSHOP_HOURS: f64 = 3.0;
const EXTRA_CONCEPT_HOURS: f64 = 11.0;
const INTERVIEW_HOURS: f64 = 2.0;
const BRAND_GUIDE_HOURS: f64 = 16.0;

const CAD_CLEANUP_HOURS: f64 = 4.0;

const ANIMATION_HOURS_PER_SHOT: f64 = 4.0;
const RENDER_HOURS_PER_SHOT: f64 = 2.0;

const EDIT_HOURS_PER_MINUTE: f64 = 2.0;
const VERSION_EDIT_HOURS_PER_MINUTE: f64 = 1.0;

/// Narration script length.
const SCRIPT_CHARS_PER_MINUTE: f64 = 100.0;
/// Subtitle text per minute is half the narration density.
const SUBTITLE_CHARS_PER_MINUTE: f64 = 50.0;
const WRITER_CHARS_PER_HOUR: f64 = 400.0;
/// Translation into anything other than the primary target costs more.
const SECONDARY_TRANSLATION_SURCHARGE: f64 = 1.2;

const SHOOT_HOURS_PER_DAY: f64 = 8.0;
const LOCATION_SCOUT_HOURS: f64 = 6.0;

fn planning_base_hours(level: PlanningLevel) -> f64 {
    match level {
        PlanningLevel::L0 => 8.0,
        PlanningLevel::L1 => 24.0,
        PlanningLevel::L2 => 48.0,
        PlanningLevel::L3 => 80.0,
    }
}

fn research_hours(depth: ResearchDepth) -> f64 {
    match depth {
        ResearchDepth::None => 0.0,
        ResearchDepth::Light => 8.0,
        ResearchDepth::Detailed => 24.0,
    }
}

fn storyboard_hours_per_scene(detail: StoryboardDetail) -> f64 {
    match detail {
        StoryboardDetail::Rough => 0.5,
        StoryboardDetail::Standard => 1.0,
        StoryboardDetail::Detailed => 2.0,
    }
}

/// Extra review rounds inflate all planning effort.
pub fn approval_multiplier(layers: ApprovalLayers) -> f64 {
    match layers {
        ApprovalLayers::Single => 1.0,
        ApprovalLayers::Multi => 1.15,
        ApprovalLayers::Complex => 1.3,
    }
}

fn motion_graphics_hours_per_minute(level: MotionGraphicsLevel) -> f64 {
    match level {
        MotionGraphicsLevel::None => 0.0,
        MotionGraphicsLevel::Light => 2.0,
        MotionGraphicsLevel::Medium => 4.0,
        MotionGraphicsLevel::Heavy => 8.0,
    }
}

fn look_development_hours(level: LookDevelopment) -> f64 {
    match level {
        LookDevelopment::Light => 16.0,
        LookDevelopment::Standard => 32.0,
        LookDevelopment::Rich => 64.0,
    }
}

/// Render-time factor for the output resolution.
pub fn resolution_multiplier(resolution: Resolution) -> f64 {
    match resolution {
        Resolution::Hd1080p => 1.0,
        Resolution::Uhd4k => 1.6,
    }
}

// =============================================================================
// Calculators
// =============================================================================

/// Planning: planner hours plus storyboard/brand designer hours, scaled by
/// the approval-layer multiplier.
pub fn planning_cost(config: &ProductionConfig, rates: &RateTable, derived: &DerivedQuantities) -> f64 {
    let extra_concepts = config.concept_versions.saturating_sub(1) as f64;

    let planner_hours = planning_base_hours(config.planning_level)
        + config.workshops as f64 * WORKSHOP_HOURS
        + extra_concepts * EXTRA_CONCEPT_HOURS
        + research_hours(config.research)
        + config.interviews as f64 * INTERVIEW_HOURS;

    let mut designer_hours =
        derived.scenes as f64 * storyboard_hours_per_scene(config.storyboard_detail);
    if config.brand_guide {
        designer_hours += BRAND_GUIDE_HOURS;
    }

    let cost = planner_hours * rates.planner + designer_hours * rates.designer;
    cost * approval_multiplier(config.approval_layers)
}

/// Modeling: scratch builds, CAD conversions, and cleanup of dirty CAD data.
pub fn modeling_cost(config: &ProductionConfig, rates: &RateTable) -> f64 {
    let scratch = &config.scratch_models;
    let cad = &config.cad_models;

    let scratch_hours = scratch.s as f64 * 8.0 + scratch.m as f64 * 20.0 + scratch.l as f64 * 48.0;
    let cad_hours = cad.small as f64 * 6.0 + cad.medium as f64 * 12.0 + cad.large as f64 * 28.0;
    let cleanup_hours = if config.cad_clean {
        0.0
    } else {
        cad.total() as f64 * CAD_CLEANUP_HOURS
    };

    (scratch_hours + cad_hours + cleanup_hours) * rates.modeler
}

/// Animation: per-shot animation, motion graphics, and look development.
pub fn animation_cost(config: &ProductionConfig, rates: &RateTable, derived: &DerivedQuantities) -> f64 {
    let shot_hours = derived.shots as f64 * ANIMATION_HOURS_PER_SHOT;
    let motion_graphics_hours =
        motion_graphics_hours_per_minute(config.motion_graphics) * derived.minutes;
    let look_dev_hours = look_development_hours(config.look_development);

    shot_hours * rates.animator
        + motion_graphics_hours * rates.motion_graphics
        + look_dev_hours * rates.cg_generalist
}

/// Rendering: per-shot render wrangling, heavier at 4K.
pub fn rendering_cost(config: &ProductionConfig, rates: &RateTable, derived: &DerivedQuantities) -> f64 {
    derived.shots as f64
        * RENDER_HOURS_PER_SHOT
        * rates.cg_generalist
        * resolution_multiplier(config.resolution)
}

/// Editing: the main edit plus one pass per additional version.
pub fn editing_cost(config: &ProductionConfig, rates: &RateTable, derived: &DerivedQuantities) -> f64 {
    let main_hours = derived.minutes * EDIT_HOURS_PER_MINUTE;
    let version_hours =
        config.additional_versions as f64 * derived.minutes * VERSION_EDIT_HOURS_PER_MINUTE;

    (main_hours + version_hours) * rates.compositor
}

/// Language: script writing, narration, translation, subtitles and the BGM
/// license.
pub fn language_cost(config: &ProductionConfig, rates: &RateTable, derived: &DerivedQuantities) -> f64 {
    let minutes = derived.minutes;

    let full_script_hours = minutes * SCRIPT_CHARS_PER_MINUTE / WRITER_CHARS_PER_HOUR;
    let script_hours = match config.script_provided {
        ScriptProvided::Complete => 0.0,
        ScriptProvided::Partial => full_script_hours / 2.0,
        ScriptProvided::None => full_script_hours,
    };

    let narration: f64 = config
        .languages
        .values()
        .map(|narration| match narration {
            NarrationType::None => 0.0,
            NarrationType::Ai => minutes * rates.narrator_ai,
            NarrationType::Human => rates.narrator_human,
        })
        .sum();

    let translation: f64 = config
        .translated_languages()
        .map(|code| {
            let surcharge = if code == PRIMARY_TRANSLATION_TARGET {
                1.0
            } else {
                SECONDARY_TRANSLATION_SURCHARGE
            };
            minutes * SCRIPT_CHARS_PER_MINUTE * rates.translation_ja_to_en * surcharge
        })
        .sum();

    let subtitle_hours = config.subtitle_language_count as f64 * minutes
        * SUBTITLE_CHARS_PER_MINUTE
        / WRITER_CHARS_PER_HOUR;

    script_hours * rates.writer
        + narration
        + translation
        + subtitle_hours * rates.writer
        + rates.bgm_license
}

/// Live action: crew (PM plus two CG generalists on set), optional location
/// scout, and studio rental. Zero without a shoot.
pub fn live_action_cost(config: &ProductionConfig, rates: &RateTable) -> f64 {
    let Some(shoot) = config.live_action else {
        return 0.0;
    };

    let shoot_hours = shoot.days as f64 * SHOOT_HOURS_PER_DAY;
    let crew = shoot_hours * (rates.pm + 2.0 * rates.cg_generalist);
    let scouting = if shoot.location_scouting {
        LOCATION_SCOUT_HOURS * (rates.pm + rates.planner)
    } else {
        0.0
    };
    let studio = shoot_hours * rates.studio;

    crew + scouting + studio
}

/// Runs all seven calculators.
pub fn calculate_category_costs(
    config: &ProductionConfig,
    rates: &RateTable,
    derived: &DerivedQuantities,
) -> CategoryCosts {
    CategoryCosts {
        planning: planning_cost(config, rates, derived),
        modeling: modeling_cost(config, rates),
        animation: animation_cost(config, rates, derived),
        rendering: rendering_cost(config, rates, derived),
        editing: editing_cost(config, rates, derived),
        language: language_cost(config, rates, derived),
        live_action: live_action_cost(config, rates),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CadModels, LiveActionShoot, ScratchModels};

    const EPS: f64 = 1e-6;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn derived_for(config: &ProductionConfig) -> DerivedQuantities {
        DerivedQuantities::resolve(config.duration_seconds, config.animation_complexity)
    }

    #[test]
    fn test_category_costs_accessors() {
        let costs = CategoryCosts::from_fn(|c| Category::ALL.iter().position(|x| *x == c).unwrap() as f64);
        assert_eq!(costs.get(Category::LiveAction), 6.0);
        assert_eq!(costs.total(), 21.0);
        assert_eq!(costs.map(|v| v * 2.0).total(), 42.0);
        assert_eq!(costs.iter().count(), 7);
        assert_eq!(Category::LiveAction.as_str(), "liveAction");
    }

    #[test]
    fn test_planning_default() {
        let config = ProductionConfig::default();
        let rates = RateTable::studio_standard();
        // 8h planner + 1 scene × 1h designer
        assert_close(
            planning_cost(&config, &rates, &derived_for(&config)),
            8.0 * 9000.0 + 8000.0,
        );
    }

    #[test]
    fn test_planning_all_terms_and_approval() {
        let config = ProductionConfig {
            duration_seconds: 120,
            planning_level: PlanningLevel::L2,
            workshops: 2,
            concept_versions: 3,
            research: ResearchDepth::Light,
            interviews: 4,
            storyboard_detail: StoryboardDetail::Detailed,
            brand_guide: true,
            approval_layers: ApprovalLayers::Complex,
            ..ProductionConfig::default()
        };
        let rates = RateTable::studio_standard();

        let planner_hours = 48.0 + 6.0 + 22.0 + 8.0 + 8.0;
        let designer_hours = 2.0 * 2.0 + 16.0;
        let expected = (planner_hours * 9000.0 + designer_hours * 8000.0) * 1.3;
        assert_close(planning_cost(&config, &rates, &derived_for(&config)), expected);
    }

    #[test]
    fn test_modeling_with_dirty_cad() {
        let config = ProductionConfig {
            scratch_models: ScratchModels { s: 1, m: 2, l: 1 },
            cad_models: CadModels {
                small: 3,
                medium: 1,
                large: 1,
            },
            cad_clean: false,
            ..ProductionConfig::default()
        };
        let rates = RateTable::studio_standard();

        let hours = (8.0 + 40.0 + 48.0) + (18.0 + 12.0 + 28.0) + 5.0 * 4.0;
        assert_close(modeling_cost(&config, &rates), hours * 8000.0);
    }

    #[test]
    fn test_modeling_huge_cad_count_does_not_overflow() {
        let config = ProductionConfig {
            cad_models: CadModels {
                small: u32::MAX,
                medium: 1,
                large: 0,
            },
            cad_clean: false,
            ..ProductionConfig::default()
        };
        let max = u32::MAX as f64;
        let expected = (max * 6.0 + 12.0 + (max + 1.0) * 4.0) * 8000.0;

        let cost = modeling_cost(&config, &RateTable::studio_standard());
        assert!(cost.is_finite());
        assert!(((cost - expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn test_modeling_zero_without_models() {
        let config = ProductionConfig {
            cad_models: CadModels::default(),
            cad_clean: false,
            ..ProductionConfig::default()
        };
        assert_eq!(modeling_cost(&config, &RateTable::studio_standard()), 0.0);
    }

    #[test]
    fn test_animation_terms() {
        let config = ProductionConfig {
            duration_seconds: 90,
            motion_graphics: MotionGraphicsLevel::Medium,
            look_development: LookDevelopment::Rich,
            ..ProductionConfig::default()
        };
        let rates = RateTable::studio_standard();
        // 90s camera → 6 shots
        let expected = 6.0 * 4.0 * 8500.0 + 1.5 * 4.0 * 8500.0 + 64.0 * 8500.0;
        assert_close(animation_cost(&config, &rates, &derived_for(&config)), expected);
    }

    #[test]
    fn test_rendering_4k_multiplier() {
        let mut config = ProductionConfig::default();
        let rates = RateTable::studio_standard();
        let hd = rendering_cost(&config, &rates, &derived_for(&config));
        assert_close(hd, 4.0 * 2.0 * 8500.0);

        config.resolution = Resolution::Uhd4k;
        let uhd = rendering_cost(&config, &rates, &derived_for(&config));
        assert_close(uhd, hd * 1.6);
    }

    #[test]
    fn test_editing_with_versions() {
        let config = ProductionConfig {
            duration_seconds: 30,
            additional_versions: 3,
            ..ProductionConfig::default()
        };
        let rates = RateTable::studio_standard();
        let expected = (0.5 * 2.0 + 3.0 * 0.5) * 7500.0;
        assert_close(editing_cost(&config, &rates, &derived_for(&config)), expected);
    }

    #[test]
    fn test_language_base_is_bgm_only() {
        let config = ProductionConfig::default();
        let rates = RateTable::studio_standard();
        assert_close(language_cost(&config, &rates, &derived_for(&config)), 20000.0);
    }

    #[test]
    fn test_language_full_localization() {
        let mut config = ProductionConfig {
            duration_seconds: 120,
            subtitle_language_count: 2,
            script_provided: ScriptProvided::None,
            ..ProductionConfig::default()
        };
        config.languages.insert("ja".to_string(), NarrationType::Human);
        config.languages.insert("en".to_string(), NarrationType::Ai);
        config.languages.insert("zh".to_string(), NarrationType::None);
        let rates = RateTable::studio_standard();

        let script = 2.0 * 100.0 / 400.0 * 7500.0;
        let narration = 50000.0 + 2.0 * 500.0;
        let translation = 2.0 * 100.0 * 18.0 + 2.0 * 100.0 * 18.0 * 1.2;
        let subtitles = 2.0 * 2.0 * 50.0 / 400.0 * 7500.0;
        let expected = script + narration + translation + subtitles + 20000.0;
        assert_close(language_cost(&config, &rates, &derived_for(&config)), expected);
    }

    #[test]
    fn test_partial_script_is_half() {
        let rates = RateTable::studio_standard();
        let base = ProductionConfig {
            duration_seconds: 240,
            ..ProductionConfig::default()
        };
        let derived = derived_for(&base);
        let without = language_cost(&base, &rates, &derived);

        let none = ProductionConfig {
            script_provided: ScriptProvided::None,
            ..base.clone()
        };
        let partial = ProductionConfig {
            script_provided: ScriptProvided::Partial,
            ..base.clone()
        };
        let full_script = language_cost(&none, &rates, &derived) - without;
        let half_script = language_cost(&partial, &rates, &derived) - without;
        assert_close(half_script * 2.0, full_script);
        assert_close(full_script, 4.0 * 100.0 / 400.0 * 7500.0);
    }

    #[test]
    fn test_live_action() {
        let rates = RateTable::studio_standard();
        let mut config = ProductionConfig::default();
        assert_eq!(live_action_cost(&config, &rates), 0.0);

        config.live_action = Some(LiveActionShoot {
            days: 2,
            location_scouting: true,
        });
        let expected = 16.0 * (9000.0 + 2.0 * 8500.0) + 6.0 * (9000.0 + 9000.0) + 16.0 * 15000.0;
        assert_close(live_action_cost(&config, &rates), expected);
    }

    #[test]
    fn test_calculate_category_costs_wires_every_calculator() {
        let config = ProductionConfig::default();
        let rates = RateTable::studio_standard();
        let derived = derived_for(&config);
        let costs = calculate_category_costs(&config, &rates, &derived);

        assert_close(costs.planning, planning_cost(&config, &rates, &derived));
        assert_close(costs.modeling, 2.0 * 12.0 * 8000.0);
        assert_close(costs.animation, 16.0 * 8500.0 + 32.0 * 8500.0);
        assert_close(costs.rendering, 8.0 * 8500.0);
        assert_close(costs.editing, 2.0 * 7500.0);
        assert_close(costs.language, 20000.0);
        assert_eq!(costs.live_action, 0.0);
    }
}
