//! # Domain Types
//!
//! The production configuration the estimator form submits, and the choice
//! enums it is built from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ProductionConfig                                │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Basics         │   │  Planning       │   │  3D Models      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  durationSeconds│   │  planningLevel  │   │  scratchModels  │       │
//! │  │  resolution     │   │  workshops      │   │  cadModels      │       │
//! │  │  deliveryWeeks  │   │  research       │   │  cadClean       │       │
//! │  └─────────────────┘   │  approvalLayers │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Animation      │   │  Language       │   │  Live Action    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  complexity     │   │  languages      │   │  days           │       │
//! │  │  motionGraphics │   │  subtitles      │   │  locationScout  │       │
//! │  │  lookDevelopment│   │  scriptProvided │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Choice Sets
//! Every radio group on the form is a closed enum here. Parsing an unknown
//! value fails with [`ConfigurationError::UnknownChoice`] naming the field,
//! so the engine itself only ever sees values it has a match arm for.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigurationError;
use crate::BASE_LANGUAGE;

// =============================================================================
// Basis Points
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (management fee), 1800 bps = 18% (profit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        BasisPoints(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (800 bps → 0.08).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Applies the rate to an amount: `amount × fraction`.
    #[inline]
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.fraction()
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        BasisPoints(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for BasisPoints {
    fn default() -> Self {
        BasisPoints::zero()
    }
}

// =============================================================================
// Choice Enums
// =============================================================================

/// Declares a closed choice set with its wire spelling.
///
/// Generates `ALL`, `FIELD`, `as_str`, `Display`, `FromStr` (failing with
/// `UnknownChoice`) and a `Deserialize` that routes through `FromStr`.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (field = $field:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
        #[ts(export)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every member of the choice set, in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Configuration field this choice belongs to.
            pub const FIELD: &'static str = $field;

            /// Wire spelling of this choice.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConfigurationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(ConfigurationError::UnknownChoice {
                        field: $field.to_string(),
                        value: other.to_string(),
                        allowed: $name::ALL.iter().map(|c| c.as_str().to_string()).collect(),
                    }),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

choice_enum! {
    /// Output resolution. 4K raises render time.
    pub enum Resolution (field = "resolution") {
        Hd1080p => "1080p",
        Uhd4k => "4K",
    }
}

choice_enum! {
    /// How much of the planning the studio takes on.
    pub enum PlanningLevel (field = "planningLevel") {
        /// Client supplies the full plan.
        L0 => "L0",
        /// Client supplies the flow, studio draws storyboards.
        L1 => "L1",
        /// Studio plans from the structure outline.
        L2 => "L2",
        /// Zero-based planning.
        L3 => "L3",
    }
}

choice_enum! {
    /// Depth of background research.
    pub enum ResearchDepth (field = "research") {
        None => "none",
        Light => "light",
        Detailed => "detailed",
    }
}

choice_enum! {
    /// Storyboard fidelity; scales with scene count.
    pub enum StoryboardDetail (field = "storyboardDetail") {
        Rough => "rough",
        Standard => "standard",
        Detailed => "detailed",
    }
}

choice_enum! {
    /// Number of approval rounds on the client side.
    pub enum ApprovalLayers (field = "approvalLayers") {
        Single => "single",
        Multi => "multi",
        Complex => "complex",
    }
}

choice_enum! {
    /// What the animation mostly shows. Drives shots per minute.
    pub enum AnimationComplexity (field = "animationComplexity") {
        /// Camera work around static models.
        Camera => "camera",
        /// Exploded-view assembly.
        Exploded => "exploded",
        /// Mechanical motion.
        Mechanical => "mechanical",
        /// Physics simulation.
        Physics => "physics",
    }
}

choice_enum! {
    /// Amount of 2D motion graphics layered on top.
    pub enum MotionGraphicsLevel (field = "motionGraphics") {
        None => "none",
        Light => "light",
        Medium => "medium",
        Heavy => "heavy",
    }
}

choice_enum! {
    /// Look-development budget (materials, lighting).
    pub enum LookDevelopment (field = "lookDevelopment") {
        Light => "light",
        Standard => "standard",
        Rich => "rich",
    }
}

choice_enum! {
    /// Voice-over for one language.
    pub enum NarrationType (field = "narrationType") {
        None => "none",
        Ai => "ai",
        Human => "human",
    }
}

choice_enum! {
    /// How much of the narration script the client provides.
    pub enum ScriptProvided (field = "scriptProvided") {
        Complete => "complete",
        Partial => "partial",
        None => "none",
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::Hd1080p
    }
}

impl Default for PlanningLevel {
    fn default() -> Self {
        PlanningLevel::L0
    }
}

impl Default for ResearchDepth {
    fn default() -> Self {
        ResearchDepth::None
    }
}

impl Default for StoryboardDetail {
    fn default() -> Self {
        StoryboardDetail::Standard
    }
}

impl Default for ApprovalLayers {
    fn default() -> Self {
        ApprovalLayers::Single
    }
}

impl Default for AnimationComplexity {
    fn default() -> Self {
        AnimationComplexity::Camera
    }
}

impl Default for MotionGraphicsLevel {
    fn default() -> Self {
        MotionGraphicsLevel::None
    }
}

impl Default for LookDevelopment {
    fn default() -> Self {
        LookDevelopment::Standard
    }
}

impl Default for NarrationType {
    fn default() -> Self {
        NarrationType::None
    }
}

impl Default for ScriptProvided {
    fn default() -> Self {
        ScriptProvided::Complete
    }
}

// =============================================================================
// Model Counts
// =============================================================================

/// Models built from scratch, by size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, deny_unknown_fields)]
pub struct ScratchModels {
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "M")]
    pub m: u32,
    #[serde(rename = "L")]
    pub l: u32,
}

/// Models converted from client CAD data, by size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, deny_unknown_fields)]
pub struct CadModels {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl CadModels {
    /// Total number of CAD models (each needs cleanup when the data is dirty).
    ///
    /// Widened to `u64` so three `u32::MAX` counts still add up.
    pub fn total(&self) -> u64 {
        u64::from(self.small) + u64::from(self.medium) + u64::from(self.large)
    }
}

// =============================================================================
// Live Action
// =============================================================================

/// A live-action shoot attached to the production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LiveActionShoot {
    /// Shooting days (at least 1).
    pub days: u32,

    /// Whether a location scout precedes the shoot.
    #[serde(default)]
    pub location_scouting: bool,
}

// =============================================================================
// Production Config
// =============================================================================

/// Everything the estimator form collects about one production.
///
/// ## Defaults
/// `ProductionConfig::default()` is the form's initial state: a 60 second
/// 1080p camera-work piece with two medium CAD models, Japanese only, no
/// narration, twelve weeks to delivery. Missing fields in a project file
/// fall back to these values; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProductionConfig {
    // --- Basics ---------------------------------------------------------
    /// Video length in seconds, 15 to 600 in steps of 15.
    pub duration_seconds: u32,
    pub resolution: Resolution,
    /// Derived cut-downs of the main video.
    pub additional_versions: u32,
    /// Weeks until delivery, 4 to 24. Under 12 triggers the rush surcharge.
    pub delivery_weeks: u32,

    // --- Planning -------------------------------------------------------
    pub planning_level: PlanningLevel,
    /// Joint requirement workshops (about 3h each).
    pub workshops: u32,
    /// Concept proposals; the first one is included.
    pub concept_versions: u32,
    pub research: ResearchDepth,
    pub interviews: u32,
    pub storyboard_detail: StoryboardDetail,
    pub brand_guide: bool,
    pub approval_layers: ApprovalLayers,

    // --- 3D models ------------------------------------------------------
    pub scratch_models: ScratchModels,
    pub cad_models: CadModels,
    /// CAD data arrives clean; otherwise every CAD model gets cleanup hours.
    pub cad_clean: bool,

    // --- Animation ------------------------------------------------------
    pub animation_complexity: AnimationComplexity,
    pub motion_graphics: MotionGraphicsLevel,
    pub look_development: LookDevelopment,

    // --- Language -------------------------------------------------------
    /// Language code → narration. Must contain the base language.
    pub languages: BTreeMap<String, NarrationType>,
    pub subtitle_language_count: u32,
    pub script_provided: ScriptProvided,

    // --- Live action ----------------------------------------------------
    /// `None` when the production has no live-action shoot.
    pub live_action: Option<LiveActionShoot>,
}

impl ProductionConfig {
    /// Languages other than the base language, i.e. those needing translation.
    pub fn translated_languages(&self) -> impl Iterator<Item = &str> {
        self.languages
            .keys()
            .map(String::as_str)
            .filter(|code| *code != BASE_LANGUAGE)
    }

    /// Resets the basics, planning, models and language set to the "Basic"
    /// preset. Every other field is left alone.
    pub fn apply_basic_preset(&mut self) {
        let basic = ProductionConfig::default();

        self.duration_seconds = basic.duration_seconds;
        self.resolution = basic.resolution;
        self.additional_versions = basic.additional_versions;
        self.delivery_weeks = basic.delivery_weeks;
        self.languages = basic.languages;
        self.planning_level = basic.planning_level;
        self.workshops = basic.workshops;
        self.concept_versions = basic.concept_versions;
        self.cad_models = basic.cad_models;
        self.cad_clean = basic.cad_clean;
        self.animation_complexity = basic.animation_complexity;
        self.live_action = None;
    }
}

impl Default for ProductionConfig {
    fn default() -> Self {
        let mut languages = BTreeMap::new();
        languages.insert(BASE_LANGUAGE.to_string(), NarrationType::None);

        ProductionConfig {
            duration_seconds: 60,
            resolution: Resolution::Hd1080p,
            additional_versions: 0,
            delivery_weeks: 12,
            planning_level: PlanningLevel::L0,
            workshops: 0,
            concept_versions: 1,
            research: ResearchDepth::None,
            interviews: 0,
            storyboard_detail: StoryboardDetail::Standard,
            brand_guide: false,
            approval_layers: ApprovalLayers::Single,
            scratch_models: ScratchModels::default(),
            cad_models: CadModels {
                small: 0,
                medium: 2,
                large: 0,
            },
            cad_clean: true,
            animation_complexity: AnimationComplexity::Camera,
            motion_graphics: MotionGraphicsLevel::None,
            look_development: LookDevelopment::Standard,
            languages,
            subtitle_language_count: 0,
            script_provided: ScriptProvided::Complete,
            live_action: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
