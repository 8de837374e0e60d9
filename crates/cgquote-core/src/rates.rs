//! # Rate Table
//!
//! The only source of absolute pricing. Every estimate call receives a rate
//! table explicitly; there is no global or static rate state.
//!
//! ## Keys
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Hourly (yen/h)          Per unit                   Flat                │
//! │  ──────────────          ────────                   ────                │
//! │  pm, planner, writer,    translationJaToEn (/char)  narratorHuman       │
//! │  designer, cgGeneralist, translationEnToJa (/char)  (per language)      │
//! │  modeler, animator,      narratorAI (/minute)       bgmLicense          │
//! │  motionGraphics,                                                        │
//! │  compositor, sound,                                                     │
//! │  studio                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ConfigResult, ConfigurationError};

/// Role and unit rates in yen. All sixteen keys are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RateTable {
    /// Project manager, per hour.
    pub pm: f64,
    /// Planner, per hour.
    pub planner: f64,
    /// Script and subtitle writer, per hour.
    pub writer: f64,
    /// Storyboard and brand designer, per hour.
    pub designer: f64,
    /// CG generalist (look-dev, rendering, on-set support), per hour.
    pub cg_generalist: f64,
    pub modeler: f64,
    pub animator: f64,
    pub motion_graphics: f64,
    pub compositor: f64,
    /// Sound engineer, per hour. Not used by any category yet.
    pub sound: f64,
    /// Base translation rate per character.
    pub translation_ja_to_en: f64,
    /// Reverse-direction translation rate per character.
    pub translation_en_to_ja: f64,
    /// AI narration, per finished minute.
    #[serde(rename = "narratorAI")]
    pub narrator_ai: f64,
    /// Human narrator, flat per language.
    pub narrator_human: f64,
    /// Studio rental, per hour.
    pub studio: f64,
    /// Background music license, flat per production.
    pub bgm_license: f64,
}

impl RateTable {
    /// The studio's standard price list.
    ///
    /// The engine never falls back to these; a caller has to ask for them.
    pub fn studio_standard() -> Self {
        RateTable {
            pm: 9000.0,
            planner: 9000.0,
            writer: 7500.0,
            designer: 8000.0,
            cg_generalist: 8500.0,
            modeler: 8000.0,
            animator: 8500.0,
            motion_graphics: 8500.0,
            compositor: 7500.0,
            sound: 7000.0,
            translation_ja_to_en: 18.0,
            translation_en_to_ja: 22.0,
            narrator_ai: 500.0,
            narrator_human: 50000.0,
            studio: 15000.0,
            bgm_license: 20000.0,
        }
    }

    /// Every key with its wire name, in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 16] {
        [
            ("pm", self.pm),
            ("planner", self.planner),
            ("writer", self.writer),
            ("designer", self.designer),
            ("cgGeneralist", self.cg_generalist),
            ("modeler", self.modeler),
            ("animator", self.animator),
            ("motionGraphics", self.motion_graphics),
            ("compositor", self.compositor),
            ("sound", self.sound),
            ("translationJaToEn", self.translation_ja_to_en),
            ("translationEnToJa", self.translation_en_to_ja),
            ("narratorAI", self.narrator_ai),
            ("narratorHuman", self.narrator_human),
            ("studio", self.studio),
            ("bgmLicense", self.bgm_license),
        ]
    }

    /// Rejects negative, NaN and infinite rates.
    ///
    /// ## Example
    /// ```rust
    /// use cgquote_core::RateTable;
    ///
    /// let mut rates = RateTable::studio_standard();
    /// assert!(rates.validate().is_ok());
    ///
    /// rates.modeler = -1.0;
    /// let err = rates.validate().unwrap_err();
    /// assert_eq!(err.field(), "rates.modeler");
    /// ```
    pub fn validate(&self) -> ConfigResult<()> {
        for (key, value) in self.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidRate {
                    field: format!("rates.{key}"),
                    value,
                });
            }
        }
        Ok(())
    }
}
