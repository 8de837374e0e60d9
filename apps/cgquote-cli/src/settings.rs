//! # CLI Settings
//!
//! Layered settings for the `cgquote` binary.
//!
//! ## Layers (later wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Built-in defaults        pretty = true, no overrides                │
//! │  2. TOML file                ./cgquote.toml, or --settings <path>       │
//! │  3. Environment              CGQUOTE__PRETTY=false                      │
//! │                              CGQUOTE__RATES__ANIMATOR=9000              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example `cgquote.toml`
//! ```toml
//! log_level = "debug"
//! pretty = false
//!
//! [rates]
//! animator = 9000
//! narrator_ai = 600
//! ```
//!
//! Rate keys are snake_case here because environment keys are lowercased
//! before they reach the deserializer.

use std::path::Path;

use cgquote_core::RateTable;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::CliError;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "cgquote.toml";

/// Environment prefix (`CGQUOTE__<KEY>`).
pub const ENV_PREFIX: &str = "CGQUOTE";

/// Settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log filter used when `RUST_LOG` is not set (e.g. "debug")
    pub log_level: Option<String>,

    /// Pretty-print JSON output
    pub pretty: bool,

    /// Partial overrides applied on top of the studio standard rates
    pub rates: RateOverrides,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: None,
            pretty: true,
            rates: RateOverrides::default(),
        }
    }
}

impl Settings {
    /// Loads settings from the optional file plus `CGQUOTE__*` variables.
    ///
    /// An explicit path must exist; the default `cgquote.toml` may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let builder = match path {
            Some(path) => Config::builder().add_source(File::from(path).format(FileFormat::Toml)),
            None => Config::builder().add_source(
                File::with_name(DEFAULT_SETTINGS_FILE)
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        Self::build(
            builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            ),
        )
    }

    /// Parses settings from TOML text, without the environment layer.
    pub fn from_toml_str(toml: &str) -> Result<Self, CliError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self, CliError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        tracing::debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Studio standard rates with the `[rates]` overrides applied.
    pub fn effective_rates(&self) -> RateTable {
        self.rates.apply(RateTable::studio_standard())
    }
}

/// Optional per-key rate overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateOverrides {
    pub pm: Option<f64>,
    pub planner: Option<f64>,
    pub writer: Option<f64>,
    pub designer: Option<f64>,
    pub cg_generalist: Option<f64>,
    pub modeler: Option<f64>,
    pub animator: Option<f64>,
    pub motion_graphics: Option<f64>,
    pub compositor: Option<f64>,
    pub sound: Option<f64>,
    pub translation_ja_to_en: Option<f64>,
    pub translation_en_to_ja: Option<f64>,
    pub narrator_ai: Option<f64>,
    pub narrator_human: Option<f64>,
    pub studio: Option<f64>,
    pub bgm_license: Option<f64>,
}

impl RateOverrides {
    /// Returns `base` with every set override replacing its rate.
    pub fn apply(&self, base: RateTable) -> RateTable {
        RateTable {
            pm: self.pm.unwrap_or(base.pm),
            planner: self.planner.unwrap_or(base.planner),
            writer: self.writer.unwrap_or(base.writer),
            designer: self.designer.unwrap_or(base.designer),
            cg_generalist: self.cg_generalist.unwrap_or(base.cg_generalist),
            modeler: self.modeler.unwrap_or(base.modeler),
            animator: self.animator.unwrap_or(base.animator),
            motion_graphics: self.motion_graphics.unwrap_or(base.motion_graphics),
            compositor: self.compositor.unwrap_or(base.compositor),
            sound: self.sound.unwrap_or(base.sound),
            translation_ja_to_en: self.translation_ja_to_en.unwrap_or(base.translation_ja_to_en),
            translation_en_to_ja: self.translation_en_to_ja.unwrap_or(base.translation_en_to_ja),
            narrator_ai: self.narrator_ai.unwrap_or(base.narrator_ai),
            narrator_human: self.narrator_human.unwrap_or(base.narrator_human),
            studio: self.studio.unwrap_or(base.studio),
            bgm_license: self.bgm_license.unwrap_or(base.bgm_license),
        }
    }

    /// True when no rate is overridden.
    pub fn is_empty(&self) -> bool {
        *self == RateOverrides::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.pretty);
        assert!(settings.rates.is_empty());
        assert_eq!(settings.effective_rates(), RateTable::studio_standard());
    }

    #[test]
    fn test_partial_rate_overrides() {
        let settings = Settings::from_toml_str(
            r#"
            log_level = "debug"
            pretty = false

            [rates]
            animator = 9000
            narrator_ai = 600.5
            "#,
        )
        .unwrap();

        assert_eq!(settings.log_level.as_deref(), Some("debug"));
        assert!(!settings.pretty);

        let rates = settings.effective_rates();
        assert_eq!(rates.animator, 9000.0);
        assert_eq!(rates.narrator_ai, 600.5);
        assert_eq!(rates.pm, RateTable::studio_standard().pm);
    }

    #[test]
    fn test_unknown_rate_key_rejected() {
        let err = Settings::from_toml_str("[rates]\nunicorn = 1").unwrap_err();
        assert!(matches!(err, CliError::Settings(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = std::env::temp_dir().join(format!("cgquote-{}.toml", uuid::Uuid::new_v4()));
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::Settings(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("cgquote-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[rates]\nstudio = 60000\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.effective_rates().studio, 60_000.0);
    }
}
