//! # Validation Module
//!
//! Boundary checks run before any category calculator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Estimator form (TypeScript)                                  │
//! │  ├── Slider min/max/step                                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Deserialization (serde)                                      │
//! │  ├── Unsigned counts (no negative hours)                               │
//! │  ├── Unknown keys rejected (no silent defaults for typos)              │
//! │  └── Closed choice sets (UnknownChoice)                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Numeric domains (duration, delivery weeks, concept count)         │
//! │  ├── Language set (base language present, codes well formed)          │
//! │  └── Live-action days                                                  │
//! │                                                                         │
//! │  The calculators assume all three layers have passed.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cgquote_core::validation::{validate_config, validate_delivery_weeks};
//! use cgquote_core::ProductionConfig;
//!
//! validate_config(&ProductionConfig::default()).unwrap();
//! assert!(validate_delivery_weeks(30).is_err());
//! ```

use std::collections::BTreeMap;

use crate::error::{ConfigResult, ConfigurationError};
use crate::types::{LiveActionShoot, NarrationType, ProductionConfig};
use crate::{
    BASE_LANGUAGE, DURATION_STEP_SECONDS, MAX_DELIVERY_WEEKS, MAX_DURATION_SECONDS,
    MIN_DELIVERY_WEEKS, MIN_DURATION_SECONDS,
};

/// Longest accepted language code ("zh-Hant-TW" fits).
const MAX_LANGUAGE_CODE_LEN: usize = 16;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the video duration.
///
/// ## Rules
/// - Between 15 and 600 seconds inclusive
/// - Multiple of 15 (the form slider step)
///
/// ## Example
/// ```rust
/// use cgquote_core::validation::validate_duration_seconds;
///
/// assert!(validate_duration_seconds(60).is_ok());
/// assert!(validate_duration_seconds(0).is_err());
/// assert!(validate_duration_seconds(50).is_err());
/// ```
pub fn validate_duration_seconds(seconds: u32) -> ConfigResult<()> {
    if !(MIN_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&seconds) {
        return Err(ConfigurationError::OutOfRange {
            field: "durationSeconds".to_string(),
            min: MIN_DURATION_SECONDS as i64,
            max: MAX_DURATION_SECONDS as i64,
            actual: seconds as i64,
        });
    }

    if seconds % DURATION_STEP_SECONDS != 0 {
        return Err(ConfigurationError::InvalidStep {
            field: "durationSeconds".to_string(),
            step: DURATION_STEP_SECONDS as i64,
            actual: seconds as i64,
        });
    }

    Ok(())
}

/// Validates the delivery lead time (4 to 24 weeks).
pub fn validate_delivery_weeks(weeks: u32) -> ConfigResult<()> {
    if !(MIN_DELIVERY_WEEKS..=MAX_DELIVERY_WEEKS).contains(&weeks) {
        return Err(ConfigurationError::OutOfRange {
            field: "deliveryWeeks".to_string(),
            min: MIN_DELIVERY_WEEKS as i64,
            max: MAX_DELIVERY_WEEKS as i64,
            actual: weeks as i64,
        });
    }

    Ok(())
}

/// Validates the concept proposal count. The first proposal is always
/// included, so zero is meaningless.
pub fn validate_concept_versions(versions: u32) -> ConfigResult<()> {
    if versions < 1 {
        return Err(ConfigurationError::BelowMinimum {
            field: "conceptVersions".to_string(),
            min: 1,
            actual: versions as i64,
        });
    }

    Ok(())
}

/// Validates a live-action shoot block, when present.
pub fn validate_live_action(shoot: Option<&LiveActionShoot>) -> ConfigResult<()> {
    if let Some(shoot) = shoot {
        if shoot.days < 1 {
            return Err(ConfigurationError::BelowMinimum {
                field: "liveAction.days".to_string(),
                min: 1,
                actual: shoot.days as i64,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Language Validators
// =============================================================================

/// Validates a single language code.
///
/// ## Rules
/// - 2 to 16 characters
/// - ASCII letters, digits and hyphens only ("ja", "en", "zh-CN")
///
/// ## Example
/// ```rust
/// use cgquote_core::validation::validate_language_code;
///
/// assert!(validate_language_code("zh-CN").is_ok());
/// assert!(validate_language_code("").is_err());
/// assert!(validate_language_code("en us").is_err());
/// ```
pub fn validate_language_code(code: &str) -> ConfigResult<()> {
    let field = || format!("languages.{code}");

    if code.len() < 2 || code.len() > MAX_LANGUAGE_CODE_LEN {
        return Err(ConfigurationError::InvalidFormat {
            field: field(),
            reason: format!("must be 2 to {MAX_LANGUAGE_CODE_LEN} characters"),
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ConfigurationError::InvalidFormat {
            field: field(),
            reason: "must contain only ASCII letters, digits, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates the language set: base language present, every code well formed.
pub fn validate_languages(languages: &BTreeMap<String, NarrationType>) -> ConfigResult<()> {
    if !languages.contains_key(BASE_LANGUAGE) {
        return Err(ConfigurationError::MissingBaseLanguage {
            field: "languages".to_string(),
            language: BASE_LANGUAGE.to_string(),
        });
    }

    for code in languages.keys() {
        validate_language_code(code)?;
    }

    Ok(())
}

// =============================================================================
// Whole-Config Validation
// =============================================================================

/// Runs every boundary check on a production configuration.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  estimate(config, rates)                                                │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_config(config) ← THIS FUNCTION                               │
/// │       │                                                                 │
/// │       ├── durationSeconds 50?  → InvalidStep                           │
/// │       ├── deliveryWeeks 2?     → OutOfRange                            │
/// │       ├── no "ja" language?    → MissingBaseLanguage                   │
/// │       │                                                                 │
/// │       └── OK → rates.validate() → calculators                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_config(config: &ProductionConfig) -> ConfigResult<()> {
    validate_duration_seconds(config.duration_seconds)?;
    validate_delivery_weeks(config.delivery_weeks)?;
    validate_concept_versions(config.concept_versions)?;
    validate_languages(&config.languages)?;
    validate_live_action(config.live_action.as_ref())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_duration_seconds() {
        assert!(validate_duration_seconds(15).is_ok());
        assert!(validate_duration_seconds(600).is_ok());
        assert!(validate_duration_seconds(345).is_ok());

        assert!(matches!(
            validate_duration_seconds(0),
            Err(ConfigurationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_duration_seconds(615),
            Err(ConfigurationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_duration_seconds(100),
            Err(ConfigurationError::InvalidStep { .. })
        ));
    }

    #[test]
    fn test_validate_delivery_weeks() {
        assert!(validate_delivery_weeks(4).is_ok());
        assert!(validate_delivery_weeks(24).is_ok());
        assert!(validate_delivery_weeks(3).is_err());
        assert!(validate_delivery_weeks(25).is_err());
    }

    #[test]
    fn test_validate_concept_versions() {
        assert!(validate_concept_versions(1).is_ok());
        assert_eq!(
            validate_concept_versions(0).unwrap_err().field(),
            "conceptVersions"
        );
    }

    #[test]
    fn test_validate_live_action() {
        assert!(validate_live_action(None).is_ok());

        let shoot = LiveActionShoot {
            days: 0,
            location_scouting: false,
        };
        assert_eq!(
            validate_live_action(Some(&shoot)).unwrap_err().field(),
            "liveAction.days"
        );
    }

    #[test]
    fn test_validate_languages() {
        let mut languages = BTreeMap::new();
        languages.insert("en".to_string(), NarrationType::Ai);
        assert!(matches!(
            validate_languages(&languages),
            Err(ConfigurationError::MissingBaseLanguage { .. })
        ));

        languages.insert("ja".to_string(), NarrationType::None);
        assert!(validate_languages(&languages).is_ok());

        languages.insert("x".to_string(), NarrationType::None);
        assert_eq!(
            validate_languages(&languages).unwrap_err().field(),
            "languages.x"
        );
    }

    #[test]
    fn test_validate_config_first_failure_wins() {
        let mut config = ProductionConfig::default();
        assert!(validate_config(&config).is_ok());

        config.delivery_weeks = 2;
        config.concept_versions = 0;
        assert_eq!(validate_config(&config).unwrap_err().field(), "deliveryWeeks");
    }
}
