//! # Commands
//!
//! One function per subcommand. Each reads its inputs, calls the engine and
//! returns a serializable value; printing is left to the caller.
//!
//! ## Rate Resolution
//! ```text
//! --rates file.json ─────────────────────────────► RateTable (as given)
//!        │ absent
//!        ▼
//! studio_standard() ── settings [rates] overrides ─► RateTable
//! ```
//! Either way the table is validated before it is used or printed.

use std::path::Path;
use std::str::FromStr;

use cgquote_core::validation::validate_config;
use cgquote_core::{
    estimate, AnimationComplexity, ApprovalLayers, ConfigurationError, EstimateResult,
    LookDevelopment, MotionGraphicsLevel, NarrationType, PlanningLevel, ProductionConfig, Quote,
    RateTable, ResearchDepth, Resolution, ScriptProvided, StoryboardDetail,
};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::CliError;
use crate::settings::Settings;

/// Envelope printed by `cgquote estimate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    /// Unique report ID
    pub id: Uuid,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Configuration the estimate was computed from
    pub config: ProductionConfig,

    /// Rate table the estimate was computed with
    pub rates: RateTable,

    pub result: EstimateResult,

    /// Whole-yen quote, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
}

/// Outcome of `cgquote validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub duration_seconds: u32,
    pub delivery_weeks: u32,
    pub languages: Vec<String>,
}

// =============================================================================
// Commands
// =============================================================================

/// Estimates the project at `project`.
pub fn estimate_project(
    project: &Path,
    rates_path: Option<&Path>,
    with_quote: bool,
    settings: &Settings,
) -> Result<EstimateReport, CliError> {
    let config = read_project(project)?;
    let rates = resolve_rates(rates_path, settings)?;

    info!(project = %project.display(), "Estimating project");
    let report = build_report(config, rates, with_quote)?;
    info!(
        id = %report.id,
        total = report.result.total,
        rush_surcharge_bps = report.result.rush_surcharge_bps,
        "Estimate complete"
    );

    Ok(report)
}

/// Checks the project at `project` and, when given, a rate file.
pub fn validate_project(
    project: &Path,
    rates_path: Option<&Path>,
) -> Result<ValidationReport, CliError> {
    let config = read_project(project)?;
    validate_config(&config)?;

    if let Some(path) = rates_path {
        read_json::<RateTable>(path, "rate table")?.validate()?;
    }

    info!(project = %project.display(), "Project is valid");
    Ok(ValidationReport {
        valid: true,
        duration_seconds: config.duration_seconds,
        delivery_weeks: config.delivery_weeks,
        languages: config.languages.keys().cloned().collect(),
    })
}

/// Returns the rate table `estimate` would use.
pub fn effective_rates(rates_path: Option<&Path>, settings: &Settings) -> Result<RateTable, CliError> {
    resolve_rates(rates_path, settings)
}

// =============================================================================
// Helpers
// =============================================================================

/// Runs the engine and wraps the result in a fresh report.
pub fn build_report(
    config: ProductionConfig,
    rates: RateTable,
    with_quote: bool,
) -> Result<EstimateReport, CliError> {
    let result = estimate(&config, &rates)?;
    let quote = with_quote.then(|| Quote::from_estimate(&result));

    Ok(EstimateReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        config,
        rates,
        result,
        quote,
    })
}

fn resolve_rates(rates_path: Option<&Path>, settings: &Settings) -> Result<RateTable, CliError> {
    let rates = match rates_path {
        Some(path) => {
            debug!(rates = %path.display(), "Using rate file");
            read_json(path, "rate table")?
        }
        None => {
            if !settings.rates.is_empty() {
                debug!(overrides = ?settings.rates, "Applying rate overrides");
            }
            settings.effective_rates()
        }
    };
    rates.validate()?;
    Ok(rates)
}

/// Reads a project file in two passes: JSON first, then the choice fields
/// through their `FromStr`, then the typed config. An unknown choice value
/// therefore surfaces as a `ConfigurationError` that keeps its field.
fn read_project(path: &Path) -> Result<ProductionConfig, CliError> {
    let value: Value = read_json(path, "project")?;
    if let Some(object) = value.as_object() {
        check_choices(object)?;
    }
    serde_json::from_value(value).map_err(|e| CliError::parse(path, "project", e))
}

fn check_choices(object: &Map<String, Value>) -> Result<(), ConfigurationError> {
    check_choice::<Resolution>(object, Resolution::FIELD)?;
    check_choice::<PlanningLevel>(object, PlanningLevel::FIELD)?;
    check_choice::<ResearchDepth>(object, ResearchDepth::FIELD)?;
    check_choice::<StoryboardDetail>(object, StoryboardDetail::FIELD)?;
    check_choice::<ApprovalLayers>(object, ApprovalLayers::FIELD)?;
    check_choice::<AnimationComplexity>(object, AnimationComplexity::FIELD)?;
    check_choice::<MotionGraphicsLevel>(object, MotionGraphicsLevel::FIELD)?;
    check_choice::<LookDevelopment>(object, LookDevelopment::FIELD)?;
    check_choice::<ScriptProvided>(object, ScriptProvided::FIELD)?;

    if let Some(languages) = object.get("languages").and_then(Value::as_object) {
        for (code, narration) in languages {
            let Some(text) = narration.as_str() else {
                continue;
            };
            if NarrationType::from_str(text).is_err() {
                return Err(ConfigurationError::UnknownChoice {
                    field: format!("languages.{code}"),
                    value: text.to_string(),
                    allowed: NarrationType::ALL.iter().map(|c| c.as_str().to_string()).collect(),
                });
            }
        }
    }

    Ok(())
}

/// Parses `object[key]` when it is a string. Other shapes are left to the
/// typed pass, which reports them as invalid input.
fn check_choice<T>(object: &Map<String, Value>, key: &str) -> Result<(), ConfigurationError>
where
    T: FromStr<Err = ConfigurationError>,
{
    match object.get(key).and_then(Value::as_str) {
        Some(text) => T::from_str(text).map(|_| ()),
        None => Ok(()),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &'static str) -> Result<T, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| CliError::parse(path, what, e))
}

/// Serializes `value` as pretty or compact JSON.
pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
