//! # CLI Error Types
//!
//! `CliError` is what the commands return; `ApiError` is what the user
//! sees on stderr when a command fails.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Error Flow in cgquote                             │
//! │                                                                         │
//! │  read project.json ── io::Error ──────────► CliError::Io                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  serde_json ───────── missing brace ──────► CliError::Parse             │
//! │         │             unknown key                                       │
//! │         ▼                                                               │
//! │  choice fields ────── unknown choice ─────► CliError::Configuration     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cgquote-core ─────── ConfigurationError ─► CliError::Configuration     │
//! │         │                                          │                    │
//! │         ▼                                          ▼                    │
//! │  EstimateReport (stdout)             ApiError JSON (stderr), exit 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "field": "durationSeconds",
//!   "message": "durationSeconds must be between 15 and 600 (got 700)"
//! }
//! ```

use std::path::{Path, PathBuf};

use cgquote_core::ConfigurationError;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not valid JSON for the expected shape
    #[error("{} is not a valid {what}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Settings file or environment could not be loaded
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    /// Configuration or rate table rejected by the engine
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Report could not be serialized
    #[error("Could not serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, what: &'static str, source: serde_json::Error) -> Self {
        CliError::Parse {
            path: path.to_path_buf(),
            what,
            source,
        }
    }
}

/// Error printed on stderr when a command fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Offending configuration field, when one is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Configuration or rates failed validation
    ValidationError,

    /// Input file is not valid JSON for its shape
    InvalidInput,

    /// File could not be read
    IoError,

    /// Settings could not be loaded
    SettingsError,

    /// Output could not be produced
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            field: None,
            message: message.into(),
        }
    }

    /// Attaches the offending field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Renders the error as a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl From<ConfigurationError> for ApiError {
    fn from(err: ConfigurationError) -> Self {
        let field = err.field().to_string();
        ApiError::new(ErrorCode::ValidationError, err.to_string()).with_field(field)
    }
}

impl From<CliError> for ApiError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Configuration(e) => ApiError::from(e),
            e @ CliError::Parse { .. } => ApiError::new(ErrorCode::InvalidInput, e.to_string()),
            e @ CliError::Io { .. } => ApiError::new(ErrorCode::IoError, e.to_string()),
            CliError::Settings(e) => {
                ApiError::new(ErrorCode::SettingsError, format!("Settings error: {}", e))
            }
            CliError::Output(e) => {
                tracing::error!("Report serialization failed: {}", e);
                ApiError::new(ErrorCode::Internal, "Could not produce output")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_keeps_field() {
        let err = ConfigurationError::OutOfRange {
            field: "deliveryWeeks".to_string(),
            min: 4,
            max: 24,
            actual: 30,
        };
        let api = ApiError::from(CliError::from(err));

        assert_eq!(api.code, ErrorCode::ValidationError);
        assert_eq!(api.field.as_deref(), Some("deliveryWeeks"));
        assert!(api.message.contains("deliveryWeeks"));
    }

    #[test]
    fn test_out_of_range_json_matches_documented_shape() {
        let err = ConfigurationError::OutOfRange {
            field: "durationSeconds".to_string(),
            min: 15,
            max: 600,
            actual: 700,
        };
        let json: serde_json::Value =
            serde_json::from_str(&ApiError::from(CliError::from(err)).to_json()).unwrap();

        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["field"], "durationSeconds");
        assert_eq!(
            json["message"],
            "durationSeconds must be between 15 and 600 (got 700)"
        );
    }

    #[test]
    fn test_io_error_code() {
        let err = CliError::io(
            Path::new("missing.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let api = ApiError::from(err);

        assert_eq!(api.code, ErrorCode::IoError);
        assert!(api.field.is_none());
        assert!(api.message.contains("missing.json"));
    }

    #[test]
    fn test_parse_error_code() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let api = ApiError::from(CliError::parse(Path::new("p.json"), "project", source));

        assert_eq!(api.code, ErrorCode::InvalidInput);
        assert!(api.message.starts_with("p.json is not a valid project"));
    }

    #[test]
    fn test_json_shape() {
        let api = ApiError::new(ErrorCode::ValidationError, "bad").with_field("rates.pm");
        let json: serde_json::Value = serde_json::from_str(&api.to_json()).unwrap();

        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["field"], "rates.pm");
        assert_eq!(json["message"], "bad");
    }

    #[test]
    fn test_json_omits_missing_field() {
        let api = ApiError::new(ErrorCode::IoError, "gone");
        let json: serde_json::Value = serde_json::from_str(&api.to_json()).unwrap();

        assert!(json.get("field").is_none());
        assert_eq!(json["code"], "IO_ERROR");
    }
}
