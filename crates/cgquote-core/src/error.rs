//! # Error Types
//!
//! Domain-specific error types for cgquote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cgquote-core errors (this file)                                       │
//! │  └── ConfigurationError - Bad enum value, out-of-range number,         │
//! │                           missing base language, unusable rate         │
//! │                                                                         │
//! │  cgquote-cli errors (separate crate)                                   │
//! │  ├── CliError           - File, JSON and settings failures             │
//! │  └── ApiError           - What the caller sees (serialized)            │
//! │                                                                         │
//! │  Flow: ConfigurationError → CliError → ApiError → stderr JSON          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the offending field so the form can highlight it
//! 3. Errors are enum variants, never String
//! 4. The engine returns either a complete estimate or one of these

use thiserror::Error;

// =============================================================================
// Configuration Error
// =============================================================================

/// A production configuration or rate table the engine refuses to price.
///
/// Raised at the boundary, before any category calculator runs. No partial
/// estimate is ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// A choice field holds a value outside its closed set.
    ///
    /// ## When This Occurs
    /// - `planningLevel: "L9"` in a project file
    /// - A narration type other than none/ai/human
    ///
    /// ## User Workflow
    /// ```text
    /// Project file: { "planningLevel": "L9" }
    ///      │
    ///      ▼
    /// PlanningLevel::from_str("L9")
    ///      │
    ///      ▼
    /// UnknownChoice { field: "planningLevel", value: "L9", allowed: [L0..L3] }
    ///      │
    ///      ▼
    /// Form shows: "planningLevel must be one of: ..." next to the radio group
    /// ```
    #[error("{field} must be one of: {allowed:?} (got '{value}')")]
    UnknownChoice {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Numeric value is outside its inclusive domain.
    #[error("{field} must be between {min} and {max} (got {actual})")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    /// Numeric value is not a multiple of the slider step.
    #[error("{field} must be a multiple of {step} (got {actual})")]
    InvalidStep { field: String, step: i64, actual: i64 },

    /// Numeric value is below its lower bound (no upper bound applies).
    #[error("{field} must be at least {min} (got {actual})")]
    BelowMinimum { field: String, min: i64, actual: i64 },

    /// The language set does not contain the base language.
    #[error("{field} must include the base language '{language}'")]
    MissingBaseLanguage { field: String, language: String },

    /// Invalid format (e.g. a language code with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A rate table entry is negative, NaN or infinite.
    #[error("{field} must be a non-negative finite number (got {value})")]
    InvalidRate { field: String, value: f64 },
}

impl ConfigurationError {
    /// Returns the configuration field this error is tied to.
    ///
    /// Rate table entries are reported as `rates.<key>`.
    pub fn field(&self) -> &str {
        match self {
            ConfigurationError::UnknownChoice { field, .. }
            | ConfigurationError::OutOfRange { field, .. }
            | ConfigurationError::InvalidStep { field, .. }
            | ConfigurationError::BelowMinimum { field, .. }
            | ConfigurationError::MissingBaseLanguage { field, .. }
            | ConfigurationError::InvalidFormat { field, .. }
            | ConfigurationError::InvalidRate { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConfigurationError.
pub type ConfigResult<T> = Result<T, ConfigurationError>;

// =============================================================================
// Unit Tests
// =============================================================================
