//! # cgquote-core: Pure Estimation Engine for 3DCG Video Quotes
//!
//! This crate is the **heart** of cgquote. It prices a 3D-animated video
//! production from its parameters and a rate table, as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cgquote Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Estimator form (out of tree)                    │   │
//! │  │   Sliders ──► Radio groups ──► Breakdown ──► PDF / Share       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON (ts-rs bindings)                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cgquote-cli                                  │   │
//! │  │        estimate, validate, rates   (files, env, logging)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cgquote-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   rates   │  │  engine   │  │ validation│  │   │
//! │  │   │  Config   │  │ RateTable │  │ estimate  │  │  bounds   │  │   │
//! │  │   │  choices  │  │           │  │  stages   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │          ┌───────────┐  ┌───────────┐                          │   │
//! │  │          │   money   │  │   quote   │                          │   │
//! │  │          │    Yen    │  │ whole-yen │                          │   │
//! │  │          └───────────┘  └───────────┘                          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL RATES • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Production configuration and its choice enums
//! - [`rates`] - The caller-supplied rate table
//! - [`engine`] - The estimation pipeline and [`estimate`]
//! - [`validation`] - Boundary checks run before pricing
//! - [`money`] - Whole-yen amounts
//! - [`quote`] - Rounded, self-reconciling quote
//! - [`error`] - Configuration errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same config and rates in, same estimate out
//! 2. **No I/O**: files, environment and logging sinks live in the CLI
//! 3. **Explicit Rates**: no hidden defaults; `RateTable::studio_standard()`
//!    is opt-in
//! 4. **Explicit Errors**: a complete estimate or a typed error, never both
//!
//! ## Example Usage
//!
//! ```rust
//! use cgquote_core::{estimate, ProductionConfig, RateTable, Resolution};
//!
//! let config = ProductionConfig {
//!     duration_seconds: 90,
//!     resolution: Resolution::Uhd4k,
//!     delivery_weeks: 10,
//!     ..ProductionConfig::default()
//! };
//! let result = estimate(&config, &RateTable::studio_standard()).unwrap();
//!
//! assert_eq!(result.rush_surcharge_bps, 2000); // +20%
//! assert!((result.breakdown.total() - (result.adjusted_subtotal + result.profit)).abs() < 1e-6);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod money;
pub mod quote;
pub mod rates;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{estimate, Category, CategoryCosts, DerivedQuantities, EstimateResult};
pub use error::{ConfigResult, ConfigurationError};
pub use money::Yen;
pub use quote::{Quote, QuoteLine};
pub use rates::RateTable;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Language every production is authored in. Never translated.
pub const BASE_LANGUAGE: &str = "ja";

/// Translation target priced at the base translation rate; every other
/// target carries a surcharge.
pub const PRIMARY_TRANSLATION_TARGET: &str = "en";

/// Shortest accepted video (seconds).
pub const MIN_DURATION_SECONDS: u32 = 15;

/// Longest accepted video (seconds).
pub const MAX_DURATION_SECONDS: u32 = 600;

/// Duration granularity (seconds), matching the form slider.
pub const DURATION_STEP_SECONDS: u32 = 15;

/// Shortest accepted delivery lead time (weeks).
pub const MIN_DELIVERY_WEEKS: u32 = 4;

/// Longest accepted delivery lead time (weeks).
pub const MAX_DELIVERY_WEEKS: u32 = 24;
