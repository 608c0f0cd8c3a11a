//! PII detection and redaction engine.
//!
//! # Safety and Quality
//!
//! This crate forbids unsafe code and runs the detection path without I/O,
//! locks or shared mutable state.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors and utility macros
//! - `observability`: the privacy engine with tracing spans and events
//!   (enabled by default)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
#[macro_use]
pub mod utils;

// Observability tier
// --------------------------------------------------------------
#[cfg(feature = "observability")]
pub mod privacy;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "observability")]
pub use privacy::{
    contains_pii, detect, redact, redact_with_mode_str, DetectionResult, PiiCategory,
    PiiDetectionConfig, PiiDetector, PiiError, PiiMatch, PiiResult, RedactionMode,
};
