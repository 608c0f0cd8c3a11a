//! PII Pattern Detection
//!
//! The pipeline is scan, resolve, render:
//! - [`scanner`] runs every enabled category rule over the text and returns
//!   start-sorted, possibly overlapping matches.
//! - [`resolver`] keeps a non-overlapping subset, earliest start first.
//! - [`renderer`] rebuilds the text with each retained match replaced.
//!
//! [`detector`] wires the stages together behind the public entry points.

pub mod config;
pub mod detector;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod resolver;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::{PiiDetectionConfig, CONFIG_VERSION};
pub use detector::{contains_pii, detect, redact, redact_with_mode_str, PiiDetector};
pub use error::{PiiError, PiiResult};
pub use registry::{
    profile, registry, CategoryProfile, MaskStrategy, PatternRegistry, PatternRule,
    DEFAULT_FAKE, DEFAULT_PLACEHOLDER,
};
pub use renderer::{mask_value, render, replacement};
pub use resolver::{resolve, resolve_with};
pub use scanner::{scan, scan_with};
pub use types::{DetectionResult, OverlapPolicy, PiiCategory, PiiMatch, RedactionMode};
