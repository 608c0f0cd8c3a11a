//! Privacy Module
//!
//! Detects personally identifiable information in free text and rewrites
//! it with placeholders, partial masks or synthetic values.

pub mod patterns;

// Re-export commonly used types
pub use patterns::{
    contains_pii, detect, redact, redact_with_mode_str, DetectionResult, OverlapPolicy,
    PiiCategory, PiiDetectionConfig, PiiDetector, PiiError, PiiMatch, PiiResult, RedactionMode,
};
