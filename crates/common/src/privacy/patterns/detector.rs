//! Detection entry points: scan, resolve overlaps, render.
//!
//! The free functions use every category with the default overlap policy
//! and never fail. [`PiiDetector`] carries a validated
//! [`PiiDetectionConfig`] and is cheap to clone across threads.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::config::PiiDetectionConfig;
use super::error::PiiResult;
use super::renderer::render;
use super::resolver::resolve_with;
use super::scanner::{any_match, scan_with};
use super::types::{DetectionResult, OverlapPolicy, PiiCategory, PiiMatch, RedactionMode};
use crate::error::CommonError;

/// Every raw match in `text`, sorted by start
///
/// Matches are not overlap-resolved, so spans from different categories may
/// overlap. Use [`redact`] for the resolved set.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn detect(text: &str) -> Vec<PiiMatch> {
    scan_with(text, &PiiCategory::ALL)
}

/// Redact every retained match in `text`
///
/// # Examples
/// ```
/// use piiguard_common::privacy::patterns::{redact, RedactionMode};
///
/// let result = redact("mail john@example.com", RedactionMode::Replace);
/// assert!(result.detected);
/// assert_eq!(result.redacted_text, "mail [REDACTED_EMAIL]");
/// ```
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn redact(text: &str, mode: RedactionMode) -> DetectionResult {
    run_redaction(text, &PiiCategory::ALL, OverlapPolicy::EarliestStart, mode)
}

/// Redact with a mode given by name (`replace`, `mask`, `fake`)
///
/// # Errors
/// Returns `PiiError::InvalidMode` for any other name; the text is not
/// scanned in that case.
pub fn redact_with_mode_str(text: &str, mode: &str) -> PiiResult<DetectionResult> {
    let mode: RedactionMode = mode.parse()?;
    Ok(redact(text, mode))
}

/// Whether `text` contains at least one match of any category
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn contains_pii(text: &str) -> bool {
    any_match(text, &PiiCategory::ALL)
}

fn run_redaction(
    text: &str,
    categories: &[PiiCategory],
    policy: OverlapPolicy,
    mode: RedactionMode,
) -> DetectionResult {
    let raw = scan_with(text, categories);
    if raw.is_empty() {
        return DetectionResult::clean(text);
    }

    let raw_matches = raw.len();
    let matches = resolve_with(raw, policy);
    let redacted_text = render(text, &matches, mode);

    debug!(
        raw_matches,
        retained = matches.len(),
        dropped = raw_matches - matches.len(),
        "redaction complete"
    );

    DetectionResult { detected: !matches.is_empty(), matches, redacted_text }
}

/// Configured detector
///
/// `PiiDetector::default()` behaves exactly like the free functions.
#[derive(Debug, Clone, Default)]
pub struct PiiDetector {
    config: Arc<PiiDetectionConfig>,
}

impl PiiDetector {
    /// Build a detector from a configuration
    ///
    /// # Errors
    /// Returns the configuration's validation error.
    pub fn new(config: PiiDetectionConfig) -> PiiResult<Self> {
        config.validate()?;
        Ok(Self { config: Arc::new(config) })
    }

    pub fn config(&self) -> &PiiDetectionConfig {
        &self.config
    }

    /// Raw matches of the enabled categories
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn detect(&self, text: &str) -> PiiResult<Vec<PiiMatch>> {
        self.check_input(text)?;
        if !self.config.enabled {
            return Ok(Vec::new());
        }
        Ok(scan_with(text, &self.config.categories))
    }

    /// Redact with the configured default mode
    pub fn redact(&self, text: &str) -> PiiResult<DetectionResult> {
        self.redact_with(text, self.config.default_mode)
    }

    /// Redact with an explicit mode
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn redact_with(&self, text: &str, mode: RedactionMode) -> PiiResult<DetectionResult> {
        self.check_input(text)?;
        if !self.config.enabled {
            return Ok(DetectionResult::clean(text));
        }
        Ok(run_redaction(text, &self.config.categories, self.config.overlap_policy, mode))
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn contains_pii(&self, text: &str) -> PiiResult<bool> {
        self.check_input(text)?;
        Ok(self.config.enabled && any_match(text, &self.config.categories))
    }

    fn check_input(&self, text: &str) -> PiiResult<()> {
        match self.config.max_input_bytes {
            Some(limit) if text.len() > limit => {
                warn!(text_len = text.len(), limit, "input exceeds size limit");
                Err(CommonError::validation_with_value(
                    "text",
                    format!("input exceeds {} bytes", limit),
                    text.len().to_string(),
                )
                .into())
            }
            _ => Ok(()),
        }
    }
}
