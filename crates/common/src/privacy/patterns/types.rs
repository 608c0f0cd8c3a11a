use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{PiiError, PiiResult};
use crate::impl_str_conversions;

/// Categories of personally identifiable information the engine detects
///
/// The declaration order is the registration order: scans run in this order
/// and, when two matches start at the same offset, the earlier category wins.
///
/// # Examples
/// ```
/// use piiguard_common::privacy::patterns::PiiCategory;
///
/// let category: PiiCategory = "credit_card".parse().unwrap();
/// assert_eq!(category, PiiCategory::CreditCard);
/// assert_eq!(category.to_string(), "credit_card");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    Email,
    Phone,
    Ssn,
    CreditCard,
    IpAddress,
    Date,
}

impl_str_conversions!(PiiCategory, PiiError, PiiError::unknown_category {
    Email => "email",
    Phone => "phone",
    Ssn => "ssn",
    CreditCard => "credit_card",
    IpAddress => "ip_address",
    Date => "date",
});

impl PiiCategory {
    /// Every category, in registration order
    pub const ALL: [PiiCategory; 6] = [
        PiiCategory::Email,
        PiiCategory::Phone,
        PiiCategory::Ssn,
        PiiCategory::CreditCard,
        PiiCategory::IpAddress,
        PiiCategory::Date,
    ];

    /// Position of this category in the registry
    pub const fn registration_index(self) -> usize {
        self as usize
    }
}

/// Replacement strategy applied to each retained match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionMode {
    /// Fixed per-category placeholder such as `[REDACTED_EMAIL]`
    #[default]
    Replace,
    /// Partial reveal of the original value
    Mask,
    /// Fixed synthetic value per category
    Fake,
}

impl_str_conversions!(RedactionMode, PiiError, PiiError::invalid_mode {
    Replace => "replace",
    Mask => "mask",
    Fake => "fake",
});

/// Rule used to pick a non-overlapping subset of raw matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// First match by start offset wins regardless of length; ties go to
    /// registration order.
    #[default]
    EarliestStart,
    /// Like `EarliestStart`, but among matches sharing a start offset the
    /// longest one is considered first.
    LongestAtStart,
}

/// One detected occurrence of PII
///
/// Offsets are UTF-8 byte offsets into the scanned text, `start` inclusive
/// and `end` exclusive. A `PiiMatch` is never empty.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PiiMatch {
    category: PiiCategory,
    value: String,
    start: usize,
    end: usize,
}

impl PiiMatch {
    /// Build a match for `text[start..end]`
    ///
    /// # Errors
    /// Returns `PiiError::InvalidSpan` if the span is empty, reversed, out of
    /// bounds, or not aligned to UTF-8 character boundaries.
    pub fn new(category: PiiCategory, text: &str, start: usize, end: usize) -> PiiResult<Self> {
        let len = text.len();
        let valid = start < end
            && end <= len
            && text.is_char_boundary(start)
            && text.is_char_boundary(end);
        if !valid {
            return Err(PiiError::InvalidSpan { start, end, len });
        }
        Ok(Self::from_span(category, &text[start..end], start))
    }

    /// Caller guarantees `value` is the non-empty slice of the text at `start`.
    pub(crate) fn from_span(category: PiiCategory, value: &str, start: usize) -> Self {
        debug_assert!(!value.is_empty(), "matches are never empty");
        Self { category, value: value.to_string(), start, end: start + value.len() }
    }

    pub fn category(&self) -> PiiCategory {
        self.category
    }

    /// The exact matched substring
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the two spans share at least one byte
    pub fn overlaps(&self, other: &PiiMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

// Keep matched values out of debug output and logs.
impl fmt::Debug for PiiMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PiiMatch")
            .field("category", &self.category)
            .field("value", &"[REDACTED]")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

/// Outcome of a redaction call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// True iff at least one match was retained
    pub detected: bool,
    /// Retained matches, ascending by start, non-overlapping
    pub matches: Vec<PiiMatch>,
    /// Input with every retained match replaced
    pub redacted_text: String,
}

impl DetectionResult {
    /// Result for text in which nothing was found
    pub fn clean(text: &str) -> Self {
        Self { detected: false, matches: Vec::new(), redacted_text: text.to_string() }
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// Retained matches of one category
    pub fn by_category(&self, category: PiiCategory) -> Vec<&PiiMatch> {
        self.matches.iter().filter(|m| m.category == category).collect()
    }

    /// Distinct categories present, in order of first appearance
    pub fn categories(&self) -> Vec<PiiCategory> {
        let mut seen = Vec::new();
        for m in &self.matches {
            if !seen.contains(&m.category) {
                seen.push(m.category);
            }
        }
        seen
    }
}
