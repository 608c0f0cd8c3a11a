//! Static pattern table: one matching rule and one replacement profile per
//! category, built once and never mutated.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::error::{PiiError, PiiResult};
use super::types::PiiCategory;

/// Placeholder for categories without a dedicated profile
pub const DEFAULT_PLACEHOLDER: &str = "[REDACTED]";

/// Synthetic value for categories without a dedicated profile
pub const DEFAULT_FAKE: &str = "[FAKE_DATA]";

pub(crate) const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

pub(crate) const PHONE_PATTERN: &str =
    r"(?:(?:\+|00)([1-9][0-9]{0,2}))?[-. (]*([0-9]{3})[-. )]*([0-9]{3})[-. ]*([0-9]{4})";

// Word boundaries are ASCII-only: a digit run directly after a non-ASCII
// letter still starts a match.
pub(crate) const SSN_PATTERN: &str =
    r"(?-u:\b)(?P<area>[0-9]{3})[- ]?(?P<group>[0-9]{2})[- ]?(?P<serial>[0-9]{4})(?-u:\b)";

pub(crate) const CREDIT_CARD_PATTERN: &str = r"(?-u:\b)(?:[0-9]{4}[- ]?){3}[0-9]{4}(?-u:\b)";

pub(crate) const IP_ADDRESS_PATTERN: &str = r"(?-u:\b)(?:[0-9]{1,3}\.){3}[0-9]{1,3}(?-u:\b)";

pub(crate) const DATE_PATTERN: &str = r"(?-u:\b)[0-9]{1,2}[/.-][0-9]{1,2}[/.-][0-9]{4}(?-u:\b)";

/// Structural check run on a candidate after the regex matched
pub(crate) type Validator = fn(&Captures<'_>) -> bool;

/// How the `mask` mode reveals part of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskStrategy {
    /// First three characters of the local part, then `***@domain`
    EmailLocalPart,
    /// First two and last two characters, everything between starred
    Edges,
}

/// Per-category replacement data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    pub placeholder: &'static str,
    pub mask: MaskStrategy,
    pub fake: &'static str,
}

/// Compiled matching rule for one category
#[derive(Debug, Clone)]
pub struct PatternRule {
    category: PiiCategory,
    regex: Regex,
    validator: Option<Validator>,
}

impl PatternRule {
    pub(crate) fn new(category: PiiCategory, regex: Regex, validator: Option<Validator>) -> Self {
        Self { category, regex, validator }
    }

    /// Compile `pattern` into a rule for `category`
    pub(crate) fn compile(
        category: PiiCategory,
        pattern: &str,
        validator: Option<Validator>,
    ) -> PiiResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| PiiError::PatternCompilation(format!("{}: {}", category, e)))?;
        Ok(Self::new(category, regex, validator))
    }

    pub fn category(&self) -> PiiCategory {
        self.category
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether a candidate the regex produced is acceptable
    pub(crate) fn accepts(&self, caps: &Captures<'_>) -> bool {
        self.validator.map_or(true, |validate| validate(caps))
    }

    pub(crate) fn has_validator(&self) -> bool {
        self.validator.is_some()
    }
}

/// Read-only mapping from category to rule and profile
#[derive(Debug)]
pub struct PatternRegistry {
    rules: Vec<PatternRule>,
}

impl PatternRegistry {
    /// Rules in registration order
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn rule(&self, category: PiiCategory) -> &PatternRule {
        // Built from PiiCategory::ALL, so the index always exists.
        &self.rules[category.registration_index()]
    }

    pub fn profile(&self, category: PiiCategory) -> &'static CategoryProfile {
        profile(category)
    }
}

static REGISTRY: Lazy<PatternRegistry> = Lazy::new(|| PatternRegistry {
    rules: PiiCategory::ALL.iter().map(|&category| build_rule(category)).collect(),
});

/// The process-wide registry
pub fn registry() -> &'static PatternRegistry {
    &REGISTRY
}

fn build_rule(category: PiiCategory) -> PatternRule {
    let (pattern, validator): (&str, Option<Validator>) = match category {
        PiiCategory::Email => (EMAIL_PATTERN, None),
        PiiCategory::Phone => (PHONE_PATTERN, None),
        PiiCategory::Ssn => (SSN_PATTERN, Some(is_valid_ssn)),
        PiiCategory::CreditCard => (CREDIT_CARD_PATTERN, None),
        PiiCategory::IpAddress => (IP_ADDRESS_PATTERN, None),
        PiiCategory::Date => (DATE_PATTERN, None),
    };
    PatternRule::compile(category, pattern, validator)
        .unwrap_or_else(|e| panic!("built-in pattern should compile - this is a bug: {e}"))
}

static EMAIL_PROFILE: CategoryProfile = CategoryProfile {
    placeholder: "[REDACTED_EMAIL]",
    mask: MaskStrategy::EmailLocalPart,
    fake: "jane.doe@example.com",
};

static PHONE_PROFILE: CategoryProfile = CategoryProfile {
    placeholder: "[REDACTED_PHONE]",
    mask: MaskStrategy::Edges,
    fake: "555-0123",
};

static SSN_PROFILE: CategoryProfile = CategoryProfile {
    placeholder: "[REDACTED_SSN]",
    mask: MaskStrategy::Edges,
    fake: "000-00-0000",
};

static CREDIT_CARD_PROFILE: CategoryProfile = CategoryProfile {
    placeholder: "[REDACTED_CREDIT_CARD]",
    mask: MaskStrategy::Edges,
    fake: "0000-0000-0000-0000",
};

static IP_ADDRESS_PROFILE: CategoryProfile = CategoryProfile {
    placeholder: "[REDACTED_IP]",
    mask: MaskStrategy::Edges,
    fake: "127.0.0.1",
};

static DATE_PROFILE: CategoryProfile = CategoryProfile {
    placeholder: "[REDACTED_DATE]",
    mask: MaskStrategy::Edges,
    fake: "01/01/2000",
};

/// Replacement profile for a category
pub fn profile(category: PiiCategory) -> &'static CategoryProfile {
    match category {
        PiiCategory::Email => &EMAIL_PROFILE,
        PiiCategory::Phone => &PHONE_PROFILE,
        PiiCategory::Ssn => &SSN_PROFILE,
        PiiCategory::CreditCard => &CREDIT_CARD_PROFILE,
        PiiCategory::IpAddress => &IP_ADDRESS_PROFILE,
        PiiCategory::Date => &DATE_PROFILE,
    }
}

/// Area `000`, `666`, `9xx`, group `00` and serial `0000` are never issued.
fn is_valid_ssn(caps: &Captures<'_>) -> bool {
    let (Some(area), Some(group), Some(serial)) =
        (caps.name("area"), caps.name("group"), caps.name("serial"))
    else {
        return false;
    };
    let area = area.as_str();
    area != "000"
        && area != "666"
        && !area.starts_with('9')
        && group.as_str() != "00"
        && serial.as_str() != "0000"
}
