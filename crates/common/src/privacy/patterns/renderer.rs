//! Rebuilds the text with each resolved match replaced.

use tracing::debug;

use super::registry::{profile, MaskStrategy};
use super::types::{PiiMatch, RedactionMode};

/// Replace every match in `text` according to `mode`
///
/// `resolved` must be ascending by start and non-overlapping, with offsets
/// into `text` (as `resolve` returns them). Bytes outside the matches are
/// copied unchanged.
///
/// # Panics
/// Panics if a match starts before the end of the previous one or lies
/// outside `text`.
pub fn render(text: &str, resolved: &[PiiMatch], mode: RedactionMode) -> String {
    let mut out = String::with_capacity(text.len() + resolved.len() * 16);
    let mut cursor = 0;

    for m in resolved {
        debug_assert!(
            m.start() >= cursor && m.end() <= text.len(),
            "matches must be sorted, non-overlapping and inside the text"
        );
        out.push_str(&text[cursor..m.start()]);
        push_replacement(&mut out, m, mode);
        cursor = m.end();
    }
    out.push_str(&text[cursor..]);

    debug!(replaced = resolved.len(), ?mode, "text rendered");
    out
}

/// Replacement text for a single match
pub fn replacement(m: &PiiMatch, mode: RedactionMode) -> String {
    let mut out = String::new();
    push_replacement(&mut out, m, mode);
    out
}

fn push_replacement(out: &mut String, m: &PiiMatch, mode: RedactionMode) {
    let profile = profile(m.category());
    match mode {
        RedactionMode::Replace => out.push_str(profile.placeholder),
        RedactionMode::Fake => out.push_str(profile.fake),
        RedactionMode::Mask => mask_into(out, m.value(), profile.mask),
    }
}

/// Partially hide `value`
///
/// # Examples
/// ```
/// use piiguard_common::privacy::patterns::{mask_value, MaskStrategy};
///
/// assert_eq!(mask_value("john.doe@example.com", MaskStrategy::EmailLocalPart), "joh***@example.com");
/// assert_eq!(mask_value("555-123-4567", MaskStrategy::Edges), "55********67");
/// ```
pub fn mask_value(value: &str, strategy: MaskStrategy) -> String {
    let mut out = String::with_capacity(value.len());
    mask_into(&mut out, value, strategy);
    out
}

fn mask_into(out: &mut String, value: &str, strategy: MaskStrategy) {
    if strategy == MaskStrategy::EmailLocalPart {
        let mut parts = value.split('@');
        if let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) {
            out.extend(local.chars().take(3));
            out.push_str("***@");
            out.push_str(domain);
            return;
        }
    }

    let chars: Vec<char> = value.chars().collect();
    let n = chars.len();
    if n <= 4 {
        out.extend(std::iter::repeat('*').take(n));
        return;
    }
    out.extend(&chars[..2]);
    out.extend(std::iter::repeat('*').take(n - 4));
    out.extend(&chars[n - 2..]);
}
