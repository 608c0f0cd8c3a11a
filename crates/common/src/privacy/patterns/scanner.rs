//! Span scanning: every enabled rule runs over the whole text independently.
//!
//! The combined output is sorted by start offset with a stable sort, so
//! matches that start at the same offset stay in registration order.
//! Matches from different categories may overlap; resolving that is left to
//! the resolver.

use std::ops::Range;

use tracing::{debug, warn};

use super::registry::{registry, PatternRule};
use super::types::{PiiCategory, PiiMatch};

/// Scan `text` with every registered category
pub fn scan(text: &str) -> Vec<PiiMatch> {
    scan_with(text, &PiiCategory::ALL)
}

/// Scan `text` with the given categories
///
/// Rules always run in registration order, whatever the order of
/// `categories`.
pub fn scan_with(text: &str, categories: &[PiiCategory]) -> Vec<PiiMatch> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for rule in registry().rules() {
        if categories.contains(&rule.category()) {
            scan_rule(rule, text, &mut matches);
        }
    }

    // `sort_by_key` is stable.
    matches.sort_by_key(PiiMatch::start);

    debug!(raw_matches = matches.len(), text_len = text.len(), "scan complete");
    matches
}

/// Whether any of `categories` occurs in `text`
///
/// Stops at the first accepted match.
pub(crate) fn any_match(text: &str, categories: &[PiiCategory]) -> bool {
    let mut found = false;
    for rule in registry().rules() {
        if categories.contains(&rule.category()) {
            walk_rule(rule, text, |_| {
                found = true;
                false
            });
        }
        if found {
            break;
        }
    }
    found
}

/// Collect one rule's own non-overlapping matches, left to right.
pub(crate) fn scan_rule(rule: &PatternRule, text: &str, out: &mut Vec<PiiMatch>) {
    walk_rule(rule, text, |span| {
        out.push(PiiMatch::from_span(rule.category(), &text[span.clone()], span.start));
        true
    });
}

/// Feed each accepted span to `on_match` until it returns false.
///
/// The cursor always moves forward: zero-length candidates and candidates
/// rejected by the rule's validator advance it by one character from the
/// candidate's start, accepted matches move it to their end.
fn walk_rule<F>(rule: &PatternRule, text: &str, mut on_match: F)
where
    F: FnMut(&Range<usize>) -> bool,
{
    let mut pos = 0;
    while pos <= text.len() {
        let Some((span, accepted)) = next_candidate(rule, text, pos) else {
            break;
        };

        if span.is_empty() {
            warn!(category = %rule.category(), offset = span.start, "zero-length match skipped");
            pos = next_char_boundary(text, span.start);
            continue;
        }

        if !accepted {
            pos = next_char_boundary(text, span.start);
            continue;
        }

        if !on_match(&span) {
            return;
        }
        pos = span.end;
    }
}

fn next_candidate(rule: &PatternRule, text: &str, pos: usize) -> Option<(Range<usize>, bool)> {
    let regex = rule.regex();
    if rule.has_validator() {
        let caps = regex.captures_at(text, pos)?;
        let whole = caps.get(0)?;
        Some((whole.range(), rule.accepts(&caps)))
    } else {
        regex.find_at(text, pos).map(|m| (m.range(), true))
    }
}

/// Byte index of the character after `idx`; past the end when `idx` is the end.
fn next_char_boundary(text: &str, idx: usize) -> usize {
    text[idx..].chars().next().map_or(text.len() + 1, |c| idx + c.len_utf8())
}
