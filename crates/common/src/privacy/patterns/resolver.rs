//! Overlap resolution over start-sorted matches.
//!
//! A greedy sweep keeps a match when it starts at or after the end of the
//! last kept match and drops it otherwise. There is no "prefer the longer
//! match" step: the earliest start wins even when it is shorter.

use std::cmp::Reverse;

use tracing::debug;

use super::types::{OverlapPolicy, PiiMatch};

/// Resolve with the default `EarliestStart` policy
///
/// `matches` must be sorted ascending by start (as `scan` returns them).
pub fn resolve(matches: Vec<PiiMatch>) -> Vec<PiiMatch> {
    resolve_with(matches, OverlapPolicy::EarliestStart)
}

/// Resolve with an explicit policy
pub fn resolve_with(mut matches: Vec<PiiMatch>, policy: OverlapPolicy) -> Vec<PiiMatch> {
    if policy == OverlapPolicy::LongestAtStart {
        // Stable: equal (start, len) keeps registration order.
        matches.sort_by_key(|m| (m.start(), Reverse(m.len())));
    }

    let raw = matches.len();
    let mut kept: Vec<PiiMatch> = Vec::with_capacity(raw);
    let mut last_end: Option<usize> = None;

    for candidate in matches {
        if last_end.map_or(true, |end| candidate.start() >= end) {
            last_end = Some(candidate.end());
            kept.push(candidate);
        }
    }

    debug!(raw, retained = kept.len(), dropped = raw - kept.len(), ?policy, "overlaps resolved");
    kept
}
