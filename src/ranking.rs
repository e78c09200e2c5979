//! Hit ordering.
//!
//! # INVARIANT: SIGNAL_PRECEDENCE (DO NOT VIOLATE)
//!
//! The rank key compares, strongest signal first:
//!
//! 1. exact-match count      (descending)
//! 2. prefix-match count     (descending)
//! 3. phrase bonus           (descending)
//! 4. record priority        (descending)
//! 5. ingestion ordinal      (ascending)
//!
//! Priority is a tie-break AFTER textual relevance: a caller-supplied bias
//! must never override a strictly better textual match. The ordinal makes
//! the order total, so repeated identical queries return identical lists.
//!
//! Ordering uses this lexicographic key directly. `Hit.score` is a derived
//! display value computed from the same signals; it is never compared.

use crate::highlight::{highlight, HighlightStyle};
use crate::query::QueryMatches;
use crate::types::{Hit, Record};

/// Default cap on returned hits. The engine serves suggestion dropdowns,
/// not exhaustive result pages.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

// Display-score weights. The gaps mirror the rank key's precedence so the
// printed score is monotone with the ordering for any plausible token count.
const EXACT_WEIGHT: f64 = 100.0;
const PREFIX_WEIGHT: f64 = 10.0;
const PHRASE_BONUS: f64 = 5.0;

/// Order candidates by the rank key and truncate to `limit`.
///
/// `records` must be the corpus the candidates were matched against; every
/// descriptor's ordinal indexes into it. Highlighting is rendered only for
/// the hits that survive truncation.
pub fn rank(
    matches: &QueryMatches,
    records: &[Record],
    limit: usize,
    style: &HighlightStyle,
) -> Vec<Hit> {
    let mut ordered: Vec<_> = matches.candidates.iter().collect();
    ordered.sort_by(|a, b| {
        let pa = records[a.record as usize].priority;
        let pb = records[b.record as usize].priority;
        b.exact
            .cmp(&a.exact)
            .then(b.prefix.cmp(&a.prefix))
            .then(b.phrase.cmp(&a.phrase))
            .then(pb.cmp(&pa))
            .then(a.record.cmp(&b.record))
    });

    ordered
        .into_iter()
        .take(limit)
        .map(|candidate| {
            let record = &records[candidate.record as usize];
            Hit {
                id: record.id,
                score: display_score(candidate.exact, candidate.prefix, candidate.phrase),
                highlighted: highlight(record, &candidate.matched, style),
            }
        })
        .collect()
}

fn display_score(exact: u32, prefix: u32, phrase: bool) -> f64 {
    f64::from(exact) * EXACT_WEIGHT
        + f64::from(prefix) * PREFIX_WEIGHT
        + if phrase { PHRASE_BONUS } else { 0.0 }
}
