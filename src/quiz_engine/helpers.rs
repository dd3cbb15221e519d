//! Small lookups shared by the feedback resolver, the tracker, and the view
//! adapter.
//!
//! Content maps are allowed to be incomplete (an incorrect choice without a
//! rationale, a quiz id with no quiz behind it). Every place that reads such a
//! map goes through [`lookup_or`] so a miss turns into explicit fallback text
//! rather than a panic or an empty string.

use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Rationale shown for an incorrect choice that has no authored explanation.
pub const FALLBACK_RATIONALE: &str = "No specific rationale available.";

/// Read `map[key]`, or `default` when the key is absent.
pub fn lookup_or<'a, K, Q>(map: &'a BTreeMap<K, String>, key: &Q, default: &'a str) -> &'a str
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    map.get(key).map(String::as_str).unwrap_or(default)
}

/// Human-readable position, 1-based (e.g. "Question 2 of 5").
pub fn progress_label(position: usize, total: usize) -> String {
    if total == 0 {
        return "No questions".to_string();
    }
    format!("Question {} of {}", position + 1, total)
}
