//! Deterministic ordering of scored passages.

use std::cmp::Ordering;

/// Sort by descending score, ties broken by ascending passage index, and
/// keep the first `top_k`.
pub fn rank(mut scored: Vec<(usize, f64)>, top_k: usize) -> Vec<(usize, f64)> {
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(top_k);
    scored
}
