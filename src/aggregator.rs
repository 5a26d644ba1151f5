use std::collections::HashSet;

use crate::models::ProductRecord;

/// Merges candidates from all pages into the final result set.
///
/// Dedup is by `link`, first occurrence wins; the survivors are stably
/// sorted by review count descending and truncated to `max_results`.
pub fn aggregate(candidates: Vec<ProductRecord>, max_results: usize) -> Vec<ProductRecord> {
    let mut seen = HashSet::new();
    let mut merged: Vec<ProductRecord> = candidates
        .into_iter()
        .filter(|record| seen.insert(record.link.clone()))
        .collect();

    merged.sort_by(|a, b| b.review_count.cmp(&a.review_count));
    merged.truncate(max_results);
    merged
}
