//! Fuzzy subsequence matching for the test filter.
//!
//! A query matches when all its characters appear in the target in order,
//! ignoring case.

/// True if every character of `query` appears in `target` in order
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let mut target_chars = target.chars();
    query
        .chars()
        .all(|wanted| target_chars.any(|found| chars_equal_fold(wanted, found)))
}

fn chars_equal_fold(wanted: char, found: char) -> bool {
    wanted == found || found.to_lowercase().eq(wanted.to_lowercase())
}
