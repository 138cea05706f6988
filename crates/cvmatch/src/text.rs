//! Small text normalization helpers shared by extraction and evaluation.

/// Collapses all runs of whitespace to single spaces and trims the ends.
pub fn normspace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercases, whitespace-normalizes, and deduplicates a list of strings,
/// preserving first-seen order and dropping entries that normalize to empty.
pub fn lower_dedup(items: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let v = normspace(item).to_lowercase();
        if !v.is_empty() && seen.insert(v.clone()) {
            out.push(v);
        }
    }
    out
}

/// Rounds to 4 decimal places for presentation.
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Truncates to at most `max_chars` characters without splitting a char.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
