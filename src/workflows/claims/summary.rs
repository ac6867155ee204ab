use super::domain::DamageRecord;

const MAX_SUMMARY_CHARS: usize = 400;

/// One-line damage narrative for adjusters: per-record descriptions joined
/// with "; ", or the provider narrative when nothing was detected.
pub(crate) fn damage_summary(records: &[DamageRecord], narrative: Option<&str>) -> String {
    let text = if records.is_empty() {
        narrative.unwrap_or_default().trim().to_string()
    } else {
        records
            .iter()
            .map(DamageRecord::summary)
            .collect::<Vec<_>>()
            .join("; ")
    };

    truncate_chars(&text, MAX_SUMMARY_CHARS)
}

// Char-based so a multi-byte scalar is never split.
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
