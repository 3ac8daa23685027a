//! Formatting helpers shared by the result, history and progress views.

use chrono::{DateTime, Local, NaiveDateTime};

/// Result timestamp, e.g. `Mar 4, 2025 14:05`.
pub const RESULT_TIMESTAMP_FORMAT: &str = "%b %-d, %Y %H:%M";

/// History card timestamp, e.g. `Mar 4, 14:05`.
pub const CARD_TIMESTAMP_FORMAT: &str = "%b %-d, %H:%M";

/// Coarse bucket for a 0–100 quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    High,
    Medium,
    Low,
}

impl QualityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            QualityTier::High
        } else if score >= 60.0 {
            QualityTier::Medium
        } else {
            QualityTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::High => "High Quality",
            QualityTier::Medium => "Medium Quality",
            QualityTier::Low => "Low Quality",
        }
    }
}

/// `85.0` → `"85% - High Quality"`
pub fn quality_badge(score: f64) -> String {
    format!("{}% - {}", score, QualityTier::from_score(score).label())
}

/// Elapsed seconds as `m:ss`.
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Render a service timestamp with `pattern`.
///
/// The service emits RFC 3339 or naive ISO-8601 (no offset). Timestamps
/// with an offset are shown in the viewer's local time; naive ones are
/// already local and shown as written. Anything else is returned unchanged
/// rather than hidden.
pub fn format_timestamp(raw: &str, pattern: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(pattern).to_string();
    }
    for naive_format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, naive_format) {
            return dt.format(pattern).to_string();
        }
    }
    raw.to_string()
}
