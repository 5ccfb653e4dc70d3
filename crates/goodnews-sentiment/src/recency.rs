//! Lookback-window filter.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::types::{recency_cutoff, Article};

/// Returns `true` if the article was published within the last
/// `max(1, days)` days.
///
/// Articles whose timestamp does not parse are excluded.
#[must_use]
pub fn is_recent(article: &Article, days: u32, now: DateTime<Utc>) -> bool {
    let cutoff = recency_cutoff(days, now);
    match parse_published_at(&article.published_at) {
        Some(published) => published >= cutoff,
        None => {
            tracing::debug!(
                url = %article.url,
                published_at = %article.published_at,
                "unparseable publishedAt, excluding article"
            );
            false
        }
    }
}

/// Parse an ISO-8601 publication time.
///
/// Accepts RFC 3339, offsets without a colon (`+0000`), and local date-times
/// or bare dates. The last two carry no zone and are read as UTC.
pub(crate) fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
