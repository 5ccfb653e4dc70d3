//! Hard negative-keyword veto.
//!
//! A single strongly negative term can sit inside an article the numeric
//! scorer still rates as positive; any hit here suppresses the article.

pub(crate) const VETO_KEYWORDS: &[&str] = &[
    "crisis",
    "disaster",
    "war",
    "death",
    "dead",
    "killed",
    "murder",
    "suicide",
    "missing",
    "feared",
    "tragedy",
    "attack",
    "shooting",
    "terror",
    "violence",
    "abuse",
    "assault",
    "crash",
    "collapse",
    "fraud",
    "scandal",
    "victims",
];

/// Returns `true` if the lowercased text contains any veto keyword.
///
/// Substring matching, not word matching: "war" also fires on "software".
#[must_use]
pub fn is_overtly_negative(text: &str) -> bool {
    let lower = text.to_lowercase();
    VETO_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
