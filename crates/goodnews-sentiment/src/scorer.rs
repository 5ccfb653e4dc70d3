//! Sentiment scorers.
//!
//! Two interchangeable implementations sit behind [`Scorer`]: a weighted
//! word lexicon that yields a numeric score, and a keyword classifier that
//! yields a label. The pipeline is built with exactly one of them.

use goodnews_core::ScorerKind;

use crate::types::{Sentiment, SentimentLabel};

/// Turns article text into a [`Sentiment`].
pub trait Scorer: Send + Sync + std::fmt::Debug {
    fn score(&self, text: &str) -> Sentiment;
}

/// Build the scorer selected in configuration.
#[must_use]
pub fn scorer_for(kind: ScorerKind) -> Box<dyn Scorer> {
    match kind {
        ScorerKind::Lexicon => Box::new(LexiconScorer),
        ScorerKind::Keyword => Box::new(KeywordClassifier),
    }
}

/// Numeric scorer backed by [`LEXICON`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl Scorer for LexiconScorer {
    fn score(&self, text: &str) -> Sentiment {
        Sentiment::Score(lexicon_score(text))
    }
}

/// Categorical scorer backed by [`POSITIVE_KEYWORDS`] and [`NEGATIVE_KEYWORDS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl Scorer for KeywordClassifier {
    fn score(&self, text: &str) -> Sentiment {
        Sentiment::Label(classify_keywords(text))
    }
}

/// General-purpose affect lexicon.
///
/// Keys are lowercase single words; weights run from -5 (very negative)
/// to +5 (very positive).
pub(crate) const LEXICON: &[(&str, i8)] = &[
    // Positive
    ("accomplish", 2),
    ("accomplished", 2),
    ("achieve", 2),
    ("achieved", 2),
    ("achievement", 2),
    ("admire", 3),
    ("amazing", 4),
    ("award", 3),
    ("awarded", 3),
    ("awesome", 4),
    ("beautiful", 3),
    ("benefit", 2),
    ("beneficial", 2),
    ("best", 3),
    ("better", 2),
    ("boost", 1),
    ("breakthrough", 3),
    ("brilliant", 4),
    ("celebrate", 3),
    ("celebrated", 3),
    ("celebration", 3),
    ("charity", 2),
    ("cheer", 2),
    ("clean", 2),
    ("comfort", 2),
    ("community", 1),
    ("cooperation", 2),
    ("courage", 2),
    ("cure", 2),
    ("delight", 3),
    ("delighted", 3),
    ("discovery", 2),
    ("effective", 2),
    ("efficient", 2),
    ("encourage", 2),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fantastic", 4),
    ("fine", 2),
    ("free", 1),
    ("friendly", 2),
    ("fun", 4),
    ("generous", 2),
    ("glad", 3),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("growth", 2),
    ("happy", 3),
    ("heal", 2),
    ("healing", 2),
    ("healthy", 2),
    ("help", 2),
    ("helping", 2),
    ("hero", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("improve", 2),
    ("improved", 2),
    ("improvement", 2),
    ("innovation", 1),
    ("innovative", 2),
    ("inspiring", 3),
    ("joy", 3),
    ("kind", 2),
    ("love", 3),
    ("loved", 3),
    ("lucky", 3),
    ("milestone", 2),
    ("ok", 2),
    ("optimistic", 2),
    ("peace", 2),
    ("peaceful", 2),
    ("perfect", 3),
    ("pleased", 3),
    ("positive", 2),
    ("progress", 2),
    ("promise", 1),
    ("promising", 2),
    ("protect", 1),
    ("protected", 1),
    ("proud", 2),
    ("record", 1),
    ("recovery", 2),
    ("remarkable", 2),
    ("rescue", 2),
    ("rescued", 2),
    ("save", 2),
    ("saved", 2),
    ("smile", 2),
    ("solution", 1),
    ("strong", 2),
    ("succeed", 3),
    ("success", 2),
    ("successful", 3),
    ("successfully", 3),
    ("support", 2),
    ("thank", 2),
    ("thrilled", 5),
    ("triumph", 4),
    ("unity", 1),
    ("victory", 3),
    ("win", 4),
    ("winner", 4),
    ("wins", 4),
    ("wonderful", 4),
    ("worth", 2),
    // Negative
    ("abuse", -3),
    ("accident", -2),
    ("afraid", -2),
    ("anger", -3),
    ("angry", -3),
    ("arrest", -2),
    ("arrested", -3),
    ("attack", -1),
    ("attacked", -1),
    ("bad", -3),
    ("bankrupt", -3),
    ("bomb", -1),
    ("catastrophe", -3),
    ("collapse", -2),
    ("conflict", -2),
    ("corruption", -2),
    ("crash", -2),
    ("crime", -3),
    ("crisis", -3),
    ("danger", -2),
    ("dangerous", -2),
    ("dead", -3),
    ("death", -2),
    ("decline", -1),
    ("destroyed", -3),
    ("die", -3),
    ("died", -3),
    ("disaster", -2),
    ("disease", -1),
    ("doubt", -1),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fake", -3),
    ("fear", -2),
    ("fears", -2),
    ("fight", -1),
    ("fire", -2),
    ("fraud", -4),
    ("grief", -2),
    ("guilty", -3),
    ("hate", -3),
    ("hurt", -2),
    ("injured", -2),
    ("kill", -3),
    ("killed", -3),
    ("loss", -3),
    ("lost", -3),
    ("murder", -2),
    ("pain", -2),
    ("panic", -3),
    ("poverty", -1),
    ("problem", -2),
    ("protest", -2),
    ("recession", -2),
    ("risk", -2),
    ("sad", -2),
    ("scandal", -3),
    ("shooting", -2),
    ("strike", -1),
    ("suffer", -2),
    ("suicide", -2),
    ("terrible", -3),
    ("terror", -3),
    ("terrorist", -2),
    ("threat", -2),
    ("tragedy", -2),
    ("tragic", -2),
    ("unemployment", -2),
    ("victim", -3),
    ("victims", -3),
    ("violence", -3),
    ("war", -2),
    ("worried", -3),
    ("worse", -3),
    ("worst", -3),
];

/// Score a text string using [`LEXICON`].
///
/// Splits text into lowercase words with surrounding punctuation trimmed
/// and sums the matching weights. No normalization is applied, so longer
/// texts can reach larger magnitudes. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if let Some(&(_, weight)) = LEXICON.iter().find(|(lex_word, _)| *lex_word == w) {
            score += f32::from(weight);
        }
    }
    score
}

pub(crate) const POSITIVE_KEYWORDS: &[&str] = &[
    "success",
    "achievement",
    "breakthrough",
    "progress",
    "improvement",
    "growth",
    "solution",
    "innovation",
    "recovery",
    "hope",
    "celebration",
    "victory",
    "positive",
    "beneficial",
    "excellent",
    "amazing",
    "wonderful",
    "great",
    "helping",
    "support",
    "unity",
    "peace",
    "cooperation",
    "collaboration",
    "milestone",
    "advancement",
    "discovery",
    "cure",
    "healing",
    "charity",
    "volunteer",
    "community",
    "environmental",
    "sustainability",
    "renewable",
];

pub(crate) const NEGATIVE_KEYWORDS: &[&str] = &[
    "crisis",
    "disaster",
    "conflict",
    "war",
    "violence",
    "crime",
    "death",
    "tragedy",
    "failure",
    "collapse",
    "decline",
    "recession",
    "unemployment",
    "poverty",
    "scandal",
    "corruption",
    "fraud",
    "terrorist",
    "attack",
    "threat",
    "danger",
    "risk",
    "problem",
];

/// Classify text by counting which keywords it contains.
///
/// Matching is plain substring search on the lowercased text, so a keyword
/// inside a longer word counts ("war" matches "reward"). Each keyword counts
/// at most once. Ties and texts with no keywords are neutral.
#[must_use]
pub fn classify_keywords(text: &str) -> SentimentLabel {
    let lower = text.to_lowercase();
    let positive = POSITIVE_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count();
    let negative = NEGATIVE_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count();

    if positive > negative && positive > 0 {
        SentimentLabel::Positive
    } else if negative > positive {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
