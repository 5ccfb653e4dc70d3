//! Decides which scored articles are surfaced.

use crate::types::{Article, Sentiment, SentimentLabel};
use crate::veto::is_overtly_negative;

/// Numeric scores must be strictly above this to count as positive.
pub const DEFAULT_POSITIVE_THRESHOLD: f32 = 1.0;

/// Keep/drop predicate over a scored [`Article`].
///
/// Numeric sentiment passes when it is above the threshold and the text
/// does not trip the negative-keyword veto. Categorical sentiment passes
/// only when labelled positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositivityPolicy {
    threshold: f32,
}

impl Default for PositivityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE_THRESHOLD)
    }
}

impl PositivityPolicy {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub fn is_positive(&self, article: &Article) -> bool {
        match article.sentiment {
            Sentiment::Score(score) => {
                score > self.threshold && !is_overtly_negative(&article.scoring_text())
            }
            Sentiment::Label(label) => label == SentimentLabel::Positive,
        }
    }

    /// Keep only positive articles, preserving input order.
    #[must_use]
    pub fn filter(&self, articles: Vec<Article>) -> Vec<Article> {
        articles
            .into_iter()
            .filter(|article| self.is_positive(article))
            .collect()
    }
}
