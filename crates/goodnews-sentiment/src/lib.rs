//! Positive-news pipeline for Good News.
//!
//! Fetches articles for a country and lookback window (directly from the
//! news provider or through the backend proxy), normalizes the untrusted
//! JSON, scores each article, and keeps only recent, positive ones. Any
//! transport failure resolves to a curated fallback dataset.

pub mod error;
pub mod fallback;
pub mod normalize;
pub mod pipeline;
pub mod policy;
pub mod recency;
pub mod scorer;
pub mod sources;
pub mod types;
pub mod veto;

pub use error::SentimentError;
pub use fallback::fallback_articles;
pub use normalize::{extract_raw_articles, normalize_article};
pub use pipeline::{fetch_news, NewsPipeline};
pub use policy::{PositivityPolicy, DEFAULT_POSITIVE_THRESHOLD};
pub use recency::is_recent;
pub use scorer::{
    classify_keywords, lexicon_score, scorer_for, KeywordClassifier, LexiconScorer, Scorer,
};
pub use sources::{select_transport, NewsApiClient, Transport};
pub use types::{Article, FetchOutcome, NewsQuery, NewsSettings, Sentiment, SentimentLabel};
pub use veto::is_overtly_negative;
