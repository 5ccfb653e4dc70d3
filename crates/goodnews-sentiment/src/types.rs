use chrono::{DateTime, Duration, Utc};
use goodnews_core::{resolve_country, AppConfig, Environment, ScorerKind, DEFAULT_COUNTRY};
use serde::Serialize;

/// Categorical sentiment produced by the keyword classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// Output of a [`crate::scorer::Scorer`].
///
/// An article carries exactly one of the two shapes, depending on which
/// scorer the pipeline was built with. Serialized flattened into the
/// article as either `sentimentScore` or `sentimentLabel`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Sentiment {
    #[serde(rename = "sentimentScore")]
    Score(f32),
    #[serde(rename = "sentimentLabel")]
    Label(SentimentLabel),
}

impl Sentiment {
    #[must_use]
    pub fn score(&self) -> Option<f32> {
        match self {
            Sentiment::Score(s) => Some(*s),
            Sentiment::Label(_) => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<SentimentLabel> {
        match self {
            Sentiment::Score(_) => None,
            Sentiment::Label(l) => Some(*l),
        }
    }
}

/// A normalized news article.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    /// Display and de-duplication key. May be empty.
    pub url: String,
    /// Publisher display name, empty when unknown.
    pub source: String,
    /// ISO-8601 timestamp, passed through from upstream as-is.
    pub published_at: String,
    /// Display name of the requested country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    pub sentiment: Sentiment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
}

impl Article {
    /// Text the scorer and the negative-keyword veto look at.
    #[must_use]
    pub fn scoring_text(&self) -> String {
        scoring_text(&self.title, &self.description)
    }
}

pub(crate) fn scoring_text(title: &str, description: &str) -> String {
    format!("{title} {description}")
}

/// A request after defaulting and clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    /// Lowercase country code, never empty.
    pub country: String,
    /// Lookback window in days, at least 1.
    pub days: u32,
    /// Display name resolved from `country`.
    pub country_name: String,
}

impl NewsQuery {
    /// Apply request defaults: a blank country becomes `"us"` and the
    /// lookback window is clamped to a minimum of one day.
    #[must_use]
    pub fn resolve(country: &str, days: i64) -> Self {
        let trimmed = country.trim();
        let country = if trimmed.is_empty() {
            DEFAULT_COUNTRY.to_string()
        } else {
            trimmed.to_lowercase()
        };
        let days = u32::try_from(days.max(1)).unwrap_or(u32::MAX);
        let country_name = resolve_country(&country);
        Self {
            country,
            days,
            country_name,
        }
    }

    /// Oldest publication time that still counts as recent.
    #[must_use]
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        recency_cutoff(self.days, now)
    }
}

/// `now` minus `max(1, days)` days, saturating at the earliest representable time.
pub(crate) fn recency_cutoff(days: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    let window = Duration::days(i64::from(days.max(1)));
    now.checked_sub_signed(window)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Immutable settings the pipeline is constructed with.
#[derive(Clone)]
pub struct NewsSettings {
    pub environment: Environment,
    pub client_api_key: Option<String>,
    pub always_use_proxy: bool,
    pub proxy_url: String,
    pub upstream_base_url: String,
    pub page_size: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub scorer: ScorerKind,
    pub positive_threshold: f32,
}

impl NewsSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            environment: config.env.clone(),
            client_api_key: config.client_api_key.clone(),
            always_use_proxy: config.always_use_proxy,
            proxy_url: config.proxy_url.clone(),
            upstream_base_url: config.upstream_base_url.clone(),
            page_size: config.page_size,
            request_timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
            scorer: config.scorer,
            positive_threshold: config.positive_threshold,
        }
    }
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            client_api_key: None,
            always_use_proxy: false,
            proxy_url: "http://localhost:3000/api/news".to_string(),
            upstream_base_url: "https://newsapi.org/v2".to_string(),
            page_size: 100,
            request_timeout_secs: 15,
            user_agent: "goodnews/0.1 (positive-news)".to_string(),
            scorer: ScorerKind::Lexicon,
            positive_threshold: crate::policy::DEFAULT_POSITIVE_THRESHOLD,
        }
    }
}

impl std::fmt::Debug for NewsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsSettings")
            .field("environment", &self.environment)
            .field(
                "client_api_key",
                &self.client_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("always_use_proxy", &self.always_use_proxy)
            .field("proxy_url", &self.proxy_url)
            .field("upstream_base_url", &self.upstream_base_url)
            .field("page_size", &self.page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("scorer", &self.scorer)
            .field("positive_threshold", &self.positive_threshold)
            .finish()
    }
}

/// Result of one pipeline run, keeping "upstream had nothing" apart from
/// "upstream was unreachable".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Upstream answered and at least one article passed every filter.
    Live(Vec<Article>),
    /// Upstream answered but nothing survived. `malformed_body` is set when
    /// the body was not valid JSON.
    Empty { malformed_body: bool },
    /// Upstream could not be reached; the curated dataset is returned instead.
    Fallback {
        reason: String,
        articles: Vec<Article>,
    },
}

impl FetchOutcome {
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        match self {
            FetchOutcome::Live(articles) | FetchOutcome::Fallback { articles, .. } => articles,
            FetchOutcome::Empty { .. } => &[],
        }
    }

    #[must_use]
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            FetchOutcome::Live(articles) | FetchOutcome::Fallback { articles, .. } => articles,
            FetchOutcome::Empty { .. } => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }

    /// Short tag for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FetchOutcome::Live(_) => "live",
            FetchOutcome::Empty { .. } => "empty",
            FetchOutcome::Fallback { .. } => "fallback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(sentiment: Sentiment) -> Article {
        Article {
            title: "Title".to_string(),
            description: "Description".to_string(),
            url: "https://example.com/a".to_string(),
            source: "Example".to_string(),
            published_at: "2026-01-01T00:00:00Z".to_string(),
            country: Some("Canada".to_string()),
            sentiment,
            url_to_image: None,
        }
    }

    #[test]
    fn resolve_defaults_blank_country_to_us() {
        let query = NewsQuery::resolve("", 7);
        assert_eq!(query.country, "us");
        assert_eq!(query.country_name, "United States");
    }

    #[test]
    fn resolve_lowercases_and_trims_country() {
        let query = NewsQuery::resolve("  BG ", 3);
        assert_eq!(query.country, "bg");
        assert_eq!(query.country_name, "Bulgaria");
    }

    #[test]
    fn resolve_clamps_days_to_one() {
        assert_eq!(NewsQuery::resolve("us", 0).days, 1);
        assert_eq!(NewsQuery::resolve("us", -5).days, 1);
        assert_eq!(NewsQuery::resolve("us", 30).days, 30);
    }

    #[test]
    fn resolve_keeps_unknown_code_as_name() {
        let query = NewsQuery::resolve("zz", 1);
        assert_eq!(query.country, "zz");
        assert_eq!(query.country_name, "zz");
    }

    #[test]
    fn cutoff_is_days_before_now() {
        let now = Utc::now();
        let query = NewsQuery::resolve("us", 7);
        assert_eq!(now - query.cutoff(now), Duration::days(7));
    }

    #[test]
    fn cutoff_saturates_for_huge_windows() {
        let now = Utc::now();
        let cutoff = recency_cutoff(u32::MAX, now);
        assert!(cutoff < now);
    }

    #[test]
    fn score_serializes_as_sentiment_score() {
        let json = serde_json::to_value(sample(Sentiment::Score(3.0))).expect("serialize");
        assert_eq!(json["sentimentScore"], 3.0);
        assert!(json.get("sentimentLabel").is_none());
        assert_eq!(json["publishedAt"], "2026-01-01T00:00:00Z");
        assert_eq!(json["country"], "Canada");
        assert!(json.get("urlToImage").is_none());
    }

    #[test]
    fn label_serializes_as_sentiment_label() {
        let json = serde_json::to_value(sample(Sentiment::Label(SentimentLabel::Positive)))
            .expect("serialize");
        assert_eq!(json["sentimentLabel"], "positive");
        assert!(json.get("sentimentScore").is_none());
    }

    #[test]
    fn settings_debug_redacts_client_key() {
        let settings = NewsSettings {
            client_api_key: Some("very-secret".to_string()),
            ..NewsSettings::default()
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn empty_outcome_has_no_articles() {
        let outcome = FetchOutcome::Empty {
            malformed_body: false,
        };
        assert!(outcome.articles().is_empty());
        assert_eq!(outcome.kind(), "empty");
        assert!(!outcome.is_fallback());
        assert!(outcome.into_articles().is_empty());
    }
}
