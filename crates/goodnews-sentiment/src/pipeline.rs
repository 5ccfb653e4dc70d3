//! News pipeline orchestration.

use chrono::{DateTime, Utc};

use crate::error::SentimentError;
use crate::fallback::fallback_articles;
use crate::normalize::{extract_raw_articles, normalize_article};
use crate::policy::PositivityPolicy;
use crate::recency::is_recent;
use crate::scorer::{scorer_for, Scorer};
use crate::sources::{select_transport, NewsApiClient, Transport};
use crate::types::{Article, FetchOutcome, NewsQuery, NewsSettings};

/// Retrieves, scores, and filters news for one country and time window.
///
/// Holds exactly one scorer, chosen from [`NewsSettings::scorer`] at
/// construction. Calls are independent; nothing is cached between them.
pub struct NewsPipeline {
    settings: NewsSettings,
    client: NewsApiClient,
    scorer: Box<dyn Scorer>,
    policy: PositivityPolicy,
}

impl NewsPipeline {
    /// Build a pipeline from immutable settings.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Configuration`] if the HTTP client cannot be built.
    pub fn new(settings: NewsSettings) -> Result<Self, SentimentError> {
        let client = NewsApiClient::new(&settings)?;
        let scorer = scorer_for(settings.scorer);
        let policy = PositivityPolicy::new(settings.positive_threshold);
        Ok(Self {
            settings,
            client,
            scorer,
            policy,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &NewsSettings {
        &self.settings
    }

    #[must_use]
    pub fn transport(&self) -> Transport {
        select_transport(&self.settings)
    }

    /// Fetch positive articles for `country` over the last `days` days.
    ///
    /// Never fails: transport problems resolve to the fallback dataset.
    pub async fn fetch_news(&self, country: &str, days: i64) -> Vec<Article> {
        self.fetch_news_outcome(country, days).await.into_articles()
    }

    /// Like [`Self::fetch_news`], but reports whether the articles are live,
    /// whether upstream simply had nothing, or whether the fallback was used.
    pub async fn fetch_news_outcome(&self, country: &str, days: i64) -> FetchOutcome {
        let query = NewsQuery::resolve(country, days);
        let now = Utc::now();
        let transport = self.transport();

        tracing::debug!(
            country = %query.country,
            days = query.days,
            transport = %transport,
            scorer = %self.settings.scorer,
            "fetching news"
        );

        let outcome = match self.client.fetch_body(transport, &query, now).await {
            Ok(body) => self.process_body(&body, &query, now),
            Err(e) => {
                tracing::warn!(
                    country = %query.country,
                    transport = %transport,
                    error = %e,
                    "news request failed, serving fallback dataset"
                );
                FetchOutcome::Fallback {
                    reason: e.to_string(),
                    articles: fallback_articles(self.scorer.as_ref(), now),
                }
            }
        };

        tracing::info!(
            country = %query.country,
            outcome = outcome.kind(),
            count = outcome.articles().len(),
            "news fetch complete"
        );
        outcome
    }

    /// Normalize and filter a response body that arrived successfully.
    ///
    /// A body that is not valid JSON is treated as zero articles.
    fn process_body(&self, body: &str, query: &NewsQuery, now: DateTime<Utc>) -> FetchOutcome {
        let raw_items = match extract_raw_articles(body) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    country = %query.country,
                    error = %e,
                    "news response was not valid JSON, treating as empty"
                );
                return FetchOutcome::Empty {
                    malformed_body: true,
                };
            }
        };
        let raw_count = raw_items.len();

        let normalized: Vec<Article> = raw_items
            .iter()
            .filter_map(|raw| {
                normalize_article(raw, self.scorer.as_ref(), Some(&query.country_name), now)
            })
            .collect();
        let normalized_count = normalized.len();

        let recent: Vec<Article> = normalized
            .into_iter()
            .filter(|article| is_recent(article, query.days, now))
            .collect();
        let recent_count = recent.len();

        let positive = self.policy.filter(recent);

        tracing::debug!(
            country = %query.country,
            raw = raw_count,
            normalized = normalized_count,
            recent = recent_count,
            positive = positive.len(),
            "filtered upstream articles"
        );

        if positive.is_empty() {
            FetchOutcome::Empty {
                malformed_body: false,
            }
        } else {
            FetchOutcome::Live(positive)
        }
    }
}

/// Single entry point for callers that only want the article list.
///
/// Builds a [`NewsPipeline`] from `settings` and runs it. If even the
/// pipeline cannot be built, the fallback dataset is returned.
pub async fn fetch_news(settings: &NewsSettings, country: &str, days: i64) -> Vec<Article> {
    match NewsPipeline::new(settings.clone()) {
        Ok(pipeline) => pipeline.fetch_news(country, days).await,
        Err(e) => {
            tracing::warn!(error = %e, "news pipeline unavailable, serving fallback dataset");
            fallback_articles(scorer_for(settings.scorer).as_ref(), Utc::now())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use goodnews_core::ScorerKind;
    use serde_json::json;

    use super::*;
    use crate::types::{Sentiment, SentimentLabel};

    fn pipeline(scorer: ScorerKind) -> NewsPipeline {
        NewsPipeline::new(NewsSettings {
            scorer,
            ..NewsSettings::default()
        })
        .expect("pipeline")
    }

    fn body(articles: &serde_json::Value) -> String {
        json!({ "status": "ok", "articles": articles }).to_string()
    }

    #[test]
    fn malformed_body_is_empty_not_fallback() {
        let now = Utc::now();
        let outcome = pipeline(ScorerKind::Lexicon).process_body(
            "<html>oops</html>",
            &NewsQuery::resolve("us", 7),
            now,
        );
        assert_eq!(
            outcome,
            FetchOutcome::Empty {
                malformed_body: true
            }
        );
    }

    #[test]
    fn valid_empty_batch_is_empty_not_fallback() {
        let now = Utc::now();
        let outcome = pipeline(ScorerKind::Lexicon).process_body(
            &body(&json!([])),
            &NewsQuery::resolve("us", 7),
            now,
        );
        assert_eq!(
            outcome,
            FetchOutcome::Empty {
                malformed_body: false
            }
        );
    }

    #[test]
    fn non_object_items_are_skipped() {
        let now = Utc::now();
        let items = json!([
            "junk",
            null,
            { "title": "Community celebrates wonderful victory", "description": "great progress", "publishedAt": now.to_rfc3339(), "url": "https://x/ok" }
        ]);
        let outcome = pipeline(ScorerKind::Lexicon).process_body(
            &body(&items),
            &NewsQuery::resolve("ca", 7),
            now,
        );
        let articles = match outcome {
            FetchOutcome::Live(articles) => articles,
            other => panic!("expected live outcome, got {other:?}"),
        };
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].url, "https://x/ok");
        assert_eq!(articles[0].country.as_deref(), Some("Canada"));
    }

    #[test]
    fn upstream_order_is_preserved() {
        let now = Utc::now();
        let stamp = now.to_rfc3339();
        let items = json!([
            { "title": "Wonderful win", "url": "https://x/3", "publishedAt": stamp },
            { "title": "Grim outlook", "url": "https://x/drop", "publishedAt": stamp },
            { "title": "Great success", "url": "https://x/1", "publishedAt": stamp },
            { "title": "Happy hope", "url": "https://x/2", "publishedAt": stamp }
        ]);
        let articles = pipeline(ScorerKind::Lexicon)
            .process_body(&body(&items), &NewsQuery::resolve("us", 3), now)
            .into_articles();
        let urls: Vec<&str> = articles.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, ["https://x/3", "https://x/1", "https://x/2"]);
    }

    #[test]
    fn missing_published_at_passes_recency() {
        let now = Utc::now();
        let items = json!([{ "title": "Wonderful victory for local team", "url": "https://x/undated" }]);
        let articles = pipeline(ScorerKind::Lexicon)
            .process_body(&body(&items), &NewsQuery::resolve("us", 1), now)
            .into_articles();
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn stale_positive_article_is_dropped() {
        let now = Utc::now();
        let old = (now - Duration::days(11)).to_rfc3339();
        let items = json!([{ "title": "ok", "description": "fine", "publishedAt": old }]);
        let outcome = pipeline(ScorerKind::Lexicon).process_body(
            &body(&items),
            &NewsQuery::resolve("us", 7),
            now,
        );
        assert_eq!(
            outcome,
            FetchOutcome::Empty {
                malformed_body: false
            }
        );
    }

    #[test]
    fn keyword_scorer_attaches_labels() {
        let now = Utc::now();
        let items = json!([{
            "title": "Scientists achieve breakthrough success",
            "description": "hope for cure",
            "publishedAt": now.to_rfc3339(),
            "url": "https://x/1"
        }]);
        let articles = pipeline(ScorerKind::Keyword)
            .process_body(&body(&items), &NewsQuery::resolve("us", 7), now)
            .into_articles();
        assert_eq!(articles.len(), 1);
        assert_eq!(
            articles[0].sentiment,
            Sentiment::Label(SentimentLabel::Positive)
        );
    }
}
