//! `news` and `countries` command handlers.

use chrono::{DateTime, Utc};
use goodnews_core::{AppConfig, COUNTRIES};
use goodnews_sentiment::{
    fallback_articles, scorer_for, Article, FetchOutcome, NewsPipeline, NewsSettings, Sentiment,
};

/// Fetch positive news and print it to stdout.
///
/// The outcome kind goes to the log on stderr, so `--json` output stays
/// machine-readable.
///
/// # Errors
///
/// Returns an error if the JSON output cannot be serialized.
pub(crate) async fn run_news(
    config: &AppConfig,
    country: &str,
    days: i64,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = fetch_outcome(NewsSettings::from_app_config(config), country, days).await;
    match &outcome {
        FetchOutcome::Live(articles) => {
            tracing::info!(count = articles.len(), "showing live articles");
        }
        FetchOutcome::Empty { malformed_body } => {
            tracing::info!(malformed_body, "no articles passed the filters");
        }
        FetchOutcome::Fallback { reason, .. } => {
            tracing::warn!(reason = %reason, "showing curated fallback stories");
        }
    }

    let articles = outcome.into_articles();
    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    if articles.is_empty() {
        println!("No positive news found.");
        println!("Try adjusting your filters or selecting a different time period.");
        return Ok(());
    }

    for article in &articles {
        println!("{}\n", render_article(article));
    }
    Ok(())
}

/// Run the pipeline, serving the fallback stories if it cannot be built.
pub(crate) async fn fetch_outcome(settings: NewsSettings, country: &str, days: i64) -> FetchOutcome {
    let scorer = settings.scorer;
    match NewsPipeline::new(settings) {
        Ok(pipeline) => {
            tracing::debug!(transport = %pipeline.transport(), "news pipeline ready");
            pipeline.fetch_news_outcome(country, days).await
        }
        Err(e) => {
            tracing::warn!(error = %e, "news pipeline unavailable, serving fallback dataset");
            FetchOutcome::Fallback {
                reason: e.to_string(),
                articles: fallback_articles(scorer_for(scorer).as_ref(), Utc::now()),
            }
        }
    }
}

/// Print the supported country table.
pub(crate) fn run_countries() {
    for country in COUNTRIES {
        println!("{:<4}{}", country.code, country.name);
    }
}

/// Multi-line plain-text rendering of one article.
pub(crate) fn render_article(article: &Article) -> String {
    let mut byline: Vec<String> = Vec::new();
    if !article.source.is_empty() {
        byline.push(article.source.clone());
    }
    if let Some(country) = &article.country {
        byline.push(country.clone());
    }
    byline.push(display_date(&article.published_at));
    byline.push(match article.sentiment {
        Sentiment::Score(score) => format!("score {score:+}"),
        Sentiment::Label(_) => "positive".to_string(),
    });

    let mut out = format!("* {}\n  {}", article.title, byline.join(" | "));
    if !article.description.is_empty() {
        out.push_str("\n  ");
        out.push_str(&article.description);
    }
    if !article.url.is_empty() {
        out.push_str("\n  ");
        out.push_str(&article.url);
    }
    out
}

/// Calendar date of an RFC 3339 timestamp, or the raw value if it does not parse.
fn display_date(published_at: &str) -> String {
    DateTime::parse_from_rfc3339(published_at).map_or_else(
        |_| published_at.to_string(),
        |ts| ts.format("%Y-%m-%d").to_string(),
    )
}
