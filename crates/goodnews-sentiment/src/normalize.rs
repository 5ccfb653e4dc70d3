//! Maps untrusted upstream JSON into [`Article`] records.
//!
//! Nothing in here fails: type mismatches degrade to empty or default
//! fields so that one odd item never sinks the batch.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::scorer::Scorer;
use crate::types::{scoring_text, Article};

/// Pull the raw `articles` array out of a response body.
///
/// A body that parses but has no `articles` array (or is not an object)
/// yields an empty list.
///
/// # Errors
///
/// Returns the JSON error when the body is not valid JSON.
pub fn extract_raw_articles(body: &str) -> Result<Vec<Value>, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    let articles = match value {
        Value::Object(mut map) => match map.remove("articles") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    Ok(articles)
}

/// Normalize one raw upstream item.
///
/// Returns `None` when `raw` is not a JSON object. A missing or non-string
/// `publishedAt` is replaced with `now`. The sentiment is computed from
/// `title + " " + description` with the given scorer.
#[must_use]
pub fn normalize_article(
    raw: &Value,
    scorer: &dyn Scorer,
    country: Option<&str>,
    now: DateTime<Utc>,
) -> Option<Article> {
    let obj = raw.as_object()?;

    let string_field = |key: &str| -> Option<String> {
        obj.get(key).and_then(Value::as_str).map(ToOwned::to_owned)
    };

    let title = string_field("title").unwrap_or_default();
    let description = string_field("description").unwrap_or_default();
    let url = string_field("url").unwrap_or_default();
    let url_to_image = string_field("urlToImage");
    let published_at = string_field("publishedAt")
        .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true));
    let source = match obj.get("source") {
        Some(Value::Object(src)) => src
            .get("name")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .unwrap_or_default(),
        Some(Value::String(name)) => name.clone(),
        _ => String::new(),
    };

    let sentiment = scorer.score(&scoring_text(&title, &description));

    Some(Article {
        title,
        description,
        url,
        source,
        published_at,
        country: country.map(ToOwned::to_owned),
        sentiment,
        url_to_image,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::scorer::{KeywordClassifier, LexiconScorer};
    use crate::types::{Sentiment, SentimentLabel};

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn non_object_items_are_dropped() {
        for raw in [json!(null), json!(42), json!("title"), json!([1, 2]), json!(true)] {
            assert!(
                normalize_article(&raw, &LexiconScorer, None, fixed_now()).is_none(),
                "expected None for {raw}"
            );
        }
    }

    #[test]
    fn well_formed_item_keeps_display_fields() {
        let raw = json!({
            "title": "Scientists achieve breakthrough success",
            "description": "hope for cure",
            "url": "https://x/1",
            "urlToImage": "https://x/1.jpg",
            "publishedAt": "2026-03-01T10:00:00Z",
            "source": { "id": null, "name": "X" }
        });
        let article = normalize_article(&raw, &LexiconScorer, Some("United States"), fixed_now())
            .expect("object should normalize");

        assert_eq!(article.title, "Scientists achieve breakthrough success");
        assert_eq!(article.description, "hope for cure");
        assert_eq!(article.url, "https://x/1");
        assert_eq!(article.url_to_image.as_deref(), Some("https://x/1.jpg"));
        assert_eq!(article.published_at, "2026-03-01T10:00:00Z");
        assert_eq!(article.source, "X");
        assert_eq!(article.country.as_deref(), Some("United States"));

        let json = serde_json::to_value(&article).expect("serialize");
        assert_eq!(json["title"], raw["title"]);
        assert_eq!(json["description"], raw["description"]);
        assert_eq!(json["url"], raw["url"]);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let article = normalize_article(&json!({}), &LexiconScorer, None, fixed_now())
            .expect("empty object should normalize");
        assert_eq!(article.title, "");
        assert_eq!(article.description, "");
        assert_eq!(article.url, "");
        assert_eq!(article.source, "");
        assert!(article.url_to_image.is_none());
        assert!(article.country.is_none());
        assert_eq!(article.sentiment, Sentiment::Score(0.0));
    }

    #[test]
    fn wrong_types_degrade_per_field() {
        let raw = json!({
            "title": 12,
            "description": ["not", "a", "string"],
            "url": { "href": "https://x" },
            "urlToImage": false,
            "publishedAt": 1_700_000_000,
            "source": 7
        });
        let article = normalize_article(&raw, &LexiconScorer, None, fixed_now())
            .expect("object should normalize");
        assert_eq!(article.title, "");
        assert_eq!(article.description, "");
        assert_eq!(article.url, "");
        assert!(article.url_to_image.is_none());
        assert_eq!(article.source, "");
        assert_eq!(article.published_at, "2026-03-01T12:00:00.000Z");
    }

    #[test]
    fn missing_published_at_uses_now() {
        let article = normalize_article(&json!({ "title": "t" }), &LexiconScorer, None, fixed_now())
            .expect("object should normalize");
        assert_eq!(article.published_at, "2026-03-01T12:00:00.000Z");
    }

    #[test]
    fn string_source_is_used_directly() {
        let article = normalize_article(
            &json!({ "source": "Daily Planet" }),
            &LexiconScorer,
            None,
            fixed_now(),
        )
        .expect("object should normalize");
        assert_eq!(article.source, "Daily Planet");
    }

    #[test]
    fn source_object_without_string_name_is_empty() {
        let article = normalize_article(
            &json!({ "source": { "name": null } }),
            &LexiconScorer,
            None,
            fixed_now(),
        )
        .expect("object should normalize");
        assert_eq!(article.source, "");
    }

    #[test]
    fn scorer_sees_title_and_description() {
        let raw = json!({ "title": "Ceasefire brings", "description": "peace" });
        let article = normalize_article(&raw, &KeywordClassifier, None, fixed_now())
            .expect("object should normalize");
        assert_eq!(
            article.sentiment,
            Sentiment::Label(SentimentLabel::Positive)
        );
    }

    #[test]
    fn extract_reads_articles_array() {
        let items = extract_raw_articles(r#"{"status":"ok","articles":[{"title":"a"},3]}"#)
            .expect("valid JSON");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn extract_without_articles_is_empty() {
        assert!(extract_raw_articles(r#"{"status":"ok"}"#)
            .expect("valid JSON")
            .is_empty());
        assert!(extract_raw_articles(r#"{"articles":"nope"}"#)
            .expect("valid JSON")
            .is_empty());
        assert!(extract_raw_articles("[1,2,3]").expect("valid JSON").is_empty());
    }

    #[test]
    fn extract_malformed_body_is_error() {
        assert!(extract_raw_articles("<html>Bad Gateway</html>").is_err());
        assert!(extract_raw_articles("").is_err());
    }
}
