//! HTTP client for the news search endpoint, called directly or via the proxy.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Url};

use super::Transport;
use crate::error::SentimentError;
use crate::types::{NewsQuery, NewsSettings};

/// Issues the single outbound request of a pipeline run.
///
/// One request per call, no retries. Non-2xx responses and timeouts are
/// returned as errors for the pipeline to absorb.
pub struct NewsApiClient {
    client: Client,
    proxy_url: String,
    upstream_base_url: String,
    client_api_key: Option<String>,
    page_size: u32,
    timeout_secs: u64,
}

impl NewsApiClient {
    /// Creates a client with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Configuration`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(settings: &NewsSettings) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&settings.user_agent)
            .build()
            .map_err(|e| SentimentError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            proxy_url: settings.proxy_url.clone(),
            upstream_base_url: settings.upstream_base_url.clone(),
            client_api_key: settings.client_api_key.clone(),
            page_size: settings.page_size,
            timeout_secs: settings.request_timeout_secs,
        })
    }

    /// Build the request URL for `transport`.
    ///
    /// Direct calls hit `{upstream}/everything` searching for the quoted
    /// country name and carry the client key. Proxy calls pass the country
    /// code and search term and leave the key to the proxy.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::InvalidUrl`] if the configured base URL does not parse.
    /// - [`SentimentError::Configuration`] if `Direct` is requested without a client key.
    pub fn request_url(
        &self,
        transport: Transport,
        query: &NewsQuery,
        now: DateTime<Utc>,
    ) -> Result<Url, SentimentError> {
        let search = format!("\"{}\"", query.country_name);
        let from = query.cutoff(now).format("%Y-%m-%d").to_string();
        let page_size = self.page_size.to_string();

        match transport {
            Transport::Direct => {
                let key = self.client_api_key.as_deref().ok_or_else(|| {
                    SentimentError::Configuration(
                        "direct transport selected without a client API key".to_string(),
                    )
                })?;
                let raw = format!("{}/everything", self.upstream_base_url.trim_end_matches('/'));
                let mut url = parse_url(&raw)?;
                url.query_pairs_mut()
                    .append_pair("q", &search)
                    .append_pair("pageSize", &page_size)
                    .append_pair("from", &from)
                    .append_pair("sortBy", "publishedAt")
                    .append_pair("apiKey", key);
                Ok(url)
            }
            Transport::Proxy => {
                let mut url = parse_url(&self.proxy_url)?;
                url.query_pairs_mut()
                    .append_pair("country", &query.country)
                    .append_pair("q", &search)
                    .append_pair("pageSize", &page_size)
                    .append_pair("from", &from);
                Ok(url)
            }
        }
    }

    /// Perform the GET and return the full body as text.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::Timeout`] when the configured deadline passes.
    /// - [`SentimentError::UpstreamStatus`] for any non-2xx status.
    /// - [`SentimentError::Http`] on network or TLS failure.
    /// - Anything [`Self::request_url`] returns.
    pub async fn fetch_body(
        &self,
        transport: Transport,
        query: &NewsQuery,
        now: DateTime<Utc>,
    ) -> Result<String, SentimentError> {
        let url = self.request_url(transport, query, now)?;
        let endpoint = without_query(&url);

        tracing::debug!(
            transport = %transport,
            endpoint = %endpoint,
            country = %query.country,
            days = query.days,
            "requesting news"
        );

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.map_request_error(e, &endpoint))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::UpstreamStatus {
                status: status.as_u16(),
                url: endpoint,
            });
        }

        response
            .text()
            .await
            .map_err(|e| self.map_request_error(e, &endpoint))
    }

    // Strip the URL from reqwest errors so the client key never reaches logs.
    fn map_request_error(&self, error: reqwest::Error, endpoint: &str) -> SentimentError {
        if error.is_timeout() {
            SentimentError::Timeout {
                url: endpoint.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            SentimentError::Http(error.without_url())
        }
    }
}

fn parse_url(raw: &str) -> Result<Url, SentimentError> {
    Url::parse(raw).map_err(|e| SentimentError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

fn without_query(url: &Url) -> String {
    let mut endpoint = url.clone();
    endpoint.set_query(None);
    endpoint.to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-10T08:30:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    fn client(settings: &NewsSettings) -> NewsApiClient {
        NewsApiClient::new(settings).expect("failed to build test client")
    }

    fn pairs(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn direct_url_searches_everything_with_client_key() {
        let settings = NewsSettings {
            client_api_key: Some("client-key".to_string()),
            upstream_base_url: "https://news.example/v2/".to_string(),
            page_size: 50,
            ..NewsSettings::default()
        };
        let url = client(&settings)
            .request_url(Transport::Direct, &NewsQuery::resolve("gb", 7), fixed_now())
            .expect("url");

        assert_eq!(url.path(), "/v2/everything");
        let q = pairs(&url);
        assert_eq!(q["q"], "\"United Kingdom\"");
        assert_eq!(q["pageSize"], "50");
        assert_eq!(q["from"], "2026-03-03");
        assert_eq!(q["sortBy"], "publishedAt");
        assert_eq!(q["apiKey"], "client-key");
    }

    #[test]
    fn proxy_url_carries_country_and_no_key() {
        let settings = NewsSettings {
            client_api_key: Some("client-key".to_string()),
            proxy_url: "http://localhost:3000/api/news".to_string(),
            ..NewsSettings::default()
        };
        let url = client(&settings)
            .request_url(Transport::Proxy, &NewsQuery::resolve("", 0), fixed_now())
            .expect("url");

        assert_eq!(url.path(), "/api/news");
        let q = pairs(&url);
        assert_eq!(q["country"], "us");
        assert_eq!(q["q"], "\"United States\"");
        assert_eq!(q["pageSize"], "100");
        assert_eq!(q["from"], "2026-03-09");
        assert!(!q.contains_key("apiKey"));
    }

    #[test]
    fn direct_without_key_is_configuration_error() {
        let settings = NewsSettings::default();
        let result = client(&settings).request_url(
            Transport::Direct,
            &NewsQuery::resolve("us", 1),
            fixed_now(),
        );
        assert!(
            matches!(result, Err(SentimentError::Configuration(_))),
            "expected Configuration error, got: {result:?}"
        );
    }

    #[test]
    fn invalid_proxy_url_is_reported() {
        let settings = NewsSettings {
            proxy_url: "not a url".to_string(),
            ..NewsSettings::default()
        };
        let result = client(&settings).request_url(
            Transport::Proxy,
            &NewsQuery::resolve("us", 1),
            fixed_now(),
        );
        assert!(
            matches!(result, Err(SentimentError::InvalidUrl { .. })),
            "expected InvalidUrl, got: {result:?}"
        );
    }

    #[test]
    fn without_query_drops_the_key() {
        let url = Url::parse("https://news.example/v2/everything?apiKey=secret&q=x").expect("url");
        assert_eq!(without_query(&url), "https://news.example/v2/everything");
    }
}
