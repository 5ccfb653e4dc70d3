use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use reqwest::Url;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{proxy_error, AppState};

pub(super) const CACHE_CONTROL: &str = "s-maxage=60, stale-while-revalidate=300";
const DEFAULT_COUNTRY: &str = "us";
const DEFAULT_PAGE_SIZE: &str = "100";

/// Query string accepted by `GET /api/news`.
///
/// Values are forwarded as text; the upstream validates them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewsProxyQuery {
    pub country: Option<String>,
    pub q: Option<String>,
    pub page_size: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Build the upstream URL for a proxied request.
///
/// A search term selects `everything` and replaces the country filter;
/// otherwise `top-headlines` is queried for the country. The server key is
/// always appended last.
pub(super) fn build_upstream_url(
    base_url: &str,
    query: &NewsProxyQuery,
    api_key: &str,
) -> anyhow::Result<Url> {
    let search = non_blank(query.q.as_deref());
    let endpoint = if search.is_some() {
        "everything"
    } else {
        "top-headlines"
    };
    let mut url = Url::parse(&format!("{}/{endpoint}", base_url.trim_end_matches('/')))?;

    {
        let mut pairs = url.query_pairs_mut();
        match search {
            Some(q) => pairs.append_pair("q", q),
            None => pairs.append_pair(
                "country",
                non_blank(query.country.as_deref()).unwrap_or(DEFAULT_COUNTRY),
            ),
        };
        pairs.append_pair(
            "pageSize",
            non_blank(query.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
        );
        if let Some(from) = non_blank(query.from.as_deref()) {
            pairs.append_pair("from", from);
        }
        if let Some(to) = non_blank(query.to.as_deref()) {
            pairs.append_pair("to", to);
        }
        pairs.append_pair("apiKey", api_key);
    }

    Ok(url)
}

/// `GET /api/news`: forward to the news provider with the server-held key.
///
/// The upstream status and body are passed through untouched so the client
/// sees exactly what the provider returned. Proxy-side failures use the
/// `{"error": ...}` shape: 400 for a bad query string, 500 otherwise.
pub(super) async fn proxy_news(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<NewsProxyQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::warn!(
                request_id = %req_id.0,
                error = %rejection,
                "rejected news query string"
            );
            return proxy_error(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };

    let Some(api_key) = state.newsapi_key.as_deref() else {
        tracing::error!(request_id = %req_id.0, "NEWSAPI_KEY is not configured");
        return proxy_error(StatusCode::INTERNAL_SERVER_ERROR, "Server missing NEWSAPI_KEY");
    };

    match forward(&state, &query, api_key).await {
        Ok((status, body)) => {
            tracing::info!(
                request_id = %req_id.0,
                status = status.as_u16(),
                search = query.q.is_some(),
                "proxied news request"
            );
            (
                status,
                [
                    (header::CONTENT_TYPE, "application/json"),
                    (header::CACHE_CONTROL, CACHE_CONTROL),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "news proxy request failed");
            proxy_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

async fn forward(
    state: &AppState,
    query: &NewsProxyQuery,
    api_key: &str,
) -> anyhow::Result<(StatusCode, String)> {
    let url = build_upstream_url(&state.upstream_base_url, query, api_key)?;

    // Errors carry the request URL, which holds the key.
    let response = state
        .http
        .get(url)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;
    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = response
        .text()
        .await
        .map_err(reqwest::Error::without_url)?;

    Ok((status, body))
}
