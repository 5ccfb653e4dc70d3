use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header::RETRY_AFTER, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

#[derive(Debug, Clone)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

impl RateLimitWindow {
    /// Count one request against the window starting at `started_at`.
    ///
    /// Returns the time left in the window when the limit is already reached.
    fn try_acquire(
        &mut self,
        now: Instant,
        max_requests: usize,
        window: Duration,
    ) -> Result<(), Duration> {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= window {
            self.started_at = now;
            self.count = 0;
        }

        if self.count >= max_requests {
            return Err(window.saturating_sub(now.saturating_duration_since(self.started_at)));
        }

        self.count += 1;
        Ok(())
    }
}

/// Fixed-window limiter shared by every request to the proxied routes.
///
/// Keeps bursts of page loads from burning through the upstream quota.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    state: Arc<Mutex<RateLimitWindow>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(RateLimitWindow {
                started_at: Instant::now(),
                count: 0,
            })),
        }
    }
}

#[derive(Debug, Serialize)]
struct RateLimitedBody {
    error: &'static str,
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware enforcing a fixed request-per-window limit.
///
/// Rejected requests get `429` with a `Retry-After` header in whole seconds.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let mut window = rate_limit.state.lock().await;
    let acquired = window.try_acquire(
        Instant::now(),
        rate_limit.max_requests,
        rate_limit.window,
    );
    drop(window);

    match acquired {
        Ok(()) => next.run(req).await,
        Err(remaining) => {
            let retry_after = remaining.as_secs().max(1);
            tracing::warn!(retry_after, "rate limit exceeded");
            let mut res = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(RateLimitedBody {
                    error: "rate limit exceeded",
                }),
            )
                .into_response();
            res.headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(retry_after));
            res
        }
    }
}
