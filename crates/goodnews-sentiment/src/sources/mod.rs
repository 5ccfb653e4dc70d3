//! Upstream transports: a direct call to the news provider or a call
//! through the backend proxy.

mod newsapi;

pub use newsapi::NewsApiClient;

use crate::types::NewsSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Straight to the news provider with the client-held key.
    Direct,
    /// Through the backend proxy, which holds the key server-side.
    Proxy,
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transport::Direct => write!(f, "direct"),
            Transport::Proxy => write!(f, "proxy"),
        }
    }
}

/// Pick the transport for one call.
///
/// Direct only when running in a trusted local environment with a client
/// key configured and no proxy override; proxy otherwise.
#[must_use]
pub fn select_transport(settings: &NewsSettings) -> Transport {
    let has_client_key = settings
        .client_api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());

    if settings.environment.is_trusted_local() && has_client_key && !settings.always_use_proxy {
        Transport::Direct
    } else {
        Transport::Proxy
    }
}
