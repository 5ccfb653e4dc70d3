use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Only a local development run counts as a trusted context for
    /// shipping the client-held news API key with outbound requests.
    #[must_use]
    pub fn is_trusted_local(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which sentiment scorer the pipeline runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    /// Weighted word lexicon producing a numeric score.
    #[default]
    Lexicon,
    /// Positive/negative keyword counting producing a label.
    Keyword,
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScorerKind::Lexicon => write!(f, "lexicon"),
            ScorerKind::Keyword => write!(f, "keyword"),
        }
    }
}

impl std::str::FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexicon" => Ok(ScorerKind::Lexicon),
            "keyword" => Ok(ScorerKind::Keyword),
            other => Err(format!(
                "unknown scorer '{other}' (expected 'lexicon' or 'keyword')"
            )),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Server-held credential the proxy injects upstream.
    pub newsapi_key: Option<String>,
    /// Client-held credential enabling direct upstream calls.
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

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "newsapi_key",
                &self.newsapi_key.as_ref().map(|_| "[redacted]"),
            )
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
