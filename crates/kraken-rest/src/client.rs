//! Main REST client implementation

use crate::endpoints::MarketEndpoints;
use crate::error::{RestError, RestResult};
use crate::types::OhlcQuery;
use kraken_types::{
    AssetInfo, AssetPairInfo, OhlcSeries, OrderBook, ServerTime, TickerInfo, TradeBook,
};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.kraken.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the API host
pub const ENV_BASE_URL: &str = "KRAKEN_REST_URL";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "KRAKEN_REST_TIMEOUT_SECS";

/// Kraken public REST API client
///
/// Stateless apart from the underlying connection pool: every call is one
/// independent request/response round trip, and the client can be shared
/// across tasks.
///
/// # Example
///
/// ```no_run
/// use kraken_rest::KrakenRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = KrakenRestClient::new();
///     let tickers = client.get_ticker(&["XXBTZEUR"]).await?;
///     println!("BTC/EUR: {:?}", tickers["XXBTZEUR"].last_price());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KrakenRestClient {
    http_client: Client,
    base_url: String,
}

impl KrakenRestClient {
    /// Create a new client against the production API with default settings
    pub fn new() -> Self {
        Self::with_http_client(Client::new(), ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self::with_http_client(http_client, config))
    }

    /// Create a client around an existing `reqwest::Client`
    ///
    /// Timeouts and user agent come from `http_client`; only
    /// `config.base_url` is used.
    pub fn with_http_client(http_client: Client, config: ClientConfig) -> Self {
        info!(base_url = %config.base_url, "Created Kraken REST client");

        Self {
            http_client,
            base_url: config.base_url,
        }
    }

    /// The API host requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, &self.base_url)
    }

    /// Get server time
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        self.market().get_server_time().await
    }

    /// Get info for every asset, keyed by asset code
    pub async fn get_assets(&self) -> RestResult<HashMap<String, AssetInfo>> {
        self.market().get_assets().await
    }

    /// Get every tradable asset pair, keyed by pair code
    pub async fn get_asset_pairs(&self) -> RestResult<HashMap<String, AssetPairInfo>> {
        self.market().get_asset_pairs().await
    }

    /// Get ticker information for one or more pairs
    ///
    /// Fails with [`RestError::InvalidParameter`] for an empty list.
    pub async fn get_ticker<S>(&self, pairs: &[S]) -> RestResult<HashMap<String, TickerInfo>>
    where
        S: AsRef<str>,
    {
        self.market().get_ticker(pairs).await
    }

    /// Get OHLC candles for one pair
    pub async fn get_ohlc(&self, query: &OhlcQuery) -> RestResult<OhlcSeries> {
        self.market().get_ohlc(query).await
    }

    /// Get orderbook depth for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Pair code
    /// * `count` - Maximum number of price levels per side, sent unchanged
    pub async fn get_order_book(
        &self,
        pair: &str,
        count: u32,
    ) -> RestResult<HashMap<String, OrderBook>> {
        self.market().get_order_book(pair, count).await
    }

    /// Get recent trades, optionally only those after a `last` cursor
    pub async fn get_trades(&self, pair: &str, since: Option<&str>) -> RestResult<TradeBook> {
        self.market().get_trades(pair, since).await
    }
}

impl Default for KrakenRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KrakenRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrakenRestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API host; `/0/public/<Endpoint>` is appended
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `KRAKEN_REST_URL` and `KRAKEN_REST_TIMEOUT_SECS`
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> RestResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> RestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.is_empty()) {
            config.base_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                RestError::InvalidParameter(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"))
            })?;
        }

        Ok(config)
    }

    /// Set the API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| concat!("kraken-rest/", env!("CARGO_PKG_VERSION")).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = KrakenRestClient::new();
        assert_eq!(client.base_url(), "https://api.kraken.com");
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_with_config() {
        let client = KrakenRestClient::with_config(ClientConfig::new().with_timeout(5)).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_user_agent() {
        assert!(ClientConfig::default().user_agent().starts_with("kraken-rest/"));
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ClientConfig::from_lookup(|key| match key {
            ENV_BASE_URL => Some("http://localhost:9000".to_string()),
            ENV_TIMEOUT_SECS => Some(" 12 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 12);

        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_config_from_lookup_bad_timeout() {
        let result = ClientConfig::from_lookup(|key| {
            (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(RestError::InvalidParameter(_))));
    }
}
