//! Public market data endpoints
//!
//! These endpoints don't require authentication. Each call is a single GET
//! whose body is handed to the decoders in `kraken-types`.

use crate::error::{RestError, RestResult};
use crate::types::{DepthParams, OhlcQuery, TickerParams, TradesParams};
use kraken_types::pairs::join_pairs;
use kraken_types::{
    decode_depth_response, decode_ohlc_response, decode_response, AssetInfo, AssetPairInfo,
    DecodeResult, OhlcSeries, OrderBook, ServerTime, TickerInfo, TradeBook,
};
use reqwest::{Client, Request};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Path prefix shared by all public endpoints
pub const PUBLIC_PATH: &str = "/0/public/";

/// Server time
pub const TIME: &str = "Time";
/// Asset info
pub const ASSETS: &str = "Assets";
/// Tradable asset pairs
pub const ASSET_PAIRS: &str = "AssetPairs";
/// Ticker information
pub const TICKER: &str = "Ticker";
/// OHLC data
pub const OHLC: &str = "OHLC";
/// Order book
pub const DEPTH: &str = "Depth";
/// Recent trades
pub const TRADES: &str = "Trades";

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Get server time
    ///
    /// Useful for approximating the skew between server and client clocks.
    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        debug!("Fetching server time");
        let request = self.request(TIME, None::<&()>)?;
        self.execute(TIME, request, decode_response).await
    }

    /// Get info for every asset, keyed by asset code
    #[instrument(skip(self))]
    pub async fn get_assets(&self) -> RestResult<HashMap<String, AssetInfo>> {
        debug!("Fetching asset info");
        let request = self.request(ASSETS, None::<&()>)?;
        self.execute(ASSETS, request, decode_response).await
    }

    /// Get every tradable asset pair, keyed by pair code
    #[instrument(skip(self))]
    pub async fn get_asset_pairs(&self) -> RestResult<HashMap<String, AssetPairInfo>> {
        debug!("Fetching asset pairs");
        let request = self.request(ASSET_PAIRS, None::<&()>)?;
        self.execute(ASSET_PAIRS, request, decode_response).await
    }

    /// Get ticker information for one or more pairs
    ///
    /// # Arguments
    /// * `pairs` - Pair codes (e.g., `["XETHXXBT", "XXBTZEUR"]`); must not be empty
    #[instrument(skip(self, pairs), fields(pairs = pairs.len()))]
    pub async fn get_ticker<S>(&self, pairs: &[S]) -> RestResult<HashMap<String, TickerInfo>>
    where
        S: AsRef<str>,
    {
        let request = self.ticker_request(pairs)?;
        debug!("Fetching tickers for {} pairs", pairs.len());
        self.execute(TICKER, request, decode_response).await
    }

    /// Get OHLC data
    ///
    /// The final candle is the current, not yet committed frame and is
    /// present regardless of `since`.
    #[instrument(skip(self))]
    pub async fn get_ohlc(&self, query: &OhlcQuery) -> RestResult<OhlcSeries> {
        let request = self.ohlc_request(query)?;
        debug!("Fetching OHLC for {}", query.pair);
        self.execute(OHLC, request, |body| decode_ohlc_response(body, &query.pair))
            .await
    }

    /// Get orderbook depth
    ///
    /// # Arguments
    /// * `pair` - Pair code (e.g., "XXBTZEUR")
    /// * `count` - Maximum number of asks/bids (sent as given)
    #[instrument(skip(self))]
    pub async fn get_order_book(
        &self,
        pair: &str,
        count: u32,
    ) -> RestResult<HashMap<String, OrderBook>> {
        let request = self.depth_request(pair, count)?;
        debug!("Fetching orderbook for {}", pair);
        self.execute(DEPTH, request, decode_depth_response).await
    }

    /// Get recent trades
    ///
    /// # Arguments
    /// * `pair` - Pair code (e.g., "XXBTZEUR")
    /// * `since` - `last` cursor of a previous response (optional)
    #[instrument(skip(self))]
    pub async fn get_trades(&self, pair: &str, since: Option<&str>) -> RestResult<TradeBook> {
        let request = self.trades_request(pair, since)?;
        debug!("Fetching recent trades for {}", pair);
        self.execute(TRADES, request, decode_response).await
    }

    // ------------------------------------------------------------------------
    // Request construction
    // ------------------------------------------------------------------------

    pub(crate) fn ticker_request<S>(&self, pairs: &[S]) -> RestResult<Request>
    where
        S: AsRef<str>,
    {
        if pairs.iter().any(|p| p.as_ref().is_empty()) {
            return Err(RestError::InvalidParameter(
                "pairs cannot contain an empty pair".to_string(),
            ));
        }
        let pair = join_pairs(pairs)
            .ok_or_else(|| RestError::InvalidParameter("pairs cannot be empty".to_string()))?;
        self.request(TICKER, Some(&TickerParams { pair }))
    }

    pub(crate) fn ohlc_request(&self, query: &OhlcQuery) -> RestResult<Request> {
        require_pair(&query.pair)?;
        self.request(OHLC, Some(query))
    }

    pub(crate) fn depth_request(&self, pair: &str, count: u32) -> RestResult<Request> {
        require_pair(pair)?;
        self.request(DEPTH, Some(&DepthParams { pair, count }))
    }

    pub(crate) fn trades_request(&self, pair: &str, since: Option<&str>) -> RestResult<Request> {
        require_pair(pair)?;
        let since = since.filter(|s| !s.is_empty());
        self.request(TRADES, Some(&TradesParams { pair, since }))
    }

    fn request<P>(&self, endpoint: &str, params: Option<&P>) -> RestResult<Request>
    where
        P: Serialize + ?Sized,
    {
        let url = format!(
            "{}{}{}",
            self.base_url.trim_end_matches('/'),
            PUBLIC_PATH,
            endpoint
        );
        let mut builder = self.client.get(url);
        if let Some(params) = params {
            builder = builder.query(params);
        }
        Ok(builder.build()?)
    }

    async fn execute<T, F>(&self, endpoint: &str, request: Request, decode: F) -> RestResult<T>
    where
        F: FnOnce(&[u8]) -> DecodeResult<T>,
    {
        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "Received {} response", endpoint);

        decode(body.as_ref()).map_err(|err| {
            if let Some(api_error) = err.api_error() {
                debug!(category = ?api_error.category, "Kraken rejected {} request", endpoint);
            }
            RestError::from(err)
        })
    }
}

fn require_pair(pair: &str) -> RestResult<()> {
    if pair.is_empty() {
        return Err(RestError::InvalidParameter("pair cannot be empty".to_string()));
    }
    Ok(())
}
