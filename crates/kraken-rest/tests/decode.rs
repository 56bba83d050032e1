//! Decoding of complete response bodies, as the client receives them

mod common;

use common::*;
use kraken_rest::RestError;
use kraken_types::pairs::{XETCZEUR, XETHXXBT, XXBTZEUR};
use kraken_types::{
    decode_depth_response, decode_ohlc_response, decode_response, AssetInfo, AssetPairInfo,
    ErrorCategory, ResponseError, ServerTime, Side, TickerInfo, TradeBook,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

#[test]
fn test_server_time() {
    let time: ServerTime = decode_response(TIME_RESPONSE.as_bytes()).unwrap();
    assert!(time.unixtime >= 1493752708);
    assert!(!time.rfc1123.is_empty());
}

#[test]
fn test_assets() {
    let assets: HashMap<String, AssetInfo> = decode_response(ASSETS_RESPONSE.as_bytes()).unwrap();
    for (code, alt_name) in [("XXBT", "XBT"), ("ZUSD", "USD"), ("ZEUR", "EUR")] {
        assert_eq!(assets[code].alt_name, alt_name, "{code} is missing");
    }
}

#[test]
fn test_asset_pairs() {
    let pairs: HashMap<String, AssetPairInfo> =
        decode_response(ASSET_PAIRS_RESPONSE.as_bytes()).unwrap();

    let xbt = &pairs[XXBTZEUR];
    assert_eq!((xbt.base.as_str(), xbt.quote.as_str()), ("XXBT", "ZEUR"));
    assert!(xbt.is_maker_taker());
    assert_eq!(xbt.fees_maker.as_ref().unwrap()[3].percent, "0.1");

    let etc = &pairs[XETCZEUR];
    assert_eq!((etc.base.as_str(), etc.quote.as_str()), ("XETC", "ZEUR"));
    assert!(!etc.is_maker_taker());
    assert!(etc.leverage_buy.is_empty());
}

#[test]
fn test_ticker_for_two_pairs() {
    let tickers: HashMap<String, TickerInfo> =
        decode_response(TICKER_RESPONSE.as_bytes()).unwrap();
    assert_eq!(tickers.len(), 2);
    assert!(tickers.contains_key(XETHXXBT));
    assert_eq!(tickers[XXBTZEUR].volume[1], "3532.32412918");
    assert!(tickers[XETHXXBT].spread().unwrap() > Decimal::ZERO);
}

#[test]
fn test_ohlc_series() {
    let series = decode_ohlc_response(OHLC_RESPONSE.as_bytes(), XXBTZEUR).unwrap();
    assert_eq!(series.pair, XXBTZEUR);
    assert_eq!(series.last, 1493786460);
    assert_eq!(series.entries.len(), 3);

    // Server order is preserved
    let times: Vec<i64> = series.entries.iter().map(|e| e.timestamp).collect();
    assert_eq!(times, vec![1493786400, 1493786460, 1493786520]);

    assert_eq!(series.committed().len(), 2);
    assert_eq!(series.current().unwrap().trade_count, 0);
    assert_eq!(series.entries[1].volume, "3.93936569");
}

#[test]
fn test_ohlc_other_pair_requested() {
    let err = decode_ohlc_response(OHLC_RESPONSE.as_bytes(), XETHXXBT).unwrap_err();
    let err = RestError::from(err);
    assert!(matches!(err, RestError::Decode(_)));
}

#[test]
fn test_order_book() {
    let books = decode_depth_response(DEPTH_RESPONSE.as_bytes()).unwrap();
    let book = &books[XXBTZEUR];
    assert_eq!(book.pair, XXBTZEUR);
    assert_eq!(book.asks.len(), 2);
    assert_eq!(book.bids[1].volume, "4.250");
    assert!(book.asks[0].timestamp >= 1493829401);
}

#[test]
fn test_trades() {
    let book: TradeBook = decode_response(TRADES_RESPONSE.as_bytes()).unwrap();
    assert_eq!(book.pair, XXBTZEUR);
    assert_eq!(book.last, "1493926890306801911");
    assert_eq!(book.trades.len(), 4);
    assert_eq!(book.trades[0].volume, "8.96796823");
    assert_eq!(book.trades[3].price, "1425.00000");
    assert_eq!(book.trades[3].volume, "0.10000000");
    assert!(book.trades.iter().all(|t| t.side() == Some(Side::Sell)));

    // Timestamps keep 100 µs resolution and server order
    assert_eq!(book.trades[1].timestamp_nanos, 1_493_926_357_039_100_000);
    assert!(book
        .trades
        .windows(2)
        .all(|w| w[0].timestamp_nanos <= w[1].timestamp_nanos));
}

#[test]
fn test_api_error_ignores_result() {
    let err = decode_response::<TradeBook>(UNKNOWN_PAIR_RESPONSE.as_bytes()).unwrap_err();
    let api = match &err {
        ResponseError::Api(api) => api,
        other => panic!("expected API error, got {other:?}"),
    };
    assert_eq!(api.message, "EQuery:Unknown asset pair");
    assert_eq!(api.category, ErrorCategory::Query);

    let err = RestError::from(err);
    assert_eq!(err.to_string(), "Kraken API error: EQuery:Unknown asset pair");
}

#[test]
fn test_api_error_for_every_endpoint_shape() {
    let body = UNKNOWN_PAIR_RESPONSE.as_bytes();
    assert!(decode_ohlc_response(body, XXBTZEUR).unwrap_err().api_error().is_some());
    assert!(decode_depth_response(body).unwrap_err().api_error().is_some());
    assert!(decode_response::<HashMap<String, TickerInfo>>(body)
        .unwrap_err()
        .api_error()
        .is_some());
}
