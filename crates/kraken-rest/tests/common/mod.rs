//! Common test fixtures for integration tests
//!
//! Response bodies in the shape returned by Kraken's public REST API

#![allow(dead_code)]

/// Server time response
pub const TIME_RESPONSE: &str = r#"{
    "error": [],
    "result": {"unixtime": 1493752708, "rfc1123": "Tue,  2 May 17 19:18:28 +0000"}
}"#;

/// Asset info response (subset)
pub const ASSETS_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBT": {"aclass": "currency", "altname": "XBT", "decimals": 10, "display_decimals": 5},
        "ZEUR": {"aclass": "currency", "altname": "EUR", "decimals": 4, "display_decimals": 2},
        "ZUSD": {"aclass": "currency", "altname": "USD", "decimals": 4, "display_decimals": 2}
    }
}"#;

/// Asset pairs response: one maker/taker pair, one taker-only pair
pub const ASSET_PAIRS_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBTZEUR": {
            "altname": "XBTEUR", "aclass_base": "currency", "base": "XXBT",
            "aclass_quote": "currency", "quote": "ZEUR", "lot": "unit",
            "pair_decimals": 3, "lot_decimals": 8, "lot_multiplier": 1,
            "leverage_buy": [2, 3, 4, 5], "leverage_sell": [2, 3, 4, 5],
            "fees": [[0, 0.26], [50000, 0.24], [100000, 0.22], [250000, 0.2]],
            "fees_maker": [[0, 0.16], [50000, 0.14], [100000, 0.12], [250000, 0.1]],
            "fee_volume_currency": "ZUSD", "margin_call": 80, "margin_stop": 40
        },
        "XETCZEUR": {
            "altname": "ETCEUR", "aclass_base": "currency", "base": "XETC",
            "aclass_quote": "currency", "quote": "ZEUR", "lot": "unit",
            "pair_decimals": 5, "lot_decimals": 8, "lot_multiplier": 1,
            "leverage_buy": [], "leverage_sell": [],
            "fees": [[0, 0.26], [50000, 0.24]],
            "fee_volume_currency": "ZUSD", "margin_call": 80, "margin_stop": 40
        }
    }
}"#;

/// Ticker response for two pairs
pub const TICKER_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XETHXXBT": {
            "a": ["0.055000", "12", "12.000"], "b": ["0.054800", "3", "3.000"],
            "c": ["0.054900", "1.20000000"], "v": ["1123.5", "2567.25"],
            "p": ["0.054712", "0.054510"], "t": [812, 1703],
            "l": ["0.054000", "0.053800"], "h": ["0.055500", "0.055500"], "o": "0.054300"
        },
        "XXBTZEUR": {
            "a": ["1430.00000", "2", "2.000"], "b": ["1428.10000", "1", "1.000"],
            "c": ["1429.99000", "0.04140000"], "v": ["1763.23281036", "3532.32412918"],
            "p": ["1426.65837", "1418.83394"], "t": [3591, 7451],
            "l": ["1410.00000", "1400.00100"], "h": ["1434.00000", "1434.00000"], "o": "1420.25000"
        }
    }
}"#;

/// OHLC response: two committed candles and the open one
pub const OHLC_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBTZEUR": [
            [1493786400, "1326.000", "1327.100", "1325.900", "1326.860", "1326.500", "1.25000000", 4],
            [1493786460, "1326.860", "1326.880", "1324.533", "1326.880", "1326.643", "3.93936569", 9],
            [1493786520, "1326.880", "1326.880", "1326.880", "1326.880", "0.000", "0.00000000", 0]
        ],
        "last": 1493786460
    }
}"#;

/// Depth response
pub const DEPTH_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBTZEUR": {
            "asks": [["1430.00000", "2.000", 1493829470], ["1431.50000", "0.500", 1493829412]],
            "bids": [["1428.10000", "1.000", 1493829479], ["1427.00000", "4.250", 1493829401]]
        }
    }
}"#;

/// Trades response
pub const TRADES_RESPONSE: &str = r#"{"error":[],"result":{"XXBTZEUR":[["1425.26000","8.96796823",1493926357.0243,"s","m",""],
    ["1425.01000","0.01000000",1493926357.0391,"s","m",""],["1425.00000","0.10000000",1493926357.0579,"s","m",
    ""],["1425.00000","0.10000000",1493926357.0624,"s","m",""]], "last":"1493926890306801911"}}"#;

/// Error response for an unknown pair
pub const UNKNOWN_PAIR_RESPONSE: &str = r#"{"error":["EQuery:Unknown asset pair"],"result":{}}"#;
