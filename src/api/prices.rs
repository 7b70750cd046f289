use hashbrown::HashMap;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ApiError;
use crate::structs::PriceFeed;

const API_COINGECKO_ENDPOINT: &str = "https://api.coingecko.com/api/v3";

/* Tickers the tracker meets in the wild, mapped to CoinGecko ids. Anything
else falls back to its lowercase ticker, which matches for many listings. */
fn coingecko_id(symbol: &str) -> String {
    match symbol {
        "ETH" => String::from("ethereum"),
        "WETH" => String::from("weth"),
        "MATIC" => String::from("matic-network"),
        "ARB" => String::from("arbitrum"),
        "USDC" => String::from("usd-coin"),
        "USDT" => String::from("tether"),
        "DAI" => String::from("dai"),
        "WBTC" => String::from("wrapped-bitcoin"),
        other => other.to_lowercase(),
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UsdQuote {
    pub usd: Option<f64>,
}

/* Keyed back by the ticker the caller asked with, not the CoinGecko id.
Tickers the API had no usable quote for are collected into one error. */
fn build_price_feed(
    assets: &[String],
    ids: &[String],
    quotes: &HashMap<String, UsdQuote>,
) -> Result<PriceFeed, ApiError> {
    let mut price_feed: PriceFeed = HashMap::new();
    let mut missing: Vec<String> = Vec::new();

    for (asset, id) in assets.iter().zip(ids.iter()) {
        let quote = quotes.get(id).and_then(|quote| quote.usd);
        match quote.and_then(Decimal::from_f64) {
            Some(price) => {
                price_feed.insert(asset.clone(), price);
            }
            None => missing.push(asset.clone()),
        }
    }

    if !missing.is_empty() {
        return Err(ApiError::CouldNotFindPrice { assets: missing });
    }
    return Ok(price_feed);
}

/* Spot USD quotes for every asset in `assets`, in one API round trip. */
#[tokio::main]
pub async fn fetch_price_feed(assets: &[String]) -> Result<PriceFeed, ApiError> {
    let ids: Vec<String> = assets.iter().map(|asset| coingecko_id(asset)).collect();
    let url = format!("{API_COINGECKO_ENDPOINT}/simple/price");

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .query(&[
            ("ids", ids.join(",")),
            ("vs_currencies", String::from("usd")),
        ])
        .send()
        .await
        .map_err(|e| ApiError::ApiCallError(e.to_string()))?;

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::ApiCallError(e.to_string()))?;

    let quotes: HashMap<String, UsdQuote> =
        serde_json::from_str(&text).map_err(|e| ApiError::DeserializationError(e.to_string()))?;

    debug!("fetched {} spot quotes", quotes.len());
    return build_price_feed(assets, &ids, &quotes);
}
