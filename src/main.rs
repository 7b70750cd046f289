use std::env;

use chrono::Utc;
use dotenv::dotenv;
use rust_decimal_macros::dec;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

pub mod api;
pub mod errors;
pub mod functions;
pub mod parsing;
pub mod structs;


use api::{fetch_pool_reserves, fetch_price_feed, PoolConfig};
use errors::PortfolioError;
use parsing::{load_ledger, replay_ledger};
use structs::{Action, Chain, Portfolio, PriceFeed, Transaction};

/* Hypothetical extra deposit for the projected pool rate, in raw pool units. */
const SIMULATED_DEPOSIT: u128 = 200_000;

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ledger_path = env::args().nth(1);
    let portfolio = match &ledger_path {
        Some(path) => load_portfolio(path),
        None => demo_portfolio().map_err(|e| e.to_string()),
    };
    let portfolio = match portfolio {
        Ok(portfolio) => portfolio,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    info!("tracking {} wallets", portfolio.wallets.len());

    /* A replayed ledger is valued at current market prices; the built-in
    walkthrough keeps its fixed quotes, so its report never moves. */
    let price_feed = match ledger_path {
        Some(_) => current_prices(&portfolio),
        None => demo_quotes(),
    };

    let total_value = portfolio.total_value(&price_feed);
    println!("Total Portfolio Value: ${total_value}");

    let exposure = portfolio.analytics(&price_feed);
    match serde_json::to_string_pretty(&exposure) {
        Ok(json) => {
            println!("Exposure:");
            println!("{json}");
        }
        Err(e) => error!("Could not render the exposure report: {e}"),
    }

    report_pool_rates();
}

fn load_portfolio(path: &str) -> Result<Portfolio, String> {
    let records = load_ledger(path).map_err(|e| e.to_string())?;
    let mut portfolio = Portfolio::new();
    replay_ledger(&mut portfolio, records).map_err(|e| e.to_string())?;
    return Ok(portfolio);
}

/* Seeded walkthrough used when no ledger file is given: two wallets on two
chains, three deposits across three protocols. */
fn demo_portfolio() -> Result<Portfolio, PortfolioError> {
    let mut portfolio = Portfolio::new();
    portfolio.add_wallet("0x123".to_string(), Chain::Ethereum)?;
    portfolio.add_wallet("0x456".to_string(), Chain::Polygon)?;

    portfolio.route_transaction(
        "0x123",
        Transaction {
            timestamp: Utc::now(),
            chain: Chain::Ethereum,
            protocol: "Aave".to_string(),
            action: Action::Deposit,
            asset: "ETH".to_string(),
            amount: dec!(1.5),
            usd_value: dec!(4500),
        },
    )?;
    portfolio.route_transaction(
        "0x456",
        Transaction {
            timestamp: Utc::now(),
            chain: Chain::Polygon,
            protocol: "Quickswap".to_string(),
            action: Action::Deposit,
            asset: "MATIC".to_string(),
            amount: dec!(1000),
            usd_value: dec!(1500),
        },
    )?;
    portfolio.route_transaction(
        "0x123",
        Transaction {
            timestamp: Utc::now(),
            chain: Chain::Ethereum,
            protocol: "Compound".to_string(),
            action: Action::Deposit,
            asset: "USDC".to_string(),
            amount: dec!(2000),
            usd_value: dec!(2000),
        },
    )?;

    return Ok(portfolio);
}

/* Every distinct asset in the portfolio, priced in one API round trip; a
failed fetch falls back to the built-in quotes. */
fn current_prices(portfolio: &Portfolio) -> PriceFeed {
    let mut assets: Vec<String> = portfolio
        .wallets
        .values()
        .flat_map(|wallet| wallet.positions.keys().cloned())
        .collect();
    assets.sort();
    assets.dedup();

    match fetch_price_feed(&assets) {
        Ok(price_feed) => price_feed,
        Err(e) => {
            warn!("Live quotes unavailable ({e}), using built-in quotes");
            return demo_quotes();
        }
    }
}

fn demo_quotes() -> PriceFeed {
    let mut price_feed = PriceFeed::new();
    price_feed.insert("ETH".to_string(), dec!(3000));
    price_feed.insert("MATIC".to_string(), dec!(1.8));
    price_feed.insert("USDC".to_string(), dec!(1));
    return price_feed;
}

fn report_pool_rates() {
    let config = PoolConfig::from_env();
    match fetch_pool_reserves(&config) {
        Ok(reserves) => {
            println!("Current Base APR: {:.2}%", reserves.supply_rate() * 100.0);
            println!(
                "Projected APR after +{SIMULATED_DEPOSIT} USDC: {:.2}%",
                reserves.projected_supply_rate(SIMULATED_DEPOSIT) * 100.0
            );
        }
        Err(e) => warn!("Skipping pool rates, the pool read failed: {e}"),
    }
}
