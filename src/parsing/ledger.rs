use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{LedgerError, PortfolioError};
use crate::structs::{Action, Chain, Portfolio, Transaction};

/* One ledger row: a transaction plus the wallet it belongs to.
Expected header:
wallet,timestamp,chain,protocol,action,asset,amount,usd_value */
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerRecord {
    pub wallet: String,
    pub timestamp: DateTime<Utc>,
    pub chain: Chain,
    pub protocol: String,
    pub action: Action,
    pub asset: String,
    pub amount: Decimal,
    pub usd_value: Decimal,
}

impl LedgerRecord {
    pub fn into_transaction(self) -> (String, Transaction) {
        let LedgerRecord {
            wallet,
            timestamp,
            chain,
            protocol,
            action,
            asset,
            amount,
            usd_value,
        } = self;
        let tx = Transaction {
            timestamp,
            chain,
            protocol,
            action,
            asset,
            amount,
            usd_value,
        };
        return (wallet, tx);
    }
}

pub fn load_ledger<P: AsRef<Path>>(path: P) -> Result<Vec<LedgerRecord>, LedgerError> {
    let mut file = File::open(path).map_err(|e| LedgerError::ReadError(e.to_string()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| LedgerError::ReadError(e.to_string()))?;

    return parse_ledger(&contents);
}

pub fn parse_ledger(contents: &str) -> Result<Vec<LedgerRecord>, LedgerError> {
    let mut rdr = ReaderBuilder::new().from_reader(contents.as_bytes());
    let mut records = Vec::new();
    for row in rdr.deserialize::<LedgerRecord>() {
        let record = row.map_err(|e| LedgerError::ParseError(e.to_string()))?;
        records.push(record);
    }
    return Ok(records);
}

/* Replays a ledger into the portfolio. The first row seen for an address
registers the wallet on that row's chain; later rows only route. Engine
rejections propagate unchanged. */
pub fn replay_ledger(
    portfolio: &mut Portfolio,
    records: Vec<LedgerRecord>,
) -> Result<(), PortfolioError> {
    let count = records.len();
    for record in records {
        let (wallet, tx) = record.into_transaction();
        if !portfolio.wallets.contains_key(&wallet) {
            portfolio.add_wallet(wallet.clone(), tx.chain)?;
        }
        portfolio.route_transaction(&wallet, tx)?;
    }
    info!("replayed {count} ledger rows");
    return Ok(());
}
