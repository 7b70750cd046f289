use hashbrown::HashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Chain, PriceFeed, Transaction, Wallet};
use crate::errors::PortfolioError;

pub type ExposureMap = HashMap<String, Decimal>;

/* Current market value attributed per chain, per protocol and per asset.

Chain and asset buckets are balance-based. Protocol buckets are re-derived
from the raw transaction logs as amount times current price, so an asset
touched by several transactions counts once per touch: the figure reads as
flow into each protocol, not as a current balance. */
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ExposureReport {
    pub chains: ExposureMap,
    pub protocols: ExposureMap,
    pub assets: ExposureMap,
}

/* Root owner of every tracked wallet, keyed by address. */
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub wallets: HashMap<String, Wallet>,
}

impl Portfolio {
    pub fn new() -> Self {
        return Portfolio {
            wallets: HashMap::new(),
        };
    }

    pub fn add_wallet(&mut self, address: String, chain: Chain) -> Result<(), PortfolioError> {
        if self.wallets.contains_key(&address) {
            return Err(PortfolioError::DuplicateWallet(address));
        }
        self.wallets
            .insert(address.clone(), Wallet::new(address, chain));
        return Ok(());
    }

    pub fn route_transaction(
        &mut self,
        address: &str,
        tx: Transaction,
    ) -> Result<(), PortfolioError> {
        match self.wallets.get_mut(address) {
            Some(wallet) => wallet.record_transaction(tx),
            None => Err(PortfolioError::UnknownWallet(address.to_string())),
        }
    }

    pub fn total_value(&self, price_feed: &PriceFeed) -> Decimal {
        return self
            .wallets
            .values()
            .fold(Decimal::ZERO, |total, wallet| {
                total + wallet.total_value(price_feed)
            });
    }

    /* One pass over every wallet. Buckets appear on first touch, so a key
    absent from the report was never seen, rather than seen at zero. */
    pub fn analytics(&self, price_feed: &PriceFeed) -> ExposureReport {
        let mut chains: ExposureMap = HashMap::new();
        let mut protocols: ExposureMap = HashMap::new();
        let mut assets: ExposureMap = HashMap::new();

        for wallet in self.wallets.values() {
            let wallet_value = wallet.total_value(price_feed);
            *chains
                .entry(wallet.chain.name().to_string())
                .or_insert(Decimal::ZERO) += wallet_value;

            for position in wallet.positions.values() {
                let price = price_feed
                    .get(&position.asset)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                *assets
                    .entry(position.asset.clone())
                    .or_insert(Decimal::ZERO) += position.market_value(price);
            }

            for tx in &wallet.transactions {
                let price = price_feed.get(&tx.asset).copied().unwrap_or(Decimal::ZERO);
                *protocols
                    .entry(tx.protocol.clone())
                    .or_insert(Decimal::ZERO) += tx.amount * price;
            }
        }

        return ExposureReport {
            chains,
            protocols,
            assets,
        };
    }
}
