use hashbrown::HashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Chain, Position, Transaction};
use crate::errors::PortfolioError;

/* Spot prices in USD keyed by asset symbol. Built fresh by the caller for
every valuation; assets missing from the feed value at zero. */
pub type PriceFeed = HashMap<String, Decimal>;

/* One address on one chain: its per-asset positions plus the append-only
log of every transaction it processed, in processing order. */
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    pub chain: Chain,
    pub positions: HashMap<String, Position>,
    pub transactions: Vec<Transaction>,
}

impl Wallet {
    pub fn new(address: String, chain: Chain) -> Self {
        return Wallet {
            address,
            chain,
            positions: HashMap::new(),
            transactions: Vec::new(),
        };
    }

    /* The transaction lands in the log first and stays there even when the
    position rejects it; position state is only touched by a valid update.
    The position itself is created on first sight of its asset. */
    pub fn record_transaction(&mut self, tx: Transaction) -> Result<(), PortfolioError> {
        let action = tx.action;
        let amount = tx.amount;
        let usd_value = tx.usd_value;
        let asset = tx.asset.clone();
        self.transactions.push(tx);

        let position = self
            .positions
            .entry(asset.clone())
            .or_insert_with(|| Position::new(asset));
        return position.update(action, amount, usd_value);
    }

    pub fn total_value(&self, price_feed: &PriceFeed) -> Decimal {
        return self
            .positions
            .values()
            .fold(Decimal::ZERO, |total, position| {
                let price = price_feed
                    .get(&position.asset)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                total + position.market_value(price)
            });
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::structs::Action;

    fn deposit(asset: &str, amount: Decimal, usd_value: Decimal) -> Transaction {
        return Transaction {
            timestamp: Utc::now(),
            chain: Chain::Ethereum,
            protocol: "Aave".to_string(),
            action: Action::Deposit,
            asset: asset.to_string(),
            amount,
            usd_value,
        };
    }

    #[test]
    fn positions_are_created_on_first_sight() {
        let mut wallet = Wallet::new("0xabc".to_string(), Chain::Ethereum);
        assert!(wallet.positions.is_empty());

        wallet.record_transaction(deposit("ETH", dec!(2), dec!(6000))).unwrap();

        assert_eq!(wallet.positions.len(), 1);
        assert_eq!(wallet.positions["ETH"].quantity, dec!(2));
        assert_eq!(wallet.transactions.len(), 1);
    }

    #[test]
    fn rejected_transactions_stay_in_the_log() {
        let mut wallet = Wallet::new("0xabc".to_string(), Chain::Ethereum);
        wallet.record_transaction(deposit("ETH", dec!(1), dec!(3000))).unwrap();

        let overdraft = Transaction {
            action: Action::Withdraw,
            amount: dec!(5),
            usd_value: dec!(15000),
            ..deposit("ETH", dec!(5), dec!(15000))
        };
        assert!(wallet.record_transaction(overdraft).is_err());

        assert_eq!(wallet.transactions.len(), 2);
        assert_eq!(wallet.positions["ETH"].quantity, dec!(1));
        assert_eq!(wallet.positions["ETH"].cost_basis_usd, dec!(3000));
    }

    #[test]
    fn total_value_defaults_missing_prices_to_zero() {
        let mut wallet = Wallet::new("0xabc".to_string(), Chain::Ethereum);
        wallet.record_transaction(deposit("ETH", dec!(1.5), dec!(4500))).unwrap();
        wallet.record_transaction(deposit("SHIB", dec!(1000000), dec!(20))).unwrap();

        let mut price_feed = PriceFeed::new();
        price_feed.insert("ETH".to_string(), dec!(3000));

        assert_eq!(wallet.total_value(&price_feed), dec!(4500));
    }
}
