use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Chain;

/* What a transaction did on the source protocol.

Only deposit and withdraw move owned positions. Borrow and repay are kept in
the wallet log but stay out of the asset ledger: borrowed funds are a
liability, not a holding. */
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Deposit,
    Withdraw,
    Borrow,
    Repay,
}

/* One recorded event: on `chain`, through `protocol`, `action` `amount` of
`asset`, worth `usd_value` at the time. usd_value comes from the caller and
is never recomputed from a price feed. */
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub timestamp: DateTime<Utc>,
    pub chain: Chain,
    pub protocol: String,
    pub action: Action,
    pub asset: String,
    pub amount: Decimal,
    pub usd_value: Decimal,
}
