use std::fmt;

use rust_decimal::Decimal;

/* Failures raised by the accounting engine. Each one is checked before the
position state it guards is touched; the wallet log keeps its row either
way. */
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum PortfolioError {
    Overdraft {
        asset: String,
        requested: Decimal,
        available: Decimal,
    },
    DuplicateWallet(String),
    UnknownWallet(String),
}

impl fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PortfolioError::Overdraft {
                asset,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Cannot withdraw {requested} {asset}: only {available} held"
                )
            }
            PortfolioError::DuplicateWallet(address) => {
                write!(f, "Wallet {address} is already registered in the portfolio")
            }
            PortfolioError::UnknownWallet(address) => {
                write!(f, "Wallet {address} is not registered in the portfolio")
            }
        }
    }
}
