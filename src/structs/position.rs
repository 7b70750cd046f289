use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Action;
use crate::errors::PortfolioError;

/* Running ledger for one asset inside one wallet.

Quantity and cost basis move in lockstep: a deposit adds the transaction
amount and its usd value, a withdrawal removes the same fraction from both,
so the average cost per remaining unit never changes. */
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub asset: String,
    pub quantity: Decimal,
    pub cost_basis_usd: Decimal,
}

impl Position {
    pub fn new(asset: String) -> Self {
        return Position {
            asset,
            quantity: Decimal::ZERO,
            cost_basis_usd: Decimal::ZERO,
        };
    }

    /* Applies a single transaction to the running totals. The overdraft
    check runs before anything is written, so a rejected update leaves the
    position exactly as it was. */
    pub fn update(
        &mut self,
        action: Action,
        amount: Decimal,
        usd_value: Decimal,
    ) -> Result<(), PortfolioError> {
        match action {
            Action::Deposit => {
                self.quantity += amount;
                self.cost_basis_usd += usd_value;
            }
            Action::Withdraw => {
                // A zero-quantity position rejects every withdrawal, ahead
                // of the fraction below.
                if self.quantity.is_zero() || amount > self.quantity {
                    return Err(PortfolioError::Overdraft {
                        asset: self.asset.clone(),
                        requested: amount,
                        available: self.quantity,
                    });
                }
                let fraction = amount / self.quantity;
                self.quantity -= amount;
                self.cost_basis_usd -= self.cost_basis_usd * fraction;
            }
            // No liability ledger yet: borrowed funds never enter quantity
            // or cost basis.
            Action::Borrow => {}
            Action::Repay => {}
        }
        return Ok(());
    }

    pub fn market_value(&self, price: Decimal) -> Decimal {
        return self.quantity * price;
    }
}
