use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{ExchangeId, Price, Quantity};

/// Funds an exchange holds: quote currency (`money_balance`) and
/// base asset (`coin_balance`).
///
/// The side argument of every method is the side of the *requester*.
/// When the requester buys, the exchange sells coins and earns money;
/// when the requester sells, the exchange spends money and receives coins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeBalance {
    pub id: ExchangeId,
    pub money_balance: Decimal,
    pub coin_balance: Decimal,
}

impl ExchangeBalance {
    pub fn new(id: ExchangeId, money_balance: Decimal, coin_balance: Decimal) -> Self {
        Self {
            id,
            money_balance,
            coin_balance,
        }
    }

    /// Maximum amount of coin this exchange can trade at `price`.
    ///
    /// Buy: bounded by coin holdings only.
    /// Sell: money converted to coin at `price`. A non-positive price
    /// has no defined capacity and yields zero.
    pub fn available_amount(&self, side: Side, price: Price) -> Quantity {
        match side {
            Side::Buy => self.coin_balance,
            Side::Sell => {
                if price <= Decimal::ZERO {
                    return Decimal::ZERO;
                }
                self.money_balance
                    .checked_div(price)
                    .unwrap_or(Decimal::ZERO)
            }
        }
    }

    /// Book `amount` coins executed at `price` against this exchange.
    ///
    /// Returns `false` and leaves the balance untouched when the fill's
    /// value or either resulting balance does not fit in a `Decimal`.
    pub fn apply_fill(&mut self, side: Side, amount: Quantity, price: Price) -> bool {
        let Some(value) = amount.checked_mul(price) else {
            return false;
        };
        let updated = match side {
            Side::Buy => self
                .coin_balance
                .checked_sub(amount)
                .zip(self.money_balance.checked_add(value)),
            Side::Sell => self
                .coin_balance
                .checked_add(amount)
                .zip(self.money_balance.checked_sub(value)),
        };
        match updated {
            Some((coin_balance, money_balance)) => {
                self.coin_balance = coin_balance;
                self.money_balance = money_balance;
                true
            }
            None => false,
        }
    }

    /// Whether the exchange can still take part on this side
    pub fn has_remaining(&self, side: Side) -> bool {
        match side {
            Side::Buy => self.coin_balance > Decimal::ZERO,
            Side::Sell => self.money_balance > Decimal::ZERO,
        }
    }
}
