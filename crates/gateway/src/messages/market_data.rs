//! Market data records as stored on disk

use bestex_core::{ExchangeBalance, ExchangeId, Order, OrderBook};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One order as stored inside an order book record.
///
/// Only price and amount are routed on; the other stored fields
/// (id, time, type, kind) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderFields {
    pub price: Decimal,
    pub amount: Decimal,
}

/// Wrapper the stored layout puts around every order: `{"Order": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderRecord {
    pub order: OrderFields,
}

/// One order book snapshot. Either side may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBookRecord {
    #[serde(default)]
    pub bids: Option<Vec<OrderRecord>>,
    #[serde(default)]
    pub asks: Option<Vec<OrderRecord>>,
}

impl OrderBookRecord {
    /// Convert to a domain order book owned by `exchange_id`
    pub fn into_order_book(self, exchange_id: ExchangeId) -> OrderBook {
        let convert = |side: Option<Vec<OrderRecord>>| -> Vec<Order> {
            side.unwrap_or_default()
                .into_iter()
                .map(|r| Order::new(r.order.price, r.order.amount))
                .collect()
        };
        OrderBook::new(exchange_id, convert(self.asks), convert(self.bids))
    }
}

/// One exchange balance: `{"Id":1,"MoneyBalance":..,"CoinBalance":..}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceRecord {
    pub id: ExchangeId,
    #[serde(default)]
    pub money_balance: Decimal,
    #[serde(default)]
    pub coin_balance: Decimal,
}

impl From<BalanceRecord> for ExchangeBalance {
    fn from(record: BalanceRecord) -> Self {
        ExchangeBalance::new(record.id, record.money_balance, record.coin_balance)
    }
}
