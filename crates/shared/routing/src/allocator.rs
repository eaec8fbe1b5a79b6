use bestex_core::{ExchangeBalance, ExecutionFill, Order, OrderBook, Quantity, Side};
use bestex_ports::{ExecutionRouter, RoutingResult};
use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::frontier::Frontier;
use crate::ledger::BalanceLedger;
use crate::validator::validate;

/// Result of one routing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    pub side: Side,
    pub requested_amount: Quantity,
    /// Fills in the order they were chosen (best price first)
    pub fills: Vec<ExecutionFill>,
    /// Exchange balances after every fill, in input order
    pub balances: Vec<ExchangeBalance>,
}

impl ExecutionPlan {
    pub fn executed_amount(&self) -> Quantity {
        self.fills.iter().map(|f| f.amount).sum()
    }

    /// Amount the available liquidity could not cover
    pub fn unfilled_amount(&self) -> Quantity {
        (self.requested_amount - self.executed_amount()).max(Decimal::ZERO)
    }

    pub fn is_complete(&self) -> bool {
        self.executed_amount() >= self.requested_amount
    }
}

/// Greedy best-execution router.
///
/// Performs a k-way merge over the order books by price. Each step fills
/// against the globally best order as far as the order, its exchange's
/// balance and the outstanding amount allow, then books the fill on a
/// working copy of that exchange's balance.
#[derive(Debug, Default, Clone, Copy)]
pub struct PriceMergeRouter;

impl PriceMergeRouter {
    pub fn new() -> Self {
        Self
    }

    /// Route `amount` across `order_books` and return the full plan,
    /// including the balances each exchange would be left with.
    pub fn plan(
        &self,
        side: Side,
        amount: Quantity,
        order_books: &[OrderBook],
        balances: &[ExchangeBalance],
    ) -> RoutingResult<ExecutionPlan> {
        validate(amount, order_books, balances)?;

        let mut ledger = BalanceLedger::new(balances);
        let mut frontier = Frontier::build(side, order_books);
        let mut fills = Vec::new();
        let mut remaining = amount;

        debug!(
            "Routing {} {} across {} order books ({} in frontier)",
            side,
            amount,
            order_books.len(),
            frontier.len()
        );

        while remaining > Decimal::ZERO {
            let Some(entry) = frontier.peek().copied() else {
                break;
            };

            let Some(balance) = ledger.get_mut(entry.exchange_id) else {
                warn!(
                    "Order book {} has no balance for exchange {}, dropping it",
                    entry.book_index, entry.exchange_id
                );
                frontier.pop();
                continue;
            };

            let execution_amount = execution_amount(side, remaining, balance, &entry.order);
            if execution_amount <= Decimal::ZERO {
                debug!(
                    "Exchange {} cannot trade at {}, dropping book {}",
                    entry.exchange_id, entry.order.price, entry.book_index
                );
                frontier.pop();
                continue;
            }

            if !balance.apply_fill(side, execution_amount, entry.order.price) {
                warn!(
                    "Fill of {} at {} overflows exchange {} balance, dropping book {}",
                    execution_amount, entry.order.price, entry.exchange_id, entry.book_index
                );
                frontier.pop();
                continue;
            }

            debug!(
                "Fill: exchange={}, amount={}, price={}",
                entry.exchange_id, execution_amount, entry.order.price
            );
            fills.push(ExecutionFill::new(
                side,
                execution_amount,
                entry.order.price,
                entry.exchange_id,
            ));
            remaining -= execution_amount;
            frontier.pop();

            if remaining <= Decimal::ZERO {
                break;
            }

            if balance.has_remaining(side) {
                frontier.admit(
                    &order_books[entry.book_index],
                    entry.book_index,
                    entry.cursor + 1,
                );
            }
        }

        let plan = ExecutionPlan {
            side,
            requested_amount: amount,
            fills,
            balances: ledger.into_balances(),
        };

        if plan.is_complete() {
            info!(
                "Routed {} {} in {} fills",
                side,
                amount,
                plan.fills.len()
            );
        } else {
            info!(
                "Routed {} {} of {} requested in {} fills, liquidity exhausted",
                side,
                plan.executed_amount(),
                amount,
                plan.fills.len()
            );
        }

        Ok(plan)
    }
}

impl ExecutionRouter for PriceMergeRouter {
    fn best_execution(
        &self,
        side: Side,
        amount: Quantity,
        order_books: &[OrderBook],
        balances: &[ExchangeBalance],
    ) -> RoutingResult<Vec<ExecutionFill>> {
        self.plan(side, amount, order_books, balances)
            .map(|plan| plan.fills)
    }

    fn name(&self) -> &str {
        "Price-Priority Merge"
    }
}

/// Smallest of: what the exchange can afford, what the order offers,
/// and what the request still needs
fn execution_amount(
    side: Side,
    remaining: Quantity,
    balance: &ExchangeBalance,
    order: &Order,
) -> Quantity {
    balance
        .available_amount(side, order.price)
        .min(order.amount)
        .min(remaining)
}
