use std::cmp::Ordering;

use bestex_core::{ExchangeId, Order, OrderBook, Price, Side};
use log::warn;
use priority_queue::PriorityQueue;

/// Best not-yet-consumed order of one order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FrontierEntry {
    pub(crate) order: Order,
    /// Position of the book in the caller's slice
    pub(crate) book_index: usize,
    /// Position of `order` within the book's side
    pub(crate) cursor: usize,
    pub(crate) exchange_id: ExchangeId,
}

/// Ranking key: the greater rank is the better order for `side`.
///
/// Equal prices are broken by lower exchange id, then lower book index,
/// so the merge order never depends on heap internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rank {
    side: Side,
    price: Price,
    exchange_id: ExchangeId,
    book_index: usize,
}

impl Rank {
    fn of(side: Side, entry: &FrontierEntry) -> Self {
        Self {
            side,
            price: entry.order.price,
            exchange_id: entry.exchange_id,
            book_index: entry.book_index,
        }
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_price = match self.side {
            Side::Buy => other.price.cmp(&self.price),
            Side::Sell => self.price.cmp(&other.price),
        };
        by_price
            .then_with(|| other.exchange_id.cmp(&self.exchange_id))
            .then_with(|| other.book_index.cmp(&self.book_index))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Price-ordered set of the current best order of each active book.
///
/// Holds at most one entry per order book: an entry is only admitted for a
/// book after that book's previous entry has been popped.
#[derive(Debug)]
pub(crate) struct Frontier {
    side: Side,
    queue: PriorityQueue<FrontierEntry, Rank>,
}

impl Frontier {
    /// Seed a frontier with the best order of every book
    pub(crate) fn build(side: Side, order_books: &[OrderBook]) -> Self {
        let mut frontier = Self {
            side,
            queue: PriorityQueue::with_capacity(order_books.len()),
        };
        for (book_index, book) in order_books.iter().enumerate() {
            frontier.admit(book, book_index, 0);
        }
        frontier
    }

    /// Admit the first routable order of `book` at or after `cursor`.
    ///
    /// Orders with a non-positive price or amount are skipped.
    /// Returns `false` when the book has nothing left to offer.
    pub(crate) fn admit(&mut self, book: &OrderBook, book_index: usize, cursor: usize) -> bool {
        debug_assert!(
            !self.queue.iter().any(|(e, _)| e.book_index == book_index),
            "book {} already has a frontier entry",
            book_index
        );

        let orders = book.orders(self.side);
        for (offset, order) in orders.iter().enumerate().skip(cursor) {
            if !order.is_well_formed() {
                warn!(
                    "Skipping malformed order on exchange {}: price={}, amount={}",
                    book.exchange_id, order.price, order.amount
                );
                continue;
            }
            let entry = FrontierEntry {
                order: *order,
                book_index,
                cursor: offset,
                exchange_id: book.exchange_id,
            };
            let rank = Rank::of(self.side, &entry);
            self.queue.push(entry, rank);
            return true;
        }
        false
    }

    /// Globally best entry, without removing it
    pub(crate) fn peek(&self) -> Option<&FrontierEntry> {
        self.queue.peek().map(|(entry, _)| entry)
    }

    /// Remove and return the globally best entry
    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop().map(|(entry, _)| entry)
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn book(id: ExchangeId, asks: &[(i64, i64)], bids: &[(i64, i64)]) -> OrderBook {
        let to_orders = |levels: &[(i64, i64)]| {
            levels
                .iter()
                .map(|&(p, a)| Order::new(p.into(), a.into()))
                .collect()
        };
        OrderBook::new(id, to_orders(asks), to_orders(bids))
    }

    #[test]
    fn test_build_buy_is_min_heap() {
        let books = vec![
            book(1, &[(3000, 7), (3300, 4)], &[]),
            book(2, &[(3100, 3)], &[]),
            book(3, &[(2950, 2)], &[]),
        ];
        let mut frontier = Frontier::build(Side::Buy, &books);

        assert_eq!(frontier.len(), 3);
        let prices: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|e| e.order.price)
            .collect();
        assert_eq!(prices, vec![dec!(2950), dec!(3000), dec!(3100)]);
    }

    #[test]
    fn test_build_sell_is_max_heap() {
        let books = vec![
            book(1, &[], &[(2950, 1)]),
            book(2, &[], &[(3050, 4)]),
            book(3, &[], &[(2750, 5)]),
        ];
        let frontier = Frontier::build(Side::Sell, &books);

        let top = frontier.peek().unwrap();
        assert_eq!(top.order.price, dec!(3050));
        assert_eq!(top.exchange_id, 2);
        assert_eq!(top.book_index, 1);
        assert_eq!(top.cursor, 0);
    }

    #[test]
    fn test_empty_sides_contribute_nothing() {
        let books = vec![book(1, &[], &[(2950, 1)]), book(2, &[], &[])];
        assert_eq!(Frontier::build(Side::Buy, &books).len(), 0);
        assert_eq!(Frontier::build(Side::Sell, &books).len(), 1);
    }

    #[test]
    fn test_equal_price_prefers_lower_exchange_id() {
        // Book order deliberately reversed
        let books = vec![
            book(9, &[(3000, 1)], &[]),
            book(4, &[(3000, 1)], &[]),
            book(6, &[(3000, 1)], &[]),
        ];
        let mut frontier = Frontier::build(Side::Buy, &books);

        let ids: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|e| e.exchange_id)
            .collect();
        assert_eq!(ids, vec![4, 6, 9]);
    }

    #[test]
    fn test_equal_price_and_id_prefers_lower_book_index() {
        let books = vec![book(1, &[], &[(2900, 1)]), book(1, &[], &[(2900, 2)])];
        let frontier = Frontier::build(Side::Sell, &books);
        assert_eq!(frontier.peek().map(|e| e.book_index), Some(0));
    }

    #[test]
    fn test_admit_skips_malformed_orders() {
        let books = vec![book(1, &[(0, 5), (3000, 0), (3100, 2)], &[])];
        let frontier = Frontier::build(Side::Buy, &books);

        let top = frontier.peek().unwrap();
        assert_eq!(top.order.price, dec!(3100));
        assert_eq!(top.cursor, 2);
    }

    #[test]
    fn test_admit_past_end() {
        let books = vec![book(1, &[(3000, 1)], &[])];
        let mut frontier = Frontier::build(Side::Buy, &[]);
        assert!(!frontier.admit(&books[0], 0, 1));
        assert_eq!(frontier.len(), 0);
        assert!(frontier.admit(&books[0], 0, 0));
        assert_eq!(frontier.len(), 1);
    }
}
