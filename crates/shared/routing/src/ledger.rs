use std::collections::HashMap;

use bestex_core::{ExchangeBalance, ExchangeId};

/// Working copy of exchange balances for a single routing call.
///
/// Built from the caller's snapshot on entry so the caller's records are
/// never mutated and two calls never share balance state.
#[derive(Debug, Clone)]
pub(crate) struct BalanceLedger {
    balances: Vec<ExchangeBalance>,
    index: HashMap<ExchangeId, usize>,
}

impl BalanceLedger {
    /// Copy `balances` into a new ledger.
    ///
    /// Ids are expected to be unique (see `validate`); if they are not,
    /// lookups resolve to the first record with that id.
    pub(crate) fn new(balances: &[ExchangeBalance]) -> Self {
        let mut index = HashMap::with_capacity(balances.len());
        for (slot, balance) in balances.iter().enumerate() {
            index.entry(balance.id).or_insert(slot);
        }
        Self {
            balances: balances.to_vec(),
            index,
        }
    }

    pub(crate) fn get_mut(&mut self, id: ExchangeId) -> Option<&mut ExchangeBalance> {
        let slot = *self.index.get(&id)?;
        self.balances.get_mut(slot)
    }

    /// Final balances, in the order they were supplied
    pub(crate) fn into_balances(self) -> Vec<ExchangeBalance> {
        self.balances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestex_core::Side;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lookup_by_id() {
        let input = vec![
            ExchangeBalance::new(7, dec!(100), dec!(1)),
            ExchangeBalance::new(3, dec!(200), dec!(2)),
        ];
        let mut ledger = BalanceLedger::new(&input);

        assert_eq!(ledger.get_mut(3).map(|b| b.money_balance), Some(dec!(200)));
        assert!(ledger.get_mut(1).is_none());
        assert_eq!(ledger.into_balances(), input);
    }

    #[test]
    fn test_mutation_does_not_touch_caller() {
        let input = vec![ExchangeBalance::new(1, dec!(8750), dec!(10))];
        let mut ledger = BalanceLedger::new(&input);

        if let Some(balance) = ledger.get_mut(1) {
            assert!(balance.apply_fill(Side::Buy, dec!(7), dec!(3000)));
        }

        assert_eq!(input[0].coin_balance, dec!(10));
        assert_eq!(ledger.get_mut(1).map(|b| b.coin_balance), Some(dec!(3)));
        assert_eq!(ledger.into_balances()[0].money_balance, dec!(29750));
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let input = vec![
            ExchangeBalance::new(1, dec!(1), dec!(1)),
            ExchangeBalance::new(1, dec!(2), dec!(2)),
        ];
        let mut ledger = BalanceLedger::new(&input);
        assert_eq!(ledger.get_mut(1).map(|b| b.money_balance), Some(dec!(1)));
    }
}
