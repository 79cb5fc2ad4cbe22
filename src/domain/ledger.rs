//! Append-only trade ledger.
//!
//! Held in memory for the lifetime of the process; a production system
//! would persist this and likely index by symbol, but at this scale a full
//! scan per read is fine.

use super::catalog::StockSymbol;
use super::trade::Trade;

/// Owned, append-only collection of trades in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TradeLedger {
    trades: Vec<Trade>,
}

impl TradeLedger {
    pub fn new() -> Self {
        TradeLedger { trades: Vec::new() }
    }

    /// Append a trade. Never fails; validation happens before a trade is
    /// constructed, and recorded trades are never deleted or modified.
    pub fn record(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// Every recorded trade, in insertion order.
    pub fn all_trades(&self) -> &[Trade] {
        &self.trades
    }

    /// The order-preserving subsequence of trades for one symbol. Empty if
    /// the symbol has never traded.
    pub fn trades_for(&self, symbol: StockSymbol) -> Vec<Trade> {
        self.trades
            .iter()
            .filter(|trade| trade.symbol == symbol)
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::TransactionType;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn sample_trade(symbol: StockSymbol, price: rust_decimal::Decimal) -> Trade {
        Trade::new(TransactionType::Buy, symbol, Utc::now(), dec!(1), price)
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = TradeLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.all_trades().is_empty());
    }

    #[test]
    fn record_preserves_insertion_order() {
        let mut ledger = TradeLedger::new();
        ledger.record(sample_trade(StockSymbol::Ale, dec!(120)));
        ledger.record(sample_trade(StockSymbol::Tea, dec!(30)));
        ledger.record(sample_trade(StockSymbol::Ale, dec!(140)));

        let all = ledger.all_trades();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].price, dec!(120));
        assert_eq!(all[1].price, dec!(30));
        assert_eq!(all[2].price, dec!(140));
    }

    #[test]
    fn trades_for_filters_by_symbol_in_order() {
        let mut ledger = TradeLedger::new();
        ledger.record(sample_trade(StockSymbol::Ale, dec!(120)));
        ledger.record(sample_trade(StockSymbol::Tea, dec!(30)));
        ledger.record(sample_trade(StockSymbol::Ale, dec!(140)));

        let ale = ledger.trades_for(StockSymbol::Ale);
        assert_eq!(ale.len(), 2);
        assert_eq!(ale[0].price, dec!(120));
        assert_eq!(ale[1].price, dec!(140));
    }

    #[test]
    fn trades_for_unseen_symbol_is_empty() {
        let mut ledger = TradeLedger::new();
        ledger.record(sample_trade(StockSymbol::Ale, dec!(120)));
        assert!(ledger.trades_for(StockSymbol::Joe).is_empty());
    }
}
