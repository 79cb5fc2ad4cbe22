//! Trade records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use super::catalog::StockSymbol;
use super::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Buy,
    Sell,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Buy => f.write_str("BUY"),
            TransactionType::Sell => f.write_str("SELL"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(TransactionType::Buy),
            "SELL" => Ok(TransactionType::Sell),
            _ => Err(CatalogError::UnknownTransactionType {
                input: s.to_string(),
            }),
        }
    }
}

/// One observation of a transaction. Constructed once, never mutated.
///
/// `quantity` is expected to be positive with scale ≤ 2 and `price`
/// non-negative in pence; both are validated by the caller recording the
/// trade, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    pub transaction_type: TransactionType,
    pub symbol: StockSymbol,
    pub timestamp: DateTime<Utc>,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl Trade {
    pub fn new(
        transaction_type: TransactionType,
        symbol: StockSymbol,
        timestamp: DateTime<Utc>,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Trade {
            transaction_type,
            symbol,
            timestamp,
            quantity,
            price,
        }
    }

    /// A trade stamped with the current wall-clock time.
    pub fn executed_now(
        transaction_type: TransactionType,
        symbol: StockSymbol,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Trade::new(transaction_type, symbol, Utc::now(), quantity, price)
    }
}
