//! gbce — trade ledger and stock calculations for the Global Beverage
//! Corporation Exchange reference data set.
//!
//! The crate records buy/sell trades against a fixed five-stock catalog and
//! derives dividend yield, P/E ratio, volume-weighted stock price over a
//! trailing window, and the GBCE geometric-mean all-share index. All money
//! and ratio arithmetic uses exact [`rust_decimal::Decimal`] values rounded
//! half-up to two decimal places. The one exception is the all-share index
//! nth root, which transits through `f64` because there is no exact-decimal
//! nth root; that approximation is intentional and bounded by the final
//! two-decimal rounding.
//!
//! The interactive front end (menus, prompts, input validation) is a caller
//! concern; this crate is the engine such a front end drives.

pub mod domain;

pub use domain::calc::{
    all_share_index, dividend_yield, price_earnings_ratio, volume_weighted_stock_price,
    volume_weighted_stock_price_now, DEFAULT_VWSP_WINDOW_MINUTES,
};
pub use domain::catalog::{Instrument, StockKind, StockSymbol};
pub use domain::error::{CalcError, CatalogError, GbceError};
pub use domain::ledger::TradeLedger;
pub use domain::trade::{Trade, TransactionType};
