//! Domain error types.
//!
//! Every error here is a locally-recoverable input-shape error: the caller
//! is expected to report the message and carry on. Nothing in this crate
//! retries or returns partial results alongside an error.

/// Errors raised at the string boundary when resolving reference data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no stock is listed for symbol {input:?}")]
    UnknownSymbol { input: String },

    #[error("{input:?} is not a recognised transaction type (expected BUY or SELL)")]
    UnknownTransactionType { input: String },
}

/// Errors raised by the calculation engine.
///
/// Limited to mathematically undefined operations; input validation is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("divide by zero: {reason}")]
    DivideByZero { reason: String },

    #[error("the all-share index cannot be calculated: no trades have been recorded")]
    EmptyLedger,

    #[error("the all-share index is outside the representable decimal range")]
    IndexOverflow,
}

/// Top-level error type for callers embedding the crate behind one `Result`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GbceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Calc(#[from] CalcError),
}
