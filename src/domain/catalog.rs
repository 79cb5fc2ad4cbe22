//! Fixed instrument catalog for the GBCE reference deployment.
//!
//! Five stocks with static attributes. The catalog is compiled in and
//! immutable for the process lifetime; a production system would load this
//! from a database, but the reference data set is closed, so an exhaustive
//! enum and a const table express it exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

use super::error::CatalogError;

/// Ticker symbols of the five listed stocks. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockSymbol {
    Tea,
    Pop,
    Ale,
    Gin,
    Joe,
}

impl StockSymbol {
    pub const ALL: [StockSymbol; 5] = [
        StockSymbol::Tea,
        StockSymbol::Pop,
        StockSymbol::Ale,
        StockSymbol::Gin,
        StockSymbol::Joe,
    ];

    pub const fn ticker(self) -> &'static str {
        match self {
            StockSymbol::Tea => "TEA",
            StockSymbol::Pop => "POP",
            StockSymbol::Ale => "ALE",
            StockSymbol::Gin => "GIN",
            StockSymbol::Joe => "JOE",
        }
    }
}

impl fmt::Display for StockSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for StockSymbol {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TEA" => Ok(StockSymbol::Tea),
            "POP" => Ok(StockSymbol::Pop),
            "ALE" => Ok(StockSymbol::Ale),
            "GIN" => Ok(StockSymbol::Gin),
            "JOE" => Ok(StockSymbol::Joe),
            _ => Err(CatalogError::UnknownSymbol {
                input: s.to_string(),
            }),
        }
    }
}

/// Stock class. Preferred stock carries its fixed dividend rate as a
/// fraction (0.02 = 2%), used in place of the last dividend in the yield
/// formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockKind {
    Common,
    Preferred { fixed_dividend_rate: Decimal },
}

impl fmt::Display for StockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockKind::Common => f.write_str("COMMON"),
            StockKind::Preferred { .. } => f.write_str("PREFERRED"),
        }
    }
}

/// One immutable catalog entry. Monetary fields are in pence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    pub symbol: StockSymbol,
    pub kind: StockKind,
    pub last_dividend: Decimal,
    pub par_value: Decimal,
}

impl Instrument {
    /// The fixed dividend rate, present only for preferred stock.
    pub fn fixed_dividend_rate(&self) -> Option<Decimal> {
        match self.kind {
            StockKind::Common => None,
            StockKind::Preferred {
                fixed_dividend_rate,
            } => Some(fixed_dividend_rate),
        }
    }
}

/// The reference data set: exactly one entry per symbol, in `ALL` order.
pub static CATALOG: [Instrument; 5] = [
    Instrument {
        symbol: StockSymbol::Tea,
        kind: StockKind::Common,
        last_dividend: dec!(0),
        par_value: dec!(100),
    },
    Instrument {
        symbol: StockSymbol::Pop,
        kind: StockKind::Common,
        last_dividend: dec!(8),
        par_value: dec!(100),
    },
    Instrument {
        symbol: StockSymbol::Ale,
        kind: StockKind::Common,
        last_dividend: dec!(23),
        par_value: dec!(60),
    },
    Instrument {
        symbol: StockSymbol::Gin,
        kind: StockKind::Preferred {
            fixed_dividend_rate: dec!(0.02),
        },
        last_dividend: dec!(8),
        par_value: dec!(100),
    },
    Instrument {
        symbol: StockSymbol::Joe,
        kind: StockKind::Common,
        last_dividend: dec!(13),
        par_value: dec!(250),
    },
];

/// Look up the catalog entry for a symbol.
///
/// Total over the closed symbol set: an unknown symbol can only exist as a
/// string, and is rejected by [`StockSymbol::from_str`] before it gets here.
pub fn lookup(symbol: StockSymbol) -> &'static Instrument {
    match symbol {
        StockSymbol::Tea => &CATALOG[0],
        StockSymbol::Pop => &CATALOG[1],
        StockSymbol::Ale => &CATALOG[2],
        StockSymbol::Gin => &CATALOG[3],
        StockSymbol::Joe => &CATALOG[4],
    }
}
