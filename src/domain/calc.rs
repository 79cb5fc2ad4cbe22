//! Calculation engine.
//!
//! Pure functions over catalog entries and ledger slices. Every result is
//! an exact decimal rounded half-up (ties away from zero) to two decimal
//! places. The only failure modes are mathematically undefined operations;
//! input validation is the caller's job.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::catalog::{Instrument, StockKind};
use super::error::CalcError;
use super::trade::Trade;

/// Trailing window used by the reference deployment for the
/// volume-weighted stock price.
pub const DEFAULT_VWSP_WINDOW_MINUTES: i64 = 15;

const RESULT_SCALE: u32 = 2;

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RESULT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// P/E ratio: `price / last_dividend`.
pub fn price_earnings_ratio(instrument: &Instrument, price: Decimal) -> Result<Decimal, CalcError> {
    if instrument.last_dividend.is_zero() {
        return Err(CalcError::DivideByZero {
            reason: format!(
                "last dividend for {} is zero, cannot calculate P/E ratio",
                instrument.symbol
            ),
        });
    }
    Ok(round_half_up(price / instrument.last_dividend))
}

/// Dividend yield: `last_dividend / price` for common stock,
/// `fixed_dividend_rate × par_value / price` for preferred.
pub fn dividend_yield(instrument: &Instrument, price: Decimal) -> Result<Decimal, CalcError> {
    if price.is_zero() {
        return Err(CalcError::DivideByZero {
            reason: "price is zero, cannot calculate dividend yield".to_string(),
        });
    }
    let ratio = match instrument.kind {
        StockKind::Common => instrument.last_dividend / price,
        StockKind::Preferred {
            fixed_dividend_rate,
        } => fixed_dividend_rate * instrument.par_value / price,
    };
    Ok(round_half_up(ratio))
}

/// Volume-weighted stock price over the trailing window ending at `as_of`.
///
/// Only trades strictly after `as_of − window_minutes` contribute; a trade
/// timestamped exactly at the cutoff is excluded. Returns exactly zero when
/// no trade qualifies (including an empty slice) — that is a defined
/// result, not an error.
///
/// The reference instant is an explicit parameter so that one call windows
/// every trade against the same instant and tests can inject a fixed time.
pub fn volume_weighted_stock_price(
    trades: &[Trade],
    window_minutes: i64,
    as_of: DateTime<Utc>,
) -> Decimal {
    let cutoff = as_of - Duration::minutes(window_minutes);

    let mut total_quantity = Decimal::ZERO;
    let mut weighted_price_sum = Decimal::ZERO;
    for trade in trades.iter().filter(|trade| trade.timestamp > cutoff) {
        weighted_price_sum += trade.quantity * trade.price;
        total_quantity += trade.quantity;
    }

    if total_quantity.is_zero() {
        Decimal::ZERO
    } else {
        round_half_up(weighted_price_sum / total_quantity)
    }
}

/// [`volume_weighted_stock_price`] windowed against the current wall-clock
/// time, evaluated once per call.
pub fn volume_weighted_stock_price_now(trades: &[Trade], window_minutes: i64) -> Decimal {
    volume_weighted_stock_price(trades, window_minutes, Utc::now())
}

/// GBCE all-share index: the geometric mean of every recorded trade price,
/// i.e. the nth root of their product for n trades.
pub fn all_share_index(trades: &[Trade]) -> Result<Decimal, CalcError> {
    if trades.is_empty() {
        return Err(CalcError::EmptyLedger);
    }

    // Start at 1 so the first price is handled uniformly.
    let mut product = Decimal::ONE;
    for trade in trades {
        product = product
            .checked_mul(trade.price)
            .ok_or(CalcError::IndexOverflow)?;
    }

    nth_root(product, trades.len()).ok_or(CalcError::IndexOverflow)
}

/// Nth root via `f64::powf`.
///
/// There is no exact-decimal nth root, so the product transits through
/// floating point here. The precision loss is intentional and bounded by
/// the final two-decimal rounding; this helper is the only place the crate
/// leaves exact decimals.
fn nth_root(product: Decimal, n: usize) -> Option<Decimal> {
    let root = product.to_f64()?.powf(1.0 / n as f64);
    if !root.is_finite() {
        return None;
    }
    Decimal::from_f64(root).map(round_half_up)
}
