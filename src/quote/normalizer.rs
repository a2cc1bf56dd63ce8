//! Session filter and bar normalization

use super::{ChartPayload, QuoteBar};
use crate::session::{LocalTimeConverter, SessionWindow};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept on prices
pub const PRICE_DECIMALS: u32 = 2;

/// Map the payload's parallel arrays to in-session bars.
///
/// Out-of-session and `null` timestamps are dropped; the rest keep provider
/// order. Missing or short price arrays yield `None` prices and zero volume at
/// that index.
pub fn normalize<C: LocalTimeConverter + ?Sized>(
    payload: &ChartPayload,
    converter: &C,
    session: &SessionWindow,
) -> Vec<QuoteBar> {
    let quote = payload.quote();

    payload
        .timestamps()
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let time = converter.to_local(ts?)?;
            if !session.contains(time.time()) {
                return None;
            }

            let price = |value: Option<f64>| value.and_then(price_from_f64).map(round_price);

            Some(QuoteBar {
                time,
                open: price(quote.and_then(|q| q.open_at(i))),
                high: price(quote.and_then(|q| q.high_at(i))),
                low: price(quote.and_then(|q| q.low_at(i))),
                close: price(quote.and_then(|q| q.close_at(i))),
                volume: volume_from_f64(quote.and_then(|q| q.volume_at(i))),
            })
        })
        .collect()
}

/// Decimal for a provider float, keeping its binary value.
///
/// `189.425` is stored as `189.42500000000001136...` and `0.015` as
/// `0.01499999...`, so rounding sees the value the provider actually sent.
/// Non-finite or out-of-range input has no decimal value.
pub fn price_from_f64(raw: f64) -> Option<Decimal> {
    if !raw.is_finite() {
        return None;
    }
    let price = Decimal::from_f64_retain(raw);
    if price.is_none() {
        tracing::debug!(raw, "Provider price outside decimal range, treating as null");
    }
    price
}

/// Round to [`PRICE_DECIMALS`], ties away from zero
pub fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole, non-negative volume; absent or invalid reads as 0
pub fn volume_from_f64(raw: Option<f64>) -> u64 {
    match raw {
        Some(v) if v.is_finite() && v > 0.0 => v.trunc() as u64,
        _ => 0,
    }
}
