use crate::{constants::*, error::PredictionError};
use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

/// Rescales a Pyth price with exponent `expo` to fixed-point with
/// [`PRICE_DECIMALS`] decimals. Negative prices are rejected.
pub fn normalize_price_to_u64(price: i64, expo: i32) -> Result<u64> {
    let scale = PRICE_DECIMALS
        .checked_add(expo)
        .ok_or(PredictionError::Overflow)?;
    let v = if scale >= 0 {
        let mul = 10i128
            .checked_pow(scale as u32)
            .ok_or(PredictionError::Overflow)?;
        (price as i128)
            .checked_mul(mul)
            .ok_or(PredictionError::Overflow)?
    } else {
        let div = 10i128
            .checked_pow(scale.unsigned_abs())
            .ok_or(PredictionError::Overflow)?;
        (price as i128)
            .checked_div(div)
            .ok_or(PredictionError::Underflow)?
    };
    if v < 0 {
        return Err(PredictionError::InvalidOraclePrice.into());
    }
    u64::try_from(v).map_err(|_| PredictionError::Overflow.into())
}

/// Reads the configured feed from a Pyth price update account, enforcing the
/// staleness bound, and returns the price normalized to 8 decimals.
pub fn read_oracle_price(
    price_update: &Account<PriceUpdateV2>,
    feed_id: &[u8; 32],
    max_age_secs: u64,
) -> Result<u64> {
    let price = price_update
        .get_price_no_older_than(&Clock::get()?, max_age_secs, feed_id)
        .map_err(|_| PredictionError::PythError)?;
    let normalized = normalize_price_to_u64(price.price, price.exponent)?;
    require!(normalized > 0, PredictionError::InvalidOraclePrice);
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identity_at_eight_decimals() {
        // Pyth crypto feeds typically publish with expo -8.
        assert_eq!(normalize_price_to_u64(12_000_000_000, -8).unwrap(), 12_000_000_000);
    }

    #[test]
    fn test_normalize_scales_up() {
        // expo -5: 3 decimal places short of 8.
        assert_eq!(normalize_price_to_u64(120_000, -5).unwrap(), 120_000_000);
    }

    #[test]
    fn test_normalize_scales_down() {
        // expo -10: 2 decimal places past 8, truncated.
        assert_eq!(normalize_price_to_u64(12_345, -10).unwrap(), 123);
    }

    #[test]
    fn test_normalize_rejects_negative_price() {
        assert!(normalize_price_to_u64(-1, -8).is_err());
    }
}
