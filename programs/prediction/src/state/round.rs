use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Round {
    // --- Identity ---
    pub epoch: u64, // Sequential round identifier (incremental from config.current_epoch).

    // --- Timing ---
    pub start_timestamp: i64, // When the round opened for betting.
    pub lock_timestamp: i64,  // Betting cutoff; the lock price is snapshotted here.
    pub close_timestamp: i64, // Round end; the close price is snapshotted here.

    // --- Oracle Snapshots (fixed-point, 8 decimals) ---
    pub lock_price: Option<u64>,  // Price at lock. None until the oracle is called.
    pub close_price: Option<u64>, // Price at close. None until the oracle is called.

    // --- Pools ---
    pub total_amount: u64, // Sum of all stakes in this round.
    pub bull_amount: u64,  // Sum of Bull stakes.
    pub bear_amount: u64,  // Sum of Bear stakes.

    // --- Settlement ---
    pub reward_base_cal_amount: u64, // Winning pool snapshot; denominator for claims.
    pub reward_amount: u64,          // Total pool minus treasury fee; zero on a flat round.
    pub oracle_called: bool,         // Set once the close price has been recorded.

    // --- Vault ---
    pub vault: Pubkey, // Token account holding this round's stakes.
    pub vault_bump: u8,

    // --- Metadata ---
    pub total_bets: u64, // Number of bets placed in this round.
    pub created_at: i64, // When the round account was created.
    pub bump: u8,        // A bump seed for PDA.
}

impl Round {
    /// Seconds until betting closes. Saturates at zero once the lock
    /// timestamp has passed.
    pub fn betting_seconds_left(&self, now: i64) -> u64 {
        self.lock_timestamp.saturating_sub(now).max(0) as u64
    }

    /// Seconds until the round closes. Saturates at zero once the close
    /// timestamp has passed.
    pub fn round_seconds_left(&self, now: i64) -> u64 {
        self.close_timestamp.saturating_sub(now).max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> Round {
        Round {
            epoch: 1,
            start_timestamp: 1_000,
            lock_timestamp: 1_300,
            close_timestamp: 1_600,
            lock_price: None,
            close_price: None,
            total_amount: 0,
            bull_amount: 0,
            bear_amount: 0,
            reward_base_cal_amount: 0,
            reward_amount: 0,
            oracle_called: false,
            vault: Pubkey::default(),
            vault_bump: 0,
            total_bets: 0,
            created_at: 1_000,
            bump: 0,
        }
    }

    #[test]
    fn test_timer_fields_mid_round() {
        let r = round();
        assert_eq!(r.betting_seconds_left(1_100), 200);
        assert_eq!(r.round_seconds_left(1_100), 500);
    }

    #[test]
    fn test_timer_fields_saturate_at_zero() {
        let r = round();
        assert_eq!(r.betting_seconds_left(1_300), 0);
        assert_eq!(r.betting_seconds_left(2_000), 0);
        assert_eq!(r.round_seconds_left(1_600), 0);
        assert_eq!(r.round_seconds_left(i64::MAX), 0);
    }
}
