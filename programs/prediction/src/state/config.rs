use crate::constants::*;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Config {
    // --- Authorities ---
    pub admin: Pubkey, // The administrator of the program.
    #[max_len(MAX_OPERATOR_AUTHORITIES)]
    pub operator_authorities: Vec<Pubkey>, // Keepers allowed to drive the round lifecycle.

    // --- Token & Treasury ---
    pub token_mint: Pubkey, // The token used for betting.
    pub treasury: Pubkey,   // The address where fees are sent.

    // --- Oracle ---
    pub price_feed_id: [u8; 32], // Pyth feed the rounds are settled against.
    pub max_price_update_age_secs: u64, // Staleness bound for accepted price updates.

    // --- Round Timing ---
    pub interval_seconds: u64, // Length of the betting window; rounds run two intervals.
    pub buffer_seconds: u64,   // Grace window for lock/end oracle calls after their timestamp.

    // --- Betting Rules ---
    pub min_bet_amount: u64,  // The minimum bet amount.
    pub treasury_fee_bps: u16, // Fee taken from the total pool at round end.

    // --- Global State ---
    pub status: ProgramStatus, // Overall program status (Active / Paused).
    pub current_epoch: u64,    // Epoch of the most recently started round.

    // --- Metadata ---
    pub version: u8, // Bumped on every config update.
    pub bump: u8,    // A bump seed for PDA.
}
