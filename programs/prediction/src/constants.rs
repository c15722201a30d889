use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const ROUND_SEED: &str = "round";
#[constant]
pub const VAULT_SEED: &str = "vault";
#[constant]
pub const BET_SEED: &str = "bet";

pub const DISCRIMINATOR_SIZE: usize = 8;

pub const MAX_OPERATOR_AUTHORITIES: usize = 10;

/// Fees are expressed in basis points of the round's total pool.
pub const HUNDRED_PERCENT_BPS: u16 = 10_000;
pub const MAX_TREASURY_FEE_BPS: u16 = 1_000; // 10%

/// Oracle prices are normalized to fixed-point with 8 decimals.
pub const PRICE_DECIMALS: i32 = 8;

/// Claim batches are (round, bet, vault) triples in remaining accounts.
pub const CLAIM_ACCOUNTS_PER_BET: usize = 3;
pub const MAX_CLAIM_BETS: usize = 8;

/// Enum for program status flags
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProgramStatus {
    Active,
    Paused,
}
