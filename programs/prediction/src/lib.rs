#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod prediction {
    use super::*;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        ctx: Context<Initialize>,
        operator_authorities: Vec<Pubkey>,
        token_mint: Pubkey,
        treasury: Pubkey,
        price_feed_id: [u8; 32],
        max_price_update_age_secs: u64,
        interval_seconds: u64,
        buffer_seconds: u64,
        min_bet_amount: u64,
        treasury_fee_bps: u16,
    ) -> Result<()> {
        initialize::handler(
            ctx,
            operator_authorities,
            token_mint,
            treasury,
            price_feed_id,
            max_price_update_age_secs,
            interval_seconds,
            buffer_seconds,
            min_bet_amount,
            treasury_fee_bps,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_admin: Option<Pubkey>,
        new_operator_authorities: Option<Vec<Pubkey>>,
        new_treasury: Option<Pubkey>,
        new_price_feed_id: Option<[u8; 32]>,
        new_max_price_update_age_secs: Option<u64>,
        new_interval_seconds: Option<u64>,
        new_buffer_seconds: Option<u64>,
        new_min_bet_amount: Option<u64>,
        new_treasury_fee_bps: Option<u16>,
    ) -> Result<()> {
        update_config::handler(
            ctx,
            new_admin,
            new_operator_authorities,
            new_treasury,
            new_price_feed_id,
            new_max_price_update_age_secs,
            new_interval_seconds,
            new_buffer_seconds,
            new_min_bet_amount,
            new_treasury_fee_bps,
        )
    }

    pub fn pause_program(ctx: Context<PauseProgram>) -> Result<()> {
        pause_program::handler(ctx)
    }

    pub fn unpause_program(ctx: Context<UnpauseProgram>) -> Result<()> {
        unpause_program::handler(ctx)
    }

    pub fn start_round(ctx: Context<StartRound>) -> Result<()> {
        start_round::handler(ctx)
    }

    pub fn lock_round(ctx: Context<LockRound>) -> Result<()> {
        lock_round::handler(ctx)
    }

    pub fn end_round(ctx: Context<EndRound>) -> Result<()> {
        end_round::handler(ctx)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, amount: u64, position: Position) -> Result<()> {
        place_bet::handler(ctx, amount, position)
    }

    pub fn claim<'info>(ctx: Context<'_, '_, 'info, 'info, Claim<'info>>) -> Result<()> {
        claim::handler(ctx)
    }
}
