use crate::{constants::*, error::PredictionError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Config::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn validate(
        &self,
        operator_authorities: &[Pubkey],
        interval_seconds: u64,
        buffer_seconds: u64,
        min_bet_amount: u64,
        treasury_fee_bps: u16,
    ) -> Result<()> {
        require!(
            !operator_authorities.is_empty()
                && operator_authorities.len() <= MAX_OPERATOR_AUTHORITIES,
            PredictionError::InvalidOperatorAuthorities
        );

        require!(
            buffer_seconds < interval_seconds,
            PredictionError::InvalidRoundTiming
        );

        require!(min_bet_amount > 0, PredictionError::InvalidMinBetAmount);

        require!(
            treasury_fee_bps <= MAX_TREASURY_FEE_BPS,
            PredictionError::InvalidTreasuryFee
        );

        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
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
    // validate
    ctx.accounts.validate(
        &operator_authorities,
        interval_seconds,
        buffer_seconds,
        min_bet_amount,
        treasury_fee_bps,
    )?;

    let config = &mut ctx.accounts.config;

    // set fields
    config.admin = ctx.accounts.signer.key();
    config.operator_authorities = operator_authorities;
    config.token_mint = token_mint;
    config.treasury = treasury;
    config.price_feed_id = price_feed_id;
    config.max_price_update_age_secs = max_price_update_age_secs;
    config.interval_seconds = interval_seconds;
    config.buffer_seconds = buffer_seconds;
    config.min_bet_amount = min_bet_amount;
    config.treasury_fee_bps = treasury_fee_bps;
    config.status = ProgramStatus::Active;
    config.current_epoch = 0;
    config.version = 0;
    config.bump = ctx.bumps.config;

    Ok(())
}
