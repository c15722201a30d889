use crate::{constants::*, error::PredictionError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

#[derive(Accounts)]
pub struct LockRound<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &round.epoch.to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,

    pub price_update: Account<'info, PriceUpdateV2>,

    pub system_program: Program<'info, System>,
}

impl<'info> LockRound<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            PredictionError::ProgramPaused
        );

        require!(
            self.config.operator_authorities.contains(&self.signer.key()),
            PredictionError::UnauthorizedOperator
        );

        require!(
            self.round.lock_price.is_none(),
            PredictionError::RoundAlreadyLocked
        );

        let now = Clock::get()?.unix_timestamp;
        require!(
            now >= self.round.lock_timestamp,
            PredictionError::RoundNotLockable
        );

        // the snapshot must land within the buffer window so a late keeper
        // cannot lock at an arbitrary price
        let buffer =
            i64::try_from(self.config.buffer_seconds).map_err(|_| PredictionError::Overflow)?;
        require!(
            now <= self.round.lock_timestamp + buffer,
            PredictionError::LockWindowExpired
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<LockRound>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let config = &ctx.accounts.config;
    let price = read_oracle_price(
        &ctx.accounts.price_update,
        &config.price_feed_id,
        config.max_price_update_age_secs,
    )?;

    let round = &mut ctx.accounts.round;

    // set fields
    round.lock_price = Some(price);

    // emit event
    emit!(RoundLocked {
        epoch: round.epoch,
        price,
    });

    Ok(())
}
