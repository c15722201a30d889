use crate::{constants::*, error::PredictionError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct StartRound<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Round::INIT_SPACE,
        seeds = [ROUND_SEED.as_bytes(), &(config.current_epoch + 1).to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        init,
        payer = signer,
        token::mint = mint,
        token::authority = round,
        seeds = [VAULT_SEED.as_bytes(), round.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = config.token_mint @ PredictionError::InvalidMint)]
    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> StartRound<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            PredictionError::ProgramPaused
        );

        require!(
            self.config.operator_authorities.contains(&self.signer.key()),
            PredictionError::UnauthorizedOperator
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<StartRound>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let config = &mut ctx.accounts.config;
    let round = &mut ctx.accounts.round;

    let now = Clock::get()?.unix_timestamp;
    let interval = i64::try_from(config.interval_seconds).map_err(|_| PredictionError::Overflow)?;

    // set round fields: betting is open for one interval, the round closes
    // after a second one
    round.epoch = config
        .current_epoch
        .checked_add(1)
        .ok_or(PredictionError::Overflow)?;
    round.start_timestamp = now;
    round.lock_timestamp = now.checked_add(interval).ok_or(PredictionError::Overflow)?;
    round.close_timestamp = round
        .lock_timestamp
        .checked_add(interval)
        .ok_or(PredictionError::Overflow)?;
    round.lock_price = None;
    round.close_price = None;
    round.total_amount = 0;
    round.bull_amount = 0;
    round.bear_amount = 0;
    round.reward_base_cal_amount = 0;
    round.reward_amount = 0;
    round.oracle_called = false;
    round.vault = ctx.accounts.vault.key();
    round.vault_bump = ctx.bumps.vault;
    round.total_bets = 0;
    round.created_at = now;
    round.bump = ctx.bumps.round;

    // set config fields
    config.current_epoch = round.epoch;

    // emit event
    emit!(RoundStarted {
        epoch: round.epoch,
        start_timestamp: round.start_timestamp,
        lock_timestamp: round.lock_timestamp,
        close_timestamp: round.close_timestamp,
    });

    Ok(())
}
