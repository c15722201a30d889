use crate::{constants::*, error::PredictionError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

#[derive(Accounts)]
pub struct EndRound<'info> {
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

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), round.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: Treasury pubkey from config
    #[account(address = config.treasury @ PredictionError::Unauthorized)]
    pub treasury: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = treasury,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint @ PredictionError::InvalidMint)]
    pub mint: Account<'info, Mint>,

    pub price_update: Account<'info, PriceUpdateV2>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> EndRound<'info> {
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
            self.round.lock_price.is_some(),
            PredictionError::RoundNotLocked
        );

        require!(
            self.round.close_price.is_none(),
            PredictionError::RoundAlreadyEnded
        );

        let now = Clock::get()?.unix_timestamp;
        require!(
            now >= self.round.close_timestamp,
            PredictionError::RoundNotEnded
        );

        let buffer =
            i64::try_from(self.config.buffer_seconds).map_err(|_| PredictionError::Overflow)?;
        require!(
            now <= self.round.close_timestamp + buffer,
            PredictionError::EndWindowExpired
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<EndRound>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let config = &ctx.accounts.config;
    let close_price = read_oracle_price(
        &ctx.accounts.price_update,
        &config.price_feed_id,
        config.max_price_update_age_secs,
    )?;

    let round = &mut ctx.accounts.round;
    let lock_price = round.lock_price.ok_or(PredictionError::RoundNotLocked)?;

    // winners take the pool minus the treasury fee; on a flat round the
    // house keeps everything
    let (reward_base_cal_amount, treasury_amount) = if close_price > lock_price {
        let fee = fee_of(round.total_amount, config.treasury_fee_bps)?;
        (round.bull_amount, fee)
    } else if close_price < lock_price {
        let fee = fee_of(round.total_amount, config.treasury_fee_bps)?;
        (round.bear_amount, fee)
    } else {
        (0, round.total_amount)
    };
    let reward_amount = round
        .total_amount
        .checked_sub(treasury_amount)
        .ok_or(PredictionError::Underflow)?;

    // set round fields
    round.close_price = Some(close_price);
    round.reward_base_cal_amount = reward_base_cal_amount;
    round.reward_amount = reward_amount;
    round.oracle_called = true;

    // transfer fee to treasury
    if treasury_amount > 0 {
        let transfer_accounts = Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.treasury_token_account.to_account_info(),
            authority: round.to_account_info(),
        };
        let epoch = round.epoch;
        let round_bump = round.bump;
        let seeds = &[ROUND_SEED.as_bytes(), &epoch.to_le_bytes(), &[round_bump]];
        let signer = &[&seeds[..]];
        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
            signer,
        );
        transfer(transfer_ctx, treasury_amount)?;
    }

    // emit event
    emit!(RoundEnded {
        epoch: ctx.accounts.round.epoch,
        price: close_price,
        reward_base_cal_amount,
        reward_amount,
        treasury_amount,
    });

    Ok(())
}

fn fee_of(total_amount: u64, fee_bps: u16) -> Result<u64> {
    total_amount
        .checked_mul(fee_bps as u64)
        .and_then(|x| x.checked_div(HUNDRED_PERCENT_BPS as u64))
        .ok_or(PredictionError::Overflow.into())
}
