use crate::{constants::*, error::PredictionError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct PlaceBet<'info> {
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

    // one bet per bettor per round: re-initialization of the same PDA fails
    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Bet::INIT_SPACE,
        seeds = [BET_SEED.as_bytes(), round.key().as_ref(), signer.key().as_ref()],
        bump
    )]
    pub bet: Account<'info, Bet>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), round.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = signer
    )]
    pub token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint @ PredictionError::InvalidMint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn validate(&self, amount: u64) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            PredictionError::ProgramPaused
        );

        let now = Clock::get()?.unix_timestamp;
        require!(
            now >= self.round.start_timestamp && now < self.round.lock_timestamp,
            PredictionError::BettingClosed
        );

        require!(
            self.round.lock_price.is_none(),
            PredictionError::BettingClosed
        );

        require!(
            amount >= self.config.min_bet_amount,
            PredictionError::BetBelowMinimum
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<PlaceBet>, amount: u64, position: Position) -> Result<()> {
    // validate
    ctx.accounts.validate(amount)?;

    // transfer from signer to vault
    let transfer_accounts = Transfer {
        from: ctx.accounts.token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, amount)?;

    let round = &mut ctx.accounts.round;
    let bet = &mut ctx.accounts.bet;

    // set bet fields
    bet.epoch = round.epoch;
    bet.round = round.key();
    bet.bettor = ctx.accounts.signer.key();
    bet.position = position;
    bet.amount = amount;
    bet.claimed = false;
    bet.created_at = Clock::get()?.unix_timestamp;
    bet.bump = ctx.bumps.bet;

    // set round fields
    round.total_amount = round
        .total_amount
        .checked_add(amount)
        .ok_or(PredictionError::Overflow)?;
    match position {
        Position::Bull => {
            round.bull_amount = round
                .bull_amount
                .checked_add(amount)
                .ok_or(PredictionError::Overflow)?;
        }
        Position::Bear => {
            round.bear_amount = round
                .bear_amount
                .checked_add(amount)
                .ok_or(PredictionError::Overflow)?;
        }
    }
    round.total_bets = round
        .total_bets
        .checked_add(1)
        .ok_or(PredictionError::Overflow)?;

    // emit event
    emit!(BetPlaced {
        bettor: bet.bettor,
        epoch: bet.epoch,
        position,
        amount,
    });

    Ok(())
}
