use crate::{constants::*, error::PredictionError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_lang::AccountDeserialize;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

/// Batched reward claim. Remaining accounts carry one
/// (round, bet, vault) triple per epoch being claimed.
#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = signer,
    )]
    pub bettor_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint @ PredictionError::InvalidMint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, Claim<'info>>) -> Result<()> {
    // claims stay available while the program is paused, so there is no
    // config status gate here
    let remaining_accounts = ctx.remaining_accounts;
    require!(
        !remaining_accounts.is_empty()
            && remaining_accounts.len() % CLAIM_ACCOUNTS_PER_BET == 0
            && remaining_accounts.len() <= MAX_CLAIM_BETS * CLAIM_ACCOUNTS_PER_BET,
        PredictionError::InvalidClaimAccountsLength
    );

    let bettor = ctx.accounts.signer.key();

    for triple in remaining_accounts.chunks(CLAIM_ACCOUNTS_PER_BET) {
        let round_ai = &triple[0];
        let bet_ai = &triple[1];
        let vault_ai = &triple[2];

        // ownership checks: round and bet must be our PDAs
        require_keys_eq!(
            *round_ai.owner,
            *ctx.program_id,
            PredictionError::InvalidRoundAccount
        );
        require_keys_eq!(
            *bet_ai.owner,
            *ctx.program_id,
            PredictionError::InvalidBetAccount
        );

        // borrow and deserialize round
        let round: Round = {
            let data = round_ai.try_borrow_data()?;
            Round::try_deserialize(&mut &data[..])
                .map_err(|_| PredictionError::InvalidAccountData)?
        };

        // validate expected round PDA
        let expected_round_pda = Pubkey::find_program_address(
            &[ROUND_SEED.as_bytes(), &round.epoch.to_le_bytes()],
            ctx.program_id,
        )
        .0;
        require_keys_eq!(
            *round_ai.key,
            expected_round_pda,
            PredictionError::InvalidRoundAccount
        );

        // validate vault against the round record
        require_keys_eq!(*vault_ai.key, round.vault, PredictionError::InvalidVaultAccount);
        let expected_vault_pda = Pubkey::find_program_address(
            &[VAULT_SEED.as_bytes(), round_ai.key.as_ref()],
            ctx.program_id,
        )
        .0;
        require_keys_eq!(
            *vault_ai.key,
            expected_vault_pda,
            PredictionError::InvalidVaultAccount
        );

        // borrow and deserialize bet
        let mut bet_data = bet_ai.try_borrow_mut_data()?;
        let mut bet: Bet = Bet::try_deserialize(&mut &bet_data[..])
            .map_err(|_| PredictionError::InvalidAccountData)?;

        // validate expected bet PDA for this bettor
        let expected_bet_pda = Pubkey::find_program_address(
            &[BET_SEED.as_bytes(), round_ai.key.as_ref(), bettor.as_ref()],
            ctx.program_id,
        )
        .0;
        require_keys_eq!(*bet_ai.key, expected_bet_pda, PredictionError::InvalidBetAccount);
        require_keys_eq!(bet.bettor, bettor, PredictionError::Unauthorized);
        require_keys_eq!(bet.round, *round_ai.key, PredictionError::InvalidBetAccount);

        require!(round.oracle_called, PredictionError::RoundNotResolved);
        require!(!bet.claimed, PredictionError::AlreadyClaimed);
        require!(claimable(&round, &bet), PredictionError::NotClaimable);

        // payout = stake share of the winning pool times the reward pool
        let reward_amount = (bet.amount as u128)
            .checked_mul(round.reward_amount as u128)
            .and_then(|x| x.checked_div(round.reward_base_cal_amount as u128))
            .and_then(|x| u64::try_from(x).ok())
            .ok_or(PredictionError::Overflow)?;

        // transfer from the round vault to the bettor
        let transfer_accounts = Transfer {
            from: vault_ai.clone(),
            to: ctx.accounts.bettor_token_account.to_account_info(),
            authority: round_ai.clone(),
        };
        let epoch_bytes = round.epoch.to_le_bytes();
        let seeds = &[ROUND_SEED.as_bytes(), epoch_bytes.as_ref(), &[round.bump]];
        let signer = &[&seeds[..]];
        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
            signer,
        );
        transfer(transfer_ctx, reward_amount)?;

        // flip claimed exactly once and serialize back
        bet.claimed = true;
        let serialized = bet
            .try_to_vec()
            .map_err(|_| PredictionError::SerializeError)?;
        if serialized.len() > bet_data[DISCRIMINATOR_SIZE..].len() {
            return Err(PredictionError::AccountDataTooSmall.into());
        }
        bet_data[DISCRIMINATOR_SIZE..DISCRIMINATOR_SIZE + serialized.len()]
            .copy_from_slice(&serialized);

        // emit event
        emit!(RewardClaimed {
            bettor,
            epoch: bet.epoch,
            amount: reward_amount,
        });
    }

    Ok(())
}
