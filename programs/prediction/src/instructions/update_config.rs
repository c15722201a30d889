use crate::{constants::*, error::PredictionError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    pub fn validate(
        &self,
        new_operator_authorities: &Option<Vec<Pubkey>>,
        new_interval_seconds: Option<u64>,
        new_buffer_seconds: Option<u64>,
        new_min_bet_amount: Option<u64>,
        new_treasury_fee_bps: Option<u16>,
    ) -> Result<()> {
        require!(
            self.signer.key() == self.config.admin,
            PredictionError::Unauthorized
        );

        if let Some(new_operator_authorities) = new_operator_authorities {
            require!(
                !new_operator_authorities.is_empty()
                    && new_operator_authorities.len() <= MAX_OPERATOR_AUTHORITIES,
                PredictionError::InvalidOperatorAuthorities
            );
        }

        let interval = new_interval_seconds.unwrap_or(self.config.interval_seconds);
        let buffer = new_buffer_seconds.unwrap_or(self.config.buffer_seconds);
        require!(buffer < interval, PredictionError::InvalidRoundTiming);

        if let Some(new_min_bet_amount) = new_min_bet_amount {
            require!(new_min_bet_amount > 0, PredictionError::InvalidMinBetAmount);
        }

        if let Some(new_treasury_fee_bps) = new_treasury_fee_bps {
            require!(
                new_treasury_fee_bps <= MAX_TREASURY_FEE_BPS,
                PredictionError::InvalidTreasuryFee
            );
        }

        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
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
    // validate
    ctx.accounts.validate(
        &new_operator_authorities,
        new_interval_seconds,
        new_buffer_seconds,
        new_min_bet_amount,
        new_treasury_fee_bps,
    )?;

    let config = &mut ctx.accounts.config;

    // set fields
    if let Some(new_admin) = new_admin {
        config.admin = new_admin;
    }
    if let Some(new_operator_authorities) = new_operator_authorities {
        config.operator_authorities = new_operator_authorities;
    }
    if let Some(new_treasury) = new_treasury {
        config.treasury = new_treasury;
    }
    if let Some(new_price_feed_id) = new_price_feed_id {
        config.price_feed_id = new_price_feed_id;
    }
    if let Some(new_max_price_update_age_secs) = new_max_price_update_age_secs {
        config.max_price_update_age_secs = new_max_price_update_age_secs;
    }
    if let Some(new_interval_seconds) = new_interval_seconds {
        config.interval_seconds = new_interval_seconds;
    }
    if let Some(new_buffer_seconds) = new_buffer_seconds {
        config.buffer_seconds = new_buffer_seconds;
    }
    if let Some(new_min_bet_amount) = new_min_bet_amount {
        config.min_bet_amount = new_min_bet_amount;
    }
    if let Some(new_treasury_fee_bps) = new_treasury_fee_bps {
        config.treasury_fee_bps = new_treasury_fee_bps;
    }

    // update config version
    config.version = config
        .version
        .checked_add(1)
        .ok_or(PredictionError::Overflow)?;

    Ok(())
}
