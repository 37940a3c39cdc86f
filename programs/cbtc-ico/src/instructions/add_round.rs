use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::IcoError;
use crate::state::*;

pub fn add_round(ctx: Context<AdminUpdate>, price: u64, cap: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;

    require!(price > 0, IcoError::InvalidRoundPrice);
    require!(cap > 0, IcoError::InvalidRoundCap);
    require!(config.rounds.len() < MAX_ROUNDS, IcoError::TooManyRounds);

    let round_id = config.rounds.len() as u8;
    config.rounds.push(Round {
        price,
        cap,
        sold: 0,
    });

    emit!(crate::RoundAddedEvent {
        round_id,
        price,
        cap,
    });

    Ok(())
}

/// Shared accounts for admin-only config mutations.
#[derive(Accounts)]
pub struct AdminUpdate<'info> {
    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.admin == admin.key() @ IcoError::Unauthorized,
    )]
    pub config: Account<'info, SaleConfig>,
    pub admin: Signer<'info>,
}
