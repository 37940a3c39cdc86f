use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::state::*;

pub fn initialize(ctx: Context<Initialize>, treasury: Pubkey, payment_mint: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.token_mint = ctx.accounts.token_mint.key();
    config.payment_mint = payment_mint;
    config.treasury = treasury;
    // The sale opens explicitly once rounds are configured.
    config.sale_open = false;
    config.current_round = 0;
    config.total_sold = 0;
    config.total_raised = 0;
    config.rounds = Vec::new();
    config.tranches = Vec::new();
    config.bump = ctx.bumps.config;

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(init, payer = admin, space = 8 + SaleConfig::LEN, seeds = [SEED_CONFIG], bump)]
    pub config: Account<'info, SaleConfig>,

    /// Vault holding CBTC for tranche claims; its own PDA is the authority.
    #[account(
        init,
        payer = admin,
        seeds = [SEED_VAULT, config.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = token_vault,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,
    pub token_mint: Account<'info, Mint>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
