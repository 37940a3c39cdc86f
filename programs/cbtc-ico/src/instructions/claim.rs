use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::IcoError;
use crate::math::vesting::{self, TrancheStatus};
use crate::state::*;

pub fn claim(ctx: Context<Claim>, tranche_id: u8) -> Result<()> {
    let config = &ctx.accounts.config;
    let purchase = &mut ctx.accounts.purchase_account;
    let now = Clock::get()?.unix_timestamp;

    let index = tranche_id as usize;
    let tranche = *config
        .tranches
        .get(index)
        .ok_or(IcoError::TrancheNotFound)?;

    match vesting::tranche_status(&tranche, index, now, &purchase.claimed) {
        TrancheStatus::Disabled => return err!(IcoError::TrancheDisabled),
        TrancheStatus::Claimed => return err!(IcoError::TrancheAlreadyClaimed),
        TrancheStatus::Upcoming => return err!(IcoError::TrancheNotStarted),
        TrancheStatus::Expired => return err!(IcoError::TrancheExpired),
        TrancheStatus::Active => {}
    }

    let amount = vesting::claimable_amount(purchase.total_purchased, tranche.percent_bps);
    require!(amount > 0, IcoError::NothingToClaim);

    let config_key = config.key();
    let seeds = &[SEED_VAULT, config_key.as_ref(), &[ctx.bumps.token_vault]];
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.token_vault.to_account_info(),
        to: ctx.accounts.buyer_token_account.to_account_info(),
        authority: ctx.accounts.token_vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::transfer(cpi_ctx, amount)?;

    purchase.claimed.mark_claimed(index);
    purchase.total_claimed = purchase
        .total_claimed
        .checked_add(amount)
        .ok_or(IcoError::Overflow)?;

    emit!(crate::ClaimEvent {
        user: ctx.accounts.buyer.key(),
        tranche_id,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, SaleConfig>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_PURCHASE, buyer.key().as_ref()],
        bump = purchase_account.bump,
        constraint = purchase_account.buyer == buyer.key() @ IcoError::InvalidTokenAccount,
    )]
    pub purchase_account: Account<'info, PurchaseAccount>,

    #[account(
        mut,
        seeds = [SEED_VAULT, config.key().as_ref()],
        bump,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = buyer_token_account.owner == buyer.key() @ IcoError::InvalidTokenAccount,
        constraint = buyer_token_account.mint == config.token_mint @ IcoError::InvalidTokenAccount,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
