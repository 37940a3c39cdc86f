use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::IcoError;
use crate::math::allocator;
use crate::state::*;

pub fn buy_tokens(ctx: Context<BuyTokens>, token_amount: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;

    require!(config.sale_open, IcoError::SaleClosed);
    require!(token_amount > 0, IcoError::InvalidAmount);

    let start_round = config.current_round as usize;

    // Settlement rejects requests the remaining rounds cannot fully cover;
    // partial fills exist only in off-chain quotes.
    require!(
        allocator::remaining_capacity(&config.rounds, start_round) >= token_amount,
        IcoError::InsufficientSupply
    );

    let quote = allocator::commit(token_amount, &mut config.rounds, start_round)?;
    config.current_round = allocator::next_open_round(&config.rounds, start_round) as u8;

    config.total_sold = config
        .total_sold
        .checked_add(token_amount)
        .ok_or(IcoError::Overflow)?;
    config.total_raised = config
        .total_raised
        .checked_add(quote.cost)
        .ok_or(IcoError::Overflow)?;

    // Payment goes straight to the treasury; the program only ever holds
    // the CBTC claim vault.
    let cpi_accounts = Transfer {
        from: ctx.accounts.buyer_payment_account.to_account_info(),
        to: ctx.accounts.treasury_payment_account.to_account_info(),
        authority: ctx.accounts.buyer.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, quote.cost)?;

    let purchase = &mut ctx.accounts.purchase_account;
    if purchase.buyer == Pubkey::default() {
        purchase.buyer = ctx.accounts.buyer.key();
        purchase.bump = ctx.bumps.purchase_account;
    }
    purchase.total_purchased = purchase
        .total_purchased
        .checked_add(token_amount)
        .ok_or(IcoError::Overflow)?;

    emit!(crate::BuyEvent {
        buyer: ctx.accounts.buyer.key(),
        tokens: token_amount,
        paid: quote.cost,
        round_start: quote.round_start,
        round_end: quote.round_end,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(mut, seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, SaleConfig>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        constraint = buyer_payment_account.owner == buyer.key() @ IcoError::InvalidTokenAccount,
        constraint = buyer_payment_account.mint == config.payment_mint @ IcoError::InvalidTokenAccount,
    )]
    pub buyer_payment_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = treasury_payment_account.owner == config.treasury @ IcoError::InvalidTreasuryAccount,
        constraint = treasury_payment_account.mint == config.payment_mint @ IcoError::InvalidTreasuryAccount,
    )]
    pub treasury_payment_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + PurchaseAccount::LEN,
        seeds = [SEED_PURCHASE, buyer.key().as_ref()],
        bump
    )]
    pub purchase_account: Account<'info, PurchaseAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
