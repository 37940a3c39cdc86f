use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod cbtc_ico {
    use super::*;

    /// Sets up the sale config PDA and the CBTC claim vault. The sale
    /// starts closed with empty round and tranche lists; rounds and
    /// tranches are appended by the admin before opening.
    pub fn initialize(
        ctx: Context<Initialize>,
        treasury: Pubkey,
        payment_mint: Pubkey,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, treasury, payment_mint)
    }

    /// Appends a fixed-price pricing tier. Rounds fill in the order they
    /// were added.
    pub fn add_round(ctx: Context<AdminUpdate>, price: u64, cap: u64) -> Result<()> {
        instructions::add_round::add_round(ctx, price, cap)
    }

    /// Appends a vesting tranche. Enforces `start < end`, a percentage in
    /// [1, 10000] bps, and a total tranche budget of at most 10000 bps.
    pub fn add_tranche(
        ctx: Context<AdminUpdate>,
        percent_bps: u16,
        start: i64,
        end: i64,
        enabled: bool,
    ) -> Result<()> {
        instructions::add_tranche::add_tranche(ctx, percent_bps, start, end, enabled)
    }

    /// Enables or disables a tranche. A disabled tranche is never
    /// claimable, whatever its window says.
    pub fn set_tranche_status(
        ctx: Context<AdminUpdate>,
        tranche_id: u8,
        enabled: bool,
    ) -> Result<()> {
        instructions::set_tranche_status::set_tranche_status(ctx, tranche_id, enabled)
    }

    /// Opens or closes the sale.
    pub fn set_sale_status(ctx: Context<AdminUpdate>, open: bool) -> Result<()> {
        instructions::set_sale_status::set_sale_status(ctx, open)
    }

    /// Purchases `token_amount` base units of CBTC. The cost is allocated
    /// greedily across rounds from the current one; the quoted USDT amount
    /// is transferred buyer -> treasury and the buyer's purchase total is
    /// credited for later tranche claims.
    pub fn buy_tokens(ctx: Context<BuyTokens>, token_amount: u64) -> Result<()> {
        instructions::buy_tokens::buy_tokens(ctx, token_amount)
    }

    /// Claims one tranche's share of the buyer's total purchase, provided
    /// the tranche is enabled, unclaimed, and inside its claim window at
    /// the current clock.
    pub fn claim(ctx: Context<Claim>, tranche_id: u8) -> Result<()> {
        instructions::claim::claim(ctx, tranche_id)
    }

    /// Admin funds the claim vault.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    /// Admin recovers unsold tokens from the claim vault.
    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        instructions::withdraw_tokens::withdraw_tokens(ctx, amount)
    }
}

#[event]
pub struct RoundAddedEvent {
    pub round_id: u8,
    pub price: u64,
    pub cap: u64,
}

#[event]
pub struct TrancheAddedEvent {
    pub tranche_id: u8,
    pub percent_bps: u16,
    pub start: i64,
    pub end: i64,
}

#[event]
pub struct TrancheStatusEvent {
    pub tranche_id: u8,
    pub enabled: bool,
}

#[event]
pub struct SaleStatusEvent {
    pub open: bool,
}

#[event]
pub struct BuyEvent {
    pub buyer: Pubkey,
    pub tokens: u64,
    pub paid: u64,
    pub round_start: u8,
    pub round_end: u8,
}

#[event]
pub struct ClaimEvent {
    pub user: Pubkey,
    pub tranche_id: u8,
    pub amount: u64,
}

#[event]
pub struct DepositEvent {
    pub admin: Pubkey,
    pub amount: u64,
}

#[event]
pub struct WithdrawEvent {
    pub admin: Pubkey,
    pub amount: u64,
}
