use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_ROUNDS, MAX_TRANCHES};
use crate::errors::IcoError;

/// One fixed-price pricing tier of the sale. Rounds fill in storage order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Round {
    /// Payment base units per whole token.
    pub price: u64,
    /// Maximum cumulative token base units sellable in this round.
    pub cap: u64,
    /// Cumulative token base units already sold; `sold <= cap`.
    pub sold: u64,
}

impl Round {
    pub const LEN: usize = 8 + 8 + 8;

    pub fn available(&self) -> u64 {
        self.cap.saturating_sub(self.sold)
    }
}

/// One scheduled vesting unlock window. The tranche's position in the
/// config list is its identity for claim bookkeeping.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Tranche {
    /// Basis points of a wallet's total purchase unlocked by this tranche.
    pub percent_bps: u16,
    /// Claim window opens at this unix timestamp.
    pub start: i64,
    /// Claim window closes at this unix timestamp.
    pub end: i64,
    /// A disabled tranche is never claimable regardless of window.
    pub enabled: bool,
}

impl Tranche {
    pub const LEN: usize = 2 + 8 + 8 + 1;
}

/// Per-wallet record of which tranche indices were already claimed,
/// packed as a bitmask.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ClaimRecord(pub u32);

impl ClaimRecord {
    pub const LEN: usize = 4;

    pub fn is_claimed(&self, index: usize) -> bool {
        index < 32 && self.0 & (1 << index) != 0
    }

    pub fn mark_claimed(&mut self, index: usize) {
        if index < 32 {
            self.0 |= 1 << index;
        }
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

#[account]
pub struct SaleConfig {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub payment_mint: Pubkey,
    pub treasury: Pubkey,
    pub sale_open: bool,
    /// Index of the round currently accepting sales.
    pub current_round: u8,
    pub total_sold: u64,
    pub total_raised: u64,
    pub rounds: Vec<Round>,
    pub tranches: Vec<Tranche>,
    pub bump: u8,
}

impl SaleConfig {
    // admin(32) + token_mint(32) + payment_mint(32) + treasury(32)
    // + sale_open(1) + current_round(1) + total_sold(8) + total_raised(8)
    // + rounds(4 + MAX_ROUNDS * Round::LEN)
    // + tranches(4 + MAX_TRANCHES * Tranche::LEN) + bump(1)
    pub const LEN: usize = 32
        + 32
        + 32
        + 32
        + 1
        + 1
        + 8
        + 8
        + 4
        + MAX_ROUNDS * Round::LEN
        + 4
        + MAX_TRANCHES * Tranche::LEN
        + 1;

    /// Sum of percent_bps across all configured tranches.
    pub fn tranche_bps_total(&self) -> u64 {
        self.tranches.iter().map(|t| t.percent_bps as u64).sum()
    }

    /// Validates a tranche before it is appended. The evaluator trusts
    /// whatever is stored, so shape checks happen here, once: a well-formed
    /// window, a percentage in [1, 10000] bps, room in the list, and a
    /// total tranche budget of at most 10000 bps.
    pub fn validate_new_tranche(&self, percent_bps: u16, start: i64, end: i64) -> Result<()> {
        require!(start < end, IcoError::InvalidTrancheWindow);
        require!(
            percent_bps >= 1 && percent_bps as u64 <= BPS_DENOMINATOR,
            IcoError::InvalidTranchePercent
        );
        require!(self.tranches.len() < MAX_TRANCHES, IcoError::TooManyTranches);
        require!(
            self.tranche_bps_total() + percent_bps as u64 <= BPS_DENOMINATOR,
            IcoError::TrancheBudgetExceeded
        );
        Ok(())
    }
}

/// Per-buyer purchase and claim bookkeeping, one PDA per wallet.
#[account]
#[derive(Default)]
pub struct PurchaseAccount {
    pub buyer: Pubkey,
    /// Total token base units purchased across all buys.
    pub total_purchased: u64,
    /// Total token base units already claimed from tranches.
    pub total_claimed: u64,
    pub claimed: ClaimRecord,
    pub bump: u8,
}

impl PurchaseAccount {
    pub const LEN: usize = 32 + 8 + 8 + ClaimRecord::LEN + 1;
}
