use anchor_lang::prelude::*;

#[error_code]
pub enum IcoError {
    #[msg("Sale is not open")]
    SaleClosed,
    #[msg("Purchase amount must be greater than zero")]
    InvalidAmount,
    #[msg("Requested amount exceeds remaining supply across all rounds")]
    InsufficientSupply,
    #[msg("Round price must be greater than zero")]
    InvalidRoundPrice,
    #[msg("Round cap must be greater than zero")]
    InvalidRoundCap,
    #[msg("Round limit reached")]
    TooManyRounds,
    #[msg("Tranche limit reached")]
    TooManyTranches,
    #[msg("Tranche window start must be before end")]
    InvalidTrancheWindow,
    #[msg("Tranche percentage must be between 1 and 10000 basis points")]
    InvalidTranchePercent,
    #[msg("Tranche percentages cannot sum above 10000 basis points")]
    TrancheBudgetExceeded,
    #[msg("Unknown tranche id")]
    TrancheNotFound,
    #[msg("Tranche is disabled")]
    TrancheDisabled,
    #[msg("Tranche already claimed")]
    TrancheAlreadyClaimed,
    #[msg("Tranche claim window has not opened yet")]
    TrancheNotStarted,
    #[msg("Tranche claim window has expired")]
    TrancheExpired,
    #[msg("Nothing to claim")]
    NothingToClaim,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Unauthorized - admin only")]
    Unauthorized,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid treasury account")]
    InvalidTreasuryAccount,
}
