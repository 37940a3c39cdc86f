use anchor_lang::prelude::*;

#[constant]
pub const SEED_CONFIG: &[u8] = b"config";
#[constant]
pub const SEED_PURCHASE: &[u8] = b"purchase";
#[constant]
pub const SEED_VAULT: &[u8] = b"vault";

/// Base units per whole CBTC token (9-decimal mint).
pub const TOKEN_UNIT: u64 = 1_000_000_000;

/// Basis-point denominator: 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound on pricing rounds stored in the config account.
pub const MAX_ROUNDS: usize = 8;

/// Upper bound on vesting tranches. Claim bookkeeping packs tranche
/// indices into a u32 bitmask, so this must stay <= 32.
pub const MAX_TRANCHES: usize = 16;
