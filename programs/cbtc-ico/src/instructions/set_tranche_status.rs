use anchor_lang::prelude::*;

use crate::errors::IcoError;
use crate::instructions::add_round::AdminUpdate;

pub fn set_tranche_status(ctx: Context<AdminUpdate>, tranche_id: u8, enabled: bool) -> Result<()> {
    let config = &mut ctx.accounts.config;

    let tranche = config
        .tranches
        .get_mut(tranche_id as usize)
        .ok_or(IcoError::TrancheNotFound)?;
    tranche.enabled = enabled;

    emit!(crate::TrancheStatusEvent {
        tranche_id,
        enabled,
    });

    Ok(())
}
