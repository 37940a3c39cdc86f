use anchor_lang::prelude::*;

use crate::instructions::add_round::AdminUpdate;
use crate::state::*;

pub fn add_tranche(
    ctx: Context<AdminUpdate>,
    percent_bps: u16,
    start: i64,
    end: i64,
    enabled: bool,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    // Tranche shape is validated here, at creation time; the evaluator
    // trusts whatever is stored.
    config.validate_new_tranche(percent_bps, start, end)?;

    let tranche_id = config.tranches.len() as u8;
    config.tranches.push(Tranche {
        percent_bps,
        start,
        end,
        enabled,
    });

    emit!(crate::TrancheAddedEvent {
        tranche_id,
        percent_bps,
        start,
        end,
    });

    Ok(())
}
