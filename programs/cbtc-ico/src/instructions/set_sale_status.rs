use anchor_lang::prelude::*;

use crate::instructions::add_round::AdminUpdate;

pub fn set_sale_status(ctx: Context<AdminUpdate>, open: bool) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.sale_open = open;

    emit!(crate::SaleStatusEvent { open });

    Ok(())
}
