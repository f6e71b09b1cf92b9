use anchor_lang::prelude::*;

use crate::constants::{ALLOWANCE_SEED, TOKEN_STATE_SEED};
use crate::events::emit_all;
use crate::state::{Allowance, TokenState};

pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
    let a = ctx.accounts;
    let owner = a.authority.key();
    a.allowance.open(owner, spender, ctx.bumps.allowance);
    let events = a
        .token_state
        .approve(&mut a.allowance, owner, spender, amount)?;
    emit_all(&events);
    Ok(())
}

#[derive(Accounts)]
#[instruction(spender: Pubkey)]
pub struct Approve<'info> {
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Box<Account<'info, TokenState>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Allowance::SPACE,
        seeds = [ALLOWANCE_SEED, authority.key().as_ref(), spender.as_ref()],
        bump
    )]
    pub allowance: Box<Account<'info, Allowance>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
