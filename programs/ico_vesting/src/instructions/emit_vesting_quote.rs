use anchor_lang::prelude::*;

use crate::constants::{ALLOCATION_SEED, HOLDER_SEED, TOKEN_STATE_SEED};
use crate::events::VestingQuote;
use crate::state::{Allocation, HolderAccount, TokenState};

pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let a = &ctx.accounts;
    let pos = a
        .token_state
        .vesting_position(&a.holder, a.allocation.as_deref(), now)?;

    emit!(VestingQuote {
        wallet,
        allocation: pos.allocation,
        vested_amount: pos.vested,
        released_amount: pos.released,
        releasable: pos.releasable,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Box<Account<'info, TokenState>>,

    #[account(seeds = [HOLDER_SEED, wallet.as_ref()], bump = holder.bump)]
    pub holder: Box<Account<'info, HolderAccount>>,

    #[account(seeds = [ALLOCATION_SEED, wallet.as_ref()], bump)]
    pub allocation: Option<Account<'info, Allocation>>,
}
