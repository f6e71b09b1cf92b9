use anchor_lang::prelude::*;

use crate::constants::{ALLOCATION_SEED, HOLDER_SEED, TOKEN_STATE_SEED};
use crate::events::emit_all;
use crate::state::{Allocation, HolderAccount, TokenState};

/// Pulls the signer's vested tokens into its balance. No-op (no events) when nothing is due.
pub fn release(ctx: Context<ReleaseVested>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let a = ctx.accounts;
    let events = a
        .token_state
        .release(&mut a.holder, a.allocation.as_deref_mut(), now)?;
    emit_all(&events);
    Ok(())
}

#[derive(Accounts)]
pub struct ReleaseVested<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Box<Account<'info, TokenState>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, beneficiary.key().as_ref()],
        bump = holder.bump
    )]
    pub holder: Box<Account<'info, HolderAccount>>,

    /// Absent for wallets that never bought; the team wallet releases without one.
    #[account(
        mut,
        seeds = [ALLOCATION_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub allocation: Option<Account<'info, Allocation>>,

    pub beneficiary: Signer<'info>,
}
