use anchor_lang::prelude::*;

use crate::constants::{ALLOCATION_SEED, HOLDER_SEED, TOKEN_STATE_SEED};
use crate::error::IcoError;
use crate::events::emit_all;
use crate::state::{Allocation, HolderAccount, TokenState};

pub fn vested_transfer(
    ctx: Context<VestedTransfer>,
    to: Pubkey,
    amount: u64,
    lock_months: u8,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let a = ctx.accounts;
    require_keys_eq!(a.funds.key(), a.token_state.wallets.funds, IcoError::Unauthorized);
    // Buying into the funds wallet would alias the source account.
    require_keys_neq!(to, a.funds.key(), IcoError::InvalidPubkey);

    a.buyer_holder.open(to, ctx.bumps.buyer_holder);
    if !a.allocation.is_open() {
        a.allocation.bump = ctx.bumps.allocation;
    }
    let events = a.token_state.vested_transfer(
        a.funds.key(),
        &mut a.funds_holder,
        &mut a.buyer_holder,
        &mut a.allocation,
        amount,
        lock_months,
        now,
    )?;
    emit_all(&events);
    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct VestedTransfer<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Box<Account<'info, TokenState>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, funds.key().as_ref()],
        bump = funds_holder.bump
    )]
    pub funds_holder: Box<Account<'info, HolderAccount>>,

    #[account(
        init_if_needed,
        payer = funds,
        space = HolderAccount::SPACE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub buyer_holder: Box<Account<'info, HolderAccount>>,

    #[account(
        init_if_needed,
        payer = funds,
        space = Allocation::SPACE,
        seeds = [ALLOCATION_SEED, to.as_ref()],
        bump
    )]
    pub allocation: Box<Account<'info, Allocation>>,

    /// Offering source wallet.
    #[account(mut)]
    pub funds: Signer<'info>,

    pub system_program: Program<'info, System>,
}
