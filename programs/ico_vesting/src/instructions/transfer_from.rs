use anchor_lang::prelude::*;

use crate::constants::{ALLOWANCE_SEED, HOLDER_SEED, TOKEN_STATE_SEED};
use crate::engine::Recipient;
use crate::events::emit_all;
use crate::state::{Allowance, HolderAccount, TokenState};

pub fn transfer_from(
    ctx: Context<TransferFrom>,
    from: Pubkey,
    to: Pubkey,
    amount: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let a = ctx.accounts;
    let spender = a.spender.key();
    let events = if to == from {
        a.token_state.transfer_from(
            spender,
            &mut a.allowance,
            &mut a.from_holder,
            Recipient::Sender,
            amount,
            now,
        )?
    } else {
        a.to_holder.open(to, ctx.bumps.to_holder);
        a.token_state.transfer_from(
            spender,
            &mut a.allowance,
            &mut a.from_holder,
            Recipient::Other(&mut a.to_holder),
            amount,
            now,
        )?
    };
    emit_all(&events);
    Ok(())
}

#[derive(Accounts)]
#[instruction(from: Pubkey, to: Pubkey)]
pub struct TransferFrom<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Box<Account<'info, TokenState>>,

    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, from.as_ref(), spender.key().as_ref()],
        bump = allowance.bump
    )]
    pub allowance: Box<Account<'info, Allowance>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, from.as_ref()],
        bump = from_holder.bump
    )]
    pub from_holder: Box<Account<'info, HolderAccount>>,

    #[account(
        init_if_needed,
        payer = spender,
        space = HolderAccount::SPACE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub to_holder: Box<Account<'info, HolderAccount>>,

    #[account(mut)]
    pub spender: Signer<'info>,

    pub system_program: Program<'info, System>,
}
