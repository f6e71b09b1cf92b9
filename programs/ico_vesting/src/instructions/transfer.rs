use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, TOKEN_STATE_SEED};
use crate::engine::Recipient;
use crate::events::emit_all;
use crate::state::{HolderAccount, TokenState};

pub fn transfer(ctx: Context<TransferTokens>, to: Pubkey, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let a = ctx.accounts;
    // A self-transfer passes the same PDA twice; only the sender copy is used.
    let events = if to == a.authority.key() {
        a.token_state
            .transfer(&mut a.from_holder, Recipient::Sender, amount, now)?
    } else {
        a.to_holder.open(to, ctx.bumps.to_holder);
        a.token_state.transfer(
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
#[instruction(to: Pubkey)]
pub struct TransferTokens<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Box<Account<'info, TokenState>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, authority.key().as_ref()],
        bump = from_holder.bump
    )]
    pub from_holder: Box<Account<'info, HolderAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = HolderAccount::SPACE,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump
    )]
    pub to_holder: Box<Account<'info, HolderAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
