use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::events::emit_all;
use crate::state::TokenState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.token_state;
    let events = st.transfer_ownership(ctx.accounts.admin.key(), new_owner)?;
    msg!("Ownership transferred to {}", new_owner);
    emit_all(&events);
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Box<Account<'info, TokenState>>,
    pub admin: Signer<'info>,
}
