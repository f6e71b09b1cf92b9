use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::events::emit_all;
use crate::state::TokenState;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let st = &mut ctx.accounts.token_state;
    let events = st.pause(ctx.accounts.admin.key())?;
    msg!("Token paused by {}", st.owner());
    emit_all(&events);
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Box<Account<'info, TokenState>>,
    pub admin: Signer<'info>,
}
