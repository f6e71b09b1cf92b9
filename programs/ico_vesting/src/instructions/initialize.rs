use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, TOKEN_STATE_SEED};
use crate::events::emit_all;
use crate::state::{GenesisWallets, HolderAccount, TokenState, Tokenomics};

pub fn initialize(
    ctx: Context<Initialize>,
    funds: Pubkey,
    team: Pubkey,
    community: Pubkey,
    foundation: Pubkey,
    start_ts: i64,
) -> Result<()> {
    let a = ctx.accounts;
    // The state account itself holds the operation share.
    let wallets = GenesisWallets {
        funds,
        team,
        community,
        foundation,
        reserve: a.token_state.key(),
    };
    let (mut state, holders, events) =
        TokenState::genesis(a.admin.key(), wallets, start_ts, Tokenomics::default())?;
    state.bump = ctx.bumps.token_state;
    a.token_state.set_inner(state);

    let bumps = [
        ctx.bumps.funds_holder,
        ctx.bumps.team_holder,
        ctx.bumps.community_holder,
        ctx.bumps.foundation_holder,
        ctx.bumps.reserve_holder,
    ];
    let targets = [
        &mut a.funds_holder,
        &mut a.team_holder,
        &mut a.community_holder,
        &mut a.foundation_holder,
        &mut a.reserve_holder,
    ];
    for ((target, mut holder), bump) in targets.into_iter().zip(holders).zip(bumps) {
        holder.bump = bump;
        target.set_inner(holder);
    }

    msg!(
        "Token sale initialized: owner={} funds={} start_ts={}",
        a.admin.key(),
        funds,
        start_ts
    );
    emit_all(&events);
    Ok(())
}

#[derive(Accounts)]
#[instruction(funds: Pubkey, team: Pubkey, community: Pubkey, foundation: Pubkey)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = TokenState::SPACE,
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Box<Account<'info, TokenState>>,

    #[account(
        init,
        payer = admin,
        space = HolderAccount::SPACE,
        seeds = [HOLDER_SEED, funds.as_ref()],
        bump
    )]
    pub funds_holder: Box<Account<'info, HolderAccount>>,

    #[account(
        init,
        payer = admin,
        space = HolderAccount::SPACE,
        seeds = [HOLDER_SEED, team.as_ref()],
        bump
    )]
    pub team_holder: Box<Account<'info, HolderAccount>>,

    #[account(
        init,
        payer = admin,
        space = HolderAccount::SPACE,
        seeds = [HOLDER_SEED, community.as_ref()],
        bump
    )]
    pub community_holder: Box<Account<'info, HolderAccount>>,

    #[account(
        init,
        payer = admin,
        space = HolderAccount::SPACE,
        seeds = [HOLDER_SEED, foundation.as_ref()],
        bump
    )]
    pub foundation_holder: Box<Account<'info, HolderAccount>>,

    /// Operation share, keyed by the state account.
    #[account(
        init,
        payer = admin,
        space = HolderAccount::SPACE,
        seeds = [HOLDER_SEED, token_state.key().as_ref()],
        bump
    )]
    pub reserve_holder: Box<Account<'info, HolderAccount>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
