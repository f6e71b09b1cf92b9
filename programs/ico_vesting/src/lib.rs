use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("4FKDYW3oaChWTfvp9FCevzAioVrL2mXPGNEnAR4QsJ1U");

#[program]
pub mod ico_vesting {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        funds: Pubkey,
        team: Pubkey,
        community: Pubkey,
        foundation: Pubkey,
        start_ts: i64,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, funds, team, community, foundation, start_ts)
    }

    pub fn transfer(ctx: Context<TransferTokens>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::transfer::transfer(ctx, to, amount)
    }

    pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
        instructions::approve::approve(ctx, spender, amount)
    }

    pub fn transfer_from(
        ctx: Context<TransferFrom>,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer_from::transfer_from(ctx, from, to, amount)
    }

    pub fn vested_transfer(
        ctx: Context<VestedTransfer>,
        to: Pubkey,
        amount: u64,
        lock_months: u8,
    ) -> Result<()> {
        instructions::vested_transfer::vested_transfer(ctx, to, amount, lock_months)
    }

    pub fn release(ctx: Context<ReleaseVested>) -> Result<()> {
        instructions::release::release(ctx)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, new_owner)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx, wallet)
    }
}
