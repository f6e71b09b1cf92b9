//! Team wallet lock: a lock-free balance usable from genesis, and a locked principal
//! released linearly by whole months once the cliff (`start_ts + lock_period`) has passed.
//!
//! Before the cliff the team may move at most `lockfree_tokens - sent_since_genesis`.
//! After the cliff the ceiling is the plain balance.

use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize, Pubkey};

use crate::error::IcoError;
use crate::utils::{math, time};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeamLock {
    pub wallet: Pubkey,
    /// Locked team principal, released through vesting.
    pub principal: u64,
    /// Seeded as spendable at genesis.
    pub lockfree_tokens: u64,
    pub start_ts: i64,
    pub lock_period: i64,
    pub vested_months: u8,
    pub released: u64,
    /// Everything the team wallet has sent out since genesis.
    pub sent_since_genesis: u64,
}

impl TeamLock {
    pub const SIZE: usize = 32 + 8 + 8 + 8 + 8 + 1 + 8 + 8;

    pub fn cliff_ts(&self) -> Result<i64, IcoError> {
        time::add_seconds(self.start_ts, self.lock_period)
    }

    pub fn is_locked(&self, now_ts: i64) -> Result<bool, IcoError> {
        Ok(!time::is_at_or_after(now_ts, self.cliff_ts()?))
    }

    /// Most the team wallet may send right now.
    pub fn transferable_ceiling(&self, balance: u64, now_ts: i64) -> Result<u64, IcoError> {
        if self.is_locked(now_ts)? {
            Ok(self.lockfree_tokens.saturating_sub(self.sent_since_genesis))
        } else {
            Ok(balance)
        }
    }

    pub fn allow_transfer(&self, balance: u64, amount: u64, now_ts: i64) -> Result<bool, IcoError> {
        Ok(amount <= self.transferable_ceiling(balance, now_ts)?)
    }

    /// Vesting months count from the cliff end, not from genesis.
    pub fn vested_amount(&self, now_ts: i64) -> Result<u64, IcoError> {
        let cliff = self.cliff_ts()?;
        if !time::is_at_or_after(now_ts, cliff) {
            return Ok(0);
        }
        let elapsed = time::months_between(now_ts, cliff);
        math::linear_vested(self.principal, elapsed, self.vested_months as u64)
    }

    pub fn releasable_amount(&self, now_ts: i64) -> Result<u64, IcoError> {
        Ok(self.vested_amount(now_ts)?.saturating_sub(self.released))
    }

    pub fn unreleased(&self) -> u64 {
        self.principal.saturating_sub(self.released)
    }

    pub fn release(&mut self, now_ts: i64) -> Result<u64, IcoError> {
        let releasable = self.releasable_amount(now_ts)?;
        if releasable == 0 {
            return Ok(0);
        }
        self.released = self
            .released
            .checked_add(releasable)
            .ok_or(IcoError::MathOverflow)?;
        Ok(releasable)
    }

    pub fn record_outgoing(&mut self, amount: u64) {
        self.sent_since_genesis = self.sent_since_genesis.saturating_add(amount);
    }
}
