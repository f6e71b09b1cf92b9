use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::IcoError;
use crate::utils::{math, time};

/// Locked part of a purchase, PDA `[ALLOCATION_SEED, beneficiary]`.
///
/// Created at most once per beneficiary. The record persists after full release as a marker.
/// A zeroed account (no beneficiary) means "no allocation".
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Allocation {
    pub bump: u8,
    pub beneficiary: Pubkey,
    /// Locked principal (the vested portion of the purchase).
    pub amount: u64,
    pub start_ts: i64,
    pub lock_months: u8,
    pub released: u64,
}

impl Allocation {
    pub const SPACE: usize = 8 + 1 + 32 + 8 + 8 + 1 + 8;

    pub fn is_open(&self) -> bool {
        self.beneficiary != Pubkey::default()
    }

    /// Preconditions of `start`, in the order they are reported.
    pub fn check_allocate(
        &self,
        amount: u64,
        lock_months: u8,
        min_lock_months: u8,
    ) -> Result<(), IcoError> {
        if amount == 0 {
            return Err(IcoError::ZeroAmount);
        }
        if lock_months < min_lock_months {
            return Err(IcoError::BelowMinimumLock);
        }
        if self.is_open() {
            return Err(IcoError::AlreadyAllocated);
        }
        Ok(())
    }

    /// Opens the record. Fails on an account that already holds an allocation.
    pub fn start(
        &mut self,
        beneficiary: Pubkey,
        principal: u64,
        start_ts: i64,
        lock_months: u8,
    ) -> Result<(), IcoError> {
        if self.is_open() {
            return Err(IcoError::AlreadyAllocated);
        }
        self.beneficiary = beneficiary;
        self.amount = principal;
        self.start_ts = start_ts;
        self.lock_months = lock_months;
        self.released = 0;
        Ok(())
    }

    pub fn cliff_ts(&self) -> Result<i64, IcoError> {
        time::add_months(self.start_ts, self.lock_months as u64)
    }

    /// Zero before the cliff, then floor(amount * elapsed_months / lock_months).
    ///
    /// The cliff and the divisor are both `lock_months`, so this is a step function: the
    /// whole principal unlocks at the cliff.
    pub fn vested_amount(&self, now_ts: i64) -> Result<u64, IcoError> {
        if !self.is_open() || !time::is_at_or_after(now_ts, self.cliff_ts()?) {
            return Ok(0);
        }
        let elapsed = time::months_between(now_ts, self.start_ts);
        math::linear_vested(self.amount, elapsed, self.lock_months as u64)
    }

    pub fn releasable_amount(&self, now_ts: i64) -> Result<u64, IcoError> {
        Ok(self.vested_amount(now_ts)?.saturating_sub(self.released))
    }

    pub fn unreleased(&self) -> u64 {
        self.amount.saturating_sub(self.released)
    }

    pub fn is_fully_released(&self) -> bool {
        self.released >= self.amount
    }

    /// Marks everything releasable at `now_ts` as released and returns it (0 = nothing to do).
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
}
