use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::IcoError;

/// Spending approval, PDA `[ALLOWANCE_SEED, owner, spender]`.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Allowance {
    pub bump: u8,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

impl Allowance {
    pub const SPACE: usize = 8 + 1 + 32 + 32 + 8;

    pub fn is_open(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Binds a zeroed account to its pair. Leaves an open account untouched.
    pub fn open(&mut self, owner: Pubkey, spender: Pubkey, bump: u8) {
        if self.is_open() {
            return;
        }
        self.owner = owner;
        self.spender = spender;
        self.bump = bump;
    }

    pub fn is_for(&self, owner: &Pubkey, spender: &Pubkey) -> bool {
        self.owner == *owner && self.spender == *spender
    }

    /// Overwrites the approved amount.
    pub fn approve(&mut self, amount: u64) {
        self.amount = amount;
    }

    pub fn check_spend(&self, owner: &Pubkey, spender: &Pubkey, amount: u64) -> Result<(), IcoError> {
        if !self.is_for(owner, spender) || self.amount < amount {
            return Err(IcoError::InsufficientAllowance);
        }
        Ok(())
    }

    pub fn spend(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u64) -> Result<(), IcoError> {
        self.check_spend(owner, spender, amount)?;
        self.amount -= amount;
        Ok(())
    }
}
