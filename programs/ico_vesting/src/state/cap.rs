use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize};

use crate::error::IcoError;

/// `already_committed + amount <= ico_cap`, without overflow.
pub fn is_purchase_within_cap(ico_cap: u64, already_committed: u64, amount: u64) -> bool {
    (already_committed as u128) + (amount as u128) <= ico_cap as u128
}

/// Cumulative tokens committed to the public offering. Never decreases, never exceeds the cap.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapController {
    pub ico_cap: u64,
    pub committed: u64,
}

impl CapController {
    pub const SIZE: usize = 8 + 8;

    pub fn new(ico_cap: u64) -> Self {
        Self {
            ico_cap,
            committed: 0,
        }
    }

    pub fn is_ico_open(&self) -> bool {
        self.committed < self.ico_cap
    }

    pub fn is_purchase_within_cap(&self, already_committed: u64, amount: u64) -> bool {
        is_purchase_within_cap(self.ico_cap, already_committed, amount)
    }

    pub fn allow_purchase(&self, amount: u64) -> bool {
        amount > 0 && self.is_purchase_within_cap(self.committed, amount)
    }

    pub fn remaining(&self) -> u64 {
        self.ico_cap.saturating_sub(self.committed)
    }

    pub fn check_purchase(&self, amount: u64) -> Result<(), IcoError> {
        if amount == 0 {
            return Err(IcoError::ZeroAmount);
        }
        if !self.is_purchase_within_cap(self.committed, amount) {
            return Err(IcoError::CapExceeded);
        }
        Ok(())
    }

    /// Records a whole purchase (lock-free plus vested). Rejects a partial fill.
    pub fn commit(&mut self, amount: u64) -> Result<(), IcoError> {
        self.check_purchase(amount)?;
        self.committed = self
            .committed
            .checked_add(amount)
            .ok_or(IcoError::MathOverflow)?;
        Ok(())
    }
}
