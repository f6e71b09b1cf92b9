use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::IcoError;
use crate::events::TokenEvent;

/// Which transfer-admissibility rule applies to an account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransferPolicy {
    #[default]
    Standard,
    /// Outgoing transfers are bounded by the team lock (see `TeamLock::allow_transfer`).
    TeamLocked,
}

/// Spendable balance of one address, PDA `[HOLDER_SEED, owner]`.
///
/// Accounts are keys into the ledger, never references to each other. A freshly created
/// account is all zeroes and becomes usable once `open` binds it to its owner.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HolderAccount {
    pub bump: u8,
    pub owner: Pubkey,
    pub balance: u64,
    pub policy: TransferPolicy,
}

impl HolderAccount {
    pub const SPACE: usize = 8 + // discriminator
        1 + // bump
        32 + // owner
        8 + // balance
        1; // policy

    pub fn new(owner: Pubkey, policy: TransferPolicy) -> Self {
        Self {
            bump: 0,
            owner,
            balance: 0,
            policy,
        }
    }

    pub fn is_open(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Binds a zeroed account to `owner`. Leaves an open account untouched.
    pub fn open(&mut self, owner: Pubkey, bump: u8) {
        if self.is_open() {
            return;
        }
        self.owner = owner;
        self.bump = bump;
        self.policy = TransferPolicy::Standard;
    }

    pub fn check_debit(&self, amount: u64) -> Result<(), IcoError> {
        if self.balance < amount {
            return Err(IcoError::InsufficientBalance);
        }
        Ok(())
    }

    pub fn check_credit(&self, amount: u64) -> Result<(), IcoError> {
        self.balance
            .checked_add(amount)
            .ok_or(IcoError::MathOverflow)?;
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<(), IcoError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(IcoError::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<(), IcoError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(IcoError::InsufficientBalance)?;
        Ok(())
    }
}

/// Every precondition of `transfer`, checked without mutating.
pub fn check_transfer(from: &HolderAccount, to: &HolderAccount, amount: u64) -> Result<(), IcoError> {
    if amount == 0 {
        return Err(IcoError::ZeroAmount);
    }
    if !to.is_open() {
        return Err(IcoError::InvalidPubkey);
    }
    from.check_debit(amount)?;
    to.check_credit(amount)
}

/// Moves `amount` between two distinct balances. All-or-nothing.
pub fn transfer(
    from: &mut HolderAccount,
    to: &mut HolderAccount,
    amount: u64,
) -> Result<TokenEvent, IcoError> {
    check_transfer(from, to, amount)?;
    from.debit(amount)?;
    to.credit(amount)?;
    Ok(TokenEvent::Transfer {
        from: from.owner,
        to: to.owner,
        value: amount,
    })
}
