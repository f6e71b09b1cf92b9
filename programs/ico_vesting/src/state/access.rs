use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize, Pubkey};

use crate::error::IcoError;
use crate::events::TokenEvent;

/// Owner check and pause circuit breaker.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessGate {
    pub owner: Pubkey,
    pub paused: bool,
}

impl AccessGate {
    pub const SIZE: usize = 32 + 1;

    pub fn new(owner: Pubkey) -> Self {
        Self {
            owner,
            paused: false,
        }
    }

    pub fn is_authorized(&self, caller: &Pubkey) -> bool {
        *caller == self.owner
    }

    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<(), IcoError> {
        if !self.is_authorized(caller) {
            return Err(IcoError::Unauthorized);
        }
        Ok(())
    }

    pub fn ensure_not_paused(&self) -> Result<(), IcoError> {
        if self.paused {
            return Err(IcoError::Paused);
        }
        Ok(())
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<TokenEvent, IcoError> {
        self.ensure_owner(caller)?;
        self.ensure_not_paused()?;
        self.paused = true;
        Ok(TokenEvent::Paused { owner: self.owner })
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> Result<TokenEvent, IcoError> {
        self.ensure_owner(caller)?;
        if !self.paused {
            return Err(IcoError::NotPaused);
        }
        self.paused = false;
        Ok(TokenEvent::Unpaused { owner: self.owner })
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
    ) -> Result<TokenEvent, IcoError> {
        self.ensure_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(IcoError::InvalidPubkey);
        }
        let previous_owner = self.owner;
        self.owner = new_owner;
        Ok(TokenEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        })
    }
}
