use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize};

use crate::constants::*;
use crate::error::IcoError;
use crate::utils::math::percent_of;

/// Immutable genesis parameters, fixed in the state account at initialization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tokenomics {
    pub total_supply: u64,
    pub team_share: u8,
    pub community_share: u8,
    pub foundation_share: u8,
    pub ico_share: u8,
    pub operation_share: u8,
    pub team_lockfree_share: u8,
    /// Percent of each purchase held back as a vested allocation.
    pub ico_vested_percentage: u8,
    pub min_vest_lock_months: u8,
    /// Team cliff length in seconds.
    pub team_lock_period: i64,
    pub team_vested_months: u8,
}

impl Default for Tokenomics {
    fn default() -> Self {
        Self {
            total_supply: TOTAL_SUPPLY,
            team_share: TEAM_SHARE,
            community_share: COMMUNITY_SHARE,
            foundation_share: FOUNDATION_SHARE,
            ico_share: ICO_SHARE,
            operation_share: OPERATION_SHARE,
            team_lockfree_share: TEAM_LOCKFREE_SHARE,
            ico_vested_percentage: ICO_VESTED_PERCENTAGE,
            min_vest_lock_months: MIN_VEST_LOCK_MONTHS,
            team_lock_period: TEAM_LOCK_PERIOD,
            team_vested_months: TEAM_VESTED_MONTHS,
        }
    }
}

impl Tokenomics {
    pub const SIZE: usize =
        8 + // total_supply
        6 + // shares
        1 + // ico_vested_percentage
        1 + // min_vest_lock_months
        8 + // team_lock_period
        1;  // team_vested_months

    pub fn validate(&self) -> Result<(), IcoError> {
        let shares = self.team_share as u16
            + self.community_share as u16
            + self.foundation_share as u16
            + self.ico_share as u16
            + self.operation_share as u16;
        if self.total_supply == 0
            || shares != 100
            || self.team_lockfree_share > self.community_share
            || self.ico_vested_percentage > 100
            || self.min_vest_lock_months == 0
            || self.team_lock_period < 0
            || self.team_vested_months == 0
        {
            return Err(IcoError::InvalidConfig);
        }
        Ok(())
    }

    pub fn team_tokens(&self) -> Result<u64, IcoError> {
        percent_of(self.total_supply, self.team_share)
    }

    pub fn team_lockfree_tokens(&self) -> Result<u64, IcoError> {
        percent_of(self.total_supply, self.team_lockfree_share)
    }

    pub fn community_tokens(&self) -> Result<u64, IcoError> {
        percent_of(self.total_supply, self.community_share)
    }

    pub fn foundation_tokens(&self) -> Result<u64, IcoError> {
        percent_of(self.total_supply, self.foundation_share)
    }

    pub fn operation_tokens(&self) -> Result<u64, IcoError> {
        percent_of(self.total_supply, self.operation_share)
    }

    pub fn ico_cap(&self) -> Result<u64, IcoError> {
        percent_of(self.total_supply, self.ico_share)
    }

    /// Funds wallet seed: whatever is left after every other share (absorbs rounding dust).
    pub fn funds_tokens(&self) -> Result<u64, IcoError> {
        let consumed = [
            self.team_tokens()?,
            self.community_tokens()?,
            self.foundation_tokens()?,
            self.operation_tokens()?,
        ]
        .iter()
        .try_fold(0u64, |acc, v| acc.checked_add(*v))
        .ok_or(IcoError::MathOverflow)?;
        self.total_supply
            .checked_sub(consumed)
            .ok_or(IcoError::MathOverflow)
    }
}
