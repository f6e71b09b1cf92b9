use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::IcoError;
use crate::events::TokenEvent;
use crate::state::{AccessGate, CapController, HolderAccount, TeamLock, Tokenomics, TransferPolicy};

/// Wallets fixed at genesis.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenesisWallets {
    /// Offering source: the only caller allowed to make vested transfers.
    pub funds: Pubkey,
    pub team: Pubkey,
    pub community: Pubkey,
    pub foundation: Pubkey,
    /// Holds the operation share (the program's own state account).
    pub reserve: Pubkey,
}

impl GenesisWallets {
    pub const SIZE: usize = 32 * 5;

    /// Genesis order: funds, team, community, foundation, reserve.
    pub fn all(&self) -> [Pubkey; 5] {
        [self.funds, self.team, self.community, self.foundation, self.reserve]
    }

    pub fn validate(&self) -> Result<(), IcoError> {
        let all = self.all();
        if all.iter().any(|k| *k == Pubkey::default()) {
            return Err(IcoError::InvalidPubkey);
        }
        for (i, a) in all.iter().enumerate() {
            if all[..i].contains(a) {
                return Err(IcoError::InvalidConfig);
            }
        }
        Ok(())
    }
}

/// Engine state PDA: every process-wide store of the token sale. Balances, allocations and
/// allowances live in their own per-address PDAs.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct TokenState {
    pub bump: u8,
    pub tokenomics: Tokenomics,
    pub wallets: GenesisWallets,
    pub gate: AccessGate,
    pub cap: CapController,
    pub team: TeamLock,
}

impl TokenState {
    pub const SPACE: usize = 8 + // discriminator
        1 + // bump
        Tokenomics::SIZE +
        GenesisWallets::SIZE +
        AccessGate::SIZE +
        CapController::SIZE +
        TeamLock::SIZE;

    /// Builds the state and the five seeded holder accounts (in `GenesisWallets::all` order)
    /// from the fixed split, and locks the team principal.
    pub fn genesis(
        owner: Pubkey,
        wallets: GenesisWallets,
        start_ts: i64,
        tokenomics: Tokenomics,
    ) -> Result<(Self, [HolderAccount; 5], Vec<TokenEvent>), IcoError> {
        tokenomics.validate()?;
        wallets.validate()?;
        if owner == Pubkey::default() {
            return Err(IcoError::InvalidPubkey);
        }
        if start_ts <= 0 {
            return Err(IcoError::InvalidConfig);
        }

        let team_lockfree = tokenomics.team_lockfree_tokens()?;
        let community = tokenomics
            .community_tokens()?
            .checked_sub(team_lockfree)
            .ok_or(IcoError::InvalidConfig)?;
        let amounts = [
            tokenomics.funds_tokens()?,
            team_lockfree,
            community,
            tokenomics.foundation_tokens()?,
            tokenomics.operation_tokens()?,
        ];

        let mut events = Vec::with_capacity(amounts.len());
        let mut holders = wallets.all().map(|owner| {
            let policy = if owner == wallets.team {
                TransferPolicy::TeamLocked
            } else {
                TransferPolicy::Standard
            };
            HolderAccount::new(owner, policy)
        });
        for (holder, amount) in holders.iter_mut().zip(amounts) {
            if amount == 0 {
                continue;
            }
            holder.credit(amount)?;
            events.push(TokenEvent::mint(holder.owner, amount));
        }

        let team = TeamLock {
            wallet: wallets.team,
            principal: tokenomics.team_tokens()?,
            lockfree_tokens: team_lockfree,
            start_ts,
            lock_period: tokenomics.team_lock_period,
            vested_months: tokenomics.team_vested_months,
            released: 0,
            sent_since_genesis: 0,
        };

        let state = Self {
            bump: 0,
            tokenomics,
            wallets,
            gate: AccessGate::new(owner),
            cap: CapController::new(tokenomics.ico_cap()?),
            team,
        };
        Ok((state, holders, events))
    }
}
