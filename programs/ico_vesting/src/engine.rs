//! Entry points of the token sale state machine.
//!
//! Every mutating operation checks all of its preconditions before touching any account,
//! so a failed call leaves balances, allocations, the cap counter and the pause flag
//! exactly as they were. Time is always an explicit `now_ts`; events are returned,
//! never emitted from here.

use anchor_lang::prelude::Pubkey;

use crate::error::IcoError;
use crate::events::TokenEvent;
use crate::state::{ledger, Allocation, Allowance, HolderAccount, TokenState, TransferPolicy};
use crate::utils::math::percent_of;

/// Receiving side of a transfer.
pub enum Recipient<'a> {
    /// The sending account itself. Nothing moves.
    Sender,
    Other(&'a mut HolderAccount),
}

/// Read-only view of a wallet's vesting position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingPosition {
    pub allocation: u64,
    pub vested: u64,
    pub released: u64,
    pub releasable: u64,
}

/// The holder's allocation record, if it has one.
fn allocation_for<'a>(holder: &HolderAccount, allocation: Option<&'a Allocation>) -> Option<&'a Allocation> {
    allocation.filter(|a| a.is_open() && a.beneficiary == holder.owner)
}

impl TokenState {
    pub fn total_supply(&self) -> u64 {
        self.tokenomics.total_supply
    }

    pub fn is_paused(&self) -> bool {
        self.gate.paused
    }

    pub fn owner(&self) -> Pubkey {
        self.gate.owner
    }

    /// Locked principal of a purchase allocation, or of the team lock for the team wallet.
    pub fn allocation_of(&self, holder: &HolderAccount, allocation: Option<&Allocation>) -> u64 {
        match holder.policy {
            TransferPolicy::TeamLocked => self.team.principal,
            TransferPolicy::Standard => allocation_for(holder, allocation)
                .map(|a| a.amount)
                .unwrap_or(0),
        }
    }

    pub fn vested_amount(
        &self,
        holder: &HolderAccount,
        allocation: Option<&Allocation>,
        now_ts: i64,
    ) -> Result<u64, IcoError> {
        match holder.policy {
            TransferPolicy::TeamLocked => self.team.vested_amount(now_ts),
            TransferPolicy::Standard => match allocation_for(holder, allocation) {
                Some(a) => a.vested_amount(now_ts),
                None => Ok(0),
            },
        }
    }

    pub fn releasable_amount(
        &self,
        holder: &HolderAccount,
        allocation: Option<&Allocation>,
        now_ts: i64,
    ) -> Result<u64, IcoError> {
        match holder.policy {
            TransferPolicy::TeamLocked => self.team.releasable_amount(now_ts),
            TransferPolicy::Standard => match allocation_for(holder, allocation) {
                Some(a) => a.releasable_amount(now_ts),
                None => Ok(0),
            },
        }
    }

    pub fn vesting_position(
        &self,
        holder: &HolderAccount,
        allocation: Option<&Allocation>,
        now_ts: i64,
    ) -> Result<VestingPosition, IcoError> {
        let released = match holder.policy {
            TransferPolicy::TeamLocked => self.team.released,
            TransferPolicy::Standard => allocation_for(holder, allocation)
                .map(|a| a.released)
                .unwrap_or(0),
        };
        Ok(VestingPosition {
            allocation: self.allocation_of(holder, allocation),
            vested: self.vested_amount(holder, allocation, now_ts)?,
            released,
            releasable: self.releasable_amount(holder, allocation, now_ts)?,
        })
    }

    pub fn is_ico_open(&self) -> bool {
        self.cap.is_ico_open()
    }

    pub fn is_purchase_within_cap(&self, already_committed: u64, amount: u64) -> bool {
        self.cap.is_purchase_within_cap(already_committed, amount)
    }

    pub fn allow_purchase(&self, amount: u64) -> bool {
        self.cap.allow_purchase(amount)
    }

    /// Standard accounts always pass; the team wallet is bounded by its lock.
    pub fn allow_transfer(&self, holder: &HolderAccount, amount: u64, now_ts: i64) -> Result<bool, IcoError> {
        match holder.policy {
            TransferPolicy::Standard => Ok(true),
            TransferPolicy::TeamLocked => self.team.allow_transfer(holder.balance, amount, now_ts),
        }
    }

    pub fn transfer(
        &mut self,
        from: &mut HolderAccount,
        to: Recipient<'_>,
        amount: u64,
        now_ts: i64,
    ) -> Result<Vec<TokenEvent>, IcoError> {
        self.gate.ensure_not_paused()?;
        let ev = self.move_tokens(from, to, amount, now_ts)?;
        Ok(vec![ev])
    }

    pub fn approve(
        &self,
        allowance: &mut Allowance,
        owner: Pubkey,
        spender: Pubkey,
        amount: u64,
    ) -> Result<Vec<TokenEvent>, IcoError> {
        self.gate.ensure_not_paused()?;
        if spender == Pubkey::default() || !allowance.is_for(&owner, &spender) {
            return Err(IcoError::InvalidPubkey);
        }
        allowance.approve(amount);
        Ok(vec![TokenEvent::Approval {
            owner,
            spender,
            value: amount,
        }])
    }

    pub fn transfer_from(
        &mut self,
        spender: Pubkey,
        allowance: &mut Allowance,
        from: &mut HolderAccount,
        to: Recipient<'_>,
        amount: u64,
        now_ts: i64,
    ) -> Result<Vec<TokenEvent>, IcoError> {
        self.gate.ensure_not_paused()?;
        allowance.check_spend(&from.owner, &spender, amount)?;
        let ev = self.move_tokens(from, to, amount, now_ts)?;
        allowance.spend(&from.owner, &spender, amount)?;
        Ok(vec![ev])
    }

    /// Public purchase: only the funds wallet may call it, once per beneficiary, within the cap.
    pub fn vested_transfer(
        &mut self,
        caller: Pubkey,
        funds: &mut HolderAccount,
        buyer: &mut HolderAccount,
        allocation: &mut Allocation,
        amount: u64,
        lock_months: u8,
        now_ts: i64,
    ) -> Result<Vec<TokenEvent>, IcoError> {
        self.gate.ensure_not_paused()?;
        if caller != self.wallets.funds || funds.owner != caller {
            return Err(IcoError::Unauthorized);
        }
        self.cap.check_purchase(amount)?;
        let events = self.allocate(funds, buyer, allocation, amount, lock_months, now_ts)?;
        self.cap.commit(amount)?;
        Ok(events)
    }

    /// Debits `amount` from `from`, credits the lock-free part to `buyer` and opens the rest
    /// as a vested allocation.
    fn allocate(
        &mut self,
        from: &mut HolderAccount,
        buyer: &mut HolderAccount,
        allocation: &mut Allocation,
        amount: u64,
        lock_months: u8,
        now_ts: i64,
    ) -> Result<Vec<TokenEvent>, IcoError> {
        // The offering source cannot buy from itself.
        if !buyer.is_open() || buyer.owner == from.owner {
            return Err(IcoError::InvalidPubkey);
        }
        allocation.check_allocate(amount, lock_months, self.tokenomics.min_vest_lock_months)?;
        // The team wallet already runs its own release clock.
        if buyer.policy == TransferPolicy::TeamLocked {
            return Err(IcoError::AlreadyAllocated);
        }
        from.check_debit(amount)?;

        let lockfree = percent_of(amount, 100 - self.tokenomics.ico_vested_percentage)?;
        let principal = amount - lockfree;
        buyer.check_credit(lockfree)?;

        from.debit(amount)?;
        buyer.credit(lockfree)?;
        allocation.start(buyer.owner, principal, now_ts, lock_months)?;

        Ok(vec![
            TokenEvent::Transfer {
                from: from.owner,
                to: buyer.owner,
                value: lockfree,
            },
            TokenEvent::VestTransfer {
                from: from.owner,
                to: buyer.owner,
                amount: principal,
                lock_months,
            },
        ])
    }

    /// Moves vested tokens of `holder` into its balance. Nothing releasable is a silent no-op.
    pub fn release(
        &mut self,
        holder: &mut HolderAccount,
        allocation: Option<&mut Allocation>,
        now_ts: i64,
    ) -> Result<Vec<TokenEvent>, IcoError> {
        self.gate.ensure_not_paused()?;
        let releasable = self.releasable_amount(holder, allocation.as_deref(), now_ts)?;
        if releasable == 0 {
            return Ok(Vec::new());
        }
        holder.check_credit(releasable)?;

        let released = match (holder.policy, allocation) {
            (TransferPolicy::TeamLocked, _) => self.team.release(now_ts)?,
            (TransferPolicy::Standard, Some(a)) => a.release(now_ts)?,
            (TransferPolicy::Standard, None) => 0,
        };
        holder.credit(released)?;

        Ok(vec![
            TokenEvent::Release {
                to: holder.owner,
                amount: released,
            },
            TokenEvent::mint(holder.owner, released),
        ])
    }

    pub fn pause(&mut self, caller: Pubkey) -> Result<Vec<TokenEvent>, IcoError> {
        Ok(vec![self.gate.pause(&caller)?])
    }

    pub fn unpause(&mut self, caller: Pubkey) -> Result<Vec<TokenEvent>, IcoError> {
        Ok(vec![self.gate.unpause(&caller)?])
    }

    pub fn transfer_ownership(
        &mut self,
        caller: Pubkey,
        new_owner: Pubkey,
    ) -> Result<Vec<TokenEvent>, IcoError> {
        Ok(vec![self.gate.transfer_ownership(&caller, new_owner)?])
    }

    /// Ledger transfer with the team predicate applied to the sender. No pause check.
    fn move_tokens(
        &mut self,
        from: &mut HolderAccount,
        to: Recipient<'_>,
        amount: u64,
        now_ts: i64,
    ) -> Result<TokenEvent, IcoError> {
        if amount == 0 {
            return Err(IcoError::ZeroAmount);
        }
        let team_sender = from.policy == TransferPolicy::TeamLocked;
        if team_sender && !self.allow_transfer(from, amount, now_ts)? {
            return Err(IcoError::InsufficientBalance);
        }
        match to {
            Recipient::Sender => {
                from.check_debit(amount)?;
                Ok(TokenEvent::Transfer {
                    from: from.owner,
                    to: from.owner,
                    value: amount,
                })
            }
            Recipient::Other(to) => {
                let ev = ledger::transfer(from, to, amount)?;
                if team_sender {
                    self.team.record_outgoing(amount);
                }
                Ok(ev)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;
    use crate::state::{GenesisWallets, Tokenomics};
    use std::collections::BTreeMap;

    const START: i64 = 1_700_000_000;
    const MONTH: i64 = 30 * SECONDS_PER_DAY;

    /// In-memory stand-in for the program's accounts. A failed call restores every account
    /// it touched, the way a reverted transaction would.
    struct Sim {
        st: TokenState,
        w: GenesisWallets,
        owner: Pubkey,
        t: Tokenomics,
        holders: BTreeMap<Pubkey, HolderAccount>,
        allocations: BTreeMap<Pubkey, Allocation>,
        allowances: BTreeMap<(Pubkey, Pubkey), Allowance>,
    }

    impl Sim {
        fn new() -> Self {
            let t = Tokenomics::default();
            let w = GenesisWallets {
                funds: Pubkey::new_unique(),
                team: Pubkey::new_unique(),
                community: Pubkey::new_unique(),
                foundation: Pubkey::new_unique(),
                reserve: Pubkey::new_unique(),
            };
            let owner = w.funds;
            let (st, seeded, _) = TokenState::genesis(owner, w, START, t).unwrap();
            let holders = seeded.into_iter().map(|h| (h.owner, h)).collect();
            Self {
                st,
                w,
                owner,
                t,
                holders,
                allocations: BTreeMap::new(),
                allowances: BTreeMap::new(),
            }
        }

        /// Existing holder account, or a freshly opened one.
        fn take(&mut self, owner: Pubkey) -> HolderAccount {
            self.holders.remove(&owner).unwrap_or_else(|| {
                let mut h = HolderAccount::default();
                h.open(owner, 0);
                h
            })
        }

        fn keep(&mut self, saved: &BTreeMap<Pubkey, HolderAccount>, h: HolderAccount, ok: bool) {
            if ok {
                self.holders.insert(h.owner, h);
            } else if let Some(prev) = saved.get(&h.owner) {
                self.holders.insert(h.owner, prev.clone());
            }
        }

        fn balance(&self, owner: &Pubkey) -> u64 {
            self.holders.get(owner).map(|h| h.balance).unwrap_or(0)
        }

        fn holder(&self, owner: &Pubkey) -> HolderAccount {
            self.holders.get(owner).cloned().unwrap_or_default()
        }

        fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64, now: i64) -> Result<Vec<TokenEvent>, IcoError> {
            let saved = self.holders.clone();
            let state = self.st.clone();
            let mut src = self.take(from);
            let res = if from == to {
                self.st.transfer(&mut src, Recipient::Sender, amount, now)
            } else {
                let mut dst = self.take(to);
                let res = self.st.transfer(&mut src, Recipient::Other(&mut dst), amount, now);
                self.keep(&saved, dst, res.is_ok());
                res
            };
            self.keep(&saved, src, res.is_ok());
            if res.is_err() {
                self.st = state;
            }
            res
        }

        fn purchase_as(
            &mut self,
            caller: Pubkey,
            to: Pubkey,
            amount: u64,
            lock_months: u8,
            now: i64,
        ) -> Result<Vec<TokenEvent>, IcoError> {
            let saved = self.holders.clone();
            let state = self.st.clone();
            let mut funds = self.take(caller);
            let mut buyer = self.take(to);
            let mut alloc = self.allocations.get(&to).cloned().unwrap_or_default();
            let res = self.st.vested_transfer(
                caller,
                &mut funds,
                &mut buyer,
                &mut alloc,
                amount,
                lock_months,
                now,
            );
            let ok = res.is_ok();
            self.keep(&saved, buyer, ok);
            self.keep(&saved, funds, ok);
            if ok {
                self.allocations.insert(to, alloc);
            } else {
                self.st = state;
            }
            res
        }

        fn purchase(&mut self, to: Pubkey, amount: u64, lock_months: u8, now: i64) -> Result<Vec<TokenEvent>, IcoError> {
            self.purchase_as(self.w.funds, to, amount, lock_months, now)
        }

        fn release(&mut self, who: Pubkey, now: i64) -> Result<Vec<TokenEvent>, IcoError> {
            let saved = self.holders.clone();
            let state = self.st.clone();
            let mut holder = self.take(who);
            let mut alloc = self.allocations.get(&who).cloned();
            let res = self.st.release(&mut holder, alloc.as_mut(), now);
            let ok = res.is_ok();
            self.keep(&saved, holder, ok);
            if ok {
                if let Some(a) = alloc {
                    self.allocations.insert(who, a);
                }
            } else {
                self.st = state;
            }
            res
        }

        fn approve(&mut self, owner: Pubkey, spender: Pubkey, amount: u64) -> Result<Vec<TokenEvent>, IcoError> {
            let mut a = self
                .allowances
                .get(&(owner, spender))
                .cloned()
                .unwrap_or_default();
            a.open(owner, spender, 0);
            let res = self.st.approve(&mut a, owner, spender, amount);
            if res.is_ok() {
                self.allowances.insert((owner, spender), a);
            }
            res
        }

        fn allowance(&self, owner: Pubkey, spender: Pubkey) -> u64 {
            self.allowances
                .get(&(owner, spender))
                .map(|a| a.amount)
                .unwrap_or(0)
        }

        fn transfer_from(
            &mut self,
            spender: Pubkey,
            from: Pubkey,
            to: Pubkey,
            amount: u64,
            now: i64,
        ) -> Result<Vec<TokenEvent>, IcoError> {
            let saved = self.holders.clone();
            let state = self.st.clone();
            let mut allowance = self
                .allowances
                .get(&(from, spender))
                .cloned()
                .unwrap_or_default();
            let mut src = self.take(from);
            let res = if from == to {
                self.st
                    .transfer_from(spender, &mut allowance, &mut src, Recipient::Sender, amount, now)
            } else {
                let mut dst = self.take(to);
                let res = self.st.transfer_from(
                    spender,
                    &mut allowance,
                    &mut src,
                    Recipient::Other(&mut dst),
                    amount,
                    now,
                );
                self.keep(&saved, dst, res.is_ok());
                res
            };
            self.keep(&saved, src, res.is_ok());
            if res.is_ok() {
                self.allowances.insert((from, spender), allowance);
            } else {
                self.st = state;
            }
            res
        }

        fn allocation_of(&self, who: &Pubkey) -> u64 {
            self.st
                .allocation_of(&self.holder(who), self.allocations.get(who))
        }

        fn vested(&self, who: &Pubkey, now: i64) -> u64 {
            self.st
                .vested_amount(&self.holder(who), self.allocations.get(who), now)
                .unwrap()
        }

        fn releasable(&self, who: &Pubkey, now: i64) -> u64 {
            self.st
                .releasable_amount(&self.holder(who), self.allocations.get(who), now)
                .unwrap()
        }

        fn allow_transfer(&self, who: &Pubkey, amount: u64, now: i64) -> bool {
            self.st.allow_transfer(&self.holder(who), amount, now).unwrap()
        }

        /// Spendable balances plus every locked, unreleased principal.
        fn accounted_supply(&self) -> u128 {
            let balances: u128 = self.holders.values().map(|h| h.balance as u128).sum();
            let locked: u128 = self
                .allocations
                .values()
                .map(|a| a.unreleased() as u128)
                .sum();
            balances + locked + self.st.team.unreleased() as u128
        }

        fn assert_conserved(&self) {
            assert_eq!(self.accounted_supply(), self.st.total_supply() as u128);
        }
    }

    #[test]
    fn purchase_splits_lockfree_and_vested() {
        let mut s = Sim::new();
        let buyer = Pubkey::new_unique();
        let events = s.purchase(buyer, 500, 3, START).unwrap();

        assert_eq!(s.balance(&buyer), 75);
        assert_eq!(s.allocation_of(&buyer), 425);
        assert_eq!(s.balance(&s.w.funds), s.t.ico_cap().unwrap() - 500);
        assert_eq!(s.st.cap.committed, 500);
        assert_eq!(
            events,
            vec![
                TokenEvent::Transfer {
                    from: s.w.funds,
                    to: buyer,
                    value: 75
                },
                TokenEvent::VestTransfer {
                    from: s.w.funds,
                    to: buyer,
                    amount: 425,
                    lock_months: 3
                },
            ]
        );
        s.assert_conserved();
    }

    #[test]
    fn single_token_purchase_is_all_locked() {
        let mut s = Sim::new();
        let buyer = Pubkey::new_unique();
        s.purchase(buyer, 1, 3, START).unwrap();
        assert_eq!(s.allocation_of(&buyer), 1);
        assert_eq!(s.balance(&buyer), 0);
        s.assert_conserved();
    }

    #[test]
    fn second_purchase_for_same_buyer_fails() {
        let mut s = Sim::new();
        let buyer = Pubkey::new_unique();
        s.purchase(buyer, 500, 3, START).unwrap();
        assert!(matches!(
            s.purchase(buyer, 500, 3, START),
            Err(IcoError::AlreadyAllocated)
        ));
        assert!(matches!(
            s.purchase(buyer, 1, 12, START),
            Err(IcoError::AlreadyAllocated)
        ));
        assert_eq!(s.st.cap.committed, 500);
        assert_eq!(s.balance(&buyer), 75);
    }

    #[test]
    fn purchase_preconditions() {
        let mut s = Sim::new();
        let buyer = Pubkey::new_unique();
        let team_tokens = s.t.team_tokens().unwrap();
        assert!(matches!(
            s.purchase_as(s.w.team, buyer, team_tokens, 3, START),
            Err(IcoError::Unauthorized)
        ));
        assert!(matches!(
            s.purchase(buyer, team_tokens, 2, START),
            Err(IcoError::BelowMinimumLock)
        ));
        assert!(matches!(s.purchase(buyer, 0, 3, START), Err(IcoError::ZeroAmount)));
        assert!(matches!(
            s.purchase(s.w.team, 10, 3, START),
            Err(IcoError::AlreadyAllocated)
        ));
        assert!(matches!(
            s.purchase(Pubkey::default(), 10, 3, START),
            Err(IcoError::InvalidPubkey)
        ));
        assert!(matches!(
            s.purchase(s.w.funds, 10, 3, START),
            Err(IcoError::InvalidPubkey)
        ));
        assert_eq!(s.st.cap.committed, 0);
        assert!(s.allocations.is_empty());
        s.assert_conserved();
    }

    #[test]
    fn exact_remaining_cap_closes_sale() {
        let mut s = Sim::new();
        let cap = s.t.ico_cap().unwrap();
        s.purchase(Pubkey::new_unique(), 1, 3, START).unwrap();
        assert!(s.st.is_ico_open());

        let b = Pubkey::new_unique();
        let remaining = cap - s.st.cap.committed;
        assert!(matches!(
            s.purchase(b, remaining + 1, 3, START),
            Err(IcoError::CapExceeded)
        ));
        s.purchase(b, remaining, 3, START).unwrap();
        assert!(!s.st.is_ico_open());
        assert!(!s.st.allow_purchase(1));
        assert!(matches!(
            s.purchase(Pubkey::new_unique(), 1, 3, START),
            Err(IcoError::CapExceeded)
        ));
        assert_eq!(s.st.cap.committed, cap);
        s.assert_conserved();
    }

    #[test]
    fn funds_shortfall_is_rejected() {
        let mut s = Sim::new();
        let cap = s.t.ico_cap().unwrap();
        s.transfer(s.w.funds, Pubkey::new_unique(), 10, START).unwrap();
        let buyer = Pubkey::new_unique();
        assert!(matches!(
            s.purchase(buyer, cap - 5, 3, START),
            Err(IcoError::InsufficientBalance)
        ));
        assert_eq!(s.st.cap.committed, 0);
        assert_eq!(s.allocation_of(&buyer), 0);
    }

    #[test]
    fn dust_recipients_do_not_close_the_sale() {
        let mut s = Sim::new();
        for _ in 0..500 {
            s.transfer(s.w.community, Pubkey::new_unique(), 1, START)
                .unwrap();
        }
        assert!(s.holders.len() > 500);

        let buyers: Vec<Pubkey> = (0..200).map(|_| Pubkey::new_unique()).collect();
        for buyer in &buyers {
            assert!(s.st.is_ico_open());
            s.purchase(*buyer, 1_000, 3, START).unwrap();
        }
        assert_eq!(s.allocations.len(), buyers.len());
        assert_eq!(s.st.cap.committed, 200 * 1_000);
        s.assert_conserved();
    }

    #[test]
    fn buyer_release_after_cliff() {
        let mut s = Sim::new();
        let buyer = Pubkey::new_unique();
        s.purchase(buyer, 100, 8, START).unwrap();

        let before_cliff = START + 8 * MONTH - 3 * SECONDS_PER_DAY;
        assert_eq!(s.vested(&buyer, before_cliff), 0);
        assert!(s.release(buyer, before_cliff).unwrap().is_empty());

        let after = START + 8 * MONTH + 3 * SECONDS_PER_DAY;
        assert_eq!(s.vested(&buyer, after), 85);
        let events = s.release(buyer, after).unwrap();
        assert_eq!(
            events,
            vec![
                TokenEvent::Release {
                    to: buyer,
                    amount: 85
                },
                TokenEvent::mint(buyer, 85),
            ]
        );
        assert_eq!(s.balance(&buyer), 100);
        assert!(s.release(buyer, after).unwrap().is_empty());
        s.assert_conserved();
    }

    #[test]
    fn release_without_allocation_is_noop() {
        let mut s = Sim::new();
        let before = s.balance(&s.w.funds);
        assert!(s.release(s.w.funds, START).unwrap().is_empty());
        assert_eq!(s.balance(&s.w.funds), before);
        let stranger = Pubkey::new_unique();
        assert_eq!(s.releasable(&stranger, START), 0);
        assert_eq!(s.releasable(&s.w.community, START), 0);
        assert_eq!(s.vested(&stranger, START), 0);
    }

    #[test]
    fn foreign_allocation_is_ignored() {
        let mut s = Sim::new();
        let buyer = Pubkey::new_unique();
        s.purchase(buyer, 100, 3, START).unwrap();
        let at_cliff = START + 3 * MONTH;

        let mut other = s.holder(&s.w.foundation);
        let mut foreign = s.allocations[&buyer].clone();
        assert!(s
            .st
            .release(&mut other, Some(&mut foreign), at_cliff)
            .unwrap()
            .is_empty());
        assert_eq!(foreign.released, 0);
    }

    #[test]
    fn team_transfer_bounded_by_lockfree_before_cliff() {
        let mut s = Sim::new();
        let lockfree = s.t.team_lockfree_tokens().unwrap();
        let to = Pubkey::new_unique();

        assert!(!s.allow_transfer(&s.w.team, lockfree + 1, START));
        assert!(s.allow_transfer(&s.w.community, 1, START));
        assert!(s.allow_transfer(&s.w.foundation, 1, START));

        assert!(matches!(
            s.transfer(s.w.team, to, lockfree + 1, START),
            Err(IcoError::InsufficientBalance)
        ));
        s.transfer(s.w.team, to, lockfree - 1, START).unwrap();
        assert_eq!(s.balance(&to), lockfree - 1);
        assert_eq!(s.st.team.sent_since_genesis, lockfree - 1);
    }

    #[test]
    fn team_self_transfer_keeps_lockfree_ceiling() {
        let mut s = Sim::new();
        let lockfree = s.t.team_lockfree_tokens().unwrap();
        let events = s.transfer(s.w.team, s.w.team, lockfree, START).unwrap();
        assert_eq!(
            events,
            vec![TokenEvent::Transfer {
                from: s.w.team,
                to: s.w.team,
                value: lockfree
            }]
        );
        assert_eq!(s.st.team.sent_since_genesis, 0);
        assert_eq!(s.balance(&s.w.team), lockfree);

        let to = Pubkey::new_unique();
        s.transfer(s.w.team, to, lockfree, START).unwrap();
        assert_eq!(s.balance(&to), lockfree);
    }

    #[test]
    fn self_transfer_still_checks_balance() {
        let mut s = Sim::new();
        let who = Pubkey::new_unique();
        s.transfer(s.w.community, who, 10, START).unwrap();
        assert!(matches!(
            s.transfer(who, who, 11, START),
            Err(IcoError::InsufficientBalance)
        ));
        assert!(matches!(s.transfer(who, who, 0, START), Err(IcoError::ZeroAmount)));
        s.transfer(who, who, 10, START).unwrap();
        assert_eq!(s.balance(&who), 10);
    }

    #[test]
    fn team_cannot_respend_received_tokens_before_cliff() {
        let mut s = Sim::new();
        let lockfree = s.t.team_lockfree_tokens().unwrap();
        let to = Pubkey::new_unique();
        s.transfer(s.w.team, to, lockfree / 2, START).unwrap();
        assert!(!s.allow_transfer(&s.w.team, lockfree, START));

        // Topping up the team wallet does not lift the pre-cliff ceiling.
        s.transfer(s.w.community, s.w.team, lockfree, START).unwrap();
        assert!(matches!(
            s.transfer(s.w.team, to, lockfree / 2 + 1, START),
            Err(IcoError::InsufficientBalance)
        ));
        s.transfer(s.w.team, to, lockfree / 2, START).unwrap();
    }

    #[test]
    fn team_release_half_then_full() {
        let mut s = Sim::new();
        let team_tokens = s.t.team_tokens().unwrap();
        let lockfree = s.t.team_lockfree_tokens().unwrap();
        let after_cliff = START + s.t.team_lock_period + 1;

        assert_eq!(s.releasable(&s.w.team, START), 0);
        assert_eq!(s.vested(&s.w.team, after_cliff - 2), 0);

        let half = after_cliff + 3 * MONTH;
        assert_eq!(s.releasable(&s.w.team, half), team_tokens / 2);
        let events = s.release(s.w.team, half).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(s.releasable(&s.w.team, half), 0);
        assert!(s.release(s.w.team, half).unwrap().is_empty());

        let end = START + s.t.team_lock_period + 6 * MONTH;
        s.release(s.w.team, end).unwrap();
        assert_eq!(s.balance(&s.w.team), team_tokens + lockfree);
        assert!(s.release(s.w.team, end).unwrap().is_empty());
        s.assert_conserved();
    }

    #[test]
    fn team_can_spend_balance_after_cliff() {
        let mut s = Sim::new();
        let lockfree = s.t.team_lockfree_tokens().unwrap();
        let end = START + s.t.team_lock_period + 6 * MONTH;
        s.release(s.w.team, end).unwrap();
        let to = Pubkey::new_unique();
        let all = s.balance(&s.w.team);
        assert!(all > lockfree);
        s.transfer(s.w.team, to, all, end).unwrap();
        assert_eq!(s.balance(&s.w.team), 0);
    }

    #[test]
    fn pause_blocks_mutations_and_unpause_restores() {
        let mut s = Sim::new();
        let owner = s.owner;
        s.transfer(owner, owner, 1, START).unwrap();

        s.st.pause(owner).unwrap();
        assert!(matches!(s.transfer(owner, owner, 1, START), Err(IcoError::Paused)));
        let buyer = Pubkey::new_unique();
        assert!(matches!(s.purchase(buyer, 1, 3, START), Err(IcoError::Paused)));
        assert!(matches!(s.release(s.w.team, START), Err(IcoError::Paused)));
        assert!(matches!(s.approve(owner, buyer, 1), Err(IcoError::Paused)));
        // reads stay available
        assert_eq!(s.balance(&buyer), 0);
        assert!(s.st.is_ico_open());

        s.st.unpause(owner).unwrap();
        s.transfer(owner, owner, 1, START).unwrap();
        s.purchase(buyer, 1, 3, START).unwrap();
    }

    #[test]
    fn non_owner_cannot_pause() {
        let mut s = Sim::new();
        assert!(matches!(s.st.pause(s.w.team), Err(IcoError::Unauthorized)));
        assert!(!s.st.is_paused());
    }

    #[test]
    fn transfer_from_spends_allowance() {
        let mut s = Sim::new();
        let spender = Pubkey::new_unique();
        let to = Pubkey::new_unique();
        s.approve(s.w.foundation, spender, 50).unwrap();
        assert!(matches!(
            s.transfer_from(spender, s.w.foundation, to, 51, START),
            Err(IcoError::InsufficientAllowance)
        ));
        s.transfer_from(spender, s.w.foundation, to, 30, START).unwrap();
        assert_eq!(s.balance(&to), 30);
        assert_eq!(s.allowance(s.w.foundation, spender), 20);

        let stranger = Pubkey::new_unique();
        assert!(matches!(
            s.transfer_from(stranger, s.w.foundation, to, 1, START),
            Err(IcoError::InsufficientAllowance)
        ));
    }

    #[test]
    fn approve_rejects_default_spender() {
        let mut s = Sim::new();
        assert!(matches!(
            s.approve(s.w.foundation, Pubkey::default(), 1),
            Err(IcoError::InvalidPubkey)
        ));
    }

    #[test]
    fn transfer_from_team_respects_lock() {
        let mut s = Sim::new();
        let lockfree = s.t.team_lockfree_tokens().unwrap();
        let spender = Pubkey::new_unique();
        let to = Pubkey::new_unique();
        s.approve(s.w.team, spender, lockfree * 2).unwrap();
        assert!(matches!(
            s.transfer_from(spender, s.w.team, to, lockfree + 1, START),
            Err(IcoError::InsufficientBalance)
        ));
        assert_eq!(s.allowance(s.w.team, spender), lockfree * 2);
        s.transfer_from(spender, s.w.team, to, lockfree, START).unwrap();
        assert_eq!(s.st.team.sent_since_genesis, lockfree);
    }

    #[test]
    fn vesting_quote_reports_position() {
        let mut s = Sim::new();
        let buyer = Pubkey::new_unique();
        s.purchase(buyer, 500, 3, START).unwrap();
        let at_cliff = START + 3 * MONTH;
        let q = s
            .st
            .vesting_position(&s.holder(&buyer), s.allocations.get(&buyer), at_cliff)
            .unwrap();
        assert_eq!(
            q,
            VestingPosition {
                allocation: 425,
                vested: 425,
                released: 0,
                releasable: 425
            }
        );
        s.release(buyer, at_cliff).unwrap();
        let q = s
            .st
            .vesting_position(&s.holder(&buyer), s.allocations.get(&buyer), at_cliff)
            .unwrap();
        assert_eq!(q.released, 425);
        assert_eq!(q.releasable, 0);
    }
}
