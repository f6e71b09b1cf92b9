use anchor_lang::prelude::*;

/// Event produced by a core operation. Handlers forward these to the log with `emit_all`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenEvent {
    Transfer {
        from: Pubkey,
        to: Pubkey,
        value: u64,
    },
    VestTransfer {
        from: Pubkey,
        to: Pubkey,
        amount: u64,
        lock_months: u8,
    },
    Release {
        to: Pubkey,
        amount: u64,
    },
    Approval {
        owner: Pubkey,
        spender: Pubkey,
        value: u64,
    },
    Paused {
        owner: Pubkey,
    },
    Unpaused {
        owner: Pubkey,
    },
    OwnershipTransferred {
        previous_owner: Pubkey,
        new_owner: Pubkey,
    },
}

impl TokenEvent {
    /// Tokens entering circulation from the locked pool are sent from the zero address.
    pub fn mint(to: Pubkey, value: u64) -> Self {
        TokenEvent::Transfer {
            from: Pubkey::default(),
            to,
            value,
        }
    }
}

pub fn emit_all(events: &[TokenEvent]) {
    for ev in events {
        match *ev {
            TokenEvent::Transfer { from, to, value } => emit!(Transfer { from, to, value }),
            TokenEvent::VestTransfer {
                from,
                to,
                amount,
                lock_months,
            } => emit!(VestTransfer {
                from,
                to,
                amount,
                lock_months,
            }),
            TokenEvent::Release { to, amount } => emit!(Release { to, amount }),
            TokenEvent::Approval {
                owner,
                spender,
                value,
            } => emit!(Approval {
                owner,
                spender,
                value,
            }),
            TokenEvent::Paused { owner } => emit!(Paused { owner }),
            TokenEvent::Unpaused { owner } => emit!(Unpaused { owner }),
            TokenEvent::OwnershipTransferred {
                previous_owner,
                new_owner,
            } => emit!(OwnershipTransferred {
                previous_owner,
                new_owner,
            }),
        }
    }
}

#[event]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub value: u64,
}

#[event]
pub struct VestTransfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub lock_months: u8,
}

#[event]
pub struct Release {
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Approval {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub value: u64,
}

#[event]
pub struct Paused {
    pub owner: Pubkey,
}

#[event]
pub struct Unpaused {
    pub owner: Pubkey,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

/// Snapshot of a wallet's vesting position at the current clock.
#[event]
pub struct VestingQuote {
    pub wallet: Pubkey,
    pub allocation: u64,
    pub vested_amount: u64,
    pub released_amount: u64,
    pub releasable: u64,
}
