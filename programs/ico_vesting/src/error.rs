use anchor_lang::prelude::*;

/// Error codes for the token sale program.
#[error_code]
pub enum IcoError {
    #[msg("Insufficient balance or transfer exceeds the unlocked ceiling")]
    InsufficientBalance,

    #[msg("Purchase would exceed the ICO cap")]
    CapExceeded,

    #[msg("Address already holds a vested allocation")]
    AlreadyAllocated,

    #[msg("Lock period is below the minimum vesting lock")]
    BelowMinimumLock,

    #[msg("Amount must be > 0")]
    ZeroAmount,

    #[msg("Unauthorized caller")]
    Unauthorized,

    #[msg("Token is paused")]
    Paused,

    #[msg("Token is not paused")]
    NotPaused,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Math overflow")]
    MathOverflow,
}
