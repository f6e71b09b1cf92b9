//! Program-wide constants (genesis tokenomics and PDA seeds).

/// Token decimals (smallest unit = 10^-8 token).
pub const DECIMALS: u8 = 8;

/// Fixed total supply: 1 billion tokens in smallest units.
pub const TOTAL_SUPPLY: u64 = 1_000_000_000 * 10u64.pow(DECIMALS as u32);

/// Supply shares in percent. They must add up to 100.
pub const TEAM_SHARE: u8 = 10;
pub const COMMUNITY_SHARE: u8 = 10;
pub const FOUNDATION_SHARE: u8 = 10;
pub const ICO_SHARE: u8 = 30;
pub const OPERATION_SHARE: u8 = 40;

/// Part of the supply the team can move from genesis, carved out of the community share.
pub const TEAM_LOCKFREE_SHARE: u8 = 2;

/// Percent of a purchase that is held back and vested.
pub const ICO_VESTED_PERCENTAGE: u8 = 85;

/// Shortest lock a purchaser may choose.
pub const MIN_VEST_LOCK_MONTHS: u8 = 3;

/// Team cliff: no team vesting before `start_ts + TEAM_LOCK_PERIOD`.
pub const TEAM_LOCK_PERIOD: i64 = 365 * SECONDS_PER_DAY;

/// Team linear vesting window after the cliff, in months.
pub const TEAM_VESTED_MONTHS: u8 = 6;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Vesting months are fixed 30-day units, not calendar months.
pub const DAYS_PER_MONTH: i64 = 30;

/// Seconds in one vesting month.
pub const SECONDS_PER_MONTH: i64 = DAYS_PER_MONTH * SECONDS_PER_DAY;

/// PDA seed of the engine state account.
pub const TOKEN_STATE_SEED: &[u8] = b"token_state";

/// PDA seed of a per-address balance account: `[HOLDER_SEED, owner]`.
pub const HOLDER_SEED: &[u8] = b"holder";

/// PDA seed of a per-beneficiary vested allocation: `[ALLOCATION_SEED, beneficiary]`.
pub const ALLOCATION_SEED: &[u8] = b"allocation";

/// PDA seed of a spending approval: `[ALLOWANCE_SEED, owner, spender]`.
pub const ALLOWANCE_SEED: &[u8] = b"allowance";
