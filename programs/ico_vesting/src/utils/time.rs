//! Fixed-duration vesting clock.
//! - one vesting month is 30 days (no calendar months, no day-of-month clamping)
//! - months_between = whole 30-day units elapsed since `since_ts`, 0 before it
//! - cliff boundaries are inclusive: `now_ts == cliff_ts` counts as passed

use crate::constants::SECONDS_PER_MONTH;
use crate::error::IcoError;

/// Whole vesting months elapsed from `since_ts` to `now_ts`. Zero if `now_ts < since_ts`.
pub fn months_between(now_ts: i64, since_ts: i64) -> u64 {
    if now_ts <= since_ts {
        return 0;
    }
    // Both operands positive after the guard above.
    ((now_ts - since_ts) / SECONDS_PER_MONTH) as u64
}

/// Timestamp `months` vesting months after `start_ts`.
pub fn add_months(start_ts: i64, months: u64) -> Result<i64, IcoError> {
    let months = i64::try_from(months).map_err(|_| IcoError::MathOverflow)?;
    let span = months
        .checked_mul(SECONDS_PER_MONTH)
        .ok_or(IcoError::MathOverflow)?;
    start_ts.checked_add(span).ok_or(IcoError::MathOverflow)
}

/// Timestamp `secs` seconds after `start_ts`.
pub fn add_seconds(start_ts: i64, secs: i64) -> Result<i64, IcoError> {
    start_ts.checked_add(secs).ok_or(IcoError::MathOverflow)
}

/// True once `now_ts` reached `boundary_ts` (inclusive).
pub fn is_at_or_after(now_ts: i64, boundary_ts: i64) -> bool {
    now_ts >= boundary_ts
}
