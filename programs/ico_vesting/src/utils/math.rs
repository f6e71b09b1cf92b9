use crate::error::IcoError;

/// floor(value * numerator / denominator), computed in u128.
pub fn mul_div(value: u64, numerator: u64, denominator: u64) -> Result<u64, IcoError> {
    if denominator == 0 {
        return Err(IcoError::MathOverflow);
    }
    let v = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(IcoError::MathOverflow)?
        / (denominator as u128);
    u64::try_from(v).map_err(|_| IcoError::MathOverflow)
}

/// floor(value * pct / 100).
pub fn percent_of(value: u64, pct: u8) -> Result<u64, IcoError> {
    mul_div(value, pct as u64, 100)
}

/// Linear vesting by whole months: floor(principal * min(elapsed, total) / total).
pub fn linear_vested(principal: u64, elapsed_months: u64, total_months: u64) -> Result<u64, IcoError> {
    if total_months == 0 {
        return Ok(principal);
    }
    mul_div(principal, elapsed_months.min(total_months), total_months)
}
