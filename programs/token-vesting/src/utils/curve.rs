//! Linear vesting curve.
//!
//! - vested(now) = total_allocation * elapsed / duration, floored
//! - 0 before start, exactly total_allocation once elapsed >= duration
//! - integer arithmetic only; multiply in u128 before dividing

use crate::error::VestingError;

/// Cumulative vested amount at `now` for a schedule of `total_allocation`
/// tokens that started vesting at `start_ts` over `duration` seconds.
pub fn vested_amount(
    total_allocation: u64,
    now: i64,
    start_ts: i64,
    duration: i64,
) -> Result<u64, VestingError> {
    if duration <= 0 {
        return Err(VestingError::InvalidConfig);
    }
    if now <= start_ts {
        return Ok(0);
    }
    let elapsed = now - start_ts;
    if elapsed >= duration {
        return Ok(total_allocation);
    }
    let vested = (total_allocation as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        / duration as u128;
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

/// Payable delta at claim time: vested minus already released. A released
/// counter above the vested amount is an invariant breach, not a rounding
/// case.
pub fn claimable(vested: u64, released: u64) -> Result<u64, VestingError> {
    vested.checked_sub(released).ok_or(VestingError::Overrelease)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_YEAR;

    const START: i64 = 1_700_000_000;
    const TWO_YEARS: i64 = 2 * SECONDS_PER_YEAR;

    #[test]
    fn zero_before_and_at_start() {
        assert_eq!(vested_amount(1_000, START - 1, START, TWO_YEARS).unwrap(), 0);
        assert_eq!(vested_amount(1_000, START, START, TWO_YEARS).unwrap(), 0);
    }

    #[test]
    fn half_vested_at_midpoint() {
        let now = START + SECONDS_PER_YEAR;
        assert_eq!(vested_amount(1_000, now, START, TWO_YEARS).unwrap(), 500);
    }

    #[test]
    fn saturates_exactly_at_allocation() {
        // 3 years elapsed on a 2-year curve: no overshoot.
        let now = START + 3 * SECONDS_PER_YEAR;
        assert_eq!(vested_amount(1_000, now, START, TWO_YEARS).unwrap(), 1_000);
        // Exactly at the boundary too.
        assert_eq!(
            vested_amount(1_000, START + TWO_YEARS, START, TWO_YEARS).unwrap(),
            1_000
        );
    }

    #[test]
    fn truncates_toward_zero() {
        // 1 second into a 2-year curve of 1000 tokens vests nothing yet.
        assert_eq!(vested_amount(1_000, START + 1, START, TWO_YEARS).unwrap(), 0);
        // 3 tokens over 2 seconds: after 1 second exactly 1 (floor of 1.5).
        assert_eq!(vested_amount(3, START + 1, START, 2).unwrap(), 1);
    }

    #[test]
    fn monotonic_in_elapsed_time() {
        let mut prev = 0;
        for step in 0..100 {
            let now = START + step * (TWO_YEARS / 40);
            let v = vested_amount(1_000, now, START, TWO_YEARS).unwrap();
            assert!(v >= prev);
            assert!(v <= 1_000);
            prev = v;
        }
        assert_eq!(prev, 1_000);
    }

    #[test]
    fn large_allocation_no_precision_loss() {
        // Multiply-before-divide in u128 keeps full precision near u64::MAX.
        let total = u64::MAX;
        let now = START + SECONDS_PER_YEAR;
        assert_eq!(
            vested_amount(total, now, START, TWO_YEARS).unwrap(),
            total / 2
        );
    }

    #[test]
    fn rejects_degenerate_duration() {
        assert!(matches!(
            vested_amount(1_000, START + 1, START, 0),
            Err(VestingError::InvalidConfig)
        ));
    }

    #[test]
    fn claimable_is_vested_minus_released() {
        assert_eq!(claimable(500, 0).unwrap(), 500);
        assert_eq!(claimable(500, 200).unwrap(), 300);
        assert_eq!(claimable(500, 500).unwrap(), 0);
        assert!(matches!(claimable(500, 501), Err(VestingError::Overrelease)));
    }
}
