use anchor_lang::prelude::*;

use crate::constants::{PARTNER_VEST_SECONDS, TEAM_VEST_SECONDS, USER_VEST_SECONDS};
use crate::error::VestingError;
use crate::utils::curve;

/// Beneficiary category. Each role maps to a full-vest duration; the
/// release curve itself is linear for every role.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Partner,
    Team,
}

impl Role {
    /// Seconds from vesting start until the full allocation is vested.
    pub fn full_vest_seconds(&self) -> i64 {
        match self {
            Role::User => USER_VEST_SECONDS,
            Role::Partner => PARTNER_VEST_SECONDS,
            Role::Team => TEAM_VEST_SECONDS,
        }
    }
}

/// One vesting schedule PDA per (beneficiary, slot).
///
/// Seeds: `[b"schedule", vesting_state, beneficiary, slot]` — the address
/// derivation is the uniqueness check; re-creating an existing
/// (beneficiary, slot) fails at account init.
#[account]
pub struct VestingSchedule {
    /// Account entitled to the tokens.
    pub beneficiary: Pubkey,
    /// Caller-chosen index distinguishing multiple schedules per beneficiary.
    pub slot: u8,
    /// Release-curve category.
    pub role: Role,
    /// Promised amount, fixed at creation.
    pub total_allocation: u64,
    /// Amount already paid out. Monotonically non-decreasing.
    pub released: u64,
    /// PDA bump.
    pub bump: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // beneficiary
        1 +  // slot
        1 +  // role
        8 +  // total_allocation
        8 +  // released
        1;   // bump

    /// Cumulative vested amount at `now` for a vesting that started at
    /// `start_ts`. Pure, does not touch `released`.
    pub fn vested_as_of(
        &self,
        now: i64,
        start_ts: i64,
    ) -> std::result::Result<u64, VestingError> {
        curve::vested_amount(self.total_allocation, now, start_ts, self.role.full_vest_seconds())
    }

    /// Commit a payout to the released counter. The resulting counter may
    /// never exceed the total allocation; normal claim logic cannot reach
    /// that bound, so hitting it means an invariant violation.
    pub fn mark_released(&mut self, amount: u64) -> Result<()> {
        let sum = self
            .released
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        require!(sum <= self.total_allocation, VestingError::Overrelease);
        self.released = sum;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_YEAR;

    fn schedule(role: Role, total_allocation: u64) -> VestingSchedule {
        VestingSchedule {
            beneficiary: Pubkey::new_unique(),
            slot: 0,
            role,
            total_allocation,
            released: 0,
            bump: 255,
        }
    }

    #[test]
    fn role_durations() {
        assert_eq!(Role::User.full_vest_seconds(), 2 * SECONDS_PER_YEAR);
        assert_eq!(Role::Partner.full_vest_seconds(), 3 * SECONDS_PER_YEAR);
        assert_eq!(Role::Team.full_vest_seconds(), 4 * SECONDS_PER_YEAR);
    }

    #[test]
    fn user_schedule_half_vested_after_one_year() {
        let s = schedule(Role::User, 1_000);
        let start = 1_700_000_000;
        assert_eq!(s.vested_as_of(start + SECONDS_PER_YEAR, start).unwrap(), 500);
    }

    #[test]
    fn claim_sequence_is_monotonic_and_idempotent() {
        let mut s = schedule(Role::User, 1_000);
        let start = 1_700_000_000;

        // One year in: 500 vested, claim it all.
        let now = start + SECONDS_PER_YEAR;
        let vested = s.vested_as_of(now, start).unwrap();
        let amount = curve::claimable(vested, s.released).unwrap();
        assert_eq!(amount, 500);
        s.mark_released(amount).unwrap();
        assert_eq!(s.released, 500);

        // Immediate re-claim: nothing left.
        let vested = s.vested_as_of(now, start).unwrap();
        assert_eq!(curve::claimable(vested, s.released).unwrap(), 0);

        // Past full vest: the remainder is recoverable exactly once.
        let later = start + 3 * SECONDS_PER_YEAR;
        let vested = s.vested_as_of(later, start).unwrap();
        assert_eq!(vested, 1_000);
        let amount = curve::claimable(vested, s.released).unwrap();
        assert_eq!(amount, 500);
        s.mark_released(amount).unwrap();
        assert_eq!(s.released, 1_000);
        assert_eq!(curve::claimable(vested, s.released).unwrap(), 0);
    }

    #[test]
    fn mark_released_accumulates_and_caps() {
        let mut s = schedule(Role::User, 1_000);
        s.mark_released(500).unwrap();
        assert_eq!(s.released, 500);
        s.mark_released(500).unwrap();
        assert_eq!(s.released, 1_000);

        // Past the allocation: rejected, counter unchanged.
        assert!(s.mark_released(1).is_err());
        assert_eq!(s.released, 1_000);
    }
}
