use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Global vesting lifecycle. One-way: `NotStarted` -> `Started`, the start
/// timestamp is recorded exactly once at the transition.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingLifecycle {
    NotStarted,
    Started { start_ts: i64 },
}

/// Singleton vesting state PDA.
#[account]
pub struct VestingState {
    /// Admin authority, fixed at initialization.
    pub admin: Pubkey,
    /// Token mint being vested.
    pub mint: Pubkey,
    /// Fixed supply backing all schedules.
    pub total_supply: u64,
    /// Running sum of schedule allocations (<= total_supply).
    pub total_allocation: u64,
    /// Sum of all per-schedule released counters.
    pub released_supply: u64,
    /// Number of schedules created.
    pub schedule_count: u32,
    /// Global lifecycle gate.
    pub lifecycle: VestingLifecycle,
}

impl VestingState {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        8 +  // total_supply
        8 +  // total_allocation
        8 +  // released_supply
        4 +  // schedule_count
        9;   // lifecycle (tag + start_ts)

    pub fn is_started(&self) -> bool {
        matches!(self.lifecycle, VestingLifecycle::Started { .. })
    }

    pub fn start_ts(&self) -> Option<i64> {
        match self.lifecycle {
            VestingLifecycle::NotStarted => None,
            VestingLifecycle::Started { start_ts } => Some(start_ts),
        }
    }

    /// Transition to `Started`, recording `now`. Fails if already started.
    pub fn start(&mut self, now: i64) -> Result<()> {
        require!(!self.is_started(), VestingError::VestingAlreadyStarted);
        self.lifecycle = VestingLifecycle::Started { start_ts: now };
        Ok(())
    }

    /// Account a new schedule's allocation against the fixed supply.
    pub fn reserve_allocation(&mut self, amount: u64) -> Result<()> {
        let sum = self
            .total_allocation
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        require!(sum <= self.total_supply, VestingError::AllocationSumExceedsSupply);
        self.total_allocation = sum;
        self.schedule_count = self
            .schedule_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Account a successful claim against the global released counter.
    pub fn record_release(&mut self, amount: u64) -> Result<()> {
        let sum = self
            .released_supply
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        // Releases can never outrun allocations.
        require!(sum <= self.total_allocation, VestingError::Overrelease);
        self.released_supply = sum;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total_supply: u64) -> VestingState {
        VestingState {
            admin: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            total_supply,
            total_allocation: 0,
            released_supply: 0,
            schedule_count: 0,
            lifecycle: VestingLifecycle::NotStarted,
        }
    }

    #[test]
    fn start_records_timestamp_once() {
        let mut st = state(1_000);
        assert!(!st.is_started());
        assert_eq!(st.start_ts(), None);

        st.start(1_700_000_000).unwrap();
        assert!(st.is_started());
        assert_eq!(st.start_ts(), Some(1_700_000_000));

        // Terminal state: a second start must not move the timestamp.
        assert!(st.start(1_800_000_000).is_err());
        assert_eq!(st.start_ts(), Some(1_700_000_000));
    }

    #[test]
    fn allocation_bookkeeping_caps_at_supply() {
        let mut st = state(1_000);
        st.reserve_allocation(600).unwrap();
        st.reserve_allocation(400).unwrap();
        assert_eq!(st.total_allocation, 1_000);
        assert_eq!(st.schedule_count, 2);

        // One unit past the supply is rejected and leaves the sum unchanged.
        assert!(st.reserve_allocation(1).is_err());
        assert_eq!(st.total_allocation, 1_000);
        assert_eq!(st.schedule_count, 2);
    }

    #[test]
    fn released_supply_never_outruns_allocations() {
        let mut st = state(1_000);
        st.reserve_allocation(500).unwrap();
        st.record_release(200).unwrap();
        st.record_release(300).unwrap();
        assert_eq!(st.released_supply, 500);
        assert!(st.record_release(1).is_err());
    }
}
