pub mod schedule;
pub mod vesting_state;

pub use schedule::*;
pub use vesting_state::*;
