pub mod initialize;
pub mod deposit_tokens;
pub mod add_beneficiary;
pub mod start_vesting;
pub mod claim_tokens;
pub mod admin_withdraw;
pub mod emit_vesting_quote;

pub use initialize::*;
pub use deposit_tokens::*;
pub use add_beneficiary::*;
pub use start_vesting::*;
pub use claim_tokens::*;
pub use admin_withdraw::*;
pub use emit_vesting_quote::*;
