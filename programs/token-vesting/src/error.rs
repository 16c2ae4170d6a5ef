use anchor_lang::prelude::*;

/// Custom error codes for the vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Vesting has already started")]
    VestingAlreadyStarted,

    #[msg("Vesting has not started yet")]
    VestingNotStarted,

    #[msg("Invalid beneficiary public key")]
    InvalidBeneficiary,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Allocation sum would exceed total supply")]
    AllocationSumExceedsSupply,

    #[msg("Release would exceed total allocation")]
    Overrelease,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Deposit would exceed total supply")]
    OverDeposit,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
