//! Role-based linear token vesting.
//!
//! A single admin funds a vault with a fixed supply, registers
//! (beneficiary, slot) schedules while the global lifecycle is still
//! `NotStarted`, then flips it to `Started` exactly once. From that point
//! beneficiaries claim the linearly vested portion of their allocation,
//! with the full-vest duration determined by the schedule's role.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::Role;

declare_id!("7KTfPwQFoxH9H1BS1dubmYwHpGqQC9gkVrDKBNu44twB");

#[program]
pub mod token_vesting {
    use super::*;

    /// Create the vesting state and its vault for a fixed token supply.
    pub fn initialize(ctx: Context<Initialize>, total_supply: u64) -> Result<()> {
        instructions::initialize::initialize(ctx, total_supply)
    }

    /// Admin funds the vault. Pre-start only, capped at the total supply.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    /// Register a vesting schedule for (beneficiary, slot). Admin-only and
    /// only while vesting has not started.
    pub fn add_beneficiary(
        ctx: Context<AddBeneficiary>,
        beneficiary: Pubkey,
        slot: u8,
        total_allocation: u64,
        role: Role,
    ) -> Result<()> {
        instructions::add_beneficiary::add_beneficiary(ctx, beneficiary, slot, total_allocation, role)
    }

    /// One-way transition to `Started`, recording the start timestamp.
    /// Requires the vault to cover every allocated schedule.
    pub fn start_vesting(ctx: Context<StartVesting>) -> Result<()> {
        instructions::start_vesting::start_vesting(ctx)
    }

    /// Pay out the claimable (vested minus released) portion of the
    /// signer's schedule at the given slot.
    pub fn claim_tokens(ctx: Context<ClaimTokens>, slot: u8) -> Result<()> {
        instructions::claim_tokens::claim_tokens(ctx, slot)
    }

    /// Admin recovers unallocated surplus from the vault, pre-start only.
    pub fn admin_withdraw(ctx: Context<AdminWithdraw>, amount: u64) -> Result<()> {
        instructions::admin_withdraw::admin_withdraw(ctx, amount)
    }

    /// Emit a vested/released/claimable snapshot for a schedule.
    pub fn emit_vesting_quote(
        ctx: Context<EmitVestingQuote>,
        beneficiary: Pubkey,
        slot: u8,
    ) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx, beneficiary, slot)
    }
}
