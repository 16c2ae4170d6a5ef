use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Role, VestingSchedule, VestingState};

pub fn add_beneficiary(
    ctx: Context<AddBeneficiary>,
    beneficiary: Pubkey,
    slot: u8,
    total_allocation: u64,
    role: Role,
) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    // Lifecycle gate first: once started, schedule creation is closed to
    // everyone, admin included.
    require!(!st.is_started(), VestingError::VestingAlreadyStarted);
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, VestingError::UnauthorizedAdmin);
    require!(beneficiary != Pubkey::default(), VestingError::InvalidBeneficiary);
    require!(total_allocation > 0, VestingError::InvalidAllocation);

    st.reserve_allocation(total_allocation)?;

    let schedule = &mut ctx.accounts.schedule;
    schedule.beneficiary = beneficiary;
    schedule.slot = slot;
    schedule.role = role;
    schedule.total_allocation = total_allocation;
    schedule.released = 0;
    schedule.bump = ctx.bumps.schedule;

    emit!(BeneficiaryAdded {
        beneficiary,
        slot,
        role,
        total_allocation,
        allocated_total: st.total_allocation,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, slot: u8)]
pub struct AddBeneficiary<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    // `init` on the derived address doubles as the uniqueness check for
    // (beneficiary, slot): an existing schedule cannot be overwritten.
    #[account(
        init,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [
            b"schedule",
            vesting_state.key().as_ref(),
            beneficiary.as_ref(),
            &[slot],
        ],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BeneficiaryAdded {
    pub beneficiary: Pubkey,
    pub slot: u8,
    pub role: Role,
    pub total_allocation: u64,
    pub allocated_total: u64,
}
