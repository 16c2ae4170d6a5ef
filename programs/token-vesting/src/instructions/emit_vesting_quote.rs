use anchor_lang::prelude::*;

use crate::state::{VestingSchedule, VestingState};
use crate::utils::curve;

/// Read-only snapshot of a schedule's vested / released / claimable
/// amounts, surfaced as an event. Before the vesting start the vested
/// amount reads as 0.
pub fn emit_vesting_quote(
    ctx: Context<EmitVestingQuote>,
    beneficiary: Pubkey,
    slot: u8,
) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    let schedule = &ctx.accounts.schedule;

    let now = Clock::get()?.unix_timestamp;
    let vested = match st.start_ts() {
        Some(start_ts) => schedule.vested_as_of(now, start_ts)?,
        None => 0,
    };
    let claimable = curve::claimable(vested, schedule.released)?;

    emit!(VestingQuote {
        beneficiary,
        slot,
        vested,
        released: schedule.released,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, slot: u8)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [
            b"schedule",
            vesting_state.key().as_ref(),
            beneficiary.as_ref(),
            &[slot],
        ],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub slot: u8,
    pub vested: u64,
    pub released: u64,
    pub claimable: u64,
}
