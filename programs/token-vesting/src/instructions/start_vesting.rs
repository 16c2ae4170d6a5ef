use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::VestingError;
use crate::state::VestingState;

pub fn start_vesting(ctx: Context<StartVesting>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, VestingError::UnauthorizedAdmin);

    // Every promise must be covered before claims become possible.
    require!(
        ctx.accounts.vault.amount >= st.total_allocation,
        VestingError::InsufficientVaultBalance
    );

    let now = Clock::get()?.unix_timestamp;
    st.start(now)?;

    emit!(VestingStarted {
        admin: st.admin,
        start_ts: now,
        total_allocation: st.total_allocation,
        schedule_count: st.schedule_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct StartVesting<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingStarted {
    pub admin: Pubkey,
    pub start_ts: i64,
    pub total_allocation: u64,
    pub schedule_count: u32,
}
