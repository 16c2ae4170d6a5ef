use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingState};
use crate::utils::curve;

pub fn claim_tokens(ctx: Context<ClaimTokens>, slot: u8) -> Result<()> {
    // Capture AccountInfo/bump before taking mutable borrows.
    let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
    let vesting_state_bump = ctx.bumps.vesting_state;

    let st = &mut ctx.accounts.vesting_state;
    let start_ts = st.start_ts().ok_or(VestingError::VestingNotStarted)?;

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        ctx.accounts.beneficiary.key(),
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;

    let schedule = &mut ctx.accounts.schedule;
    let vested = schedule.vested_as_of(now, start_ts)?;
    let amount = curve::claimable(vested, schedule.released)?;
    require!(amount > 0, VestingError::NothingToClaim);

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // Commit the released counters strictly before the external transfer.
    // A failed transfer aborts the transaction and rolls them back.
    schedule.mark_released(amount)?;
    st.record_release(amount)?;

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_state", &[vesting_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: vesting_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensClaimed {
        beneficiary: ctx.accounts.beneficiary.key(),
        slot,
        amount,
        vested,
        released_total: ctx.accounts.schedule.released,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(slot: u8)]
pub struct ClaimTokens<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    // The signer is bound into the schedule seeds: a claimer can only ever
    // reach their own schedules.
    #[account(
        mut,
        seeds = [
            b"schedule",
            vesting_state.key().as_ref(),
            beneficiary.key().as_ref(),
            &[slot],
        ],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub slot: u8,
    pub amount: u64,
    pub vested: u64,
    pub released_total: u64,
}
