use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::VestingError;
use crate::state::{VestingLifecycle, VestingState};

pub fn initialize(ctx: Context<Initialize>, total_supply: u64) -> Result<()> {
    require!(total_supply > 0, VestingError::InvalidConfig);

    let st = &mut ctx.accounts.vesting_state;
    st.admin = ctx.accounts.admin.key();
    st.mint = ctx.accounts.mint.key();
    st.total_supply = total_supply;
    st.total_allocation = 0;
    st.released_supply = 0;
    st.schedule_count = 0;
    st.lifecycle = VestingLifecycle::NotStarted;

    emit!(VestingInitialized {
        admin: st.admin,
        mint: st.mint,
        total_supply: st.total_supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingState::SIZE,
        seeds = [b"vesting_state"],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = vesting_state,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub total_supply: u64,
}
