use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + ProgramState::LEN,
        seeds = [PROGRAM_STATE_SEED],
        bump
    )]
    pub program_state: Account<'info, ProgramState>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>) -> Result<()> {
    let payer = ctx.accounts.payer.key();
    let token_mint = ctx.accounts.token_mint.key();

    ctx.accounts.program_state.set_inner(ProgramState {
        token_mint,
        next_race_id: 0,
        bump: ctx.bumps.program_state,
    });

    msg!("Program initialized, stakes in mint {}", token_mint);
    emit!(ProgramInitialized { payer, token_mint });
    Ok(())
}

#[event]
pub struct ProgramInitialized {
    pub payer: Pubkey,
    pub token_mint: Pubkey,
}
