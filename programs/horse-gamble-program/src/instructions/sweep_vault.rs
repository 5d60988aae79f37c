use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct SweepVault<'info> {
    pub authority: Signer<'info>,

    #[account(seeds = [PROGRAM_STATE_SEED], bump = program_state.bump)]
    pub program_state: Account<'info, ProgramState>,

    #[account(mut, seeds = [RACE_SEED, &race.id.to_le_bytes()], bump = race.bump)]
    pub race: Account<'info, Race>,

    #[account(
        mut,
        seeds = [RACE_SEED, &race.id.to_le_bytes(), VAULT_SEED],
        bump = race.vault_bump,
        token::authority = race
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = program_state.token_mint,
        token::authority = authority
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Hands the rounding remainder of a settled race to its authority.
pub fn sweep_vault_handler(ctx: Context<SweepVault>) -> Result<u64> {
    let authority = ctx.accounts.authority.key();
    let vault_amount = ctx.accounts.vault.amount;
    let amount = ctx.accounts.race.record_sweep(&authority, vault_amount)?;

    let race = &ctx.accounts.race;

    let race_id = race.id.to_le_bytes();
    let bump = [race.bump];
    let seeds: &[&[u8]] = &[RACE_SEED, &race_id, &bump];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.authority_token_account.to_account_info(),
                authority: race.to_account_info(),
            },
            &[seeds],
        ),
        amount,
    )?;

    emit!(VaultSwept {
        race_id: race.id,
        authority,
        amount,
    });
    Ok(amount)
}

#[event]
pub struct VaultSwept {
    pub race_id: u64,
    pub authority: Pubkey,
    pub amount: u64,
}
