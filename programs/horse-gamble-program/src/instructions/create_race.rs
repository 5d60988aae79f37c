use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{state::*, constants::*, error::HorseGambleError};

#[derive(Accounts)]
#[instruction(horses: Vec<String>)]
pub struct CreateRace<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut, seeds = [PROGRAM_STATE_SEED], bump = program_state.bump)]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        init,
        payer = authority,
        space = 8 + Race::space(&horses),
        seeds = [RACE_SEED, &program_state.next_race_id.to_le_bytes()],
        bump
    )]
    pub race: Account<'info, Race>,

    // Escrow vault: only the race PDA can move tokens out.
    #[account(
        init,
        payer = authority,
        seeds = [RACE_SEED, &program_state.next_race_id.to_le_bytes(), VAULT_SEED],
        bump,
        token::mint = token_mint,
        token::authority = race
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = program_state.token_mint)]
    pub token_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn create_race_handler(ctx: Context<CreateRace>, horses: Vec<String>) -> Result<u64> {
    let authority = ctx.accounts.authority.key();
    let program_state = &mut ctx.accounts.program_state;
    let race_id = program_state.next_race_id;

    let race = Race::new(race_id, authority, horses, ctx.bumps.race, ctx.bumps.vault)?;
    program_state.next_race_id = race_id
        .checked_add(1)
        .ok_or(HorseGambleError::ArithmeticOverflow)?;

    let horses = race.horses.clone();
    ctx.accounts.race.set_inner(race);

    msg!("Race {} created with {} horses", race_id, horses.len());
    emit!(RaceCreated {
        race_id,
        race: ctx.accounts.race.key(),
        authority,
        horses,
    });
    Ok(race_id)
}

#[event]
pub struct RaceCreated {
    pub race_id: u64,
    pub race: Pubkey,
    pub authority: Pubkey,
    pub horses: Vec<String>,
}
