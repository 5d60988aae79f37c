use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub bettor: Signer<'info>,

    #[account(seeds = [PROGRAM_STATE_SEED], bump = program_state.bump)]
    pub program_state: Account<'info, ProgramState>,

    #[account(mut, seeds = [RACE_SEED, &race.id.to_le_bytes()], bump = race.bump)]
    pub race: Account<'info, Race>,

    #[account(
        init,
        payer = bettor,
        space = 8 + Bet::LEN,
        seeds = [BET_SEED, race.key().as_ref(), &race.bet_count.to_le_bytes()],
        bump
    )]
    pub bet: Account<'info, Bet>,

    #[account(
        mut,
        token::mint = program_state.token_mint,
        token::authority = bettor
    )]
    pub bettor_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [RACE_SEED, &race.id.to_le_bytes(), VAULT_SEED],
        bump = race.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn place_bet_handler(ctx: Context<PlaceBet>, horse: u8, amount: u64) -> Result<u64> {
    let bettor = ctx.accounts.bettor.key();
    let race_key = ctx.accounts.race.key();
    let balance = ctx.accounts.bettor_token_account.amount;

    let bet_id = ctx.accounts.race.record_bet(horse, amount, balance)?;
    ctx.accounts.bet.set_inner(Bet::new(
        bet_id,
        race_key,
        bettor,
        horse,
        amount,
        ctx.bumps.bet,
    ));

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.bettor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.bettor.to_account_info(),
            },
        ),
        amount,
    )?;

    let race = &ctx.accounts.race;
    emit!(BetPlaced {
        race_id: race.id,
        bet_id,
        bettor,
        horse,
        amount,
        total_pool: race.total_pool,
        horse_pool: race.pool_per_horse[usize::from(horse)],
    });
    Ok(bet_id)
}

#[event]
pub struct BetPlaced {
    pub race_id: u64,
    pub bet_id: u64,
    pub bettor: Pubkey,
    pub horse: u8,
    pub amount: u64,
    pub total_pool: u64,
    pub horse_pool: u64,
}
