use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{state::*, constants::*};
use crate::instructions::resolve_race::RaceSettled;

#[derive(Accounts)]
pub struct Claim<'info> {
    pub bettor: Signer<'info>,

    #[account(seeds = [PROGRAM_STATE_SEED], bump = program_state.bump)]
    pub program_state: Account<'info, ProgramState>,

    #[account(mut, seeds = [RACE_SEED, &race.id.to_le_bytes()], bump = race.bump)]
    pub race: Account<'info, Race>,

    // Seeded on the bet's own race so a foreign bet reaches the BetNotInRace check.
    #[account(
        mut,
        seeds = [BET_SEED, bet.race.as_ref(), &bet.id.to_le_bytes()],
        bump = bet.bump
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
        bump = race.vault_bump,
        token::authority = race
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn claim_handler(ctx: Context<Claim>) -> Result<u64> {
    let bettor = ctx.accounts.bettor.key();
    let race_key = ctx.accounts.race.key();

    let vault_amount = ctx.accounts.vault.amount;

    let payout = ctx
        .accounts
        .race
        .settle_claim(&race_key, &bettor, &mut ctx.accounts.bet, vault_amount)?;

    if payout > 0 {
        let race_id = ctx.accounts.race.id.to_le_bytes();
        let bump = [ctx.accounts.race.bump];
        let seeds: &[&[u8]] = &[RACE_SEED, &race_id, &bump];

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.bettor_token_account.to_account_info(),
                    authority: ctx.accounts.race.to_account_info(),
                },
                &[seeds],
            ),
            payout,
        )?;
    }

    let race = &ctx.accounts.race;
    emit!(BetClaimed {
        race_id: race.id,
        bet_id: ctx.accounts.bet.id,
        bettor,
        payout,
        refund: race.state == RaceState::Cancelled || race.refund_all,
    });

    if race.state == RaceState::Settled {
        msg!("Race {} settled, {} left in vault", race.id, race.vault_balance());
        emit!(RaceSettled {
            race_id: race.id,
            total_paid_out: race.total_paid_out,
            remainder: race.vault_balance(),
        });
    }
    Ok(payout)
}

#[event]
pub struct BetClaimed {
    pub race_id: u64,
    pub bet_id: u64,
    pub bettor: Pubkey,
    pub payout: u64,
    pub refund: bool,
}
