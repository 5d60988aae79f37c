use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct ResolveRace<'info> {
    pub authority: Signer<'info>,

    #[account(mut, seeds = [RACE_SEED, &race.id.to_le_bytes()], bump = race.bump)]
    pub race: Account<'info, Race>,
}

pub fn resolve_race_handler(ctx: Context<ResolveRace>, winner: u8) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let race = &mut ctx.accounts.race;
    race.resolve(&authority, winner)?;

    let winning_stake = race.pool_per_horse[usize::from(winner)];
    if race.refund_all {
        msg!("Race {}: nobody backed the winner, refunding all bets", race.id);
    }
    emit!(RaceResolved {
        race_id: race.id,
        winning_horse: winner,
        winning_name: race.horses[usize::from(winner)].clone(),
        total_pool: race.total_pool,
        winning_stake,
        refund_all: race.refund_all,
    });

    if race.state == RaceState::Settled {
        emit!(RaceSettled {
            race_id: race.id,
            total_paid_out: race.total_paid_out,
            remainder: race.vault_balance(),
        });
    }
    Ok(())
}

#[event]
pub struct RaceResolved {
    pub race_id: u64,
    pub winning_horse: u8,
    pub winning_name: String,
    pub total_pool: u64,
    pub winning_stake: u64,
    pub refund_all: bool,
}

#[event]
pub struct RaceSettled {
    pub race_id: u64,
    pub total_paid_out: u64,
    pub remainder: u64,
}
