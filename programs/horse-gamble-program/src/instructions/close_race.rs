use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct CloseRace<'info> {
    pub authority: Signer<'info>,

    #[account(mut, seeds = [RACE_SEED, &race.id.to_le_bytes()], bump = race.bump)]
    pub race: Account<'info, Race>,
}

pub fn close_race_handler(ctx: Context<CloseRace>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let race = &mut ctx.accounts.race;
    race.close_betting(&authority)?;

    msg!("Race {} closed", race.id);
    emit!(RaceClosed {
        race_id: race.id,
        total_pool: race.total_pool,
        bet_count: race.bet_count,
    });
    Ok(())
}

#[event]
pub struct RaceClosed {
    pub race_id: u64,
    pub total_pool: u64,
    pub bet_count: u64,
}
