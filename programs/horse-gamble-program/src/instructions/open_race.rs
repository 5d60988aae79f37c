use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct OpenRace<'info> {
    pub authority: Signer<'info>,

    #[account(mut, seeds = [RACE_SEED, &race.id.to_le_bytes()], bump = race.bump)]
    pub race: Account<'info, Race>,
}

pub fn open_race_handler(ctx: Context<OpenRace>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let race = &mut ctx.accounts.race;
    race.open(&authority)?;

    msg!("Race {} open for betting", race.id);
    emit!(RaceOpened {
        race_id: race.id,
        horses: race.horses.clone(),
    });
    Ok(())
}

#[event]
pub struct RaceOpened {
    pub race_id: u64,
    pub horses: Vec<String>,
}
