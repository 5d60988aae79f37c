use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct GetRace<'info> {
    #[account(seeds = [RACE_SEED, &race.id.to_le_bytes()], bump = race.bump)]
    pub race: Account<'info, Race>,
}

#[derive(Accounts)]
pub struct GetBet<'info> {
    #[account(seeds = [BET_SEED, bet.race.as_ref(), &bet.id.to_le_bytes()], bump = bet.bump)]
    pub bet: Account<'info, Bet>,
}

pub fn get_race_handler(ctx: Context<GetRace>) -> Result<Race> {
    Ok((*ctx.accounts.race).clone())
}

pub fn get_bet_handler(ctx: Context<GetBet>) -> Result<Bet> {
    Ok((*ctx.accounts.bet).clone())
}
