use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct CancelRace<'info> {
    pub authority: Signer<'info>,

    #[account(mut, seeds = [RACE_SEED, &race.id.to_le_bytes()], bump = race.bump)]
    pub race: Account<'info, Race>,
}

pub fn cancel_race_handler(ctx: Context<CancelRace>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let race = &mut ctx.accounts.race;
    race.cancel(&authority)?;

    msg!("Race {} cancelled, {} bets to refund", race.id, race.claims_remaining);
    emit!(RaceCancelled {
        race_id: race.id,
        total_pool: race.total_pool,
        refunds_pending: race.claims_remaining,
    });
    Ok(())
}

#[event]
pub struct RaceCancelled {
    pub race_id: u64,
    pub total_pool: u64,
    pub refunds_pending: u64,
}
