use anchor_lang::prelude::*;
use crate::error::HorseGambleError;
use crate::state::{Bet, Race, RaceState};

/// `stake * total_pool / winning_stake`, rounded down. The remainder stays
/// in the vault, so winners are never overpaid.
pub fn pro_rata_share(stake: u64, total_pool: u64, winning_stake: u64) -> Result<u64> {
    let share = (stake as u128)
        .checked_mul(total_pool as u128)
        .and_then(|v| v.checked_div(winning_stake as u128))
        .ok_or(HorseGambleError::ArithmeticOverflow)?;
    u64::try_from(share).map_err(|_| error!(HorseGambleError::ArithmeticOverflow))
}

/// Amount owed to `bet` given how `race` ended.
pub fn payout_for(race: &Race, bet: &Bet) -> Result<u64> {
    match race.state {
        RaceState::Cancelled => Ok(bet.amount),
        RaceState::Resolved | RaceState::Settled => {
            if race.refund_all {
                return Ok(bet.amount);
            }
            let winner = race.winning_horse.ok_or(HorseGambleError::RaceNotResolved)?;
            if bet.horse != winner {
                return Ok(0);
            }
            let winning_stake = *race
                .pool_per_horse
                .get(usize::from(winner))
                .ok_or(HorseGambleError::InvalidWinner)?;
            pro_rata_share(bet.amount, race.total_pool, winning_stake)
        }
        _ => err!(HorseGambleError::RaceNotResolved),
    }
}
