use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
use state::{Bet, Race};

declare_id!("H6xPQtqcBb8KUXi7afFgBk2t6Q15oeXqBsDJgPUCgF8u");

#[program]
pub mod horse_gamble_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize_handler(ctx)
    }

    // Race lifecycle (authority only)

    pub fn create_race(ctx: Context<CreateRace>, horses: Vec<String>) -> Result<u64> {
        create_race_handler(ctx, horses)
    }

    pub fn open_race(ctx: Context<OpenRace>) -> Result<()> {
        open_race_handler(ctx)
    }

    pub fn close_race(ctx: Context<CloseRace>) -> Result<()> {
        close_race_handler(ctx)
    }

    pub fn resolve_race(ctx: Context<ResolveRace>, winner: u8) -> Result<()> {
        resolve_race_handler(ctx, winner)
    }

    pub fn cancel_race(ctx: Context<CancelRace>) -> Result<()> {
        cancel_race_handler(ctx)
    }

    pub fn sweep_vault(ctx: Context<SweepVault>) -> Result<u64> {
        sweep_vault_handler(ctx)
    }

    // Bettors

    pub fn place_bet(ctx: Context<PlaceBet>, horse: u8, amount: u64) -> Result<u64> {
        place_bet_handler(ctx, horse, amount)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<u64> {
        claim_handler(ctx)
    }

    // Queries

    pub fn get_race(ctx: Context<GetRace>) -> Result<Race> {
        get_race_handler(ctx)
    }

    pub fn get_bet(ctx: Context<GetBet>) -> Result<Bet> {
        get_bet_handler(ctx)
    }
}
