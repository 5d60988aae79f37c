use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::HorseGambleError;
use crate::utils::payout::payout_for;

#[account]
pub struct ProgramState {
    /// Mint every stake, payout and refund is denominated in.
    pub token_mint: Pubkey,
    pub next_race_id: u64,
    pub bump: u8,
}

impl ProgramState {
    pub const LEN: usize = 32 + 8 + 1;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaceState {
    Created,
    Open,
    Closed,
    Resolved,
    Cancelled,
    Settled,
}

#[account]
#[derive(Debug)]
pub struct Race {
    pub id: u64,
    pub authority: Pubkey,
    pub state: RaceState,
    pub horses: Vec<String>,
    /// Stake per horse, indexed like `horses`.
    pub pool_per_horse: Vec<u64>,
    pub total_pool: u64,
    /// Index into `horses`. Set iff state is Resolved or Settled.
    pub winning_horse: Option<u8>,
    /// Nobody backed the winner: every bet is refunded in full.
    pub refund_all: bool,
    pub bet_count: u64,
    pub claims_remaining: u64,
    pub total_paid_out: u64,
    /// Rounding remainder handed to the authority after settlement.
    pub swept: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Race {
    pub fn space(horses: &[String]) -> usize {
        8 + // id
        32 + // authority
        1 + // state
        4 + horses.iter().map(|h| 4 + h.len()).sum::<usize>() + // horses
        4 + horses.len() * 8 + // pool_per_horse
        8 + // total_pool
        1 + 1 + // winning_horse
        1 + // refund_all
        8 + // bet_count
        8 + // claims_remaining
        8 + // total_paid_out
        8 + // swept
        1 + // bump
        1 // vault_bump
    }

    pub fn new(
        id: u64,
        authority: Pubkey,
        horses: Vec<String>,
        bump: u8,
        vault_bump: u8,
    ) -> Result<Self> {
        validate_horses(&horses)?;
        let pool_per_horse = vec![0u64; horses.len()];
        Ok(Self {
            id,
            authority,
            state: RaceState::Created,
            horses,
            pool_per_horse,
            total_pool: 0,
            winning_horse: None,
            refund_all: false,
            bet_count: 0,
            claims_remaining: 0,
            total_paid_out: 0,
            swept: 0,
            bump,
            vault_bump,
        })
    }

    /// Fails unless `caller` is the race authority. Runs before any mutation.
    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, HorseGambleError::Unauthorized);
        Ok(())
    }

    pub fn open(&mut self, caller: &Pubkey) -> Result<()> {
        self.authorize(caller)?;
        require!(
            self.state == RaceState::Created,
            HorseGambleError::InvalidStateTransition
        );
        validate_horses(&self.horses)?;
        self.state = RaceState::Open;
        Ok(())
    }

    pub fn close_betting(&mut self, caller: &Pubkey) -> Result<()> {
        self.authorize(caller)?;
        require!(
            self.state == RaceState::Open,
            HorseGambleError::InvalidStateTransition
        );
        self.state = RaceState::Closed;
        Ok(())
    }

    pub fn resolve(&mut self, caller: &Pubkey, winner: u8) -> Result<()> {
        self.authorize(caller)?;
        require!(
            self.state == RaceState::Closed,
            HorseGambleError::InvalidStateTransition
        );
        let winning_stake = *self
            .pool_per_horse
            .get(usize::from(winner))
            .ok_or(HorseGambleError::InvalidWinner)?;

        self.winning_horse = Some(winner);
        self.refund_all = winning_stake == 0;
        self.state = if self.claims_remaining == 0 {
            RaceState::Settled
        } else {
            RaceState::Resolved
        };
        Ok(())
    }

    pub fn cancel(&mut self, caller: &Pubkey) -> Result<()> {
        self.authorize(caller)?;
        require!(
            self.state == RaceState::Closed,
            HorseGambleError::InvalidStateTransition
        );
        self.state = RaceState::Cancelled;
        Ok(())
    }

    /// Books a stake against `horse` and returns the new bet's id.
    /// `bettor_balance` is what the bettor can cover from their token account.
    pub fn record_bet(&mut self, horse: u8, amount: u64, bettor_balance: u64) -> Result<u64> {
        require!(self.state == RaceState::Open, HorseGambleError::RaceNotOpen);
        require!(amount > 0, HorseGambleError::ZeroAmount);
        let index = usize::from(horse);
        let horse_pool = *self
            .pool_per_horse
            .get(index)
            .ok_or(HorseGambleError::InvalidHorse)?;
        require!(bettor_balance >= amount, HorseGambleError::InsufficientFunds);

        let horse_pool = horse_pool
            .checked_add(amount)
            .ok_or(HorseGambleError::ArithmeticOverflow)?;
        let total_pool = self.total_pool
            .checked_add(amount)
            .ok_or(HorseGambleError::ArithmeticOverflow)?;
        let bet_count = self.bet_count
            .checked_add(1)
            .ok_or(HorseGambleError::ArithmeticOverflow)?;
        let claims_remaining = self.claims_remaining
            .checked_add(1)
            .ok_or(HorseGambleError::ArithmeticOverflow)?;

        let bet_id = self.bet_count;
        self.pool_per_horse[index] = horse_pool;
        self.total_pool = total_pool;
        self.bet_count = bet_count;
        self.claims_remaining = claims_remaining;
        Ok(bet_id)
    }

    /// Marks `bet` claimed and returns the amount the vault owes the bettor.
    /// `vault_amount` is the escrow vault's token balance.
    /// Moves a resolved race to Settled once the last bet is claimed.
    pub fn settle_claim(
        &mut self,
        race_key: &Pubkey,
        claimant: &Pubkey,
        bet: &mut Bet,
        vault_amount: u64,
    ) -> Result<u64> {
        require_keys_eq!(bet.race, *race_key, HorseGambleError::BetNotInRace);
        require_keys_eq!(bet.bettor, *claimant, HorseGambleError::Unauthorized);
        require!(
            matches!(
                self.state,
                RaceState::Resolved | RaceState::Cancelled | RaceState::Settled
            ),
            HorseGambleError::RaceNotResolved
        );
        require!(!bet.claimed, HorseGambleError::AlreadyClaimed);

        let payout = payout_for(self, bet)?;
        let total_paid_out = self.total_paid_out
            .checked_add(payout)
            .ok_or(HorseGambleError::ArithmeticOverflow)?;
        require!(
            total_paid_out <= self.total_pool && payout <= vault_amount,
            HorseGambleError::InsufficientFunds
        );
        let claims_remaining = self.claims_remaining
            .checked_sub(1)
            .ok_or(HorseGambleError::ArithmeticOverflow)?;

        bet.claimed = true;
        bet.payout = payout;
        self.total_paid_out = total_paid_out;
        self.claims_remaining = claims_remaining;
        if self.state == RaceState::Resolved && claims_remaining == 0 {
            self.state = RaceState::Settled;
        }
        Ok(payout)
    }

    /// Books a sweep of the whole `vault_amount` and returns it.
    pub fn record_sweep(&mut self, caller: &Pubkey, vault_amount: u64) -> Result<u64> {
        self.authorize(caller)?;
        require!(
            self.state == RaceState::Settled,
            HorseGambleError::RaceNotSettled
        );
        require!(vault_amount > 0, HorseGambleError::VaultEmpty);
        self.swept = self.swept
            .checked_add(vault_amount)
            .ok_or(HorseGambleError::ArithmeticOverflow)?;
        Ok(vault_amount)
    }

    /// What the escrow vault should still hold.
    pub fn vault_balance(&self) -> u64 {
        self.total_pool
            .saturating_sub(self.total_paid_out)
            .saturating_sub(self.swept)
    }
}

pub fn validate_horses(horses: &[String]) -> Result<()> {
    require!(!horses.is_empty(), HorseGambleError::EmptyHorseList);
    require!(horses.len() <= MAX_HORSES, HorseGambleError::TooManyHorses);
    for (i, name) in horses.iter().enumerate() {
        require!(
            !name.is_empty() && name.len() <= MAX_HORSE_NAME_LEN,
            HorseGambleError::HorseNameTooLong
        );
        require!(!horses[..i].contains(name), HorseGambleError::DuplicateHorse);
    }
    Ok(())
}

#[account]
#[derive(Debug)]
pub struct Bet {
    pub id: u64,
    pub race: Pubkey,
    pub bettor: Pubkey,
    /// Index into the race's `horses`.
    pub horse: u8,
    pub amount: u64,
    pub claimed: bool,
    pub payout: u64,
    pub bump: u8,
}

impl Bet {
    pub const LEN: usize = 8 + 32 + 32 + 1 + 8 + 1 + 8 + 1;

    pub fn new(id: u64, race: Pubkey, bettor: Pubkey, horse: u8, amount: u64, bump: u8) -> Self {
        Self {
            id,
            race,
            bettor,
            horse,
            amount,
            claimed: false,
            payout: 0,
            bump,
        }
    }
}
