use std::collections::HashMap;

use anchor_lang::prelude::*;
use horse_gamble_program::error::HorseGambleError;
use horse_gamble_program::state::{Bet, Race, RaceState};

/// Drives a race the way the instruction handlers do, with plain token
/// balances standing in for the bettors' accounts and the escrow vault.
struct Track {
    race_key: Pubkey,
    race: Race,
    bets: Vec<Bet>,
    wallets: HashMap<Pubkey, u64>,
    vault: u64,
}

impl Track {
    fn new(authority: Pubkey, horses: &[&str]) -> Self {
        let horses = horses.iter().map(|h| h.to_string()).collect();
        Self {
            race_key: Pubkey::new_unique(),
            race: Race::new(0, authority, horses, 255, 254).unwrap(),
            bets: Vec::new(),
            wallets: HashMap::new(),
            vault: 0,
        }
    }

    fn fund(&mut self, amount: u64) -> Pubkey {
        let bettor = Pubkey::new_unique();
        self.wallets.insert(bettor, amount);
        bettor
    }

    fn place(&mut self, bettor: Pubkey, horse: u8, amount: u64) -> Result<u64> {
        let balance = self.wallets[&bettor];
        let id = self.race.record_bet(horse, amount, balance)?;
        self.bets.push(Bet::new(id, self.race_key, bettor, horse, amount, 0));
        *self.wallets.get_mut(&bettor).unwrap() -= amount;
        self.vault += amount;
        Ok(id)
    }

    fn claim(&mut self, bet_id: u64) -> Result<u64> {
        let bet = &mut self.bets[bet_id as usize];
        let bettor = bet.bettor;
        let payout = self.race.settle_claim(&self.race_key, &bettor, bet, self.vault)?;
        self.vault -= payout;
        *self.wallets.get_mut(&bettor).unwrap() += payout;
        Ok(payout)
    }

    fn balance(&self, who: &Pubkey) -> u64 {
        self.wallets[who]
    }
}

fn err(e: HorseGambleError) -> anchor_lang::error::Error {
    e.into()
}

#[test]
fn winner_takes_the_pool_and_race_settles() {
    let authority = Pubkey::new_unique();
    let mut track = Track::new(authority, &["A", "B"]);
    let bettor1 = track.fund(100);
    let bettor2 = track.fund(300);

    track.race.open(&authority).unwrap();
    let bet1 = track.place(bettor1, 0, 100).unwrap();
    let bet2 = track.place(bettor2, 1, 300).unwrap();
    track.race.close_betting(&authority).unwrap();
    track.race.resolve(&authority, 0).unwrap();

    assert_eq!(track.race.pool_per_horse[0], 100);
    assert_eq!(track.race.total_pool, 400);

    assert_eq!(track.claim(bet1).unwrap(), 400);
    assert_eq!(track.race.state, RaceState::Resolved);
    assert_eq!(track.claim(bet2).unwrap(), 0);
    assert!(track.bets[bet2 as usize].claimed);

    assert_eq!(track.race.state, RaceState::Settled);
    assert_eq!(track.race.winning_horse, Some(0));
    assert_eq!(track.balance(&bettor1), 400);
    assert_eq!(track.balance(&bettor2), 0);
    assert_eq!(track.vault, 0);
}

#[test]
fn second_claim_fails_and_moves_nothing() {
    let authority = Pubkey::new_unique();
    let mut track = Track::new(authority, &["A", "B"]);
    let winner = track.fund(50);
    let loser = track.fund(50);

    track.race.open(&authority).unwrap();
    let bet = track.place(winner, 1, 50).unwrap();
    track.place(loser, 0, 50).unwrap();
    track.race.close_betting(&authority).unwrap();
    track.race.resolve(&authority, 1).unwrap();

    assert_eq!(track.claim(bet).unwrap(), 100);
    assert_eq!(track.claim(bet).unwrap_err(), err(HorseGambleError::AlreadyClaimed));
    assert_eq!(track.balance(&winner), 100);
    assert_eq!(track.vault, 0);
    assert_eq!(track.race.total_paid_out, 100);
}

#[test]
fn claim_on_settled_race_still_reports_already_claimed() {
    let authority = Pubkey::new_unique();
    let mut track = Track::new(authority, &["A"]);
    let bettor = track.fund(10);

    track.race.open(&authority).unwrap();
    let bet = track.place(bettor, 0, 10).unwrap();
    track.race.close_betting(&authority).unwrap();
    track.race.resolve(&authority, 0).unwrap();
    track.claim(bet).unwrap();

    assert_eq!(track.race.state, RaceState::Settled);
    assert_eq!(track.claim(bet).unwrap_err(), err(HorseGambleError::AlreadyClaimed));
}

#[test]
fn payouts_plus_remainder_equal_the_pool() {
    let authority = Pubkey::new_unique();
    let mut track = Track::new(authority, &["A", "B", "C"]);
    track.race.open(&authority).unwrap();

    let stakes: [(u8, u64); 7] = [(0, 1), (0, 1), (0, 1), (1, 4), (2, 3), (1, 7), (0, 2)];
    let mut ids = Vec::new();
    for (horse, amount) in stakes {
        let bettor = track.fund(amount);
        ids.push(track.place(bettor, horse, amount).unwrap());
    }
    track.race.close_betting(&authority).unwrap();
    track.race.resolve(&authority, 0).unwrap();

    let total_pool = track.race.total_pool;
    assert_eq!(total_pool, 19);
    assert_eq!(total_pool, track.race.pool_per_horse.iter().sum::<u64>());

    let mut paid = 0;
    for id in ids {
        paid += track.claim(id).unwrap();
    }
    // 19 * 1/5 three times, 19 * 2/5 once: 3 + 3 + 3 + 7
    assert_eq!(paid, 16);
    assert!(paid <= total_pool);
    assert_eq!(paid + track.vault, total_pool);
    assert_eq!(track.race.vault_balance(), track.vault);
    assert_eq!(track.race.state, RaceState::Settled);

    let swept = track.race.record_sweep(&authority, track.vault).unwrap();
    assert_eq!(swept, 3);
    assert_eq!(track.race.vault_balance(), 0);
    assert_eq!(track.race.total_paid_out + track.race.swept, total_pool);
}

#[test]
fn cancelled_race_refunds_every_stake_exactly() {
    let authority = Pubkey::new_unique();
    let mut track = Track::new(authority, &["A", "B", "C"]);
    track.race.open(&authority).unwrap();

    let mut bettors = Vec::new();
    for (horse, amount) in [(0u8, 13u64), (1, 29), (2, 7), (1, 1)] {
        let bettor = track.fund(amount);
        let id = track.place(bettor, horse, amount).unwrap();
        bettors.push((bettor, id, amount));
    }
    track.race.close_betting(&authority).unwrap();
    track.race.cancel(&authority).unwrap();

    let mut refunded = 0;
    for (bettor, id, amount) in bettors {
        assert_eq!(track.claim(id).unwrap(), amount);
        assert_eq!(track.balance(&bettor), amount);
        refunded += amount;
    }
    assert_eq!(refunded, track.race.total_pool);
    assert_eq!(track.vault, 0);
    assert_eq!(track.race.state, RaceState::Cancelled);
    assert_eq!(track.race.winning_horse, None);
}

#[test]
fn unbacked_winner_triggers_full_refund() {
    let authority = Pubkey::new_unique();
    let mut track = Track::new(authority, &["A", "B", "C"]);
    let bettor1 = track.fund(100);
    let bettor2 = track.fund(300);

    track.race.open(&authority).unwrap();
    let bet1 = track.place(bettor1, 0, 100).unwrap();
    let bet2 = track.place(bettor2, 1, 300).unwrap();
    track.race.close_betting(&authority).unwrap();
    track.race.resolve(&authority, 2).unwrap();

    assert!(track.race.refund_all);
    assert_eq!(track.race.state, RaceState::Resolved);
    assert_eq!(track.claim(bet1).unwrap(), 100);
    assert_eq!(track.claim(bet2).unwrap(), 300);
    assert_eq!(track.race.state, RaceState::Settled);
    assert_eq!(track.vault, 0);
}

#[test]
fn betting_on_a_closed_race_leaves_pool_unchanged() {
    let authority = Pubkey::new_unique();
    let mut track = Track::new(authority, &["A", "B"]);
    let early = track.fund(10);
    let late = track.fund(10);

    track.race.open(&authority).unwrap();
    track.place(early, 0, 10).unwrap();
    track.race.close_betting(&authority).unwrap();

    assert_eq!(track.place(late, 1, 10).unwrap_err(), err(HorseGambleError::RaceNotOpen));
    assert_eq!(track.race.total_pool, 10);
    assert_eq!(track.race.pool_per_horse, vec![10, 0]);
    assert_eq!(track.balance(&late), 10);
    assert_eq!(track.vault, 10);
}

#[test]
fn total_pool_tracks_every_accepted_bet() {
    let authority = Pubkey::new_unique();
    let mut track = Track::new(authority, &["A", "B", "C", "D"]);
    track.race.open(&authority).unwrap();

    let mut accepted = 0u64;
    for i in 0..40u64 {
        let bettor = track.fund(1_000);
        let horse = (i % 5) as u8; // horse 4 does not exist
        let amount = i * 7 % 23;
        if track.place(bettor, horse, amount).is_ok() {
            accepted += amount;
        }
        assert_eq!(track.race.total_pool, accepted);
        assert_eq!(track.race.total_pool, track.race.pool_per_horse.iter().sum::<u64>());
        assert_eq!(track.vault, accepted);
    }
    assert_eq!(track.race.bet_count, track.bets.len() as u64);
    assert_eq!(track.race.claims_remaining, track.race.bet_count);
}

#[test]
fn outsiders_cannot_drive_the_race() {
    let authority = Pubkey::new_unique();
    let outsider = Pubkey::new_unique();
    let unauthorized = err(HorseGambleError::Unauthorized);
    let mut track = Track::new(authority, &["A", "B"]);

    assert_eq!(track.race.open(&outsider).unwrap_err(), unauthorized);
    track.race.open(&authority).unwrap();
    let bettor = track.fund(5);
    track.place(bettor, 0, 5).unwrap();

    assert_eq!(track.race.close_betting(&outsider).unwrap_err(), unauthorized);
    assert_eq!(track.race.state, RaceState::Open);
    track.race.close_betting(&authority).unwrap();

    assert_eq!(track.race.resolve(&outsider, 0).unwrap_err(), unauthorized);
    assert_eq!(track.race.cancel(&outsider).unwrap_err(), unauthorized);
    assert_eq!(track.race.state, RaceState::Closed);
    assert_eq!(track.race.winning_horse, None);
    assert!(!track.race.refund_all);
}

#[test]
fn bettor_cannot_stake_more_than_they_hold() {
    let authority = Pubkey::new_unique();
    let mut track = Track::new(authority, &["A", "B"]);
    let bettor = track.fund(99);
    track.race.open(&authority).unwrap();

    assert_eq!(
        track.place(bettor, 0, 100).unwrap_err(),
        err(HorseGambleError::InsufficientFunds)
    );
    assert_eq!(track.place(bettor, 0, 0).unwrap_err(), err(HorseGambleError::ZeroAmount));
    assert_eq!(track.place(bettor, 2, 10).unwrap_err(), err(HorseGambleError::InvalidHorse));
    assert_eq!(track.race.total_pool, 0);
    assert_eq!(track.balance(&bettor), 99);
}

/// Small xorshift so the generated races are the same on every run.
struct Dice(u64);

impl Dice {
    fn roll(&mut self, sides: u64) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0 % sides
    }
}

#[test]
fn generated_races_always_balance() {
    let mut dice = Dice(0x9e37_79b9_7f4a_7c15);

    for _ in 0..200 {
        let authority = Pubkey::new_unique();
        let field = ["A", "B", "C", "D", "E", "F"];
        let runners = 1 + dice.roll(field.len() as u64) as usize;
        let mut track = Track::new(authority, &field[..runners]);
        track.race.open(&authority).unwrap();

        let mut ids = Vec::new();
        for _ in 0..dice.roll(12) {
            let amount = 1 + dice.roll(1_000);
            let bettor = track.fund(amount);
            let horse = dice.roll(runners as u64) as u8;
            ids.push(track.place(bettor, horse, amount).unwrap());
        }
        track.race.close_betting(&authority).unwrap();

        let cancelled = dice.roll(5) == 0;
        if cancelled {
            track.race.cancel(&authority).unwrap();
        } else {
            let winner = dice.roll(runners as u64) as u8;
            track.race.resolve(&authority, winner).unwrap();
        }

        let total_pool = track.race.total_pool;
        let mut paid = 0;
        for id in ids {
            paid += track.claim(id).unwrap();
        }

        assert!(paid <= total_pool);
        assert_eq!(paid + track.vault, total_pool);
        assert_eq!(track.race.vault_balance(), track.vault);
        assert_eq!(track.race.claims_remaining, 0);
        if cancelled || track.race.refund_all {
            assert_eq!(paid, total_pool);
        }
        if cancelled {
            assert_eq!(track.race.state, RaceState::Cancelled);
        } else {
            assert_eq!(track.race.state, RaceState::Settled);
        }
    }
}
