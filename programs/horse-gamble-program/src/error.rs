use anchor_lang::prelude::*;

#[error_code]
pub enum HorseGambleError {
    #[msg("Operation is not legal in the race's current state")]
    InvalidStateTransition,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Horse is not entered in this race")]
    InvalidHorse,
    #[msg("Winning horse is not entered in this race")]
    InvalidWinner,
    #[msg("Bet amount must be greater than zero")]
    ZeroAmount,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Bet already claimed")]
    AlreadyClaimed,
    #[msg("Bet does not belong to this race")]
    BetNotInRace,
    #[msg("Race is not open for betting")]
    RaceNotOpen,
    #[msg("Race is neither resolved nor cancelled")]
    RaceNotResolved,
    #[msg("Race needs at least one horse")]
    EmptyHorseList,
    #[msg("Horse entered twice")]
    DuplicateHorse,
    #[msg("Too many horses")]
    TooManyHorses,
    #[msg("Horse name is empty or too long")]
    HorseNameTooLong,
    #[msg("Race is not settled")]
    RaceNotSettled,
    #[msg("Vault is empty")]
    VaultEmpty,
}
