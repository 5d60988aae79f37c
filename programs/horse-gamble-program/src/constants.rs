pub const PROGRAM_STATE_SEED: &[u8] = b"program_state";
pub const RACE_SEED: &[u8] = b"race";
pub const VAULT_SEED: &[u8] = b"vault";
pub const BET_SEED: &[u8] = b"bet";

pub const MAX_HORSES: usize = 16;
pub const MAX_HORSE_NAME_LEN: usize = 32;
