pub mod initialize;
pub mod create_race;
pub mod open_race;
pub mod close_race;
pub mod resolve_race;
pub mod cancel_race;
pub mod place_bet;
pub mod claim;
pub mod sweep_vault;
pub mod queries;

pub use initialize::*;
pub use create_race::*;
pub use open_race::*;
pub use close_race::*;
pub use resolve_race::*;
pub use cancel_race::*;
pub use place_bet::*;
pub use claim::*;
pub use sweep_vault::*;
pub use queries::*;
