/// Spinning wheel payout multiplier (the player receives 9x the bet on a win).
pub const WHEEL_PAYOUT_MULTIPLIER: i64 = 9;

/// Odds-or-evens payout multiplier (the player receives 1.8x the bet on a win).
pub const ODDS_EVENS_PAYOUT_MULTIPLIER: f64 = 1.8;

/// Bet applied when a form submits a missing or non-numeric amount.
pub const DEFAULT_BET_AMOUNT: i64 = 25_000;

/// Sentinel for a win counter that was never recorded. Documents written
/// before the counter existed deserialize with this value and are backfilled
/// by migration.
pub const UNKNOWN_WINS: i64 = -1;
