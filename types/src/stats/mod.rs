//! Betting statistics domain types.
//!
//! Defines the persisted stats document, per-game payout math, schema
//! migrations, and display helpers used by the server and its dashboard.

mod constants;
mod display;
mod document;
mod game;
mod leaderboard;
mod migrate;

pub use constants::*;
pub use display::*;
pub use document::*;
pub use game::*;
pub use leaderboard::*;
pub use migrate::*;
