use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use super::{
    credit_winner, leaderboard, odds_evens_net_cost, wheel_net_cost, GameSummary, Leaderboard,
    SCHEMA_VERSION, UNKNOWN_WINS,
};

fn seeded_history() -> Vec<i64> {
    vec![0]
}

fn unknown_wins() -> i64 {
    UNKNOWN_WINS
}

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum DocumentInvariantError {
    #[error("win count exceeds recorded events (wins={wins}, events={events})")]
    WinCountExceedsEvents { wins: i64, events: u64 },
    #[error("leaderboard key not lowercase: {name}")]
    LeaderboardKeyNotLowercase { name: String },
}

/// The persisted statistics document. One JSON object on disk mirrors this
/// struct exactly; every request loads it in full and every mutation writes
/// it back in full.
///
/// Serde defaults describe what a *legacy* document looks like when a field
/// is absent (sentinel win counters, version 0). [`Default`] describes a
/// *fresh* document for a first run (zeroed counters, current version); the
/// two deliberately differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDocument {
    /// Schema version driving the ordered steps in [`super::migrate`].
    #[serde(default)]
    pub schema_version: u32,

    // Spinning wheel
    #[serde(default)]
    pub net_profit: i64,
    #[serde(default)]
    pub loss_streak: u32,
    #[serde(default, alias = "leaderboard_data")]
    pub leaderboard: Leaderboard,
    /// Snapshot of `net_profit` after every event, seeded with 0.
    #[serde(default = "seeded_history")]
    pub profit_history: Vec<i64>,
    #[serde(default = "unknown_wins")]
    pub total_wins: i64,

    // Odds or evens
    #[serde(default)]
    pub oe_net_profit: i64,
    #[serde(default = "seeded_history")]
    pub oe_profit_history: Vec<i64>,
    #[serde(default = "unknown_wins")]
    pub oe_total_wins: i64,
}

impl Default for StatsDocument {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            net_profit: 0,
            loss_streak: 0,
            leaderboard: Leaderboard::new(),
            profit_history: seeded_history(),
            total_wins: 0,
            oe_net_profit: 0,
            oe_profit_history: seeded_history(),
            oe_total_wins: 0,
        }
    }
}

impl StatsDocument {
    /// The casino keeps the full bet on a wheel loss.
    pub fn record_wheel_loss(&mut self, bet: i64) {
        self.net_profit = self.net_profit.saturating_add(bet);
        self.loss_streak = self.loss_streak.saturating_add(1);
        self.profit_history.push(self.net_profit);
    }

    /// The casino pays out 9x on a wheel win; the winner, when named, is
    /// credited on the leaderboard under their lowercased name.
    pub fn record_wheel_win(&mut self, bet: i64, winner: Option<&str>) {
        let cost = wheel_net_cost(bet);
        self.net_profit = self.net_profit.saturating_sub(cost);
        self.loss_streak = 0;
        self.total_wins = self.total_wins.saturating_add(1);
        self.profit_history.push(self.net_profit);

        if let Some(name) = winner.map(str::trim).filter(|name| !name.is_empty()) {
            credit_winner(&mut self.leaderboard, name, cost);
        }
    }

    pub fn record_odds_evens_loss(&mut self, bet: i64) {
        self.oe_net_profit = self.oe_net_profit.saturating_add(bet);
        self.oe_profit_history.push(self.oe_net_profit);
    }

    pub fn record_odds_evens_win(&mut self, bet: i64) {
        let cost = odds_evens_net_cost(bet);
        self.oe_net_profit = self.oe_net_profit.saturating_sub(cost);
        self.oe_total_wins = self.oe_total_wins.saturating_add(1);
        self.oe_profit_history.push(self.oe_net_profit);
    }

    pub fn wheel_summary(&self) -> GameSummary {
        GameSummary::compute(&self.profit_history, self.total_wins)
    }

    pub fn odds_evens_summary(&self) -> GameSummary {
        GameSummary::compute(&self.oe_profit_history, self.oe_total_wins)
    }

    /// Checks the invariants a migrated document must satisfy. Violations are
    /// reported, not repaired; callers decide whether to log or fail.
    pub fn validate_invariants(&self) -> Result<(), DocumentInvariantError> {
        let wheel_events = self.profit_history.len().saturating_sub(1) as u64;
        if self.total_wins > wheel_events as i64 {
            return Err(DocumentInvariantError::WinCountExceedsEvents {
                wins: self.total_wins,
                events: wheel_events,
            });
        }
        let oe_events = self.oe_profit_history.len().saturating_sub(1) as u64;
        if self.oe_total_wins > oe_events as i64 {
            return Err(DocumentInvariantError::WinCountExceedsEvents {
                wins: self.oe_total_wins,
                events: oe_events,
            });
        }
        if let Some(name) = self
            .leaderboard
            .keys()
            .find(|name| **name != name.to_lowercase())
        {
            return Err(DocumentInvariantError::LeaderboardKeyNotLowercase {
                name: name.clone(),
            });
        }
        Ok(())
    }

    /// Entries sorted by winnings descending for display.
    pub fn ranked_leaderboard(&self) -> Vec<(&str, i64)> {
        leaderboard::ranked(&self.leaderboard)
    }
}
