use super::{ODDS_EVENS_PAYOUT_MULTIPLIER, WHEEL_PAYOUT_MULTIPLIER};

/// Net cost to the casino when the wheel pays out: the full 9x payout less
/// the player's returned stake.
pub fn wheel_net_cost(bet: i64) -> i64 {
    bet.saturating_mul(WHEEL_PAYOUT_MULTIPLIER).saturating_sub(bet)
}

/// Net cost to the casino when odds-or-evens pays out. The player profit is
/// (1.8 - 1) x bet, rounded so monetary fields stay integral.
pub fn odds_evens_net_cost(bet: i64) -> i64 {
    ((ODDS_EVENS_PAYOUT_MULTIPLIER - 1.0) * bet as f64).round() as i64
}

/// Derived per-game statistics for the dashboard. Computed on demand, never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub spins: u64,
    pub wins: u64,
    pub losses: u64,
    pub win_percent: u32,
    pub loss_percent: u32,
}

impl GameSummary {
    /// Computes spins, losses, and rounded percentages from a profit history
    /// and a win counter. The leading history entry is the seed value, not an
    /// event, so `spins = len - 1`.
    pub fn compute(history: &[i64], total_wins: i64) -> Self {
        let spins = history.len().saturating_sub(1) as u64;
        let wins = total_wins.max(0) as u64;
        if spins == 0 {
            return Self {
                spins: 0,
                wins,
                losses: 0,
                win_percent: 0,
                loss_percent: 0,
            };
        }

        let losses = spins.saturating_sub(wins);
        let win_percent = ((wins * 100 + spins / 2) / spins) as u32;
        let loss_percent = 100u32.saturating_sub(win_percent);
        Self {
            spins,
            wins,
            losses,
            win_percent,
            loss_percent,
        }
    }
}
