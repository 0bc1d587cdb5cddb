use std::collections::BTreeMap;

/// Cumulative winnings paid per player, keyed by lowercase name. The display
/// layer title-cases names; storage never does.
pub type Leaderboard = BTreeMap<String, i64>;

/// Credits a payout to a player. The name is trimmed and lowercased before it
/// becomes a key, so "John" and "john" accumulate into one entry.
pub fn credit_winner(leaderboard: &mut Leaderboard, name: &str, winnings: i64) {
    let entry = leaderboard.entry(name.trim().to_lowercase()).or_insert(0);
    *entry = entry.saturating_add(winnings);
}

/// Folds every key to lowercase, summing winnings for colliding keys.
/// Returns whether anything changed.
pub fn normalize(leaderboard: &mut Leaderboard) -> bool {
    if leaderboard.keys().all(|name| *name == name.to_lowercase()) {
        return false;
    }

    let mut normalized = Leaderboard::new();
    for (name, winnings) in std::mem::take(leaderboard) {
        let entry = normalized.entry(name.to_lowercase()).or_insert(0);
        *entry = entry.saturating_add(winnings);
    }
    *leaderboard = normalized;
    true
}

/// Entries sorted by winnings descending, name ascending on ties.
pub fn ranked(leaderboard: &Leaderboard) -> Vec<(&str, i64)> {
    let mut entries: Vec<(&str, i64)> = leaderboard
        .iter()
        .map(|(name, winnings)| (name.as_str(), *winnings))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
