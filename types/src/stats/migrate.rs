use super::{leaderboard, wheel_net_cost, StatsDocument, DEFAULT_BET_AMOUNT, UNKNOWN_WINS};

/// Version a freshly written document carries. Bump when appending to
/// [`MIGRATIONS`].
pub const SCHEMA_VERSION: u32 = 3;

/// One idempotent migration step. Steps run in ascending `target` order;
/// completing a step stamps the document with its target version.
struct Migration {
    target: u32,
    name: &'static str,
    apply: fn(&mut StatsDocument),
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        target: 1,
        name: "normalize-leaderboard",
        apply: normalize_leaderboard,
    },
    Migration {
        target: 2,
        name: "backfill-wheel-wins",
        apply: backfill_wheel_wins,
    },
    Migration {
        target: 3,
        name: "init-odds-evens-wins",
        apply: init_odds_evens_wins,
    },
];

/// Runs every outstanding migration and returns the names of the steps that
/// ran. Callers persist the document when the list is non-empty. Running the
/// chain on an up-to-date document is a no-op.
pub fn migrate(doc: &mut StatsDocument) -> Vec<&'static str> {
    let mut applied = Vec::new();
    for migration in MIGRATIONS {
        if doc.schema_version < migration.target {
            (migration.apply)(doc);
            doc.schema_version = migration.target;
            applied.push(migration.name);
        }
    }
    applied
}

/// Folds leaderboard keys to lowercase, merging entries that differed only
/// in case.
fn normalize_leaderboard(doc: &mut StatsDocument) {
    leaderboard::normalize(&mut doc.leaderboard);
}

/// Recovers the wheel win counter for documents that predate it by replaying
/// the profit history. Every recorded bet was the default amount at the time
/// the counter was introduced, so a step down by exactly the default win
/// cost counts as a win; wins placed at other bet sizes are misclassified.
fn backfill_wheel_wins(doc: &mut StatsDocument) {
    if doc.total_wins != UNKNOWN_WINS {
        return;
    }
    let historical_cost = wheel_net_cost(DEFAULT_BET_AMOUNT);
    doc.total_wins = doc
        .profit_history
        .windows(2)
        .filter(|step| step[0].saturating_sub(step[1]) == historical_cost)
        .count() as i64;
}

/// The odds-or-evens counter arrived with the game itself, so an absent
/// value means no games were played yet.
fn init_odds_evens_wins(doc: &mut StatsDocument) {
    if doc.oe_total_wins == UNKNOWN_WINS {
        doc.oe_total_wins = 0;
    }
}
