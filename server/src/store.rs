use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use wheelhouse_types::stats::{migrate, StatsDocument};

/// Disk-backed store for the statistics document. The whole document is read
/// on every load and rewritten on every save; there are no partial updates.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted document, falling back to fresh defaults when the
    /// file is missing or unreadable. Outstanding schema migrations run
    /// before the document is returned and are persisted immediately.
    pub fn load(&self) -> StatsDocument {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return StatsDocument::default();
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "stats document unreadable; starting fresh"
                );
                return StatsDocument::default();
            }
        };

        let mut doc: StatsDocument = match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "stats document malformed; starting fresh"
                );
                return StatsDocument::default();
            }
        };

        let applied = migrate(&mut doc);
        if !applied.is_empty() {
            info!(steps = ?applied, "stats document migrated");
            if let Err(err) = self.save(&doc) {
                warn!(%err, "failed to persist migrated stats document");
            }
        }

        if let Err(err) = doc.validate_invariants() {
            warn!(%err, "stats document violates invariants");
        }

        doc
    }

    /// Serializes the full document and overwrites the file, creating parent
    /// directories as needed.
    pub fn save(&self, doc: &StatsDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create data dir {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(doc).context("serialize stats document")?;
        fs::write(&self.path, raw).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheelhouse_types::stats::{SCHEMA_VERSION, UNKNOWN_WINS};

    fn store_in(dir: &tempfile::TempDir) -> Store {
        Store::new(dir.path().join("stats").join("casino_data.json"))
    }

    #[test]
    fn missing_file_loads_fresh_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let doc = store.load();
        assert_eq!(doc, StatsDocument::default());
        // A bare load never creates the file.
        assert!(!store.path().exists());
    }

    #[test]
    fn malformed_file_loads_fresh_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.load(), StatsDocument::default());
    }

    #[test]
    fn save_creates_parent_directories_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = StatsDocument::default();
        doc.record_wheel_loss(25_000);
        doc.record_wheel_win(25_000, Some("Ann"));
        store.save(&doc).unwrap();

        assert_eq!(store.load(), doc);
    }

    #[test]
    fn legacy_document_is_migrated_and_persisted_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"{
                "net_profit": -175000,
                "loss_streak": 0,
                "leaderboard_data": {"Ann": 200000},
                "profit_history": [0, 25000, -175000]
            }"#,
        )
        .unwrap();

        let doc = store.load();
        assert_eq!(doc.schema_version, SCHEMA_VERSION);
        assert_eq!(doc.total_wins, 1);
        assert_eq!(doc.oe_total_wins, 0);
        assert_eq!(doc.leaderboard.get("ann"), Some(&200_000));

        // The migrated form reached the disk: a raw reparse carries no
        // sentinels and the legacy leaderboard key is gone.
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"schema_version\": 3"));
        assert!(raw.contains("\"leaderboard\""));
        assert!(!raw.contains("leaderboard_data"));
        let reparsed: StatsDocument = serde_json::from_str(&raw).unwrap();
        assert_ne!(reparsed.total_wins, UNKNOWN_WINS);
        assert_eq!(reparsed, doc);
    }
}
