use crate::record::ProjectRecord;
use crate::statics;
use anyhow::Context;
use chrono::NaiveDate;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Whether an upsert inserted a fresh record or replaced an existing one.
/// Drives the wording of the confirmation banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
}

/// The full project list plus the file it persists to.
///
/// Loading never fails: a missing file, unreadable bytes, invalid JSON, or a
/// non-array payload all reset to an empty list. Saving writes the whole list
/// back; a write failure is reportable but leaves the in-memory state intact.
#[derive(Debug, Clone)]
pub struct QuiltStore {
    path: PathBuf,
    records: Vec<ProjectRecord>,
}

impl QuiltStore {
    /// The per-user store location, under the home directory.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("USERPROFILE")
            .or_else(|| std::env::var_os("HOME"))
            .map(PathBuf::from)?;

        Some(home.join(statics::STORE_DIR).join(statics::STORE_FILE))
    }

    pub fn load_path(path: &Path, today: NaiveDate) -> Self {
        let entries = fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .and_then(|value| match value {
                Value::Array(entries) => Some(entries),
                _ => None,
            })
            .unwrap_or_default();

        let records = entries
            .iter()
            .map(|entry| ProjectRecord::from_json(entry, today))
            .collect();

        Self {
            path: path.to_path_buf(),
            records,
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {parent:?}"))?;
        }
        let text = serde_json::to_string(&self.records).context("encoding project list")?;
        fs::write(&self.path, text).with_context(|| format!("writing {:?}", self.path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn has_favorites(&self) -> bool {
        self.records.iter().any(|r| r.is_favorite)
    }

    /// Replace in place when the id already exists, else prepend so the list
    /// stays most-recent-first.
    pub fn upsert(&mut self, record: ProjectRecord) -> UpsertOutcome {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record;
                UpsertOutcome::Updated
            }
            None => {
                self.records.insert(0, record);
                UpsertOutcome::Added
            }
        }
    }

    /// Returns false (and touches nothing) when the id is absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Flips the flag and returns its new value; None when the id is absent.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.is_favorite = !record.is_favorite;
        Some(record.is_favorite)
    }

    /// Wholesale replacement, used by the import flow.
    pub fn replace_all(&mut self, records: Vec<ProjectRecord>) {
        self.records = records;
    }
}

#[cfg(test)]
mod tests {
    use super::{QuiltStore, UpsertOutcome};
    use crate::record::ProjectRecord;
    use chrono::NaiveDate;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn record(id: &str, title: &str) -> ProjectRecord {
        ProjectRecord::from_json(&json!({ "id": id, "title": title }), today())
    }

    #[test]
    fn load_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = QuiltStore::load_path(&dir.path().join("nope.json"), today());
        assert!(store.records().is_empty());
    }

    #[test]
    fn load_corrupt_or_non_array_starts_empty() {
        let dir = tempfile::tempdir().unwrap();

        let garbled = dir.path().join("garbled.json");
        std::fs::write(&garbled, b"{ not json").unwrap();
        assert!(QuiltStore::load_path(&garbled, today()).records().is_empty());

        let object = dir.path().join("object.json");
        std::fs::write(&object, b"{\"id\":\"q_1\"}").unwrap();
        assert!(QuiltStore::load_path(&object, today()).records().is_empty());
    }

    #[test]
    fn upsert_prepends_new_and_replaces_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = QuiltStore::load_path(&dir.path().join("s.json"), today());

        assert_eq!(store.upsert(record("q_a", "first")), UpsertOutcome::Added);
        assert_eq!(store.upsert(record("q_b", "second")), UpsertOutcome::Added);
        assert_eq!(
            store.records().iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["q_b", "q_a"],
            "newest first"
        );

        assert_eq!(
            store.upsert(record("q_a", "renamed")),
            UpsertOutcome::Updated
        );
        assert_eq!(store.records()[1].title, "renamed");
        assert_eq!(store.records().len(), 2, "update keeps position, not a copy");
    }

    #[test]
    fn remove_and_toggle_report_absent_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = QuiltStore::load_path(&dir.path().join("s.json"), today());
        store.upsert(record("q_a", "only"));

        assert!(!store.remove("q_missing"));
        assert_eq!(store.toggle_favorite("q_missing"), None);
        assert_eq!(store.records().len(), 1);

        assert_eq!(store.toggle_favorite("q_a"), Some(true));
        assert!(store.has_favorites());
        assert!(store.remove("q_a"));
        assert!(store.records().is_empty());
    }
}
