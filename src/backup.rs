use crate::record::{ProjectRecord, format_date};
use crate::statics;
use anyhow::Context;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Why an import was rejected outright. Partially valid payloads are not an
/// error; they surface as a skip count in `ImportOutcome`.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("the file does not contain valid JSON")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a list of quilt projects")]
    NotAnArray,
    #[error("no valid projects found in that backup")]
    NoValidEntries,
}

#[derive(Debug)]
pub struct ImportOutcome {
    pub records: Vec<ProjectRecord>,
    pub skipped: usize,
}

/// The full store as pretty-printed JSON (2-space indent), ready to hand to
/// a save dialog.
pub fn export_pretty(records: &[ProjectRecord]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(records).context("encoding backup")
}

pub fn export_file_name(today: NaiveDate) -> String {
    format!("{}-{}.json", statics::EXPORT_PREFIX, format_date(today))
}

/// Parse a backup file. Entries without a usable title are skipped and
/// counted; surviving entries get the usual lenient rebuild, plus two import
/// guarantees: a completed entry never keeps a future deadline, and ids stay
/// unique even if the file repeats them.
pub fn import(text: &str, today: NaiveDate) -> Result<ImportOutcome, BackupError> {
    let payload: Value = serde_json::from_str(text)?;
    let Value::Array(entries) = payload else {
        return Err(BackupError::NotAnArray);
    };

    let mut seen_ids = HashSet::new();
    let mut skipped = 0usize;
    let mut records = Vec::with_capacity(entries.len());
    for entry in &entries {
        let has_title = entry
            .get("title")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.trim().is_empty());
        if !has_title {
            skipped += 1;
            continue;
        }

        let mut record = ProjectRecord::from_json(entry, today);
        record.clear_conflicting_deadline(today);
        if !seen_ids.insert(record.id.clone()) {
            record.id = crate::record::new_record_id();
            seen_ids.insert(record.id.clone());
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(BackupError::NoValidEntries);
    }

    Ok(ImportOutcome { records, skipped })
}
