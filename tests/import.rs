use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use quiltkeeper::backup::{self, BackupError};
use quiltkeeper::{Category, QuiltStore};
use serde_json::json;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

#[test]
fn partially_valid_backup_replaces_the_store_and_counts_skips() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("projects.json");

    let mut store = QuiltStore::load_path(&path, today());
    store.upsert(quiltkeeper::ProjectRecord::from_json(
        &json!({ "id": "q_old", "title": "superseded" }),
        today(),
    ));
    store.save()?;

    let payload = json!([
        { "title": "Log Cabin", "category": "in-progress" },
        { "title": "" },
        { "title": "Nine Patch", "isFavorite": true },
        { "notes": "forgot the title" },
        { "title": "Flying Geese", "category": "wip" },
    ])
    .to_string();

    let outcome = backup::import(&payload, today())?;
    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.skipped, 2);

    store.replace_all(outcome.records);
    store.save()?;

    let reloaded = QuiltStore::load_path(&path, today());
    assert_eq!(reloaded.records().len(), 3);
    assert!(reloaded.get("q_old").is_none(), "import replaces, not merges");
    assert!(reloaded.has_favorites());
    Ok(())
}

#[test]
fn rejected_imports_leave_the_existing_store_untouched() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("projects.json");

    let mut store = QuiltStore::load_path(&path, today());
    store.upsert(quiltkeeper::ProjectRecord::from_json(
        &json!({ "id": "q_keep", "title": "still here" }),
        today(),
    ));
    store.save()?;
    let before = std::fs::read(&path)?;

    assert!(matches!(
        backup::import("{}", today()),
        Err(BackupError::NotAnArray)
    ));
    assert!(matches!(
        backup::import("definitely not json", today()),
        Err(BackupError::InvalidJson(_))
    ));
    assert!(matches!(
        backup::import(r#"[{"title":"   "}]"#, today()),
        Err(BackupError::NoValidEntries)
    ));

    // The caller never reached replace_all, so nothing changed on disk.
    assert_eq!(std::fs::read(&path)?, before);
    let reloaded = QuiltStore::load_path(&path, today());
    assert_eq!(reloaded.records().len(), 1);
    assert_eq!(reloaded.records()[0].id, "q_keep");
    Ok(())
}

#[test]
fn import_normalizes_entries_like_the_editor_would() -> Result<()> {
    let payload = json!([
        {
            "title": "  Memory Quilt  ",
            "category": "completed",
            "deadline": "2030-01-01",
            "completedDate": "2025-05-20"
        },
        { "title": "Mystery", "category": "someday", "isCharity": true },
    ])
    .to_string();

    let outcome = backup::import(&payload, today())?;

    let done = &outcome.records[0];
    assert_eq!(done.title, "Memory Quilt");
    assert_eq!(done.category, Category::Completed);
    assert_eq!(done.deadline, None, "future deadline cleared for completed");
    assert_eq!(
        done.completed_date,
        Some(NaiveDate::from_ymd_opt(2025, 5, 20).expect("valid date"))
    );

    let mystery = &outcome.records[1];
    assert_eq!(mystery.category, Category::Upcoming, "unknown category defaults");
    assert_eq!(mystery.timestamp, today(), "missing stamp defaults to today");
    assert!(mystery.is_charity);
    assert!(mystery.id.starts_with("q_"), "missing id generated");
    Ok(())
}

#[test]
fn exported_backup_imports_back_unchanged() -> Result<()> {
    let today = today();
    let records = vec![
        quiltkeeper::ProjectRecord::from_json(
            &json!({
                "id": "q_a",
                "title": "Star Block",
                "category": "in-progress",
                "notes": "blue and white",
                "deadline": "2025-09-15",
                "isFavorite": true
            }),
            today,
        ),
        quiltkeeper::ProjectRecord::from_json(
            &json!({ "id": "q_b", "title": "Charity Throw", "isCharity": true }),
            today,
        ),
    ];

    let text = backup::export_pretty(&records)?;
    let outcome = backup::import(&text, today)?;
    assert_eq!(outcome.skipped, 0);
    assert_eq!(outcome.records, records);
    Ok(())
}
