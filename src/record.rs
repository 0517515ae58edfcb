use crate::statics;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Calendar dates are stored as plain `YYYY-MM-DD` strings on the wire.
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Lifecycle status of a project.
/// Older backups used `wip` and `not-started`; those map onto the canonical
/// three values, and anything unrecognized falls back to `Upcoming`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Upcoming,
    InProgress,
    Completed,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Upcoming, Category::InProgress, Category::Completed];

    /// Total normalization: never fails, idempotent over its own output.
    pub fn normalize(raw: &str) -> Category {
        match raw.trim() {
            "in-progress" | "wip" => Category::InProgress,
            "completed" => Category::Completed,
            _ => Category::Upcoming,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Upcoming => "upcoming",
            Category::InProgress => "in-progress",
            Category::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Upcoming => statics::EN_CATEGORY_UPCOMING,
            Category::InProgress => statics::EN_CATEGORY_IN_PROGRESS,
            Category::Completed => statics::EN_CATEGORY_COMPLETED,
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One quilt project entry. Wire field names stay camelCase so backups
/// interchange with files written by earlier releases.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub notes: String,
    #[serde(with = "opt_date")]
    pub deadline: Option<NaiveDate>,
    #[serde(with = "opt_date")]
    pub completed_date: Option<NaiveDate>,
    pub photo: Option<String>,
    pub is_charity: bool,
    pub is_favorite: bool,
    #[serde(with = "req_date")]
    pub timestamp: NaiveDate,
}

impl ProjectRecord {
    /// Rebuild a record from one untyped JSON entry, coercing fields the way
    /// the persisted format evolved: category normalized, flags coerced to
    /// bool, blank or malformed dates treated as unset, missing id or
    /// creation stamp filled in.
    pub fn from_json(entry: &Value, today: NaiveDate) -> ProjectRecord {
        let text = |key: &str| {
            entry
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let flag = |key: &str| entry.get(key).is_some_and(truthy);
        let date = |key: &str| entry.get(key).and_then(Value::as_str).and_then(parse_date);

        let id = text("id");
        let id = if id.trim().is_empty() {
            new_record_id()
        } else {
            id.trim().to_string()
        };

        ProjectRecord {
            id,
            title: text("title").trim().to_string(),
            category: Category::normalize(&text("category")),
            notes: text("notes"),
            deadline: date("deadline"),
            completed_date: date("completedDate"),
            photo: entry
                .get("photo")
                .and_then(Value::as_str)
                .map(str::to_string),
            is_charity: flag("isCharity"),
            is_favorite: flag("isFavorite"),
            timestamp: date("timestamp").unwrap_or(today),
        }
    }

    /// Due-soon rule: not completed, and the deadline is still ahead.
    pub fn is_due_soon(&self, today: NaiveDate) -> bool {
        self.category != Category::Completed && self.deadline.is_some_and(|d| d > today)
    }

    /// A completed project may not keep a future deadline. Returns whether
    /// the deadline was dropped.
    pub fn clear_conflicting_deadline(&mut self, today: NaiveDate) -> bool {
        if self.category == Category::Completed && self.deadline.is_some_and(|d| d > today) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

/// Flag coercion keeps the loose truthiness of older files: absent, `false`,
/// zero, and the empty string are off; anything else is on.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FMT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn new_record_id() -> String {
    format!("q_{}", uuid::Uuid::new_v4().simple())
}

/// Optional dates keep the legacy encoding: empty string when unset.
mod opt_date {
    use super::DATE_FMT;
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FMT).to_string()),
            None => serializer.serialize_str(""),
        }
    }
}

mod req_date {
    use super::DATE_FMT;
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(DATE_FMT).to_string())
    }
}
