use crate::record::{Category, ProjectRecord};
use crate::statics;
use chrono::NaiveDate;

/// Category selection for the gallery and favorites views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_CHOICES: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Upcoming),
        CategoryFilter::Only(Category::InProgress),
        CategoryFilter::Only(Category::Completed),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => statics::EN_FILTER_ALL,
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

fn matches(record: &ProjectRecord, filter: CategoryFilter, today: NaiveDate) -> bool {
    match filter {
        CategoryFilter::All => true,
        // The upcoming view doubles as "due soon": open projects with a
        // deadline still ahead show here regardless of their own category.
        CategoryFilter::Only(Category::Upcoming) => {
            record.category == Category::Upcoming || record.is_due_soon(today)
        }
        CategoryFilter::Only(category) => record.category == category,
    }
}

/// Store order is preserved; no filter re-sorts.
pub fn by_category(
    records: &[ProjectRecord],
    filter: CategoryFilter,
    today: NaiveDate,
) -> Vec<&ProjectRecord> {
    records.iter().filter(|r| matches(r, filter, today)).collect()
}

pub fn charity(records: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    records.iter().filter(|r| r.is_charity).collect()
}

pub fn favorites(
    records: &[ProjectRecord],
    filter: CategoryFilter,
    today: NaiveDate,
) -> Vec<&ProjectRecord> {
    records
        .iter()
        .filter(|r| r.is_favorite && matches(r, filter, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{CategoryFilter, by_category, charity, favorites};
    use crate::record::{Category, ProjectRecord};
    use chrono::NaiveDate;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn record(id: &str, category: &str) -> ProjectRecord {
        ProjectRecord::from_json(&json!({ "id": id, "title": id, "category": category }), today())
    }

    #[test]
    fn upcoming_includes_due_soon_from_other_categories() {
        let mut wip = record("wip", "in-progress");
        wip.deadline = Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        let mut done = record("done", "completed");
        done.deadline = Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        let plain = record("plain", "upcoming");
        let records = vec![wip, done, plain];

        let upcoming = by_category(
            &records,
            CategoryFilter::Only(Category::Upcoming),
            today(),
        );
        let ids: Vec<_> = upcoming.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["wip", "plain"], "due-soon in, completed out");
    }

    #[test]
    fn exact_filters_and_passthrough_keep_order() {
        let records = vec![
            record("a", "completed"),
            record("b", "in-progress"),
            record("c", "completed"),
        ];

        let all = by_category(&records, CategoryFilter::All, today());
        assert_eq!(all.len(), 3);

        let done = by_category(&records, CategoryFilter::Only(Category::Completed), today());
        let ids: Vec<_> = done.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn favorites_compose_with_the_category_filter() {
        let mut fav_done = record("fav_done", "completed");
        fav_done.is_favorite = true;
        let mut fav_wip = record("fav_wip", "in-progress");
        fav_wip.is_favorite = true;
        let mut char_only = record("char", "upcoming");
        char_only.is_charity = true;
        let records = vec![fav_done, fav_wip, char_only];

        let favs = favorites(&records, CategoryFilter::All, today());
        assert_eq!(favs.len(), 2);

        let fav_completed = favorites(
            &records,
            CategoryFilter::Only(Category::Completed),
            today(),
        );
        assert_eq!(fav_completed[0].id, "fav_done");
        assert_eq!(fav_completed.len(), 1);

        let charities = charity(&records);
        assert_eq!(charities[0].id, "char");
        assert_eq!(charities.len(), 1);
    }
}
