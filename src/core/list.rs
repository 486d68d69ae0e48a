use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::entry::LogbookEntry;
use chrono::NaiveDate;

/// Filters for the history listing.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    /// Case-insensitive match on date, description, learnings or issues.
    pub search: Option<String>,
}

pub struct ListLogic;

impl ListLogic {
    /// Matching entries, newest first.
    pub fn history<S: Store + ?Sized>(
        store: &S,
        user: &str,
        filter: &HistoryFilter,
    ) -> AppResult<Vec<LogbookEntry>> {
        let mut entries = filter_entries(store.load_entries(user)?, filter);
        entries.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
        Ok(entries)
    }
}

pub fn filter_entries(entries: Vec<LogbookEntry>, filter: &HistoryFilter) -> Vec<LogbookEntry> {
    let needle = filter
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    entries
        .into_iter()
        .filter(|e| match filter.bounds {
            Some((from, to)) => e.date.is_some_and(|d| d >= from && d <= to),
            None => true,
        })
        .filter(|e| match &needle {
            Some(n) => e.matches(n),
            None => true,
        })
        .collect()
}
