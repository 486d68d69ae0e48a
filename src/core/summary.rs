use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::entry::LogbookEntry;
use crate::utils::time::round2;

/// Dashboard figures over the whole logbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_hours: f64,
    pub total_days: usize,
    pub adjusted_days: usize,
    pub recent: Vec<LogbookEntry>,
}

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn build<S: Store + ?Sized>(store: &S, user: &str, recent: usize) -> AppResult<Summary> {
        Ok(summarize(&store.load_entries(user)?, recent))
    }
}

/// Totals plus the `recent` newest entries (by date, then creation order).
pub fn summarize(entries: &[LogbookEntry], recent: usize) -> Summary {
    let total_hours = round2(entries.iter().map(LogbookEntry::billable_hours).sum());

    let mut newest = entries.to_vec();
    newest.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
    newest.truncate(recent);

    Summary {
        total_hours,
        total_days: entries.len(),
        adjusted_days: entries.iter().filter(|e| e.was_adjusted).count(),
        recent: newest,
    }
}
