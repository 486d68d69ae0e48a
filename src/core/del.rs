use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogbookEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove entry `id`, returning it.
    pub fn apply<S: Store + ?Sized>(store: &mut S, user: &str, id: i64) -> AppResult<LogbookEntry> {
        let mut entries = store.load_entries(user)?;

        let idx = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::EntryNotFound(id))?;

        let removed = entries.remove(idx);
        store.save_entries(user, &entries)?;

        store.audit("del", &removed.date_str(), &format!("Deleted entry id {id}"))?;
        tracing::info!(user, id, "entry deleted");

        Ok(removed)
    }

    /// Look up entry `id` without removing it (for confirmation prompts).
    pub fn find<S: Store + ?Sized>(store: &S, user: &str, id: i64) -> AppResult<LogbookEntry> {
        store
            .load_entries(user)?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(AppError::EntryNotFound(id))
    }
}
