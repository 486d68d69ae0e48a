//! Per-user key-value persistence.
//!
//! Every collection is read whole and written whole: callers load the full
//! list, build the new list in memory, and commit it with one replace.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::attendance::AttendanceRecord;
use crate::models::entry::LogbookEntry;
use crate::models::profile::UserProfile;
use crate::models::settings::AttendanceSettings;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Logbook,
    Settings,
    Profile,
    Attendance,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Logbook => "logbook",
            StoreKey::Settings => "attendanceSettings",
            StoreKey::Profile => "userProfile",
            StoreKey::Attendance => "attendance",
        }
    }
}

pub trait Store {
    fn get_raw(&self, user: &str, key: StoreKey) -> AppResult<Option<String>>;

    /// Replace the whole value stored under `key` for `user`.
    fn put_raw(&mut self, user: &str, key: StoreKey, value: &str) -> AppResult<()>;

    /// Append an operation to the audit trail. No-op unless the store keeps one.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }

    fn load_entries(&self, user: &str) -> AppResult<Vec<LogbookEntry>> {
        Ok(load_json(self, user, StoreKey::Logbook)?.unwrap_or_default())
    }

    fn save_entries(&mut self, user: &str, entries: &[LogbookEntry]) -> AppResult<()> {
        save_json(self, user, StoreKey::Logbook, &entries)
    }

    /// Stored settings, or the defaults (08:00 / 30 min) when never saved.
    fn load_settings(&self, user: &str) -> AppResult<AttendanceSettings> {
        Ok(load_json(self, user, StoreKey::Settings)?.unwrap_or_default())
    }

    fn save_settings(&mut self, user: &str, settings: &AttendanceSettings) -> AppResult<()> {
        save_json(self, user, StoreKey::Settings, settings)
    }

    fn load_profile(&self, user: &str) -> AppResult<Option<UserProfile>> {
        load_json(self, user, StoreKey::Profile)
    }

    fn save_profile(&mut self, user: &str, profile: &UserProfile) -> AppResult<()> {
        save_json(self, user, StoreKey::Profile, profile)
    }

    fn load_attendance(&self, user: &str) -> AppResult<Vec<AttendanceRecord>> {
        Ok(load_json(self, user, StoreKey::Attendance)?.unwrap_or_default())
    }

    fn save_attendance(&mut self, user: &str, records: &[AttendanceRecord]) -> AppResult<()> {
        save_json(self, user, StoreKey::Attendance, &records)
    }
}

fn load_json<S, T>(store: &S, user: &str, key: StoreKey) -> AppResult<Option<T>>
where
    S: Store + ?Sized,
    T: DeserializeOwned,
{
    match store.get_raw(user, key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn save_json<S, T>(store: &mut S, user: &str, key: StoreKey, value: &T) -> AppResult<()>
where
    S: Store + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.put_raw(user, key, &raw)
}

/// SQLite-backed store; one `kv_store` row per (user, key).
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl Store for SqliteStore {
    fn get_raw(&self, user: &str, key: StoreKey) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE user_id = ?1 AND key = ?2")?;

        let value = stmt
            .query_row(params![user, key.as_str()], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn put_raw(&mut self, user: &str, key: StoreKey, value: &str) -> AppResult<()> {
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO kv_store (user_id, key, value, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(user_id, key) DO UPDATE
                 SET value = excluded.value, updated_at = excluded.updated_at",
                params![user, key.as_str(), value, Local::now().to_rfc3339()],
            )?;
            tx.commit()?;
            Ok(())
        })?;

        tracing::debug!(user, key = key.as_str(), bytes = value.len(), "stored value");
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<(String, StoreKey), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get_raw(&self, user: &str, key: StoreKey) -> AppResult<Option<String>> {
        Ok(self.values.get(&(user.to_string(), key)).cloned())
    }

    fn put_raw(&mut self, user: &str, key: StoreKey, value: &str) -> AppResult<()> {
        self.values
            .insert((user.to_string(), key), value.to_string());
        Ok(())
    }
}
