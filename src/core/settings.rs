use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::settings::AttendanceSettings;

pub struct SettingsLogic;

impl SettingsLogic {
    pub fn show<S: Store + ?Sized>(store: &S, user: &str) -> AppResult<AttendanceSettings> {
        store.load_settings(user)
    }

    /// Overwrite the user's settings wholesale.
    pub fn save<S: Store + ?Sized>(
        store: &mut S,
        user: &str,
        settings: AttendanceSettings,
    ) -> AppResult<()> {
        store.save_settings(user, &settings)?;
        store.audit(
            "settings",
            user,
            &format!(
                "time-in {} grace {} min",
                settings.scheduled_time_in.format("%H:%M"),
                settings.grace_window_minutes
            ),
        )?;
        Ok(())
    }
}
