use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::profile::UserProfile;

pub struct ProfileLogic;

impl ProfileLogic {
    pub fn show<S: Store + ?Sized>(store: &S, user: &str) -> AppResult<Option<UserProfile>> {
        store.load_profile(user)
    }

    /// Overwrite the user's profile wholesale; fields are trimmed.
    pub fn save<S: Store + ?Sized>(
        store: &mut S,
        user: &str,
        profile: UserProfile,
    ) -> AppResult<UserProfile> {
        let profile = UserProfile {
            company_name: profile.company_name.trim().to_string(),
            last_name: profile.last_name.trim().to_string(),
            first_name: profile.first_name.trim().to_string(),
            middle_initial: profile.middle_initial.trim().to_string(),
            program: profile.program.trim().to_string(),
            section: profile.section.trim().to_string(),
            assigned_task: profile.assigned_task.trim().to_string(),
        };

        store.save_profile(user, &profile)?;
        store.audit("profile", user, &profile.display_name())?;
        Ok(profile)
    }
}
