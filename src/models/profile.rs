use serde::{Deserialize, Serialize};

/// Report header data. Has no effect on hour calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub company_name: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_initial: String,
    pub program: String,
    pub section: String,
    pub assigned_task: String,
}

impl UserProfile {
    /// "Lastname, Firstname M."
    pub fn display_name(&self) -> String {
        let mut name = match (self.last_name.is_empty(), self.first_name.is_empty()) {
            (false, false) => format!("{}, {}", self.last_name, self.first_name),
            (false, true) => self.last_name.clone(),
            (true, false) => self.first_name.clone(),
            (true, true) => return "Not set".to_string(),
        };
        if !self.middle_initial.is_empty() {
            name.push_str(&format!(" {}.", self.middle_initial.trim_end_matches('.')));
        }
        name
    }
}
