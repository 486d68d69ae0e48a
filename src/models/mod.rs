pub mod attendance;
pub mod entry;
pub mod hhmm;
pub mod profile;
pub mod settings;
