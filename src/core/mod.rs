pub mod add;
pub mod attendance;
pub mod calculator;
pub mod del;
pub mod edit;
pub mod export;
pub mod list;
pub mod log;
pub mod profile;
pub mod settings;
pub mod summary;
