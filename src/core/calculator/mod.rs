pub mod report;
pub mod shift;
