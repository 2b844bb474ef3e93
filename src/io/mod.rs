pub mod reports;
pub mod walker;
