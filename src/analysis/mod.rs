pub mod classify;
pub mod frequency;
pub mod guards;
